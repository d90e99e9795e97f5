use chrono::Utc;
use opsfabric_core::{CustomerId, OrderId, VehicleId};
use opsfabric_delivery::{Coordinates, RouteOptimizer, Shipment};

fn geocoded(lat: f64, lon: f64) -> Shipment {
    let mut s = Shipment::new(
        OrderId::new(),
        CustomerId::new(),
        "Calle 1",
        "Bogotá",
        "CO",
        Utc::now().date_naive(),
    )
    .unwrap();
    s.set_coordinates(Coordinates::new(lat, lon));
    s
}

fn ungeocoded() -> Shipment {
    Shipment::new(OrderId::new(), CustomerId::new(), "Calle 1", "Bogotá", "CO", Utc::now().date_naive()).unwrap()
}

/// S6: 2 vehicles, 4 geocoded shipments split across two geographic
/// clusters (Bogotá / Medellín), plus 2 ungeocoded shipments that must
/// never appear in a result and must not affect determinism.
#[test]
fn s6_two_vehicle_clustering_covers_every_geocoded_shipment_exactly_once() {
    let bogota_a = geocoded(4.7110, -74.0721);
    let bogota_b = geocoded(4.6097, -74.0817);
    let medellin_a = geocoded(6.2442, -75.5812);
    let medellin_b = geocoded(6.2518, -75.5636);
    let shipments = vec![
        bogota_a.clone(),
        bogota_b.clone(),
        medellin_a.clone(),
        medellin_b.clone(),
        ungeocoded(),
        ungeocoded(),
    ];
    let vehicles = vec![VehicleId::new(), VehicleId::new()];

    let optimizer = RouteOptimizer::default();
    let results = optimizer.optimize(&shipments, &vehicles).unwrap();

    assert_eq!(results.len(), 2);

    let covered: Vec<_> = results.iter().flat_map(|r| r.ordered_shipment_ids.clone()).collect();
    assert_eq!(covered.len(), 4);

    let expected_ids: std::collections::HashSet<_> =
        [bogota_a.id, bogota_b.id, medellin_a.id, medellin_b.id].into_iter().collect();
    let covered_ids: std::collections::HashSet<_> = covered.into_iter().collect();
    assert_eq!(covered_ids, expected_ids);

    for result in &results {
        assert!(result.total_distance_km.cents() >= 0);
    }
}

#[test]
fn s6_optimize_is_byte_identical_on_rerun() {
    let shipments = vec![
        geocoded(4.7110, -74.0721),
        geocoded(4.6097, -74.0817),
        geocoded(6.2442, -75.5812),
        geocoded(6.2518, -75.5636),
    ];
    let vehicles = vec![VehicleId::new(), VehicleId::new()];
    let optimizer = RouteOptimizer::default();

    let first = optimizer.optimize(&shipments, &vehicles).unwrap();
    let second = optimizer.optimize(&shipments, &vehicles).unwrap();
    assert_eq!(first, second);
}

#[test]
fn no_vehicles_is_rejected() {
    let shipments = vec![geocoded(4.71, -74.07)];
    let optimizer = RouteOptimizer::default();
    let err = optimizer.optimize(&shipments, &[]).unwrap_err();
    assert_eq!(err.code(), "validation_rejected");
}
