use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use opsfabric_core::{CustomerId, OrderId, VehicleId};
use opsfabric_delivery::{Coordinates, RouteOptimizer, Shipment};

fn geocoded_shipments(n: usize) -> Vec<Shipment> {
    (0..n)
        .map(|i| {
            let mut s = Shipment::new(
                OrderId::new(),
                CustomerId::new(),
                "Calle 1",
                "Bogotá",
                "CO",
                Utc::now().date_naive(),
            )
            .unwrap();
            let lat = 4.0 + (i as f64) * 0.001;
            let lon = -74.0 - (i as f64) * 0.001;
            s.set_coordinates(Coordinates::new(lat, lon));
            s
        })
        .collect()
}

fn bench_optimize(c: &mut Criterion) {
    let shipments = geocoded_shipments(200);
    let vehicles: Vec<VehicleId> = (0..8).map(|_| VehicleId::new()).collect();
    let optimizer = RouteOptimizer::default();

    c.bench_function("optimize_200_shipments_8_vehicles", |b| {
        b.iter(|| optimizer.optimize(black_box(&shipments), black_box(&vehicles)).unwrap())
    });
}

criterion_group!(benches, bench_optimize);
criterion_main!(benches);
