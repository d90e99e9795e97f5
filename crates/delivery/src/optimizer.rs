use opsfabric_core::{DomainError, DomainResult, Money, ShipmentId, VehicleId};
use serde::Serialize;

use crate::shipment::Shipment;

const STOP_MINUTES: u32 = 5;
const DEFAULT_AVG_SPEED_KPH: f64 = 30.0;

/// One vehicle's planned stop order, produced by [`RouteOptimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOptimizationResult {
    pub vehicle_id: VehicleId,
    pub ordered_shipment_ids: Vec<ShipmentId>,
    pub total_distance_km: Money,
    pub estimated_duration_minutes: u32,
}

/// Deterministic clustering + nearest-neighbor ordering over geocoded
/// shipments. Ungeocoded shipments are left untouched by the caller;
/// this type never sees them.
pub struct RouteOptimizer {
    avg_speed_kph: f64,
    stop_minutes: u32,
}

impl RouteOptimizer {
    pub fn new(avg_speed_kph: f64) -> Self {
        Self {
            avg_speed_kph,
            stop_minutes: STOP_MINUTES,
        }
    }

    /// Assigns geocoded shipments to `vehicle_ids` round-robin by a stable
    /// spatial key, then orders each vehicle's cluster by nearest-neighbor
    /// starting from the cluster's first (spatially-sorted) shipment. Ties
    /// in the spatial key and in nearest-neighbor distance are both broken
    /// by shipment id ascending, so the same input set and vehicle order
    /// always yields identical clustering and ordering, independent of the
    /// slice order the caller passed in.
    ///
    /// Fails with `ValidationRejected` when no vehicles are available.
    /// Vehicles that end up with an empty cluster produce no result.
    pub fn optimize(&self, shipments: &[Shipment], vehicle_ids: &[VehicleId]) -> DomainResult<Vec<RouteOptimizationResult>> {
        if vehicle_ids.is_empty() {
            return Err(DomainError::validation("At least one vehicle required"));
        }

        let mut geocoded: Vec<&Shipment> = shipments.iter().filter(|s| s.is_geocoded()).collect();
        geocoded.sort_by(|a, b| {
            a.coordinates
                .unwrap()
                .spatial_key()
                .partial_cmp(&b.coordinates.unwrap().spatial_key())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut clusters: Vec<Vec<&Shipment>> = vec![Vec::new(); vehicle_ids.len()];
        for (i, shipment) in geocoded.into_iter().enumerate() {
            clusters[i % vehicle_ids.len()].push(shipment);
        }

        let mut results = Vec::new();
        for (vehicle_id, cluster) in vehicle_ids.iter().zip(clusters.into_iter()) {
            if cluster.is_empty() {
                continue;
            }
            let ordered = Self::nearest_neighbor_order(cluster);
            let total_distance_km = Self::total_distance(&ordered);
            let estimated_duration_minutes = self.estimate_duration(total_distance_km, ordered.len());
            results.push(RouteOptimizationResult {
                vehicle_id: *vehicle_id,
                ordered_shipment_ids: ordered.iter().map(|s| s.id).collect(),
                total_distance_km: Money::parse(&format!("{:.2}", total_distance_km)).unwrap_or(Money::ZERO),
                estimated_duration_minutes,
            });
        }
        Ok(results)
    }

    /// Greedy nearest-neighbor starting from the first (spatially-sorted)
    /// shipment in the cluster, so the result is a deterministic function
    /// of the input coordinates.
    fn nearest_neighbor_order<'a>(mut cluster: Vec<&'a Shipment>) -> Vec<&'a Shipment> {
        let mut ordered = Vec::with_capacity(cluster.len());
        let mut current = cluster.remove(0);
        ordered.push(current);
        while !cluster.is_empty() {
            let current_coords = current.coordinates.unwrap();
            let (nearest_idx, _) = cluster
                .iter()
                .enumerate()
                .map(|(i, s)| (i, s.id, current_coords.distance_to(&s.coordinates.unwrap())))
                .min_by(|(_, id1, d1), (_, id2, d2)| {
                    d1.partial_cmp(d2).unwrap_or(std::cmp::Ordering::Equal).then_with(|| id1.cmp(id2))
                })
                .map(|(i, _, _)| i)
                .expect("cluster is non-empty");
            current = cluster.remove(nearest_idx);
            ordered.push(current);
        }
        ordered
    }

    fn total_distance(ordered: &[&Shipment]) -> f64 {
        ordered
            .windows(2)
            .map(|pair| pair[0].coordinates.unwrap().distance_to(&pair[1].coordinates.unwrap()))
            .sum()
    }

    fn estimate_duration(&self, total_distance_km: f64, stop_count: usize) -> u32 {
        let driving_minutes = (total_distance_km / self.avg_speed_kph) * 60.0;
        let stop_time = (stop_count as u32) * self.stop_minutes;
        driving_minutes.round() as u32 + stop_time
    }
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_AVG_SPEED_KPH)
    }
}
