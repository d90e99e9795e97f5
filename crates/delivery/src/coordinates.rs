/// Mean Earth radius in km, used for the Haversine great-circle distance.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geocoded point. `distance_to` is the great-circle (Haversine)
/// distance between two points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// A stable spatial sort key: lexicographic on `(lat, lon)`, used for
    /// deterministic clustering. Callers compare with `partial_cmp`
    /// (coordinates are never NaN in practice).
    pub fn spatial_key(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let p = Coordinates::new(4.60, -74.08);
        assert!(p.distance_to(&p) < 1e-9);
    }

    #[test]
    fn bogota_to_medellin_is_roughly_correct() {
        // Known great-circle distance is ~241km.
        let bogota = Coordinates::new(4.7110, -74.0721);
        let medellin = Coordinates::new(6.2442, -75.5812);
        let d = bogota.distance_to(&medellin);
        assert!((d - 241.0).abs() < 5.0, "distance was {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinates::new(4.60, -74.08);
        let b = Coordinates::new(4.80, -74.20);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
    }
}
