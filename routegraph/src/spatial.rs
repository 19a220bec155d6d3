//! Geographic types.

use geo::algorithm::haversine_distance::HaversineDistance;
use geo::Point;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

const METERS_PER_MILE: f64 = 1609.344;

/// A latitude/longitude pair in decimal degrees.
///
/// Equality and hashing are exact on the coordinate bits, so a `GeoPoint` can key a map
/// and two points built from the same numbers always collide.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(from = "LatLon")]
pub struct GeoPoint {
  lat: f64,
  lon: f64,
}

#[derive(Deserialize)]
struct LatLon {
  lat: f64,
  lon: f64,
}

impl From<LatLon> for GeoPoint {
  fn from(raw: LatLon) -> Self {
    GeoPoint::new(raw.lat, raw.lon)
  }
}

impl GeoPoint {
  pub fn new(lat: f64, lon: f64) -> Self {
    // -0.0 + 0.0 == +0.0, keeps bitwise equality in line with numeric equality
    GeoPoint {
      lat: lat + 0.0,
      lon: lon + 0.0,
    }
  }

  pub fn lat(&self) -> f64 {
    self.lat
  }

  pub fn lon(&self) -> f64 {
    self.lon
  }

  /// Great-circle (haversine) distance in miles.
  pub fn distance(&self, other: &GeoPoint) -> f64 {
    haversine_distance(self, other)
  }
}

pub fn haversine_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
  let from = Point::new(from.lon, from.lat);
  let to = Point::new(to.lon, to.lat);
  from.haversine_distance(&to) / METERS_PER_MILE
}

impl PartialEq for GeoPoint {
  fn eq(&self, other: &Self) -> bool {
    self.lat.to_bits() == other.lat.to_bits() && self.lon.to_bits() == other.lon.to_bits()
  }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
  fn hash<H: Hasher>(&self, hasher: &mut H) {
    (self.lat.to_bits(), self.lon.to_bits()).hash(hasher)
  }
}

impl PartialOrd for GeoPoint {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for GeoPoint {
  fn cmp(&self, other: &Self) -> Ordering {
    self
      .lat
      .total_cmp(&other.lat)
      .then(self.lon.total_cmp(&other.lon))
  }
}

impl fmt::Display for GeoPoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.lat, self.lon)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use float_cmp::approx_eq;
  use std::collections::HashSet;

  const DURHAM: GeoPoint = GeoPoint {
    lat: 35.9940,
    lon: -78.8986,
  };
  const RALEIGH: GeoPoint = GeoPoint {
    lat: 35.7796,
    lon: -78.6382,
  };

  #[test]
  fn test_distance_is_symmetric() {
    let there = DURHAM.distance(&RALEIGH);
    let back = RALEIGH.distance(&DURHAM);

    assert_eq!(there, back);
    assert!(there > 0.0);
  }

  #[test]
  fn test_distance_to_self_is_zero() {
    assert_eq!(DURHAM.distance(&DURHAM), 0.0);
    assert_eq!(GeoPoint::new(-33.86, 151.2).distance(&GeoPoint::new(-33.86, 151.2)), 0.0);
  }

  #[test]
  fn test_distance_in_miles() {
    // One degree of latitude along a meridian is roughly 69.1 miles.
    let d = GeoPoint::new(0.0, 0.0).distance(&GeoPoint::new(1.0, 0.0));
    assert!(approx_eq!(f64, d, 69.09, epsilon = 0.05));

    // Durham to Raleigh is a bit over 20 miles as the crow flies.
    let d = DURHAM.distance(&RALEIGH);
    assert!(d > 19.0 && d < 22.0, "unexpected distance {}", d);
  }

  #[test]
  fn test_structural_equality() {
    let a = GeoPoint::new(12.5, -3.25);
    let b = GeoPoint::new(12.5, -3.25);
    let c = GeoPoint::new(12.5, -3.250001);

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<GeoPoint> = vec![a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
  }

  #[test]
  fn test_negative_zero_is_normalised() {
    let a = GeoPoint::new(-0.0, 10.0);
    let b = GeoPoint::new(0.0, 10.0);

    assert_eq!(a, b);
    let set: HashSet<GeoPoint> = vec![a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
  }

  #[test]
  fn test_ordering_is_lat_then_lon() {
    let mut points = vec![
      GeoPoint::new(2.0, 1.0),
      GeoPoint::new(1.0, 5.0),
      GeoPoint::new(1.0, -5.0),
    ];
    points.sort();

    assert_eq!(
      points,
      vec![
        GeoPoint::new(1.0, -5.0),
        GeoPoint::new(1.0, 5.0),
        GeoPoint::new(2.0, 1.0)
      ]
    );
  }
}
