//! Map marker layer
//!
//! The map is fed from the reconciler's output like every other sink, so it
//! never keeps a second dedup set: each record it receives is new. Records
//! without usable coordinates are skipped.

use mapscout_core::domain::record::BusinessRecord;

/// A pin on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Smallest box containing every marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    fn around(latitude: f64, longitude: f64) -> Self {
        Self {
            south: latitude,
            west: longitude,
            north: latitude,
            east: longitude,
        }
    }

    fn extend(&mut self, latitude: f64, longitude: f64) {
        self.south = self.south.min(latitude);
        self.north = self.north.max(latitude);
        self.west = self.west.min(longitude);
        self.east = self.east.max(longitude);
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
    }
}

/// Where the map should look
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    /// A single marker: center on it
    Center { latitude: f64, longitude: f64 },
    /// Several markers: fit them all
    Fit(Bounds),
}

/// Markers drawn so far in the current run
#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
    bounds: Option<Bounds>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a marker for a new record, if it has valid coordinates
    pub fn add(&mut self, record: &BusinessRecord) -> Option<&Marker> {
        let (latitude, longitude) = record.coordinates()?;
        if !valid_coordinates(latitude, longitude) {
            return None;
        }

        match self.bounds.as_mut() {
            Some(bounds) => bounds.extend(latitude, longitude),
            None => self.bounds = Some(Bounds::around(latitude, longitude)),
        }

        self.markers.push(Marker {
            label: record.display_name().to_string(),
            latitude,
            longitude,
        });
        self.markers.last()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn viewport(&self) -> Option<Viewport> {
        match self.markers.as_slice() {
            [] => None,
            [only] => Some(Viewport::Center {
                latitude: only.latitude,
                longitude: only.longitude,
            }),
            _ => self.bounds.map(Viewport::Fit),
        }
    }

    pub fn clear(&mut self) {
        self.markers.clear();
        self.bounds = None;
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

fn valid_coordinates(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_marker_centers_viewport() {
        let mut layer = MarkerLayer::new();
        layer.add(&BusinessRecord::new("A", "1").at(40.7, -74.0));

        assert_eq!(
            layer.viewport(),
            Some(Viewport::Center {
                latitude: 40.7,
                longitude: -74.0
            })
        );
    }

    #[test]
    fn test_bounds_grow_with_markers() {
        let mut layer = MarkerLayer::new();
        layer.add(&BusinessRecord::new("A", "1").at(40.0, -74.0));
        layer.add(&BusinessRecord::new("B", "2").at(41.0, -73.0));
        layer.add(&BusinessRecord::new("C", "3").at(40.5, -75.0));

        let expected = Bounds {
            south: 40.0,
            west: -75.0,
            north: 41.0,
            east: -73.0,
        };
        assert_eq!(layer.viewport(), Some(Viewport::Fit(expected)));
        assert_eq!(expected.center(), (40.5, -74.0));
    }

    #[test]
    fn test_records_without_usable_coordinates_are_skipped() {
        let mut layer = MarkerLayer::new();

        assert!(layer.add(&BusinessRecord::new("No coords", "1")).is_none());
        assert!(layer.add(&BusinessRecord::new("Bad", "2").at(123.0, 0.0)).is_none());
        assert!(layer.is_empty());
        assert_eq!(layer.viewport(), None);
    }

    #[test]
    fn test_clear_drops_markers_and_bounds() {
        let mut layer = MarkerLayer::new();
        layer.add(&BusinessRecord::new("A", "1").at(1.0, 1.0));
        layer.clear();

        assert!(layer.is_empty());
        assert_eq!(layer.bounds(), None);
    }
}
