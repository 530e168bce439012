//! Map sink
//!
//! The terminal cannot draw a map, so the marker layer is kept up to date
//! from new records and summarised when the run ends.

use std::sync::{Mutex, MutexGuard, PoisonError};

use colored::*;
use mapscout_core::domain::record::BusinessRecord;
use mapscout_monitor::{MarkerLayer, RenderSink, TerminalEvent, Viewport};
use tracing::debug;

#[derive(Default)]
pub struct MapSink {
    layer: Mutex<MarkerLayer>,
}

impl MapSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn layer(&self) -> MutexGuard<'_, MarkerLayer> {
        self.layer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Summary of the markers placed so far, `None` when there are none
    pub fn summary(&self) -> Option<String> {
        let layer = self.layer();
        let line = match layer.viewport()? {
            Viewport::Center {
                latitude,
                longitude,
            } => format!("Map: 1 marker at ({:.5}, {:.5})", latitude, longitude),
            Viewport::Fit(bounds) => {
                let (latitude, longitude) = bounds.center();
                format!(
                    "Map: {} markers around ({:.5}, {:.5}), bounds S {:.4} W {:.4} N {:.4} E {:.4}",
                    layer.len(),
                    latitude,
                    longitude,
                    bounds.south,
                    bounds.west,
                    bounds.north,
                    bounds.east
                )
            }
        };
        Some(line)
    }
}

impl RenderSink for MapSink {
    fn reset(&self) {
        self.layer().clear();
    }

    fn append_record(&self, record: &BusinessRecord) {
        let mut layer = self.layer();
        match layer.add(record) {
            Some(marker) => debug!(
                "Marker '{}' at ({}, {})",
                marker.label, marker.latitude, marker.longitude
            ),
            None => debug!("No map position for '{}'", record.display_name()),
        }
    }

    fn finalize(&self, _event: &TerminalEvent) {
        if let Some(summary) = self.summary() {
            println!("{}", summary.dimmed());
        }
    }
}
