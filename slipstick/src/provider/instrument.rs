//! Stock provider backed by a configured instrument.
//!
//! Hosts with their own configuration store implement
//! [`ScaleDataProvider`](super::ScaleDataProvider) directly; everyone else
//! wraps an [`Instrument`] in an `InstrumentProvider` and updates the live
//! geometry through the setters as the user resizes the window or drags the
//! slide.

use parking_lot::Mutex;

use crate::instrument::Instrument;

use super::{ScaleDataProvider, ScaleGroups};

/// Live geometric parameters of the rendered instrument.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    scale_width_px: f64,
    slide_offset_px: f64,
}

/// [`ScaleDataProvider`] over an [`Instrument`] plus mutable geometry.
///
/// The scale groups are fixed at construction; only the geometry moves.
/// Setters and the pipeline must run on the same logical thread (the
/// provider contract requires internally consistent answers within one
/// update cycle).
#[derive(Debug)]
pub struct InstrumentProvider {
    instrument: Instrument,
    geometry: Mutex<Geometry>,
}

impl InstrumentProvider {
    /// Wrap an instrument, starting with the slide centered.
    pub fn new(instrument: Instrument, scale_width_px: f64) -> Self {
        Self {
            instrument,
            geometry: Mutex::new(Geometry {
                scale_width_px,
                slide_offset_px: 0.0,
            }),
        }
    }

    /// The wrapped instrument.
    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    /// Update the rendered scale width (e.g. after a window resize).
    pub fn set_scale_width(&self, scale_width_px: f64) {
        self.geometry.lock().scale_width_px = scale_width_px;
    }

    /// Update the slide displacement (e.g. during a slide drag).
    pub fn set_slide_offset(&self, slide_offset_px: f64) {
        self.geometry.lock().slide_offset_px = slide_offset_px;
    }
}

impl ScaleDataProvider for InstrumentProvider {
    fn front_scale_groups(&self) -> Option<ScaleGroups> {
        self.instrument.front().cloned()
    }

    fn back_scale_groups(&self) -> Option<ScaleGroups> {
        self.instrument.back().cloned()
    }

    fn slide_offset(&self) -> f64 {
        self.geometry.lock().slide_offset_px
    }

    fn scale_width(&self) -> f64 {
        self.geometry.lock().scale_width_px
    }
}
