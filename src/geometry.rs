//! Adaptive icon safe-zone geometry.
//!
//! An adaptive foreground is drawn on a 108dp canvas, of which only the
//! centred 66dp are guaranteed to survive every launcher mask shape.

pub const CANVAS_UNITS: u32 = 108;
pub const SAFE_ZONE_UNITS: u32 = 66;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeZone {
    pub canvas: u32,
    pub padding: u32,
    pub inner_size: u32,
}

impl SafeZone {
    /// Padding is truncated, inner size takes the remainder so that
    /// `2 * padding + inner_size == canvas` always holds.
    pub fn for_canvas(canvas: u32) -> Self {
        let margin = (CANVAS_UNITS - SAFE_ZONE_UNITS) as u64;
        // padding < canvas / 2, so it always fits back into u32
        let padding = (canvas as u64 * margin / (CANVAS_UNITS as u64 * 2)) as u32;
        Self {
            canvas,
            padding,
            inner_size: canvas - 2 * padding,
        }
    }

    pub fn offset(&self) -> (u32, u32) {
        (self.padding, self.padding)
    }
}
