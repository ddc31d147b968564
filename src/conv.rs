// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Type conversion utilities
//!
//! Font sizes are given in points (as in CSS: `1pt = 96/72 px`) while all
//! measurements are in pixels.

use easy_cast::{Cast, Conv};

/// Pixels per point
pub const PX_PER_PT: f32 = 96.0 / 72.0;

/// Convert a count (e.g. digits in an overlay) to `f32`
///
/// Counts are always small; this is a "safer" wrapper around `as` which
/// checks representability on debug builds.
#[inline]
pub fn count_f32(x: usize) -> f32 {
    f32::conv(x)
}

/// Convert `usize` → `u32`
#[inline]
pub fn to_u32(x: usize) -> u32 {
    x.cast()
}

/// Truncate towards zero, as the integer part of an `f32`
///
/// Out-of-range values saturate; NaN maps to zero.
#[inline]
pub fn trunc_i32(x: f32) -> i32 {
    x as i32
}

/// Scale factor: pixels per font unit
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DPU(pub f32);

impl DPU {
    /// Construct from font size (points) and the face's units-per-em
    #[inline]
    pub fn from_pt(pt_size: f32, units_per_em: u16) -> Self {
        DPU(pt_size * PX_PER_PT / f32::from(units_per_em))
    }

    #[inline]
    pub(crate) fn u16_to_px(self, x: u16) -> f32 {
        f32::from(x) * self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trunc_matches_toward_zero() {
        assert_eq!(trunc_i32(-3.33), -3);
        assert_eq!(trunc_i32(-4.72), -4);
        assert_eq!(trunc_i32(2.9), 2);
        assert_eq!(trunc_i32(f32::MAX), i32::MAX);
    }

    #[test]
    fn dpu_scales_points() {
        let dpu = DPU::from_pt(72.0, 1000);
        assert!((dpu.u16_to_px(1000) - 96.0).abs() < 1e-4);
    }
}
