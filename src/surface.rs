// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Rendering surface
//!
//! The [`Surface`] trait is the only interface through which text is drawn.
//! It follows the model of an HTML canvas 2D context: drawing state (font,
//! alignment, fill colour, shadow and transform) is set before each draw and
//! is saved and restored as a stack.

use crate::fonts::{FontSpec, Measure};
use crate::{Baseline, Color, Shadow, TextAlign, Vec2};

/// A 2D drawing target with a state stack
///
/// Every [`Surface::save`] must be paired with a [`Surface::restore`].
/// Measurement via [`Measure::text_width`] must agree with the advance of
/// text drawn by [`Surface::fill_text`].
pub trait Surface: Measure {
    /// Push a copy of the current drawing state
    fn save(&mut self);

    /// Pop drawing state saved by [`Surface::save`]
    ///
    /// Does nothing if the stack is empty.
    fn restore(&mut self);

    /// Translate the current transform
    fn translate(&mut self, offset: Vec2);

    /// Rotate the current transform by `radians` (clockwise, y down)
    fn rotate(&mut self, radians: f32);

    /// Scale the current transform
    fn scale(&mut self, factor: Vec2);

    /// Set the font used by [`Surface::fill_text`]
    fn set_font(&mut self, font: &FontSpec);

    /// The current font
    fn font(&self) -> &FontSpec;

    fn set_align(&mut self, align: TextAlign);

    fn set_baseline(&mut self, baseline: Baseline);

    fn set_fill(&mut self, color: Color);

    fn set_shadow(&mut self, shadow: Shadow);

    /// Draw `text` anchored at `pos` in the current font
    fn fill_text(&mut self, text: &str, pos: Vec2);

    /// Fill an axis-aligned rectangle (before transformation)
    fn fill_rect(&mut self, pos: Vec2, size: Vec2);

    /// Natural size of the glyph image for an icon symbol
    ///
    /// Returns `None` when no image is available.
    fn glyph_size(&self, symbol: char) -> Option<Vec2>;

    /// Draw the glyph image of `symbol` with its top-left corner at `pos`
    ///
    /// Callers check [`Surface::glyph_size`] first; a missing glyph draws
    /// nothing.
    fn draw_glyph(&mut self, symbol: char, pos: Vec2);

    /// Width of `text` in the current font
    #[inline]
    fn measure(&self, text: &str) -> f32 {
        self.text_width(text, self.font())
    }
}
