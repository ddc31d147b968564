// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font selection and measurement
//!
//! Fonts are described by a [`FontSpec`]: a family name, a size in points
//! and style flags. Sizes follow CSS conventions: `1pt = 96/72 px`.
//!
//! Layout only ever needs the advance width of a string in a given font; this
//! is the [`Measure`] trait. A [`FontLibrary`] implements it over font files
//! loaded into memory, while tests and other backends may supply their own.

use bitflags::bitflags;

mod library;

pub use library::{FaceId, FontError, FontLibrary, NoFontMatch};

bitflags! {
    /// Font style flags
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FontFlags: u8 {
        /// Heavy weight
        const BOLD = 1 << 0;
        /// Italic or oblique style
        const ITALIC = 1 << 1;
    }
}

/// A font: family, size and style
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSpec {
    /// Family name
    pub family: String,
    /// Size in points
    pub size: f32,
    pub flags: FontFlags,
}

impl FontSpec {
    /// Construct a regular-weight font
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        FontSpec {
            family: family.into(),
            size,
            flags: FontFlags::empty(),
        }
    }

    /// Copy with bold weight
    #[must_use]
    pub fn bold(&self) -> Self {
        let mut font = self.clone();
        font.flags.insert(FontFlags::BOLD);
        font
    }

    /// Copy with regular weight
    #[must_use]
    pub fn regular(&self) -> Self {
        let mut font = self.clone();
        font.flags.remove(FontFlags::BOLD);
        font
    }

    /// Copy with italic style
    #[must_use]
    pub fn italic(&self) -> Self {
        let mut font = self.clone();
        font.flags.insert(FontFlags::ITALIC);
        font
    }

    /// Copy with a different size (points)
    #[must_use]
    pub fn with_size(&self, size: f32) -> Self {
        let mut font = self.clone();
        font.size = size;
        font
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.flags.contains(FontFlags::BOLD)
    }

    #[inline]
    pub fn is_italic(&self) -> bool {
        self.flags.contains(FontFlags::ITALIC)
    }
}

impl std::fmt::Display for FontSpec {
    /// Formats as a CSS font shorthand, e.g. `bold 64pt myText`
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_italic() {
            f.write_str("italic ")?;
        }
        if self.is_bold() {
            f.write_str("bold ")?;
        }
        write!(f, "{}pt {}", self.size, self.family)
    }
}

/// Text measurement
///
/// Implementations must be pure: the same text and font always yield the same
/// width.
pub trait Measure {
    /// Advance width of `text` in pixels when drawn with `font`
    fn text_width(&self, text: &str, font: &FontSpec) -> f32;
}

impl<M: Measure + ?Sized> Measure for &M {
    #[inline]
    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        (**self).text_width(text, font)
    }
}

/// A measurer assigning every char the same advance relative to font size
///
/// Bold text is wider by a constant factor. This is useful for tests and for
/// quick estimates before fonts are available.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    /// Advance of one char, as a fraction of the font's pixel size
    pub em_fraction: f32,
    /// Multiplier applied to bold text
    pub bold_factor: f32,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        FixedAdvance {
            em_fraction: 0.5,
            bold_factor: 1.1,
        }
    }
}

impl Measure for FixedAdvance {
    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        let px = font.size * crate::conv::PX_PER_PT;
        let mut advance = px * self.em_fraction;
        if font.is_bold() {
            advance *= self.bold_factor;
        }
        crate::conv::count_f32(text.chars().count()) * advance
    }
}
