// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Layout environment: font families and tuning constants

use crate::bidi::TextDirection;
use crate::catalog::Catalog;
use crate::emphasis::EmphasisConfig;
use crate::fit::LineKind;
use crate::Color;

/// Card layout variant
///
/// Only [`CardFormat::BaseCard`] affects text layout: standalone icons are
/// drawn larger there.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardFormat {
    #[default]
    Card,
    Landscape,
    Double,
    BaseCard,
    PileMarker,
    Mat,
}

/// Constants placing cost text over an icon glyph
///
/// All values are in the glyph's coordinate space (before scaling by the
/// icon scale), in points for font sizes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayTuning {
    /// Font size of the cost number
    pub number_size: f32,
    /// Number shrink applied when the icon scale exceeds [`Self::big_scale`]
    pub big_number_scale: f32,
    pub big_scale: f32,
    /// Numerator of the shrink for multi-char costs: `shrink / digits`
    pub multi_digit_shrink: f32,
    /// Font size of a trailing `*`
    pub star_size: f32,
    /// Vertical shift of a trailing `*`
    pub star_shift: f32,
    /// Font size of a trailing `+` (drawn as [`Self::plus_glyph`])
    pub plus_size: f32,
    pub plus_glyph: char,
    /// Horizontal offset of a trailing special char
    pub special_x: f32,
    /// Vertical offset of a trailing special char
    pub special_y: f32,
    /// Vertical offset of a trailing special char when the icon scale exceeds 1
    pub special_y_large: f32,
}

impl Default for OverlayTuning {
    fn default() -> Self {
        OverlayTuning {
            number_size: 115.0,
            big_number_scale: 0.8,
            big_scale: 3.0,
            multi_digit_shrink: 1.5,
            star_size: 65.0,
            star_shift: 10.0,
            plus_size: 40.0,
            plus_glyph: '✚',
            special_x: 45.0,
            special_y: -23.0,
            special_y_large: -20.0,
        }
    }
}

/// Environment in which text is laid out and drawn
///
/// The default values reproduce the standard card artwork.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    /// Family used for titles
    pub title_family: String,
    /// Family used for descriptions
    pub text_family: String,
    /// Family used for icon prefixes, overlays and price lines
    pub specials_family: String,
    pub format: CardFormat,
    /// Line height as a multiple of font size
    pub line_height: f32,
    /// Step between candidate font sizes
    pub size_step: f32,
    /// Smallest font size tried when fitting a paragraph
    pub min_size: f32,
    /// Height of a blank line, as a fraction of font size
    pub blank_line: f32,
    /// Height of a rule line (`-`), as a fraction of font size
    pub rule_line: f32,
    /// Thickness of the drawn rule
    pub rule_thickness: f32,
    /// Height of a standalone icon line (independent of font size)
    pub standalone_height: f32,
    /// Font size of a standalone icon
    pub standalone_size: f32,
    /// Font size of a standalone icon on [`CardFormat::BaseCard`]
    pub standalone_size_base: f32,
    /// Icon scale of a standalone icon
    pub standalone_scale: f32,
    /// Downward shift of a standalone icon, before subtracting
    /// `standalone_inset × scale`
    pub standalone_lift: f32,
    /// Standalone icons are shifted by this amount scaled by the line scale
    /// (also moving them right, except on [`CardFormat::BaseCard`])
    pub standalone_inset: f32,
    /// Default bold size of a lone emphasised word
    pub bold_size: f32,
    /// Default initial size of a single line
    pub single_line_size: f32,
    /// Font size divided by this gives the icon scale of a paragraph line
    pub paragraph_scale_div: f32,
    /// Font size divided by this gives the icon scale of a single line
    pub single_line_scale_div: f32,
    /// Padding after an icon prefix (scaled by the icon scale)
    pub prefix_padding: f32,
    /// Extra padding on each side of an icon, added to half the placeholder width
    pub icon_padding: f32,
    /// Drop shadow blur radius of icon glyphs
    pub shadow_blur: f32,
    /// Drop shadow distance of icon glyphs (scaled by the icon scale)
    pub shadow_distance: f32,
    pub shadow_color: Color,
    pub overlay: OverlayTuning,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            title_family: "myTitle".into(),
            text_family: "myText".into(),
            specials_family: "mySpecials".into(),
            format: CardFormat::default(),
            line_height: 1.433,
            size_step: 2.0,
            min_size: 16.0,
            blank_line: 0.5,
            rule_line: 0.75,
            rule_thickness: 10.0,
            standalone_height: 275.0,
            standalone_size: 192.0,
            standalone_size_base: 222.0,
            standalone_scale: 1.6,
            standalone_lift: 115.0,
            standalone_inset: 48.0,
            bold_size: 64.0,
            single_line_size: 85.0,
            paragraph_scale_div: 96.0,
            single_line_scale_div: 90.0,
            prefix_padding: 10.0,
            icon_padding: 2.0,
            shadow_blur: 25.0,
            shadow_distance: 10.0,
            shadow_color: Color::BLACK,
            overlay: OverlayTuning::default(),
        }
    }
}

impl Environment {
    /// Construct with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Height of a normal line of text at `size`
    #[inline]
    pub fn line_height(&self, size: f32) -> f32 {
        size * self.line_height
    }
}

/// Vocabulary shared by layout and drawing: icons and emphasised keywords
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    pub catalog: &'a Catalog,
    pub emphasis: &'a EmphasisConfig,
}

impl<'a> Context<'a> {
    /// Construct over the given emphasis configuration and the default catalog
    pub fn new(emphasis: &'a EmphasisConfig) -> Self {
        Context {
            catalog: crate::catalog::catalog(),
            emphasis,
        }
    }

    /// Use a custom catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: &'a Catalog) -> Self {
        self.catalog = catalog;
        self
    }
}

/// Per-line drawing parameters
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Family of a lone emphasised word
    pub family: String,
    /// Icon scale
    pub scale: f32,
    /// Size (points) of a lone emphasised word
    pub bold_size: f32,
    pub direction: TextDirection,
    /// Kind of the line as fitted
    ///
    /// Only [`LineKind::Emphasis`] and [`LineKind::StandaloneIcon`] lines
    /// draw their word in the large lone-word mode.
    pub kind: LineKind,
}

impl LineStyle {
    /// Construct a left-to-right [`LineKind::Text`] style
    pub fn new(family: impl Into<String>, scale: f32, bold_size: f32) -> Self {
        LineStyle {
            family: family.into(),
            scale,
            bold_size,
            direction: TextDirection::Ltr,
            kind: LineKind::Text,
        }
    }

    /// Set the line kind
    #[must_use]
    pub fn with_kind(mut self, kind: LineKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the direction
    #[must_use]
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }
}
