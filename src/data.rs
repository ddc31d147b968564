// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Simple data types

use std::ops::{Add, AddAssign, Mul, Sub};

/// 2D vector (or point) in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2(pub f32, pub f32);

impl Vec2 {
    /// Zero
    pub const ZERO: Vec2 = Vec2(0.0, 0.0);

    /// Construct with the same value in both components
    #[inline]
    pub fn splat(value: f32) -> Self {
        Vec2(value, value)
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vec2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Vec2(self.0 * rhs, self.1 * rhs)
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Vec2(x, y)
    }
}

/// An sRGB colour with alpha
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Construct an opaque colour
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// True if fully transparent
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Horizontal anchor of drawn text relative to its position
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlign {
    /// Position is the left edge of the text
    #[default]
    Left,
    /// Position is the horizontal centre of the text
    Center,
    /// Position is the right edge of the text
    Right,
}

/// Vertical anchor of drawn text relative to its position
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Baseline {
    /// Alphabetic baseline
    #[default]
    Alphabetic,
    /// Position is the vertical middle of the em box
    Middle,
    /// Position is the top of the em box
    Top,
}

/// Drop shadow applied to subsequent draws
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    /// Blur radius in pixels
    pub blur: f32,
    /// Offset in pixels (not affected by the current transform)
    pub offset: Vec2,
    pub color: Color,
}

impl Shadow {
    /// No shadow
    pub const NONE: Shadow = Shadow {
        blur: 0.0,
        offset: Vec2::ZERO,
        color: Color::TRANSPARENT,
    };

    /// True if drawing with this shadow has no visible shadow
    #[inline]
    pub fn is_none(&self) -> bool {
        self.color.is_transparent()
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Shadow::NONE
    }
}
