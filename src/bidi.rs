// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Line direction
//!
//! Direction is decided once per line: a line containing any Hebrew or Arabic
//! char is right-to-left. Mixed-direction lines are not reordered beyond
//! reversing word order.

use crate::TextAlign;

/// Writing direction of a line
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

fn is_rtl_char(c: char) -> bool {
    // Hebrew U+0590..U+05FF and Arabic U+0600..U+06FF
    ('\u{0590}'..='\u{06FF}').contains(&c)
}

impl TextDirection {
    /// Detect the direction of `line`
    pub fn of(line: &str) -> Self {
        if line.chars().any(is_rtl_char) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    #[inline]
    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }

    /// Text anchor of drawn units: the right edge for RTL
    #[inline]
    pub fn align(self) -> TextAlign {
        match self {
            TextDirection::Ltr => TextAlign::Left,
            TextDirection::Rtl => TextAlign::Right,
        }
    }

    /// Sign a cursor step: positive for LTR, negative for RTL
    #[inline]
    pub fn advance(self, dx: f32) -> f32 {
        match self {
            TextDirection::Ltr => dx,
            TextDirection::Rtl => -dx,
        }
    }

    /// Cursor start so that a line of `width` is centred on `center_x`
    #[inline]
    pub fn line_start(self, center_x: f32, width: f32) -> f32 {
        center_x - self.advance(width / 2.0)
    }

    /// Split `line` on spaces, in drawing order
    ///
    /// Words are reversed for RTL so that the cursor, moving leftwards, draws
    /// them in reading order. Repeated spaces yield empty words, which still
    /// advance the cursor by a space.
    pub fn ordered_words(self, line: &str) -> Vec<&str> {
        let mut words: Vec<&str> = line.split(' ').collect();
        if self.is_rtl() {
            words.reverse();
        }
        words
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn detect() {
        assert_eq!(TextDirection::of("+1 Card"), TextDirection::Ltr);
        assert_eq!(TextDirection::of("+1 קלף"), TextDirection::Rtl);
        assert_eq!(TextDirection::of("+1 بطاقة"), TextDirection::Rtl);
        assert_eq!(TextDirection::of(""), TextDirection::Ltr);
    }

    #[test]
    fn word_order() {
        let ltr = TextDirection::Ltr;
        assert_eq!(ltr.ordered_words("a  b c"), vec!["a", "", "b", "c"]);
        let rtl = TextDirection::Rtl;
        assert_eq!(rtl.ordered_words("a b c"), vec!["c", "b", "a"]);
    }

    #[test]
    fn anchors() {
        assert_eq!(TextDirection::Ltr.align(), TextAlign::Left);
        assert_eq!(TextDirection::Rtl.align(), TextAlign::Right);
        assert_eq!(TextDirection::Ltr.line_start(100.0, 40.0), 80.0);
        assert_eq!(TextDirection::Rtl.line_start(100.0, 40.0), 120.0);
        assert_eq!(TextDirection::Rtl.advance(3.0), -3.0);
    }
}
