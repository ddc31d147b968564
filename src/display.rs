// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! A recording surface
//!
//! [`DisplayList`] implements [`Surface`] by recording a list of [`DrawCmd`]
//! together with the drawing state at the time of each command. A backend may
//! replay the list; tests inspect it directly.

use crate::fonts::{FontSpec, Measure};
use crate::surface::Surface;
use crate::{Baseline, Color, Shadow, TextAlign, Vec2};
use std::collections::HashMap;

/// A 2D affine transform
///
/// Maps `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`, as a canvas transform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Affine {
    fn default() -> Self {
        Affine::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Transform a point
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2(
            self.a * p.0 + self.c * p.1 + self.e,
            self.b * p.0 + self.d * p.1 + self.f,
        )
    }

    /// Transform a vector (ignoring translation)
    #[inline]
    pub fn apply_vector(&self, v: Vec2) -> Vec2 {
        Vec2(self.a * v.0 + self.c * v.1, self.b * v.0 + self.d * v.1)
    }

    fn translate(&mut self, t: Vec2) {
        self.e += self.a * t.0 + self.c * t.1;
        self.f += self.b * t.0 + self.d * t.1;
    }

    fn scale(&mut self, s: Vec2) {
        self.a *= s.0;
        self.b *= s.0;
        self.c *= s.1;
        self.d *= s.1;
    }

    fn rotate(&mut self, radians: f32) {
        let (sin, cos) = radians.sin_cos();
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        self.a = a * cos + c * sin;
        self.b = b * cos + d * sin;
        self.c = c * cos - a * sin;
        self.d = d * cos - b * sin;
    }
}

/// Drawing state
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub transform: Affine,
    pub font: FontSpec,
    pub align: TextAlign,
    pub baseline: Baseline,
    pub fill: Color,
    pub shadow: Shadow,
}

impl Default for State {
    fn default() -> Self {
        State {
            transform: Affine::IDENTITY,
            font: FontSpec::new("sans-serif", 10.0),
            align: TextAlign::default(),
            baseline: Baseline::default(),
            fill: Color::BLACK,
            shadow: Shadow::NONE,
        }
    }
}

/// A recorded draw command
///
/// Positions are in the local coordinates given to the draw call; the
/// command's [`State::transform`] maps them to the output.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Text {
        text: String,
        pos: Vec2,
        state: State,
    },
    Glyph {
        symbol: char,
        pos: Vec2,
        size: Vec2,
        state: State,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        state: State,
    },
}

impl DrawCmd {
    /// Drawing state of the command
    pub fn state(&self) -> &State {
        match self {
            DrawCmd::Text { state, .. } => state,
            DrawCmd::Glyph { state, .. } => state,
            DrawCmd::Rect { state, .. } => state,
        }
    }

    /// Local position
    pub fn pos(&self) -> Vec2 {
        match self {
            DrawCmd::Text { pos, .. } => *pos,
            DrawCmd::Glyph { pos, .. } => *pos,
            DrawCmd::Rect { pos, .. } => *pos,
        }
    }

    /// Position after applying the command's transform
    pub fn output_pos(&self) -> Vec2 {
        self.state().transform.apply(self.pos())
    }

    /// Drawn text, if a text command
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCmd::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// A [`Surface`] recording draw commands
///
/// Text is measured by `M`. Glyph images are represented by their size only;
/// register these with [`DisplayList::set_glyph_size`].
#[derive(Clone, Debug)]
pub struct DisplayList<M: Measure> {
    measure: M,
    glyphs: HashMap<char, Vec2>,
    state: State,
    stack: Vec<State>,
    cmds: Vec<DrawCmd>,
}

impl<M: Measure> DisplayList<M> {
    /// Construct with a text measurer
    pub fn new(measure: M) -> Self {
        DisplayList {
            measure,
            glyphs: HashMap::new(),
            state: State::default(),
            stack: vec![],
            cmds: vec![],
        }
    }

    /// Register the image size of an icon glyph
    pub fn set_glyph_size(&mut self, symbol: char, size: Vec2) {
        self.glyphs.insert(symbol, size);
    }

    /// Register the same image size for every symbol in `symbols`
    pub fn with_glyphs(mut self, symbols: impl IntoIterator<Item = char>, size: Vec2) -> Self {
        for symbol in symbols {
            self.set_glyph_size(symbol, size);
        }
        self
    }

    /// Access the measurer
    pub fn measurer(&self) -> &M {
        &self.measure
    }

    /// Current drawing state
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Depth of the state stack
    ///
    /// This is zero whenever saves and restores are balanced.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Recorded commands
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Iterate over recorded text commands as `(text, command)`
    pub fn texts(&self) -> impl Iterator<Item = (&str, &DrawCmd)> {
        self.cmds.iter().filter_map(|cmd| cmd.text().map(|t| (t, cmd)))
    }

    /// Take recorded commands, leaving the list empty
    pub fn take_commands(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.cmds)
    }

    fn push(&mut self, cmd: DrawCmd) {
        log::trace!("DisplayList: {cmd:?}");
        self.cmds.push(cmd);
    }
}

impl<M: Measure> Measure for DisplayList<M> {
    #[inline]
    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        self.measure.text_width(text, font)
    }
}

impl<M: Measure> Surface for DisplayList<M> {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.transform.translate(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.state.transform.rotate(radians);
    }

    fn scale(&mut self, factor: Vec2) {
        self.state.transform.scale(factor);
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.state.font = font.clone();
    }

    fn font(&self) -> &FontSpec {
        &self.state.font
    }

    fn set_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn set_baseline(&mut self, baseline: Baseline) {
        self.state.baseline = baseline;
    }

    fn set_fill(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_shadow(&mut self, shadow: Shadow) {
        self.state.shadow = shadow;
    }

    fn fill_text(&mut self, text: &str, pos: Vec2) {
        let state = self.state.clone();
        self.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
            state,
        });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2) {
        let state = self.state.clone();
        self.push(DrawCmd::Rect { pos, size, state });
    }

    fn glyph_size(&self, symbol: char) -> Option<Vec2> {
        self.glyphs.get(&symbol).copied()
    }

    fn draw_glyph(&mut self, symbol: char, pos: Vec2) {
        let Some(size) = self.glyph_size(symbol) else {
            log::warn!("DisplayList: no glyph for {symbol:?}");
            return;
        };
        let state = self.state.clone();
        self.push(DrawCmd::Glyph {
            symbol,
            pos,
            size,
            state,
        });
    }
}
