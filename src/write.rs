// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Drawing lines and paragraphs

use crate::compose::draw_token;
use crate::env::{Context, Environment, LineStyle};
use crate::fit::{fit, fit_single_line, FitResult, LineKind};
use crate::fonts::{FontFlags, FontSpec};
use crate::surface::Surface;
use crate::token::tokenize_word;
use crate::{Color, TextDirection, Vec2};

/// Markers which cause a line to be drawn in italics
pub const ITALIC_MARKERS: &[&str] = &[
    "[i]",
    "Heirloom: ",
    "Erbstück: ",
    "(This is not in the Supply.)",
    "Keep this until Clean-up.",
];

/// Explicit italic marker; removed before drawing
pub const ITALIC_TAG: &str = "[i]";

/// Trailing punctuation of a bold word, drawn in the regular weight
const PUNCTUATION: &[char] = &[',', ';', '.', '?', '!', ':'];

/// Draw one line of text starting at `origin`
///
/// The line is drawn in the surface's current font, mirrored when
/// `style.direction` is right-to-left (in which case `origin` is the right
/// edge). Words are drawn one at a time: icon tokens via [`draw_token`],
/// emphasised words in bold. A [`LineKind::Emphasis`] line is drawn at
/// `style.bold_size` in `style.family`; the icon of a
/// [`LineKind::StandaloneIcon`] line is drawn in the large standalone mode.
/// Lines of other kinds are drawn at the size they were fitted at, even when
/// wrapping leaves a single word.
///
/// Returns the x position of the cursor after the last word.
pub fn write_line<S: Surface + ?Sized>(
    surface: &mut S,
    env: &Environment,
    ctx: &Context,
    line: &str,
    origin: Vec2,
    style: &LineStyle,
) -> f32 {
    let dir = style.direction;
    let Vec2(mut x, y) = origin;
    surface.set_align(dir.align());

    let mut line = std::borrow::Cow::Borrowed(line);
    let mut font = surface.font().clone();
    if ITALIC_MARKERS.iter().any(|m| line.contains(m)) {
        font = font.italic();
        if line.contains(ITALIC_TAG) {
            line = line.replace(ITALIC_TAG, "").into();
            x += dir.advance(style.bold_size * style.scale);
        }
    } else {
        font.flags.remove(FontFlags::ITALIC);
    }
    surface.set_font(&font);

    let solo = style.kind == LineKind::StandaloneIcon;
    let lone = style.kind == LineKind::Emphasis;
    let words = dir.ordered_words(&line);
    for word in words.iter().copied() {
        surface.save();

        let parsed = tokenize_word(word, ctx.catalog);
        for token in &parsed.tokens {
            let solo = solo && !word.starts_with('+');
            x = draw_token(surface, env, ctx.catalog, token, Vec2(x, y), style, solo);
        }
        if !parsed.tail.is_empty() {
            write_word(surface, ctx, parsed.tail, Vec2(x, y), style, lone);
        }

        let advance = surface.measure(&format!("{} ", parsed.tail));
        x += dir.advance(advance);
        surface.restore();
    }
    x
}

/// Draw a plain word (not an icon token)
fn write_word<S: Surface + ?Sized>(
    surface: &mut S,
    ctx: &Context,
    word: &str,
    pos: Vec2,
    style: &LineStyle,
    lone: bool,
) {
    if ctx.emphasis.is_emphasized(word) {
        let font = if lone {
            FontSpec::new(&style.family, style.bold_size).bold()
        } else {
            surface.font().bold()
        };
        surface.set_font(&font);
    }

    if !surface.font().is_bold() {
        surface.fill_text(word, pos);
        return;
    }

    match word.strip_suffix(PUNCTUATION) {
        Some(stem) => {
            surface.fill_text(stem, pos);
            let w = surface.measure(stem);
            let bold = surface.font().clone();
            surface.set_font(&bold.regular());
            let punct = &word[stem.len()..];
            surface.fill_text(punct, Vec2(pos.0 + style.direction.advance(w), pos.1));
            surface.set_font(&bold);
        }
        None => surface.fill_text(word, pos),
    }
}

/// Draw a single line (title, type line) centred on `center`
///
/// The size of `font` is reduced until the line fits `max_width`; a
/// `max_width` of zero disables fitting. Returns the fit, whose single line
/// holds the measured width.
pub fn write_single_line<S: Surface + ?Sized>(
    surface: &mut S,
    env: &Environment,
    ctx: &Context,
    line: &str,
    center: Vec2,
    max_width: f32,
    font: &FontSpec,
) -> FitResult {
    let result = fit_single_line(&*surface, env, ctx, font, line, max_width);
    let direction = TextDirection::of(line);
    let width = result.max_width();

    surface.set_font(&font.with_size(result.font_size));
    let scale = result.font_size / env.single_line_scale_div;
    let style = LineStyle::new(&font.family, scale, env.bold_size).with_direction(direction);
    let x = direction.line_start(center.0, width);
    write_line(surface, env, ctx, line, Vec2(x, center.1), &style);
    result
}

/// Fit and draw a paragraph centred on `center`
///
/// See [`fit`] for fitting. Lines are centred horizontally; rules are drawn as
/// a filled bar half as wide as a surface centred on `center`.
pub fn write_paragraph<S: Surface + ?Sized>(
    surface: &mut S,
    env: &Environment,
    ctx: &Context,
    paragraph: &str,
    center: Vec2,
    max_width: f32,
    max_height: f32,
    base_size: f32,
    bold_size: f32,
) -> FitResult {
    let result = fit(
        &*surface, env, ctx, paragraph, max_width, max_height, base_size, bold_size,
    );
    let size = result.font_size;
    let font = FontSpec::new(&env.text_family, size);
    let scale = size / env.paragraph_scale_div;

    let mut y = result.first_baseline(center.1);
    for line in &result.lines {
        match line.kind {
            LineKind::Blank => (),
            LineKind::Rule => {
                let thickness = env.rule_thickness;
                let top = y - size * env.rule_line / 2.0 - thickness / 2.0;
                surface.fill_rect(Vec2(center.0 / 2.0, top), Vec2(center.0, thickness));
            }
            LineKind::Emphasis | LineKind::StandaloneIcon | LineKind::Text => {
                surface.set_font(&font);
                let style = LineStyle::new(&env.text_family, scale, bold_size)
                    .with_direction(line.direction)
                    .with_kind(line.kind);
                let x = line.direction.line_start(center.0, line.width);
                write_line(surface, env, ctx, &line.text, Vec2(x, y), &style);
            }
        }
        y += line.height;
    }
    surface.set_fill(Color::BLACK);
    result
}

/// Draw a price line with its left edge at `pos`
///
/// Price lines use the specials family at the default single-line size and
/// are always left-to-right. Returns the x position after the line.
pub fn write_price_line<S: Surface + ?Sized>(
    surface: &mut S,
    env: &Environment,
    ctx: &Context,
    price: &str,
    pos: Vec2,
) -> f32 {
    let size = env.single_line_size;
    surface.set_font(&FontSpec::new(&env.specials_family, size));
    let scale = size / env.single_line_scale_div;
    let style = LineStyle::new(&env.specials_family, scale, env.bold_size);
    write_line(surface, env, ctx, price, pos, &style)
}
