// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Icon glyph compositing
//!
//! An icon token is drawn as an optional prefix (sign and number) followed by
//! the icon glyph with a drop shadow and an optional cost overlay drawn on top
//! of the glyph. The glyph region is padded by half the width of
//! [`ICON_PLACEHOLDER`] on each side; this padding, not the glyph image
//! width, is what the cursor advances by, matching how lines are measured.

use crate::catalog::{Catalog, COIN};
use crate::conv::{count_f32, trunc_i32};
use crate::env::{CardFormat, Environment, LineStyle};
use crate::fonts::FontSpec;
use crate::surface::Surface;
use crate::token::{IconToken, ICON_PLACEHOLDER};
use crate::{Color, Shadow, TextAlign, Vec2};

/// Draw `token` with the cursor at `cursor`
///
/// The prefix is drawn in bold of the surface's current font. If `solo` is
/// true (the token is alone on its line and is not `+`-prefixed) the icon is
/// drawn in the large standalone mode; in this mode the surface font is left
/// set to the standalone font, so the caller should bracket the call with
/// [`Surface::save`] and [`Surface::restore`].
///
/// Returns the cursor's new x position.
pub fn draw_token<S: Surface + ?Sized>(
    surface: &mut S,
    env: &Environment,
    catalog: &Catalog,
    token: &IconToken,
    cursor: Vec2,
    style: &LineStyle,
    solo: bool,
) -> f32 {
    let dir = style.direction;
    let Vec2(mut x, mut y) = cursor;
    let mut scale = style.scale;

    if solo {
        y += env.standalone_lift - style.scale * env.standalone_inset;
        let mut font = FontSpec::new(&env.specials_family, env.standalone_size).bold();
        scale = env.standalone_scale;
        if env.format == CardFormat::BaseCard {
            font.size = env.standalone_size_base;
            scale *= if token.symbol == COIN { 2.0 } else { 1.5 };
        } else {
            x += env.standalone_inset * style.scale;
        }
        surface.set_font(&font);
    }

    let half = surface.measure(ICON_PLACEHOLDER) / 2.0 + env.icon_padding;

    surface.save();
    if let Some(prefix) = token.prefix_text() {
        let bold = surface.font().bold();
        surface.set_font(&bold);
        surface.fill_text(&prefix, Vec2(x, y));
        x += dir.advance(surface.measure(&prefix) + env.prefix_padding * scale);
    }

    x += dir.advance(half);
    surface.translate(Vec2(x, y));
    surface.scale(Vec2::splat(scale));

    match surface.glyph_size(token.symbol) {
        Some(size) => {
            surface.set_shadow(Shadow {
                blur: env.shadow_blur,
                offset: Vec2::splat(scale * env.shadow_distance),
                color: env.shadow_color,
            });
            surface.draw_glyph(token.symbol, size * -0.5);
            surface.set_shadow(Shadow::NONE);
        }
        None => log::warn!("draw_token: no glyph for icon {:?}", token.symbol),
    }

    if !token.suffix.is_empty() {
        let color = match catalog.lookup(token.symbol) {
            Some(entry) => entry.text_color,
            None => Color::BLACK,
        };
        draw_overlay(surface, env, &token.suffix, color, scale);
    }
    surface.restore();

    x + dir.advance(half)
}

/// Draw cost text centred on a glyph
///
/// Coordinates are relative to the glyph centre in the glyph's (scaled)
/// coordinate space; `scale` is the icon scale, used to nudge the text.
fn draw_overlay<S: Surface + ?Sized>(
    surface: &mut S,
    env: &Environment,
    suffix: &str,
    color: Color,
    scale: f32,
) {
    let tuning = &env.overlay;
    let family = &env.specials_family;
    surface.set_align(TextAlign::Center);
    surface.set_fill(color);

    let mut big = 1.0;
    let mut nx = if scale > 1.4 {
        0.0
    } else {
        // Integer XOR: a small visual nudge dependent on scale
        (trunc_i32(-5.0 * scale) ^ 2) as f32
    };
    let mut ny = if scale > 1.0 {
        6.0 * scale
    } else if scale > 0.7 {
        12.0 * scale
    } else if scale > 0.5 {
        24.0 * scale
    } else {
        48.0 * scale
    };
    if scale > tuning.big_scale {
        big = tuning.big_number_scale;
        ny -= tuning.number_size * (1.0 - tuning.big_number_scale) / 2.0;
    }

    let len = suffix.chars().count();
    let mut cost = suffix.to_string();
    if len >= 2 {
        let last = suffix.chars().next_back();
        let special = match last {
            Some('*') => Some(('*', tuning.star_size, tuning.star_shift)),
            Some('+') => Some((tuning.plus_glyph, tuning.plus_size, 0.0)),
            _ => None,
        };

        match special {
            Some((glyph, size, shift)) => {
                if len > 2 {
                    big = tuning.multi_digit_shrink / count_f32(len - 1);
                }
                cost.pop();
                cost.push(' ');

                surface.set_font(&FontSpec::new(family, size).bold());
                let mut sx = if scale > 1.0 {
                    tuning.special_x / 2.0 * scale
                } else {
                    tuning.special_x * scale
                };
                let mut sy = if scale > 1.0 {
                    tuning.special_y_large * scale
                } else {
                    tuning.special_y * scale
                };
                if len >= 3 {
                    nx -= size / 3.0;
                    sx += size / 3.0;
                }
                sy += shift * scale;
                surface.fill_text(&glyph.to_string(), Vec2(sx, sy));
            }
            None => big = tuning.multi_digit_shrink / count_f32(len),
        }
    }

    surface.set_font(&FontSpec::new(family, tuning.number_size * big).bold());
    surface.fill_text(&cost, Vec2(nx, ny));
}
