// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Image recolouring
//!
//! Card frame images are tinted by per-channel factors. A list of factors is
//! laid out as `[mul_r, mul_g, mul_b, add_r, add_g, add_b, accent...]`; with
//! offset zero the image is tinted between the additive colour (at black)
//! and the multiplied colour (at white). A non-zero offset selects a group of
//! three multipliers (e.g. an accent colour) and applies it alone.
//!
//! Recoloured images are cached by [`RecolorKey`] and invalidated by tag.

use std::collections::HashMap;
use thiserror::Error;

/// Recolouring errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecolorError {
    #[error("factor offset {0} leaves fewer than three factors")]
    Offset(usize),
}

/// Number of factors after padding with accent colours
pub const FULL_FACTORS: usize = 12;

/// Identifies a source image
pub type ImageId = u32;

/// Identifies a palette (a list of factors)
pub type PaletteId = u32;

/// Cache key of a recoloured image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecolorKey {
    pub image: ImageId,
    pub palette: PaletteId,
}

/// Recolour RGBA pixel data in place
///
/// Fully transparent pixels are left unchanged. `factors` is padded with
/// zeros to six entries, and for a non-zero `offset` further padded from the
/// same positions of `accent` (or zero) to [`FULL_FACTORS`] entries.
pub fn recolor_rgba(
    rgba: &mut [u8],
    factors: &[f32],
    offset: usize,
    accent: &[f32],
) -> Result<(), RecolorError> {
    let mut f: Vec<f32> = factors.to_vec();
    if f.len() < 6 {
        f.resize(6, 0.0);
    }

    if offset == 0 {
        let (mul, add) = ([f[0] - f[3], f[1] - f[4], f[2] - f[5]], [f[3], f[4], f[5]]);
        for px in rgba.chunks_exact_mut(4).filter(|px| px[3] != 0) {
            for ch in 0..3 {
                let v = add[ch] * 255.0 + f32::from(px[ch]) * mul[ch];
                px[ch] = clamp_u8(v.round());
            }
        }
        return Ok(());
    }

    while f.len() < FULL_FACTORS {
        f.push(accent.get(f.len()).copied().unwrap_or(0.0));
    }
    let mul = f
        .get(offset..)
        .and_then(|rest| rest.get(..3))
        .ok_or(RecolorError::Offset(offset))?;
    for px in rgba.chunks_exact_mut(4).filter(|px| px[3] != 0) {
        for ch in 0..3 {
            px[ch] = clamp_u8((f32::from(px[ch]) * mul[ch]).round());
        }
    }
    Ok(())
}

fn clamp_u8(v: f32) -> u8 {
    // NaN maps to zero
    v.clamp(0.0, 255.0) as u8
}

/// A cache of recoloured images
///
/// Entries are invalidated wholesale by tag: all entries of an image, all
/// entries of a palette or everything.
#[derive(Clone, Debug)]
pub struct RecolorCache<T> {
    map: HashMap<RecolorKey, T>,
}

impl<T> Default for RecolorCache<T> {
    fn default() -> Self {
        RecolorCache {
            map: HashMap::new(),
        }
    }
}

impl<T> RecolorCache<T> {
    /// Construct an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, key: RecolorKey) -> Option<&T> {
        self.map.get(&key)
    }

    /// Get an entry, creating it with `f` if missing
    pub fn get_or_insert_with(&mut self, key: RecolorKey, f: impl FnOnce() -> T) -> &T {
        self.map.entry(key).or_insert_with(|| {
            log::trace!("RecolorCache: miss for {key:?}");
            f()
        })
    }

    /// Get an entry, creating it with fallible `f` if missing
    pub fn try_get_or_insert_with<E>(
        &mut self,
        key: RecolorKey,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<&T, E> {
        use std::collections::hash_map::Entry;
        match self.map.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(f()?)),
        }
    }

    /// Remove all entries of `image`; returns the number removed
    pub fn invalidate_image(&mut self, image: ImageId) -> usize {
        self.retain(|key| key.image != image)
    }

    /// Remove all entries of `palette`; returns the number removed
    pub fn invalidate_palette(&mut self, palette: PaletteId) -> usize {
        self.retain(|key| key.palette != palette)
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    fn retain(&mut self, keep: impl Fn(&RecolorKey) -> bool) -> usize {
        let before = self.map.len();
        self.map.retain(|key, _| keep(key));
        let removed = before - self.map.len();
        if removed > 0 {
            log::debug!("RecolorCache: invalidated {removed} entries");
        }
        removed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tint_between_add_and_mul() {
        // black maps to the additive colour, white to the multiplied colour
        let factors: [f32; 6] = [1.0, 0.5, 0.0, 0.0, 0.0, 0.2];
        let mut rgba: [u8; 12] = [0, 0, 0, 255, 255, 255, 255, 255, 9, 9, 9, 0];
        recolor_rgba(&mut rgba, &factors, 0, &[]).unwrap();
        assert_eq!(&rgba[0..4], &[0, 0, 51, 255]);
        assert_eq!(&rgba[4..8], &[255, 128, 0, 255]);
        // transparent pixel untouched
        assert_eq!(&rgba[8..12], &[9, 9, 9, 0]);
    }

    #[test]
    fn offset_uses_accent_padding() {
        let accent = [0.0; 6].into_iter().chain([2.0, 0.5, 1.0, 0.0, 0.0, 0.0]);
        let accent: Vec<f32> = accent.collect();
        let mut rgba: [u8; 4] = [100, 100, 100, 255];
        recolor_rgba(&mut rgba, &[1.0, 1.0, 1.0], 6, &accent).unwrap();
        assert_eq!(rgba, [200, 50, 100, 255]);

        assert_eq!(
            recolor_rgba(&mut rgba, &[], 10, &accent),
            Err(RecolorError::Offset(10))
        );
    }

    #[test]
    fn cache_invalidation_by_tag() {
        let mut cache = RecolorCache::new();
        let key = |image, palette| RecolorKey { image, palette };
        cache.get_or_insert_with(key(1, 0), || "a");
        cache.get_or_insert_with(key(2, 0), || "b");
        cache.get_or_insert_with(key(2, 1), || "c");
        assert_eq!(*cache.get_or_insert_with(key(1, 0), || "x"), "a");

        assert_eq!(cache.invalidate_image(2), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.invalidate_palette(0), 1);
        assert!(cache.is_empty());

        let r: Result<_, ()> = cache.try_get_or_insert_with(key(3, 3), || Ok("d"));
        assert_eq!(r, Ok(&"d"));
        cache.clear();
        assert!(cache.get(key(3, 3)).is_none());
    }
}
