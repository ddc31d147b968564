// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font library

#![allow(clippy::len_without_is_empty)]

use super::{FontFlags, FontSpec, Measure};
use crate::conv::{to_u32, DPU};
use thiserror::Error;
use ttf_parser::{name_id, Face};

/// Font loading errors
#[derive(Error, Debug)]
pub enum FontError {
    #[error("font load error")]
    TtfParser(#[from] ttf_parser::FaceParsingError),
    #[error("font has no family name")]
    NoFamilyName,
}

/// No matching font found
#[derive(Error, Debug, PartialEq, Eq)]
#[error("no font matching family '{0}'")]
pub struct NoFontMatch(pub String);

/// Font face identifier
///
/// Identifies a loaded font face within the [`FontLibrary`] by index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FaceId(pub(crate) u32);

impl FaceId {
    /// Get as `usize`
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

struct FaceStore {
    face: Face<'static>,
    family: String,
    flags: FontFlags,
}

/// Library of loaded font faces
///
/// Faces are registered under a family name (by default the name stored in
/// the font file) and style flags. Font data is retained until program exit.
#[derive(Default)]
pub struct FontLibrary {
    faces: Vec<FaceStore>,
}

impl std::fmt::Debug for FontLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut list = f.debug_list();
        for store in &self.faces {
            list.entry(&(&store.family, store.flags));
        }
        list.finish()
    }
}

impl FontLibrary {
    /// Construct an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loaded faces
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Load a face, registering it under the family name and style read from
    /// the font file itself
    pub fn load(&mut self, data: Vec<u8>, index: u32) -> Result<FaceId, FontError> {
        let data: &'static [u8] = Box::leak(data.into_boxed_slice());
        let face = Face::parse(data, index)?;
        let family = family_name(&face).ok_or(FontError::NoFamilyName)?;
        let mut flags = FontFlags::empty();
        flags.set(FontFlags::BOLD, face.is_bold());
        flags.set(FontFlags::ITALIC, face.is_italic() || face.is_oblique());
        Ok(self.push(face, family, flags))
    }

    /// Load a face under an alias family name and explicit style
    ///
    /// This is how custom families such as `myText` are registered.
    pub fn load_as(
        &mut self,
        data: Vec<u8>,
        index: u32,
        family: &str,
        flags: FontFlags,
    ) -> Result<FaceId, FontError> {
        let data: &'static [u8] = Box::leak(data.into_boxed_slice());
        let face = Face::parse(data, index)?;
        Ok(self.push(face, family.to_string(), flags))
    }

    fn push(&mut self, face: Face<'static>, family: String, flags: FontFlags) -> FaceId {
        let id = FaceId(to_u32(self.faces.len()));
        log::debug!("FontLibrary: loaded {family} ({flags:?}) as {id:?}");
        self.faces.push(FaceStore {
            face,
            family,
            flags,
        });
        id
    }

    /// Select the face best matching `font`
    ///
    /// An exact family and style match is preferred; failing that, any face
    /// of the family (nearest style first).
    pub fn select(&self, font: &FontSpec) -> Result<FaceId, NoFontMatch> {
        let mut best: Option<(u32, usize)> = None;
        for (i, store) in self.faces.iter().enumerate() {
            if !store.family.eq_ignore_ascii_case(&font.family) {
                continue;
            }
            let distance = (store.flags ^ font.flags).bits().count_ones();
            if best.map(|(d, _)| distance < d).unwrap_or(true) {
                best = Some((distance, i));
            }
        }
        best.map(|(_, i)| FaceId(to_u32(i)))
            .ok_or_else(|| NoFontMatch(font.family.clone()))
    }

    /// Advance width of `text` using face `id`
    pub fn face_width(&self, id: FaceId, text: &str, pt_size: f32) -> f32 {
        let face = &self.faces[id.get()].face;
        let dpu = DPU::from_pt(pt_size, face.units_per_em());
        let notdef = ttf_parser::GlyphId(0);
        text.chars()
            .map(|c| {
                let glyph = face.glyph_index(c).unwrap_or(notdef);
                dpu.u16_to_px(face.glyph_hor_advance(glyph).unwrap_or(0))
            })
            .sum()
    }
}

impl Measure for FontLibrary {
    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        match self.select(font) {
            Ok(id) => self.face_width(id, text, font.size),
            Err(err) if !self.faces.is_empty() => {
                log::warn!("FontLibrary: {err}; measuring with first face");
                self.face_width(FaceId(0), text, font.size)
            }
            Err(err) => {
                log::warn!("FontLibrary: {err}; no faces loaded");
                0.0
            }
        }
    }
}

fn family_name(face: &Face) -> Option<String> {
    let names = face.names();
    let find = |id: u16| {
        names
            .into_iter()
            .filter(|name| name.name_id == id && name.is_unicode())
            .find_map(|name| name.to_string())
    };
    find(name_id::TYPOGRAPHIC_FAMILY).or_else(|| find(name_id::FAMILY))
}
