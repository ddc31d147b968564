// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Card text layout library
//!
//! Lays out and draws the text of game-card artwork: titles, type lines,
//! price lines and descriptions with inline icons, emphasised keywords and
//! right-to-left lines. Descriptions are fitted to a box by greedy wrapping
//! and a decreasing font size search.
//!
//! Drawing happens through the [`surface::Surface`] trait; a
//! [`display::DisplayList`] records draw commands for replay by a backend.
//!
//! ```
//! use card_text::{display::DisplayList, fonts::FixedAdvance, write, Vec2};
//! use card_text::{emphasis::EmphasisConfig, Context, Environment};
//!
//! let env = Environment::default();
//! let emphasis = EmphasisConfig::new("Horse");
//! let ctx = Context::new(&emphasis);
//! let mut surface = DisplayList::new(FixedAdvance::default());
//! let fit = write::write_paragraph(
//!     &mut surface, &env, &ctx,
//!     "+1 Card\n+1 Action\n\nGain a Horse.",
//!     Vec2(701.0, 1500.0), 960.0, 660.0, 64.0, 64.0,
//! );
//! assert_eq!(fit.lines.len(), 4);
//! ```

mod env;
pub use env::*;

mod data;
pub use data::*;

mod bidi;
pub use bidi::TextDirection;

pub mod catalog;
pub mod compose;
pub mod conv;
pub mod display;
pub mod emphasis;
pub mod fit;
pub mod fonts;
pub mod recolor;
pub mod redraw;
pub mod surface;
pub mod token;
pub mod write;
