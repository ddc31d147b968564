// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Icon catalog
//!
//! Icons are single-char symbols embedded in text (e.g. `$` for a coin). The
//! catalog maps each symbol to its display name, the colour of overlay text
//! drawn on the icon and its category.

use crate::Color;
use std::sync::LazyLock;

/// Icon category
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Treasure,
    Victory,
}

/// An entry of the [`Catalog`]
#[derive(Clone, Debug, PartialEq)]
pub struct IconEntry {
    pub symbol: char,
    pub name: &'static str,
    /// Colour of cost text drawn over the icon
    pub text_color: Color,
    pub category: Category,
    /// Whether the icon may appear in a price line
    pub in_price: bool,
}

impl IconEntry {
    const fn new(symbol: char, name: &'static str, text_color: Color, category: Category) -> Self {
        IconEntry {
            symbol,
            name,
            text_color,
            category,
            in_price: true,
        }
    }
}

/// Symbol of the coin icon
pub const COIN: char = '$';

const DEFAULT_ENTRIES: [IconEntry; 7] = [
    IconEntry::new('@', "Debt", Color::WHITE, Category::Treasure),
    IconEntry::new('^', "Potion", Color::WHITE, Category::Treasure),
    IconEntry::new('%', "VP", Color::WHITE, Category::Victory),
    IconEntry::new('#', "VP-Token", Color::WHITE, Category::Victory),
    IconEntry::new(COIN, "Coin", Color::BLACK, Category::Treasure),
    IconEntry {
        in_price: false,
        ..IconEntry::new('*', "Sun", Color::BLACK, Category::Treasure)
    },
    IconEntry::new('§', "Custom Icon", Color::WHITE, Category::Treasure),
];

/// A catalog of icons
///
/// Symbols are unique. The order of entries is significant: it is the index
/// used by [`Catalog::index_of`] (e.g. to locate glyph images).
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    entries: Vec<IconEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            entries: DEFAULT_ENTRIES.to_vec(),
        }
    }
}

impl Catalog {
    /// Construct from a list of entries
    ///
    /// Later duplicates of a symbol are dropped.
    pub fn new(entries: impl IntoIterator<Item = IconEntry>) -> Self {
        let mut list: Vec<IconEntry> = Vec::new();
        for entry in entries {
            if list.iter().any(|e| e.symbol == entry.symbol) {
                log::warn!("Catalog: duplicate symbol {:?} ignored", entry.symbol);
                continue;
            }
            list.push(entry);
        }
        Catalog { entries: list }
    }

    /// Look up a symbol
    pub fn lookup(&self, symbol: char) -> Option<&IconEntry> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    /// True if `c` is a catalog symbol
    #[inline]
    pub fn is_symbol(&self, c: char) -> bool {
        self.lookup(c).is_some()
    }

    /// Index of a symbol within the catalog
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.entries.iter().position(|e| e.symbol == symbol)
    }

    /// Iterate over all entries
    pub fn entries(&self) -> impl Iterator<Item = &IconEntry> {
        self.entries.iter()
    }

    /// Iterate over symbols permitted in a price line
    pub fn price_symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().filter(|e| e.in_price).map(|e| e.symbol)
    }

    /// Count occurrences of price-permitted symbols in `line`
    ///
    /// Card layouts use this to shift the type line away from a long price.
    pub fn count_price_icons(&self, line: &str) -> usize {
        line.chars()
            .filter(|c| self.lookup(*c).map(|e| e.in_price).unwrap_or(false))
            .count()
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::default);

/// Access the default [`Catalog`]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookup_default() {
        let cat = catalog();
        let coin = cat.lookup('$').unwrap();
        assert_eq!(coin.name, "Coin");
        assert_eq!(coin.text_color, Color::BLACK);
        assert_eq!(cat.lookup('%').unwrap().category, Category::Victory);
        assert!(cat.lookup('a').is_none());
        assert_eq!(cat.index_of('§'), Some(6));
    }

    #[test]
    fn sun_excluded_from_price() {
        let cat = catalog();
        assert!(cat.is_symbol('*'));
        assert!(!cat.price_symbols().any(|c| c == '*'));
        assert_eq!(cat.price_symbols().count(), 6);
        assert_eq!(cat.count_price_icons("$4*^"), 2);
    }

    #[test]
    fn duplicates_dropped() {
        let cat = Catalog::new(DEFAULT_ENTRIES.iter().cloned().chain(DEFAULT_ENTRIES.to_vec()));
        assert_eq!(cat.entries().count(), DEFAULT_ENTRIES.len());
    }
}
