// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Line fitting
//!
//! A paragraph is split on `\n` into [`LogicalLine`]s, each of which is
//! greedily wrapped into [`WrappedLine`]s. Candidate font sizes are tried in
//! decreasing order until the wrapped block fits the available height, or the
//! minimum size is reached; in the latter case the block overflows.

use crate::bidi::TextDirection;
use crate::emphasis::NBSP;
use crate::env::{Context, Environment};
use crate::fonts::{FontSpec, Measure};
use crate::token::{is_token_word, substitute_icons};

/// The kind of a line
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineKind {
    /// Empty line: a half-height spacer
    Blank,
    /// A lone `-`: drawn as a horizontal rule
    Rule,
    /// A single emphasised word, drawn large and bold
    Emphasis,
    /// A single icon token without `+` prefix, drawn large
    StandaloneIcon,
    /// Normal wrapped text
    Text,
}

/// A line of the input paragraph, before wrapping
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogicalLine {
    Blank,
    Rule,
    Emphasis(String),
    StandaloneIcon(String),
    Text(String),
}

impl LogicalLine {
    /// Classify a line
    ///
    /// Spaces are trimmed from both ends.
    pub fn classify(line: &str, ctx: &Context) -> Self {
        let line = line.trim_matches(' ');
        if line.is_empty() {
            LogicalLine::Blank
        } else if line == "-" {
            LogicalLine::Rule
        } else if !line.contains(' ') && ctx.emphasis.is_emphasized(line) {
            LogicalLine::Emphasis(line.to_string())
        } else if !line.starts_with('+') && is_token_word(line, ctx.catalog) {
            LogicalLine::StandaloneIcon(line.to_string())
        } else {
            LogicalLine::Text(line.to_string())
        }
    }

    pub fn kind(&self) -> LineKind {
        match self {
            LogicalLine::Blank => LineKind::Blank,
            LogicalLine::Rule => LineKind::Rule,
            LogicalLine::Emphasis(_) => LineKind::Emphasis,
            LogicalLine::StandaloneIcon(_) => LineKind::StandaloneIcon,
            LogicalLine::Text(_) => LineKind::Text,
        }
    }

    /// Line text (`""` for a blank line, `"-"` for a rule)
    pub fn text(&self) -> &str {
        match self {
            LogicalLine::Blank => "",
            LogicalLine::Rule => "-",
            LogicalLine::Emphasis(s) | LogicalLine::StandaloneIcon(s) | LogicalLine::Text(s) => s,
        }
    }
}

/// Bind numbers to keywords then split a paragraph into logical lines
pub fn split_paragraph(paragraph: &str, ctx: &Context) -> Vec<LogicalLine> {
    ctx.emphasis
        .bind(paragraph)
        .split('\n')
        .map(|line| LogicalLine::classify(line.trim_end_matches('\r'), ctx))
        .collect()
}

/// A wrapped line of text
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WrappedLine {
    pub text: String,
    /// Measured width, with icons substituted
    pub width: f32,
    /// Height contributed to the block
    pub height: f32,
    pub kind: LineKind,
    pub direction: TextDirection,
}

impl WrappedLine {
    fn new(text: String, width: f32, height: f32, kind: LineKind) -> Self {
        let direction = TextDirection::of(&text);
        WrappedLine {
            text,
            width,
            height,
            kind,
            direction,
        }
    }
}

/// Result of fitting
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitResult {
    /// Chosen font size (points)
    pub font_size: f32,
    /// Height of a normal line at `font_size`
    pub line_height: f32,
    pub lines: Vec<WrappedLine>,
    /// Sum of line heights
    pub total_height: f32,
}

impl FitResult {
    /// Baseline of the first line such that the block is centred on `center_y`
    pub fn first_baseline(&self, center_y: f32) -> f32 {
        center_y - (self.total_height - self.line_height) / 2.0
    }

    /// Widest line
    pub fn max_width(&self) -> f32 {
        self.lines.iter().map(|line| line.width).fold(0.0, f32::max)
    }
}

struct Fitter<'a, M: Measure + ?Sized> {
    measure: &'a M,
    env: &'a Environment,
    ctx: &'a Context<'a>,
    max_width: f32,
    bold_size: f32,
}

impl<'a, M: Measure + ?Sized> Fitter<'a, M> {
    fn width(&self, text: &str, font: &FontSpec) -> f32 {
        self.measure.text_width(&substitute_icons(text, self.ctx.catalog), font)
    }

    /// Width of a word as drawn: emphasised words are bold
    fn word_width(&self, word: &str, font: &FontSpec) -> f32 {
        if self.ctx.emphasis.is_emphasized(word) {
            self.width(word, &font.bold())
        } else {
            self.width(word, font)
        }
    }

    fn layout(&self, lines: &[LogicalLine], size: f32) -> FitResult {
        let env = self.env;
        let font = FontSpec::new(&env.text_family, size);
        let line_height = env.line_height(size);
        let mut out = Vec::with_capacity(lines.len());

        for line in lines {
            match line {
                LogicalLine::Blank => {
                    let h = size * env.blank_line;
                    out.push(WrappedLine::new(String::new(), 0.0, h, LineKind::Blank));
                }
                LogicalLine::Rule => {
                    let h = size * env.rule_line;
                    out.push(WrappedLine::new("-".into(), 0.0, h, LineKind::Rule));
                }
                LogicalLine::Emphasis(text) => {
                    let bold = FontSpec::new(&env.text_family, self.bold_size).bold();
                    let w = self.measure.text_width(text, &bold);
                    let h = env.line_height(self.bold_size);
                    out.push(WrappedLine::new(text.clone(), w, h, LineKind::Emphasis));
                }
                LogicalLine::StandaloneIcon(text) => {
                    let bold = FontSpec::new(&env.text_family, env.standalone_size).bold();
                    let w = self.width(text, &bold);
                    let h = env.standalone_height;
                    out.push(WrappedLine::new(text.clone(), w, h, LineKind::StandaloneIcon));
                }
                LogicalLine::Text(text) => self.wrap(text, &font, line_height, &mut out),
            }
        }

        let total_height = out.iter().map(|line| line.height).sum();
        FitResult {
            font_size: size,
            line_height,
            lines: out,
            total_height,
        }
    }

    /// Greedy wrap
    ///
    /// A word which does not fit on an empty line is placed there anyway.
    fn wrap(&self, text: &str, font: &FontSpec, height: f32, out: &mut Vec<WrappedLine>) {
        let space = self.measure.text_width(" ", font);
        let mut line = String::new();
        let mut width = 0.0;

        for word in text.split(' ') {
            let word = word.strip_prefix(NBSP).unwrap_or(word);
            if word.is_empty() {
                continue;
            }
            let w = self.word_width(word, font);

            if !line.is_empty() {
                if self.max_width > 0.0 && width + space + w > self.max_width {
                    let text = std::mem::take(&mut line);
                    out.push(WrappedLine::new(text, width, height, LineKind::Text));
                    width = 0.0;
                } else {
                    line.push(' ');
                    width += space;
                }
            }
            line.push_str(word);
            width += w;
        }

        out.push(WrappedLine::new(line, width, height, LineKind::Text));
    }
}

/// Fit a paragraph within `max_width × max_height`
///
/// Candidate sizes start at `base_size` and step down by
/// [`Environment::size_step`] while the block is too tall, stopping at
/// [`Environment::min_size`] (which is tried even when off the step grid). A `max_width` of zero (or less) disables
/// wrapping. Lines consisting of a single emphasised word are measured at
/// `bold_size` regardless of the candidate size.
pub fn fit<M: Measure + ?Sized>(
    measure: &M,
    env: &Environment,
    ctx: &Context,
    paragraph: &str,
    max_width: f32,
    max_height: f32,
    base_size: f32,
    bold_size: f32,
) -> FitResult {
    let lines = split_paragraph(paragraph, ctx);
    let fitter = Fitter {
        measure,
        env,
        ctx,
        max_width,
        bold_size,
    };
    let step = if env.size_step > 0.0 {
        env.size_step
    } else {
        Environment::default().size_step
    };

    let mut size = base_size;
    loop {
        let result = fitter.layout(&lines, size);
        log::trace!(
            "fit: size {size}pt gives {} lines, height {}",
            result.lines.len(),
            result.total_height
        );
        if result.total_height <= max_height || size <= env.min_size {
            log::debug!("fit: chose {size}pt for {} lines", result.lines.len());
            return result;
        }
        size = (size - step).max(env.min_size);
    }
}

/// Fit a single line (e.g. a title) within `max_width`
///
/// The size starts at `font.size` and steps down until the line fits, but
/// never to zero or below. A `max_width` of zero (or less) keeps the initial
/// size. The result holds exactly one line.
pub fn fit_single_line<M: Measure + ?Sized>(
    measure: &M,
    env: &Environment,
    ctx: &Context,
    font: &FontSpec,
    line: &str,
    max_width: f32,
) -> FitResult {
    let step = if env.size_step > 0.0 {
        env.size_step
    } else {
        Environment::default().size_step
    };
    let text = substitute_icons(line, ctx.catalog);
    let mut font = font.clone();
    let mut width = measure.text_width(&text, &font);
    while max_width > 0.0 && width > max_width && font.size - step > 0.0 {
        font.size -= step;
        width = measure.text_width(&text, &font);
    }
    log::trace!("fit_single_line: {font} for {line:?}");

    let line_height = env.line_height(font.size);
    let wrapped = WrappedLine::new(line.to_string(), width, line_height, LineKind::Text);
    FitResult {
        font_size: font.size,
        line_height,
        lines: vec![wrapped],
        total_height: line_height,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::emphasis::EmphasisConfig;

    /// Each char is as wide as the font size
    struct Mono;

    impl Measure for Mono {
        fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
            text.chars().count() as f32 * font.size
        }
    }

    fn measurer() -> Mono {
        Mono
    }

    fn run(text: &str, max_width: f32, max_height: f32, base: f32) -> FitResult {
        let emphasis = EmphasisConfig::new("");
        let ctx = Context::new(&emphasis);
        fit(&measurer(), &Environment::default(), &ctx, text, max_width, max_height, base, 64.0)
    }

    #[test]
    fn classify() {
        let emphasis = EmphasisConfig::new("");
        let ctx = Context::new(&emphasis);
        assert_eq!(LogicalLine::classify("  ", &ctx), LogicalLine::Blank);
        assert_eq!(LogicalLine::classify(" - ", &ctx), LogicalLine::Rule);
        assert_eq!(LogicalLine::classify("$2", &ctx).kind(), LineKind::StandaloneIcon);
        assert_eq!(LogicalLine::classify("+$2", &ctx).kind(), LineKind::Text);
        assert_eq!(LogicalLine::classify("$2 each", &ctx).kind(), LineKind::Text);
        let bound = emphasis.bind("+1 Card");
        assert_eq!(LogicalLine::classify(&bound, &ctx).kind(), LineKind::Emphasis);
        assert_eq!(LogicalLine::classify("+1 Card", &ctx).kind(), LineKind::Text);
    }

    #[test]
    fn wraps_greedily() {
        // "aa bb cc" at 10pt: words 20px, space 10px
        let result = run("aa bb cc", 55.0, 1000.0, 10.0);
        let texts: Vec<_> = result.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["aa bb", "cc"]);
        assert_eq!(result.lines[0].width, 50.0);
        assert_eq!(result.lines[1].width, 20.0);
    }

    #[test]
    fn over_wide_word_is_not_preceded_by_empty_line() {
        let result = run("aaaaaaaa b", 30.0, 1000.0, 10.0);
        let texts: Vec<_> = result.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["aaaaaaaa", "b"]);
    }

    #[test]
    fn zero_width_disables_wrapping() {
        let result = run("a b c d e f g h i j", 0.0, 1000.0, 10.0);
        assert_eq!(result.lines.len(), 1);
    }

    #[test]
    fn special_heights() {
        let result = run("a\n\n-\n$2", 0.0, 10000.0, 20.0);
        let kinds: Vec<_> = result.lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            [LineKind::Text, LineKind::Blank, LineKind::Rule, LineKind::StandaloneIcon]
        );
        let heights: Vec<_> = result.lines.iter().map(|l| l.height).collect();
        assert_eq!(heights[1], 10.0);
        assert_eq!(heights[2], 15.0);
        assert_eq!(heights[3], 275.0);
        assert_eq!(result.total_height, heights.iter().sum::<f32>());
    }

    #[test]
    fn shrinks_until_fit() {
        // One line of 1.433 × size must fit in 30px: 20pt is the first size
        let result = run("a", 0.0, 30.0, 30.0);
        assert_eq!(result.font_size, 20.0);
        // Never below the minimum
        let result = run("a", 0.0, 1.0, 30.0);
        assert_eq!(result.font_size, 16.0);
        assert!(result.total_height > 1.0);
    }

    #[test]
    fn off_grid_base_stops_at_minimum() {
        // 65 steps down by 2 through odd sizes; 17 is followed by 16, not 15
        let result = run("a b c", 0.0, 1.0, 65.0);
        assert_eq!(result.font_size, 16.0);

        let result = run("a", 0.0, 1.433 * 16.5, 17.0);
        assert_eq!(result.font_size, 16.0);

        // A base below the minimum is used as is
        let result = run("a", 0.0, 1.0, 12.0);
        assert_eq!(result.font_size, 12.0);
    }

    #[test]
    fn first_baseline_centres_block() {
        let result = run("a\nb", 0.0, 1000.0, 10.0);
        assert_eq!(result.first_baseline(100.0), 100.0 - result.line_height / 2.0);
    }

    #[test]
    fn single_line_shrinks() {
        let emphasis = EmphasisConfig::new("");
        let ctx = Context::new(&emphasis);
        let env = Environment::default();
        let font = FontSpec::new("myTitle", 20.0);
        let result = fit_single_line(&measurer(), &env, &ctx, &font, "abcd", 60.0);
        assert_eq!(result.font_size, 14.0);
        assert_eq!(result.lines[0].width, 56.0);

        let result = fit_single_line(&measurer(), &env, &ctx, &font, "abcd", 0.0);
        assert_eq!(result.font_size, 20.0);

        let result = fit_single_line(&measurer(), &env, &ctx, &font, "abcd", 0.5);
        assert_eq!(result.font_size, 2.0);
    }
}
