// End-to-end layout tests

use card_text::catalog::catalog;
use card_text::display::{DisplayList, DrawCmd};
use card_text::emphasis::EmphasisConfig;
use card_text::fit::{fit, LineKind};
use card_text::fonts::{FixedAdvance, FontSpec, Measure};
use card_text::surface::Surface;
use card_text::token::{parse_token, substitute_icons, tokenize_word, Sign};
use card_text::write::{write_line, write_paragraph};
use card_text::{Context, Environment, LineStyle, TextAlign, TextDirection, Vec2};

const DESCRIPTION: &str = "+1 Card\n+1 Action\n\nReveal the top 3 cards of your deck. \
    Put the Actions into your hand and discard the rest. If you did, +$2.\n-\n\
    When you discard this from play, you may put it onto your deck.";

fn surface() -> DisplayList<FixedAdvance> {
    let symbols = catalog().entries().map(|e| e.symbol);
    DisplayList::new(FixedAdvance::default()).with_glyphs(symbols, Vec2(120.0, 120.0))
}

#[test]
fn wrap_respects_width() {
    let env = Environment::default();
    let emphasis = EmphasisConfig::default();
    let ctx = Context::new(&emphasis);
    let m = FixedAdvance::default();

    for max_width in [300.0, 600.0, 960.0] {
        let result = fit(&m, &env, &ctx, DESCRIPTION, max_width, 660.0, 64.0, 64.0);
        let font = FontSpec::new(&env.text_family, result.font_size);
        for line in result.lines.iter().filter(|l| l.kind == LineKind::Text) {
            assert!(line.width <= max_width + 1e-3, "{line:?} exceeds {max_width}");
            // stored width is at least the plain measure of the line
            let plain = m.text_width(&substitute_icons(&line.text, ctx.catalog), &font);
            assert!(plain <= line.width + 1e-3);
        }
    }

    // Zero width: one line per logical line
    let result = fit(&m, &env, &ctx, DESCRIPTION, 0.0, 1e6, 64.0, 64.0);
    assert_eq!(result.lines.len(), DESCRIPTION.lines().count());
}

#[test]
fn size_search_is_monotonic_and_terminates() {
    let env = Environment::default();
    let emphasis = EmphasisConfig::default();
    let ctx = Context::new(&emphasis);
    let m = FixedAdvance::default();

    let result = fit(&m, &env, &ctx, DESCRIPTION, 960.0, 660.0, 64.0, 64.0);
    assert!(result.font_size <= 64.0 && result.font_size >= env.min_size);
    assert!(result.total_height <= 660.0);
    if result.font_size < 64.0 {
        // the next larger candidate does not fit
        let larger = result.font_size + env.size_step;
        let r2 = fit(&m, &env, &ctx, DESCRIPTION, 960.0, 660.0, larger, 64.0);
        assert_eq!(r2.font_size, result.font_size);
    }

    // Impossible height: stops at the minimum and overflows
    let result = fit(&m, &env, &ctx, DESCRIPTION, 960.0, 10.0, 64.0, 64.0);
    assert_eq!(result.font_size, env.min_size);
    assert!(result.total_height > 10.0);
}

#[test]
fn token_round_trip_for_every_symbol() {
    for entry in catalog().entries() {
        let word = format!("-3{}2*", entry.symbol);
        let (token, rest) = parse_token(&word, catalog()).unwrap();
        assert_eq!(token.sign, Some(Sign::Minus));
        assert_eq!(token.number, Some(3));
        assert_eq!(token.symbol, entry.symbol);
        assert_eq!(token.suffix, "2*");
        assert!(rest.is_empty());
    }
}

#[test]
fn chained_tokens() {
    let word = tokenize_word("$3%2", catalog());
    let symbols: Vec<_> = word.tokens.iter().map(|t| (t.symbol, t.suffix.as_str())).collect();
    assert_eq!(symbols, [('$', "3"), ('%', "2")]);
    assert!(word.tail.is_empty());
}

fn drawn_words(line: &str, direction: TextDirection) -> Vec<(String, f32, TextAlign)> {
    let env = Environment::default();
    let emphasis = EmphasisConfig::default();
    let ctx = Context::new(&emphasis);
    let mut list = surface();
    list.set_font(&FontSpec::new("myText", 40.0));
    let style = LineStyle::new("myText", 0.5, 64.0).with_direction(direction);
    write_line(&mut list, &env, &ctx, line, Vec2(500.0, 100.0), &style);
    list.texts()
        .map(|(t, cmd)| (t.to_string(), cmd.output_pos().0, cmd.state().align))
        .collect()
}

#[test]
fn rtl_mirroring() {
    let line = "קח את הקלף";
    let direction = TextDirection::of(line);
    assert_eq!(direction, TextDirection::Rtl);
    let drawn = drawn_words(line, direction);
    let words: Vec<_> = drawn.iter().map(|(t, _, _)| t.as_str()).collect();
    assert_eq!(words, ["הקלף", "את", "קח"]);
    assert!(drawn.iter().all(|(_, _, align)| *align == TextAlign::Right));
    // cursor moves leftwards
    assert!(drawn.windows(2).all(|w| w[1].1 < w[0].1));
    assert_eq!(drawn[0].1, 500.0);

    let line = "take the card";
    let direction = TextDirection::of(line);
    assert_eq!(direction, TextDirection::Ltr);
    let drawn = drawn_words(line, direction);
    let words: Vec<_> = drawn.iter().map(|(t, _, _)| t.as_str()).collect();
    assert_eq!(words, ["take", "the", "card"]);
    assert!(drawn.iter().all(|(_, _, align)| *align == TextAlign::Left));
    assert!(drawn.windows(2).all(|w| w[1].1 > w[0].1));
}

#[test]
fn idempotent_emphasis() {
    let words = ["+1 Horse", "Ticket", "ticket +2", "Card", "horses", "plain", "2 Favors"];
    let mut config = EmphasisConfig::new("Horse; Ticket");
    let first: Vec<_> = words.iter().map(|w| config.is_emphasized(w)).collect();
    config.rebuild("Horse; Ticket");
    config.rebuild("Horse; Ticket");
    let second: Vec<_> = words.iter().map(|w| config.is_emphasized(w)).collect();
    assert_eq!(first, second);
    assert_eq!(first, [true, true, true, true, false, false, true]);
}

#[test]
fn blank_line_is_half_height() {
    let env = Environment::default();
    let emphasis = EmphasisConfig::default();
    let ctx = Context::new(&emphasis);
    let m = FixedAdvance::default();

    let with_blank = fit(&m, &env, &ctx, "a\n\nb", 0.0, 1e6, 40.0, 64.0);
    let without = fit(&m, &env, &ctx, "a\nb", 0.0, 1e6, 40.0, 64.0);
    let blank = with_blank.total_height - without.total_height;
    assert!((blank - 20.0).abs() < 1e-3);
    assert!((blank - with_blank.line_height / env.line_height / 2.0).abs() < 1e-3);
}

#[test]
fn standalone_icon_line() {
    let env = Environment::default();
    let emphasis = EmphasisConfig::default();
    let ctx = Context::new(&emphasis);
    let m = FixedAdvance::default();

    for base in [20.0, 40.0, 64.0] {
        let result = fit(&m, &env, &ctx, "Gain a card.\n$5", 10.0, 1e6, base, 64.0);
        let last = result.lines.last().unwrap();
        assert_eq!(last.kind, LineKind::StandaloneIcon);
        assert_eq!(last.text, "$5");
        assert_eq!(last.height, env.standalone_height);
    }

    // A `+` prefix is normal text
    let result = fit(&m, &env, &ctx, "+$5", 0.0, 1e6, 40.0, 64.0);
    assert_eq!(result.lines[0].kind, LineKind::Text);
}

#[test]
fn paragraph_is_drawn_balanced() {
    let env = Environment::default();
    let emphasis = EmphasisConfig::default();
    let ctx = Context::new(&emphasis);
    let mut list = surface();
    let result = write_paragraph(
        &mut list,
        &env,
        &ctx,
        DESCRIPTION,
        Vec2(701.0, 1500.0),
        960.0,
        660.0,
        64.0,
        64.0,
    );
    assert_eq!(list.depth(), 0);

    let rects = list.commands().iter().filter(|c| matches!(c, DrawCmd::Rect { .. }));
    assert_eq!(rects.count(), 1);
    let glyphs: Vec<_> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Glyph { symbol, .. } => Some(*symbol),
            _ => None,
        })
        .collect();
    assert_eq!(glyphs, ['$']);

    // "+1 Card" is a lone bold word drawn at the bold size
    let (text, cmd) = list.texts().next().unwrap();
    assert_eq!(text, "+1\u{00A0}Card");
    assert!(cmd.state().font.is_bold());
    assert_eq!(cmd.state().font.size, 64.0);
    assert!(result.lines.iter().any(|l| l.kind == LineKind::Rule));
}
