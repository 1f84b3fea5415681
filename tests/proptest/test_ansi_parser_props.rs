//! Property-based tests for the ANSI parser
//!
//! These tests use proptest to generate random inputs and verify that a
//! parse pass never loses text, never panics and keeps its style rules.

use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;
use sgrstyle::ansi::resolve_8bit;
use sgrstyle::terminal::sgr::SgrInterpreter;
use sgrstyle::terminal::{Scanner, Token};
use sgrstyle::{parse_ansi, strip_ansi, AnsiParser, ParserConfig, StyleState, StyledNode};

fn plain_parser() -> AnsiParser {
    AnsiParser::with_config(&ParserConfig {
        detect_links: false,
        ..ParserConfig::default()
    })
}

/// Every recognized sequence, matched without going through the scanner
static RECOGNIZED_SEQUENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[ABCDHIJKfhmpsu]").unwrap());

fn joined(nodes: &[StyledNode]) -> String {
    nodes.iter().map(StyledNode::text).collect()
}

proptest! {
    #[test]
    fn test_parser_doesnt_panic_on_random_input(s in "\\PC*") {
        let _ = parse_ansi(&s);
    }

    #[test]
    fn test_parser_preserves_plain_text(s in "[a-zA-Z0-9 \\[;]{1,200}") {
        let nodes = plain_parser().parse(&s);
        prop_assert_eq!(nodes.len(), 1);
        prop_assert_eq!(nodes[0].text(), s);
    }

    #[test]
    fn test_node_text_matches_input_without_sequences(
        s in "(\\x1b|\\[|[0-9;]|[mHKz]|[a-z ]){0,200}"
    ) {
        let expected = RECOGNIZED_SEQUENCE.replace_all(&s, "");
        prop_assert_eq!(joined(&parse_ansi(&s)), &*expected);
        prop_assert_eq!(strip_ansi(&s), &*expected);
    }

    #[test]
    fn test_no_empty_nodes(s in "(\\x1b\\[[0-9;]{0,6}m|[a-z]{0,3}){0,30}") {
        for node in plain_parser().parse(&s) {
            prop_assert!(!node.text().is_empty());
        }
    }

    #[test]
    fn test_node_styles_follow_live_state(s in "(\\x1b\\[[0-9;]{0,6}m|[a-z]{1,3}){0,30}") {
        // Trailing text carries the state left by every sequence before it
        let nodes = plain_parser().parse(&s);
        let last = nodes.last().map(|node| node.style);
        let mut state = StyleState::default();
        let mut ends_with_text = false;
        let interpreter = SgrInterpreter::new();
        for token in Scanner::new(&s) {
            ends_with_text = matches!(token, Token::Text(_));
            if let Token::Sgr(params) = token {
                state = interpreter.apply(state, &params);
            }
        }
        if let (Some(style), true) = (last, ends_with_text) {
            prop_assert_eq!(style, state);
        }
    }

    #[test]
    fn test_duplicated_codes_are_idempotent(codes in prop::collection::vec(
        prop::sample::select(vec![1u32, 3, 4, 30, 31, 37, 39, 40, 45, 49]), 1..10,
    )) {
        let interpreter = SgrInterpreter::new();
        let doubled: Vec<u32> = codes.iter().flat_map(|c| [*c, *c]).collect();
        prop_assert_eq!(
            interpreter.apply(StyleState::default(), &codes),
            interpreter.apply(StyleState::default(), &doubled)
        );
    }

    #[test]
    fn test_reset_clears_any_state(codes in prop::collection::vec(0u32..110, 0..12)) {
        let interpreter = SgrInterpreter::with_bright_colors(true);
        let state = interpreter.apply(StyleState::default(), &codes);
        prop_assert_eq!(interpreter.apply(state, &[0]), StyleState::default());
    }

    #[test]
    fn test_foreground_codes_keep_background(bg in 40u32..48, fg in 30u32..38) {
        let interpreter = SgrInterpreter::new();
        let before = interpreter.apply(StyleState::default(), &[bg]);
        let after = interpreter.apply(before, &[fg]);
        prop_assert_eq!(after.background, before.background);
        let cleared = interpreter.apply(after, &[39]);
        prop_assert_eq!(cleared.background, before.background);
        prop_assert_eq!(cleared.foreground, None);
    }

    #[test]
    fn test_rgb_colors(r in 0u32..=255, g in 0u32..=255, b in 0u32..=255) {
        let nodes = plain_parser().parse(&format!("\x1b[38;2;{};{};{}mtext", r, g, b));
        let rgb = nodes[0].foreground_custom_rgb().unwrap();
        prop_assert_eq!((rgb.r as u32, rgb.g as u32, rgb.b as u32), (r, g, b));
    }

    #[test]
    fn test_out_of_range_rgb_is_noop(r in 256u32..100000, pos in 0usize..3) {
        let mut parts = ["1".to_string(), "2".to_string(), "3".to_string()];
        parts[pos] = r.to_string();
        let nodes = plain_parser().parse(&format!("\x1b[48;2;{}mtext", parts.join(";")));
        prop_assert!(!nodes[0].has_style());
    }

    #[test]
    fn test_256_color_codes(index in 0u32..=255) {
        let nodes = plain_parser().parse(&format!("\x1b[38;5;{}mtext", index));
        if index < 16 {
            prop_assert_eq!(nodes[0].foreground_basic_index(), Some(index as u8));
        } else {
            prop_assert_eq!(nodes[0].foreground_custom_rgb(), resolve_8bit(index));
        }
    }

    #[test]
    fn test_extended_color_swallows_trailing_codes(
        index in 16u32..=255,
        rest in prop::collection::vec(0u32..110, 0..8),
    ) {
        let mut params = vec![48, 5, index];
        params.extend(rest);
        let state = SgrInterpreter::new().apply(StyleState::default(), &params);
        prop_assert!(!state.bold && !state.italic && !state.underline);
        prop_assert_eq!(state.foreground, None);
        prop_assert!(state.background.is_some());
    }

    #[test]
    fn test_cube_formula(r in 0u32..6, g in 0u32..6, b in 0u32..6) {
        let rgb = resolve_8bit(16 + 36 * r + 6 * g + b).unwrap();
        prop_assert_eq!((rgb.r as u32, rgb.g as u32, rgb.b as u32), (r * 51, g * 51, b * 51));
    }

    #[test]
    fn test_links_cover_exact_text(
        s in "[a-z ]{0,20}(https://[a-z]{1,10}\\.com[/a-z.,)]{0,8})?[a-z .]{0,20}"
    ) {
        let nodes = parse_ansi(&s);
        prop_assert_eq!(joined(&nodes), s);
    }
}
