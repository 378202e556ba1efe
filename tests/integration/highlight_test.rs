//! Integration tests for highlight tracking while typing and erasing

use super::helpers::{fixtures_dir, temp_fixture};
use heroline::animator::{grapheme, AnimatorError, Phase, Phrase, SimulatedController, Timings};
use heroline::Config;

fn max_phrase() -> Phrase {
    Phrase::new("Hello, I am Max").with_highlight_text("Max").unwrap()
}

#[test]
fn highlight_resolves_to_grapheme_range() {
    assert_eq!(max_phrase().highlight(), Some(12..15));
}

#[test]
fn highlight_is_clipped_to_displayed_text_in_every_frame() {
    let mut controller =
        SimulatedController::simulated(vec![max_phrase()], Timings::from_millis(10, 10, 0)).unwrap();
    controller.start().unwrap();

    // One full cycle: 15 reveals, hold, 15 erases
    for _ in 0..31 {
        controller.step();
        let count = grapheme::count(controller.displayed_text());
        match controller.highlight_range() {
            Some(range) => {
                assert!(range.start >= 12 && range.end <= 15);
                assert!(range.end <= count);
                assert!(range.start < range.end);
            }
            None => assert!(count <= 12, "missing highlight at {} graphemes", count),
        }
    }
}

#[test]
fn highlight_follows_typing_progress() {
    let mut controller =
        SimulatedController::simulated(vec![max_phrase()], Timings::from_millis(10, 10, 0)).unwrap();
    controller.start().unwrap();

    let mut seen = Vec::new();
    for _ in 0..15 {
        controller.step();
        seen.push(controller.highlight_range());
    }

    assert_eq!(seen[11], None);
    assert_eq!(seen[12], Some(12..13));
    assert_eq!(seen[13], Some(12..14));
    assert_eq!(seen[14], Some(12..15));
    assert_eq!(controller.frame().segments(), ("Hello, I am ", "Max", ""));
}

#[test]
fn highlight_shrinks_while_erasing() {
    let mut controller =
        SimulatedController::simulated(vec![max_phrase()], Timings::from_millis(10, 10, 0)).unwrap();
    controller.start().unwrap();
    // Fully typed; the zero hold hands over to erasing on the last step
    for _ in 0..15 {
        controller.step();
    }
    assert_eq!(controller.phase(), Phase::Erasing(0));

    controller.step();
    assert_eq!(controller.displayed_text(), "Hello, I am Ma");
    assert_eq!(controller.highlight_range(), Some(12..14));
    controller.step();
    controller.step();
    assert_eq!(controller.highlight_range(), None);
}

#[test]
fn highlight_from_config_fixture() {
    let (_temp_dir, path) = temp_fixture("highlight.toml");
    let config = Config::load_from(&path).unwrap();
    let phrases = config.phrases().unwrap();

    assert_eq!(phrases.len(), 1);
    assert_eq!(phrases[0].highlight(), Some(12..15));
}

#[test]
fn missing_highlight_text_is_a_configuration_error() {
    let config = Config::load_from(&fixtures_dir().join("bad_highlight.toml")).unwrap();
    assert!(matches!(
        config.phrases(),
        Err(AnimatorError::HighlightNotFound { .. })
    ));
}

#[test]
fn out_of_bounds_range_is_rejected() {
    assert!(matches!(
        Phrase::new("Hi").with_highlight(1..5),
        Err(AnimatorError::InvalidHighlight { .. })
    ));
}
