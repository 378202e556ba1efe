//! Integration tests for the type/hold/erase cycle

use super::helpers::{started, step_texts};
use heroline::animator::{
    grapheme, AnimatorError, Phase, Phrase, Scheduler, SimulatedController, Timings,
};
use heroline::player::record_frames;

fn fast() -> Timings {
    Timings::from_millis(10, 10, 0)
}

#[test]
fn cycle_visits_every_frame_in_order() {
    let frames = record_frames(vec![Phrase::new("AB"), Phrase::new("C")], fast(), 8).unwrap();
    let texts: Vec<&str> = frames.iter().map(|f| f.frame.text.as_str()).collect();

    assert_eq!(texts, ["A", "AB", "A", "", "C", "", "A", "AB"]);
}

#[test]
fn phases_alternate_and_wrap() {
    let mut controller = started(&["AB", "C"], fast());
    let mut phases = vec![controller.phase()];
    while phases.len() < 5 {
        controller.step();
        if controller.phase() != *phases.last().unwrap() {
            phases.push(controller.phase());
        }
    }

    assert_eq!(
        phases,
        [
            Phase::Typing(0),
            Phase::Erasing(0),
            Phase::Typing(1),
            Phase::Erasing(1),
            Phase::Typing(0)
        ]
    );
}

#[test]
fn typing_reveals_monotonically() {
    let text = "I like playing 🏸";
    let mut controller = started(&[text], Timings::from_millis(10, 10, 1000));
    let total = grapheme::count(text);

    let mut last = 0;
    for _ in 0..total {
        controller.step();
        let shown = controller.displayed_text();
        assert!(text.starts_with(shown));
        assert_eq!(controller.displayed_count(), last + 1);
        last = controller.displayed_count();
    }
    assert_eq!(controller.displayed_text(), text);
    // The badminton emoji arrived as one grapheme
    assert_eq!(total, 16);
}

#[test]
fn erasing_removes_one_grapheme_per_tick() {
    let text = "🇩🇪 café";
    let mut controller = started(&[text], Timings::from_millis(10, 10, 0));
    let total = grapheme::count(text);

    // The last reveal and the zero hold land on the same step
    step_texts(&mut controller, total);
    assert_eq!(controller.phase(), Phase::Erasing(0));

    let mut previous = controller.displayed_text().to_string();
    for expected_len in (0..total).rev() {
        controller.step();
        if controller.phase() == Phase::Erasing(0) {
            let shown = controller.displayed_text();
            assert!(previous.starts_with(shown));
            assert_eq!(grapheme::count(shown), expected_len);
            previous = shown.to_string();
        }
    }
    assert_eq!(controller.displayed_text(), "");
    assert_eq!(controller.phase(), Phase::Typing(0));
}

#[test]
fn at_most_one_timer_is_ever_live() {
    let mut controller = started(&["AB", "", "C🏸"], fast());
    step_texts(&mut controller, 60);
    controller.reset().unwrap();
    step_texts(&mut controller, 5);

    assert_eq!(controller.scheduler().peak_live_timers(), 1);
}

#[test]
fn single_phrase_cycles_on_itself() {
    let frames = record_frames(vec![Phrase::new("ab")], fast(), 6).unwrap();
    let texts: Vec<&str> = frames.iter().map(|f| f.frame.text.as_str()).collect();
    assert_eq!(texts, ["a", "ab", "a", "", "a", "ab"]);
    assert_eq!(frames[3].frame.phase, Phase::Typing(0));
}

#[test]
fn reset_mid_typing_discards_progress() {
    let mut controller = started(&["abc", "d"], fast());
    step_texts(&mut controller, 2);
    assert_eq!(controller.displayed_text(), "ab");
    let before = controller.generation();

    controller.reset().unwrap();

    assert!(controller.generation() > before);
    assert_eq!(controller.displayed_text(), "");
    assert_eq!(controller.phase(), Phase::Typing(0));
    assert_eq!(controller.scheduler().live_timers(), 1);
    assert_eq!(step_texts(&mut controller, 1), ["a"]);
}

#[test]
fn dispose_stops_everything() {
    let mut controller = started(&["abc"], fast());
    step_texts(&mut controller, 1);

    controller.dispose();

    assert_eq!(controller.scheduler().live_timers(), 0);
    assert_eq!(controller.step(), None);
    assert_eq!(controller.displayed_text(), "a");
    assert_eq!(controller.start(), Err(AnimatorError::Disposed));
}

#[test]
fn per_phrase_interval_overrides_default() {
    let slow = Phrase::new("ab").with_type_interval(std::time::Duration::from_millis(40));
    let mut controller = SimulatedController::simulated(vec![slow], fast()).unwrap();
    controller.start().unwrap();

    let first = controller.step().unwrap();
    assert_eq!(first.as_millis(), 40);
    let second = controller.step().unwrap();
    assert_eq!(second.as_millis(), 80);
}
