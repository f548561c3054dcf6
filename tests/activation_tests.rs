//! Integration tests for the keyboard activation flow.
//!
//! Drives the full path from activation index through the state machine to
//! the bound field and the render adapter, using a recording mock surface
//! in place of a real rendering engine.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use slateboard::services::content_for;
use slateboard::{
    FieldBinding, KeyRegion, Language, LayoutVariant, UiSurface, VirtualKeyboard,
};

const PANEL_WIDTH: f32 = 512.0;

/// Activation indices of the control keys, matching the generated roles.
const SHIFT: usize = 20;
const BACKSPACE: usize = 28;
const RESERVED: usize = 29;
const LAYOUT_SWITCH: usize = 30;
const SPACE: usize = 32;
const ENTER: usize = 34;

/// Inert engine surface; these tests only exercise the activation logic.
struct NullSurface;

impl UiSurface for NullSurface {
    fn rebuild(&mut self, _regions: &[KeyRegion], _content: &HashMap<usize, String>) {}

    fn set_visible(&mut self, _visible: bool) {}

    fn position(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    fn set_position(&mut self, _x: f32, _y: f32) {}
}

fn shown_keyboard(language: Language) -> VirtualKeyboard<NullSurface> {
    let mut keyboard = VirtualKeyboard::new(PANEL_WIDTH, NullSurface, language);
    keyboard.set_visible(true);
    keyboard
}

#[test]
fn typing_q_shift_q_uses_one_shot_shift() {
    let mut keyboard = shown_keyboard(Language::En);
    keyboard.bind(FieldBinding::new("input", ""));

    keyboard.activate(0).unwrap();
    assert_eq!(keyboard.bound_text(), Some("q"));
    assert_eq!(keyboard.state().variant, LayoutVariant::Lower);

    keyboard.activate(SHIFT).unwrap();
    assert_eq!(keyboard.state().variant, LayoutVariant::Upper);
    assert!(keyboard.state().shift_engaged);

    keyboard.activate(0).unwrap();
    assert_eq!(keyboard.bound_text(), Some("qQ"));
    // Shift auto-reverts after exactly one character
    assert_eq!(keyboard.state().variant, LayoutVariant::Lower);
    assert!(!keyboard.state().shift_engaged);
}

#[test]
fn consecutive_literals_after_shift_use_lowercase() {
    let mut keyboard = shown_keyboard(Language::En);
    keyboard.bind(FieldBinding::new("input", ""));

    keyboard.activate(SHIFT).unwrap();
    keyboard.activate(0).unwrap();
    keyboard.activate(0).unwrap();
    assert_eq!(keyboard.bound_text(), Some("Qq"));
}

#[test]
fn layout_switch_always_returns_to_alphabetic_pair() {
    let mut keyboard = shown_keyboard(Language::En);

    keyboard.activate(LAYOUT_SWITCH).unwrap();
    assert_eq!(keyboard.state().variant, LayoutVariant::Symbols1);

    keyboard.activate(SHIFT).unwrap();
    assert_eq!(keyboard.state().variant, LayoutVariant::Symbols2);
    assert!(keyboard.state().shift_engaged);

    // From symbols2 the switch lands on lower, not symbols1
    keyboard.activate(LAYOUT_SWITCH).unwrap();
    assert_eq!(keyboard.state().variant, LayoutVariant::Lower);
    assert!(!keyboard.state().shift_engaged);
}

#[test]
fn layout_switch_twice_is_involution_with_shift_clear() {
    for start in [LayoutVariant::Lower, LayoutVariant::Symbols1] {
        let mut keyboard = shown_keyboard(Language::En);
        keyboard.set_layout(start);

        keyboard.activate(LAYOUT_SWITCH).unwrap();
        keyboard.activate(LAYOUT_SWITCH).unwrap();

        assert_eq!(keyboard.state().variant, start);
        assert!(!keyboard.state().shift_engaged);
    }
}

#[test]
fn shift_twice_restores_content_mapping() {
    for start in [LayoutVariant::Lower, LayoutVariant::Symbols1] {
        let mut keyboard = shown_keyboard(Language::En);
        keyboard.set_layout(start);
        let before = keyboard.content().clone();

        keyboard.activate(SHIFT).unwrap();
        assert_ne!(keyboard.content(), &before);

        keyboard.activate(SHIFT).unwrap();
        assert_eq!(keyboard.content(), &before);
        assert!(!keyboard.state().shift_engaged);
    }
}

#[test]
fn backspace_drains_text_then_goes_inert() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);

    let mut keyboard = shown_keyboard(Language::En);
    keyboard.bind(
        FieldBinding::new("input", "hello")
            .with_on_changed(move |text| sink.borrow_mut().push(text.to_string())),
    );

    for _ in 0..5 {
        keyboard.activate(BACKSPACE).unwrap();
    }
    assert_eq!(keyboard.bound_text(), Some(""));
    assert_eq!(
        *changes.borrow(),
        vec!["hell", "hel", "he", "h", ""]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    );

    // A sixth backspace leaves the text empty and fires no callback
    keyboard.activate(BACKSPACE).unwrap();
    assert_eq!(keyboard.bound_text(), Some(""));
    assert_eq!(changes.borrow().len(), 5);
}

#[test]
fn space_then_enter_commits_with_trailing_space() {
    let changes = Rc::new(RefCell::new(0));
    let committed = Rc::new(RefCell::new(None));
    let change_sink = Rc::clone(&changes);
    let commit_sink = Rc::clone(&committed);

    let mut keyboard = shown_keyboard(Language::En);
    keyboard.bind(
        FieldBinding::new("input", "find me")
            .with_on_changed(move |_| *change_sink.borrow_mut() += 1)
            .with_on_enter(move |text| *commit_sink.borrow_mut() = Some(text.to_string())),
    );

    keyboard.activate(SPACE).unwrap();
    assert_eq!(keyboard.bound_text(), Some("find me "));
    assert_eq!(*changes.borrow(), 1);

    keyboard.activate(ENTER).unwrap();
    // The commit callback sees the exact text, trailing space included,
    // and the enter activation itself fires no change callback
    assert_eq!(committed.borrow().as_deref(), Some("find me "));
    assert_eq!(*changes.borrow(), 1);
    assert_eq!(keyboard.bound_text(), Some("find me "));
}

#[test]
fn hidden_keyboard_ignores_all_activations() {
    let mut keyboard = VirtualKeyboard::new(PANEL_WIDTH, NullSurface, Language::En);
    keyboard.bind(FieldBinding::new("input", "text"));

    for index in [0, SHIFT, BACKSPACE, LAYOUT_SWITCH, SPACE, ENTER, 99] {
        keyboard.activate(index).unwrap();
    }

    assert_eq!(keyboard.bound_text(), Some("text"));
    assert_eq!(keyboard.state().variant, LayoutVariant::Lower);
    assert!(!keyboard.state().shift_engaged);
}

#[test]
fn out_of_range_and_reserved_indices_are_noops() {
    let mut keyboard = shown_keyboard(Language::En);
    keyboard.bind(FieldBinding::new("input", "text"));
    let before = *keyboard.state();

    keyboard.activate(35).unwrap();
    keyboard.activate(usize::MAX).unwrap();
    keyboard.activate(RESERVED).unwrap();

    assert_eq!(keyboard.bound_text(), Some("text"));
    assert_eq!(keyboard.state(), &before);
}

#[test]
fn text_keys_fail_fast_without_binding() {
    let mut keyboard = shown_keyboard(Language::En);

    for index in [0, SPACE, BACKSPACE, ENTER] {
        let error = keyboard.activate(index).unwrap_err();
        assert!(error.to_string().contains("no text field bound"));
    }
    // A rejected activation leaves layout state exactly as before
    assert_eq!(keyboard.state().variant, LayoutVariant::Lower);

    // Control transitions do not touch the binding and still work
    keyboard.activate(SHIFT).unwrap();
    assert_eq!(keyboard.state().variant, LayoutVariant::Upper);

    // The one-shot revert must not fire either when the insert is rejected
    keyboard.activate(0).unwrap_err();
    assert_eq!(keyboard.state().variant, LayoutVariant::Upper);

    keyboard.activate(LAYOUT_SWITCH).unwrap();
    assert_eq!(keyboard.state().variant, LayoutVariant::Symbols1);
}

#[test]
fn symbols2_is_not_one_shot() {
    let mut keyboard = shown_keyboard(Language::En);
    keyboard.bind(FieldBinding::new("input", ""));
    keyboard.set_layout(LayoutVariant::Symbols2);

    keyboard.activate(10).unwrap();
    keyboard.activate(11).unwrap();

    assert_eq!(keyboard.bound_text(), Some("\u{20ac}\u{a3}"));
    assert_eq!(keyboard.state().variant, LayoutVariant::Symbols2);
}

#[test]
fn german_layout_swaps_letter_rows() {
    let mut keyboard = shown_keyboard(Language::De);
    keyboard.bind(FieldBinding::new("input", ""));

    keyboard.activate(5).unwrap();
    keyboard.activate(21).unwrap();
    assert_eq!(keyboard.bound_text(), Some("zy"));
}

#[test]
fn set_layout_tracks_shift_invariant() {
    let mut keyboard = shown_keyboard(Language::En);

    keyboard.set_layout(LayoutVariant::Symbols2);
    assert!(keyboard.state().shift_engaged);
    assert_eq!(
        keyboard.content(),
        &content_for(Language::En, LayoutVariant::Symbols2)
    );

    keyboard.set_layout(LayoutVariant::Lower);
    assert!(!keyboard.state().shift_engaged);
}
