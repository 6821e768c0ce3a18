mod common;

use common::test_app;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tally::counter::SaveStatus;
use tally::ui::app::Focus;
use tally::ui::input::handle_key;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn plus_and_minus_drive_the_counter() {
    let (mut app, _store, _dir) = test_app();
    app.mount();

    handle_key(&mut app, press(KeyCode::Char('+')));
    handle_key(&mut app, press(KeyCode::Char('+')));
    handle_key(&mut app, press(KeyCode::Char('-')));
    assert_eq!(app.state().count, 1);
    assert_eq!(app.state().history, vec![0, 1, 2, 1]);
}

#[test]
fn r_resets() {
    let (mut app, _store, _dir) = test_app();
    app.mount();
    handle_key(&mut app, press(KeyCode::Char('+')));

    handle_key(&mut app, press(KeyCode::Char('r')));
    assert_eq!(app.state().count, 0);
    assert!(app.state().history.is_empty());
    assert_eq!(app.state().status, SaveStatus::Saving);
}

#[test]
fn s_focuses_step_field_and_digits_edit_it() {
    let (mut app, _store, _dir) = test_app();
    app.mount();

    handle_key(&mut app, press(KeyCode::Char('s')));
    assert_eq!(app.focus(), Focus::StepField);

    // Field starts at "1"; typing appends, backspace trims.
    handle_key(&mut app, press(KeyCode::Char('2')));
    assert_eq!(app.state().step_input, "12");
    assert_eq!(app.state().step, Some(12));

    handle_key(&mut app, press(KeyCode::Backspace));
    handle_key(&mut app, press(KeyCode::Backspace));
    assert_eq!(app.state().step_input, "");
    assert_eq!(app.state().step, Some(0));

    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.focus(), Focus::Counter);
}

#[test]
fn arrows_work_while_editing_the_step_field() {
    let (mut app, _store, _dir) = test_app();
    app.mount();

    handle_key(&mut app, press(KeyCode::Char('s')));
    handle_key(&mut app, press(KeyCode::Up));
    assert_eq!(app.state().count, 1);
    assert_eq!(app.focus(), Focus::StepField);
}

#[test]
fn minus_goes_to_the_field_when_it_has_focus() {
    let (mut app, _store, _dir) = test_app();
    app.mount();

    handle_key(&mut app, press(KeyCode::Char('s')));
    handle_key(&mut app, press(KeyCode::Backspace));
    handle_key(&mut app, press(KeyCode::Char('-')));
    handle_key(&mut app, press(KeyCode::Char('3')));
    assert_eq!(app.state().step, Some(-3));
    assert_eq!(app.state().count, 0);
}

#[test]
fn q_quits_from_counter_focus_only() {
    let (mut app, _store, _dir) = test_app();
    app.mount();

    handle_key(&mut app, press(KeyCode::Char('s')));
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(!app.should_quit());

    handle_key(&mut app, press(KeyCode::Esc));
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn esc_in_counter_focus_is_ignored() {
    // Esc only leaves the step field; q and Ctrl+Q are the quit keys.
    let (mut app, _store, _dir) = test_app();
    app.mount();

    handle_key(&mut app, press(KeyCode::Esc));
    assert!(!app.should_quit());
}

#[test]
fn ctrl_q_quits_from_anywhere() {
    let (mut app, _store, _dir) = test_app();
    app.mount();
    handle_key(&mut app, press(KeyCode::Char('s')));

    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}
