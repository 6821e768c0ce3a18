use crate::config::Config;
use crate::persist::SnapshotStore;
use crate::ui::app::App;
use crate::ui::events::{spawn_save_timer, AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

pub fn run(config: &Config, store: SnapshotStore) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config, store);

    app.mount();
    arm_timers(&mut app, &events);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::SaveElapsed { generation }) => app.on_save_elapsed(generation),
            Ok(AppEvent::Tick) => {}
            // ratatui resizes its buffers on the next draw
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }

        arm_timers(&mut app, &events);
    }

    app.unmount();
    drop(guard);
    Ok(())
}

/// Turn save cycles the app armed during the last event into timer
/// threads. Dropping the event handler (and with it the channel)
/// cancels whatever is still sleeping.
fn arm_timers(app: &mut App, events: &EventHandler) {
    for generation in app.drain_armed_saves() {
        spawn_save_timer(events.sender(), generation, app.save_delay());
    }
}
