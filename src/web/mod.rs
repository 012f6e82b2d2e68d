//! Browser shell around [`GameSession`].
//!
//! Builds the DOM scaffolding, routes on-screen and physical keys into the
//! session, applies the returned effects and runs the check delay on a timer.
//! Everything lives in one thread-local `App`; handlers only run on the UI
//! thread, and the session's own phase guards serialize input.

mod keyboard;
mod render;

use std::cell::{Cell, RefCell};

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, Window, window};

use crate::config::GameConfig;
use crate::dictionary::Dictionary;
use crate::game::{GameSession, Key, Step, Ticket};
use crate::seed::{Clock, FixedClock, UtcClock, date_key};
use keyboard::ClickHandler;
use render::Renderer;

struct App {
    session: GameSession,
    renderer: Renderer,
    /// Dropping the handle cancels a check that has not fired yet.
    pending_check: Option<Timeout>,
    /// On-screen key and hint handlers; replaced on restart.
    _click_handlers: Vec<ClickHandler>,
}

impl App {
    fn run(&mut self, step: Step) {
        if let Err(err) = self.renderer.apply(&step.effects) {
            gloo::console::error!("heatwords: failed to apply effects", err);
        }
        if let Some(ticket) = step.schedule {
            let delay = self.session.config().check_delay_ms;
            self.pending_check = Some(Timeout::new(delay, move || resolve(ticket)));
        }
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static KEYDOWN_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Build (or rebuild) the game on the current page.
pub(crate) fn start(config: GameConfig, dictionary: Dictionary) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let clock = FixedClock(UtcClock.today());
    let session = GameSession::new(dictionary, config, &clock)?;

    install_keydown(&win)?;
    let mut renderer = Renderer::mount(&doc, &session)?;
    renderer.apply(&session.initial_effects())?;
    // Handlers must live as long as their elements; `App` owns them.
    let mut click_handlers = keyboard::mount(&doc)?;
    click_handlers.push(keyboard::mount_hint(&doc)?);

    gloo::console::log!(
        "heatwords: game started",
        date_key(clock.today()),
        session.dictionary().len() as u32
    );

    // Replacing a previous app drops its pending check timer and the click
    // handlers of elements that were just rebuilt.
    APP.with(|cell| {
        *cell.borrow_mut() = Some(App {
            session,
            renderer,
            pending_check: None,
            _click_handlers: click_handlers,
        })
    });
    Ok(())
}

fn install_keydown(win: &Window) -> Result<(), JsValue> {
    if KEYDOWN_INSTALLED.with(Cell::get) {
        return Ok(());
    }
    let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
        // Busy events are dropped before preventDefault, like a dead keyboard.
        if is_busy() {
            return;
        }
        let Some(key) = Key::from_physical(&evt.key()) else {
            return;
        };
        if key == Key::Space {
            evt.prevent_default();
        }
        dispatch(key);
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    KEYDOWN_INSTALLED.with(|flag| flag.set(true));
    Ok(())
}

fn is_busy() -> bool {
    APP.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|app| app.session.is_busy())
            .unwrap_or(true)
    })
}

pub(crate) fn dispatch(key: Key) {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            let step = app.session.handle_input(key);
            app.run(step);
        }
    });
}

/// Route a logical token; returns false if the token is not recognised.
pub(crate) fn dispatch_token(token: &str) -> bool {
    match token.parse::<Key>() {
        Ok(key) => {
            dispatch(key);
            true
        }
        Err(_) => false,
    }
}

fn resolve(ticket: Ticket) {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            let step = app.session.resolve_check(ticket);
            app.run(step);
        }
    });
}

/// Reveal the secret with a blocking alert. Works in any phase.
pub(crate) fn reveal_hint() -> Option<String> {
    let word = APP.with(|cell| cell.borrow().as_ref().map(|app| app.session.hint()))?;
    gloo::console::log!("Secret revealed:", word.clone());
    if let Some(win) = window() {
        if let Err(err) = win.alert_with_message(&format!("The secret word is: {word}")) {
            gloo::console::error!("heatwords: hint alert failed", err);
        }
    }
    Some(word)
}

