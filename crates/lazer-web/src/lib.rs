pub mod runner;

pub use runner::CursorRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use lazer_engine::{EngineOptions, PointerEvent};

thread_local! {
    static RUNNER: RefCell<Option<CursorRunner>> = RefCell::new(None);
}

/// Run `f` against the mounted runner, if any. Listener callbacks or a raf
/// that fires after destroy find the cell empty and fall through — no state
/// mutates after teardown.
fn with_runner<R>(f: impl FnOnce(&mut CursorRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

pub(crate) fn enqueue(event: PointerEvent) {
    with_runner(|r| r.push(event));
}

pub(crate) fn on_frame(ts_ms: f64) {
    with_runner(|r| r.frame(ts_ms));
}

/// Mount the cursor engine onto the element with the given id.
///
/// `options_json` takes the shape the UI layer configures:
/// `{"useDamping": true, "followerTau": 160}`. Pass nothing (or malformed
/// JSON, which logs a warning) to get the defaults. Mounting while already
/// mounted replaces the previous instance.
#[wasm_bindgen]
pub fn cursor_mount(element_id: &str, options_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    cursor_destroy();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("cursor_mount: no document"))?;
    let el: web_sys::HtmlElement = document
        .get_element_by_id(element_id)
        .ok_or_else(|| JsValue::from_str(&format!("cursor_mount: no element #{element_id}")))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("cursor_mount: target is not an HtmlElement"))?;

    let opts = match options_json {
        Some(json) => EngineOptions::from_json(&json).unwrap_or_else(|err| {
            log::warn!("cursor_mount: bad options JSON ({err}), using defaults");
            EngineOptions::default()
        }),
        None => EngineOptions::default(),
    };

    let runner = CursorRunner::new(el, opts);
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));

    if let Some(Err(err)) = with_runner(|r| r.bind()) {
        cursor_destroy();
        return Err(err);
    }
    with_runner(|r| r.start());

    log::info!("lazer-cursor: mounted on #{element_id}");
    Ok(())
}

/// Tear the cursor engine down: cancel the pending frame and remove every
/// registered listener. Idempotent — extra calls are no-ops.
#[wasm_bindgen]
pub fn cursor_destroy() {
    let runner = RUNNER.with(|cell| cell.borrow_mut().take());
    if let Some(mut runner) = runner {
        runner.teardown();
        log::info!("lazer-cursor: destroyed");
    }
}
