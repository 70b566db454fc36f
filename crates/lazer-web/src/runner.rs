// runner.rs
//
// Wires the motion engine to the browser: DOM listeners feed the input
// queue, a requestAnimationFrame loop advances the engine, and each
// frame's transform lands on the cursor element's style. All registered
// listeners are owned handles, released as a set on teardown.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent};

use lazer_engine::{CursorTransform, EngineOptions, FrameClock, InputQueue, MotionEngine, PointerEvent};

/// CSS class toggled on the cursor element while a drag is active.
const PRESSED_CLASS: &str = "pressed";

/// One registered DOM listener, removable on teardown.
struct ListenerHandle {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    fn detach(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Owns one engine instance plus everything needed to drive it in a page:
/// the cursor element, the listener handles, and the pending raf schedule.
pub struct CursorRunner {
    engine: MotionEngine,
    clock: FrameClock,
    input: InputQueue,
    el: HtmlElement,
    listeners: Vec<ListenerHandle>,
    frame_closure: Option<Closure<dyn FnMut(f64)>>,
    raf_id: Option<i32>,
    /// Pressed state last written to the element's classList. None until
    /// the first paint, so the first frame establishes a known state.
    pressed_painted: Option<bool>,
}

impl CursorRunner {
    pub fn new(el: HtmlElement, opts: EngineOptions) -> Self {
        Self {
            engine: MotionEngine::new(opts),
            clock: FrameClock::new(),
            input: InputQueue::new(),
            el,
            listeners: Vec::new(),
            frame_closure: None,
            raf_id: None,
            pressed_painted: None,
        }
    }

    /// Register all DOM listeners. Mouse-up binds on the window because a
    /// drag may end anywhere on screen, not just over the cursor element.
    pub fn bind(&mut self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let doc: &EventTarget = document.as_ref();
        let win: &EventTarget = window.as_ref();

        let on_move = Closure::<dyn FnMut(Event)>::new(|e: Event| {
            let e: MouseEvent = e.unchecked_into();
            crate::enqueue(PointerEvent::Move {
                x: e.client_x() as f32,
                y: e.client_y() as f32,
            });
        });
        self.listeners
            .push(ListenerHandle::attach(doc, "mousemove", on_move)?);

        let on_down = Closure::<dyn FnMut(Event)>::new(|e: Event| {
            let e: MouseEvent = e.unchecked_into();
            e.prevent_default();
            crate::enqueue(PointerEvent::Down {
                x: e.client_x() as f32,
                y: e.client_y() as f32,
            });
        });
        self.listeners
            .push(ListenerHandle::attach(doc, "mousedown", on_down)?);

        let on_up = Closure::<dyn FnMut(Event)>::new(|_: Event| {
            crate::enqueue(PointerEvent::Up);
        });
        self.listeners
            .push(ListenerHandle::attach(win, "mouseup", on_up)?);

        // Native drag and context-menu behavior would fight the custom
        // cursor; suppress both for the engine's lifetime.
        let on_dragstart = Closure::<dyn FnMut(Event)>::new(|e: Event| e.prevent_default());
        self.listeners
            .push(ListenerHandle::attach(win, "dragstart", on_dragstart)?);

        let on_contextmenu = Closure::<dyn FnMut(Event)>::new(|e: Event| e.prevent_default());
        self.listeners
            .push(ListenerHandle::attach(doc, "contextmenu", on_contextmenu)?);

        Ok(())
    }

    /// Push a pointer event into the queue (called from the listeners).
    pub fn push(&mut self, event: PointerEvent) {
        self.input.push(event);
    }

    /// Create the raf closure and schedule the first frame.
    pub fn start(&mut self) {
        self.frame_closure = Some(Closure::<dyn FnMut(f64)>::new(|ts_ms: f64| {
            crate::on_frame(ts_ms);
        }));
        self.schedule();
    }

    /// Run one frame: drain input, integrate, paint, reschedule.
    pub fn frame(&mut self, ts_ms: f64) {
        let dt_ms = self.clock.delta_ms(ts_ms);
        for event in self.input.drain() {
            self.engine.apply(event);
        }
        let transform = self.engine.step(dt_ms);
        self.paint(&transform);
        self.schedule();
    }

    fn paint(&mut self, transform: &CursorTransform) {
        let _ = self
            .el
            .style()
            .set_property("transform", &transform.to_css());
        // Class writes only on drag transitions, like the original's
        // event-handler toggles — not every frame.
        let pressed = self.engine.is_pressed();
        if self.pressed_painted != Some(pressed) {
            let class_list = self.el.class_list();
            if pressed {
                let _ = class_list.add_1(PRESSED_CLASS);
            } else {
                let _ = class_list.remove_1(PRESSED_CLASS);
            }
            self.pressed_painted = Some(pressed);
        }
    }

    fn schedule(&mut self) {
        let Some(closure) = &self.frame_closure else {
            return;
        };
        self.raf_id = web_sys::window()
            .and_then(|w| w.request_animation_frame(closure.as_ref().unchecked_ref()).ok());
    }

    /// Cancel the pending frame and remove every listener. The runner is
    /// dropped by the caller afterwards, so nothing can tick it again.
    pub fn teardown(&mut self) {
        if let (Some(window), Some(id)) = (web_sys::window(), self.raf_id.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.frame_closure = None;
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
    }
}
