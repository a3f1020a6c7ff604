//! Host environment events consumed by the particle field.
//!
//! [`EventSource`] hides where events come from. In the browser,
//! [`WindowEvents`] translates DOM events on `window`/`document` into
//! [`HostEvent`]s. Every subscription is an RAII handle: dropping it removes
//! the listener it registered.

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Event, MouseEvent, TouchEvent, Window};

use super::state::Viewport;

/// The host signals the field listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
	Resize,
	PointerMove,
	TouchMove,
	PointerLeave,
	Scroll,
}

impl EventKind {
	pub const ALL: [EventKind; 5] = [
		EventKind::Resize,
		EventKind::PointerMove,
		EventKind::TouchMove,
		EventKind::PointerLeave,
		EventKind::Scroll,
	];

	/// DOM event type name.
	pub fn dom_name(self) -> &'static str {
		match self {
			EventKind::Resize => "resize",
			EventKind::PointerMove => "mousemove",
			EventKind::TouchMove => "touchmove",
			EventKind::PointerLeave => "mouseleave",
			EventKind::Scroll => "scroll",
		}
	}
}

/// A host event, already reduced to the values the field needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
	Resize(Viewport),
	/// Pointer or first touch point, in surface coordinates.
	Pointer {
		x: f64,
		y: f64,
	},
	PointerLeft,
	Scroll {
		y: f64,
	},
}

/// Event handler registered with an [`EventSource`].
pub type EventHandler = Box<dyn FnMut(HostEvent)>;

/// Provides viewport/scroll readings and event subscriptions.
pub trait EventSource {
	/// Removes its listener when dropped.
	type Subscription;

	fn viewport(&self) -> Viewport;
	fn scroll_y(&self) -> f64;
	/// Returns `None` if the listener could not be registered.
	fn subscribe(&self, kind: EventKind, handler: EventHandler) -> Option<Self::Subscription>;
}

/// Browser event source backed by `window` (and `document` for pointer-leave).
pub struct WindowEvents {
	window: Window,
}

impl WindowEvents {
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

fn window_viewport(window: &Window) -> Viewport {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

fn translate(kind: EventKind, window: &Window, event: &Event) -> Option<HostEvent> {
	match kind {
		EventKind::Resize => Some(HostEvent::Resize(window_viewport(window))),
		EventKind::PointerMove => {
			let ev = event.dyn_ref::<MouseEvent>()?;
			Some(HostEvent::Pointer {
				x: ev.client_x() as f64,
				y: ev.client_y() as f64,
			})
		}
		EventKind::TouchMove => {
			let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
			Some(HostEvent::Pointer {
				x: touch.client_x() as f64,
				y: touch.client_y() as f64,
			})
		}
		EventKind::PointerLeave => Some(HostEvent::PointerLeft),
		EventKind::Scroll => Some(HostEvent::Scroll {
			y: window.scroll_y().unwrap_or(0.0),
		}),
	}
}

/// A registered DOM listener; removed from its target on drop.
pub type WindowSubscription = EventListener;

impl EventSource for WindowEvents {
	type Subscription = WindowSubscription;

	fn viewport(&self) -> Viewport {
		window_viewport(&self.window)
	}

	fn scroll_y(&self) -> f64 {
		self.window.scroll_y().unwrap_or(0.0)
	}

	fn subscribe(&self, kind: EventKind, mut handler: EventHandler) -> Option<WindowSubscription> {
		let window = self.window.clone();
		let callback = move |event: &Event| {
			if let Some(ev) = translate(kind, &window, event) {
				handler(ev);
			}
		};

		let listener = match kind {
			EventKind::PointerLeave => {
				let document = self.window.document()?;
				EventListener::new(&document, kind.dom_name(), callback)
			}
			_ => EventListener::new(&self.window, kind.dom_name(), callback),
		};
		Some(listener)
	}
}
