//! Hand-driven stand-ins for the browser: a frame scheduler stepped one frame
//! at a time, an event source with explicit dispatch, and a surface that
//! records what was drawn.

use std::cell::RefCell;
use std::rc::Rc;

use super::host::{EventHandler, EventKind, EventSource, HostEvent};
use super::render::{Glow, Surface};
use super::scheduler::{FrameScheduler, FrameState, FrameTask};
use super::state::Viewport;
use super::theme::Color;

#[derive(Default)]
struct ManualFrames {
	tick: Option<Box<dyn FnMut()>>,
	pending: bool,
	cancelled: bool,
	ticks: usize,
}

/// Runs the scheduled tick only when [`ManualScheduler::advance`] is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
	inner: Rc<RefCell<ManualFrames>>,
}

impl ManualScheduler {
	/// Whether a frame is armed and waiting.
	pub fn pending(&self) -> bool {
		self.inner.borrow().pending
	}

	pub fn ticks(&self) -> usize {
		self.inner.borrow().ticks
	}

	/// Fire the pending frame, if any. Returns whether a frame ran.
	pub fn advance(&self) -> bool {
		let tick = {
			let mut frames = self.inner.borrow_mut();
			if !frames.pending {
				return false;
			}
			frames.pending = false;
			frames.tick.take()
		};
		let Some(mut tick) = tick else {
			return false;
		};

		tick();

		let mut frames = self.inner.borrow_mut();
		frames.ticks += 1;
		if !frames.cancelled {
			frames.tick = Some(tick);
			frames.pending = true;
		}
		true
	}
}

pub struct ManualTask {
	inner: Rc<RefCell<ManualFrames>>,
	state: FrameState,
}

impl FrameScheduler for ManualScheduler {
	type Task = ManualTask;

	fn start(&self, tick: Box<dyn FnMut()>) -> Option<ManualTask> {
		let mut frames = self.inner.borrow_mut();
		frames.tick = Some(tick);
		frames.pending = true;
		frames.cancelled = false;
		Some(ManualTask {
			inner: self.inner.clone(),
			state: FrameState::Running,
		})
	}
}

impl FrameTask for ManualTask {
	fn cancel(&mut self) {
		let mut frames = self.inner.borrow_mut();
		frames.cancelled = true;
		frames.pending = false;
		frames.tick = None;
		self.state = FrameState::Cancelled;
	}

	fn state(&self) -> FrameState {
		self.state
	}
}

type SharedHandler = Rc<RefCell<EventHandler>>;

#[derive(Default)]
struct Registry {
	viewport: Viewport,
	scroll_y: f64,
	next_id: usize,
	handlers: Vec<(usize, EventKind, SharedHandler)>,
}

/// Event source whose events are fired by the test.
#[derive(Clone, Default)]
pub struct ManualEvents {
	inner: Rc<RefCell<Registry>>,
}

impl ManualEvents {
	pub fn new(viewport: Viewport) -> Self {
		let events = Self::default();
		events.inner.borrow_mut().viewport = viewport;
		events
	}

	pub fn set_scroll_y(&self, y: f64) {
		self.inner.borrow_mut().scroll_y = y;
	}

	pub fn listener_count(&self) -> usize {
		self.inner.borrow().handlers.len()
	}

	/// Deliver `event` to every listener of `kind`. Returns how many ran.
	pub fn dispatch(&self, kind: EventKind, event: HostEvent) -> usize {
		let targets: Vec<SharedHandler> = self
			.inner
			.borrow()
			.handlers
			.iter()
			.filter(|(_, k, _)| *k == kind)
			.map(|(_, _, h)| h.clone())
			.collect();
		for handler in &targets {
			(&mut *handler.borrow_mut())(event);
		}
		targets.len()
	}

	/// Change the viewport and fire a resize event, like a window resize.
	pub fn resize(&self, viewport: Viewport) -> usize {
		self.inner.borrow_mut().viewport = viewport;
		self.dispatch(EventKind::Resize, HostEvent::Resize(viewport))
	}
}

/// Unregisters its handler from the [`ManualEvents`] on drop.
pub struct ManualSubscription {
	id: usize,
	inner: Rc<RefCell<Registry>>,
}

impl Drop for ManualSubscription {
	fn drop(&mut self) {
		// Take the handler out first so it is dropped after the borrow ends.
		let removed: Vec<_> = {
			let mut registry = self.inner.borrow_mut();
			let (gone, kept) = std::mem::take(&mut registry.handlers)
				.into_iter()
				.partition(|(id, _, _)| *id == self.id);
			registry.handlers = kept;
			gone
		};
		drop(removed);
	}
}

impl EventSource for ManualEvents {
	type Subscription = ManualSubscription;

	fn viewport(&self) -> Viewport {
		self.inner.borrow().viewport
	}

	fn scroll_y(&self) -> f64 {
		self.inner.borrow().scroll_y
	}

	fn subscribe(&self, kind: EventKind, handler: EventHandler) -> Option<ManualSubscription> {
		let mut registry = self.inner.borrow_mut();
		let id = registry.next_id;
		registry.next_id += 1;
		registry
			.handlers
			.push((id, kind, Rc::new(RefCell::new(handler))));
		Some(ManualSubscription {
			id,
			inner: self.inner.clone(),
		})
	}
}

/// One recorded surface operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
	SetSize(Viewport),
	Clear(Viewport),
	Circle {
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
		glow: Option<Glow>,
	},
}

#[derive(Default)]
pub struct RecordingSurface {
	pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
	/// Every circle drawn, as `(x, y, radius, color, glow)`.
	pub fn circles(&self) -> impl Iterator<Item = (f64, f64, f64, Color, Option<Glow>)> + '_ {
		self.calls.iter().filter_map(|c| match *c {
			DrawCall::Circle {
				x,
				y,
				radius,
				color,
				glow,
			} => Some((x, y, radius, color, glow)),
			_ => None,
		})
	}
}

impl Surface for RecordingSurface {
	fn set_size(&mut self, viewport: Viewport) {
		self.calls.push(DrawCall::SetSize(viewport));
	}

	fn clear(&mut self, viewport: Viewport) {
		self.calls.push(DrawCall::Clear(viewport));
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: Option<Glow>) {
		self.calls.push(DrawCall::Circle {
			x,
			y,
			radius,
			color,
			glow,
		});
	}
}
