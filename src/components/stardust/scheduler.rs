//! Repeating once-per-refresh frame loop.
//!
//! The engine never calls `requestAnimationFrame` directly. It is handed a
//! [`FrameScheduler`] and keeps the [`FrameTask`] it returns, so a test can
//! swap in a scheduler that is stepped by hand.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};

/// Lifecycle of a frame loop. `Cancelled` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
	Running,
	Cancelled,
}

/// Handle to a running frame loop.
pub trait FrameTask {
	/// Stop the loop. The pending frame request is withdrawn; a tick that is
	/// already executing finishes but does not re-arm.
	fn cancel(&mut self);
	fn state(&self) -> FrameState;
}

/// Something that can call a tick once per display refresh.
pub trait FrameScheduler {
	type Task: FrameTask;

	/// Start calling `tick` every frame until the returned task is cancelled.
	/// Returns `None` if the host cannot schedule frames.
	fn start(&self, tick: Box<dyn FnMut()>) -> Option<Self::Task>;
}

/// Frame loop driven by `window.requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrameScheduler;

/// Shared by the task handle and the pending animation frame. The frame
/// callback only holds a weak reference, so dropping the task frees the loop
/// and cancels whatever request is outstanding.
struct FrameLoop {
	state: Cell<FrameState>,
	pending: RefCell<Option<AnimationFrame>>,
	tick: RefCell<Box<dyn FnMut()>>,
}

impl FrameLoop {
	fn arm(self: &Rc<Self>) {
		let frame = Rc::downgrade(self);
		let handle = request_animation_frame(move |_| {
			if let Some(frame) = frame.upgrade() {
				frame.run();
			}
		});
		*self.pending.borrow_mut() = Some(handle);
	}

	fn run(self: &Rc<Self>) {
		self.pending.borrow_mut().take();
		if self.state.get() == FrameState::Cancelled {
			return;
		}
		(&mut *self.tick.borrow_mut())();
		if self.state.get() == FrameState::Running {
			self.arm();
		}
	}
}

/// A running `requestAnimationFrame` loop. Cancels itself on drop.
pub struct AnimationFrameTask {
	frame: Rc<FrameLoop>,
}

impl FrameScheduler for AnimationFrameScheduler {
	type Task = AnimationFrameTask;

	fn start(&self, tick: Box<dyn FnMut()>) -> Option<AnimationFrameTask> {
		let frame = Rc::new(FrameLoop {
			state: Cell::new(FrameState::Running),
			pending: RefCell::new(None),
			tick: RefCell::new(tick),
		});
		frame.arm();
		Some(AnimationFrameTask { frame })
	}
}

impl FrameTask for AnimationFrameTask {
	fn cancel(&mut self) {
		self.frame.state.set(FrameState::Cancelled);
		// Dropping the handle cancels the outstanding request.
		self.frame.pending.borrow_mut().take();
	}

	fn state(&self) -> FrameState {
		self.frame.state.get()
	}
}

impl Drop for AnimationFrameTask {
	fn drop(&mut self) {
		self.cancel();
	}
}
