//! Mounting the particle field onto a host.
//!
//! [`MountedField::mount`] seeds the pool for the current viewport, applies the
//! initial scroll fade, subscribes to every host event the field reacts to and
//! starts the frame loop. Tearing down (explicitly or by dropping the handle)
//! cancels the loop and drops every subscription, which unregisters it.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use rand::rngs::SmallRng;

use super::host::{EventKind, EventSource, HostEvent};
use super::render::{self, Surface};
use super::scheduler::{FrameScheduler, FrameState, FrameTask};
use super::scroll::scroll_opacity;
use super::state::StardustState;
use super::theme::StardustStyle;

/// Simulation state plus the surface it is drawn on.
///
/// Viewport, surface size and pool change together under one borrow, so a
/// frame never sees a half-applied resize.
struct Field<S> {
	state: StardustState,
	surface: S,
	style: StardustStyle,
}

impl<S: Surface> Field<S> {
	fn tick(&mut self) {
		self.state.step();
		render::render(
			&mut self.surface,
			self.state.viewport(),
			self.state.pool(),
			&self.style,
		);
	}
}

fn handle_event<S: Surface>(
	field: &RefCell<Field<S>>,
	on_opacity: &dyn Fn(f64),
	event: HostEvent,
) {
	match event {
		HostEvent::Resize(viewport) => {
			let mut f = field.borrow_mut();
			let f = &mut *f;
			if f.state.resize(viewport) {
				f.surface.set_size(viewport);
				debug!(
					"stardust: reseeded {} particles for {}x{}",
					f.state.particle_count(),
					viewport.width,
					viewport.height
				);
			}
		}
		HostEvent::Pointer { x, y } => field.borrow_mut().state.set_pointer(x, y),
		HostEvent::PointerLeft => field.borrow_mut().state.clear_pointer(),
		HostEvent::Scroll { y } => {
			let height = field.borrow().state.viewport().height;
			on_opacity(scroll_opacity(y, height));
		}
	}
}

/// A particle field attached to a host. Detaches itself when dropped.
pub struct MountedField<S: Surface, T: FrameTask, L> {
	field: Rc<RefCell<Field<S>>>,
	frames: Option<T>,
	subscriptions: Vec<L>,
}

impl<S: Surface + 'static, T: FrameTask, L> MountedField<S, T, L> {
	/// Seed, subscribe and start animating.
	///
	/// `on_opacity` receives the scroll-fade opacity once immediately and then
	/// after every scroll event.
	pub fn mount<E, F>(
		events: &E,
		scheduler: &F,
		mut surface: S,
		style: StardustStyle,
		rng: SmallRng,
		on_opacity: impl Fn(f64) + 'static,
	) -> Self
	where
		E: EventSource<Subscription = L>,
		F: FrameScheduler<Task = T>,
	{
		let viewport = events.viewport();
		surface.set_size(viewport);
		let state = StardustState::new(viewport, rng);
		info!(
			"stardust: seeded {} particles for {}x{}",
			state.particle_count(),
			viewport.width,
			viewport.height
		);

		on_opacity(scroll_opacity(events.scroll_y(), viewport.height));

		let field = Rc::new(RefCell::new(Field {
			state,
			surface,
			style,
		}));
		let on_opacity: Rc<dyn Fn(f64)> = Rc::new(on_opacity);

		let mut subscriptions = Vec::with_capacity(EventKind::ALL.len());
		for kind in EventKind::ALL {
			let (field_ev, on_opacity_ev) = (field.clone(), on_opacity.clone());
			let handler = Box::new(move |event: HostEvent| {
				handle_event(&field_ev, &*on_opacity_ev, event);
			});
			match events.subscribe(kind, handler) {
				Some(sub) => subscriptions.push(sub),
				None => warn!("stardust: could not listen for {:?}", kind),
			}
		}

		let field_anim = field.clone();
		let frames = scheduler.start(Box::new(move || field_anim.borrow_mut().tick()));
		if frames.is_none() {
			warn!("stardust: frame scheduling unavailable, field will not animate");
		}

		Self {
			field,
			frames,
			subscriptions,
		}
	}

	/// Read the live state and surface, e.g. for diagnostics.
	pub fn inspect<R>(&self, f: impl FnOnce(&StardustState, &S) -> R) -> R {
		let field = self.field.borrow();
		f(&field.state, &field.surface)
	}

	pub fn is_running(&self) -> bool {
		self.frames
			.as_ref()
			.is_some_and(|t| t.state() == FrameState::Running)
	}

	/// Cancel the frame loop and unregister every listener.
	pub fn teardown(mut self) {
		self.detach();
	}
}

impl<S: Surface, T: FrameTask, L> MountedField<S, T, L> {
	fn detach(&mut self) {
		let active = self.frames.is_some() || !self.subscriptions.is_empty();
		if let Some(mut frames) = self.frames.take() {
			frames.cancel();
		}
		self.subscriptions.clear();
		if active {
			info!("stardust: detached");
		}
	}
}

impl<S: Surface, T: FrameTask, L> Drop for MountedField<S, T, L> {
	fn drop(&mut self) {
		self.detach();
	}
}
