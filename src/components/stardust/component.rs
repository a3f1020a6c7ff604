//! Leptos component wrapping the star-dust canvas.
//!
//! The component creates a fixed, full-viewport canvas that ignores pointer
//! input and blends onto the page in `screen` mode. Once the canvas exists it
//! mounts a [`MountedField`] on the browser window; the field is kept in a
//! local stored value, so it is torn down with the component's owner.

use leptos::prelude::*;
use log::warn;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::HtmlCanvasElement;

use super::canvas::CanvasSurface;
use super::field::MountedField;
use super::host::{WindowEvents, WindowSubscription};
use super::scheduler::{AnimationFrameScheduler, AnimationFrameTask};
use super::theme::StardustStyle;

type BrowserField = MountedField<CanvasSurface, AnimationFrameTask, WindowSubscription>;

const CANVAS_STYLE: &str = "position: fixed; inset: 0; width: 100%; height: 100%; \
	pointer-events: none; z-index: 1; mix-blend-mode: screen; \
	transition: opacity 1000ms ease-out;";

fn browser_rng() -> SmallRng {
	let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
	SmallRng::seed_from_u64(seed)
}

/// Renders the ambient particle layer.
///
/// The layer stays transparent near the top of the page and fades in as the
/// viewer scrolls. Place it anywhere; it is positioned against the viewport.
#[component]
pub fn StardustCanvas(#[prop(default = "stardust-canvas")] class: &'static str) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let opacity = RwSignal::new(0.0_f64);
	let mounted: StoredValue<Option<BrowserField>, LocalStorage> = StoredValue::new_local(None);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("stardust: no window, particle layer disabled");
			return;
		};
		let Some(surface) = CanvasSurface::new(canvas) else {
			warn!("stardust: 2d context unavailable, particle layer disabled");
			return;
		};

		let field = MountedField::mount(
			&WindowEvents::new(window),
			&AnimationFrameScheduler,
			surface,
			StardustStyle::default(),
			browser_rng(),
			move |o| opacity.set(o),
		);
		// Replacing a previous field drops it, which detaches it.
		mounted.set_value(Some(field));
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=class
			aria-hidden="true"
			style=move || format!("{CANVAS_STYLE} opacity: {};", opacity.get())
		/>
	}
}
