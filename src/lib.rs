//! stardust-field: ambient star-dust particle layer for a Leptos site.
//!
//! This crate provides a WASM canvas component that fills the viewport with
//! drifting, twinkling dust. The dust fades in on scroll and is drawn toward,
//! then swallowed by, the pointer.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::stardust::{StardustCanvas, StardustStyle};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("stardust: logging initialized");
}

/// Main application component.
/// Puts the particle layer behind the page content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Stardust" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="stardust-page">
			<StardustCanvas />
			<div class="page-content">
				<section class="hero">
					<h1>"Stardust"</h1>
					<p class="subtitle">"Scroll to let the dust in. Move the pointer to gather it."</p>
				</section>
			</div>
		</main>
	}
}
