//! Ambient star-dust particle layer.
//!
//! Renders a drifting, twinkling field of dust particles on a full-viewport
//! canvas behind page content:
//! - Density-based seeding, reseeded whenever the viewport size changes
//! - Toroidal drift with per-particle twinkle
//! - Pointer/touch attraction with cubic ease-in, dimming and annihilation
//!   close to the pointer
//! - Scroll-driven fade-in of the whole layer
//!
//! The engine is host-agnostic: events arrive through [`EventSource`], frames
//! through [`FrameScheduler`], and drawing goes to a [`Surface`]. The browser
//! implementations back [`StardustCanvas`].
//!
//! # Example
//!
//! ```ignore
//! use stardust_field::StardustCanvas;
//!
//! view! {
//!     <StardustCanvas />
//!     <main class="content">...</main>
//! }
//! ```

mod canvas;
mod component;
mod field;
mod host;
pub mod particles;
mod render;
mod scheduler;
pub mod scroll;
pub mod simulation;
mod state;
#[cfg(test)]
mod testing;
pub mod theme;

pub use canvas::CanvasSurface;
pub use component::StardustCanvas;
pub use field::MountedField;
pub use host::{EventHandler, EventKind, EventSource, HostEvent, WindowEvents, WindowSubscription};
pub use render::{Glow, Surface, render};
pub use scheduler::{
	AnimationFrameScheduler, AnimationFrameTask, FrameScheduler, FrameState, FrameTask,
};
pub use state::{PointerState, StardustState, Viewport};
pub use theme::{Color, StardustStyle};
