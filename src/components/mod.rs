//! UI components.

pub mod stardust;
