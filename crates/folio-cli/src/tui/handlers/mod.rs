//! Event handlers
//!
//! `impl App` blocks split by concern: input, navigation, rendering.

mod keyboard;
mod mouse;
mod navigation;
mod rendering;
