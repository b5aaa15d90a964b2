//! Rendering module
//!
//! Renderers are pure functions of a `Snapshot`.

pub mod text;

pub use text::render;
