// ============================================================================
// DOM MODULE - Thin helpers over web-sys (wasm only)
// ============================================================================

pub mod builder;
pub mod element;
pub mod events;

pub use builder::*;
pub use element::*;
pub use events::*;
