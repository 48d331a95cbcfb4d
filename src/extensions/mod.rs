//! Optional observer hooks live here.
//!
//! Plugins only observe; they never mutate controller state directly.

pub mod plugins;

pub use plugins::{PageContext, PagePlugin, PageSignal};
