//! Terminal UI for the kitchen board.
//!
//! Elm-style seams: `model` holds the state, `update` is the pure reducer,
//! `render` draws, `input` maps keys, `layout` owns geometry and mouse
//! hit-testing, and `runtime` runs the event loop.

#![allow(missing_docs)]

pub mod art;
pub mod input;
pub mod layout;
pub mod model;
pub mod motion;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod update;
pub mod widgets;

#[cfg(test)]
mod test_frames;
#[cfg(test)]
mod test_properties;

pub use runtime::{run_kitchen, KitchenRuntimeConfig};
