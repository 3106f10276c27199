#![forbid(unsafe_code)]

//! Badger's Kitchen (bdk) — an animated dish board for the terminal.
//!
//! A corkboard pins today's four dishes as tilted photo placards. Clicking
//! one (or pressing its number) walks into a detail scene where the dish
//! hides under a cloche until the cover is lifted.
//!
//! The interaction machine is a three-state sum type — board, covered,
//! revealed — with one total render function per variant, so an impossible
//! screen (a revealed description without a selected dish) cannot be
//! expressed.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use badgers_kitchen::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use badgers_kitchen::core::config::Config;
//! use badgers_kitchen::menu::Menu;
//! ```

pub mod prelude;

pub mod core;
pub mod logger;
pub mod menu;
#[cfg(feature = "tui")]
pub mod tui;
