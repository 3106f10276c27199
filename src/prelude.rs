//! Convenience re-exports of the most common types.

pub use crate::core::config::Config;
pub use crate::core::errors::{BdkError, Result};
pub use crate::logger::{EventType, JsonlWriter, LogEntry, Severity};
pub use crate::menu::{Dish, Menu, Position};

#[cfg(feature = "tui")]
pub use crate::tui::model::{InteractionNote, KitchenCmd, KitchenModel, KitchenMsg, Scene};
#[cfg(feature = "tui")]
pub use crate::tui::{run_kitchen, KitchenRuntimeConfig};
