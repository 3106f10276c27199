//! Input routing for the kitchen board.
//!
//! Keys resolve with deterministic precedence: overlay keys first, then
//! global keys, then scene keys. Every binding maps to an [`InputAction`];
//! the update function owns the semantics.

#![allow(missing_docs)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::model::{Overlay, Scene};

/// Everything key resolution needs to know about the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub scene: Scene,
    pub active_overlay: Option<Overlay>,
    /// Number of dishes on the board (bounds the number-key row).
    pub dish_count: usize,
}

impl Default for InputContext {
    fn default() -> Self {
        Self {
            scene: Scene::Board,
            active_overlay: None,
            dish_count: 0,
        }
    }
}

/// Resolved key semantics, applied by the update function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    /// Esc: close overlay, leave the detail scene, or quit from the board.
    BackOrQuit,
    CloseOverlay,
    ToggleOverlay(Overlay),
    SelectDish(usize),
    Reveal,
    GoBack,
}

/// Outcome of key resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputResolution {
    pub action: Option<InputAction>,
    pub consumed: bool,
}

impl InputResolution {
    const fn action(action: InputAction) -> Self {
        Self {
            action: Some(action),
            consumed: true,
        }
    }

    const fn consumed_without_action() -> Self {
        Self {
            action: None,
            consumed: true,
        }
    }

    const fn passthrough() -> Self {
        Self {
            action: None,
            consumed: false,
        }
    }
}

/// Resolve a key event using deterministic precedence rules:
/// overlay keys first, then global keys, then scene keys.
#[must_use]
pub fn resolve_key_event(key: &KeyEvent, context: InputContext) -> InputResolution {
    if let Some(overlay) = context.active_overlay {
        return resolve_overlay_key(key, overlay);
    }
    let global = resolve_global_key(key);
    if global.consumed {
        return global;
    }
    resolve_scene_key(key, context)
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn resolve_overlay_key(key: &KeyEvent, overlay: Overlay) -> InputResolution {
    if is_ctrl_c(key) {
        return InputResolution::action(InputAction::Quit);
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => InputResolution::action(InputAction::CloseOverlay),
        KeyCode::Char('?') if overlay == Overlay::Help => {
            InputResolution::action(InputAction::ToggleOverlay(Overlay::Help))
        }
        // Overlays swallow everything else.
        _ => InputResolution::consumed_without_action(),
    }
}

fn resolve_global_key(key: &KeyEvent) -> InputResolution {
    if is_ctrl_c(key) {
        return InputResolution::action(InputAction::Quit);
    }
    match key.code {
        KeyCode::Char('q') => InputResolution::action(InputAction::Quit),
        KeyCode::Esc => InputResolution::action(InputAction::BackOrQuit),
        KeyCode::Char('?') => InputResolution::action(InputAction::ToggleOverlay(Overlay::Help)),
        _ => InputResolution::passthrough(),
    }
}

fn resolve_scene_key(key: &KeyEvent, context: InputContext) -> InputResolution {
    match context.scene {
        Scene::Board => match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as u8 - b'1') as usize;
                if index < context.dish_count {
                    InputResolution::action(InputAction::SelectDish(index))
                } else {
                    InputResolution::passthrough()
                }
            }
            _ => InputResolution::passthrough(),
        },
        Scene::Covered { .. } => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => InputResolution::action(InputAction::Reveal),
            KeyCode::Char('b') => InputResolution::action(InputAction::GoBack),
            _ => InputResolution::passthrough(),
        },
        Scene::Revealed { .. } => match key.code {
            KeyCode::Char('b' | 'c') | KeyCode::Enter => {
                InputResolution::action(InputAction::GoBack)
            }
            _ => InputResolution::passthrough(),
        },
    }
}

// ──────────────────── contextual help ────────────────────

/// One line of the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Help content for the current scene/overlay state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextualHelp {
    pub title: &'static str,
    pub bindings: Vec<HelpBinding>,
}

/// Build contextual help entries for the current state.
#[must_use]
pub fn contextual_help(context: InputContext) -> ContextualHelp {
    if context.active_overlay == Some(Overlay::Help) {
        return ContextualHelp {
            title: "Help",
            bindings: vec![
                HelpBinding {
                    keys: "Esc / q / ?",
                    description: "close this overlay",
                },
                HelpBinding {
                    keys: "Ctrl-C",
                    description: "quit",
                },
            ],
        };
    }

    let mut bindings = match context.scene {
        Scene::Board => vec![
            HelpBinding {
                keys: "click / 1-4",
                description: "pick a dish from the board",
            },
            HelpBinding {
                keys: "q / Esc",
                description: "leave the kitchen",
            },
        ],
        Scene::Covered { .. } => vec![
            HelpBinding {
                keys: "click / Enter",
                description: "lift the cover",
            },
            HelpBinding {
                keys: "b / Esc",
                description: "back to the board",
            },
        ],
        Scene::Revealed { .. } => vec![
            HelpBinding {
                keys: "c / b / Esc",
                description: "choose another dish",
            },
        ],
    };
    bindings.push(HelpBinding {
        keys: "?",
        description: "toggle help",
    });

    let title = match context.scene {
        Scene::Board => "The board",
        Scene::Covered { .. } => "Under the cover",
        Scene::Revealed { .. } => "The dish",
    };
    ContextualHelp { title, bindings }
}
