//! Elm-style state model for the kitchen board.
//!
//! All display state lives in [`KitchenModel`]. Input and timer events arrive
//! as [`KitchenMsg`] values; side-effects are represented as [`KitchenCmd`]
//! values returned from the update function.
//!
//! **Design invariant:** the model is deterministic and testable — no I/O
//! happens here. The scene is an explicit sum type, so a revealed description
//! without a selected dish is unrepresentable.

use std::time::Duration;

use crossterm::event::{KeyEvent, MouseEvent};

use crate::menu::{Dish, Menu};
use crate::tui::motion::{Transition, TransitionKind};

// ──────────────────── scenes ────────────────────

/// The three visual trees of the kitchen board.
///
/// `Covered` and `Revealed` carry the selected dish as an index into the
/// immutable menu, which is stable for the process lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scene {
    /// The corkboard listing all dishes as clickable placards.
    #[default]
    Board,
    /// Detail view before the cover is dismissed.
    Covered { dish: usize },
    /// Detail view showing the dish's description.
    Revealed { dish: usize },
}

impl Scene {
    /// Stable scene name for logging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Covered { .. } => "covered",
            Self::Revealed { .. } => "revealed",
        }
    }

    /// Selected dish index, if a detail scene is active.
    #[must_use]
    pub const fn selected(self) -> Option<usize> {
        match self {
            Self::Board => None,
            Self::Covered { dish } | Self::Revealed { dish } => Some(dish),
        }
    }

    #[must_use]
    pub const fn is_board(self) -> bool {
        matches!(self, Self::Board)
    }
}

// ──────────────────── overlays ────────────────────

/// Floating surfaces over the current scene. Only one at a time; overlay
/// input takes precedence over scene keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Contextual key map for the current scene.
    Help,
}

// ──────────────────── messages & commands ────────────────────

/// Everything that can happen to the kitchen board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KitchenMsg {
    /// Animation/refresh heartbeat.
    Tick,
    /// Raw key event from the terminal.
    Key(KeyEvent),
    /// Raw mouse event from the terminal.
    Mouse(MouseEvent),
    /// Terminal dimensions changed.
    Resize { cols: u16, rows: u16 },
    /// Select a dish from the board (placard click or number key).
    SelectDish(usize),
    /// Dismiss the cover over the description.
    Reveal,
    /// Return to the board from either detail sub-view.
    GoBack,
    /// Toggle a floating overlay.
    ToggleOverlay(Overlay),
    /// Close any active overlay.
    CloseOverlay,
    /// Leave the kitchen.
    Quit,
}

/// A state-machine interaction worth recording in the JSONL log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionNote {
    DishSelected { id: String },
    CoverRevealed { id: String },
    ReturnedToBoard,
}

/// Side-effects requested by the update function and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KitchenCmd {
    /// Nothing to do.
    None,
    /// Stop the event loop.
    Quit,
    /// Arm the next tick after the given delay.
    ScheduleTick(Duration),
    /// Append an interaction event to the log.
    Record(InteractionNote),
    /// Execute several commands in order.
    Batch(Vec<KitchenCmd>),
}

// ──────────────────── model ────────────────────

/// Complete display state for the kitchen board.
///
/// This struct is the single source of truth for the view layer. The update
/// function mutates it; the render function reads it immutably.
#[derive(Debug)]
pub struct KitchenModel {
    /// The immutable dish list, loaded once at startup.
    pub menu: Menu,
    /// Active scene.
    pub scene: Scene,
    /// Currently active overlay, if any.
    pub active_overlay: Option<Overlay>,
    /// Terminal dimensions (columns, rows).
    pub terminal_size: (u16, u16),
    /// Monotonic tick counter driving transition sampling.
    pub tick: u64,
    /// Configured tick cadence.
    pub tick_rate: Duration,
    /// Collapse transitions to a single step.
    pub reduced_motion: bool,
    /// In-flight cosmetic transition, if any.
    pub transition: Option<Transition>,
    /// Interactive region currently under the mouse cursor.
    pub hovered: Option<crate::tui::layout::Region>,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl KitchenModel {
    /// Create a new model showing the board.
    #[must_use]
    pub fn new(
        menu: Menu,
        tick_rate: Duration,
        reduced_motion: bool,
        terminal_size: (u16, u16),
    ) -> Self {
        let mut model = Self {
            menu,
            scene: Scene::default(),
            active_overlay: None,
            terminal_size,
            tick: 0,
            tick_rate,
            reduced_motion,
            transition: None,
            hovered: None,
            quit: false,
        };
        model.begin_transition(TransitionKind::BoardIn);
        model
    }

    // ── interaction controller ──

    /// Select a dish: always enters `Covered`, resetting any prior reveal —
    /// including when re-selecting the currently selected dish.
    ///
    /// Out-of-range indices (never produced by layout or input) are ignored.
    pub fn select_dish(&mut self, dish: usize) -> Option<InteractionNote> {
        let id = self.menu.get(dish)?.id.clone();
        self.scene = Scene::Covered { dish };
        self.hovered = None;
        self.begin_transition(TransitionKind::DetailIn);
        Some(InteractionNote::DishSelected { id })
    }

    /// Dismiss the cover. Idempotent: a no-op on the board or when already
    /// revealed.
    pub fn reveal(&mut self) -> Option<InteractionNote> {
        match self.scene {
            Scene::Covered { dish } => {
                let id = self.menu.get(dish).map(|d| d.id.clone())?;
                self.scene = Scene::Revealed { dish };
                self.hovered = None;
                self.begin_transition(TransitionKind::RevealIn);
                Some(InteractionNote::CoverRevealed { id })
            }
            Scene::Board | Scene::Revealed { .. } => None,
        }
    }

    /// Return to the board. Idempotent; callable from either detail sub-view.
    pub fn go_back(&mut self) -> Option<InteractionNote> {
        match self.scene {
            Scene::Board => None,
            Scene::Covered { .. } | Scene::Revealed { .. } => {
                self.scene = Scene::Board;
                self.hovered = None;
                self.begin_transition(TransitionKind::BoardIn);
                Some(InteractionNote::ReturnedToBoard)
            }
        }
    }

    /// The dish shown by the active detail scene.
    #[must_use]
    pub fn selected_dish(&self) -> Option<&Dish> {
        self.scene.selected().and_then(|dish| self.menu.get(dish))
    }

    // ── ticking & transitions ──

    /// Advance the tick counter and retire finished transitions.
    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if let Some(t) = self.transition
            && t.is_done(self.tick)
        {
            self.transition = None;
        }
    }

    /// Eased progress of the in-flight transition (`1.0` when idle).
    #[must_use]
    pub fn transition_progress(&self) -> f32 {
        self.transition
            .map_or(1.0, |t| crate::tui::motion::ease_out(t.progress(self.tick)))
    }

    fn begin_transition(&mut self, kind: TransitionKind) {
        self.transition = Some(Transition::begin(kind, self.tick, self.reduced_motion));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> KitchenModel {
        KitchenModel::new(
            Menu::builtin(),
            Duration::from_millis(33),
            false,
            (100, 30),
        )
    }

    #[test]
    fn starts_on_the_board() {
        let m = model();
        assert_eq!(m.scene, Scene::Board);
        assert!(m.selected_dish().is_none());
        assert!(!m.quit);
    }

    #[test]
    fn select_enters_covered_for_every_dish() {
        for dish in 0..4 {
            let mut m = model();
            let note = m.select_dish(dish).expect("note");
            assert_eq!(m.scene, Scene::Covered { dish });
            let id = m.menu.get(dish).unwrap().id.clone();
            assert_eq!(note, InteractionNote::DishSelected { id });
        }
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut m = model();
        assert!(m.select_dish(99).is_none());
        assert_eq!(m.scene, Scene::Board);
    }

    #[test]
    fn reveal_only_moves_covered_to_revealed() {
        let mut m = model();
        assert!(m.reveal().is_none(), "reveal on board is a no-op");

        m.select_dish(1);
        let note = m.reveal().expect("note");
        assert_eq!(m.scene, Scene::Revealed { dish: 1 });
        assert_eq!(
            note,
            InteractionNote::CoverRevealed {
                id: "sweet".to_string()
            }
        );

        // Idempotent.
        assert!(m.reveal().is_none());
        assert_eq!(m.scene, Scene::Revealed { dish: 1 });
    }

    #[test]
    fn go_back_returns_to_board_from_either_sub_view() {
        let mut m = model();
        m.select_dish(0);
        assert_eq!(m.go_back(), Some(InteractionNote::ReturnedToBoard));
        assert_eq!(m.scene, Scene::Board);

        m.select_dish(2);
        m.reveal();
        assert_eq!(m.go_back(), Some(InteractionNote::ReturnedToBoard));
        assert_eq!(m.scene, Scene::Board);

        // Idempotent.
        assert!(m.go_back().is_none());
    }

    #[test]
    fn reselecting_same_dish_resets_reveal() {
        let mut m = model();
        m.select_dish(3);
        m.reveal();
        assert_eq!(m.scene, Scene::Revealed { dish: 3 });

        // Preserved source behavior: selecting again drops back to Covered.
        m.select_dish(3);
        assert_eq!(m.scene, Scene::Covered { dish: 3 });
    }

    #[test]
    fn selected_dish_resolves_through_the_menu() {
        let mut m = model();
        m.select_dish(1);
        assert_eq!(m.selected_dish().unwrap().id, "sweet");
    }

    #[test]
    fn transitions_retire_after_their_steps() {
        let mut m = model();
        m.select_dish(0);
        assert!(m.transition.is_some());
        for _ in 0..TransitionKind::DetailIn.steps() {
            m.advance_tick();
        }
        assert!(m.transition.is_none());
        assert!((m.transition_progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn scene_names_are_stable() {
        assert_eq!(Scene::Board.name(), "board");
        assert_eq!(Scene::Covered { dish: 0 }.name(), "covered");
        assert_eq!(Scene::Revealed { dish: 0 }.name(), "revealed");
    }
}
