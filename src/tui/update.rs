//! Pure update function: `(model, msg) -> cmd`.
//!
//! All state mutation happens here; the runtime executes the returned
//! commands. Keeping the reducer free of I/O lets the interaction machine be
//! tested end-to-end without a terminal.

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use super::input::{self, InputAction, InputContext};
use super::layout::{
    board_region_at, build_board_layout, build_detail_layout, detail_region_at, Region,
};
use super::model::{InteractionNote, KitchenCmd, KitchenModel, KitchenMsg, Overlay, Scene};

/// Apply one message to the model and return the commands to execute.
pub fn update(model: &mut KitchenModel, msg: KitchenMsg) -> KitchenCmd {
    match msg {
        KitchenMsg::Tick => {
            model.advance_tick();
            KitchenCmd::ScheduleTick(model.tick_rate)
        }
        KitchenMsg::Key(key) => handle_key_event(model, &key),
        KitchenMsg::Mouse(mouse) => handle_mouse_event(model, &mouse),
        KitchenMsg::Resize { cols, rows } => {
            model.terminal_size = (cols, rows);
            model.hovered = None;
            KitchenCmd::None
        }
        KitchenMsg::SelectDish(dish) => record(model.select_dish(dish)),
        KitchenMsg::Reveal => record(model.reveal()),
        KitchenMsg::GoBack => record(model.go_back()),
        KitchenMsg::ToggleOverlay(overlay) => {
            model.active_overlay = if model.active_overlay == Some(overlay) {
                None
            } else {
                Some(overlay)
            };
            KitchenCmd::None
        }
        KitchenMsg::CloseOverlay => {
            model.active_overlay = None;
            KitchenCmd::None
        }
        KitchenMsg::Quit => {
            model.quit = true;
            KitchenCmd::Quit
        }
    }
}

fn record(note: Option<InteractionNote>) -> KitchenCmd {
    note.map_or(KitchenCmd::None, KitchenCmd::Record)
}

fn input_context(model: &KitchenModel) -> InputContext {
    InputContext {
        scene: model.scene,
        active_overlay: model.active_overlay,
        dish_count: model.menu.len(),
    }
}

fn handle_key_event(model: &mut KitchenModel, key: &KeyEvent) -> KitchenCmd {
    // Release/repeat events are noise on Windows terminals.
    if key.kind != KeyEventKind::Press {
        return KitchenCmd::None;
    }
    let resolution = input::resolve_key_event(key, input_context(model));
    resolution
        .action
        .map_or(KitchenCmd::None, |action| apply_input_action(model, action))
}

fn apply_input_action(model: &mut KitchenModel, action: InputAction) -> KitchenCmd {
    match action {
        InputAction::Quit => update(model, KitchenMsg::Quit),
        InputAction::BackOrQuit => {
            if model.active_overlay.is_some() {
                update(model, KitchenMsg::CloseOverlay)
            } else if model.scene.is_board() {
                update(model, KitchenMsg::Quit)
            } else {
                update(model, KitchenMsg::GoBack)
            }
        }
        InputAction::CloseOverlay => update(model, KitchenMsg::CloseOverlay),
        InputAction::ToggleOverlay(overlay) => update(model, KitchenMsg::ToggleOverlay(overlay)),
        InputAction::SelectDish(dish) => update(model, KitchenMsg::SelectDish(dish)),
        InputAction::Reveal => update(model, KitchenMsg::Reveal),
        InputAction::GoBack => update(model, KitchenMsg::GoBack),
    }
}

fn handle_mouse_event(model: &mut KitchenModel, mouse: &MouseEvent) -> KitchenCmd {
    // Any click dismisses an overlay; moves over it are ignored.
    if model.active_overlay.is_some() {
        return match mouse.kind {
            MouseEventKind::Down(_) => update(model, KitchenMsg::CloseOverlay),
            _ => KitchenCmd::None,
        };
    }

    match mouse.kind {
        MouseEventKind::Moved => {
            model.hovered = region_at(model, mouse.column, mouse.row);
            KitchenCmd::None
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match region_at(model, mouse.column, mouse.row) {
                Some(Region::Placard(dish)) => update(model, KitchenMsg::SelectDish(dish)),
                Some(Region::Cover) => update(model, KitchenMsg::Reveal),
                Some(Region::Back | Region::ChooseAnother) => update(model, KitchenMsg::GoBack),
                None => KitchenCmd::None,
            }
        }
        _ => KitchenCmd::None,
    }
}

/// Hit-test a pointer position against the active scene's layout.
fn region_at(model: &KitchenModel, col: u16, row: u16) -> Option<Region> {
    let (cols, rows) = model.terminal_size;
    match model.scene {
        Scene::Board => {
            let layout = build_board_layout(cols, rows, &model.menu);
            board_region_at(&layout, col, row)
        }
        Scene::Covered { .. } | Scene::Revealed { .. } => {
            let layout = build_detail_layout(cols, rows);
            let revealed = matches!(model.scene, Scene::Revealed { .. });
            detail_region_at(&layout, revealed, col, row)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Menu;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use std::time::Duration;

    fn model() -> KitchenModel {
        KitchenModel::new(
            Menu::builtin(),
            Duration::from_millis(33),
            false,
            (120, 40),
        )
    }

    fn press(code: KeyCode) -> KitchenMsg {
        KitchenMsg::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(col: u16, row: u16) -> KitchenMsg {
        KitchenMsg::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn moved(col: u16, row: u16) -> KitchenMsg {
        KitchenMsg::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn placard_center(m: &KitchenModel, dish: usize) -> (u16, u16) {
        let (cols, rows) = m.terminal_size;
        let layout = build_board_layout(cols, rows, &m.menu);
        let rect = layout.placards[dish].rect;
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn tick_schedules_the_next_tick() {
        let mut m = model();
        let cmd = update(&mut m, KitchenMsg::Tick);
        assert_eq!(cmd, KitchenCmd::ScheduleTick(Duration::from_millis(33)));
        assert_eq!(m.tick, 1);
    }

    #[test]
    fn select_message_records_the_interaction() {
        let mut m = model();
        let cmd = update(&mut m, KitchenMsg::SelectDish(0));
        assert_eq!(
            cmd,
            KitchenCmd::Record(InteractionNote::DishSelected {
                id: "king".to_string()
            })
        );
        assert_eq!(m.scene, Scene::Covered { dish: 0 });
    }

    #[test]
    fn reveal_on_board_records_nothing() {
        let mut m = model();
        assert_eq!(update(&mut m, KitchenMsg::Reveal), KitchenCmd::None);
        assert_eq!(m.scene, Scene::Board);
    }

    #[test]
    fn escape_walks_back_then_quits() {
        let mut m = model();
        update(&mut m, KitchenMsg::SelectDish(1));
        update(&mut m, KitchenMsg::Reveal);

        assert_eq!(
            update(&mut m, press(KeyCode::Esc)),
            KitchenCmd::Record(InteractionNote::ReturnedToBoard)
        );
        assert_eq!(m.scene, Scene::Board);

        assert_eq!(update(&mut m, press(KeyCode::Esc)), KitchenCmd::Quit);
        assert!(m.quit);
    }

    #[test]
    fn escape_closes_overlay_before_leaving_scene() {
        let mut m = model();
        update(&mut m, KitchenMsg::SelectDish(0));
        update(&mut m, KitchenMsg::ToggleOverlay(Overlay::Help));

        assert_eq!(update(&mut m, press(KeyCode::Esc)), KitchenCmd::None);
        assert_eq!(m.active_overlay, None);
        // Still in the detail scene.
        assert_eq!(m.scene, Scene::Covered { dish: 0 });
    }

    #[test]
    fn clicking_a_placard_selects_its_dish() {
        let mut m = model();
        for dish in 0..4 {
            let mut m2 = model();
            let (col, row) = placard_center(&m2, dish);
            let cmd = update(&mut m2, click(col, row));
            match cmd {
                KitchenCmd::Record(InteractionNote::DishSelected { .. }) => {}
                other => panic!("expected selection, got {other:?}"),
            }
            assert!(m2.scene.selected().is_some());
        }
        // Board background clicks do nothing.
        assert_eq!(update(&mut m, click(0, 0)), KitchenCmd::None);
        assert_eq!(m.scene, Scene::Board);
    }

    #[test]
    fn clicking_the_cover_reveals() {
        let mut m = model();
        update(&mut m, KitchenMsg::SelectDish(2));
        let layout = build_detail_layout(120, 40);
        let col = layout.panel.x + layout.panel.width / 2;
        let row = layout.panel.y + layout.panel.height / 2;

        let cmd = update(&mut m, click(col, row));
        assert_eq!(
            cmd,
            KitchenCmd::Record(InteractionNote::CoverRevealed {
                id: "disaster".to_string()
            })
        );
        assert_eq!(m.scene, Scene::Revealed { dish: 2 });

        // The panel is inert once revealed.
        assert_eq!(update(&mut m, click(col, row)), KitchenCmd::None);
        assert_eq!(m.scene, Scene::Revealed { dish: 2 });
    }

    #[test]
    fn clicking_back_returns_to_the_board() {
        let mut m = model();
        update(&mut m, KitchenMsg::SelectDish(1));
        let layout = build_detail_layout(120, 40);
        let col = layout.back.x + 1;
        let row = layout.back.y;

        assert_eq!(
            update(&mut m, click(col, row)),
            KitchenCmd::Record(InteractionNote::ReturnedToBoard)
        );
        assert_eq!(m.scene, Scene::Board);
    }

    #[test]
    fn clicking_choose_another_returns_to_the_board() {
        let mut m = model();
        update(&mut m, KitchenMsg::SelectDish(3));
        update(&mut m, KitchenMsg::Reveal);
        let layout = build_detail_layout(120, 40);
        let col = layout.choose.x + layout.choose.width / 2;
        let row = layout.choose.y;

        assert_eq!(
            update(&mut m, click(col, row)),
            KitchenCmd::Record(InteractionNote::ReturnedToBoard)
        );
        assert_eq!(m.scene, Scene::Board);
    }

    #[test]
    fn hover_tracks_the_pointer() {
        let mut m = model();
        let (col, row) = placard_center(&m, 0);
        update(&mut m, moved(col, row));
        assert!(matches!(m.hovered, Some(Region::Placard(_))));

        update(&mut m, moved(0, 0));
        assert_eq!(m.hovered, None);
    }

    #[test]
    fn any_click_dismisses_an_overlay() {
        let mut m = model();
        update(&mut m, KitchenMsg::ToggleOverlay(Overlay::Help));
        assert_eq!(update(&mut m, click(5, 5)), KitchenCmd::None);
        assert_eq!(m.active_overlay, None);
        // The click itself does not fall through to the board.
        assert_eq!(m.scene, Scene::Board);
    }

    #[test]
    fn resize_updates_dimensions_and_clears_hover() {
        let mut m = model();
        let (col, row) = placard_center(&m, 0);
        update(&mut m, moved(col, row));
        update(&mut m, KitchenMsg::Resize { cols: 80, rows: 24 });
        assert_eq!(m.terminal_size, (80, 24));
        assert_eq!(m.hovered, None);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut m = model();
        let msg = KitchenMsg::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(update(&mut m, msg), KitchenCmd::None);
        assert!(!m.quit);
    }
}
