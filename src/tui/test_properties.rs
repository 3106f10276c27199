//! Property tests: arbitrary event sequences keep the model well-formed.

use std::time::Duration;

use proptest::prelude::*;

use crate::menu::Menu;

use super::layout::Region;
use super::model::{KitchenModel, KitchenMsg, Overlay, Scene};
use super::update::update;

fn model() -> KitchenModel {
    KitchenModel::new(
        Menu::builtin(),
        Duration::from_millis(33),
        false,
        (120, 40),
    )
}

/// Messages a user session can produce, including out-of-range selections
/// and pointer events anywhere on (or off) the board.
fn arb_msg() -> impl Strategy<Value = KitchenMsg> {
    prop_oneof![
        Just(KitchenMsg::Tick),
        (0usize..8).prop_map(KitchenMsg::SelectDish),
        Just(KitchenMsg::Reveal),
        Just(KitchenMsg::GoBack),
        Just(KitchenMsg::ToggleOverlay(Overlay::Help)),
        Just(KitchenMsg::CloseOverlay),
        (20u16..200, 10u16..60).prop_map(|(cols, rows)| KitchenMsg::Resize { cols, rows }),
        (0u16..200, 0u16..60).prop_map(|(col, row)| {
            KitchenMsg::Mouse(crossterm::event::MouseEvent {
                kind: crossterm::event::MouseEventKind::Moved,
                column: col,
                row,
                modifiers: crossterm::event::KeyModifiers::NONE,
            })
        }),
        (0u16..200, 0u16..60).prop_map(|(col, row)| {
            KitchenMsg::Mouse(crossterm::event::MouseEvent {
                kind: crossterm::event::MouseEventKind::Down(
                    crossterm::event::MouseButton::Left,
                ),
                column: col,
                row,
                modifiers: crossterm::event::KeyModifiers::NONE,
            })
        }),
    ]
}

proptest! {
    #[test]
    fn selected_dish_always_resolves(msgs in prop::collection::vec(arb_msg(), 0..80)) {
        let mut m = model();
        for msg in msgs {
            update(&mut m, msg);
            if let Some(dish) = m.scene.selected() {
                prop_assert!(dish < m.menu.len());
                prop_assert!(m.selected_dish().is_some());
            }
        }
    }

    #[test]
    fn transition_progress_stays_in_unit_range(
        msgs in prop::collection::vec(arb_msg(), 0..80)
    ) {
        let mut m = model();
        for msg in msgs {
            update(&mut m, msg);
            let p = m.transition_progress();
            prop_assert!((0.0..=1.0).contains(&p), "progress {p} out of range");
        }
    }

    #[test]
    fn hovered_placards_point_into_the_menu(
        msgs in prop::collection::vec(arb_msg(), 0..80)
    ) {
        let mut m = model();
        for msg in msgs {
            update(&mut m, msg);
            if let Some(Region::Placard(dish)) = m.hovered {
                prop_assert!(dish < m.menu.len());
            }
        }
    }

    #[test]
    fn quit_is_never_set_without_a_quit_message(
        msgs in prop::collection::vec(arb_msg(), 0..80)
    ) {
        // arb_msg never produces Quit or key events, so quit must stay false.
        let mut m = model();
        for msg in msgs {
            update(&mut m, msg);
            prop_assert!(!m.quit);
        }
    }

    #[test]
    fn go_back_always_lands_on_the_board(
        msgs in prop::collection::vec(arb_msg(), 0..40)
    ) {
        let mut m = model();
        for msg in msgs {
            update(&mut m, msg);
        }
        update(&mut m, KitchenMsg::GoBack);
        prop_assert_eq!(m.scene, Scene::Board);
    }
}
