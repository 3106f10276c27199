//! Structural frame tests rendered against ratatui's `TestBackend`.
//!
//! These assert on frame text, not exact cell styling, so they stay stable
//! across palette tweaks while pinning scene structure.

use std::time::Duration;

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use crate::menu::Menu;

use super::art::ArtLibrary;
use super::model::{KitchenModel, KitchenMsg, Overlay};
use super::render::render;
use super::theme::{AccessibilityProfile, Theme};
use super::update::update;

fn model(cols: u16, rows: u16) -> KitchenModel {
    KitchenModel::new(
        Menu::builtin(),
        Duration::from_millis(33),
        // Reduced motion so a couple of ticks settles every transition.
        true,
        (cols, rows),
    )
}

fn settle(m: &mut KitchenModel) {
    for _ in 0..3 {
        m.advance_tick();
    }
}

fn draw(m: &KitchenModel) -> String {
    let (cols, rows) = m.terminal_size;
    let backend = TestBackend::new(cols, rows);
    let mut terminal = Terminal::new(backend).unwrap();
    let art = ArtLibrary::default();
    let theme = Theme::from_profile(AccessibilityProfile::new(true, true));
    terminal.draw(|frame| render(frame, m, &art, &theme)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn board_shows_banner_and_every_placard_label() {
    let mut m = model(120, 40);
    settle(&mut m);
    let frame = draw(&m);

    assert!(frame.contains("Badger's Kitchen"));
    for dish in m.menu.iter() {
        assert!(frame.contains(&dish.label), "missing label {}", dish.label);
    }
    assert!(frame.contains("Click a photo"));
}

#[test]
fn covered_scene_hides_the_description() {
    let mut m = model(120, 40);
    update(&mut m, KitchenMsg::SelectDish(0));
    settle(&mut m);
    let frame = draw(&m);

    assert!(frame.contains("What's under the cover?"));
    assert!(frame.contains("Back to the board"));
    let description = &m.menu.get(0).unwrap().description;
    assert!(!frame.contains(description), "description leaked through the cover");
}

#[test]
fn revealed_scene_shows_the_description() {
    let mut m = model(120, 40);
    update(&mut m, KitchenMsg::SelectDish(1));
    update(&mut m, KitchenMsg::Reveal);
    settle(&mut m);
    let frame = draw(&m);

    assert!(frame.contains("Portuguese Egg Tarts"));
    assert!(frame.contains("Choose another dish"));
    assert!(frame.contains("Back to the board"));
    assert!(!frame.contains("What's under the cover?"));
}

#[test]
fn each_scene_renders_without_panicking_at_minimum_size() {
    for msgs in [
        vec![],
        vec![KitchenMsg::SelectDish(2)],
        vec![KitchenMsg::SelectDish(2), KitchenMsg::Reveal],
    ] {
        let mut m = model(60, 16);
        for msg in msgs {
            update(&mut m, msg);
        }
        settle(&mut m);
        let _ = draw(&m);
    }
}

#[test]
fn tiny_terminal_shows_the_size_notice() {
    let mut m = model(30, 8);
    settle(&mut m);
    let frame = draw(&m);
    assert!(frame.contains("Terminal too small"));
    assert!(!frame.contains("Badger's Kitchen"));
}

#[test]
fn help_overlay_draws_over_the_board() {
    let mut m = model(120, 40);
    update(&mut m, KitchenMsg::ToggleOverlay(Overlay::Help));
    settle(&mut m);
    let frame = draw(&m);
    assert!(frame.contains("The board"));
    assert!(frame.contains("toggle help"));
}
