//! Scene composition and mouse hit-testing.
//!
//! Placards are placed on the board from each dish's percentage offsets, the
//! same coordinates the view model carries. Layouts are rebuilt per event
//! from the terminal size, and the same rectangles drive both rendering and
//! click resolution, so a region can never render somewhere it cannot be
//! clicked.

#![allow(missing_docs)]

use ratatui::layout::{Position, Rect};

use crate::menu::Menu;

/// Minimum terminal width below which the board shows a "too small" message.
pub const MIN_USABLE_COLS: u16 = 60;
/// Minimum terminal height below which the board shows a "too small" message.
pub const MIN_USABLE_ROWS: u16 = 16;

/// Placard footprint: art block + frame + label row.
pub const PLACARD_WIDTH: u16 = 24;
pub const PLACARD_HEIGHT: u16 = 9;

/// Check whether the terminal is large enough to render usefully.
#[must_use]
pub const fn is_terminal_too_small(cols: u16, rows: u16) -> bool {
    cols < MIN_USABLE_COLS || rows < MIN_USABLE_ROWS
}

/// The interactive region kinds a pointer event can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// One of the board placards, by menu index.
    Placard(usize),
    /// The clickable cover in the covered scene.
    Cover,
    /// The back control in either detail sub-view.
    Back,
    /// The "choose another" control in the revealed scene.
    ChooseAnother,
}

// ──────────────────── board ────────────────────

/// Placement of one placard on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacardPlacement {
    pub dish: usize,
    pub rect: Rect,
}

/// Complete board composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    /// Full corkboard area (background fill).
    pub area: Rect,
    /// Title banner rows at the top.
    pub banner: Rect,
    /// Static hint caption at the bottom.
    pub hint: Rect,
    /// Placard rectangles in menu order.
    pub placards: Vec<PlacardPlacement>,
}

/// Build the board composition for the given terminal size.
#[must_use]
pub fn build_board_layout(cols: u16, rows: u16, menu: &Menu) -> BoardLayout {
    let area = Rect::new(0, 0, cols, rows);
    let banner = Rect::new(0, 1, cols, 3);
    let hint = Rect::new(0, rows.saturating_sub(2), cols, 1);

    // Placards live between the banner and the hint.
    let field_top = banner.bottom() + 1;
    let field_bottom = hint.y.saturating_sub(1);
    let field = Rect::new(
        1,
        field_top,
        cols.saturating_sub(2),
        field_bottom.saturating_sub(field_top),
    );

    let placards = menu
        .iter()
        .enumerate()
        .map(|(dish, d)| PlacardPlacement {
            dish,
            rect: place_in_field(field, d.position.top, d.position.left),
        })
        .collect();

    BoardLayout {
        area,
        banner,
        hint,
        placards,
    }
}

/// Map percentage offsets onto a placard origin inside the field, clamping
/// so the placard stays fully visible.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn place_in_field(field: Rect, top_pct: f32, left_pct: f32) -> Rect {
    let usable_w = f32::from(field.width.saturating_sub(PLACARD_WIDTH));
    let usable_h = f32::from(field.height.saturating_sub(PLACARD_HEIGHT));
    let x = field.x + ((left_pct / 100.0) * usable_w).round().max(0.0) as u16;
    let y = field.y + ((top_pct / 100.0) * usable_h).round().max(0.0) as u16;
    Rect::new(
        x,
        y,
        PLACARD_WIDTH.min(field.width),
        PLACARD_HEIGHT.min(field.height),
    )
}

/// Resolve a pointer position on the board. Later placards win when
/// placements overlap, matching draw order.
#[must_use]
pub fn board_region_at(layout: &BoardLayout, col: u16, row: u16) -> Option<Region> {
    let pos = Position::new(col, row);
    layout
        .placards
        .iter()
        .rev()
        .find(|p| p.rect.contains(pos))
        .map(|p| Region::Placard(p.dish))
}

// ──────────────────── detail ────────────────────

/// Complete detail-scene composition (shared by covered and revealed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLayout {
    /// Back control in the top-left corner.
    pub back: Rect,
    /// Caption row above the panel.
    pub prompt: Rect,
    /// Central panel: the cover when covered, the dish card when revealed.
    pub panel: Rect,
    /// "Choose another" control below the panel (revealed scene only).
    pub choose: Rect,
}

const PANEL_WIDTH: u16 = 46;
const PANEL_HEIGHT: u16 = 13;
const BACK_LABEL_WIDTH: u16 = 20;
const CHOOSE_LABEL_WIDTH: u16 = 24;

/// Build the detail composition for the given terminal size.
#[must_use]
pub fn build_detail_layout(cols: u16, rows: u16) -> DetailLayout {
    let panel_w = PANEL_WIDTH.min(cols.saturating_sub(4));
    let panel_h = PANEL_HEIGHT.min(rows.saturating_sub(6));
    let panel_x = (cols.saturating_sub(panel_w)) / 2;
    let panel_y = (rows.saturating_sub(panel_h)) / 2;

    let panel = Rect::new(panel_x, panel_y, panel_w, panel_h);
    let back = Rect::new(2, 1, BACK_LABEL_WIDTH.min(cols.saturating_sub(2)), 1);
    let prompt = Rect::new(0, panel_y.saturating_sub(2), cols, 1);
    let choose = Rect::new(
        (cols.saturating_sub(CHOOSE_LABEL_WIDTH)) / 2,
        (panel_y + panel_h + 1).min(rows.saturating_sub(1)),
        CHOOSE_LABEL_WIDTH.min(cols),
        1,
    );

    DetailLayout {
        back,
        prompt,
        panel,
        choose,
    }
}

/// Resolve a pointer position in a detail scene.
///
/// The cover is clickable only while covered; "choose another" only once
/// revealed. The back control is live in both sub-views.
#[must_use]
pub fn detail_region_at(layout: &DetailLayout, revealed: bool, col: u16, row: u16) -> Option<Region> {
    let pos = Position::new(col, row);
    if layout.back.contains(pos) {
        return Some(Region::Back);
    }
    if revealed {
        if layout.choose.contains(pos) {
            return Some(Region::ChooseAnother);
        }
    } else if layout.panel.contains(pos) {
        return Some(Region::Cover);
    }
    None
}
