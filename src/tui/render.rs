//! Scene rendering.
//!
//! One total render function per scene variant; the dispatch in [`render`]
//! matches exhaustively on the scene sum type, so adding a scene without a
//! renderer is a compile error. All geometry comes from the layout module —
//! the same rectangles the mouse hit-tests use.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use ratatui::Frame;

use super::art::{Art, ArtLibrary};
use super::input::{contextual_help, InputContext};
use super::layout::{
    build_board_layout, build_detail_layout, is_terminal_too_small, BoardLayout, DetailLayout,
    Region, MIN_USABLE_COLS, MIN_USABLE_ROWS,
};
use super::model::{KitchenModel, Scene};
use super::motion::slide_rows;
use super::theme::Theme;
use super::widgets::{center_line, placard_lines, skew_offset};

const TITLE: &str = "Badger's Kitchen";
const SUBTITLE: &str = "Today's dishes, hot from the wok";
const BOARD_HINT: &str = "Click a photo (or press 1-4) to see the story behind the dish · ? help";
const BACK_LABEL: &str = "← Back to the board";
const COVER_PROMPT: &str = "What's under the cover? Click to find out!";
const CHOOSE_LABEL: &str = "Choose another dish";

/// Render the full frame for the current model state.
pub fn render(frame: &mut Frame, model: &KitchenModel, art: &ArtLibrary, theme: &Theme) {
    let area = frame.area();
    if is_terminal_too_small(area.width, area.height) {
        render_too_small(frame, area, theme);
        return;
    }

    match model.scene {
        Scene::Board => render_board(frame, model, art, theme),
        Scene::Covered { dish } => render_covered(frame, model, dish, art, theme),
        Scene::Revealed { dish } => render_revealed(frame, model, dish, art, theme),
    }

    if model.active_overlay.is_some() {
        render_help_overlay(frame, model, theme);
    }
}

fn render_too_small(frame: &mut Frame, area: Rect, theme: &Theme) {
    let msg = format!(
        "Terminal too small — need at least {MIN_USABLE_COLS}x{MIN_USABLE_ROWS} \
         ({}x{} now)",
        area.width, area.height
    );
    let para = Paragraph::new(msg)
        .style(theme.palette.caption)
        .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(para, area);
}

// ──────────────────── board ────────────────────

fn render_board(frame: &mut Frame, model: &KitchenModel, art: &ArtLibrary, theme: &Theme) {
    let (cols, rows) = (frame.area().width, frame.area().height);
    let layout = build_board_layout(cols, rows, &model.menu);
    let progress = model.transition_progress();

    Block::new().style(theme.palette.board_bg).render(layout.area, frame.buffer_mut());
    render_banner(frame, &layout, theme, progress);

    for placement in &layout.placards {
        let Some(dish) = model.menu.get(placement.dish) else {
            continue;
        };
        let hovered = model.hovered == Some(Region::Placard(placement.dish));
        let style = if hovered {
            theme.palette.placard_hover
        } else {
            theme.fade(theme.palette.placard, progress)
        };
        render_placard(
            frame.buffer_mut(),
            placement.rect,
            &art.dish_art(&dish.id),
            &dish.label,
            dish.rotation,
            style,
            theme.palette.pin,
        );
    }

    let hint = Paragraph::new(center_line(BOARD_HINT, layout.hint.width as usize))
        .style(theme.palette.caption);
    frame.render_widget(hint, layout.hint);
}

fn render_banner(frame: &mut Frame, layout: &BoardLayout, theme: &Theme, progress: f32) {
    let width = layout.banner.width as usize;
    let title = Paragraph::new(center_line(TITLE, width))
        .style(theme.fade(theme.palette.banner, progress));
    frame.render_widget(title, Rect { height: 1, ..layout.banner });

    let subtitle_row = Rect {
        y: layout.banner.y + 1,
        height: 1,
        ..layout.banner
    };
    let subtitle =
        Paragraph::new(center_line(SUBTITLE, width)).style(theme.palette.caption);
    frame.render_widget(subtitle, subtitle_row);
}

fn render_placard(
    buf: &mut Buffer,
    rect: Rect,
    art: &Art,
    label: &str,
    rotation: f32,
    style: Style,
    pin_style: Style,
) {
    let lines = placard_lines(&art.lines, label);
    for (row, line) in lines.iter().enumerate() {
        let row = row as u16;
        if row >= rect.height {
            break;
        }
        let x = rect.x + skew_offset(rotation, row, rect.height);
        let line_style = if row == 0 { pin_style } else { style };
        buf.set_stringn(x, rect.y + row, line, rect.width as usize, line_style);
    }
}

// ──────────────────── detail scenes ────────────────────

fn render_covered(
    frame: &mut Frame,
    model: &KitchenModel,
    dish: usize,
    art: &ArtLibrary,
    theme: &Theme,
) {
    let layout = build_detail_layout(frame.area().width, frame.area().height);
    let progress = model.transition_progress();

    render_back(frame, &layout, model, theme);

    let prompt = Paragraph::new(center_line(COVER_PROMPT, layout.prompt.width as usize))
        .style(theme.palette.caption);
    frame.render_widget(prompt, layout.prompt);

    let hovered = model.hovered == Some(Region::Cover);
    let cover_style = if hovered {
        theme.palette.cover.add_modifier(ratatui::style::Modifier::REVERSED)
    } else {
        theme.fade(theme.palette.cover, progress)
    };
    let block = Block::new().borders(Borders::ALL).style(cover_style);
    let inner = block.inner(layout.panel);
    frame.render_widget(block, layout.panel);

    // The cover drops into place from slightly above.
    let slide = slide_rows(progress, 3);
    render_art_block(frame.buffer_mut(), inner, &art.cover_art(), slide, cover_style);

    if let Some(d) = model.menu.get(dish) {
        let caption_row = Rect {
            y: layout.panel.bottom().min(frame.area().height.saturating_sub(1)),
            height: 1,
            x: 0,
            width: frame.area().width,
        };
        let caption = Paragraph::new(center_line(&d.label, caption_row.width as usize))
            .style(theme.palette.dish);
        frame.render_widget(caption, caption_row);
    }
}

fn render_revealed(
    frame: &mut Frame,
    model: &KitchenModel,
    dish: usize,
    art: &ArtLibrary,
    theme: &Theme,
) {
    let layout = build_detail_layout(frame.area().width, frame.area().height);
    let progress = model.transition_progress();

    render_back(frame, &layout, model, theme);

    let Some(d) = model.menu.get(dish) else {
        return;
    };

    let block = Block::new()
        .borders(Borders::ALL)
        .style(theme.fade(theme.palette.dish, progress));
    let inner = block.inner(layout.panel);
    frame.render_widget(block, layout.panel);

    // Art on top, then the label, then the description easing up into view.
    let dish_art = art.dish_art(&d.id);
    render_art_block(frame.buffer_mut(), inner, &dish_art, 0, theme.palette.dish);

    let art_h = (dish_art.height() as u16).min(inner.height);
    let label_y = inner.y + art_h;
    if label_y < inner.bottom() {
        frame.buffer_mut().set_stringn(
            inner.x,
            label_y,
            center_line(&d.label, inner.width as usize),
            inner.width as usize,
            theme.palette.banner,
        );
    }

    let slide = slide_rows(progress, 2);
    let desc_y = label_y + 1 + slide;
    if desc_y < inner.bottom() {
        let desc_area = Rect {
            x: inner.x + 1,
            y: desc_y,
            width: inner.width.saturating_sub(2),
            height: inner.bottom() - desc_y,
        };
        let desc = Paragraph::new(d.description.clone())
            .style(theme.fade(theme.palette.description, progress))
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(desc, desc_area);
    }

    let hovered = model.hovered == Some(Region::ChooseAnother);
    let style = if hovered {
        theme.palette.control.add_modifier(ratatui::style::Modifier::REVERSED)
    } else {
        theme.palette.control
    };
    let choose =
        Paragraph::new(center_line(CHOOSE_LABEL, layout.choose.width as usize)).style(style);
    frame.render_widget(choose, layout.choose);
}

fn render_back(frame: &mut Frame, layout: &DetailLayout, model: &KitchenModel, theme: &Theme) {
    let hovered = model.hovered == Some(Region::Back);
    let style = if hovered {
        theme.palette.control.add_modifier(ratatui::style::Modifier::REVERSED)
    } else {
        theme.palette.control
    };
    frame.render_widget(Paragraph::new(BACK_LABEL).style(style), layout.back);
}

fn render_art_block(buf: &mut Buffer, area: Rect, art: &Art, top_offset: u16, style: Style) {
    let left = area.x + (area.width.saturating_sub(art.width() as u16)) / 2;
    for (row, line) in art.lines.iter().enumerate() {
        let y = area.y + top_offset + row as u16;
        if y >= area.bottom() {
            break;
        }
        buf.set_stringn(left, y, line, area.width as usize, style);
    }
}

// ──────────────────── overlays ────────────────────

fn render_help_overlay(frame: &mut Frame, model: &KitchenModel, theme: &Theme) {
    let help = contextual_help(InputContext {
        scene: model.scene,
        active_overlay: model.active_overlay,
        dish_count: model.menu.len(),
    });

    let area = frame.area();
    let width = 44.min(area.width.saturating_sub(4));
    let height = (help.bindings.len() as u16 + 4).min(area.height.saturating_sub(2));
    let rect = Rect::new(
        (area.width.saturating_sub(width)) / 2,
        (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, rect);
    let block = Block::new()
        .borders(Borders::ALL)
        .title(format!(" {} ", help.title))
        .style(theme.palette.overlay);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    for (row, binding) in help.bindings.iter().enumerate() {
        let y = inner.y + 1 + row as u16;
        if y >= inner.bottom() {
            break;
        }
        let line = format!("  {:<14} {}", binding.keys, binding.description);
        frame
            .buffer_mut()
            .set_stringn(inner.x, y, line, inner.width as usize, theme.palette.overlay);
    }
}
