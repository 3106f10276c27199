//! Event loop wiring the terminal, reducer, renderer, and interaction log.
//!
//! The runtime owns all I/O: it reads crossterm events, feeds them to the
//! pure update function, executes the returned commands, and redraws. The
//! model itself never touches the terminal or the filesystem.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::core::errors::{BdkError, Result};
use crate::logger::{EventType, JsonlWriter, LogEntry, Severity};
use crate::menu::Menu;

use super::art::ArtLibrary;
use super::model::{InteractionNote, KitchenCmd, KitchenModel, KitchenMsg};
use super::render::render;
use super::terminal_guard::TerminalGuard;
use super::theme::{AccessibilityProfile, Theme};
use super::update::update;

/// Everything the runtime needs, resolved by the CLI layer.
#[derive(Debug)]
pub struct KitchenRuntimeConfig {
    pub menu: Menu,
    pub art_dir: Option<PathBuf>,
    pub tick_rate: Duration,
    pub reduced_motion: bool,
    pub mouse: bool,
    /// `None` disables interaction logging.
    pub log_file: Option<PathBuf>,
}

/// Run the kitchen board until the user quits.
///
/// # Errors
/// Returns terminal setup/teardown and draw failures. Interaction-log
/// failures degrade silently and never abort the session.
pub fn run_kitchen(config: KitchenRuntimeConfig) -> Result<()> {
    let mut logger = config.log_file.as_ref().map(JsonlWriter::open);
    log(&mut logger, LogEntry::new(EventType::SessionStart, Severity::Info));
    log(
        &mut logger,
        LogEntry {
            dish_count: Some(config.menu.len()),
            ..LogEntry::new(EventType::MenuLoaded, Severity::Info)
        },
    );

    let guard = TerminalGuard::new(config.mouse).map_err(|e| BdkError::terminal(&e))?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).map_err(|e| BdkError::terminal(&e))?;

    let mut model = KitchenModel::new(
        config.menu,
        config.tick_rate,
        config.reduced_motion,
        TerminalGuard::terminal_size(),
    );
    let profile = AccessibilityProfile::from_environment(config.reduced_motion);
    let theme = Theme::from_profile(profile);
    let art = ArtLibrary::new(config.art_dir);

    let result = event_loop(&mut terminal, &mut model, &art, &theme, &mut logger);

    log(&mut logger, LogEntry::new(EventType::SessionEnd, Severity::Info));
    if let Some(l) = logger.as_mut() {
        l.flush();
    }
    drop(guard);
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: &mut KitchenModel,
    art: &ArtLibrary,
    theme: &Theme,
    logger: &mut Option<JsonlWriter>,
) -> Result<()> {
    let mut next_tick = Instant::now() + model.tick_rate;

    while !model.quit {
        terminal
            .draw(|frame| render(frame, model, art, theme))
            .map_err(|e| BdkError::terminal(&e))?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        let msg = if event::poll(timeout).map_err(|e| BdkError::terminal(&e))? {
            match event::read().map_err(|e| BdkError::terminal(&e))? {
                Event::Key(key) => Some(KitchenMsg::Key(key)),
                Event::Mouse(mouse) => Some(KitchenMsg::Mouse(mouse)),
                Event::Resize(cols, rows) => Some(KitchenMsg::Resize { cols, rows }),
                _ => None,
            }
        } else {
            Some(KitchenMsg::Tick)
        };

        if let Some(msg) = msg {
            let cmd = update(model, msg);
            execute_cmd(cmd, model, logger, &mut next_tick);
        }
    }
    Ok(())
}

fn execute_cmd(
    cmd: KitchenCmd,
    model: &KitchenModel,
    logger: &mut Option<JsonlWriter>,
    next_tick: &mut Instant,
) {
    match cmd {
        KitchenCmd::None | KitchenCmd::Quit => {}
        KitchenCmd::ScheduleTick(delay) => *next_tick = Instant::now() + delay,
        KitchenCmd::Record(note) => log(logger, note_entry(&note, model)),
        KitchenCmd::Batch(cmds) => {
            for c in cmds {
                execute_cmd(c, model, logger, next_tick);
            }
        }
    }
}

fn note_entry(note: &InteractionNote, model: &KitchenModel) -> LogEntry {
    let entry = match note {
        InteractionNote::DishSelected { id } => {
            LogEntry::new(EventType::DishSelected, Severity::Info).with_dish(id.clone())
        }
        InteractionNote::CoverRevealed { id } => {
            LogEntry::new(EventType::CoverRevealed, Severity::Info).with_dish(id.clone())
        }
        InteractionNote::ReturnedToBoard => {
            LogEntry::new(EventType::ReturnedToBoard, Severity::Info)
        }
    };
    entry.with_scene(model.scene.name())
}

fn log(logger: &mut Option<JsonlWriter>, entry: LogEntry) {
    if let Some(l) = logger.as_mut() {
        l.write_entry(&entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interaction_notes_map_to_log_events() {
        let mut model = KitchenModel::new(
            Menu::builtin(),
            Duration::from_millis(33),
            false,
            (100, 30),
        );
        model.select_dish(1);

        let entry = note_entry(
            &InteractionNote::DishSelected {
                id: "sweet".to_string(),
            },
            &model,
        );
        assert!(matches!(entry.event, EventType::DishSelected));
        assert_eq!(entry.dish_id.as_deref(), Some("sweet"));
        assert_eq!(entry.scene.as_deref(), Some("covered"));
    }

    #[test]
    fn schedule_tick_moves_the_deadline() {
        let model = KitchenModel::new(
            Menu::builtin(),
            Duration::from_millis(33),
            false,
            (100, 30),
        );
        let mut logger = None;
        let mut deadline = Instant::now();
        let before = deadline;
        execute_cmd(
            KitchenCmd::ScheduleTick(Duration::from_millis(50)),
            &model,
            &mut logger,
            &mut deadline,
        );
        assert!(deadline > before);
    }

    #[test]
    fn batch_executes_every_command() {
        let model = KitchenModel::new(
            Menu::builtin(),
            Duration::from_millis(33),
            false,
            (100, 30),
        );
        let dir = tempfile::tempdir().unwrap();
        let mut logger = Some(JsonlWriter::open(dir.path().join("kitchen.jsonl")));
        let mut deadline = Instant::now();

        execute_cmd(
            KitchenCmd::Batch(vec![
                KitchenCmd::Record(InteractionNote::ReturnedToBoard),
                KitchenCmd::Record(InteractionNote::ReturnedToBoard),
            ]),
            &model,
            &mut logger,
            &mut deadline,
        );
        assert_eq!(logger.as_ref().unwrap().lines_written(), 2);
    }
}
