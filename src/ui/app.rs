//! Memory map viewer state and event loop

use crate::probe::ScratchBlock;
use crate::report::Report;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Map,
    Classes,
    Scratch,
}

impl FocusedPane {
    /// Move focus to the next pane (map -> classes -> scratch)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Map => FocusedPane::Classes,
            FocusedPane::Classes => FocusedPane::Scratch,
            FocusedPane::Scratch => FocusedPane::Map,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Map => FocusedPane::Scratch,
            FocusedPane::Classes => FocusedPane::Map,
            FocusedPane::Scratch => FocusedPane::Classes,
        }
    }
}

/// The viewer state
///
/// Borrows the report and block from the probe frame, so the viewer must run
/// inside [`crate::probe::observe`].
pub struct App<'a> {
    pub report: &'a Report,
    pub block: &'a ScratchBlock,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub map_scroll: usize,
    pub classes_scroll: usize,
    pub scratch_scroll: usize,

    /// Highest address first in the map pane
    pub descending: bool,

    pub should_quit: bool,
    pub status_message: String,
}

impl<'a> App<'a> {
    pub fn new(report: &'a Report, block: &'a ScratchBlock) -> Self {
        App {
            report,
            block,
            focused_pane: FocusedPane::Map,
            map_scroll: 0,
            classes_scroll: 0,
            scratch_scroll: 0,
            descending: true,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the viewer until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Right column: Classes (top) | Scratch (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        super::panes::render_map_pane(
            frame,
            columns[0],
            self.report,
            self.descending,
            self.focused_pane == FocusedPane::Map,
            &mut self.map_scroll,
        );

        super::panes::render_classes_pane(
            frame,
            right_rows[0],
            self.report,
            self.focused_pane == FocusedPane::Classes,
            &mut self.classes_scroll,
        );

        super::panes::render_scratch_pane(
            frame,
            right_rows[1],
            self.block,
            self.focused_pane == FocusedPane::Scratch,
            &mut self.scratch_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.report.entries().len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.descending = !self.descending;
                self.map_scroll = 0;
                self.status_message = if self.descending {
                    "Sorted high → low".to_string()
                } else {
                    "Sorted low → high".to_string()
                };
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                // Clamped against the content on the next render
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Map => &mut self.map_scroll,
            FocusedPane::Classes => &mut self.classes_scroll,
            FocusedPane::Scratch => &mut self.scratch_scroll,
        }
    }
}
