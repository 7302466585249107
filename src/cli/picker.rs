//! Full-screen single-choice format picker using ratatui
//!
//! Selection logic lives in [`PickerState`] so it can be driven without a
//! terminal; [`run_picker`] wraps it in a draw/read loop.

use std::io::Stdout;

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{prelude::*, widgets::Paragraph};

/// Exit status after Ctrl+C, the conventional 128 + SIGINT
pub const CANCELLED_EXIT_CODE: i32 = 130;

/// Result of a picker screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    /// User confirmed this option with Enter
    Selected(String),
    /// User pressed Ctrl+C
    Cancelled,
}

/// What a single key press did to the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    Stay,
    Confirm(String),
    Cancel,
}

/// Options on screen and the highlighted index
#[derive(Debug, Clone)]
pub struct PickerState {
    options: Vec<String>,
    selected: usize,
}

impl PickerState {
    /// Returns `None` for an empty option list
    pub fn new(options: Vec<String>) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        Some(Self {
            options,
            selected: 0,
        })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_option(&self) -> &str {
        &self.options[self.selected]
    }

    /// Move the highlight up, stopping at the first option
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move the highlight down, stopping at the last option
    pub fn move_down(&mut self) {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PickerAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PickerAction::Cancel
            }
            KeyCode::Up => {
                self.move_up();
                PickerAction::Stay
            }
            KeyCode::Down => {
                self.move_down();
                PickerAction::Stay
            }
            KeyCode::Enter => PickerAction::Confirm(self.selected_option().to_string()),
            _ => PickerAction::Stay,
        }
    }
}

/// Show `options` under a `Select <title>:` header until one is confirmed
pub fn run_picker(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    options: &[String],
    title: &str,
) -> Result<PickResult> {
    let Some(mut state) = PickerState::new(options.to_vec()) else {
        bail!("No options available for {}", title);
    };

    loop {
        terminal.draw(|frame| draw_picker(frame, &state, title))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events, not release
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match state.handle_key(key) {
                PickerAction::Stay => {}
                PickerAction::Confirm(choice) => return Ok(PickResult::Selected(choice)),
                PickerAction::Cancel => return Ok(PickResult::Cancelled),
            }
        }
    }
}

fn draw_picker(frame: &mut Frame, state: &PickerState, title: &str) {
    let area = frame.area();

    // Header takes the first row; keep the highlight inside the rest
    let max_visible = (area.height as usize).saturating_sub(1).max(1);
    let start_idx = if state.selected() >= max_visible {
        state.selected() - max_visible + 1
    } else {
        0
    };

    let mut lines = Vec::with_capacity(max_visible + 1);
    lines.push(Line::from(format!("Select {}:", title)));
    for (i, option) in state
        .options()
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(max_visible)
    {
        if i == state.selected() {
            lines.push(Line::from(Span::styled(
                format!("> {}", option),
                Style::default().add_modifier(Modifier::REVERSED),
            )));
        } else {
            lines.push(Line::from(format!("  {}", option)));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}
