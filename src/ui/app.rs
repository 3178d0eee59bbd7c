//! Main UI Application
//!
//! Owns the calculator state and translates key presses into field edits.
//! All text shown in the inputs is written back from the sanitized values.

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::calculator::{CalculatorState, Field, LevelState, XpNeeded, XpNeededError};
use crate::save::{save_settings_to, Settings};
use crate::ui::theme::{Palette, Theme};
use crate::ui::widgets::{level_bar, FieldInputWidget};

const BAR_WIDTH: usize = 20;

/// Main UI application
pub struct App {
    /// The four linked fields
    state: CalculatorState,
    /// Field receiving keystrokes
    focus: Field,
    /// Next keystroke replaces the focused field instead of appending
    replace_on_type: bool,
    /// Outcome of the last calculate action
    result: Option<Result<XpNeeded, XpNeededError>>,
    /// Persisted preferences
    settings: Settings,
    /// Where to write settings when they change, `None` to keep them in memory
    settings_path: Option<PathBuf>,
}

impl App {
    pub fn new(state: CalculatorState, settings: Settings, settings_path: Option<PathBuf>) -> Self {
        log::info!("Theme: {}", settings.theme.name());

        Self {
            state,
            focus: Field::CurrentLevel,
            replace_on_type: true,
            result: None,
            settings,
            settings_path,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn result(&self) -> Option<&Result<XpNeeded, XpNeededError>> {
        self.result.as_ref()
    }

    /// Text displayed in a field
    pub fn field_text(&self, field: Field) -> String {
        self.state.value(field).to_string()
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Ok(true),
            KeyCode::Tab | KeyCode::Down => self.set_focus(self.focus.next()),
            KeyCode::BackTab | KeyCode::Up => self.set_focus(self.focus.prev()),
            KeyCode::Char(c) if c.is_ascii_digit() => self.type_text(&c.to_string()),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Enter => self.calculate(),
            KeyCode::Char('t') => self.toggle_theme()?,
            _ => {}
        }

        Ok(false)
    }

    /// Handle pasted text; separators and other junk are sanitized away
    pub fn handle_paste(&mut self, text: &str) {
        self.type_text(text);
    }

    fn set_focus(&mut self, field: Field) {
        self.focus = field;
        self.replace_on_type = true;
    }

    fn type_text(&mut self, text: &str) {
        let raw = if self.replace_on_type {
            text.to_string()
        } else {
            format!("{}{}", self.field_text(self.focus), text)
        };
        self.replace_on_type = false;
        self.state.edit(self.focus, &raw);
    }

    fn backspace(&mut self) {
        let mut raw = self.field_text(self.focus);
        raw.pop();
        self.replace_on_type = false;
        self.state.edit(self.focus, &raw);
    }

    fn calculate(&mut self) {
        let result = self.state.xp_needed();
        match &result {
            Ok(needed) => log::info!("{}", needed),
            Err(e) => log::info!("Calculation rejected: {:?}", e),
        }
        self.result = Some(result);
    }

    /// Flip the theme and persist the choice
    pub fn toggle_theme(&mut self) -> Result<()> {
        self.settings.theme = self.settings.theme.toggled();
        log::info!("Switched to {} theme", self.settings.theme.name());

        if let Some(path) = &self.settings_path {
            save_settings_to(&self.settings, path)?;
        }
        Ok(())
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn render(&self, frame: &mut Frame) {
        let palette = self.settings.theme.palette();
        let area = frame.area();

        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            area,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(7), // Current
                Constraint::Length(7), // Target
                Constraint::Length(3), // Result
                Constraint::Min(0),
                Constraint::Length(1), // Help
            ])
            .split(area);

        self.render_title(frame, rows[0], &palette);
        self.render_side(frame, rows[1], "Current", Field::CurrentLevel, Field::CurrentXp, self.state.current, &palette);
        self.render_side(frame, rows[2], "Target", Field::TargetLevel, Field::TargetXp, self.state.target, &palette);
        self.render_result(frame, rows[3], &palette);
        self.render_help(frame, rows[5], &palette);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let title = Line::from(vec![
            Span::styled("ICGrind XP Calculator", Style::default().fg(palette.text).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(self.settings.theme.icon(), Style::default().fg(palette.muted)),
        ]);
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border));
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center).block(block), area);
    }

    #[allow(clippy::too_many_arguments)]
    fn render_side(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        level_field: Field,
        xp_field: Field,
        side: LevelState,
        palette: &Palette,
    ) {
        let block = Block::default()
            .title(Span::styled(format!(" {} ", title), Style::default().fg(palette.text)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2)])
            .split(inner);
        let inputs = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(parts[0]);

        for (field, rect) in [(level_field, inputs[0]), (xp_field, inputs[1])] {
            let text = self.field_text(field);
            frame.render_widget(
                FieldInputWidget::new(field, &text, *palette).focused(self.focus == field),
                rect,
            );
        }

        frame.render_widget(Paragraph::new(self.progress_lines(side, palette)), parts[1]);
    }

    fn progress_lines(&self, side: LevelState, palette: &Palette) -> Vec<Line<'static>> {
        let table = self.state.table();
        let into_level = side.xp.saturating_sub(table.xp_for_level(side.level));
        let next = match table.xp_to_next_level(side.xp) {
            Some(remaining) => format!("{} XP to level {}", remaining, side.level + 1),
            None => "max level".to_string(),
        };

        let mut bar = level_bar(table.level_progress(side.xp), BAR_WIDTH, palette);
        bar.spans.insert(0, Span::raw(" "));

        vec![
            bar,
            Line::from(Span::styled(
                format!(" {} XP into level {}, {}", into_level, side.level, next),
                Style::default().fg(palette.muted),
            )),
        ]
    }

    fn render_result(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let line = match &self.result {
            Some(Ok(needed)) => Line::from(Span::styled(
                needed.to_string(),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            )),
            Some(Err(e)) => Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                "Press Enter to calculate",
                Style::default().fg(palette.muted),
            )),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center).block(block), area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let key = Style::default().fg(palette.focus);
        let text = Style::default().fg(palette.muted);
        let help = Line::from(vec![
            Span::styled("[Tab/↑↓]", key),
            Span::styled(" Field  ", text),
            Span::styled("[0-9]", key),
            Span::styled(" Edit  ", text),
            Span::styled("[Enter]", key),
            Span::styled(" Calculate  ", text),
            Span::styled("[T]", key),
            Span::styled(" Theme  ", text),
            Span::styled("[Q/Esc]", key),
            Span::styled(" Quit", text),
        ]);
        frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), area);
    }
}
