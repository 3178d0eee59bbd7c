//! Labelled numeric input box for ratatui

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::calculator::Field;
use crate::ui::theme::Palette;

/// Widget for rendering one calculator field
pub struct FieldInputWidget<'a> {
    field: Field,
    text: &'a str,
    focused: bool,
    palette: Palette,
}

impl<'a> FieldInputWidget<'a> {
    pub fn new(field: Field, text: &'a str, palette: Palette) -> Self {
        Self {
            field,
            text,
            focused: false,
            palette,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn hint(&self) -> String {
        let bounds = self.field.bounds();
        format!(" {}-{} ", bounds.min, bounds.max)
    }
}

impl<'a> Widget for FieldInputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused { self.palette.focus } else { self.palette.border };
        let mut title_style = Style::default().fg(self.palette.muted);
        if self.focused {
            title_style = title_style.fg(self.palette.focus).add_modifier(Modifier::BOLD);
        }

        let block = Block::default()
            .title(Span::styled(format!(" {} ", self.field.label()), title_style))
            .title_bottom(Line::from(Span::styled(self.hint(), Style::default().fg(self.palette.muted))).right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let mut spans = vec![Span::styled(
            self.text,
            Style::default().fg(self.palette.text).add_modifier(Modifier::BOLD),
        )];
        // Cursor
        if self.focused {
            spans.push(Span::styled("▏", Style::default().fg(self.palette.focus)));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

/// Text progress bar, `width` cells wide
pub fn level_bar(ratio: f64, width: usize, palette: &Palette) -> Line<'static> {
    let filled = ((width as f64) * ratio.clamp(0.0, 1.0)).round() as usize;
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(palette.accent)),
        Span::styled("░".repeat(width - filled), Style::default().fg(palette.bar_empty)),
    ])
}
