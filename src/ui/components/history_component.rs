use crate::constants::HISTORY_TITLE;
use crate::registration::Submission;
use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Panel listing the most recent successful registrations, newest first.
///
/// Hidden entirely while there is nothing to show.
pub struct HistoryComponent {
    entries: Vec<Submission>,
}

impl Default for HistoryComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryComponent {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn update_data(&mut self, entries: Vec<Submission>) {
        self.entries = entries;
    }

    pub fn entries(&self) -> &[Submission] {
        &self.entries
    }

    pub fn is_visible(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Height the panel needs: borders plus one line per entry
    pub fn required_height(&self) -> u16 {
        if self.entries.is_empty() {
            0
        } else {
            u16::try_from(self.entries.len()).unwrap_or(u16::MAX).saturating_add(2)
        }
    }

    fn entry_line(entry: &Submission, palette: &Palette) -> Line<'static> {
        let mut spans = vec![
            Span::styled(entry.name.clone(), Style::default().fg(palette.text).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" <{}>", entry.email), Style::default().fg(palette.text)),
        ];
        if let Some(phone) = entry.phone() {
            spans.push(Span::styled(format!(" {}", phone), Style::default().fg(palette.muted)));
        }
        spans.push(Span::styled(
            format!(
                "  Newsletter: {} • Terms: {}",
                if entry.newsletter { "Yes" } else { "No" },
                if entry.terms { "Accepted" } else { "Not Accepted" }
            ),
            Style::default().fg(palette.accent),
        ));
        spans.push(Span::styled(
            format!("  {}", entry.submitted_at),
            Style::default().fg(palette.muted),
        ));
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, palette: &Palette) {
        if !self.is_visible() || rect.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", HISTORY_TITLE))
            .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface));

        let lines: Vec<Line> = self.entries.iter().map(|entry| Self::entry_line(entry, palette)).collect();
        f.render_widget(Paragraph::new(lines).block(block), rect);
    }
}
