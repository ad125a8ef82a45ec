use crate::theme::Palette;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(theme_color))
        .style(Style::default().fg(palette.text).bg(palette.surface))
}

/// Instruction shortcut definition: (key, description)
pub type InstructionShortcut = (&'static str, &'static str);

/// Creates a paragraph with highlighted instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], palette: &Palette) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (i, (key, desc)) in instructions.iter().enumerate() {
        if i > 0 {
            instruction_text.push(Span::styled(" • ", Style::default().fg(palette.muted)));
        }
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(palette.focus).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(palette.muted)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::InstructionShortcut;

    pub const ANY_KEY_CLOSE: InstructionShortcut = ("Any key", " close");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", " close");
    pub const SCROLL: InstructionShortcut = ("j/k", " scroll");
    pub const PAGE: InstructionShortcut = ("PgUp/PgDn", " page");
}
