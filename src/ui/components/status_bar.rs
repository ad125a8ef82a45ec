//! Navbar and footer lines

use crate::constants::{APP_TAGLINE, APP_TITLE, PROCESSING_LABEL};
use crate::theme::{Palette, ThemeMode};
use crate::ui::core::actions::Pane;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the navbar and footer need to know about the app
#[derive(Debug, Clone, Copy)]
pub struct StatusInfo {
    pub focus: Pane,
    pub theme: ThemeMode,
    pub follows_system: bool,
    pub busy: bool,
    pub total_users: usize,
}

/// Navbar component
pub struct Navbar;

impl Navbar {
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo, palette: &Palette) {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", APP_TITLE),
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(APP_TAGLINE, Style::default().fg(palette.muted)),
            Span::raw("   "),
        ];

        for pane in Pane::ALL {
            let style = if pane == info.focus {
                Style::default().fg(palette.focus).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(palette.muted)
            };
            spans.push(Span::styled(pane.title(), style));
            spans.push(Span::raw(" "));
        }

        let theme_label = if info.follows_system {
            format!(" {} (system) ", info.theme.label())
        } else {
            format!(" {} ", info.theme.label())
        };
        spans.push(Span::styled(theme_label, Style::default().fg(palette.accent)));

        let navbar = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.background));
        f.render_widget(navbar, area);
    }
}

/// Footer component
pub struct Footer;

impl Footer {
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo, palette: &Palette) {
        let (text, color) = if info.busy {
            (format!("🔄 {}", PROCESSING_LABEL), palette.warning)
        } else {
            let shortcuts = match info.focus {
                Pane::Form => "↑↓: field • Space: toggle • Enter/^S: register • ^L: clear",
                Pane::Buttons => "←→: button • Enter: press",
                Pane::Table => "j/k: row • 1-5: sort • e: edit • d: delete",
            };
            (
                format!(
                    "{} • Tab: pane • ^T: theme • F1: help • ^Q: quit • {} users",
                    shortcuts, info.total_users
                ),
                palette.muted,
            )
        };

        let footer = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).bg(palette.background));

        f.render_widget(footer, area);
    }
}
