use crate::constants::{APP_TITLE, DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::notification::Notification;
use crate::theme::Palette;
use crate::ui::components::dialogs::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::ui::components::dialogs::scroll_behavior::ScrollState;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
NAVIGATION
----------
Tab         Focus next pane (form, buttons, table)
Shift+Tab   Focus previous pane
Esc         Close dialogs

REGISTRATION FORM
-----------------
↑/↓         Move between fields and buttons
←/→         Move the cursor inside a text field
Space       Toggle the selected checkbox
Enter       Toggle checkbox, press button or register
Ctrl+S      Register
Ctrl+L      Clear the form

BUTTON GALLERY
--------------
←/→ h/l     Select a button
Enter/Space Press the selected button

USER TABLE
----------
j/k ↑/↓     Move the row cursor
1-5         Sort by ID, Name, Email, Role, Status
            (same column again flips the direction)
e           Edit the selected user
d / Del     Delete the selected user

GENERAL
-------
Ctrl+T      Toggle light/dark theme
Ctrl+O      Open the demo modal
F1 / ?      Toggle this help
Ctrl+G      Show logs
Ctrl+C/Q    Quit

Notifications close on any key; j/k and PgUp/PgDn scroll long messages.
";

/// Render `lines` inside `area`, scrolled and clamped, with a scrollbar when
/// the content does not fit.
fn render_scrolled_text(f: &mut Frame, area: Rect, lines: &[&str], scroll: &mut ScrollState, palette: &Palette) {
    let visible_height = area.height as usize;
    let total_lines = lines.len();
    let offset = scroll.clamp(total_lines, visible_height);

    let text = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(palette.text))
            .alignment(Alignment::Left),
        area,
    );

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(palette.muted))
            .thumb_style(Style::default().fg(palette.text));

        f.render_stateful_widget(scrollbar, area, scroll.scrollbar_mut());
    }
}

/// Inner content and instruction rows of a dialog
fn dialog_areas(dialog_area: Rect) -> (Rect, Rect) {
    let content_area = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        dialog_area.height.saturating_sub(4),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );
    (content_area, instructions_area)
}

pub fn render_notification_dialog(
    f: &mut Frame,
    area: Rect,
    notification: &Notification,
    scroll: &mut ScrollState,
    palette: &Palette,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" ℹ {} ", notification.title), palette.primary, palette);
    f.render_widget(block, dialog_area);

    let (content_area, instructions_area) = dialog_areas(dialog_area);

    // Wrap the body ourselves so scrolling works on display lines
    let width = content_area.width.max(1) as usize;
    let wrapped: Vec<String> = notification
        .body
        .lines()
        .flat_map(|line| wrap_line(line, width))
        .collect();
    let lines: Vec<&str> = wrapped.iter().map(String::as_str).collect();
    render_scrolled_text(f, content_area, &lines, scroll, palette);

    let instructions = create_instructions_paragraph(&[shortcuts::ANY_KEY_CLOSE, shortcuts::SCROLL], palette);
    f.render_widget(instructions, instructions_area);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut ScrollState, palette: &Palette) {
    let help_area = LayoutManager::centered_rect(80, 85, area);
    f.render_widget(Clear, help_area);

    let block = create_dialog_block(format!(" {} - {} ", APP_TITLE, DIALOG_TITLE_HELP), palette.accent, palette);
    f.render_widget(block, help_area);

    let (content_area, instructions_area) = dialog_areas(help_area);
    let lines: Vec<&str> = HELP_CONTENT.lines().collect();
    render_scrolled_text(f, content_area, &lines, scroll, palette);

    let instructions = create_instructions_paragraph(&[shortcuts::ESC_CLOSE, shortcuts::SCROLL, shortcuts::PAGE], palette);
    f.render_widget(instructions, instructions_area);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut ScrollState, palette: &Palette) {
    let logs_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, logs_area);

    let block = create_dialog_block(format!(" {} ", DIALOG_TITLE_LOGS), palette.warning, palette);
    f.render_widget(block, logs_area);

    let (content_area, instructions_area) = dialog_areas(logs_area);
    if logs.is_empty() {
        f.render_widget(
            Paragraph::new("No logs available")
                .style(Style::default().fg(palette.muted))
                .wrap(Wrap { trim: true }),
            content_area,
        );
    } else {
        let lines: Vec<&str> = logs.iter().map(String::as_str).collect();
        render_scrolled_text(f, content_area, &lines, scroll, palette);
    }

    let instructions = create_instructions_paragraph(&[shortcuts::ESC_CLOSE, shortcuts::SCROLL, shortcuts::PAGE], palette);
    f.render_widget(instructions, instructions_area);
}

/// Greedy word wrap on character counts
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let current_len = current.chars().count();
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            wrapped.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || wrapped.is_empty() {
        wrapped.push(current);
    }
    wrapped
}
