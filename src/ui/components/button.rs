//! Button rendering shared by the form and the button gallery.

use crate::theme::Palette;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Success,
    Danger,
}

impl ButtonVariant {
    pub fn color(self, palette: &Palette) -> Color {
        match self {
            ButtonVariant::Primary => palette.primary,
            ButtonVariant::Secondary => palette.secondary,
            ButtonVariant::Success => palette.success,
            ButtonVariant::Danger => palette.danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonSize {
    /// Horizontal padding on each side of the label
    pub fn padding(self) -> usize {
        match self {
            ButtonSize::Small => 1,
            ButtonSize::Medium => 2,
            ButtonSize::Large => 4,
        }
    }
}

/// A button in the gallery pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseButton {
    pub label: &'static str,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub opens_modal: bool,
}

impl ShowcaseButton {
    const fn new(label: &'static str, variant: ButtonVariant, size: ButtonSize) -> Self {
        Self {
            label,
            variant,
            size,
            disabled: false,
            opens_modal: false,
        }
    }
}

pub const SHOWCASE_BUTTONS: [ShowcaseButton; 9] = [
    ShowcaseButton::new("Primary", ButtonVariant::Primary, ButtonSize::Medium),
    ShowcaseButton::new("Secondary", ButtonVariant::Secondary, ButtonSize::Medium),
    ShowcaseButton::new("Success", ButtonVariant::Success, ButtonSize::Medium),
    ShowcaseButton::new("Danger", ButtonVariant::Danger, ButtonSize::Medium),
    ShowcaseButton::new("Small", ButtonVariant::Primary, ButtonSize::Small),
    ShowcaseButton::new("Medium", ButtonVariant::Primary, ButtonSize::Medium),
    ShowcaseButton::new("Large", ButtonVariant::Primary, ButtonSize::Large),
    ShowcaseButton {
        disabled: true,
        ..ShowcaseButton::new("Disabled", ButtonVariant::Secondary, ButtonSize::Medium)
    },
    ShowcaseButton {
        opens_modal: true,
        ..ShowcaseButton::new("Open Modal", ButtonVariant::Primary, ButtonSize::Medium)
    },
];

/// Render a button label as a filled span
pub fn button_span(
    label: &str,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    focused: bool,
    palette: &Palette,
) -> Span<'static> {
    let pad = " ".repeat(size.padding());
    let text = format!("{}{}{}", pad, label, pad);

    let mut style = if disabled {
        Style::default().fg(palette.muted).bg(palette.surface)
    } else {
        Style::default().fg(Color::White).bg(variant.color(palette))
    };
    if focused && !disabled {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    } else if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if size == ButtonSize::Large {
        style = style.add_modifier(Modifier::BOLD);
    }

    Span::styled(text, style)
}
