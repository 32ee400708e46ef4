//! Widget style functions
//!
//! Provides consistent styling for Iced widgets across the application.
//! All styles derive from Iced's theme palette for compatibility with
//! every built-in theme.

use super::ui;
use iced::widget::{button, container, text};
use iced::{Background, Color, Theme};

// ============================================================================
// Button Styles
// ============================================================================

/// Toolbar button style - handles active (selected) and inactive states
pub fn toolbar_button_style(is_active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if is_active {
            // Active state - primary background (matches button::primary)
            let ext = theme.extended_palette();
            button::Style {
                background: Some(Background::Color(ext.primary.strong.color)),
                text_color: ext.primary.strong.text,
                ..Default::default()
            }
        } else {
            // Inactive state - transparent with hover
            transparent_icon_button_style(theme, status)
        }
    }
}

/// Transparent icon button style - no background, icon color with hover
pub fn transparent_icon_button_style(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => theme.palette().primary,
            _ => ui::icon_color(theme),
        },
        ..Default::default()
    }
}

/// Danger icon button style - transparent with danger color on hover
pub fn danger_icon_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = transparent_icon_button_style(theme, status);
    button::Style {
        text_color: match status {
            button::Status::Hovered => theme.palette().danger,
            _ => base.text_color,
        },
        ..base
    }
}

/// Disabled icon button style - no background, dimmed icon
pub fn disabled_icon_button_style(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: ui::icon_disabled_color(theme),
        ..Default::default()
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Alternating row background style (for even rows in lists)
fn alt_row_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ui::alt_row_color(theme))),
        ..Default::default()
    }
}

/// Alternating row style - returns alt_row_style for even rows, default for odd
pub fn alternating_row_style(is_even: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        if is_even {
            alt_row_style(theme)
        } else {
            container::Style::default()
        }
    }
}

/// Content area background style (for forms and popups)
pub fn content_background_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        ..Default::default()
    }
}

/// Modal overlay style (semi-transparent, theme-aware background)
pub fn modal_overlay_style(theme: &Theme) -> container::Style {
    let bg = theme.palette().background;
    container::Style {
        background: Some(Background::Color(Color::from_rgba(bg.r, bg.g, bg.b, 0.9))),
        ..Default::default()
    }
}

/// Separator line style
pub fn separator_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ui::panel_border(theme))),
        ..Default::default()
    }
}

/// Toolbar background style
pub fn toolbar_background_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ui::toolbar_background(theme))),
        ..Default::default()
    }
}

// ============================================================================
// Text Styles
// ============================================================================

/// Error text style - uses danger color
pub fn error_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ui::danger_color(theme)),
    }
}

/// Muted text style - for section titles and secondary info
pub fn muted_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ui::muted_text_color(theme)),
    }
}

/// Success text style - for completed-operation overlay notices
pub fn success_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ui::success_color(theme)),
    }
}
