//! Theme-derived color helpers
//!
//! All colors come from the active Iced theme palette so every built-in
//! theme renders consistently. Widget styles in the `widgets` module build
//! on these.

use iced::{Color, Theme};

/// Muted text color for secondary info and placeholders
pub fn muted_text_color(theme: &Theme) -> Color {
    let text = theme.palette().text;
    Color { a: 0.6, ..text }
}

/// Danger color for errors and destructive actions
pub fn danger_color(theme: &Theme) -> Color {
    theme.palette().danger
}

/// Success color for completed-operation notices
pub fn success_color(theme: &Theme) -> Color {
    theme.palette().success
}

/// Icon color (slightly muted relative to text)
pub fn icon_color(theme: &Theme) -> Color {
    let text = theme.palette().text;
    Color { a: 0.8, ..text }
}

/// Disabled icon color
pub fn icon_disabled_color(theme: &Theme) -> Color {
    let text = theme.palette().text;
    Color { a: 0.3, ..text }
}

/// Alternating row background color (for even rows in lists)
pub fn alt_row_color(theme: &Theme) -> Color {
    let weak = theme.extended_palette().background.weak.color;
    Color { a: 0.4, ..weak }
}

/// Toolbar background color
pub fn toolbar_background(theme: &Theme) -> Color {
    theme.extended_palette().background.weak.color
}

/// Border color for separators and panel edges
pub fn panel_border(theme: &Theme) -> Color {
    theme.extended_palette().background.strong.color
}
