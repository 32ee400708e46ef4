//! Styling and layout
//!
//! Numeric layout constants, theme-derived colors, and widget style
//! functions. Everything is re-exported flat so call sites use
//! `crate::style::NAME`.

mod layout;
mod shaping;
mod ui;
mod widgets;
mod window;

pub use layout::*;
pub use shaping::{shaped_text, shaped_text_wrapped};
pub use widgets::*;
pub use window::*;
