//! Layout constants for consistent UI appearance
//!
//! All numeric constants for dimensions, sizes, spacing, and padding are
//! defined here. Window constants are in the `window` module. Color functions
//! are in the `ui` module. Widget styles are in the `widgets` module.

// ============================================================================
// Padding
// ============================================================================

/// Text input field padding
pub const INPUT_PADDING: f32 = 8.0;

/// Button padding
pub const BUTTON_PADDING: f32 = 10.0;

/// Form container padding
pub const FORM_PADDING: f32 = 20.0;

/// Toolbar horizontal padding (matches FORM_PADDING for alignment)
pub const TOOLBAR_PADDING_HORIZONTAL: f32 = 20.0;

/// Toolbar vertical padding
pub const TOOLBAR_PADDING_VERTICAL: f32 = 8.0;

/// Small padding (general use)
pub const SMALL_PADDING: f32 = 5.0;

// ============================================================================
// Spacing
// ============================================================================

/// General spacing between form elements
pub const ELEMENT_SPACING: f32 = 10.0;

/// Medium vertical spacer (between sections)
pub const SPACER_SIZE_MEDIUM: f32 = 10.0;

/// Small vertical spacer (between related items)
pub const SPACER_SIZE_SMALL: f32 = 5.0;

/// Toolbar spacing between sections
pub const TOOLBAR_SPACING: f32 = 20.0;

/// Spacing between file rows in the list
pub const FILE_ITEM_SPACING: f32 = 3.0;

// ============================================================================
// Dimensions
// ============================================================================

/// Maximum width for form dialogs
pub const FORM_MAX_WIDTH: f32 = 400.0;

/// Maximum width for the file list view (double the standard form width)
pub const FILE_LIST_MAX_WIDTH: f32 = FORM_MAX_WIDTH * 2.0;

/// Padding inside each file row (vertical, horizontal)
pub const FILE_ROW_PADDING: [f32; 2] = [4.0, 8.0];

/// Width of the file size column in the file list
pub const FILE_SIZE_COLUMN_WIDTH: f32 = 80.0;

/// Width of the upload date column in the file list
pub const FILE_DATE_COLUMN_WIDTH: f32 = 140.0;

/// Width of the search input in the file toolbar
pub const SEARCH_INPUT_WIDTH: f32 = 220.0;

/// Separator line height
pub const SEPARATOR_HEIGHT: f32 = 1.0;

// ============================================================================
// Text Sizes
// ============================================================================

/// Standard text size for list rows and form content
pub const TEXT_SIZE: f32 = 14.0;

/// Panel title text size
pub const TITLE_SIZE: f32 = 20.0;

/// Small text size for hints and secondary info
pub const SMALL_TEXT_SIZE: f32 = 12.0;
