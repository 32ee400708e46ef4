//! Main application layout, toolbar, and blocking overlay

use iced::widget::{Column, Space, button, column, container, row, scrollable, stack};
use iced::{Center, Element, Fill};

use crate::style::{
    ELEMENT_SPACING, SEPARATOR_HEIGHT, SMALL_PADDING, SMALL_TEXT_SIZE, TEXT_SIZE, TITLE_SIZE,
    TOOLBAR_PADDING_HORIZONTAL, TOOLBAR_PADDING_VERTICAL, TOOLBAR_SPACING, content_background_style,
    danger_icon_button_style, modal_overlay_style, separator_style, shaped_text,
    shaped_text_wrapped, success_text_style, toolbar_background_style, toolbar_button_style,
    transparent_icon_button_style,
};
use crate::types::{ActivePanel, Message, Overlay, ToolbarState, ViewConfig};

use super::account::account_view;
use super::files::{confirm_file_delete_modal, files_view};
use super::login::login_view;
use super::settings::settings_view;
use super::users::users_view;

// ============================================================================
// Helper Functions
// ============================================================================

/// Create a horizontal separator line
fn separator<'a>() -> Element<'a, Message> {
    container(Space::new().width(Fill).height(SEPARATOR_HEIGHT))
        .width(Fill)
        .height(SEPARATOR_HEIGHT)
        .style(separator_style)
        .into()
}

/// Wrap a form column in a scrollable, centered container with background styling.
///
/// This is the standard wrapper for all panel views (Users, Account, Settings).
/// It provides:
/// - Vertical scrolling when content exceeds window height
/// - Horizontal and vertical centering of the form (when content fits)
/// - Consistent background styling
pub fn scrollable_panel(form: Column<'_, Message>) -> Element<'_, Message> {
    let scrollable_form = scrollable(container(form).width(Fill).center_x(Fill))
        .width(Fill)
        .height(iced::Length::Shrink);

    container(scrollable_form)
        .width(Fill)
        .height(Fill)
        .center(Fill)
        .style(content_background_style)
        .into()
}

/// Wrap a form column in a scrollable, centered container with modal overlay styling.
///
/// This is the wrapper for confirmation dialogs. It provides:
/// - Vertical scrolling when content exceeds window height
/// - Horizontal and vertical centering of the form (when content fits)
/// - Semi-transparent overlay background
pub fn scrollable_modal(form: Column<'_, Message>) -> Element<'_, Message> {
    let scrollable_form = scrollable(container(form).width(Fill).center_x(Fill))
        .width(Fill)
        .height(iced::Length::Shrink);

    container(scrollable_form)
        .width(Fill)
        .height(Fill)
        .center(Fill)
        .style(modal_overlay_style)
        .into()
}

// ============================================================================
// Main Layout
// ============================================================================

/// Main application layout with toolbar and content area
///
/// Displays the top toolbar with panel toggles, and the main content area
/// below it. The content shows the login form until a session is held, then
/// the file browser. Side panels (Users, Account, Settings) stack over the
/// base content, and the blocking overlay stacks over everything including
/// the toolbar.
pub fn main_layout<'a>(config: ViewConfig<'a>) -> Element<'a, Message> {
    let is_authenticated = config.auth_state.is_authenticated();
    let is_admin = config.profile.is_some_and(|p| p.is_admin);

    // Top toolbar
    let toolbar = build_toolbar(ToolbarState {
        active_panel: config.active_panel,
        is_authenticated,
        is_admin,
        username: config.profile.map(|p| p.username.as_str()),
    });

    // Base content: login form until authenticated, file browser after
    let base: Element<'a, Message> = if is_authenticated {
        files_view(config.files)
    } else {
        login_view(config.login_form)
    };

    // Side panels stack over the base content
    let content: Element<'a, Message> = match config.active_panel {
        ActivePanel::Users if is_authenticated => stack![base, users_view(config.users)]
            .width(Fill)
            .height(Fill)
            .into(),
        ActivePanel::Account if is_authenticated => stack![base, account_view(config.account_form)]
            .width(Fill)
            .height(Fill)
            .into(),
        ActivePanel::Settings => stack![
            base,
            settings_view(config.settings, config.settings_form, config.theme.clone())
        ]
        .width(Fill)
        .height(Fill)
        .into(),
        _ => base,
    };

    // File delete confirmation stacks over panels
    let content: Element<'a, Message> = match &config.files.pending_delete {
        Some(pending) if is_authenticated => {
            stack![content, confirm_file_delete_modal(pending)]
                .width(Fill)
                .height(Fill)
                .into()
        }
        _ => content,
    };

    let main_content = column![separator(), content, separator()]
        .width(Fill)
        .height(Fill);

    let mut page = column![toolbar];
    if let Some(notice) = config.notice {
        page = page.push(notice_bar(notice));
    }
    let page = page.push(main_content);

    // Blocking overlay covers the whole window, toolbar included
    match config.overlay {
        Some(overlay) => stack![page, overlay_view(overlay)]
            .width(Fill)
            .height(Fill)
            .into(),
        None => page.into(),
    }
}

// ============================================================================
// Toolbar
// ============================================================================

/// Build the top toolbar with the title and panel toggles
///
/// Shows the application title (with the signed-in username once known) and
/// toggle buttons for the side panels. Users is admin-only; Account and
/// Log Out require a session. Settings is always reachable so the server
/// URL can be changed before the first login.
fn build_toolbar(state: ToolbarState<'_>) -> Element<'static, Message> {
    let active_panel = state.active_panel;

    let mut actions = row![].spacing(TOOLBAR_SPACING).align_y(Center);

    if state.is_authenticated && state.is_admin {
        actions = actions.push(
            button(shaped_text("Users").size(TEXT_SIZE))
                .on_press(Message::ToggleUsers)
                .style(toolbar_button_style(active_panel == ActivePanel::Users)),
        );
    }

    if state.is_authenticated {
        actions = actions.push(
            button(shaped_text("Account").size(TEXT_SIZE))
                .on_press(Message::ToggleAccount)
                .style(toolbar_button_style(active_panel == ActivePanel::Account)),
        );
    }

    actions = actions.push(
        button(shaped_text("Settings").size(TEXT_SIZE))
            .on_press(Message::ToggleSettings)
            .style(toolbar_button_style(active_panel == ActivePanel::Settings)),
    );

    if state.is_authenticated {
        actions = actions.push(
            button(shaped_text("Log Out").size(TEXT_SIZE))
                .on_press(Message::LogoutPressed)
                .style(danger_icon_button_style),
        );
    }

    let toolbar = container(
        row![
            shaped_text(state.toolbar_title()).size(TITLE_SIZE),
            Space::new().width(Fill),
            actions,
        ]
        .spacing(TOOLBAR_SPACING)
        .align_y(Center),
    )
    .width(Fill)
    .padding([TOOLBAR_PADDING_VERTICAL, TOOLBAR_PADDING_HORIZONTAL])
    .style(toolbar_background_style);

    toolbar.into()
}

// ============================================================================
// Notice Bar & Overlay
// ============================================================================

/// Build the dismissable notice bar shown under the toolbar
///
/// Used for non-fatal problems that should not block the session, like a
/// failed profile fetch.
fn notice_bar(notice: &str) -> Element<'_, Message> {
    container(
        row![
            shaped_text_wrapped(notice).size(TEXT_SIZE).width(Fill),
            button(shaped_text("Dismiss").size(SMALL_TEXT_SIZE))
                .on_press(Message::DismissNotice)
                .style(transparent_icon_button_style),
        ]
        .spacing(ELEMENT_SPACING)
        .align_y(Center),
    )
    .width(Fill)
    .padding([SMALL_PADDING, TOOLBAR_PADDING_HORIZONTAL])
    .style(toolbar_background_style)
    .into()
}

/// Build the blocking overlay layer
///
/// A full-window semi-transparent layer with a centered status message.
/// Loading overlays stay up until the matching response arrives; success
/// notices are dismissed by a timer.
fn overlay_view(overlay: &Overlay) -> Element<'_, Message> {
    let message: Element<'_, Message> = match overlay {
        Overlay::Loading(text) => shaped_text(text).size(TITLE_SIZE).into(),
        Overlay::Success(text) => shaped_text(text)
            .size(TITLE_SIZE)
            .style(success_text_style)
            .into(),
    };

    container(message)
        .width(Fill)
        .height(Fill)
        .center(Fill)
        .style(modal_overlay_style)
        .into()
}
