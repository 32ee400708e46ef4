//! User management panel view (list, create, delete accounts)

use iced::widget::button as btn;
use iced::widget::{Column, Id, Space, button, checkbox, column, container, row, text, text_input};
use iced::{Center, Element, Fill, alignment};

use driftbox_common::api::UserRecord;

use crate::style::{
    BUTTON_PADDING, ELEMENT_SPACING, FILE_ITEM_SPACING, FORM_MAX_WIDTH, FORM_PADDING,
    INPUT_PADDING, SMALL_TEXT_SIZE, SPACER_SIZE_MEDIUM, SPACER_SIZE_SMALL, TEXT_SIZE, TITLE_SIZE,
    alternating_row_style, danger_icon_button_style, disabled_icon_button_style, error_text_style,
    muted_text_style, shaped_text, shaped_text_wrapped,
};
use crate::types::{InputId, Message, UserManagementMode, UserManagementState};

use super::layout::{scrollable_modal, scrollable_panel};

// ============================================================================
// List View
// ============================================================================

/// Build the account list view
fn list_view(state: &UserManagementState) -> Element<'_, Message> {
    let title = shaped_text("User Management")
        .size(TITLE_SIZE)
        .width(Fill)
        .align_x(Center);

    // Account list or status message
    let list_content: Element<'_, Message> = match &state.all_users {
        None => shaped_text("Loading users...")
            .size(TEXT_SIZE)
            .width(Fill)
            .align_x(Center)
            .style(muted_text_style)
            .into(),
        Some(Err(error)) => shaped_text_wrapped(error)
            .size(TEXT_SIZE)
            .width(Fill)
            .align_x(Center)
            .style(error_text_style)
            .into(),
        Some(Ok(users)) => {
            if users.is_empty() {
                shaped_text("No users found")
                    .size(TEXT_SIZE)
                    .width(Fill)
                    .align_x(Center)
                    .style(muted_text_style)
                    .into()
            } else {
                let rows = users
                    .iter()
                    .enumerate()
                    .map(|(index, user)| user_row(index, user, state.deleting_id.as_deref()));
                Column::with_children(rows)
                    .spacing(FILE_ITEM_SPACING)
                    .width(Fill)
                    .into()
            }
        }
    };

    let new_user_button = button(shaped_text("New User").size(TEXT_SIZE))
        .on_press(Message::UsersShowCreate)
        .padding(BUTTON_PADDING);

    let close_button = button(shaped_text("Close").size(TEXT_SIZE))
        .on_press(Message::UsersCancel)
        .padding(BUTTON_PADDING)
        .style(btn::secondary);

    let mut items: Vec<Element<'_, Message>> = vec![title.into()];

    // Show error if present (e.g., a failed delete)
    if let Some(error) = &state.list_error {
        items.push(
            shaped_text_wrapped(error)
                .size(TEXT_SIZE)
                .width(Fill)
                .align_x(Center)
                .style(error_text_style)
                .into(),
        );
        items.push(Space::new().height(SPACER_SIZE_SMALL).into());
    } else {
        items.push(Space::new().height(SPACER_SIZE_MEDIUM).into());
    }

    items.extend([
        list_content,
        Space::new().height(SPACER_SIZE_MEDIUM).into(),
        row![Space::new().width(Fill), close_button, new_user_button]
            .spacing(ELEMENT_SPACING)
            .into(),
    ]);

    let form = Column::with_children(items)
        .spacing(ELEMENT_SPACING)
        .padding(FORM_PADDING)
        .max_width(FORM_MAX_WIDTH)
        .width(Fill);

    scrollable_panel(form)
}

/// Build one account row with its delete button
///
/// The delete button is swapped for a disabled one while this account's
/// delete request is in flight.
fn user_row<'a>(
    index: usize,
    user: &'a UserRecord,
    deleting_id: Option<&str>,
) -> Element<'a, Message> {
    let username = container(shaped_text_wrapped(&user.username).size(TEXT_SIZE))
        .width(Fill)
        .align_y(alignment::Vertical::Center);

    let mut content = row![username].spacing(ELEMENT_SPACING).align_y(Center);

    if user.is_admin {
        content = content.push(
            shaped_text("admin")
                .size(SMALL_TEXT_SIZE)
                .style(muted_text_style),
        );
    }

    let is_deleting = deleting_id == Some(user.id.as_str());
    let delete_button = if is_deleting {
        button(shaped_text("Delete").size(TEXT_SIZE)).style(disabled_icon_button_style)
    } else {
        button(shaped_text("Delete").size(TEXT_SIZE))
            .on_press(Message::UsersDeleteClicked(user.clone()))
            .style(danger_icon_button_style)
    };
    content = content.push(delete_button);

    container(content)
        .width(Fill)
        .padding(INPUT_PADDING)
        .style(alternating_row_style(index % 2 == 0))
        .into()
}

// ============================================================================
// Create View
// ============================================================================

/// Build the create account form
fn create_view(state: &UserManagementState) -> Element<'_, Message> {
    let title = shaped_text("Create User")
        .size(TITLE_SIZE)
        .width(Fill)
        .align_x(Center);

    let can_create = !state.username.trim().is_empty() && !state.password.is_empty();

    let username_input = text_input("Username", &state.username)
        .on_input(Message::UsersCreateUsernameChanged)
        .on_submit(Message::UsersCreatePressed)
        .id(Id::from(InputId::UsersUsername))
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);

    let password_input = text_input("Password", &state.password)
        .on_input(Message::UsersCreatePasswordChanged)
        .on_submit(Message::UsersCreatePressed)
        .id(Id::from(InputId::UsersPassword))
        .secure(true)
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);

    let admin_checkbox = checkbox(state.is_admin)
        .label("Admin")
        .on_toggle(Message::UsersCreateIsAdminToggled)
        .text_size(TEXT_SIZE)
        .text_shaping(text::Shaping::Advanced);

    let create_button = if can_create {
        button(shaped_text("Create").size(TEXT_SIZE))
            .on_press(Message::UsersCreatePressed)
            .padding(BUTTON_PADDING)
    } else {
        button(shaped_text("Create").size(TEXT_SIZE)).padding(BUTTON_PADDING)
    };

    let cancel_button = button(shaped_text("Cancel").size(TEXT_SIZE))
        .on_press(Message::UsersCancel)
        .padding(BUTTON_PADDING)
        .style(btn::secondary);

    let mut items: Vec<Element<'_, Message>> = vec![title.into()];

    // Show error if present
    if let Some(error) = &state.create_error {
        items.push(
            shaped_text_wrapped(error)
                .size(TEXT_SIZE)
                .width(Fill)
                .align_x(Center)
                .style(error_text_style)
                .into(),
        );
        items.push(Space::new().height(SPACER_SIZE_SMALL).into());
    } else {
        items.push(Space::new().height(SPACER_SIZE_MEDIUM).into());
    }

    items.extend([
        username_input.into(),
        password_input.into(),
        admin_checkbox.into(),
        Space::new().height(SPACER_SIZE_MEDIUM).into(),
        row![Space::new().width(Fill), cancel_button, create_button]
            .spacing(ELEMENT_SPACING)
            .into(),
    ]);

    let form = Column::with_children(items)
        .spacing(ELEMENT_SPACING)
        .padding(FORM_PADDING)
        .max_width(FORM_MAX_WIDTH);

    scrollable_panel(form)
}

// ============================================================================
// Delete Confirmation Modal
// ============================================================================

/// Build the account delete confirmation modal
fn confirm_delete_modal(user: &UserRecord) -> Element<'_, Message> {
    let title = shaped_text("Confirm Delete")
        .size(TITLE_SIZE)
        .width(Fill)
        .align_x(Center);

    let message = shaped_text("Are you sure you want to delete this user?")
        .size(TEXT_SIZE)
        .width(Fill)
        .align_x(Center);

    let username = shaped_text_wrapped(&user.username)
        .size(TEXT_SIZE)
        .width(Fill)
        .align_x(Center)
        .style(muted_text_style);

    let confirm_button = button(shaped_text("Delete").size(TEXT_SIZE))
        .on_press(Message::UsersConfirmDelete)
        .padding(BUTTON_PADDING)
        .style(btn::danger);

    let cancel_button = button(shaped_text("Cancel").size(TEXT_SIZE))
        .on_press(Message::UsersCancelDelete)
        .padding(BUTTON_PADDING)
        .style(btn::secondary);

    let form = column![
        title,
        Space::new().height(SPACER_SIZE_MEDIUM),
        message,
        username,
        Space::new().height(SPACER_SIZE_MEDIUM),
        row![Space::new().width(Fill), cancel_button, confirm_button].spacing(ELEMENT_SPACING),
    ]
    .spacing(ELEMENT_SPACING)
    .padding(FORM_PADDING)
    .max_width(FORM_MAX_WIDTH);

    scrollable_modal(form)
}

// ============================================================================
// Main View Function
// ============================================================================

/// Displays the user management panel
///
/// Shows one of three views based on mode:
/// - List: All accounts with delete buttons
/// - Create: Form to create a new account
/// - ConfirmDelete: Modal to confirm account deletion
pub fn users_view(state: &UserManagementState) -> Element<'_, Message> {
    match &state.mode {
        UserManagementMode::List => list_view(state),
        UserManagementMode::Create => create_view(state),
        UserManagementMode::ConfirmDelete { user } => confirm_delete_modal(user),
    }
}
