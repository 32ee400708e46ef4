//! Login form view

use iced::widget::{Column, Id, Space, button, row, text_input};
use iced::{Center, Element, Fill};

use crate::style::{
    BUTTON_PADDING, ELEMENT_SPACING, FORM_MAX_WIDTH, FORM_PADDING, INPUT_PADDING,
    SPACER_SIZE_MEDIUM, SPACER_SIZE_SMALL, TEXT_SIZE, TITLE_SIZE, error_text_style, shaped_text,
    shaped_text_wrapped,
};
use crate::types::{InputId, LoginFormState, Message};

use super::layout::scrollable_panel;

/// Build the login form
///
/// Shown whenever no session token is held. Forced-logout notices (expired
/// or invalidated sessions) surface in the form's error slot.
pub fn login_view(form: &LoginFormState) -> Element<'_, Message> {
    let title = shaped_text("Sign In")
        .size(TITLE_SIZE)
        .width(Fill)
        .align_x(Center);

    let can_submit = !form.username.trim().is_empty() && !form.password.is_empty();

    let username_input = text_input("Username", &form.username)
        .on_input(Message::LoginUsernameChanged)
        .on_submit(Message::LoginPressed)
        .id(Id::from(InputId::LoginUsername))
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);

    let password_input = text_input("Password", &form.password)
        .on_input(Message::LoginPasswordChanged)
        .on_submit(Message::LoginPressed)
        .id(Id::from(InputId::LoginPassword))
        .secure(true)
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);

    let login_button = if can_submit {
        button(shaped_text("Log In").size(TEXT_SIZE))
            .on_press(Message::LoginPressed)
            .padding(BUTTON_PADDING)
    } else {
        button(shaped_text("Log In").size(TEXT_SIZE)).padding(BUTTON_PADDING)
    };

    let mut items: Vec<Element<'_, Message>> = vec![title.into()];

    // Show error if present
    if let Some(error) = &form.error {
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
        Space::new().height(SPACER_SIZE_MEDIUM).into(),
        row![Space::new().width(Fill), login_button]
            .spacing(ELEMENT_SPACING)
            .into(),
    ]);

    let form = Column::with_children(items)
        .spacing(ELEMENT_SPACING)
        .padding(FORM_PADDING)
        .max_width(FORM_MAX_WIDTH);

    scrollable_panel(form)
}
