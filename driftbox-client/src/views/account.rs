//! Account panel view (password reset form)

use iced::widget::button as btn;
use iced::widget::{Column, Id, Space, button, row, text_input};
use iced::{Center, Element, Fill};

use crate::style::{
    BUTTON_PADDING, ELEMENT_SPACING, FORM_MAX_WIDTH, FORM_PADDING, INPUT_PADDING,
    SPACER_SIZE_MEDIUM, SPACER_SIZE_SMALL, TEXT_SIZE, TITLE_SIZE, error_text_style, shaped_text,
    shaped_text_wrapped,
};
use crate::types::{AccountFormState, InputId, Message};

use super::layout::scrollable_panel;

/// Build the password reset form
pub fn account_view(form: &AccountFormState) -> Element<'_, Message> {
    let title = shaped_text("Reset Password")
        .size(TITLE_SIZE)
        .width(Fill)
        .align_x(Center);

    let can_submit = !form.current_password.is_empty()
        && !form.new_password.is_empty()
        && !form.confirm_password.is_empty();

    let current_input = text_input("Current password", &form.current_password)
        .on_input(Message::AccountCurrentPasswordChanged)
        .on_submit(Message::AccountResetPressed)
        .id(Id::from(InputId::AccountCurrentPassword))
        .secure(true)
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);

    let new_input = text_input("New password", &form.new_password)
        .on_input(Message::AccountNewPasswordChanged)
        .on_submit(Message::AccountResetPressed)
        .id(Id::from(InputId::AccountNewPassword))
        .secure(true)
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);

    let confirm_input = text_input("Confirm new password", &form.confirm_password)
        .on_input(Message::AccountConfirmPasswordChanged)
        .on_submit(Message::AccountResetPressed)
        .id(Id::from(InputId::AccountConfirmPassword))
        .secure(true)
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);

    let reset_button = if can_submit {
        button(shaped_text("Reset Password").size(TEXT_SIZE))
            .on_press(Message::AccountResetPressed)
            .padding(BUTTON_PADDING)
    } else {
        button(shaped_text("Reset Password").size(TEXT_SIZE)).padding(BUTTON_PADDING)
    };

    let cancel_button = button(shaped_text("Cancel").size(TEXT_SIZE))
        .on_press(Message::ToggleAccount)
        .padding(BUTTON_PADDING)
        .style(btn::secondary);

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
        current_input.into(),
        new_input.into(),
        confirm_input.into(),
        Space::new().height(SPACER_SIZE_MEDIUM).into(),
        row![Space::new().width(Fill), cancel_button, reset_button]
            .spacing(ELEMENT_SPACING)
            .into(),
    ]);

    let form = Column::with_children(items)
        .spacing(ELEMENT_SPACING)
        .padding(FORM_PADDING)
        .max_width(FORM_MAX_WIDTH);

    scrollable_panel(form)
}
