//! Settings panel view (server URL, download location, theme)

use iced::Theme;
use iced::widget::button as btn;
use iced::widget::{Column, Id, Space, button, pick_list, row, text_input};
use iced::{Center, Element, Fill};

use crate::config::Settings;
use crate::config::theme::all_themes;
use crate::style::{
    BUTTON_PADDING, ELEMENT_SPACING, FORM_MAX_WIDTH, FORM_PADDING, INPUT_PADDING,
    SPACER_SIZE_MEDIUM, SPACER_SIZE_SMALL, TEXT_SIZE, TITLE_SIZE, error_text_style,
    muted_text_style, shaped_text, shaped_text_wrapped,
};
use crate::types::{InputId, Message, SettingsFormState};

use super::layout::scrollable_panel;

/// Build the settings form
///
/// Edits apply to the live settings so the theme previews immediately;
/// Cancel restores the snapshot taken when the panel opened.
pub fn settings_view<'a>(
    settings: &'a Settings,
    form: Option<&'a SettingsFormState>,
    current_theme: Theme,
) -> Element<'a, Message> {
    let title = shaped_text("Settings")
        .size(TITLE_SIZE)
        .width(Fill)
        .align_x(Center);

    let server_url_label = shaped_text("Server URL").size(TEXT_SIZE);
    let server_url_input = text_input("http://localhost:8080", &settings.server_url)
        .on_input(Message::SettingsServerUrlChanged)
        .on_submit(Message::SaveSettings)
        .id(Id::from(InputId::SettingsServerUrl))
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);

    let download_label = shaped_text("Download location").size(TEXT_SIZE);
    let download_value = settings
        .download_path
        .as_deref()
        .unwrap_or("System downloads folder");
    let browse_button = button(shaped_text("Browse").size(TEXT_SIZE))
        .on_press(Message::SettingsPickDownloadPath)
        .padding(BUTTON_PADDING)
        .style(btn::secondary);
    let download_row = row![
        shaped_text_wrapped(download_value)
            .size(TEXT_SIZE)
            .width(Fill)
            .style(muted_text_style),
        browse_button,
    ]
    .spacing(ELEMENT_SPACING)
    .align_y(Center);

    let theme_label = shaped_text("Theme").size(TEXT_SIZE);
    let theme_picker = pick_list(
        all_themes(),
        Some(current_theme),
        Message::SettingsThemeSelected,
    )
    .text_size(TEXT_SIZE)
    .padding(INPUT_PADDING);
    let theme_row = row![theme_label, theme_picker]
        .spacing(ELEMENT_SPACING)
        .align_y(Center);

    let save_button = button(shaped_text("Save").size(TEXT_SIZE))
        .on_press(Message::SaveSettings)
        .padding(BUTTON_PADDING);

    let cancel_button = button(shaped_text("Cancel").size(TEXT_SIZE))
        .on_press(Message::CancelSettings)
        .padding(BUTTON_PADDING)
        .style(btn::secondary);

    let mut items: Vec<Element<'a, Message>> = vec![title.into()];

    // Show error if present (e.g., save failure)
    if let Some(error) = form.and_then(|f| f.error.as_ref()) {
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
        server_url_label.into(),
        server_url_input.into(),
        Space::new().height(SPACER_SIZE_SMALL).into(),
        download_label.into(),
        download_row.into(),
        Space::new().height(SPACER_SIZE_SMALL).into(),
        theme_row.into(),
        Space::new().height(SPACER_SIZE_MEDIUM).into(),
        row![Space::new().width(Fill), cancel_button, save_button]
            .spacing(ELEMENT_SPACING)
            .into(),
    ]);

    let form = Column::with_children(items)
        .spacing(ELEMENT_SPACING)
        .padding(FORM_PADDING)
        .max_width(FORM_MAX_WIDTH);

    scrollable_panel(form)
}
