//! File browser view (both listings, search, upload controls)

use iced::widget::button as btn;
use iced::widget::{
    Column, Id, Space, button, checkbox, column, container, row, scrollable, text, text_input,
};
use iced::{Center, Element, Fill, Right};

use driftbox_common::api::FileRecord;
use driftbox_common::time::{format_size, format_upload_time};

use crate::style::{
    BUTTON_PADDING, ELEMENT_SPACING, FILE_DATE_COLUMN_WIDTH, FILE_ITEM_SPACING, FILE_LIST_MAX_WIDTH,
    FILE_ROW_PADDING, FILE_SIZE_COLUMN_WIDTH, FORM_MAX_WIDTH, FORM_PADDING, INPUT_PADDING,
    SEARCH_INPUT_WIDTH, SMALL_TEXT_SIZE, SPACER_SIZE_MEDIUM, SPACER_SIZE_SMALL, TEXT_SIZE,
    TITLE_SIZE, alternating_row_style, content_background_style, danger_icon_button_style,
    error_text_style, muted_text_style, shaped_text, shaped_text_wrapped,
    transparent_icon_button_style,
};
use crate::types::{FileListSlot, FileListState, InputId, Message, PendingFileDelete};

use super::layout::scrollable_modal;

// ============================================================================
// Main View
// ============================================================================

/// Build the file browser
///
/// Shows the search and upload controls, then the owned and shared listings
/// stacked vertically. Both listings refresh together, so a search or upload
/// updates the whole view at once.
pub fn files_view(files: &FileListState) -> Element<'_, Message> {
    let controls = controls_row(files);

    let mut items: Vec<Element<'_, Message>> = vec![controls];

    // Per-file failures from the last upload batch
    for error in &files.upload_errors {
        items.push(
            shaped_text_wrapped(error)
                .size(TEXT_SIZE)
                .width(Fill)
                .style(error_text_style)
                .into(),
        );
    }

    // Download or delete failure
    if let Some(error) = &files.action_error {
        items.push(
            shaped_text_wrapped(error)
                .size(TEXT_SIZE)
                .width(Fill)
                .style(error_text_style)
                .into(),
        );
    }

    items.push(Space::new().height(SPACER_SIZE_SMALL).into());
    items.push(list_section("My Files", &files.my_files, false));
    items.push(Space::new().height(SPACER_SIZE_MEDIUM).into());
    items.push(list_section("Shared Files", &files.shared_files, true));

    let content = Column::with_children(items)
        .spacing(ELEMENT_SPACING)
        .padding(FORM_PADDING)
        .max_width(FILE_LIST_MAX_WIDTH)
        .width(Fill);

    let scrollable_content = scrollable(container(content).width(Fill).center_x(Fill))
        .width(Fill)
        .height(Fill);

    container(scrollable_content)
        .width(Fill)
        .height(Fill)
        .style(content_background_style)
        .into()
}

/// Build the search and upload controls row
fn controls_row(files: &FileListState) -> Element<'_, Message> {
    let search_input = text_input("Search files", &files.search_keyword)
        .on_input(Message::SearchKeywordChanged)
        .on_submit(Message::SearchSubmitted)
        .id(Id::from(InputId::SearchKeyword))
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE)
        .width(SEARCH_INPUT_WIDTH);

    let search_button = button(shaped_text("Search").size(TEXT_SIZE))
        .on_press(Message::SearchSubmitted)
        .padding(BUTTON_PADDING)
        .style(btn::secondary);

    let shared_checkbox = checkbox(files.upload_shared)
        .label("Shared")
        .on_toggle(Message::UploadSharedToggled)
        .text_size(TEXT_SIZE)
        .text_shaping(text::Shaping::Advanced);

    let upload_button = button(shaped_text("Upload Files").size(TEXT_SIZE))
        .on_press(Message::UploadPressed)
        .padding(BUTTON_PADDING);

    row![
        search_input,
        search_button,
        Space::new().width(Fill),
        shared_checkbox,
        upload_button,
    ]
    .spacing(ELEMENT_SPACING)
    .align_y(Center)
    .into()
}

// ============================================================================
// List Sections
// ============================================================================

/// What a listing section draws below its heading
enum ListBody<'a> {
    /// A single line standing in for the whole list
    Placeholder { message: &'a str, is_error: bool },
    /// One row per record
    Rows(&'a [FileRecord]),
}

/// Decide what a listing slot renders
///
/// Every rowless slot maps to exactly one placeholder line, so a listing
/// is never an empty container that could mean either "loading" or
/// "nothing there".
fn list_body(slot: &FileListSlot) -> ListBody<'_> {
    match slot {
        None => ListBody::Placeholder {
            message: "Loading...",
            is_error: false,
        },
        Some(Err(error)) => ListBody::Placeholder {
            message: error,
            is_error: true,
        },
        Some(Ok(records)) if records.is_empty() => ListBody::Placeholder {
            message: "No files found",
            is_error: false,
        },
        Some(Ok(records)) => ListBody::Rows(records),
    }
}

/// Build one listing section with its title and rows
///
/// `show_uploader` adds the uploader column used by the shared listing.
fn list_section<'a>(
    title: &'static str,
    slot: &'a FileListSlot,
    show_uploader: bool,
) -> Element<'a, Message> {
    let heading = shaped_text(title).size(TEXT_SIZE).style(muted_text_style);

    let body: Element<'a, Message> = match list_body(slot) {
        ListBody::Placeholder { message, is_error } => {
            let style = if is_error {
                error_text_style
            } else {
                muted_text_style
            };
            shaped_text_wrapped(message)
                .size(TEXT_SIZE)
                .width(Fill)
                .align_x(Center)
                .style(style)
                .into()
        }
        ListBody::Rows(records) => {
            let rows = records
                .iter()
                .enumerate()
                .map(|(index, record)| file_row(index, record, show_uploader));
            Column::with_children(rows)
                .spacing(FILE_ITEM_SPACING)
                .width(Fill)
                .into()
        }
    };

    column![heading, body].spacing(SPACER_SIZE_SMALL).into()
}

/// Build one file row with its action buttons
///
/// Rows whose record resolves to no identifier render without actions; the
/// mismatch is logged once when the listing arrives, not here.
fn file_row<'a>(index: usize, record: &'a FileRecord, show_uploader: bool) -> Element<'a, Message> {
    let name = shaped_text_wrapped(&record.filename)
        .size(TEXT_SIZE)
        .width(Fill);

    let mut content = row![name].spacing(ELEMENT_SPACING).align_y(Center);

    if show_uploader && !record.uploaded_by.is_empty() {
        content = content.push(
            shaped_text(&record.uploaded_by)
                .size(SMALL_TEXT_SIZE)
                .style(muted_text_style),
        );
    }

    // Owned files marked shared show up in both listings
    if !show_uploader && record.is_public {
        content = content.push(
            shaped_text("Public")
                .size(SMALL_TEXT_SIZE)
                .style(muted_text_style),
        );
    }

    content = content.push(
        shaped_text(format_size(record.size))
            .size(TEXT_SIZE)
            .width(FILE_SIZE_COLUMN_WIDTH)
            .align_x(Right)
            .style(muted_text_style),
    );
    content = content.push(
        shaped_text(format_upload_time(&record.uploaded_at))
            .size(TEXT_SIZE)
            .width(FILE_DATE_COLUMN_WIDTH)
            .align_x(Right)
            .style(muted_text_style),
    );

    if let Some(id) = record.resolved_id() {
        let download_button = button(shaped_text("Download").size(TEXT_SIZE))
            .on_press(Message::FileDownloadClicked {
                id: id.to_string(),
                filename: record.filename.clone(),
            })
            .style(transparent_icon_button_style);
        content = content.push(download_button);

        let delete_button = button(shaped_text("Delete").size(TEXT_SIZE))
            .on_press(Message::FileDeleteClicked {
                id: id.to_string(),
                filename: record.filename.clone(),
            })
            .style(danger_icon_button_style);
        content = content.push(delete_button);
    }

    container(content)
        .width(Fill)
        .padding(FILE_ROW_PADDING)
        .style(alternating_row_style(index % 2 == 0))
        .into()
}

// ============================================================================
// Delete Confirmation Modal
// ============================================================================

/// Build the file delete confirmation modal
pub fn confirm_file_delete_modal(pending: &PendingFileDelete) -> Element<'_, Message> {
    let title = shaped_text("Confirm Delete")
        .size(TITLE_SIZE)
        .width(Fill)
        .align_x(Center);

    let message = shaped_text("Are you sure you want to delete this file?")
        .size(TEXT_SIZE)
        .width(Fill)
        .align_x(Center);

    let filename = shaped_text_wrapped(&pending.filename)
        .size(TEXT_SIZE)
        .width(Fill)
        .align_x(Center)
        .style(muted_text_style);

    let confirm_button = button(shaped_text("Delete").size(TEXT_SIZE))
        .on_press(Message::FileConfirmDelete)
        .padding(BUTTON_PADDING)
        .style(btn::danger);

    let cancel_button = button(shaped_text("Cancel").size(TEXT_SIZE))
        .on_press(Message::FileCancelDelete)
        .padding(BUTTON_PADDING)
        .style(btn::secondary);

    let form = column![
        title,
        Space::new().height(SPACER_SIZE_MEDIUM),
        message,
        filename,
        Space::new().height(SPACER_SIZE_MEDIUM),
        row![Space::new().width(Fill), cancel_button, confirm_button].spacing(ELEMENT_SPACING),
    ]
    .spacing(ELEMENT_SPACING)
    .padding(FORM_PADDING)
    .max_width(FORM_MAX_WIDTH);

    scrollable_modal(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_body_placeholder_for_rowless_slots() {
        let loading: FileListSlot = None;
        assert!(matches!(
            list_body(&loading),
            ListBody::Placeholder {
                message: "Loading...",
                is_error: false
            }
        ));

        let failed: FileListSlot = Some(Err("Network error: connection refused".to_string()));
        assert!(matches!(
            list_body(&failed),
            ListBody::Placeholder {
                message: "Network error: connection refused",
                is_error: true
            }
        ));

        let empty: FileListSlot = Some(Ok(Vec::new()));
        assert!(matches!(
            list_body(&empty),
            ListBody::Placeholder {
                message: "No files found",
                is_error: false
            }
        ));
    }

    #[test]
    fn test_list_body_rows_for_loaded_records() {
        let records: Vec<FileRecord> = serde_json::from_str(
            r#"[{"id":"1","filename":"a.txt"},{"id":"2","filename":"b.txt"}]"#,
        )
        .expect("records");
        let slot: FileListSlot = Some(Ok(records));
        assert!(matches!(list_body(&slot), ListBody::Rows(rows) if rows.len() == 2));
    }
}
