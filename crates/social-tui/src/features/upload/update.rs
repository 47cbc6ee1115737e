//! Upload feature reducer.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use social_core::api::ApiError;

use super::state::{UploadFocus, UploadState};
use crate::common::Notice;

pub const POSTED_MESSAGE: &str = "Posted successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadAction {
    None,
    Submit {
        path: PathBuf,
        caption: Option<String>,
    },
}

pub fn handle_key(upload: &mut UploadState, root: &Path, key: KeyEvent) -> UploadAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('s') if ctrl => submit(upload, root),
        KeyCode::Tab => {
            upload.focus = upload.focus.next();
            UploadAction::None
        }
        KeyCode::BackTab => {
            upload.focus = upload.focus.prev();
            UploadAction::None
        }
        KeyCode::Up if upload.focus == UploadFocus::Picker => {
            upload.picker_selected = upload.picker_selected.saturating_sub(1);
            UploadAction::None
        }
        KeyCode::Down if upload.focus == UploadFocus::Picker => {
            if upload.picker_selected + 1 < upload.files.len() {
                upload.picker_selected += 1;
            }
            UploadAction::None
        }
        KeyCode::Up => {
            upload.focus = upload.focus.prev();
            UploadAction::None
        }
        KeyCode::Down => {
            upload.focus = upload.focus.next();
            UploadAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') if upload.focus == UploadFocus::Picker => {
            if upload.choose_highlighted() {
                upload.focus = UploadFocus::Caption;
            }
            UploadAction::None
        }
        KeyCode::Enter => match upload.focus {
            UploadFocus::Share => submit(upload, root),
            focus => {
                upload.focus = focus.next();
                UploadAction::None
            }
        },
        _ => {
            if let Some(field) = upload.focused_field_mut() {
                field.input(key);
            }
            UploadAction::None
        }
    }
}

pub fn handle_paste(upload: &mut UploadState, text: &str) {
    if upload.focus == UploadFocus::Picker {
        upload.focus = UploadFocus::Path;
        upload.path.clear();
    }
    if let Some(field) = upload.focused_field_mut() {
        field.insert_str(text);
    }
}

/// Share stays inert until an allow-listed file is chosen.
fn submit(upload: &mut UploadState, root: &Path) -> UploadAction {
    let Some(path) = upload.selected_file(root) else {
        return UploadAction::None;
    };
    upload.notice = None;
    UploadAction::Submit {
        path,
        caption: upload.caption_text(),
    }
}

pub fn handle_media_discovered(upload: &mut UploadState, files: Vec<PathBuf>) {
    upload.discovering = false;
    upload.files = files;
    upload.picker_selected = upload
        .picker_selected
        .min(upload.files.len().saturating_sub(1));
}

pub fn handle_upload_failed(upload: &mut UploadState, error: &ApiError) {
    upload.notice = Some(Notice::error(error.to_string()));
}
