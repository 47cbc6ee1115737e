use std::path::{Path, PathBuf};

use social_core::media::{MediaKind, normalize_input_path};

use crate::common::{Notice, TextField};

/// Focusable controls on the upload form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadFocus {
    #[default]
    Picker,
    Path,
    Caption,
    Share,
}

impl UploadFocus {
    const ORDER: [UploadFocus; 4] = [
        UploadFocus::Picker,
        UploadFocus::Path,
        UploadFocus::Caption,
        UploadFocus::Share,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadState {
    /// Picker candidates relative to the media root.
    pub files: Vec<PathBuf>,
    pub picker_selected: usize,
    pub discovering: bool,
    /// Chosen file, relative to the media root or absolute.
    pub path: TextField,
    pub caption: TextField,
    pub focus: UploadFocus,
    pub notice: Option<Notice>,
}

impl UploadState {
    /// The file that would be uploaded, if the path names an allow-listed
    /// media type.
    pub fn selected_file(&self, root: &Path) -> Option<PathBuf> {
        let raw = self.path.value().trim();
        if raw.is_empty() {
            return None;
        }
        let path = normalize_input_path(raw);
        MediaKind::from_path(&path)?;
        if path.is_absolute() {
            Some(path)
        } else {
            Some(root.join(path))
        }
    }

    /// Caption to send; empty means none.
    pub fn caption_text(&self) -> Option<String> {
        Some(self.caption.value().to_string()).filter(|c| !c.is_empty())
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            UploadFocus::Path => Some(&mut self.path),
            UploadFocus::Caption => Some(&mut self.caption),
            UploadFocus::Picker | UploadFocus::Share => None,
        }
    }

    /// Copies the highlighted picker entry into the path field.
    pub fn choose_highlighted(&mut self) -> bool {
        let Some(file) = self.files.get(self.picker_selected) else {
            return false;
        };
        let chosen = file.display().to_string();
        self.path.set(chosen);
        true
    }
}
