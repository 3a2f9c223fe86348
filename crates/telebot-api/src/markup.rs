use std::fmt;
use std::path::{Path, PathBuf};

use crate::http::{FileSource, HttpData, HttpFile};

/// Custom keyboard shown in place of the regular one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<String>>,
    pub resize_keyboard: bool,
    pub one_time_keyboard: bool,
    pub selective: bool,
}

impl ReplyKeyboardMarkup {
    pub fn new<R, B>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = B>,
        B: Into<String>,
    {
        Self {
            keyboard: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            ..Self::default()
        }
    }
}

/// Removes a previously shown custom keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReplyKeyboardHide {
    pub selective: bool,
}

/// Shows a reply interface to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForceReply {
    pub selective: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReplyMarkup {
    Keyboard(ReplyKeyboardMarkup),
    HideKeyboard(ReplyKeyboardHide),
    ForceReply(ForceReply),
}

impl ReplyMarkup {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Keyboard(markup) => serde_json::json!({
                "keyboard": markup.keyboard,
                "resize_keyboard": markup.resize_keyboard,
                "one_time_keyboard": markup.one_time_keyboard,
                "selective": markup.selective,
            }),
            Self::HideKeyboard(markup) => serde_json::json!({
                "hide_keyboard": true,
                "selective": markup.selective,
            }),
            Self::ForceReply(markup) => serde_json::json!({
                "force_reply": true,
                "selective": markup.selective,
            }),
        }
    }

    /// Structured values travel as one JSON-encoded text field.
    pub fn encode(&self, data: &mut HttpData, key: &str) {
        data.add(key, self.to_json());
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        Self::Keyboard(markup)
    }
}

impl From<ReplyKeyboardHide> for ReplyMarkup {
    fn from(markup: ReplyKeyboardHide) -> Self {
        Self::HideKeyboard(markup)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(markup: ForceReply) -> Self {
        Self::ForceReply(markup)
    }
}

/// A file to send: one already on the server, or a new upload.
#[derive(Debug, Clone, PartialEq)]
pub enum InputFile {
    FileId(String),
    Bytes { file_name: String, data: Vec<u8> },
    Path(PathBuf),
}

impl InputFile {
    pub fn file_id(id: impl Into<String>) -> Self {
        Self::FileId(id.into())
    }

    pub fn bytes(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Bytes {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn encode(&self, data: &mut HttpData, key: &str) {
        match self {
            Self::FileId(id) => {
                data.add(key, id);
            }
            Self::Bytes {
                file_name,
                data: bytes,
            } => {
                data.add_file(HttpFile {
                    key: key.to_string(),
                    file_name: file_name.clone(),
                    content_type: content_type_for(Path::new(file_name)),
                    source: FileSource::Bytes(bytes.clone()),
                });
            }
            Self::Path(path) => {
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("file")
                    .to_string();
                data.add_file(HttpFile {
                    key: key.to_string(),
                    content_type: content_type_for(path),
                    file_name,
                    source: FileSource::Path(path.clone()),
                });
            }
        }
    }
}

fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Status shown to the user while the bot prepares a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
    FindLocation,
}

impl ChatAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::UploadPhoto => "upload_photo",
            Self::RecordVideo => "record_video",
            Self::UploadVideo => "upload_video",
            Self::RecordAudio => "record_audio",
            Self::UploadAudio => "upload_audio",
            Self::UploadDocument => "upload_document",
            Self::FindLocation => "find_location",
        }
    }
}

impl fmt::Display for ChatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Markdown,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => f.write_str("Markdown"),
        }
    }
}
