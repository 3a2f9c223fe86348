use serde_json::Value;
use telebot_core::error::{Result, TelebotError};
use telebot_core::json::{Decode, JsonData};

use crate::types::{File, Message, Update, User, UserProfilePhotos};

/// The `{ok, error_code, description, result}` wrapper every method replies with.
///
/// A reply with `ok == false` is still a successful decode: check `ok` before
/// looking at `result`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub error_code: Option<i64>,
    pub description: Option<String>,
    pub result: Option<T>,
}

impl<T: Decode> ApiResponse<T> {
    pub fn decode(value: &Value) -> Self {
        let data = JsonData::new(value);
        let result = if data.has("result") {
            data.get("result")
        } else {
            None
        };

        Self {
            ok: data.get_or_default("ok"),
            error_code: data.get("error_code"),
            description: data.get("description"),
            result,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// The result, with `ok: false` and a missing result turned into errors.
    pub fn ok_result(self) -> Result<T> {
        if !self.ok {
            return Err(TelebotError::Api {
                error_code: self.error_code,
                description: self
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        self.result.ok_or_else(|| TelebotError::Api {
            error_code: None,
            description: "missing result in response".to_string(),
        })
    }
}

pub type GetMeResponse = ApiResponse<User>;
pub type SendMessageResponse = ApiResponse<Message>;
pub type ForwardMessageResponse = ApiResponse<Message>;
pub type SendPhotoResponse = ApiResponse<Message>;
pub type SendAudioResponse = ApiResponse<Message>;
pub type SendDocumentResponse = ApiResponse<Message>;
pub type SendStickerResponse = ApiResponse<Message>;
pub type SendVideoResponse = ApiResponse<Message>;
pub type SendVoiceResponse = ApiResponse<Message>;
pub type SendLocationResponse = ApiResponse<Message>;
pub type SendChatActionResponse = ApiResponse<bool>;
pub type GetUserProfilePhotosResponse = ApiResponse<UserProfilePhotos>;
pub type GetUpdatesResponse = ApiResponse<Vec<Update>>;
pub type SetWebhookResponse = ApiResponse<bool>;
pub type GetFileResponse = ApiResponse<File>;
