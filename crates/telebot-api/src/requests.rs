use telebot_core::json::Decode;

use crate::http::HttpData;
use crate::markup::{ChatAction, InputFile, ParseMode, ReplyMarkup};
use crate::types::{File, Message, Update, User, UserProfilePhotos};

/// A remote method call: its name, what it returns and how it is encoded.
pub trait MethodRequest {
    type Output: Decode;

    const METHOD: &'static str;

    fn encode(&self) -> HttpData;
}

/// Fields every `send*` method accepts after its payload.
fn encode_reply(
    data: &mut HttpData,
    reply_to_message_id: Option<i64>,
    reply_markup: &Option<ReplyMarkup>,
) {
    data.add_opt("reply_to_message_id", reply_to_message_id);
    if let Some(markup) = reply_markup {
        markup.encode(data, "reply_markup");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetMe;

impl MethodRequest for GetMe {
    type Output = User;
    const METHOD: &'static str = "getMe";

    fn encode(&self) -> HttpData {
        HttpData::new()
    }
}

#[derive(Debug, Clone)]
pub struct SendMessage {
    pub chat_id: i64,
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessage {
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

impl MethodRequest for SendMessage {
    type Output = Message;
    const METHOD: &'static str = "sendMessage";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add("chat_id", self.chat_id)
            .add("text", &self.text)
            .add_opt("parse_mode", self.parse_mode)
            .add_opt("disable_web_page_preview", self.disable_web_page_preview);
        encode_reply(&mut data, self.reply_to_message_id, &self.reply_markup);
        data
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ForwardMessage {
    pub chat_id: i64,
    pub from_chat_id: i64,
    pub message_id: i64,
}

impl ForwardMessage {
    pub fn new(chat_id: i64, from_chat_id: i64, message_id: i64) -> Self {
        Self {
            chat_id,
            from_chat_id,
            message_id,
        }
    }
}

impl MethodRequest for ForwardMessage {
    type Output = Message;
    const METHOD: &'static str = "forwardMessage";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add("chat_id", self.chat_id)
            .add("from_chat_id", self.from_chat_id)
            .add("message_id", self.message_id);
        data
    }
}

#[derive(Debug, Clone)]
pub struct SendPhoto {
    pub chat_id: i64,
    pub photo: InputFile,
    pub caption: Option<String>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendPhoto {
    pub fn new(chat_id: i64, photo: InputFile) -> Self {
        Self {
            chat_id,
            photo,
            caption: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

impl MethodRequest for SendPhoto {
    type Output = Message;
    const METHOD: &'static str = "sendPhoto";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add("chat_id", self.chat_id)
            .add_opt("caption", self.caption.as_deref());
        self.photo.encode(&mut data, "photo");
        encode_reply(&mut data, self.reply_to_message_id, &self.reply_markup);
        data
    }
}

#[derive(Debug, Clone)]
pub struct SendAudio {
    pub chat_id: i64,
    pub audio: InputFile,
    pub duration: Option<i32>,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendAudio {
    pub fn new(chat_id: i64, audio: InputFile) -> Self {
        Self {
            chat_id,
            audio,
            duration: None,
            performer: None,
            title: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

impl MethodRequest for SendAudio {
    type Output = Message;
    const METHOD: &'static str = "sendAudio";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add("chat_id", self.chat_id)
            .add_opt("duration", self.duration)
            .add_opt("performer", self.performer.as_deref())
            .add_opt("title", self.title.as_deref());
        self.audio.encode(&mut data, "audio");
        encode_reply(&mut data, self.reply_to_message_id, &self.reply_markup);
        data
    }
}

#[derive(Debug, Clone)]
pub struct SendDocument {
    pub chat_id: i64,
    pub document: InputFile,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendDocument {
    pub fn new(chat_id: i64, document: InputFile) -> Self {
        Self {
            chat_id,
            document,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

impl MethodRequest for SendDocument {
    type Output = Message;
    const METHOD: &'static str = "sendDocument";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add("chat_id", self.chat_id);
        self.document.encode(&mut data, "document");
        encode_reply(&mut data, self.reply_to_message_id, &self.reply_markup);
        data
    }
}

#[derive(Debug, Clone)]
pub struct SendSticker {
    pub chat_id: i64,
    pub sticker: InputFile,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendSticker {
    pub fn new(chat_id: i64, sticker: InputFile) -> Self {
        Self {
            chat_id,
            sticker,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

impl MethodRequest for SendSticker {
    type Output = Message;
    const METHOD: &'static str = "sendSticker";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add("chat_id", self.chat_id);
        self.sticker.encode(&mut data, "sticker");
        encode_reply(&mut data, self.reply_to_message_id, &self.reply_markup);
        data
    }
}

#[derive(Debug, Clone)]
pub struct SendVideo {
    pub chat_id: i64,
    pub video: InputFile,
    pub duration: Option<i32>,
    pub caption: Option<String>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVideo {
    pub fn new(chat_id: i64, video: InputFile) -> Self {
        Self {
            chat_id,
            video,
            duration: None,
            caption: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

impl MethodRequest for SendVideo {
    type Output = Message;
    const METHOD: &'static str = "sendVideo";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add("chat_id", self.chat_id)
            .add_opt("duration", self.duration)
            .add_opt("caption", self.caption.as_deref());
        self.video.encode(&mut data, "video");
        encode_reply(&mut data, self.reply_to_message_id, &self.reply_markup);
        data
    }
}

#[derive(Debug, Clone)]
pub struct SendVoice {
    pub chat_id: i64,
    pub voice: InputFile,
    pub duration: Option<i32>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVoice {
    pub fn new(chat_id: i64, voice: InputFile) -> Self {
        Self {
            chat_id,
            voice,
            duration: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

impl MethodRequest for SendVoice {
    type Output = Message;
    const METHOD: &'static str = "sendVoice";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add("chat_id", self.chat_id)
            .add_opt("duration", self.duration);
        self.voice.encode(&mut data, "voice");
        encode_reply(&mut data, self.reply_to_message_id, &self.reply_markup);
        data
    }
}

#[derive(Debug, Clone)]
pub struct SendLocation {
    pub chat_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendLocation {
    pub fn new(chat_id: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            chat_id,
            latitude,
            longitude,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

impl MethodRequest for SendLocation {
    type Output = Message;
    const METHOD: &'static str = "sendLocation";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add("chat_id", self.chat_id)
            .add("latitude", self.latitude)
            .add("longitude", self.longitude);
        encode_reply(&mut data, self.reply_to_message_id, &self.reply_markup);
        data
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SendChatAction {
    pub chat_id: i64,
    pub action: ChatAction,
}

impl SendChatAction {
    pub fn new(chat_id: i64, action: ChatAction) -> Self {
        Self { chat_id, action }
    }
}

impl MethodRequest for SendChatAction {
    type Output = bool;
    const METHOD: &'static str = "sendChatAction";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add("chat_id", self.chat_id).add("action", self.action);
        data
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetUserProfilePhotos {
    pub user_id: i64,
    pub offset: Option<i32>,
    /// 1-100, server default 100.
    pub limit: Option<i32>,
}

impl GetUserProfilePhotos {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            offset: None,
            limit: None,
        }
    }
}

impl MethodRequest for GetUserProfilePhotos {
    type Output = UserProfilePhotos;
    const METHOD: &'static str = "getUserProfilePhotos";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add("user_id", self.user_id)
            .add_opt("offset", self.offset)
            .add_opt("limit", self.limit);
        data
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetUpdates {
    /// First update to return; passing `last update_id + 1` confirms everything before it.
    pub offset: Option<i64>,
    pub limit: Option<i32>,
    /// Long-polling timeout in seconds.
    pub timeout: Option<i32>,
}

impl MethodRequest for GetUpdates {
    type Output = Vec<Update>;
    const METHOD: &'static str = "getUpdates";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add_opt("offset", self.offset)
            .add_opt("limit", self.limit)
            .add_opt("timeout", self.timeout);
        data
    }
}

/// Sets the webhook URL; an empty or absent URL removes it.
#[derive(Debug, Clone, Default)]
pub struct SetWebhook {
    pub url: Option<String>,
    /// Public key certificate for self-signed setups.
    pub certificate: Option<InputFile>,
}

impl SetWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            certificate: None,
        }
    }

    pub fn remove() -> Self {
        Self::default()
    }
}

impl MethodRequest for SetWebhook {
    type Output = bool;
    const METHOD: &'static str = "setWebhook";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add_opt("url", self.url.as_deref());
        if let Some(certificate) = &self.certificate {
            certificate.encode(&mut data, "certificate");
        }
        data
    }
}

#[derive(Debug, Clone)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl MethodRequest for GetFile {
    type Output = File;
    const METHOD: &'static str = "getFile";

    fn encode(&self) -> HttpData {
        let mut data = HttpData::new();
        data.add("file_id", &self.file_id);
        data
    }
}
