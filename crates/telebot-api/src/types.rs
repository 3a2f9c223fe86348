use telebot_core::json::{Decode, JsonData};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl Decode for User {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            id: data.get("id")?,
            first_name: data.get("first_name")?,
            last_name: data.get("last_name"),
            username: data.get("username"),
        })
    }
}

/// Private chat or group. Groups carry a title, private chats a user's names.
#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: i64,
    pub kind: Option<String>,
    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Decode for Chat {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            id: data.get("id")?,
            kind: data.get("type"),
            title: data.get("title"),
            username: data.get("username"),
            first_name: data.get("first_name"),
            last_name: data.get("last_name"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoSize {
    pub file_id: String,
    pub width: i32,
    pub height: i32,
    pub file_size: Option<i64>,
}

impl Decode for PhotoSize {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            file_id: data.get("file_id")?,
            width: data.get("width")?,
            height: data.get("height")?,
            file_size: data.get("file_size"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Audio {
    pub file_id: String,
    pub duration: i32,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

impl Decode for Audio {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            file_id: data.get("file_id")?,
            duration: data.get("duration")?,
            performer: data.get("performer"),
            title: data.get("title"),
            mime_type: data.get("mime_type"),
            file_size: data.get("file_size"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub file_id: String,
    pub thumb: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

impl Decode for Document {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            file_id: data.get("file_id")?,
            thumb: data.get("thumb"),
            file_name: data.get("file_name"),
            mime_type: data.get("mime_type"),
            file_size: data.get("file_size"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    pub file_id: String,
    pub width: i32,
    pub height: i32,
    pub thumb: Option<PhotoSize>,
    pub file_size: Option<i64>,
}

impl Decode for Sticker {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            file_id: data.get("file_id")?,
            width: data.get("width")?,
            height: data.get("height")?,
            thumb: data.get("thumb"),
            file_size: data.get("file_size"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub file_id: String,
    pub width: i32,
    pub height: i32,
    pub duration: i32,
    pub thumb: Option<PhotoSize>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

impl Decode for Video {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            file_id: data.get("file_id")?,
            width: data.get("width")?,
            height: data.get("height")?,
            duration: data.get("duration")?,
            thumb: data.get("thumb"),
            mime_type: data.get("mime_type"),
            file_size: data.get("file_size"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub file_id: String,
    pub duration: i32,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

impl Decode for Voice {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            file_id: data.get("file_id")?,
            duration: data.get("duration")?,
            mime_type: data.get("mime_type"),
            file_size: data.get("file_size"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub user_id: Option<i64>,
}

impl Decode for Contact {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            phone_number: data.get("phone_number")?,
            first_name: data.get("first_name")?,
            last_name: data.get("last_name"),
            user_id: data.get("user_id"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

impl Decode for Location {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            longitude: data.get("longitude")?,
            latitude: data.get("latitude")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfilePhotos {
    pub total_count: i32,
    /// One entry per photo, each in up to four sizes.
    pub photos: Vec<Vec<PhotoSize>>,
}

impl Decode for UserProfilePhotos {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            total_count: data.get("total_count")?,
            photos: data.get("photos")?,
        })
    }
}

/// A file ready to be downloaded from `file/bot<token>/<file_path>`.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub file_id: String,
    pub file_size: Option<i64>,
    pub file_path: Option<String>,
}

impl Decode for File {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            file_id: data.get("file_id")?,
            file_size: data.get("file_size"),
            file_path: data.get("file_path"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub date: Option<i64>,
    pub chat: Chat,
    pub forward_from: Option<User>,
    pub forward_date: Option<i64>,
    pub reply_to_message: Option<Box<Message>>,
    pub text: Option<String>,
    pub audio: Option<Audio>,
    pub document: Option<Document>,
    pub photo: Option<Vec<PhotoSize>>,
    pub sticker: Option<Sticker>,
    pub video: Option<Video>,
    pub voice: Option<Voice>,
    pub caption: Option<String>,
    pub contact: Option<Contact>,
    pub location: Option<Location>,
    pub new_chat_participant: Option<User>,
    pub left_chat_participant: Option<User>,
    pub new_chat_title: Option<String>,
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    pub delete_chat_photo: bool,
    pub group_chat_created: bool,
}

impl Decode for Message {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            message_id: data.get("message_id")?,
            from: data.get("from"),
            date: data.get("date"),
            chat: data.get("chat")?,
            forward_from: data.get("forward_from"),
            forward_date: data.get("forward_date"),
            reply_to_message: data.get::<Message>("reply_to_message").map(Box::new),
            text: data.get("text"),
            audio: data.get("audio"),
            document: data.get("document"),
            photo: data.get("photo"),
            sticker: data.get("sticker"),
            video: data.get("video"),
            voice: data.get("voice"),
            caption: data.get("caption"),
            contact: data.get("contact"),
            location: data.get("location"),
            new_chat_participant: data.get("new_chat_participant"),
            left_chat_participant: data.get("left_chat_participant"),
            new_chat_title: data.get("new_chat_title"),
            new_chat_photo: data.get("new_chat_photo"),
            delete_chat_photo: data.get_or_default("delete_chat_photo"),
            group_chat_created: data.get_or_default("group_chat_created"),
        })
    }
}

/// An incoming update, from `getUpdates` or a webhook POST.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

impl Decode for Update {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(Self {
            update_id: data.get("update_id")?,
            message: data.get("message"),
        })
    }
}
