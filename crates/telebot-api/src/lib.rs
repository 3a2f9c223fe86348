//! Client for the Telegram Bot HTTP API.
//!
//! Build a request from [`requests`], hand it to [`TelegramBot`], and check
//! `ok` on the [`ApiResponse`] that comes back.

pub mod bot;
pub mod http;
pub mod log;
pub mod markup;
pub mod multipart;
pub mod requests;
pub mod response;
pub mod types;

pub use bot::TelegramBot;
pub use log::{CallLog, NoopLog, TracingLog};
pub use markup::{
    ChatAction, ForceReply, InputFile, ParseMode, ReplyKeyboardHide, ReplyKeyboardMarkup,
    ReplyMarkup,
};
pub use requests::MethodRequest;
pub use response::ApiResponse;
