use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use telebot_core::config::{TelegramConfig, DEFAULT_API_URL};
use telebot_core::error::{Result, TelebotError};
use telebot_core::json::{self, Decode, JsonData};

use crate::log::{CallLog, NoopLog, TracingLog};
use crate::multipart::Multipart;
use crate::requests::*;
use crate::response::*;
use crate::types::Update;

pub struct TelegramBot {
    client: Client,
    token: String,
    api_url: String,
    log: Arc<dyn CallLog>,
}

impl TelegramBot {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_log(token, NoopLog)
    }

    pub fn with_log(token: impl Into<String>, log: impl CallLog + 'static) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            log: Arc::new(log),
        }
    }

    /// Build from config; `enable_log` routes operation names to `tracing`.
    pub fn from_config(config: &TelegramConfig) -> Result<Self> {
        if config.token.is_empty() {
            return Err(TelebotError::Config("telegram token is empty".to_string()));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let log: Arc<dyn CallLog> = if config.enable_log {
            Arc::new(TracingLog)
        } else {
            Arc::new(NoopLog)
        };

        Ok(Self {
            client,
            token: config.token.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            log,
        })
    }

    /// Point at a different Bot API server (self-hosted, or a test double).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    fn file_url(&self, file_path: &str) -> String {
        format!(
            "{}/file/bot{}/{}",
            self.api_url,
            self.token,
            file_path.trim_start_matches('/')
        )
    }

    /// Run any method. Error statuses still carry an `{ok:false,..}` body,
    /// so the body is decoded whatever the status.
    pub async fn call<R: MethodRequest>(&self, request: &R) -> Result<ApiResponse<R::Output>> {
        self.log.call(R::METHOD);

        let form = request.encode().into_form().await?;
        let multipart = Multipart::new();
        let body = multipart.encode(&form);

        let response = self
            .client
            .post(self.method_url(R::METHOD))
            .header(CONTENT_TYPE, multipart.content_type())
            .body(body)
            .send()
            .await?;

        let bytes = response.bytes().await?;
        let value = json::parse_slice(&bytes)?;
        Ok(ApiResponse::decode(&value))
    }

    pub async fn get_me(&self, request: &GetMe) -> Result<GetMeResponse> {
        self.call(request).await
    }

    pub async fn send_message(&self, request: &SendMessage) -> Result<SendMessageResponse> {
        self.call(request).await
    }

    pub async fn forward_message(
        &self,
        request: &ForwardMessage,
    ) -> Result<ForwardMessageResponse> {
        self.call(request).await
    }

    pub async fn send_photo(&self, request: &SendPhoto) -> Result<SendPhotoResponse> {
        self.call(request).await
    }

    pub async fn send_audio(&self, request: &SendAudio) -> Result<SendAudioResponse> {
        self.call(request).await
    }

    pub async fn send_document(&self, request: &SendDocument) -> Result<SendDocumentResponse> {
        self.call(request).await
    }

    pub async fn send_sticker(&self, request: &SendSticker) -> Result<SendStickerResponse> {
        self.call(request).await
    }

    pub async fn send_video(&self, request: &SendVideo) -> Result<SendVideoResponse> {
        self.call(request).await
    }

    pub async fn send_voice(&self, request: &SendVoice) -> Result<SendVoiceResponse> {
        self.call(request).await
    }

    pub async fn send_location(&self, request: &SendLocation) -> Result<SendLocationResponse> {
        self.call(request).await
    }

    pub async fn send_chat_action(
        &self,
        request: &SendChatAction,
    ) -> Result<SendChatActionResponse> {
        self.call(request).await
    }

    pub async fn get_user_profile_photos(
        &self,
        request: &GetUserProfilePhotos,
    ) -> Result<GetUserProfilePhotosResponse> {
        self.call(request).await
    }

    pub async fn get_updates(&self, request: &GetUpdates) -> Result<GetUpdatesResponse> {
        self.call(request).await
    }

    pub async fn set_webhook(&self, request: &SetWebhook) -> Result<SetWebhookResponse> {
        self.call(request).await
    }

    pub async fn get_file(&self, request: &GetFile) -> Result<GetFileResponse> {
        self.call(request).await
    }

    /// Decode the body of an update POSTed to the webhook.
    /// `Ok(None)` means valid JSON that is not an update.
    pub fn parse_webhook_update(&self, body: &str) -> Result<Option<Update>> {
        self.log.call("parseWebhookUpdate");
        let value = json::parse(body)?;
        Ok(Update::decode(JsonData::new(&value)))
    }

    /// Download the file a `getFile` reply points at.
    ///
    /// Every failure, including a reply without `file_path`, yields `None`;
    /// use `try_download_file` to see why.
    pub async fn download_file(&self, response: &GetFileResponse) -> Option<Vec<u8>> {
        self.log.call("downloadFile");

        let file_path = response
            .result
            .as_ref()
            .and_then(|file| file.file_path.as_deref())
            .filter(|path| !path.is_empty())?;

        match self.fetch_file(file_path).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::debug!(file_path, error = %e, "file download failed");
                None
            }
        }
    }

    pub async fn try_download_file(&self, file_path: &str) -> Result<Vec<u8>> {
        self.log.call("downloadFile");
        self.fetch_file(file_path).await
    }

    async fn fetch_file(&self, file_path: &str) -> Result<Vec<u8>> {
        let response = self.client.get(self.file_url(file_path)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TelebotError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
