use std::sync::{Arc, Mutex};

use telebot_api::requests::{GetFile, SendChatAction, SendDocument, SendMessage};
use telebot_api::response::GetFileResponse;
use telebot_api::types::File;
use telebot_api::{ChatAction, InputFile, TelegramBot};
use telebot_core::error::TelebotError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const TOKEN: &str = "123:abc";

/// What the mock server saw.
struct Captured {
    request_line: String,
    headers: String,
    body: Vec<u8>,
}

impl Captured {
    fn header(&self, name: &str) -> Option<String> {
        let prefix = format!("{}:", name.to_ascii_lowercase());
        self.headers
            .lines()
            .find(|line| line.to_ascii_lowercase().starts_with(&prefix))
            .map(|line| line[prefix.len()..].trim().to_string())
    }

    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Serve exactly one HTTP exchange with a canned reply.
async fn mock_server(
    status: &'static str,
    reply: impl Into<Vec<u8>>,
) -> (String, tokio::task::JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let reply = reply.into();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find(&buf, b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
        let (request_line, headers) = head.split_once("\r\n").unwrap();
        let content_length = headers
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().unwrap())
            })
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending the body");
            buf.extend_from_slice(&chunk[..n]);
        }

        let response_head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            reply.len()
        );
        stream.write_all(response_head.as_bytes()).await.unwrap();
        stream.write_all(&reply).await.unwrap();
        stream.shutdown().await.unwrap();

        Captured {
            request_line: request_line.to_string(),
            headers: headers.to_string(),
            body: buf[header_end..header_end + content_length].to_vec(),
        }
    });

    (url, handle)
}

fn bot(url: &str) -> TelegramBot {
    TelegramBot::new(TOKEN).with_api_url(url)
}

#[tokio::test]
async fn test_send_message_round_trip() {
    let (url, server) = mock_server(
        "200 OK",
        r#"{"ok":true,"result":{"message_id":7,"chat":{"id":42}}}"#,
    )
    .await;

    let response = bot(&url)
        .send_message(&SendMessage::new(42, "hi"))
        .await
        .unwrap();

    assert!(response.ok);
    let message = response.result.unwrap();
    assert_eq!(message.message_id, 7);
    assert_eq!(message.chat.id, 42);

    let captured = server.await.unwrap();
    assert_eq!(captured.request_line, "POST /bot123:abc/sendMessage HTTP/1.1");

    let content_type = captured.header("content-type").unwrap();
    let boundary = content_type
        .strip_prefix("multipart/form-data; boundary=")
        .unwrap();

    let body = captured.body_text();
    assert!(body.contains("name=\"chat_id\"\r\n\r\n42\r\n"));
    assert!(body.contains("name=\"text\"\r\n\r\nhi\r\n"));
    assert!(!body.contains("reply_to_message_id"));
    assert_eq!(body.matches(&format!("--{boundary}\r\n")).count(), 2);
    assert!(body.ends_with(&format!("--{boundary}--\r\n")));
}

#[tokio::test]
async fn test_error_status_body_is_decoded() {
    let (url, server) = mock_server(
        "400 Bad Request",
        r#"{"ok":false,"error_code":400,"description":"Bad Request"}"#,
    )
    .await;

    let response = bot(&url)
        .send_message(&SendMessage::new(42, ""))
        .await
        .unwrap();

    assert!(!response.ok);
    assert_eq!(response.error_code, Some(400));
    assert_eq!(response.description.as_deref(), Some("Bad Request"));
    assert!(response.result.is_none());
    server.await.unwrap();
}

#[tokio::test]
async fn test_non_json_reply_is_an_error() {
    let (url, server) = mock_server("502 Bad Gateway", "<html>bad gateway</html>").await;

    let err = bot(&url).get_me(&Default::default()).await.unwrap_err();
    assert!(matches!(err, TelebotError::Json(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_connection_refused_propagates() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = bot(&url)
        .send_chat_action(&SendChatAction::new(1, ChatAction::Typing))
        .await
        .unwrap_err();
    assert!(matches!(err, TelebotError::Transport(_)));
}

#[tokio::test]
async fn test_transport_errors_hide_the_token() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let bot = TelegramBot::new("1:SECRET").with_api_url(&url);

    let err = bot.get_me(&Default::default()).await.unwrap_err();
    assert!(matches!(err, TelebotError::Transport(_)));
    assert!(!err.to_string().contains("SECRET"));
    assert!(!format!("{err:?}").contains("SECRET"));

    let err = bot.try_download_file("documents/file_1.txt").await.unwrap_err();
    assert!(matches!(err, TelebotError::Transport(_)));
    assert!(!err.to_string().contains("SECRET"));
}

#[tokio::test]
async fn test_document_upload_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "line one\nline two").unwrap();

    let (url, server) = mock_server(
        "200 OK",
        r#"{"ok":true,"result":{"message_id":8,"chat":{"id":5},"document":{"file_id":"BQAD","file_name":"notes.txt"}}}"#,
    )
    .await;

    let response = bot(&url)
        .send_document(&SendDocument::new(5, InputFile::path(&path)))
        .await
        .unwrap();
    let document = response.result.unwrap().document.unwrap();
    assert_eq!(document.file_name.as_deref(), Some("notes.txt"));

    let body = server.await.unwrap().body_text();
    assert!(body.contains(
        "name=\"document\"; filename=\"notes.txt\"\r\nContent-Type: text/plain\r\n\r\nline one\nline two\r\n"
    ));
}

#[tokio::test]
async fn test_calls_are_logged_by_name() {
    let (url, server) = mock_server("200 OK", r#"{"ok":true,"result":true}"#).await;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let bot = TelegramBot::with_log(TOKEN, move |operation: &str| {
        sink.lock().unwrap().push(operation.to_string())
    })
    .with_api_url(&url);

    let response = bot
        .send_chat_action(&SendChatAction::new(1, ChatAction::Typing))
        .await
        .unwrap();
    assert_eq!(response.result, Some(true));
    assert_eq!(*seen.lock().unwrap(), vec!["sendChatAction"]);

    let body = server.await.unwrap().body_text();
    assert!(body.contains("name=\"action\"\r\n\r\ntyping\r\n"));
}

#[tokio::test]
async fn test_get_file_then_download() {
    let (url, server) = mock_server(
        "200 OK",
        r#"{"ok":true,"result":{"file_id":"BQAD","file_size":5,"file_path":"documents/file_1.txt"}}"#,
    )
    .await;
    let response = bot(&url).get_file(&GetFile::new("BQAD")).await.unwrap();
    assert!(server.await.unwrap().body_text().contains("BQAD"));

    let (url, server) = mock_server("200 OK", "hello").await;
    let bytes = bot(&url).download_file(&response).await;
    assert_eq!(bytes.as_deref(), Some(&b"hello"[..]));

    let captured = server.await.unwrap();
    assert_eq!(
        captured.request_line,
        "GET /file/bot123:abc/documents/file_1.txt HTTP/1.1"
    );
}

#[tokio::test]
async fn test_download_failure_is_swallowed() {
    let response = GetFileResponse {
        ok: true,
        error_code: None,
        description: None,
        result: Some(File {
            file_id: "BQAD".to_string(),
            file_size: None,
            file_path: Some("documents/gone.txt".to_string()),
        }),
    };

    let (url, server) = mock_server("404 Not Found", r#"{"ok":false}"#).await;
    assert!(bot(&url).download_file(&response).await.is_none());
    server.await.unwrap();

    let (url, server) = mock_server("404 Not Found", "missing").await;
    let err = bot(&url)
        .try_download_file("documents/gone.txt")
        .await
        .unwrap_err();
    match err {
        TelebotError::Http { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "missing");
        }
        other => panic!("unexpected error: {other}"),
    }
    server.await.unwrap();
}
