use uuid::Uuid;

use crate::http::Form;

const CRLF: &[u8] = b"\r\n";

/// multipart/form-data encoder for a single request.
#[derive(Debug, Clone)]
pub struct Multipart {
    boundary: String,
}

impl Default for Multipart {
    fn default() -> Self {
        Self::new()
    }
}

impl Multipart {
    /// Fresh random boundary.
    pub fn new() -> Self {
        Self::with_boundary(format!("----------------telebot{}", Uuid::new_v4().simple()))
    }

    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Text parts first, then file parts, each in insertion order.
    pub fn encode(&self, form: &Form) -> Vec<u8> {
        let file_bytes: usize = form.files.iter().map(|f| f.data.len()).sum();
        let parts = form.parameters.len() + form.files.len() + 1;
        let mut body = Vec::with_capacity(file_bytes + 256 * parts);

        for (key, value) in &form.parameters {
            self.open_part(&mut body);
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"", escape(key)).as_bytes(),
            );
            body.extend_from_slice(CRLF);
            body.extend_from_slice(CRLF);
            body.extend_from_slice(value.as_bytes());
            body.extend_from_slice(CRLF);
        }

        for file in &form.files {
            self.open_part(&mut body);
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"",
                    escape(&file.key),
                    escape(&file.file_name)
                )
                .as_bytes(),
            );
            body.extend_from_slice(CRLF);
            body.extend_from_slice(format!("Content-Type: {}", file.content_type).as_bytes());
            body.extend_from_slice(CRLF);
            body.extend_from_slice(CRLF);
            body.extend_from_slice(&file.data);
            body.extend_from_slice(CRLF);
        }

        body.extend_from_slice(b"--");
        body.extend_from_slice(self.boundary.as_bytes());
        body.extend_from_slice(b"--");
        body.extend_from_slice(CRLF);
        body
    }

    fn open_part(&self, body: &mut Vec<u8>) {
        body.extend_from_slice(b"--");
        body.extend_from_slice(self.boundary.as_bytes());
        body.extend_from_slice(CRLF);
    }
}

/// `%` goes first so a literal `%22` cannot read as an escaped quote.
fn escape(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FormFile;

    fn sample_form() -> Form {
        Form {
            parameters: vec![
                ("chat_id".to_string(), "42".to_string()),
                ("caption".to_string(), "héllo".to_string()),
            ],
            files: vec![FormFile {
                key: "photo".to_string(),
                file_name: "cat.png".to_string(),
                content_type: "image/png".to_string(),
                data: vec![0x89, b'P', b'N', b'G', 0x00, 0xff],
            }],
        }
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn test_content_type_declares_boundary() {
        let multipart = Multipart::with_boundary("XyZ");
        assert_eq!(multipart.content_type(), "multipart/form-data; boundary=XyZ");
    }

    #[test]
    fn test_random_boundaries_differ() {
        assert_ne!(Multipart::new().boundary(), Multipart::new().boundary());
    }

    #[test]
    fn test_exact_layout() {
        let body = Multipart::with_boundary("B").encode(&sample_form());

        let mut expected = Vec::new();
        expected.extend_from_slice(
            b"--B\r\nContent-Disposition: form-data; name=\"chat_id\"\r\n\r\n42\r\n",
        );
        expected.extend_from_slice(
            "--B\r\nContent-Disposition: form-data; name=\"caption\"\r\n\r\nhéllo\r\n".as_bytes(),
        );
        expected.extend_from_slice(
            b"--B\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"cat.png\"\r\n",
        );
        expected.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
        expected.extend_from_slice(&[0x89, b'P', b'N', b'G', 0x00, 0xff]);
        expected.extend_from_slice(b"\r\n--B--\r\n");

        assert_eq!(body, expected);
    }

    #[test]
    fn test_single_terminal_boundary_and_shared_token() {
        let multipart = Multipart::new();
        let body = multipart.encode(&sample_form());

        let opener = format!("--{}\r\n", multipart.boundary());
        let terminal = format!("--{}--", multipart.boundary());
        assert_eq!(count(&body, opener.as_bytes()), 3);
        assert_eq!(count(&body, terminal.as_bytes()), 1);
        assert!(body.ends_with(format!("{terminal}\r\n").as_bytes()));
        assert!(body.starts_with(opener.as_bytes()));
    }

    #[test]
    fn test_empty_form_is_just_the_terminal_boundary() {
        let body = Multipart::with_boundary("B").encode(&Form::default());
        assert_eq!(body, b"--B--\r\n");
    }

    #[test]
    fn test_quotes_in_names_are_escaped() {
        let form = Form {
            parameters: vec![],
            files: vec![FormFile {
                key: "document".to_string(),
                file_name: "say \"hi\".txt".to_string(),
                content_type: "text/plain".to_string(),
                data: b"hi".to_vec(),
            }],
        };
        let body = Multipart::with_boundary("B").encode(&form);
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("filename=\"say %22hi%22.txt\""));
    }

    #[test]
    fn test_percent_in_names_is_escaped() {
        assert_eq!(escape("100%22.txt"), "100%2522.txt");
        assert_eq!(escape("a\"b"), "a%22b");
        assert_eq!(escape("line\r\nbreak"), "line%0D%0Abreak");
        assert_ne!(escape("%22"), escape("\""));
    }
}
