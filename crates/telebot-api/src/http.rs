use std::fmt::Display;
use std::path::PathBuf;

use telebot_core::error::Result;

/// Fields and attachments produced by a request encoder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpData {
    pub parameters: Vec<(String, String)>,
    pub files: Vec<HttpFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpFile {
    pub key: String,
    pub file_name: String,
    pub content_type: String,
    pub source: FileSource,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileSource {
    Bytes(Vec<u8>),
    /// Read when the envelope is turned into a `Form`.
    Path(PathBuf),
}

/// An envelope whose attachments are all in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    pub parameters: Vec<(String, String)>,
    pub files: Vec<FormFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormFile {
    pub key: String,
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl HttpData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.parameters.push((key.to_string(), value.to_string()));
        self
    }

    /// Absent values are left out of the body entirely.
    pub fn add_opt<V: Display>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.add(key, value);
        }
        self
    }

    pub fn add_file(&mut self, file: HttpFile) -> &mut Self {
        self.files.push(file);
        self
    }

    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn file(&self, key: &str) -> Option<&HttpFile> {
        self.files.iter().find(|f| f.key == key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.parameter(key).is_some() || self.file(key).is_some()
    }

    /// Read every path-backed attachment into memory.
    pub async fn into_form(self) -> Result<Form> {
        let mut files = Vec::with_capacity(self.files.len());
        for file in self.files {
            let data = match file.source {
                FileSource::Bytes(data) => data,
                FileSource::Path(path) => tokio::fs::read(&path).await?,
            };
            files.push(FormFile {
                key: file.key,
                file_name: file.file_name,
                content_type: file.content_type,
                data,
            });
        }

        Ok(Form {
            parameters: self.parameters,
            files,
        })
    }
}
