use std::path::Path;

use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use serde::{Deserialize, Serialize};

#[derive(MultipartForm)]
pub struct InsertOneUploadReqForm {
    file: TempFile,
    file_name: Option<Text<String>>,
}

impl InsertOneUploadReqForm {
    pub fn file_path(&self) -> &Path {
        self.file.file.path()
    }

    pub fn file_name(&self) -> Option<String> {
        if let Some(name) = &self.file_name {
            Some(name.0.to_owned())
        } else if let Some(name) = &self.file.file_name {
            Some(name.to_owned())
        } else {
            None
        }
    }

    pub fn size(&self) -> &usize {
        &self.file.size
    }
}

#[derive(Deserialize)]
pub struct FindOneUploadReqPath {
    file_name: String,
}

impl FindOneUploadReqPath {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

#[derive(Serialize)]
pub struct UploadResJson {
    file_url: String,
    file_name: String,
}

impl UploadResJson {
    pub fn new(file_url: &str, file_name: &str) -> Self {
        Self {
            file_url: file_url.to_owned(),
            file_name: file_name.to_owned(),
        }
    }
}
