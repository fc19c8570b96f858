use serde::Deserialize;

#[derive(Deserialize)]
pub struct UploadConfig {
    path: String,
    max_size: u64,
}

impl UploadConfig {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Hard cap in bytes for a single uploaded file.
    pub fn max_size(&self) -> &u64 {
        &self.max_size
    }
}
