use serde::Serialize;

#[derive(Serialize)]
pub struct RootResJson {
    message: String,
    status: String,
}

impl RootResJson {
    pub fn new(message: &str, status: &str) -> Self {
        Self {
            message: message.to_owned(),
            status: status.to_owned(),
        }
    }
}
