use actix_web::{http::StatusCode, HttpResponse, HttpResponseBuilder};
use eb_error::Error;
use serde::Serialize;

pub mod amenity;
pub mod auth;
pub mod blog;
pub mod contact_info;
pub mod contact_submission;
pub mod happy_client;
pub mod home_banner;
pub mod news_event;
pub mod nri_content;
pub mod our_project;
pub mod plot;
pub mod property;
pub mod root;
pub mod testimonial;
pub mod upload;

#[derive(Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorRes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<PaginationRes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

impl Response {
    pub fn data<T: Serialize>(
        status_code: &StatusCode,
        pagination: &Option<PaginationRes>,
        data: T,
    ) -> HttpResponse {
        match serde_json::to_value(data) {
            Ok(data) => HttpResponseBuilder::new(*status_code).json(Self {
                error: None,
                pagination: *pagination,
                data: Some(data),
            }),
            Err(err) => {
                eb_log::error(None, &err);
                Self::error(&Error::InternalServerError(err.to_string()))
            }
        }
    }

    pub fn error(err: &Error) -> HttpResponse {
        let (status_code, message) = match err {
            Error::BadRequest(msg) => (&StatusCode::BAD_REQUEST, msg),
            Error::Unauthorized(msg) => (&StatusCode::UNAUTHORIZED, msg),
            Error::NotFound(msg) => (&StatusCode::NOT_FOUND, msg),
            Error::PayloadTooLarge(msg) => (&StatusCode::PAYLOAD_TOO_LARGE, msg),
            Error::InternalServerError(msg) => (&StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        Self::error_raw(status_code, message)
    }

    /// Maps a storage failure to the HTTP boundary: a missing row becomes
    /// NotFound for `subject`, anything else an internal error.
    pub fn error_dao(subject: &str, err: &anyhow::Error) -> HttpResponse {
        match err.downcast_ref::<sqlx::Error>() {
            Some(sqlx::Error::RowNotFound) => {
                Self::error(&Error::NotFound(format!("{subject} not found")))
            }
            _ => Self::error(&Error::InternalServerError(err.to_string())),
        }
    }

    pub fn error_raw(status_code: &StatusCode, message: &str) -> HttpResponse {
        eb_log::error(None, message);

        HttpResponseBuilder::new(*status_code).json(Self {
            error: Some(ErrorRes {
                status: match status_code.canonical_reason() {
                    Some(status_code) => status_code.to_owned(),
                    None => "Unknown".to_owned(),
                },
                message: message.to_owned(),
            }),
            pagination: None,
            data: None,
        })
    }
}

#[derive(Serialize)]
pub struct ErrorRes {
    status: String,
    message: String,
}

#[derive(Serialize, Clone, Copy)]
pub struct PaginationRes {
    count: usize,
    total: usize,
}

impl PaginationRes {
    pub fn new(count: &usize, total: &usize) -> Self {
        Self {
            count: *count,
            total: *total,
        }
    }
}
