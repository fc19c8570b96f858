use std::path::Path;

use actix_files::NamedFile;
use actix_multipart::form::MultipartForm;
use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use uuid::Uuid;

use crate::{
    context::ApiRestCtx,
    model::{
        upload::{FindOneUploadReqPath, InsertOneUploadReqForm, UploadResJson},
        Response,
    },
    session::AdminSession,
};

pub fn upload_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/upload", web::post().to(upload_one));
}

pub fn uploads_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/uploads/{file_name}", web::get().to(serve_one));
}

async fn upload_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    form: MultipartForm<InsertOneUploadReqForm>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let size = match u64::try_from(*form.size()) {
        Ok(size) => size,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };
    if size > *ctx.upload().max_size() {
        return Response::error_raw(
            &StatusCode::PAYLOAD_TOO_LARGE,
            &format!("File size must not exceed {} bytes", ctx.upload().max_size()),
        );
    }

    // The stored name is always a fresh uuid so client names never collide
    // and never reach the filesystem. Only the extension survives.
    let file_name = match form.file_name() {
        Some(name) => match name.rsplit_once('.') {
            Some((_, extension)) => format!("{}.{}", Uuid::now_v7(), extension.to_lowercase()),
            None => Uuid::now_v7().to_string(),
        },
        None => Uuid::now_v7().to_string(),
    };

    if let Err(err) = tokio::fs::copy(
        form.file_path(),
        Path::new(ctx.upload().path()).join(&file_name),
    )
    .await
    {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &UploadResJson::new(&format!("/uploads/{file_name}"), &file_name),
    )
}

async fn serve_one(
    ctx: web::Data<ApiRestCtx>,
    req: HttpRequest,
    path: web::Path<FindOneUploadReqPath>,
) -> HttpResponse {
    let file_name = path.file_name();

    if file_name.contains('/') || file_name.contains('\\') || file_name.contains("..") {
        return Response::error_raw(&StatusCode::NOT_FOUND, "File not found");
    }

    let file = match NamedFile::open_async(Path::new(ctx.upload().path()).join(file_name)).await {
        Ok(file) => file,
        Err(_) => return Response::error_raw(&StatusCode::NOT_FOUND, "File not found"),
    };

    file.into_response(&req)
}
