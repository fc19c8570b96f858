use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::Utc;
use eb_dao::admin::AdminDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        auth::{
            AdminResJson, ChangePasswordReqJson, ChangePasswordResJson, LoginReqJson, LoginResJson,
        },
        Response,
    },
    session::AdminSession,
};

pub fn auth_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/auth/login", web::post().to(login))
        .route("/admin/auth/me", web::get().to(me))
        .route("/admin/auth/change-password", web::put().to(change_password));
}

async fn login(ctx: web::Data<ApiRestCtx>, data: web::Json<LoginReqJson>) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    // A missing account and a wrong password must be indistinguishable.
    let admin_data = match AdminDao::db_select_by_username(ctx.dao().db(), data.username()).await {
        Ok(data) => data,
        Err(_) => return Response::error_raw(&StatusCode::UNAUTHORIZED, "Invalid credentials"),
    };

    if ctx
        .hash()
        .argon2()
        .verify_password(data.password(), admin_data.password_hash())
        .is_err()
    {
        return Response::error_raw(&StatusCode::UNAUTHORIZED, "Invalid credentials");
    }

    if !*admin_data.active() {
        return Response::error_raw(&StatusCode::UNAUTHORIZED, "Account disabled");
    }

    let access_token = match ctx.token().jwt().encode(
        admin_data.id(),
        admin_data.username(),
        admin_data.role(),
    ) {
        Ok(token) => token,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &LoginResJson::new(
            &access_token,
            "bearer",
            AdminResJson::new(admin_data.username(), admin_data.email(), admin_data.role()),
        ),
    )
}

async fn me(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    let admin_session = match AdminSession::from_bearer(&ctx, token).await {
        Ok(session) => session,
        Err(err) => return Response::error(&err),
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &AdminResJson::new(
            admin_session.username(),
            admin_session.email(),
            admin_session.role(),
        ),
    )
}

async fn change_password(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    data: web::Json<ChangePasswordReqJson>,
) -> HttpResponse {
    let token = auth.token();

    let admin_session = match AdminSession::from_bearer(&ctx, token).await {
        Ok(session) => session,
        Err(err) => return Response::error(&err),
    };

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let mut admin_data = match AdminDao::db_select(ctx.dao().db(), admin_session.admin_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Admin", &err),
    };

    if ctx
        .hash()
        .argon2()
        .verify_password(data.current_password(), admin_data.password_hash())
        .is_err()
    {
        return Response::error_raw(&StatusCode::UNAUTHORIZED, "Invalid credentials");
    }

    let password_hash = match ctx
        .hash()
        .argon2()
        .hash_password(data.new_password().as_bytes())
    {
        Ok(hash) => hash,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    admin_data.set_password_hash(&password_hash.to_string());
    admin_data.set_password_changed_at(&Utc::now());

    if let Err(err) = admin_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &ChangePasswordResJson::new("Password changed successfully"),
    )
}
