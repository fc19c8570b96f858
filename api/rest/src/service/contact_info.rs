use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use eb_dao::contact_info::ContactInfoDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        contact_info::{ContactInfoResJson, UpdateContactInfoReqJson},
        Response,
    },
    session::AdminSession,
};

pub fn contact_info_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact-info", web::get().to(find_one_public))
        .route("/admin/contact-info", web::get().to(find_one))
        .route("/admin/contact-info", web::put().to(upsert_one));
}

async fn find_one_public(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    let contact_info_data = match ContactInfoDao::db_select_one(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Contact info", &err),
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &ContactInfoResJson::new(
            contact_info_data.id(),
            contact_info_data.created_at(),
            contact_info_data.updated_at(),
            contact_info_data.company_name(),
            contact_info_data.phone(),
            contact_info_data.email(),
            contact_info_data.whatsapp(),
            contact_info_data.address(),
            contact_info_data.map_embed_url(),
            contact_info_data.business_hours(),
        ),
    )
}

async fn find_one(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let contact_info_data = match ContactInfoDao::db_select_one(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Contact info", &err),
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &ContactInfoResJson::new(
            contact_info_data.id(),
            contact_info_data.created_at(),
            contact_info_data.updated_at(),
            contact_info_data.company_name(),
            contact_info_data.phone(),
            contact_info_data.email(),
            contact_info_data.whatsapp(),
            contact_info_data.address(),
            contact_info_data.map_embed_url(),
            contact_info_data.business_hours(),
        ),
    )
}

async fn upsert_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    data: web::Json<UpdateContactInfoReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let contact_info_data = match ContactInfoDao::db_select_one(ctx.dao().db()).await {
        Ok(mut contact_info_data) => {
            contact_info_data.set_company_name(data.company_name());
            contact_info_data.set_phone(data.phone());
            contact_info_data.set_email(data.email());
            contact_info_data.set_whatsapp(data.whatsapp());
            contact_info_data.set_address(data.address());
            contact_info_data.set_map_embed_url(data.map_embed_url());
            contact_info_data.set_business_hours(data.business_hours());

            if let Err(err) = contact_info_data.db_update(ctx.dao().db()).await {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
            }

            contact_info_data
        }
        Err(err) => {
            if !matches!(
                err.downcast_ref::<sqlx::Error>(),
                Some(sqlx::Error::RowNotFound)
            ) {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
            }

            let contact_info_data = ContactInfoDao::new(
                data.company_name(),
                data.phone(),
                data.email(),
                data.whatsapp(),
                data.address(),
                data.map_embed_url(),
                data.business_hours(),
            );

            if let Err(err) = contact_info_data.db_insert(ctx.dao().db()).await {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
            }

            contact_info_data
        }
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &ContactInfoResJson::new(
            contact_info_data.id(),
            contact_info_data.created_at(),
            contact_info_data.updated_at(),
            contact_info_data.company_name(),
            contact_info_data.phone(),
            contact_info_data.email(),
            contact_info_data.whatsapp(),
            contact_info_data.address(),
            contact_info_data.map_embed_url(),
            contact_info_data.business_hours(),
        ),
    )
}
