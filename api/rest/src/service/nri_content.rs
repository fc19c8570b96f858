use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use eb_dao::nri_content::NriContentDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        nri_content::{
            DeleteNriContentResJson, DeleteOneNriContentReqPath, FindManyNriContentReqQuery,
            InsertOneNriContentReqJson, NriContentResJson, UpdateOneNriContentReqJson,
            UpdateOneNriContentReqPath,
        },
        PaginationRes, Response,
    },
    session::AdminSession,
};

pub fn nri_content_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/nri-content", web::get().to(find_many_public))
        .route("/admin/nri-content", web::get().to(find_many))
        .route("/admin/nri-content", web::post().to(insert_one))
        .route(
            "/admin/nri-content/{nri_content_id}",
            web::put().to(update_one),
        )
        .route(
            "/admin/nri-content/{nri_content_id}",
            web::delete().to(delete_one),
        );
}

async fn find_many_public(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyNriContentReqQuery>,
) -> HttpResponse {
    let nri_contents_data =
        match NriContentDao::db_select_many_public(ctx.dao().db(), query.section()).await {
            Ok(data) => data,
            Err(err) => {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
        };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &nri_contents_data.len(),
            &nri_contents_data.len(),
        )),
        &nri_contents_data
            .iter()
            .map(|data| {
                NriContentResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.section_name(),
                    data.title(),
                    data.content(),
                    data.icon_name(),
                    data.image_url(),
                    data.featured(),
                    data.display_order(),
                    data.active(),
                )
            })
            .collect::<Vec<_>>(),
    )
}

async fn find_many(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let nri_contents_data = match NriContentDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &nri_contents_data.len(),
            &nri_contents_data.len(),
        )),
        &nri_contents_data
            .iter()
            .map(|data| {
                NriContentResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.section_name(),
                    data.title(),
                    data.content(),
                    data.icon_name(),
                    data.image_url(),
                    data.featured(),
                    data.display_order(),
                    data.active(),
                )
            })
            .collect::<Vec<_>>(),
    )
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    data: web::Json<InsertOneNriContentReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let nri_content_data = NriContentDao::new(
        data.section_name(),
        data.title(),
        data.content(),
        data.icon_name(),
        data.image_url(),
        data.featured(),
        data.display_order(),
        data.active(),
    );

    if let Err(err) = nri_content_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &NriContentResJson::new(
            nri_content_data.id(),
            nri_content_data.created_at(),
            nri_content_data.updated_at(),
            nri_content_data.section_name(),
            nri_content_data.title(),
            nri_content_data.content(),
            nri_content_data.icon_name(),
            nri_content_data.image_url(),
            nri_content_data.featured(),
            nri_content_data.display_order(),
            nri_content_data.active(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOneNriContentReqPath>,
    data: web::Json<UpdateOneNriContentReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    if data.is_all_none() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "No request fields to be updated");
    }

    let mut nri_content_data =
        match NriContentDao::db_select(ctx.dao().db(), path.nri_content_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("NRI content", &err),
        };

    if let Some(section_name) = data.section_name() {
        nri_content_data.set_section_name(section_name);
    }

    if let Some(title) = data.title() {
        nri_content_data.set_title(title);
    }

    if let Some(content) = data.content() {
        nri_content_data.set_content(content);
    }

    if let Some(icon_name) = data.icon_name() {
        nri_content_data.set_icon_name(&Some(icon_name.to_owned()));
    }

    if let Some(image_url) = data.image_url() {
        nri_content_data.set_image_url(&Some(image_url.to_owned()));
    }

    if let Some(featured) = data.featured() {
        nri_content_data.set_featured(featured);
    }

    if let Some(display_order) = data.display_order() {
        nri_content_data.set_display_order(display_order);
    }

    if let Some(active) = data.active() {
        nri_content_data.set_active(active);
    }

    if let Err(err) = nri_content_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &NriContentResJson::new(
            nri_content_data.id(),
            nri_content_data.created_at(),
            nri_content_data.updated_at(),
            nri_content_data.section_name(),
            nri_content_data.title(),
            nri_content_data.content(),
            nri_content_data.icon_name(),
            nri_content_data.image_url(),
            nri_content_data.featured(),
            nri_content_data.display_order(),
            nri_content_data.active(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneNriContentReqPath>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let nri_content_data =
        match NriContentDao::db_select(ctx.dao().db(), path.nri_content_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("NRI content", &err),
        };

    if let Err(err) = NriContentDao::db_delete(ctx.dao().db(), path.nri_content_id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &DeleteNriContentResJson::new(nri_content_data.id()),
    )
}
