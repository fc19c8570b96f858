use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use eb_dao::home_banner::HomeBannerDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        home_banner::{
            DeleteHomeBannerResJson, DeleteOneHomeBannerReqPath, HomeBannerResJson,
            InsertOneHomeBannerReqJson, UpdateOneHomeBannerReqJson, UpdateOneHomeBannerReqPath,
        },
        PaginationRes, Response,
    },
    session::AdminSession,
};

pub fn home_banner_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/home-banners", web::get().to(find_many_public))
        .route("/admin/home-banners", web::get().to(find_many))
        .route("/admin/home-banners", web::post().to(insert_one))
        .route(
            "/admin/home-banners/{home_banner_id}",
            web::put().to(update_one),
        )
        .route(
            "/admin/home-banners/{home_banner_id}",
            web::delete().to(delete_one),
        );
}

async fn find_many_public(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    let home_banners_data = match HomeBannerDao::db_select_many_public(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &home_banners_data.len(),
            &home_banners_data.len(),
        )),
        &home_banners_data
            .iter()
            .map(|data| {
                HomeBannerResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.title(),
                    data.subtitle(),
                    data.image_url(),
                    data.cta_text(),
                    data.cta_link(),
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

    let home_banners_data = match HomeBannerDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &home_banners_data.len(),
            &home_banners_data.len(),
        )),
        &home_banners_data
            .iter()
            .map(|data| {
                HomeBannerResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.title(),
                    data.subtitle(),
                    data.image_url(),
                    data.cta_text(),
                    data.cta_link(),
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
    data: web::Json<InsertOneHomeBannerReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let home_banner_data = HomeBannerDao::new(
        data.title(),
        data.subtitle(),
        data.image_url(),
        data.cta_text(),
        data.cta_link(),
        data.featured(),
        data.display_order(),
        data.active(),
    );

    if let Err(err) = home_banner_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &HomeBannerResJson::new(
            home_banner_data.id(),
            home_banner_data.created_at(),
            home_banner_data.updated_at(),
            home_banner_data.title(),
            home_banner_data.subtitle(),
            home_banner_data.image_url(),
            home_banner_data.cta_text(),
            home_banner_data.cta_link(),
            home_banner_data.featured(),
            home_banner_data.display_order(),
            home_banner_data.active(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOneHomeBannerReqPath>,
    data: web::Json<UpdateOneHomeBannerReqJson>,
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

    let mut home_banner_data =
        match HomeBannerDao::db_select(ctx.dao().db(), path.home_banner_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("Home banner", &err),
        };

    if let Some(title) = data.title() {
        home_banner_data.set_title(title);
    }

    if let Some(subtitle) = data.subtitle() {
        home_banner_data.set_subtitle(&Some(subtitle.to_owned()));
    }

    if let Some(image_url) = data.image_url() {
        home_banner_data.set_image_url(image_url);
    }

    if let Some(cta_text) = data.cta_text() {
        home_banner_data.set_cta_text(&Some(cta_text.to_owned()));
    }

    if let Some(cta_link) = data.cta_link() {
        home_banner_data.set_cta_link(&Some(cta_link.to_owned()));
    }

    if let Some(featured) = data.featured() {
        home_banner_data.set_featured(featured);
    }

    if let Some(display_order) = data.display_order() {
        home_banner_data.set_display_order(display_order);
    }

    if let Some(active) = data.active() {
        home_banner_data.set_active(active);
    }

    if let Err(err) = home_banner_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &HomeBannerResJson::new(
            home_banner_data.id(),
            home_banner_data.created_at(),
            home_banner_data.updated_at(),
            home_banner_data.title(),
            home_banner_data.subtitle(),
            home_banner_data.image_url(),
            home_banner_data.cta_text(),
            home_banner_data.cta_link(),
            home_banner_data.featured(),
            home_banner_data.display_order(),
            home_banner_data.active(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneHomeBannerReqPath>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let home_banner_data =
        match HomeBannerDao::db_select(ctx.dao().db(), path.home_banner_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("Home banner", &err),
        };

    if let Err(err) = HomeBannerDao::db_delete(ctx.dao().db(), path.home_banner_id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &DeleteHomeBannerResJson::new(home_banner_data.id()),
    )
}
