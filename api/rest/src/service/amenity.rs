use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use eb_dao::amenity::AmenityDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        amenity::{
            AmenityResJson, DeleteAmenityResJson, DeleteOneAmenityReqPath,
            InsertOneAmenityReqJson, UpdateOneAmenityReqJson, UpdateOneAmenityReqPath,
        },
        PaginationRes, Response,
    },
    session::AdminSession,
};

pub fn amenity_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/amenities", web::get().to(find_many_public))
        .route("/admin/amenities", web::get().to(find_many))
        .route("/admin/amenities", web::post().to(insert_one))
        .route("/admin/amenities/{amenity_id}", web::put().to(update_one))
        .route(
            "/admin/amenities/{amenity_id}",
            web::delete().to(delete_one),
        );
}

async fn find_many_public(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    let amenities_data = match AmenityDao::db_select_many_public(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &amenities_data.len(),
            &amenities_data.len(),
        )),
        &amenities_data
            .iter()
            .map(|data| {
                AmenityResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.title(),
                    data.description(),
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

    let amenities_data = match AmenityDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &amenities_data.len(),
            &amenities_data.len(),
        )),
        &amenities_data
            .iter()
            .map(|data| {
                AmenityResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.title(),
                    data.description(),
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
    data: web::Json<InsertOneAmenityReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let amenity_data = AmenityDao::new(
        data.title(),
        data.description(),
        data.icon_name(),
        data.image_url(),
        data.featured(),
        data.display_order(),
        data.active(),
    );

    if let Err(err) = amenity_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &AmenityResJson::new(
            amenity_data.id(),
            amenity_data.created_at(),
            amenity_data.updated_at(),
            amenity_data.title(),
            amenity_data.description(),
            amenity_data.icon_name(),
            amenity_data.image_url(),
            amenity_data.featured(),
            amenity_data.display_order(),
            amenity_data.active(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOneAmenityReqPath>,
    data: web::Json<UpdateOneAmenityReqJson>,
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

    let mut amenity_data = match AmenityDao::db_select(ctx.dao().db(), path.amenity_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Amenity", &err),
    };

    if let Some(title) = data.title() {
        amenity_data.set_title(title);
    }

    if let Some(description) = data.description() {
        amenity_data.set_description(description);
    }

    if let Some(icon_name) = data.icon_name() {
        amenity_data.set_icon_name(icon_name);
    }

    if let Some(image_url) = data.image_url() {
        amenity_data.set_image_url(&Some(image_url.to_owned()));
    }

    if let Some(featured) = data.featured() {
        amenity_data.set_featured(featured);
    }

    if let Some(display_order) = data.display_order() {
        amenity_data.set_display_order(display_order);
    }

    if let Some(active) = data.active() {
        amenity_data.set_active(active);
    }

    if let Err(err) = amenity_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &AmenityResJson::new(
            amenity_data.id(),
            amenity_data.created_at(),
            amenity_data.updated_at(),
            amenity_data.title(),
            amenity_data.description(),
            amenity_data.icon_name(),
            amenity_data.image_url(),
            amenity_data.featured(),
            amenity_data.display_order(),
            amenity_data.active(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneAmenityReqPath>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let amenity_data = match AmenityDao::db_select(ctx.dao().db(), path.amenity_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Amenity", &err),
    };

    if let Err(err) = AmenityDao::db_delete(ctx.dao().db(), path.amenity_id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &DeleteAmenityResJson::new(amenity_data.id()),
    )
}
