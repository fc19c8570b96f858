use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use eb_dao::property::PropertyDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        property::{
            DeleteOnePropertyReqPath, DeletePropertyResJson, FindManyPropertyReqQuery,
            FindOnePropertyReqPath, InsertOnePropertyReqJson, PropertyResJson,
            UpdateOnePropertyReqJson, UpdateOnePropertyReqPath,
        },
        PaginationRes, Response,
    },
    session::AdminSession,
};

pub fn property_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/properties", web::get().to(find_many_public))
        .route("/properties/{property_id}", web::get().to(find_one_public))
        .route("/admin/properties", web::get().to(find_many))
        .route("/admin/properties", web::post().to(insert_one))
        .route(
            "/admin/properties/{property_id}",
            web::put().to(update_one),
        )
        .route(
            "/admin/properties/{property_id}",
            web::delete().to(delete_one),
        );
}

async fn find_many_public(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyPropertyReqQuery>,
) -> HttpResponse {
    let (properties_data, total) = match tokio::try_join!(
        PropertyDao::db_select_many_public(
            ctx.dao().db(),
            query.status(),
            query.facing(),
            query.location(),
            query.featured(),
            query.limit(),
            query.skip()
        ),
        PropertyDao::db_count_public(
            ctx.dao().db(),
            query.status(),
            query.facing(),
            query.location(),
            query.featured()
        )
    ) {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    let total = match usize::try_from(total) {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&properties_data.len(), &total)),
        &properties_data
            .iter()
            .map(|data| {
                PropertyResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.villa_number(),
                    data.status(),
                    data.plot_size(),
                    data.built_up_area(),
                    data.facing(),
                    data.location(),
                    data.price_range(),
                    data.gallery_images(),
                    data.description(),
                    data.amenities(),
                    data.enquiry_link(),
                    data.map_link(),
                    data.featured(),
                    data.display_order(),
                    data.active(),
                )
            })
            .collect::<Vec<_>>(),
    )
}

async fn find_one_public(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<FindOnePropertyReqPath>,
) -> HttpResponse {
    let property_data = match PropertyDao::db_select(ctx.dao().db(), path.property_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Property", &err),
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &PropertyResJson::new(
            property_data.id(),
            property_data.created_at(),
            property_data.updated_at(),
            property_data.villa_number(),
            property_data.status(),
            property_data.plot_size(),
            property_data.built_up_area(),
            property_data.facing(),
            property_data.location(),
            property_data.price_range(),
            property_data.gallery_images(),
            property_data.description(),
            property_data.amenities(),
            property_data.enquiry_link(),
            property_data.map_link(),
            property_data.featured(),
            property_data.display_order(),
            property_data.active(),
        ),
    )
}

async fn find_many(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let properties_data = match PropertyDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &properties_data.len(),
            &properties_data.len(),
        )),
        &properties_data
            .iter()
            .map(|data| {
                PropertyResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.villa_number(),
                    data.status(),
                    data.plot_size(),
                    data.built_up_area(),
                    data.facing(),
                    data.location(),
                    data.price_range(),
                    data.gallery_images(),
                    data.description(),
                    data.amenities(),
                    data.enquiry_link(),
                    data.map_link(),
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
    data: web::Json<InsertOnePropertyReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let property_data = PropertyDao::new(
        data.villa_number(),
        data.status(),
        data.plot_size(),
        data.built_up_area(),
        data.facing(),
        data.location(),
        data.price_range(),
        data.gallery_images(),
        data.description(),
        data.amenities(),
        data.enquiry_link(),
        data.map_link(),
        data.featured(),
        data.display_order(),
        data.active(),
    );

    if let Err(err) = property_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &PropertyResJson::new(
            property_data.id(),
            property_data.created_at(),
            property_data.updated_at(),
            property_data.villa_number(),
            property_data.status(),
            property_data.plot_size(),
            property_data.built_up_area(),
            property_data.facing(),
            property_data.location(),
            property_data.price_range(),
            property_data.gallery_images(),
            property_data.description(),
            property_data.amenities(),
            property_data.enquiry_link(),
            property_data.map_link(),
            property_data.featured(),
            property_data.display_order(),
            property_data.active(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOnePropertyReqPath>,
    data: web::Json<UpdateOnePropertyReqJson>,
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

    let mut property_data = match PropertyDao::db_select(ctx.dao().db(), path.property_id()).await
    {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Property", &err),
    };

    if let Some(villa_number) = data.villa_number() {
        property_data.set_villa_number(villa_number);
    }

    if let Some(status) = data.status() {
        property_data.set_status(status);
    }

    if let Some(plot_size) = data.plot_size() {
        property_data.set_plot_size(plot_size);
    }

    if let Some(built_up_area) = data.built_up_area() {
        property_data.set_built_up_area(built_up_area);
    }

    if let Some(facing) = data.facing() {
        property_data.set_facing(facing);
    }

    if let Some(location) = data.location() {
        property_data.set_location(location);
    }

    if let Some(price_range) = data.price_range() {
        property_data.set_price_range(price_range);
    }

    if let Some(gallery_images) = data.gallery_images() {
        property_data.set_gallery_images(gallery_images);
    }

    if let Some(description) = data.description() {
        property_data.set_description(description);
    }

    if let Some(amenities) = data.amenities() {
        property_data.set_amenities(amenities);
    }

    if let Some(enquiry_link) = data.enquiry_link() {
        property_data.set_enquiry_link(enquiry_link);
    }

    if let Some(map_link) = data.map_link() {
        property_data.set_map_link(map_link);
    }

    if let Some(featured) = data.featured() {
        property_data.set_featured(featured);
    }

    if let Some(display_order) = data.display_order() {
        property_data.set_display_order(display_order);
    }

    if let Some(active) = data.active() {
        property_data.set_active(active);
    }

    if let Err(err) = property_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &PropertyResJson::new(
            property_data.id(),
            property_data.created_at(),
            property_data.updated_at(),
            property_data.villa_number(),
            property_data.status(),
            property_data.plot_size(),
            property_data.built_up_area(),
            property_data.facing(),
            property_data.location(),
            property_data.price_range(),
            property_data.gallery_images(),
            property_data.description(),
            property_data.amenities(),
            property_data.enquiry_link(),
            property_data.map_link(),
            property_data.featured(),
            property_data.display_order(),
            property_data.active(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOnePropertyReqPath>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let property_data = match PropertyDao::db_select(ctx.dao().db(), path.property_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Property", &err),
    };

    if let Err(err) = PropertyDao::db_delete(ctx.dao().db(), path.property_id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &DeletePropertyResJson::new(property_data.id()),
    )
}
