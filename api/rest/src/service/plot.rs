use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use eb_dao::plot::PlotDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        plot::{
            DeleteOnePlotReqPath, DeletePlotResJson, FindManyPlotReqQuery, FindOnePlotReqPath,
            InsertOnePlotReqJson, PlotResJson, UpdateOnePlotReqJson, UpdateOnePlotReqPath,
        },
        PaginationRes, Response,
    },
    session::AdminSession,
};

pub fn plot_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/plots", web::get().to(find_many_public))
        .route("/plots/{plot_id}", web::get().to(find_one_public))
        .route("/admin/plots", web::get().to(find_many))
        .route("/admin/plots", web::post().to(insert_one))
        .route("/admin/plots/{plot_id}", web::put().to(update_one))
        .route("/admin/plots/{plot_id}", web::delete().to(delete_one));
}

async fn find_many_public(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyPlotReqQuery>,
) -> HttpResponse {
    let plots_data = match PlotDao::db_select_many_public(ctx.dao().db(), query.status()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&plots_data.len(), &plots_data.len())),
        &plots_data
            .iter()
            .map(|data| {
                PlotResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.plot_name(),
                    data.location(),
                    data.plot_area(),
                    data.price_range(),
                    data.property_type(),
                    data.description(),
                    data.main_image(),
                    data.gallery_images(),
                    data.youtube_link(),
                    data.status(),
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
    path: web::Path<FindOnePlotReqPath>,
) -> HttpResponse {
    let plot_data = match PlotDao::db_select(ctx.dao().db(), path.plot_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Plot", &err),
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &PlotResJson::new(
            plot_data.id(),
            plot_data.created_at(),
            plot_data.updated_at(),
            plot_data.plot_name(),
            plot_data.location(),
            plot_data.plot_area(),
            plot_data.price_range(),
            plot_data.property_type(),
            plot_data.description(),
            plot_data.main_image(),
            plot_data.gallery_images(),
            plot_data.youtube_link(),
            plot_data.status(),
            plot_data.featured(),
            plot_data.display_order(),
            plot_data.active(),
        ),
    )
}

async fn find_many(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let plots_data = match PlotDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&plots_data.len(), &plots_data.len())),
        &plots_data
            .iter()
            .map(|data| {
                PlotResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.plot_name(),
                    data.location(),
                    data.plot_area(),
                    data.price_range(),
                    data.property_type(),
                    data.description(),
                    data.main_image(),
                    data.gallery_images(),
                    data.youtube_link(),
                    data.status(),
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
    data: web::Json<InsertOnePlotReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let plot_data = PlotDao::new(
        data.plot_name(),
        data.location(),
        data.plot_area(),
        data.price_range(),
        data.property_type(),
        data.description(),
        data.main_image(),
        data.gallery_images(),
        data.youtube_link(),
        data.status(),
        data.featured(),
        data.display_order(),
        data.active(),
    );

    if let Err(err) = plot_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &PlotResJson::new(
            plot_data.id(),
            plot_data.created_at(),
            plot_data.updated_at(),
            plot_data.plot_name(),
            plot_data.location(),
            plot_data.plot_area(),
            plot_data.price_range(),
            plot_data.property_type(),
            plot_data.description(),
            plot_data.main_image(),
            plot_data.gallery_images(),
            plot_data.youtube_link(),
            plot_data.status(),
            plot_data.featured(),
            plot_data.display_order(),
            plot_data.active(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOnePlotReqPath>,
    data: web::Json<UpdateOnePlotReqJson>,
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

    let mut plot_data = match PlotDao::db_select(ctx.dao().db(), path.plot_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Plot", &err),
    };

    if let Some(plot_name) = data.plot_name() {
        plot_data.set_plot_name(plot_name);
    }

    if let Some(location) = data.location() {
        plot_data.set_location(location);
    }

    if let Some(plot_area) = data.plot_area() {
        plot_data.set_plot_area(plot_area);
    }

    if let Some(price_range) = data.price_range() {
        plot_data.set_price_range(price_range);
    }

    if let Some(property_type) = data.property_type() {
        plot_data.set_property_type(property_type);
    }

    if let Some(description) = data.description() {
        plot_data.set_description(description);
    }

    if let Some(main_image) = data.main_image() {
        plot_data.set_main_image(main_image);
    }

    if let Some(gallery_images) = data.gallery_images() {
        plot_data.set_gallery_images(gallery_images);
    }

    if let Some(youtube_link) = data.youtube_link() {
        plot_data.set_youtube_link(&Some(youtube_link.to_owned()));
    }

    if let Some(status) = data.status() {
        plot_data.set_status(status);
    }

    if let Some(featured) = data.featured() {
        plot_data.set_featured(featured);
    }

    if let Some(display_order) = data.display_order() {
        plot_data.set_display_order(display_order);
    }

    if let Some(active) = data.active() {
        plot_data.set_active(active);
    }

    if let Err(err) = plot_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &PlotResJson::new(
            plot_data.id(),
            plot_data.created_at(),
            plot_data.updated_at(),
            plot_data.plot_name(),
            plot_data.location(),
            plot_data.plot_area(),
            plot_data.price_range(),
            plot_data.property_type(),
            plot_data.description(),
            plot_data.main_image(),
            plot_data.gallery_images(),
            plot_data.youtube_link(),
            plot_data.status(),
            plot_data.featured(),
            plot_data.display_order(),
            plot_data.active(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOnePlotReqPath>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let plot_data = match PlotDao::db_select(ctx.dao().db(), path.plot_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Plot", &err),
    };

    if let Err(err) = PlotDao::db_delete(ctx.dao().db(), path.plot_id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &DeletePlotResJson::new(plot_data.id()),
    )
}
