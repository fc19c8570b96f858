use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use eb_dao::our_project::OurProjectDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        our_project::{
            DeleteOneOurProjectReqPath, DeleteOurProjectResJson, FindManyOurProjectReqQuery,
            InsertOneOurProjectReqJson, OurProjectResJson, UpdateOneOurProjectReqJson,
            UpdateOneOurProjectReqPath,
        },
        PaginationRes, Response,
    },
    session::AdminSession,
};

pub fn our_project_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/our-projects", web::get().to(find_many_public))
        .route("/admin/our-projects", web::get().to(find_many))
        .route("/admin/our-projects", web::post().to(insert_one))
        .route(
            "/admin/our-projects/{our_project_id}",
            web::put().to(update_one),
        )
        .route(
            "/admin/our-projects/{our_project_id}",
            web::delete().to(delete_one),
        );
}

async fn find_many_public(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyOurProjectReqQuery>,
) -> HttpResponse {
    let our_projects_data =
        match OurProjectDao::db_select_many_public(ctx.dao().db(), query.featured()).await {
            Ok(data) => data,
            Err(err) => {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
        };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &our_projects_data.len(),
            &our_projects_data.len(),
        )),
        &our_projects_data
            .iter()
            .map(|data| {
                OurProjectResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.project_name(),
                    data.location(),
                    data.price_range(),
                    data.property_type(),
                    data.short_description(),
                    data.thumbnail_image(),
                    data.youtube_link(),
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

    let our_projects_data = match OurProjectDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &our_projects_data.len(),
            &our_projects_data.len(),
        )),
        &our_projects_data
            .iter()
            .map(|data| {
                OurProjectResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.project_name(),
                    data.location(),
                    data.price_range(),
                    data.property_type(),
                    data.short_description(),
                    data.thumbnail_image(),
                    data.youtube_link(),
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
    data: web::Json<InsertOneOurProjectReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let our_project_data = OurProjectDao::new(
        data.project_name(),
        data.location(),
        data.price_range(),
        data.property_type(),
        data.short_description(),
        data.thumbnail_image(),
        data.youtube_link(),
        data.featured(),
        data.display_order(),
        data.active(),
    );

    if let Err(err) = our_project_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &OurProjectResJson::new(
            our_project_data.id(),
            our_project_data.created_at(),
            our_project_data.updated_at(),
            our_project_data.project_name(),
            our_project_data.location(),
            our_project_data.price_range(),
            our_project_data.property_type(),
            our_project_data.short_description(),
            our_project_data.thumbnail_image(),
            our_project_data.youtube_link(),
            our_project_data.featured(),
            our_project_data.display_order(),
            our_project_data.active(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOneOurProjectReqPath>,
    data: web::Json<UpdateOneOurProjectReqJson>,
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

    let mut our_project_data =
        match OurProjectDao::db_select(ctx.dao().db(), path.our_project_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("Project", &err),
        };

    if let Some(project_name) = data.project_name() {
        our_project_data.set_project_name(project_name);
    }

    if let Some(location) = data.location() {
        our_project_data.set_location(location);
    }

    if let Some(price_range) = data.price_range() {
        our_project_data.set_price_range(price_range);
    }

    if let Some(property_type) = data.property_type() {
        our_project_data.set_property_type(property_type);
    }

    if let Some(short_description) = data.short_description() {
        our_project_data.set_short_description(short_description);
    }

    if let Some(thumbnail_image) = data.thumbnail_image() {
        our_project_data.set_thumbnail_image(thumbnail_image);
    }

    if let Some(youtube_link) = data.youtube_link() {
        our_project_data.set_youtube_link(&Some(youtube_link.to_owned()));
    }

    if let Some(featured) = data.featured() {
        our_project_data.set_featured(featured);
    }

    if let Some(display_order) = data.display_order() {
        our_project_data.set_display_order(display_order);
    }

    if let Some(active) = data.active() {
        our_project_data.set_active(active);
    }

    if let Err(err) = our_project_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &OurProjectResJson::new(
            our_project_data.id(),
            our_project_data.created_at(),
            our_project_data.updated_at(),
            our_project_data.project_name(),
            our_project_data.location(),
            our_project_data.price_range(),
            our_project_data.property_type(),
            our_project_data.short_description(),
            our_project_data.thumbnail_image(),
            our_project_data.youtube_link(),
            our_project_data.featured(),
            our_project_data.display_order(),
            our_project_data.active(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneOurProjectReqPath>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let our_project_data =
        match OurProjectDao::db_select(ctx.dao().db(), path.our_project_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("Project", &err),
        };

    if let Err(err) = OurProjectDao::db_delete(ctx.dao().db(), path.our_project_id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &DeleteOurProjectResJson::new(our_project_data.id()),
    )
}
