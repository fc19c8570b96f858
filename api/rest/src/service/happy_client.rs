use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use eb_dao::happy_client::HappyClientDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        happy_client::{
            DeleteHappyClientResJson, DeleteOneHappyClientReqPath, FindManyHappyClientReqQuery,
            HappyClientResJson, InsertOneHappyClientReqJson, UpdateOneHappyClientReqJson,
            UpdateOneHappyClientReqPath,
        },
        PaginationRes, Response,
    },
    session::AdminSession,
};

pub fn happy_client_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/happy-clients", web::get().to(find_many_public))
        .route("/admin/happy-clients", web::get().to(find_many))
        .route("/admin/happy-clients", web::post().to(insert_one))
        .route(
            "/admin/happy-clients/{happy_client_id}",
            web::put().to(update_one),
        )
        .route(
            "/admin/happy-clients/{happy_client_id}",
            web::delete().to(delete_one),
        );
}

async fn find_many_public(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyHappyClientReqQuery>,
) -> HttpResponse {
    let happy_clients_data =
        match HappyClientDao::db_select_many_public(ctx.dao().db(), query.featured()).await {
            Ok(data) => data,
            Err(err) => {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
        };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &happy_clients_data.len(),
            &happy_clients_data.len(),
        )),
        &happy_clients_data
            .iter()
            .map(|data| {
                HappyClientResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.name(),
                    data.location(),
                    data.story(),
                    data.image_url(),
                    data.rating(),
                    data.purchase_date(),
                    data.villa_number(),
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

    let happy_clients_data = match HappyClientDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &happy_clients_data.len(),
            &happy_clients_data.len(),
        )),
        &happy_clients_data
            .iter()
            .map(|data| {
                HappyClientResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.name(),
                    data.location(),
                    data.story(),
                    data.image_url(),
                    data.rating(),
                    data.purchase_date(),
                    data.villa_number(),
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
    data: web::Json<InsertOneHappyClientReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let happy_client_data = HappyClientDao::new(
        data.name(),
        data.location(),
        data.story(),
        data.image_url(),
        data.rating(),
        data.purchase_date(),
        data.villa_number(),
        data.featured(),
        data.display_order(),
        data.active(),
    );

    if let Err(err) = happy_client_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &HappyClientResJson::new(
            happy_client_data.id(),
            happy_client_data.created_at(),
            happy_client_data.updated_at(),
            happy_client_data.name(),
            happy_client_data.location(),
            happy_client_data.story(),
            happy_client_data.image_url(),
            happy_client_data.rating(),
            happy_client_data.purchase_date(),
            happy_client_data.villa_number(),
            happy_client_data.featured(),
            happy_client_data.display_order(),
            happy_client_data.active(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOneHappyClientReqPath>,
    data: web::Json<UpdateOneHappyClientReqJson>,
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

    let mut happy_client_data =
        match HappyClientDao::db_select(ctx.dao().db(), path.happy_client_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("Happy client", &err),
        };

    if let Some(name) = data.name() {
        happy_client_data.set_name(name);
    }

    if let Some(location) = data.location() {
        happy_client_data.set_location(location);
    }

    if let Some(story) = data.story() {
        happy_client_data.set_story(story);
    }

    if let Some(image_url) = data.image_url() {
        happy_client_data.set_image_url(image_url);
    }

    if let Some(rating) = data.rating() {
        happy_client_data.set_rating(rating);
    }

    if let Some(purchase_date) = data.purchase_date() {
        happy_client_data.set_purchase_date(&Some(purchase_date.to_owned()));
    }

    if let Some(villa_number) = data.villa_number() {
        happy_client_data.set_villa_number(&Some(villa_number.to_owned()));
    }

    if let Some(featured) = data.featured() {
        happy_client_data.set_featured(featured);
    }

    if let Some(display_order) = data.display_order() {
        happy_client_data.set_display_order(display_order);
    }

    if let Some(active) = data.active() {
        happy_client_data.set_active(active);
    }

    if let Err(err) = happy_client_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &HappyClientResJson::new(
            happy_client_data.id(),
            happy_client_data.created_at(),
            happy_client_data.updated_at(),
            happy_client_data.name(),
            happy_client_data.location(),
            happy_client_data.story(),
            happy_client_data.image_url(),
            happy_client_data.rating(),
            happy_client_data.purchase_date(),
            happy_client_data.villa_number(),
            happy_client_data.featured(),
            happy_client_data.display_order(),
            happy_client_data.active(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneHappyClientReqPath>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let happy_client_data =
        match HappyClientDao::db_select(ctx.dao().db(), path.happy_client_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("Happy client", &err),
        };

    if let Err(err) = HappyClientDao::db_delete(ctx.dao().db(), path.happy_client_id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &DeleteHappyClientResJson::new(happy_client_data.id()),
    )
}
