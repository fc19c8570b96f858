use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::Utc;
use eb_dao::news_event::NewsEventDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        news_event::{
            DeleteNewsEventResJson, DeleteOneNewsEventReqPath, FindManyNewsEventReqQuery,
            InsertOneNewsEventReqJson, NewsEventResJson, UpdateOneNewsEventReqJson,
            UpdateOneNewsEventReqPath,
        },
        PaginationRes, Response,
    },
    session::AdminSession,
};

pub fn news_event_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/news-events", web::get().to(find_many_public))
        .route("/admin/news-events", web::get().to(find_many))
        .route("/admin/news-events", web::post().to(insert_one))
        .route(
            "/admin/news-events/{news_event_id}",
            web::put().to(update_one),
        )
        .route(
            "/admin/news-events/{news_event_id}",
            web::delete().to(delete_one),
        );
}

async fn find_many_public(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyNewsEventReqQuery>,
) -> HttpResponse {
    let (news_events_data, total) = match tokio::try_join!(
        NewsEventDao::db_select_many_public(
            ctx.dao().db(),
            query.category(),
            query.featured(),
            query.limit(),
            query.skip()
        ),
        NewsEventDao::db_count_public(ctx.dao().db(), query.category(), query.featured())
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
        &Some(PaginationRes::new(&news_events_data.len(), &total)),
        &news_events_data
            .iter()
            .map(|data| {
                NewsEventResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.title(),
                    data.excerpt(),
                    data.content(),
                    data.image_url(),
                    data.category(),
                    data.author(),
                    data.publish_date(),
                    data.event_date(),
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

    let news_events_data = match NewsEventDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &news_events_data.len(),
            &news_events_data.len(),
        )),
        &news_events_data
            .iter()
            .map(|data| {
                NewsEventResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.title(),
                    data.excerpt(),
                    data.content(),
                    data.image_url(),
                    data.category(),
                    data.author(),
                    data.publish_date(),
                    data.event_date(),
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
    data: web::Json<InsertOneNewsEventReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let publish_date = match data.publish_date() {
        Some(publish_date) => *publish_date,
        None => Utc::now(),
    };

    let news_event_data = NewsEventDao::new(
        data.title(),
        data.excerpt(),
        data.content(),
        data.image_url(),
        data.category(),
        data.author(),
        &publish_date,
        data.event_date(),
        data.featured(),
        data.display_order(),
        data.active(),
    );

    if let Err(err) = news_event_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &NewsEventResJson::new(
            news_event_data.id(),
            news_event_data.created_at(),
            news_event_data.updated_at(),
            news_event_data.title(),
            news_event_data.excerpt(),
            news_event_data.content(),
            news_event_data.image_url(),
            news_event_data.category(),
            news_event_data.author(),
            news_event_data.publish_date(),
            news_event_data.event_date(),
            news_event_data.featured(),
            news_event_data.display_order(),
            news_event_data.active(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOneNewsEventReqPath>,
    data: web::Json<UpdateOneNewsEventReqJson>,
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

    let mut news_event_data =
        match NewsEventDao::db_select(ctx.dao().db(), path.news_event_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("News event", &err),
        };

    if let Some(title) = data.title() {
        news_event_data.set_title(title);
    }

    if let Some(excerpt) = data.excerpt() {
        news_event_data.set_excerpt(excerpt);
    }

    if let Some(content) = data.content() {
        news_event_data.set_content(content);
    }

    if let Some(image_url) = data.image_url() {
        news_event_data.set_image_url(image_url);
    }

    if let Some(category) = data.category() {
        news_event_data.set_category(category);
    }

    if let Some(author) = data.author() {
        news_event_data.set_author(author);
    }

    if let Some(publish_date) = data.publish_date() {
        news_event_data.set_publish_date(publish_date);
    }

    if let Some(event_date) = data.event_date() {
        news_event_data.set_event_date(&Some(*event_date));
    }

    if let Some(featured) = data.featured() {
        news_event_data.set_featured(featured);
    }

    if let Some(display_order) = data.display_order() {
        news_event_data.set_display_order(display_order);
    }

    if let Some(active) = data.active() {
        news_event_data.set_active(active);
    }

    if let Err(err) = news_event_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &NewsEventResJson::new(
            news_event_data.id(),
            news_event_data.created_at(),
            news_event_data.updated_at(),
            news_event_data.title(),
            news_event_data.excerpt(),
            news_event_data.content(),
            news_event_data.image_url(),
            news_event_data.category(),
            news_event_data.author(),
            news_event_data.publish_date(),
            news_event_data.event_date(),
            news_event_data.featured(),
            news_event_data.display_order(),
            news_event_data.active(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneNewsEventReqPath>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let news_event_data =
        match NewsEventDao::db_select(ctx.dao().db(), path.news_event_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("News event", &err),
        };

    if let Err(err) = NewsEventDao::db_delete(ctx.dao().db(), path.news_event_id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &DeleteNewsEventResJson::new(news_event_data.id()),
    )
}
