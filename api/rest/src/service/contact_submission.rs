use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use eb_dao::contact_submission::ContactSubmissionDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        contact_submission::{
            ContactFormResJson, ContactSubmissionResJson, DeleteContactSubmissionResJson,
            DeleteOneContactSubmissionReqPath, InsertOneContactSubmissionReqJson,
            UpdateOneContactSubmissionReqJson, UpdateOneContactSubmissionReqPath,
        },
        PaginationRes, Response,
    },
    session::AdminSession,
};

pub fn contact_submission_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact-form", web::post().to(insert_one_public))
        .route("/admin/contact-submissions", web::get().to(find_many))
        .route(
            "/admin/contact-submissions/{submission_id}",
            web::put().to(update_one),
        )
        .route(
            "/admin/contact-submissions/{submission_id}",
            web::delete().to(delete_one),
        );
}

async fn insert_one_public(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<InsertOneContactSubmissionReqJson>,
) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let submission_data = ContactSubmissionDao::new(
        data.name(),
        data.email(),
        data.phone(),
        data.property_interest(),
        data.visit_date(),
        data.message(),
    );

    if let Err(err) = submission_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &ContactFormResJson::new(
            &true,
            "Contact form submitted successfully",
            submission_data.id(),
        ),
    )
}

async fn find_many(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let submissions_data = match ContactSubmissionDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &submissions_data.len(),
            &submissions_data.len(),
        )),
        &submissions_data
            .iter()
            .map(|data| {
                ContactSubmissionResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.name(),
                    data.email(),
                    data.phone(),
                    data.property_interest(),
                    data.visit_date(),
                    data.message(),
                    data.status(),
                )
            })
            .collect::<Vec<_>>(),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOneContactSubmissionReqPath>,
    data: web::Json<UpdateOneContactSubmissionReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let mut submission_data =
        match ContactSubmissionDao::db_select(ctx.dao().db(), path.submission_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("Contact submission", &err),
        };

    submission_data.set_status(data.status());

    if let Err(err) = submission_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &ContactSubmissionResJson::new(
            submission_data.id(),
            submission_data.created_at(),
            submission_data.updated_at(),
            submission_data.name(),
            submission_data.email(),
            submission_data.phone(),
            submission_data.property_interest(),
            submission_data.visit_date(),
            submission_data.message(),
            submission_data.status(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneContactSubmissionReqPath>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let submission_data =
        match ContactSubmissionDao::db_select(ctx.dao().db(), path.submission_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("Contact submission", &err),
        };

    if let Err(err) = ContactSubmissionDao::db_delete(ctx.dao().db(), path.submission_id()).await
    {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &DeleteContactSubmissionResJson::new(submission_data.id()),
    )
}
