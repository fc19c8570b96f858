use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use eb_dao::blog::BlogDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        blog::{
            BlogResJson, DeleteBlogResJson, DeleteOneBlogReqPath, FindManyBlogReqQuery,
            FindOneBlogBySlugReqPath, FindOneBlogReqPath, InsertOneBlogReqJson,
            UpdateOneBlogReqJson, UpdateOneBlogReqPath,
        },
        PaginationRes, Response,
    },
    session::AdminSession,
};

pub fn blog_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/blogs", web::get().to(find_many_public))
        .route("/blogs/slug/{slug}", web::get().to(find_one_by_slug_public))
        .route(
            "/blogs/categories/all",
            web::get().to(find_many_categories_public),
        )
        .route("/blogs/{blog_id}", web::get().to(find_one_public))
        .route("/admin/blogs", web::get().to(find_many))
        .route("/admin/blogs", web::post().to(insert_one))
        .route("/admin/blogs/{blog_id}", web::put().to(update_one))
        .route("/admin/blogs/{blog_id}", web::delete().to(delete_one));
}

async fn find_many_public(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyBlogReqQuery>,
) -> HttpResponse {
    let (blogs_data, total) = match tokio::try_join!(
        BlogDao::db_select_many_public(
            ctx.dao().db(),
            query.category(),
            query.featured(),
            query.limit(),
            query.skip()
        ),
        BlogDao::db_count_public(ctx.dao().db(), query.category(), query.featured())
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
        &Some(PaginationRes::new(&blogs_data.len(), &total)),
        &blogs_data
            .iter()
            .map(|data| {
                BlogResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.title(),
                    data.slug(),
                    data.excerpt(),
                    data.content(),
                    data.featured_image(),
                    data.category(),
                    data.author(),
                    data.tags(),
                    data.meta_title(),
                    data.meta_description(),
                    data.meta_keywords(),
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
    path: web::Path<FindOneBlogReqPath>,
) -> HttpResponse {
    let blog_data = match BlogDao::db_select(ctx.dao().db(), path.blog_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Blog", &err),
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &BlogResJson::new(
            blog_data.id(),
            blog_data.created_at(),
            blog_data.updated_at(),
            blog_data.title(),
            blog_data.slug(),
            blog_data.excerpt(),
            blog_data.content(),
            blog_data.featured_image(),
            blog_data.category(),
            blog_data.author(),
            blog_data.tags(),
            blog_data.meta_title(),
            blog_data.meta_description(),
            blog_data.meta_keywords(),
            blog_data.featured(),
            blog_data.display_order(),
            blog_data.active(),
        ),
    )
}

async fn find_one_by_slug_public(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<FindOneBlogBySlugReqPath>,
) -> HttpResponse {
    let blog_data = match BlogDao::db_select_by_slug(ctx.dao().db(), path.slug()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Blog", &err),
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &BlogResJson::new(
            blog_data.id(),
            blog_data.created_at(),
            blog_data.updated_at(),
            blog_data.title(),
            blog_data.slug(),
            blog_data.excerpt(),
            blog_data.content(),
            blog_data.featured_image(),
            blog_data.category(),
            blog_data.author(),
            blog_data.tags(),
            blog_data.meta_title(),
            blog_data.meta_description(),
            blog_data.meta_keywords(),
            blog_data.featured(),
            blog_data.display_order(),
            blog_data.active(),
        ),
    )
}

async fn find_many_categories_public(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    let categories_data = match BlogDao::db_select_categories(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(&StatusCode::OK, &None, &categories_data)
}

async fn find_many(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let blogs_data = match BlogDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&blogs_data.len(), &blogs_data.len())),
        &blogs_data
            .iter()
            .map(|data| {
                BlogResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.title(),
                    data.slug(),
                    data.excerpt(),
                    data.content(),
                    data.featured_image(),
                    data.category(),
                    data.author(),
                    data.tags(),
                    data.meta_title(),
                    data.meta_description(),
                    data.meta_keywords(),
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
    data: web::Json<InsertOneBlogReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let blog_data = BlogDao::new(
        data.title(),
        data.slug(),
        data.excerpt(),
        data.content(),
        data.featured_image(),
        data.category(),
        data.author(),
        data.tags(),
        data.meta_title(),
        data.meta_description(),
        data.meta_keywords(),
        data.featured(),
        data.display_order(),
        data.active(),
    );

    if let Err(err) = blog_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &BlogResJson::new(
            blog_data.id(),
            blog_data.created_at(),
            blog_data.updated_at(),
            blog_data.title(),
            blog_data.slug(),
            blog_data.excerpt(),
            blog_data.content(),
            blog_data.featured_image(),
            blog_data.category(),
            blog_data.author(),
            blog_data.tags(),
            blog_data.meta_title(),
            blog_data.meta_description(),
            blog_data.meta_keywords(),
            blog_data.featured(),
            blog_data.display_order(),
            blog_data.active(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOneBlogReqPath>,
    data: web::Json<UpdateOneBlogReqJson>,
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

    let mut blog_data = match BlogDao::db_select(ctx.dao().db(), path.blog_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Blog", &err),
    };

    if let Some(title) = data.title() {
        blog_data.set_title(title);
    }

    if let Some(slug) = data.slug() {
        blog_data.set_slug(slug);
    }

    if let Some(excerpt) = data.excerpt() {
        blog_data.set_excerpt(excerpt);
    }

    if let Some(content) = data.content() {
        blog_data.set_content(content);
    }

    if let Some(featured_image) = data.featured_image() {
        blog_data.set_featured_image(featured_image);
    }

    if let Some(category) = data.category() {
        blog_data.set_category(category);
    }

    if let Some(author) = data.author() {
        blog_data.set_author(author);
    }

    if let Some(tags) = data.tags() {
        blog_data.set_tags(tags);
    }

    if let Some(meta_title) = data.meta_title() {
        blog_data.set_meta_title(&Some(meta_title.to_owned()));
    }

    if let Some(meta_description) = data.meta_description() {
        blog_data.set_meta_description(&Some(meta_description.to_owned()));
    }

    if let Some(meta_keywords) = data.meta_keywords() {
        blog_data.set_meta_keywords(&Some(meta_keywords.to_owned()));
    }

    if let Some(featured) = data.featured() {
        blog_data.set_featured(featured);
    }

    if let Some(display_order) = data.display_order() {
        blog_data.set_display_order(display_order);
    }

    if let Some(active) = data.active() {
        blog_data.set_active(active);
    }

    if let Err(err) = blog_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &BlogResJson::new(
            blog_data.id(),
            blog_data.created_at(),
            blog_data.updated_at(),
            blog_data.title(),
            blog_data.slug(),
            blog_data.excerpt(),
            blog_data.content(),
            blog_data.featured_image(),
            blog_data.category(),
            blog_data.author(),
            blog_data.tags(),
            blog_data.meta_title(),
            blog_data.meta_description(),
            blog_data.meta_keywords(),
            blog_data.featured(),
            blog_data.display_order(),
            blog_data.active(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneBlogReqPath>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let blog_data = match BlogDao::db_select(ctx.dao().db(), path.blog_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error_dao("Blog", &err),
    };

    if let Err(err) = BlogDao::db_delete(ctx.dao().db(), path.blog_id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &DeleteBlogResJson::new(blog_data.id()),
    )
}
