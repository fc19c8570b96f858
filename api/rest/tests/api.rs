use std::{sync::Arc, time::Duration};

use actix_web::{http::StatusCode, test, web, App};
use eb_api_rest::{
    configure::configure,
    context::{ApiRestCtx, ApiRestDaoCtx, ApiRestHashCtx, ApiRestTokenCtx, ApiRestUploadCtx},
};
use eb_dao::{
    admin::AdminDao, contact_submission::ContactSubmissionDao, property::PropertyDao, Db,
};
use eb_db_sqlite::db::SqliteDb;
use eb_hash_argon2::argon2::Argon2Hash;
use eb_token_jwt::token::JwtToken;
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;

// Every crate the package links is handed to this test target as well, and
// the workspace forbids unused crate dependencies.
use actix_cors as _;
use actix_files as _;
use actix_multipart as _;
use actix_web_httpauth as _;
use anyhow as _;
use chrono as _;
use eb_config as _;
use eb_error as _;
use eb_log as _;
use futures as _;
use serde as _;
use sqlx as _;
use tokio_util as _;
use validator as _;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "estatebase-admin";

async fn ctx(dir: &TempDir, max_upload_size: &u64) -> ApiRestCtx {
    let db_path = dir.path().join("estatebase.db");
    let db = SqliteDb::new(db_path.to_str().unwrap(), &1).await;

    let uploads_path = dir.path().join("uploads");
    tokio::fs::create_dir_all(&uploads_path).await.unwrap();

    let ctx = ApiRestCtx::new(
        ApiRestHashCtx::new(Argon2Hash::new("Argon2id", "V0x13", "c2FsdHlzYWx0eXNhbHQ")),
        ApiRestTokenCtx::new(JwtToken::new(
            "supersecretjwtkey",
            &Duration::from_secs(60 * 60),
        )),
        ApiRestDaoCtx::new(Arc::new(Db::SqliteDb(db))),
        ApiRestUploadCtx::new(uploads_path.to_str().unwrap(), max_upload_size),
    );

    let password_hash = ctx
        .hash()
        .argon2()
        .hash_password(ADMIN_PASSWORD.as_bytes())
        .unwrap()
        .to_string();
    AdminDao::db_bootstrap(
        ctx.dao().db(),
        ADMIN_USERNAME,
        "admin@estatebase.dev",
        &password_hash,
    )
    .await
    .unwrap();

    ctx
}

fn property_body(villa_number: &str, display_order: i32) -> serde_json::Value {
    json!({
        "villa_number": villa_number,
        "status": "available",
        "plot_size": 2400,
        "built_up_area": 3200,
        "facing": "east",
        "location": "Whitefield",
        "price_range": "2.1 Cr - 2.4 Cr",
        "description": "Courtyard villa with a private garden",
        "enquiry_link": "https://estatebase.dev/enquiry",
        "map_link": "https://maps.example.com/eb",
        "display_order": display_order
    })
}

#[actix_web::test]
async fn mutation_without_valid_token_leaves_store_unchanged() {
    let dir = TempDir::new().unwrap();
    let ctx = web::Data::new(ctx(&dir, &(16 * 1024)).await);
    let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/properties")
            .set_json(property_body("EB-101", 1))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/properties")
            .insert_header(("authorization", "Bearer not-a-valid-token"))
            .set_json(property_body("EB-101", 1))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let properties_data = PropertyDao::db_select_many(ctx.dao().db()).await.unwrap();
    assert!(properties_data.is_empty());
}

#[actix_web::test]
async fn public_list_orders_by_display_order_with_stable_ties() {
    let dir = TempDir::new().unwrap();
    let ctx = web::Data::new(ctx(&dir, &(16 * 1024)).await);
    let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    let token = body["data"]["access_token"].as_str().unwrap().to_owned();

    for (villa_number, display_order) in [("EB-301", 2), ("EB-302", 1), ("EB-303", 1)] {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/admin/properties")
                .insert_header(("authorization", format!("Bearer {token}")))
                .set_json(property_body(villa_number, display_order))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        // Ids are time-ordered; keep the inserts on distinct timestamps so
        // the tie between EB-302 and EB-303 resolves by insertion order.
        actix_web::rt::time::sleep(Duration::from_millis(5)).await;
    }

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/properties").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    let villa_numbers = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|data| data["villa_number"].as_str().unwrap().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(villa_numbers, ["EB-302", "EB-303", "EB-301"]);
    assert_eq!(body["pagination"]["count"], 3);
    assert_eq!(body["pagination"]["total"], 3);
}

#[actix_web::test]
async fn login_returns_token_and_profile() {
    let dir = TempDir::new().unwrap();
    let ctx = web::Data::new(ctx(&dir, &(16 * 1024)).await);
    let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["token_type"], "bearer");
    assert!(!body["data"]["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["user"]["username"], ADMIN_USERNAME);
    assert_eq!(body["data"]["user"]["role"], "admin");

    let token = body["data"]["access_token"].as_str().unwrap().to_owned();
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/admin/auth/me")
            .insert_header(("authorization", format!("Bearer {token}")))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["username"], ADMIN_USERNAME);
    assert_eq!(body["data"]["email"], "admin@estatebase.dev");
}

#[actix_web::test]
async fn login_failure_hides_which_credential_was_wrong() {
    let dir = TempDir::new().unwrap();
    let ctx = web::Data::new(ctx(&dir, &(16 * 1024)).await);
    let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;

    let unknown_user_res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(json!({"username": "ghost", "password": ADMIN_PASSWORD}))
            .to_request(),
    )
    .await;
    let wrong_password_res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(json!({"username": ADMIN_USERNAME, "password": "wrong-password"}))
            .to_request(),
    )
    .await;

    assert_eq!(unknown_user_res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password_res.status(), StatusCode::UNAUTHORIZED);
    let unknown_user_body: serde_json::Value = test::read_body_json(unknown_user_res).await;
    let wrong_password_body: serde_json::Value = test::read_body_json(wrong_password_res).await;
    assert_eq!(unknown_user_body, wrong_password_body);
}

#[actix_web::test]
async fn change_password_with_wrong_current_keeps_old_password() {
    let dir = TempDir::new().unwrap();
    let ctx = web::Data::new(ctx(&dir, &(16 * 1024)).await);
    let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    let token = body["data"]["access_token"].as_str().unwrap().to_owned();

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/admin/auth/change-password")
            .insert_header(("authorization", format!("Bearer {token}")))
            .set_json(json!({
                "current_password": "not-the-password",
                "new_password": "replacement-secret"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn contact_form_without_email_stores_nothing() {
    let dir = TempDir::new().unwrap();
    let ctx = web::Data::new(ctx(&dir, &(16 * 1024)).await);
    let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/contact-form")
            .set_json(json!({
                "name": "Asha",
                "phone": "+91-9800000000",
                "message": "Interested in a site visit"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let submissions_data = ContactSubmissionDao::db_select_many(ctx.dao().db())
        .await
        .unwrap();
    assert!(submissions_data.is_empty());
}

#[actix_web::test]
async fn delete_of_missing_property_is_not_found() {
    let dir = TempDir::new().unwrap();
    let ctx = web::Data::new(ctx(&dir, &(16 * 1024)).await);
    let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    let token = body["data"]["access_token"].as_str().unwrap().to_owned();

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/admin/properties/{}", Uuid::now_v7()))
            .insert_header(("authorization", format!("Bearer {token}")))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"]["message"], "Property not found");
}

#[actix_web::test]
async fn partial_update_changes_only_sent_fields() {
    let dir = TempDir::new().unwrap();
    let ctx = web::Data::new(ctx(&dir, &(16 * 1024)).await);
    let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    let token = body["data"]["access_token"].as_str().unwrap().to_owned();

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/properties")
            .insert_header(("authorization", format!("Bearer {token}")))
            .set_json(property_body("EB-501", 1))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(res).await;
    let property_id = body["data"]["id"].as_str().unwrap().to_owned();

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/admin/properties/{property_id}"))
            .insert_header(("authorization", format!("Bearer {token}")))
            .set_json(json!({"price_range": "3.0 Cr - 3.3 Cr"}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/properties/{property_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["price_range"], "3.0 Cr - 3.3 Cr");
    assert_eq!(body["data"]["villa_number"], "EB-501");
    assert_eq!(body["data"]["location"], "Whitefield");

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/admin/properties/{property_id}"))
            .insert_header(("authorization", format!("Bearer {token}")))
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"]["message"], "No request fields to be updated");
}

#[actix_web::test]
async fn upload_over_size_cap_stores_nothing() {
    let dir = TempDir::new().unwrap();
    let ctx = web::Data::new(ctx(&dir, &8).await);
    let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    let token = body["data"]["access_token"].as_str().unwrap().to_owned();

    let boundary = "estatebase-test-boundary";
    let payload = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"site-plan.png\"\r\nContent-Type: image/png\r\n\r\n{}\r\n--{boundary}--\r\n",
        "x".repeat(64)
    );
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/upload")
            .insert_header(("authorization", format!("Bearer {token}")))
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(payload)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let mut uploads_entries = tokio::fs::read_dir(dir.path().join("uploads")).await.unwrap();
    assert!(uploads_entries.next_entry().await.unwrap().is_none());
}

#[actix_web::test]
async fn upload_then_serve_round_trip() {
    let dir = TempDir::new().unwrap();
    let ctx = web::Data::new(ctx(&dir, &(16 * 1024)).await);
    let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    let token = body["data"]["access_token"].as_str().unwrap().to_owned();

    let boundary = "estatebase-test-boundary";
    let payload = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"brochure.pdf\"\r\nContent-Type: application/pdf\r\n\r\nestatebase brochure\r\n--{boundary}--\r\n"
    );
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/upload")
            .insert_header(("authorization", format!("Bearer {token}")))
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(payload)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(res).await;
    let file_name = body["data"]["file_name"].as_str().unwrap().to_owned();
    assert!(file_name.ends_with(".pdf"));
    assert_eq!(
        body["data"]["file_url"].as_str().unwrap(),
        format!("/uploads/{file_name}")
    );

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/uploads/{file_name}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = test::read_body(res).await;
    assert_eq!(bytes.as_ref(), b"estatebase brochure".as_slice());
}

#[actix_web::test]
async fn contact_info_upsert_round_trip() {
    let dir = TempDir::new().unwrap();
    let ctx = web::Data::new(ctx(&dir, &(16 * 1024)).await);
    let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/contact-info").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    let token = body["data"]["access_token"].as_str().unwrap().to_owned();

    let contact_info_body = json!({
        "company_name": "Estatebase Developers",
        "phone": "+91-9800000000",
        "email": "hello@estatebase.dev",
        "whatsapp": "+91-9800000000",
        "address": "12 Lake View Road, Whitefield",
        "map_embed_url": "https://maps.example.com/embed/eb",
        "business_hours": "Mon-Sat 9:30-18:30"
    });
    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/admin/contact-info")
            .insert_header(("authorization", format!("Bearer {token}")))
            .set_json(&contact_info_body)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/contact-info").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["company_name"], "Estatebase Developers");

    let mut updated_contact_info_body = contact_info_body.clone();
    updated_contact_info_body["phone"] = json!("+91-9811111111");
    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/admin/contact-info")
            .insert_header(("authorization", format!("Bearer {token}")))
            .set_json(&updated_contact_info_body)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/contact-info").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["phone"], "+91-9811111111");
}
