//! HTTP-level integration tests for projects, permits, site logs,
//! comments, and notifications.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete_auth, get_auth, post_auth, post_json_auth, put_json_auth,
    token_for_role,
};
use gantry_core::roles::Role;
use gantry_core::types::DbId;
use sqlx::PgPool;

/// Create a project through the API as admin; returns (admin token, id).
async fn seed_project_via_api(pool: &PgPool, email: &str, name: &str) -> (String, DbId) {
    let token = token_for_role(pool, build_test_app(pool.clone()), email, Role::Admin).await;
    let body = serde_json::json!({
        "name": name,
        "status": "active",
        "start_date": "2026-08-01",
        "end_date": null
    });
    let response = post_json_auth(build_test_app(pool.clone()), "/api/v1/projects", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    (token, json["id"].as_i64().unwrap())
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// Project create/update/delete round trip, with progress validation.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_crud(pool: PgPool) {
    let (token, id) = seed_project_via_api(&pool, "adm@site.test", "Harbour Bridge").await;

    // Progress outside 0..=100 is a validation error.
    let body = serde_json::json!({ "progress_percent": 120 });
    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/projects/{id}"),
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = serde_json::json!({ "progress_percent": 45, "status": "active" });
    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/projects/{id}"),
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["progress_percent"], 45);
    assert_eq!(json["name"], "Harbour Bridge");

    let response = delete_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/projects/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(build_test_app(pool), &format!("/api/v1/projects/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Permits
// ---------------------------------------------------------------------------

/// Permit listings carry the computed risk tier.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_permit_risk_annotation(pool: PgPool) {
    let (token, project_id) = seed_project_via_api(&pool, "adm2@site.test", "Metro Line").await;

    let today = chrono::Utc::now().date_naive();
    let expired = today - chrono::Duration::days(3);
    let expiring = today + chrono::Duration::days(10);
    let valid = today + chrono::Duration::days(90);

    for (doc, date) in [
        ("Crane permit", expired),
        ("Electrical permit", expiring),
        ("Excavation permit", valid),
    ] {
        let body = serde_json::json!({
            "project_id": project_id,
            "doc_name": doc,
            "expiry_date": date.to_string()
        });
        let response =
            post_json_auth(build_test_app(pool.clone()), "/api/v1/permits", &token, body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/permits", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let permits = json.as_array().unwrap();
    assert_eq!(permits.len(), 3);

    // Sorted soonest-expiry first.
    assert_eq!(permits[0]["doc_name"], "Crane permit");
    assert_eq!(permits[0]["risk"], "expired");
    assert_eq!(permits[1]["risk"], "expiring");
    assert_eq!(permits[2]["risk"], "valid");
    assert_eq!(permits[0]["project_name"], "Metro Line");

    // The expiring listing excludes the far-out permit.
    let response = get_auth(build_test_app(pool), "/api/v1/permits/expiring", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

/// Subcontractors have no permit read permission.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_permits_hidden_from_subcontractors(pool: PgPool) {
    let token =
        token_for_role(&pool, build_test_app(pool.clone()), "sub@site.test", Role::Subcontractor)
            .await;
    let response = get_auth(build_test_app(pool), "/api/v1/permits", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Site logs & comments
// ---------------------------------------------------------------------------

/// Supervisors create logs with capture metadata; clients can read and
/// discuss them.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_site_log_flow(pool: PgPool) {
    let (_admin, project_id) = seed_project_via_api(&pool, "adm3@site.test", "Depot").await;
    let sup_token =
        token_for_role(&pool, build_test_app(pool.clone()), "sup@site.test", Role::Supervisor)
            .await;
    let client_token =
        token_for_role(&pool, build_test_app(pool.clone()), "cl@site.test", Role::Client).await;

    let body = serde_json::json!({
        "project_id": project_id,
        "description": "Formwork inspection passed",
        "photo_url": "/uploads/abc.jpg",
        "metadata": { "latitude": -33.86, "longitude": 151.21, "device": "tablet-04" }
    });
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/v1/site-logs", &sup_token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let log = body_json(response).await;
    let log_id = log["id"].as_i64().unwrap();
    assert_eq!(log["metadata"]["device"], "tablet-04");
    assert!(log["supervisor_id"].is_number());

    // Clients read the project's logs.
    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/site-logs?project_id={project_id}"),
        &client_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    // And comment on a log; the author join is returned inline.
    let body = serde_json::json!({ "content": "Looks good, please proceed." });
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/site-logs/{log_id}/comments"),
        &client_token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let comment = body_json(response).await;
    assert_eq!(comment["author_role"], "client");
    assert_eq!(comment["author_email"], "cl@site.test");

    let response = get_auth(
        build_test_app(pool),
        &format!("/api/v1/site-logs/{log_id}/comments"),
        &sup_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

/// Logging against a missing project is a 404, not a raw constraint error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_site_log_unknown_project(pool: PgPool) {
    let sup_token =
        token_for_role(&pool, build_test_app(pool.clone()), "sup2@site.test", Role::Supervisor)
            .await;

    let body = serde_json::json!({ "project_id": 999, "description": "ghost project" });
    let response = post_json_auth(build_test_app(pool), "/api/v1/site-logs", &sup_token, body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// A new site log lands in the notification feed; marking read is scoped
/// to the caller.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_notifications_flow(pool: PgPool) {
    let (_admin, project_id) = seed_project_via_api(&pool, "adm4@site.test", "Depot 2").await;
    let sup_token =
        token_for_role(&pool, build_test_app(pool.clone()), "sup3@site.test", Role::Supervisor)
            .await;
    let client_token =
        token_for_role(&pool, build_test_app(pool.clone()), "cl2@site.test", Role::Client).await;

    let body = serde_json::json!({ "project_id": project_id, "description": "Slab poured" });
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/v1/site-logs", &sup_token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The broadcast shows up for another user.
    let response = get_auth(build_test_app(pool.clone()), "/api/v1/notifications", &client_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["type"], "site_log");
    let notification_id = items[0]["id"].as_i64().unwrap();

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/notifications/unread-count",
        &client_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);

    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/notifications/{notification_id}/read"),
        &client_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        build_test_app(pool),
        "/api/v1/notifications/unread-count",
        &client_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 0);
}

/// Dashboard overview counts projects and expiring permits; the
/// high-risk listing applies the tighter window.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_overview(pool: PgPool) {
    let (token, project_id) = seed_project_via_api(&pool, "adm5@site.test", "HQ Fitout").await;

    let today = chrono::Utc::now().date_naive();
    // Inside the high-risk window, and inside the warning window only.
    for (doc_name, days) in [("Fire safety permit", 7), ("Crane permit", 20)] {
        let body = serde_json::json!({
            "project_id": project_id,
            "doc_name": doc_name,
            "expiry_date": (today + chrono::Duration::days(days)).to_string()
        });
        let response =
            post_json_auth(build_test_app(pool.clone()), "/api/v1/permits", &token, body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/dashboard/overview", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["active_projects"], 1);
    assert_eq!(json["completed_projects"], 0);
    assert_eq!(json["expiring_permits"], 2);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/dashboard/high-risk-permits",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0]["doc_name"], "Fire safety permit");
    assert_eq!(json[0]["days_remaining"], 7);

    let response = get_auth(build_test_app(pool), "/api/v1/dashboard/progress", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0]["name"], "HQ Fitout");
    assert_eq!(json[0]["progress_percent"], 0);
}

/// The high-risk permit listing is for the admin analytics view only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_high_risk_permits_admin_only(pool: PgPool) {
    let token = token_for_role(
        &pool,
        build_test_app(pool.clone()),
        "sup-hr@site.test",
        Role::Supervisor,
    )
    .await;
    let response = get_auth(
        build_test_app(pool),
        "/api/v1/dashboard/high-risk-permits",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Uploads
// ---------------------------------------------------------------------------

/// Build a multipart request body with a `bucket` field and a `file` field.
fn multipart_body(boundary: &str, bucket: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"bucket\"\r\n\r\n{bucket}\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

async fn upload(
    pool: PgPool,
    token: &str,
    bucket: &str,
    filename: &str,
    data: &[u8],
) -> axum::response::Response {
    use tower::ServiceExt;

    let boundary = "gantry-test-boundary";
    let body = multipart_body(boundary, bucket, filename, data);
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/uploads")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header("authorization", format!("Bearer {token}"))
        .body(axum::body::Body::from(body))
        .unwrap();
    build_test_app(pool).oneshot(request).await.unwrap()
}

/// A supervisor can upload a site photo; the returned URL is bucketed.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_site_photo(pool: PgPool) {
    let token = token_for_role(
        &pool,
        build_test_app(pool.clone()),
        "sup-up@site.test",
        Role::Supervisor,
    )
    .await;

    let response = upload(pool, &token, "site-photos", "slab-pour.jpg", b"file contents").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let url = json["url"].as_str().unwrap();
    assert!(url.starts_with("/uploads/site-photos/"));
    assert!(url.ends_with(".jpg"));
    assert_eq!(json["size_bytes"], 13);
}

/// Unknown buckets and unsupported extensions are rejected up front.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_validation(pool: PgPool) {
    let token = token_for_role(
        &pool,
        build_test_app(pool.clone()),
        "sup-up2@site.test",
        Role::Supervisor,
    )
    .await;

    let response = upload(pool.clone(), &token, "secrets", "slab-pour.jpg", b"file contents").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = upload(pool.clone(), &token, "site-photos", "malware.exe", b"file contents").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Clients cannot upload at all.
    let client_token = token_for_role(
        &pool,
        build_test_app(pool.clone()),
        "cli-up@site.test",
        Role::Client,
    )
    .await;
    let response = upload(pool, &client_token, "site-photos", "photo.jpg", b"file contents").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Uploads above axum's 2 MB default body limit but within the cap go
/// through; files past the cap are rejected by the handler.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_size_limits(pool: PgPool) {
    let token = token_for_role(
        &pool,
        build_test_app(pool.clone()),
        "sup-up3@site.test",
        Role::Supervisor,
    )
    .await;

    let three_mb = vec![0xA5u8; 3 * 1024 * 1024];
    let response = upload(pool.clone(), &token, "site-photos", "panorama.jpg", &three_mb).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["size_bytes"], 3 * 1024 * 1024);

    let over_cap = vec![0xA5u8; 10 * 1024 * 1024 + 1];
    let response = upload(pool, &token, "site-photos", "too-big.jpg", &over_cap).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
