//! End-to-end API tests over the full router.

use alice_api::{build_router, AppState, Config};
use alice_tenant::MemoryNotifier;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

const ADMIN_KEY: &str = "test-admin-key";

fn test_config() -> Config {
    Config {
        admin_key: ADMIN_KEY.into(),
        admin_email: "ops@example.com".into(),
        ..Config::default()
    }
}

fn server() -> TestServer {
    server_with_notifier().0
}

fn server_with_notifier() -> (TestServer, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::new());
    let state = AppState::with_notifier(test_config(), notifier.clone());
    (TestServer::new(build_router(state)).unwrap(), notifier)
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

#[tokio::test]
async fn health_endpoints() {
    let server = server();

    let body: Value = server.get("/").await.json();
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["service"], json!("Alice API"));

    let body: Value = server.get("/healthz").await.json();
    assert_eq!(body["ok"], json!(true));
}

#[tokio::test]
async fn welcome_requires_name_and_industry() {
    let server = server();

    let resp = server
        .post("/onboard/welcome")
        .json(&json!({ "businessName": "Thandi's Salon" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["error"], json!("businessName and industry required"));

    let resp = server
        .post("/onboard/welcome")
        .json(&json!({
            "businessName": "Thandi's Salon",
            "industry": "salon",
            "contact": "thandi@example.com"
        }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["ok"], json!(true));
    assert!(body["businessId"].is_string());
    assert_eq!(body["business"]["timezone"], json!("Africa/Johannesburg"));
}

#[tokio::test]
async fn identity_resolution_is_sticky_across_endpoints() {
    let server = server();

    let first: Value = server
        .post("/business/resolve")
        .json(&json!({ "businessName": "Acme", "industry": "salon", "contact": "a@x.com" }))
        .await
        .json();

    // Same contact alone resolves to the same business.
    let by_contact: Value = server
        .post("/business/resolve")
        .json(&json!({ "contact": "a@x.com" }))
        .await
        .json();
    assert_eq!(first["businessId"], by_contact["businessId"]);

    // Name+industry alone too, case-folded.
    let by_name: Value = server
        .post("/business/resolve")
        .json(&json!({ "businessName": "ACME ", "industry": "Salon" }))
        .await
        .json();
    assert_eq!(first["businessId"], by_name["businessId"]);
}

#[tokio::test]
async fn bookings_round_trip() {
    let server = server();

    let resp = server
        .post("/bookings")
        .json(&json!({ "businessName": "Acme", "industry": "salon" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);

    let resp = server
        .post("/bookings")
        .json(&json!({
            "businessName": "Acme",
            "industry": "salon",
            "clientName": "Lindiwe",
            "clientContact": "lindi@example.com",
            "service": "Cut & colour",
            "when": "2026-09-03T10:00"
        }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    let created: Value = resp.json();
    assert_eq!(created["booking"]["status"], json!("confirmed"));

    let list: Value = server
        .get("/bookings")
        .add_query_param("businessName", "Acme")
        .add_query_param("industry", "salon")
        .await
        .json();
    assert_eq!(list["businessId"], created["businessId"]);
    assert_eq!(list["bookings"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn leads_require_name_contact_service() {
    let server = server();

    let resp = server
        .post("/leads")
        .json(&json!({ "businessName": "Acme", "industry": "salon", "name": "Sam" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);

    let resp = server
        .post("/leads")
        .json(&json!({
            "businessName": "Acme",
            "industry": "salon",
            "name": "Sam",
            "clientContact": "sam@example.com",
            "service": "braids"
        }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["lead"]["contact"], json!("sam@example.com"));
}

#[tokio::test]
async fn faqs_seeded_and_replaceable() {
    let server = server();

    let list: Value = server
        .get("/faqs")
        .add_query_param("businessName", "Acme")
        .add_query_param("industry", "salon")
        .await
        .json();
    assert_eq!(list["items"].as_array().unwrap().len(), 2);

    let resp = server
        .post("/faqs")
        .json(&json!({ "businessName": "Acme", "industry": "salon" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);

    let resp = server
        .post("/faqs")
        .json(&json!({
            "businessName": "Acme",
            "industry": "salon",
            "items": [{ "q": "Parking?", "a": "Free on-site." }]
        }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let list: Value = server
        .get("/faqs")
        .add_query_param("businessName", "Acme")
        .add_query_param("industry", "salon")
        .await
        .json();
    assert_eq!(list["items"].as_array().unwrap().len(), 1);
    assert_eq!(list["items"][0]["q"], json!("Parking?"));
}

#[tokio::test]
async fn staff_login_agenda_and_attendance() {
    let server = server();

    let created: Value = server
        .post("/staff/create")
        .json(&json!({
            "businessName": "Acme",
            "industry": "salon",
            "name": "Noma",
            "nationalId": "9001011234567",
            "pin": "4321"
        }))
        .await
        .json();
    let staff_id = created["id"].as_str().unwrap().to_string();

    // Wrong pin
    let resp = server
        .post("/staff/login")
        .json(&json!({
            "businessName": "Acme",
            "industry": "salon",
            "name": "Noma",
            "nationalId": "9001011234567",
            "pin": "0000"
        }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);

    let login: Value = server
        .post("/staff/login")
        .json(&json!({
            "businessName": "Acme",
            "industry": "salon",
            "name": "Noma",
            "nationalId": "9001011234567",
            "pin": "4321"
        }))
        .await
        .json();
    let token = login["token"].as_str().unwrap().to_string();
    assert_eq!(login["staff"]["role"], json!("staff"));

    // No token → 401
    let resp = server.get("/staff/agenda").await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);

    // A booking assigned to this staff member shows up in the agenda.
    server
        .post("/bookings")
        .json(&json!({
            "businessName": "Acme",
            "industry": "salon",
            "clientName": "Lindiwe",
            "clientContact": "lindi@example.com",
            "service": "Cut",
            "when": "2026-09-03T10:00",
            "staffId": staff_id
        }))
        .await;

    let agenda: Value = server
        .get("/staff/agenda")
        .add_header(AUTHORIZATION, bearer(&token))
        .await
        .json();
    assert_eq!(agenda["bookings"].as_array().unwrap().len(), 1);

    let resp = server
        .post("/staff/clock-in")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let resp = server
        .post("/staff/overtime")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "hours": -2 }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);

    let entry: Value = server
        .post("/staff/overtime")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "hours": 2.5, "reason": "stocktake" }))
        .await
        .json();
    assert_eq!(entry["status"], json!("pending"));
}

#[tokio::test]
async fn free_tier_gates_after_forty_calls() {
    let server = server();
    let identity = json!({ "businessName": "Gated Co", "industry": "retail" });

    for i in 1..=40 {
        let resp = server.post("/insights/weekly").json(&identity).await;
        assert_eq!(resp.status_code(), StatusCode::OK, "call {i}");
    }

    let resp = server.post("/insights/weekly").json(&identity).await;
    assert_eq!(resp.status_code(), StatusCode::PAYMENT_REQUIRED);
    let body: Value = resp.json();
    assert_eq!(body["error"], json!("Subscription required"));
    assert_eq!(body["packages"].as_array().unwrap().len(), 6);

    // Still denied afterwards.
    let resp = server.post("/insights/forecast").json(&identity).await;
    assert_eq!(resp.status_code(), StatusCode::PAYMENT_REQUIRED);
}

#[tokio::test]
async fn forecast_math() {
    let server = server();

    let body: Value = server
        .post("/insights/forecast")
        .json(&json!({
            "businessName": "Numbers Co",
            "industry": "retail",
            "baselineWeeklyRevenue": 10000.0,
            "marketingSpend": 1500.0
        }))
        .await
        .json();

    assert_eq!(body["projectedWeeklyRevenue"], json!(11700.0));
    assert_eq!(body["estimatedRoi"], json!(0.13));
}

#[tokio::test]
async fn packages_catalog() {
    let server = server();

    let body: Value = server.get("/billing/packages").await.json();
    let packages = body.as_array().unwrap();
    assert_eq!(packages.len(), 6);
    assert_eq!(packages[0]["id"], json!("basic"));
    assert_eq!(packages[0]["price"], json!(150));
}

#[tokio::test]
async fn eft_flow_start_done_approve_status() {
    let (server, notifier) = server_with_notifier();
    let identity = json!({
        "businessName": "Zinhle Beauty",
        "industry": "salon",
        "contact": "zinhle@example.com"
    });

    let start: Value = server
        .post("/billing/eft/start")
        .json(&json!({ "packageId": "pro", "businessName": "Zinhle Beauty",
                       "industry": "salon", "contact": "zinhle@example.com" }))
        .await
        .json();
    assert_eq!(start["amount"], json!(250));
    assert!(start["message"].as_str().unwrap().contains("Reference: P-"));

    let done: Value = server
        .post("/billing/eft/done")
        .json(&json!({ "packageId": "pro", "businessName": "Zinhle Beauty",
                       "industry": "salon", "contact": "zinhle@example.com" }))
        .await
        .json();
    assert_eq!(done["ok"], json!(true));
    let token = done["token"].as_str().unwrap().to_string();

    // Operator got the claim notice with action links.
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].html.contains(&token));

    // Not active yet.
    let status: Value = server.post("/billing/status").json(&identity).await.json();
    assert_eq!(status["active"], json!(false));

    // Wrong operator key.
    let resp = server
        .get("/admin/approve")
        .add_query_param("token", &token)
        .add_query_param("days", "30")
        .add_query_param("key", "wrong")
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);

    // Approve for 30 days.
    let resp = server
        .get("/admin/approve")
        .add_query_param("token", &token)
        .add_query_param("days", "30")
        .add_query_param("key", ADMIN_KEY)
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert!(resp.text().contains("Approved"));

    let status: Value = server.post("/billing/status").json(&identity).await.json();
    assert_eq!(status["active"], json!(true));
    assert_eq!(status["packageId"], json!("pro"));
    assert!(status["currentPeriodEnd"].is_u64());

    // Double-clicked approve link.
    let resp = server
        .get("/admin/approve")
        .add_query_param("token", &token)
        .add_query_param("days", "30")
        .add_query_param("key", ADMIN_KEY)
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text(), "Invalid token");

    // Welcome mail went to the contact (operator claim + approval + welcome).
    let sent = notifier.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[2].to, "zinhle@example.com");
}

#[tokio::test]
async fn deny_is_quiet_for_unknown_tokens() {
    let server = server();

    let resp = server
        .get("/admin/deny")
        .add_query_param("token", "ZZZZZZ")
        .add_query_param("key", ADMIN_KEY)
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert!(resp.text().contains("Denied"));

    let resp = server
        .get("/admin/deny")
        .add_query_param("token", "ZZZZZZ")
        .add_query_param("key", "wrong")
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn paid_entitlement_does_not_unlock_other_packages() {
    let (server, _notifier) = server_with_notifier();
    let identity = json!({ "businessName": "Exact Co", "industry": "retail" });

    // Stage and approve an elite subscription.
    let done: Value = server
        .post("/billing/eft/done")
        .json(&json!({ "packageId": "elite", "businessName": "Exact Co", "industry": "retail" }))
        .await
        .json();
    let token = done["token"].as_str().unwrap().to_string();
    server
        .get("/admin/approve")
        .add_query_param("token", &token)
        .add_query_param("days", "30")
        .add_query_param("key", ADMIN_KEY)
        .await;

    let status: Value = server.post("/billing/status").json(&identity).await.json();
    assert_eq!(status["packageId"], json!("elite"));

    // The basic-gated endpoints still burn the free counter: an elite
    // subscription is not a basic one.
    for _ in 0..40 {
        server.post("/insights/weekly").json(&identity).await;
    }
    let resp = server.post("/insights/weekly").json(&identity).await;
    assert_eq!(resp.status_code(), StatusCode::PAYMENT_REQUIRED);
}
