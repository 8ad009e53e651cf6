// HTTP contract tests for the tax-reclaimable endpoints, driven against the
// actix service in-process with the in-memory policy store.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use helpers::test_data::sample_policy;
use ratebook::middleware::{hash_api_key, AdminKeyAuth, RequestId};
use ratebook::modules::distance_rates::controllers::distance_rate_controller;
use ratebook::modules::distance_rates::services::DistanceRateService;
use ratebook::modules::policies::repositories::InMemoryPolicyRepository;

const ADMIN_KEY: &str = "test-admin-key";
const RATE_URI: &str = "/policies/p1/distance-rates/r50/tax-reclaimable";

fn rate_service() -> Arc<DistanceRateService> {
    let repo = Arc::new(InMemoryPolicyRepository::new());
    repo.insert(sample_policy());
    Arc::new(DistanceRateService::new(repo))
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .wrap(AdminKeyAuth::new(hash_api_key(ADMIN_KEY)))
                .wrap(RequestId)
                .app_data(web::Data::new(rate_service()))
                .configure(distance_rate_controller::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn get_returns_the_display_value() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri(RATE_URI)
        .insert_header(("X-API-Key", ADMIN_KEY))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["policyId"], "p1");
    assert_eq!(body["unitId"], "cu1");
    assert_eq!(body["rateId"], "r50");
    assert_eq!(body["value"], "10.0");
    assert_eq!(body["currency"], "USD");
}

#[actix_web::test]
async fn put_updates_the_stored_percentage() {
    let app = test_app!();

    let req = test::TestRequest::put()
        .uri(RATE_URI)
        .insert_header(("X-API-Key", ADMIN_KEY))
        .set_json(json!({ "taxClaimableValue": "15" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let stored = body["attributes"]["taxClaimablePercentage"]
        .as_str()
        .and_then(|s| s.parse::<Decimal>().ok())
        .expect("stored percentage should be a decimal string");
    assert_eq!(stored, dec!(30));
    assert_eq!(body["attributes"]["taxRateExternalID"], "vat-std");
}

#[actix_web::test]
async fn put_rejects_a_value_above_the_rate() {
    let app = test_app!();

    let req = test::TestRequest::put()
        .uri(RATE_URI)
        .insert_header(("X-API-Key", ADMIN_KEY))
        .set_json(json!({ "taxClaimableValue": "99" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["errors"]["taxClaimableValue"].is_string());
}

#[actix_web::test]
async fn unknown_rate_is_not_found() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/policies/p1/distance-rates/r-missing/tax-reclaimable")
        .insert_header(("X-API-Key", ADMIN_KEY))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn requests_without_an_admin_key_are_unauthorized() {
    let app = test_app!();

    let req = test::TestRequest::get().uri(RATE_URI).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
