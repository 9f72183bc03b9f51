//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use catalog_admin::api::{AdminApi, SIGNIN_PATH};
use catalog_admin::auth::MemoryTokenStore;
use catalog_admin::console::RecordingNotifier;
use catalog_admin::{AdminConfig, AdminConsole, ApiPath, BaseUrl};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const STORE: &str = "test-store";
pub const PRODUCTS_PATH: &str = "/v2/api/test-store/admin/products/all";

pub type TestConsole = AdminConsole<MemoryTokenStore, RecordingNotifier>;

pub fn config_for(server: &MockServer) -> AdminConfig {
    AdminConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .api_path(ApiPath::new(STORE).unwrap())
        .build()
        .unwrap()
}

pub fn console_for(server: &MockServer) -> TestConsole {
    AdminConsole::new(
        AdminApi::new(&config_for(server)).unwrap(),
        MemoryTokenStore::new(),
        RecordingNotifier::default(),
    )
}

/// A sign-in body issuing `token` that expires in a day.
pub fn signin_body(token: &str) -> Value {
    let expires = (Utc::now() + Duration::days(1)).timestamp_millis();
    json!({
        "success": true,
        "message": "signed in",
        "uid": "uid-1",
        "token": token,
        "expired": expires
    })
}

/// A listing body with one product per title, keyed in the given order.
pub fn products_body(titles: &[&str]) -> Value {
    let mut products = serde_json::Map::new();
    for (index, title) in titles.iter().enumerate() {
        let id = format!("-key{}", titles.len() - index);
        products.insert(
            id.clone(),
            json!({
                "id": id,
                "title": title,
                "category": "coffee",
                "origin_price": 120,
                "price": 100,
                "is_enabled": 1,
                "unit": "cup",
                "imageUrl": "https://img.example.com/main.png",
                "imagesUrl": ["https://img.example.com/1.png", ""]
            }),
        );
    }
    json!({ "success": true, "products": products })
}

pub async fn mount_signin(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(signin_body(token)))
        .mount(server)
        .await;
}
