//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::net::TcpListener;
use std::sync::Arc;

use roster::api::HttpStudentApi;
use roster::config::ApiConfig;
use roster::ui::app::App;
use serde_json::{json, Value};

use mock_backend::MockBackend;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// API config pointing at `base_url` with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
        ..ApiConfig::default()
    }
}

pub fn api_for(mock: &MockBackend) -> HttpStudentApi {
    HttpStudentApi::new(&api_config(&mock.base_url())).expect("api client")
}

pub fn app_for(mock: &MockBackend) -> App<HttpStudentApi> {
    App::new(Arc::new(api_for(mock)))
}

pub fn student_json(id: &str, name: &str, code: &str, active: bool) -> Value {
    json!({ "id": id, "name": name, "studentCode": code, "isActive": active })
}

/// `{ "success": true, "data": <data> }`
pub fn envelope(data: Value) -> String {
    json!({ "success": true, "data": data }).to_string()
}
