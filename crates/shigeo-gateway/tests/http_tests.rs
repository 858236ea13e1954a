// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router-level tests for the gateway endpoints.

use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use shigeo_agent::Orchestrator;
use shigeo_core::{AdapterType, HealthStatus, PluginAdapter, ShigeoError, UserId};
use shigeo_gateway::{GatewayState, ImageStore, router};
use shigeo_test_utils::{InMemoryStore, MockProvider, MockVision};
use tower::ServiceExt;

const BOUNDARY: &str = "shigeo-test-boundary";

struct Fixture {
    provider: Arc<MockProvider>,
    vision: Arc<MockVision>,
    store: Arc<InMemoryStore>,
    images: tempfile::TempDir,
}

impl Fixture {
    fn new(responses: &[&str], vision_answers: &[&str]) -> Self {
        Self {
            provider: Arc::new(MockProvider::with_responses(
                responses.iter().map(|s| s.to_string()).collect(),
            )),
            vision: Arc::new(MockVision::with_answers(
                vision_answers.iter().map(|s| s.to_string()).collect(),
            )),
            store: Arc::new(InMemoryStore::new()),
            images: tempfile::tempdir().unwrap(),
        }
    }

    fn state_with(&self, extra: Vec<Arc<dyn PluginAdapter>>) -> GatewayState {
        let orchestrator = Orchestrator::new(
            self.provider.clone(),
            self.vision.clone(),
            self.store.clone(),
        );
        let mut adapters: Vec<Arc<dyn PluginAdapter>> = vec![
            self.provider.clone(),
            self.vision.clone(),
            self.store.clone(),
        ];
        adapters.extend(extra);
        GatewayState {
            orchestrator: Arc::new(orchestrator),
            images: ImageStore::new(self.images.path()),
            adapters: Arc::new(adapters),
        }
    }

    fn app(&self) -> axum::Router {
        router(self.state_with(Vec::new()), 1024 * 1024)
    }
}

fn png_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([10, 200, 10]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

/// Builds a multipart body from text fields and an optional image part.
fn multipart(fields: &[(&str, &str)], image: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(bytes) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"photo.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn answer_request(body: Vec<u8>) -> Request<Body> {
    Request::post("/answer_question/")
        .header("content-length", body.len())
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn visual_question_is_answered_and_image_stored() {
    let fx = Fixture::new(&["YES", "The shirt is blue."], &["blue"]);
    let body = multipart(
        &[("question", "What color is my shirt?"), ("user_id", "alice")],
        Some(&png_bytes()),
    );

    let resp = fx.app().oneshot(answer_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        serde_json::json!({"answer": "The shirt is blue."})
    );

    let stored = fx.images.path().join("alice.jpg");
    assert!(stored.exists());
    let vqa = fx.vision.requests().await;
    assert_eq!(vqa.len(), 1);
    assert_eq!(vqa[0].image.as_str(), stored.to_string_lossy());
    assert!(fx.store.raw(&UserId::from("alice")).await.is_some());
}

#[tokio::test]
async fn conversational_question_skips_vision() {
    let fx = Fixture::new(&["NO", "I am Shigeo."], &[]);
    let body = multipart(
        &[("question", "Who are you?"), ("user_id", "bob")],
        Some(&png_bytes()),
    );

    let resp = fx.app().oneshot(answer_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["answer"], "I am Shigeo.");
    assert_eq!(fx.vision.call_count().await, 0);
}

#[tokio::test]
async fn missing_image_is_bad_request() {
    let fx = Fixture::new(&[], &[]);
    let body = multipart(&[("question", "What is this?"), ("user_id", "alice")], None);

    let resp = fx.app().oneshot(answer_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = json_body(resp).await;
    assert!(json["error"].as_str().unwrap().contains("image"));
    assert_eq!(fx.provider.call_count().await, 0);
}

#[tokio::test]
async fn undecodable_image_is_bad_request() {
    let fx = Fixture::new(&[], &[]);
    let body = multipart(
        &[("question", "What is this?"), ("user_id", "alice")],
        Some(b"definitely not a picture"),
    );

    let resp = fx.app().oneshot(answer_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(fx.provider.call_count().await, 0);
}

#[tokio::test]
async fn path_like_user_id_is_rejected() {
    let fx = Fixture::new(&[], &[]);
    let body = multipart(
        &[("question", "What is this?"), ("user_id", "../../etc/passwd")],
        Some(&png_bytes()),
    );

    let resp = fx.app().oneshot(answer_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(fx.store.touched().await.is_empty());
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let fx = Fixture::new(&["YES"], &[]);
    fx.vision.fail_next("replicate unavailable").await;
    let body = multipart(
        &[("question", "What is on the table?"), ("user_id", "carol")],
        Some(&png_bytes()),
    );

    let resp = fx.app().oneshot(answer_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert!(
        json_body(resp).await["error"]
            .as_str()
            .unwrap()
            .contains("replicate unavailable")
    );
    assert!(fx.store.raw(&UserId::from("carol")).await.is_none());
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let fx = Fixture::new(&[], &[]);
    let app = router(fx.state_with(Vec::new()), 64);
    let body = multipart(
        &[("question", "What is this?"), ("user_id", "alice")],
        Some(&png_bytes()),
    );

    let resp = app.oneshot(answer_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

struct SickAdapter;

#[async_trait]
impl PluginAdapter for SickAdapter {
    fn name(&self) -> &str {
        "sick"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, ShigeoError> {
        Ok(HealthStatus::Unhealthy("not initialized".into()))
    }

    async fn shutdown(&self) -> Result<(), ShigeoError> {
        Ok(())
    }
}

#[tokio::test]
async fn health_reports_every_adapter() {
    let fx = Fixture::new(&[], &[]);
    let resp = fx
        .app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["adapters"]["mock-provider"], "healthy");
    assert_eq!(json["adapters"]["in-memory"], "healthy");
}

#[tokio::test]
async fn unhealthy_adapter_degrades_health() {
    let fx = Fixture::new(&[], &[]);
    let app = router(fx.state_with(vec![Arc::new(SickAdapter)]), 1024);
    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let json = json_body(resp).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["adapters"]["sick"], "unhealthy: not initialized");
}
