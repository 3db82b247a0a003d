use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

use crate::application::http::{
    detection::upload::MAX_UPLOAD_BODY_BYTES,
    server::http_server::{router, state},
};
use crate::args::Args;

const VISION_REPLY: &str = r#"Here is what I found:
[
  {"name": "Fresh Garlic", "confidence": 0.92, "category": "vegetable", "description": "two bulbs"},
  {"name": "Kale", "confidence": 0.81, "category": "vegetable", "description": "a bunch"},
  {"name": "Paper Towels", "confidence": 0.9, "category": "other", "description": "a roll"},
  {"name": "Mystery Jar", "confidence": 0.1, "category": "pantry", "description": "unlabeled"}
]"#;

const RECIPE_REPLY: &str = "Recipe 1\nName: Garlic Kale Omelette\nIngredients:\n- 2 eggs\n- 1 cup kale\nInstructions:\n1. Saute the kale.\n2. Add the eggs.\nTotal time: 15 minutes";

struct TestApp {
    server: TestServer,
    llm: MockServer,
    dir: TempDir,
}

async fn spawn_app() -> TestApp {
    spawn_app_with(&[]).await
}

async fn spawn_app_with(extra_args: &[&str]) -> TestApp {
    let llm = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let prompt_path = dir.path().join("recipe_prompt.txt");
    std::fs::write(&prompt_path, "Cook with {ingredients}. Mood: {mood}").unwrap();

    let upload_dir = dir.path().join("uploads");
    let llm_uri = llm.uri();
    let mut argv = vec![
        "chefai",
        "--openai-api-key",
        "test-key",
        "--openai-base-url",
        llm_uri.as_str(),
        "--upload-dir",
        upload_dir.to_str().unwrap(),
        "--recipe-prompt-path",
        prompt_path.to_str().unwrap(),
        "--allowed-origins",
        "http://localhost:3333",
    ];
    argv.extend_from_slice(extra_args);
    let args = Args::try_parse_from(argv).unwrap();

    let app_state = state(Arc::new(args)).unwrap();
    let server = TestServer::new(router(app_state).unwrap()).unwrap();

    TestApp { server, llm, dir }
}

fn completion(content: &str) -> Value {
    json!({
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
}

async fn mock_vision(llm: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({"model": "gpt-4o"})))
        .respond_with(response)
        .mount(llm)
        .await;
}

async fn mock_text(llm: &MockServer, response: ResponseTemplate, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({"model": "gpt-4o-mini"})))
        .respond_with(response)
        .expect(calls)
        .mount(llm)
        .await;
}

fn photo(file_name: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(b"fake-image-bytes".to_vec())
            .file_name(file_name)
            .mime_type("image/png"),
    )
}

#[tokio::test]
async fn test_index_renders_picker() {
    let app = spawn_app().await;

    let response = app.server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Upload Your Fridge Photo"));
    assert!(html.contains(r#"name="common" value="eggs""#));
    assert!(html.contains("🚀 Quick &amp; Easy (5-15 minutes)"));
    assert!(html.contains("Ready to get cooking?"));
    assert!(html.contains(r#"formaction="/analyze" formenctype="multipart/form-data""#));
}

#[tokio::test]
async fn test_api_detection_returns_ranked_suggestions() {
    let app = spawn_app().await;
    mock_vision(
        &app.llm,
        ResponseTemplate::new(200).set_body_json(completion(VISION_REPLY)),
    )
    .await;

    let response = app
        .server
        .post("/api/detections")
        .multipart(photo("fridge.png"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["suggestions"], json!(["garlic", "kale"]));
    assert_eq!(body["data"]["detections"].as_array().unwrap().len(), 3);
    assert!(app.dir.path().join("uploads").join("fridge.png").exists());
}

#[tokio::test]
async fn test_api_detection_rejects_unsupported_type() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/detections")
        .multipart(photo("fridge.gif"))
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("gif"));
}

#[tokio::test]
async fn test_api_detection_requires_image_field() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/detections")
        .multipart(MultipartForm::new().add_text("note", "no photo"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_detection_vision_failure_is_bad_gateway() {
    let app = spawn_app().await;
    mock_vision(&app.llm, ResponseTemplate::new(500).set_body_string("boom")).await;

    let response = app
        .server
        .post("/api/detections")
        .multipart(photo("fridge.jpg"))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_oversized_upload_is_payload_too_large() {
    let app = spawn_app().await;
    let oversized = || {
        MultipartForm::new().add_part(
            "image",
            Part::bytes(vec![0u8; MAX_UPLOAD_BODY_BYTES + 1])
                .file_name("fridge.png")
                .mime_type("image/png"),
        )
    };

    let api = app
        .server
        .post("/api/detections")
        .multipart(oversized())
        .await;
    api.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = api.json();
    assert!(body["message"].as_str().unwrap().starts_with("Image too large"));

    let page = app.server.post("/analyze").multipart(oversized()).await;
    page.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert!(page.text().contains("Image too large"));

    assert!(app.llm.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_routes_live_under_root_path() {
    let app = spawn_app_with(&["--server-root-path", "/chefai"]).await;

    app.server.get("/chefai").await.assert_status_ok();
    let index = app.server.get("/chefai/").await;
    index.assert_status_ok();
    assert!(index.text().contains(r#"action="/chefai/recipes""#));

    let health: Value = app.server.get("/chefai/health").await.json();
    assert_eq!(health["status"], "ok");

    let catalog: Value = app.server.get("/chefai/api/catalog").await.json();
    assert_eq!(catalog["data"].as_array().unwrap().len(), 5);

    let openapi: Value = app.server.get("/chefai/api-docs/openapi.json").await.json();
    assert!(openapi["paths"].get("/chefai/api/detections").is_some());

    app.server
        .get("/health")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analyze_page_keeps_picker_state() {
    let app = spawn_app().await;
    mock_vision(
        &app.llm,
        ResponseTemplate::new(200).set_body_json(completion(VISION_REPLY)),
    )
    .await;

    let form = MultipartForm::new()
        .add_text("suggested", "milk")
        .add_text("ai", "milk")
        .add_text("common", "eggs")
        .add_text("custom", "feta, rice")
        .add_text("mood", "🍖 Hearty & Filling")
        .add_part(
            "image",
            Part::bytes(b"fake-image-bytes".to_vec())
                .file_name("fridge.png")
                .mime_type("image/png"),
        );

    let response = app.server.post("/analyze").multipart(form).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"<input type="hidden" name="suggested" value="garlic">"#));
    assert!(!html.contains(r#"name="suggested" value="milk""#));
    assert!(!html.contains(r#"name="ai" value="milk""#));
    assert!(html.contains(r#"name="common" value="eggs" checked>"#));
    assert!(html.contains("feta, rice</textarea>"));
    assert!(html.contains(r#"<option value="🍖 Hearty &amp; Filling" selected>"#));
}

#[tokio::test]
async fn test_analyze_page_without_photo_keeps_picks() {
    let app = spawn_app().await;

    let form = MultipartForm::new().add_text("common", "eggs").add_part(
        "image",
        Part::bytes(Vec::new())
            .file_name("")
            .mime_type("application/octet-stream"),
    );

    let response = app.server.post("/analyze").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let html = response.text();
    assert!(html.contains("Please choose a photo to analyze"));
    assert!(html.contains(r#"name="common" value="eggs" checked>"#));
    assert!(app.llm.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_analyze_page_carries_suggestions() {
    let app = spawn_app().await;
    mock_vision(
        &app.llm,
        ResponseTemplate::new(200).set_body_json(completion(VISION_REPLY)),
    )
    .await;

    let response = app.server.post("/analyze").multipart(photo("fridge.png")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("✨ Detected 2 ingredients!"));
    assert!(html.contains(r#"<input type="hidden" name="suggested" value="garlic">"#));
    assert!(html.contains(r#"name="ai" value="kale">"#));
}

#[tokio::test]
async fn test_analyze_page_with_prose_reply_shows_no_results() {
    let app = spawn_app().await;
    mock_vision(
        &app.llm,
        ResponseTemplate::new(200).set_body_json(completion("I see an apple.")),
    )
    .await;

    let response = app.server.post("/analyze").multipart(photo("fridge.png")).await;

    response.assert_status_ok();
    assert!(response.text().contains("No ingredients could be detected"));
}

#[tokio::test]
async fn test_analyze_page_shows_vision_error() {
    let app = spawn_app().await;
    mock_vision(&app.llm, ResponseTemplate::new(503)).await;

    let response = app.server.post("/analyze").multipart(photo("fridge.png")).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let html = response.text();
    assert!(html.contains("Error processing image"));
    assert!(!html.contains(r#"name="suggested""#));
}

#[tokio::test]
async fn test_recipes_page_renders_layout_and_stats() {
    let app = spawn_app().await;
    mock_text(
        &app.llm,
        ResponseTemplate::new(200).set_body_json(completion(RECIPE_REPLY)),
        1,
    )
    .await;

    let response = app
        .server
        .post("/recipes")
        .form(&[
            ("suggested", "garlic"),
            ("suggested", "kale"),
            ("ai", "kale"),
            ("common", "eggs"),
            ("custom", "feta, kale"),
            ("mood", "🥗 Healthy & Nutritious"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Your Selected Ingredients (3)"));
    assert!(html.contains("<div class=\"recipe-1\">"));
    assert!(html.contains("<li>Saute the kale.</li>"));
    assert!(html.contains("<div class=\"stat-card\"><h3>1</h3><p>AI Detected</p></div>"));
    assert!(html.contains("<div class=\"stat-card\"><h3>3</h3><p>Manually Added</p></div>"));

    let requests = app.llm.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body["messages"][1]["content"],
        "Cook with kale, eggs, feta. Mood: 🥗 Healthy & Nutritious"
    );
}

#[tokio::test]
async fn test_recipes_page_with_nothing_selected_skips_model() {
    let app = spawn_app().await;
    mock_text(&app.llm, ResponseTemplate::new(200), 0).await;

    let response = app
        .server
        .post("/recipes")
        .form(&[("suggested", "garlic"), ("custom", " , ")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Ready to get cooking?"));
}

#[tokio::test]
async fn test_recipes_page_shows_generation_error() {
    let app = spawn_app().await;
    mock_text(&app.llm, ResponseTemplate::new(429), 1).await;

    let response = app
        .server
        .post("/recipes")
        .form(&[("common", "rice")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("**Error:** Error generating recipes:"));
    assert!(html.contains("check your OpenAI API configuration"));
}

#[tokio::test]
async fn test_recipes_page_rejects_unknown_mood() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/recipes")
        .form(&[("common", "rice"), ("mood", "Sleepy")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Unknown cooking mood: Sleepy"));
}

#[tokio::test]
async fn test_api_recipes_generated_and_failed() {
    let app = spawn_app().await;
    mock_text(
        &app.llm,
        ResponseTemplate::new(200).set_body_json(completion(RECIPE_REPLY)),
        1,
    )
    .await;

    let response = app
        .server
        .post("/api/recipes")
        .json(&json!({
            "ingredients": ["chicken", " cheese ", "onions", "chicken", ""],
            "mood": "🚀 Quick & Easy (5-15 minutes)"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "generated");
    assert_eq!(body["ingredients"], json!(["chicken", "cheese", "onions"]));
    assert!(
        body["text"]
            .as_str()
            .unwrap()
            .starts_with("**Your AI-Generated Recipes:**\n\nRecipe 1")
    );

    app.llm.reset().await;
    mock_text(&app.llm, ResponseTemplate::new(500), 1).await;

    let response = app
        .server
        .post("/api/recipes")
        .json(&json!({"ingredients": ["chicken"]}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "failed");
    assert!(body["text"].as_str().unwrap().starts_with("**Error:**"));
}

#[tokio::test]
async fn test_api_recipes_validation() {
    let app = spawn_app().await;

    let empty = app
        .server
        .post("/api/recipes")
        .json(&json!({"ingredients": []}))
        .await;
    empty.assert_status(StatusCode::BAD_REQUEST);

    let blank = app
        .server
        .post("/api/recipes")
        .json(&json!({"ingredients": ["  "]}))
        .await;
    blank.assert_status(StatusCode::BAD_REQUEST);

    let bad_mood = app
        .server
        .post("/api/recipes")
        .json(&json!({"ingredients": ["rice"], "mood": "Sleepy"}))
        .await;
    bad_mood.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_recipes_missing_template_is_server_error() {
    let app = spawn_app().await;
    std::fs::remove_file(app.dir.path().join("recipe_prompt.txt")).unwrap();
    mock_text(&app.llm, ResponseTemplate::new(200), 0).await;

    let response = app
        .server
        .post("/api/recipes")
        .json(&json!({"ingredients": ["rice"]}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Recipe prompt template unavailable")
    );
}

#[tokio::test]
async fn test_catalog_moods_health_and_openapi() {
    let app = spawn_app().await;

    let catalog: Value = app.server.get("/api/catalog").await.json();
    assert_eq!(catalog["data"].as_array().unwrap().len(), 5);
    assert_eq!(catalog["data"][0]["name"], "Proteins");

    let moods: Value = app.server.get("/api/moods").await.json();
    assert_eq!(moods["data"].as_array().unwrap().len(), 6);
    assert_eq!(moods["data"][5], "👨‍👩‍👧‍👦 Family-Friendly");

    let health: Value = app.server.get("/health").await.json();
    assert_eq!(health["status"], "ok");

    let openapi: Value = app.server.get("/api-docs/openapi.json").await.json();
    assert!(openapi["paths"].get("/api/detections").is_some());
    assert!(openapi["paths"].get("/api/recipes").is_some());
    assert!(openapi["paths"].get("/health").is_some());
}
