//! End-to-end tests for the typed clients over an in-process stub backend.

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Json;
use serde_json::{json, Value};

use docuchat::{
    ApiClient, ApiConfig, DocumentChatClient, DocumentChatService, DocumentQueryRequest,
    ImageGenerationClient, ImageGenerationRequest, ImageGenerationService, RequestError,
    SqlQueryRequest, VisualizationRequest, VisualizationType,
};

async fn spawn_server(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });

    format!("http://{addr}")
}

fn stub_backend() -> axum::Router {
    axum::Router::new()
        .route(
            "/document-chat/upload",
            post(|mut multipart: Multipart| async move {
                let mut filename = String::new();
                let mut field_count = 0;
                while let Some(field) = multipart.next_field().await.unwrap() {
                    field_count += 1;
                    assert_eq!(field.name(), Some("file"));
                    filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await.unwrap();
                    assert_eq!(&bytes[..], &b"id,name\n1,Widget\n"[..]);
                }
                assert_eq!(field_count, 1, "upload must carry exactly one field");

                Json(json!({
                    "document_id": "doc-42",
                    "filename": filename,
                    "message": "File uploaded and processed successfully"
                }))
            }),
        )
        .route(
            "/document-chat/query",
            post(|Json(body): Json<Value>| async move {
                // Echo back whether the optional id key was present on the wire.
                Json(json!({
                    "response": format!(
                        "text={} id_present={}",
                        body["text"].as_str().unwrap_or_default(),
                        body.get("document_id").is_some()
                    )
                }))
            }),
        )
        .route(
            "/document-chat/sqlite/query",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "columns": ["count"],
                    "rows": [[7]],
                    "echo": body["query"],
                }))
            }),
        )
        .route(
            "/document-chat/visualization",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["visualization_type"], "bar");
                assert_eq!(body["columns"], json!(["month", "revenue"]));
                Json(json!({"image_url": "/charts/doc-42-bar.png"}))
            }),
        )
        .route(
            "/image-generation",
            post(|Json(body): Json<Value>| async move {
                if body["prompt"].as_str().unwrap_or_default().len() > 100 {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"message": "prompt too long"})),
                    );
                }
                (
                    StatusCode::OK,
                    Json(json!({
                        "images": ["a.png", "b.png"],
                        "prompt": body["prompt"],
                    })),
                )
            }),
        )
}

async fn clients() -> (DocumentChatClient, ImageGenerationClient) {
    let base_url = spawn_server(stub_backend()).await;
    let api = ApiClient::new(ApiConfig::new(base_url));
    (
        DocumentChatClient::new(api.clone()),
        ImageGenerationClient::new(api),
    )
}

#[tokio::test]
async fn test_upload_document_builds_single_file_field() {
    let (chat, _) = clients().await;

    let response = chat
        .upload_document("data.csv", b"id,name\n1,Widget\n".to_vec())
        .await
        .unwrap();

    assert_eq!(response.document_id(), "doc-42");
    assert_eq!(response.filename(), "data.csv");
}

#[tokio::test]
async fn test_query_document_with_and_without_id() {
    let (chat, _) = clients().await;

    let with_id = chat
        .query_document(&DocumentQueryRequest::new("total?").with_document_id("doc-42"))
        .await
        .unwrap();
    assert_eq!(with_id.response(), "text=total? id_present=true");

    let without_id = chat
        .query_document(&DocumentQueryRequest::new("total?"))
        .await
        .unwrap();
    assert_eq!(without_id.response(), "text=total? id_present=false");
}

#[tokio::test]
async fn test_execute_sql_query_returns_raw_json() {
    let (chat, _) = clients().await;

    let value = chat
        .execute_sql_query(&SqlQueryRequest::new("how many widgets?"))
        .await
        .unwrap();

    assert_eq!(value["columns"], json!(["count"]));
    assert_eq!(value["rows"], json!([[7]]));
    assert_eq!(value["echo"], "how many widgets?");
}

#[tokio::test]
async fn test_generate_visualization_round_trip() {
    let (chat, _) = clients().await;

    let request = VisualizationRequest::new(
        "doc-42",
        VisualizationType::Bar,
        vec!["month".to_string(), "revenue".to_string()],
    );
    let response = chat.generate_visualization(&request).await.unwrap();

    assert_eq!(response.image_url(), "/charts/doc-42-bar.png");
}

#[tokio::test]
async fn test_generate_images_success_and_rejection() {
    let (_, images) = clients().await;

    let response = images
        .generate_images(
            &ImageGenerationRequest::new("a cat")
                .with_count(2)
                .with_size("512x512"),
        )
        .await
        .unwrap();
    assert_eq!(response.images(), ["a.png", "b.png"]);
    assert_eq!(response.prompt(), "a cat");

    let long_prompt = "x".repeat(200);
    let err = images
        .generate_images(&ImageGenerationRequest::new(long_prompt))
        .await
        .unwrap_err();
    match err {
        RequestError::Api(message) => assert_eq!(message, "prompt too long"),
        other => panic!("expected Api error, got {other:?}"),
    }
}
