//! End-to-end tests for the mock backend driven through the use-case layer,
//! the same wiring the CLI uses with `--mock`.

use std::io::Write;

use docuchat::{Container, ContainerConfig, VisualizationType};

fn mock_container() -> Container {
    Container::new(ContainerConfig {
        api_url: None,
        mock: true,
    })
}

#[tokio::test]
async fn test_upload_then_query_without_id_targets_latest_document() {
    let container = mock_container();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"quarterly revenue figures").unwrap();
    let path = file.path().to_path_buf();

    let upload = container.upload_use_case().execute(&path).await.unwrap();
    assert!(!upload.document_id().is_empty());

    let answer = container
        .query_use_case()
        .execute("what does this cover?", None)
        .await
        .unwrap();
    let filename = path.file_name().unwrap().to_str().unwrap();
    assert!(answer.response().contains(filename));
}

#[tokio::test]
async fn test_full_visualization_flow() {
    let container = mock_container();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"month,revenue\nJan,100\nFeb,120\n").unwrap();

    let upload = container
        .upload_use_case()
        .execute(file.path())
        .await
        .unwrap();

    let chart = container
        .visualization_use_case()
        .execute(
            upload.document_id(),
            VisualizationType::Bar,
            vec!["month".to_string(), "revenue".to_string()],
        )
        .await
        .unwrap();

    assert!(chart.image_url().contains(upload.document_id()));
}

#[tokio::test]
async fn test_sql_flow_returns_tabular_payload() {
    let container = mock_container();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"sqlite payload").unwrap();
    container
        .upload_use_case()
        .execute(file.path())
        .await
        .unwrap();

    let value = container
        .sql_use_case()
        .execute("revenue by month", None)
        .await
        .unwrap();

    assert!(value["columns"].is_array());
    assert!(value["rows"].is_array());
    assert!(value["response"].is_string());
}

#[tokio::test]
async fn test_image_generation_is_deterministic_per_prompt() {
    let container = mock_container();

    let first = container
        .images_use_case()
        .execute("a mountain at sunset", Some(3), Some("512x512".to_string()))
        .await
        .unwrap();
    let second = container
        .images_use_case()
        .execute("a mountain at sunset", Some(3), Some("512x512".to_string()))
        .await
        .unwrap();

    assert_eq!(first.images(), second.images());
    assert_eq!(first.images().len(), 3);
    assert_eq!(first.prompt(), "a mountain at sunset");
}

#[tokio::test]
async fn test_validation_happens_before_the_backend_is_reached() {
    let container = mock_container();

    // No upload happened, but the invalid input error wins regardless.
    let err = container
        .query_use_case()
        .execute("", None)
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());
}
