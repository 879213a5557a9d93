use async_trait::async_trait;
use reqwest::multipart;
use serde_json::Value;

use crate::application::DocumentChatService;
use crate::connector::ApiClient;
use crate::domain::{
    DocumentQueryRequest, DocumentUploadResponse, QueryResponse, RequestError, SqlQueryRequest,
    VisualizationRequest, VisualizationResponse,
};

const UPLOAD_PATH: &str = "/document-chat/upload";
const QUERY_PATH: &str = "/document-chat/query";
const SQL_QUERY_PATH: &str = "/document-chat/sqlite/query";
const VISUALIZATION_PATH: &str = "/document-chat/visualization";

/// HTTP client for the document-chat endpoints.
///
/// A stateless pass-through to [`ApiClient`]: no validation is performed here
/// (constraints such as non-empty text or a known document id are the
/// server's to enforce), and no per-document state is kept between calls.
#[derive(Clone)]
pub struct DocumentChatClient {
    api: ApiClient,
}

impl DocumentChatClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DocumentChatService for DocumentChatClient {
    async fn upload_document(
        &self,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<DocumentUploadResponse, RequestError> {
        // Single multipart field named "file", mirroring what the server expects.
        let part = multipart::Part::bytes(content).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);

        self.api.upload(UPLOAD_PATH, form).await
    }

    async fn query_document(
        &self,
        request: &DocumentQueryRequest,
    ) -> Result<QueryResponse, RequestError> {
        self.api.post(QUERY_PATH, request).await
    }

    async fn execute_sql_query(&self, request: &SqlQueryRequest) -> Result<Value, RequestError> {
        self.api.post(SQL_QUERY_PATH, request).await
    }

    async fn generate_visualization(
        &self,
        request: &VisualizationRequest,
    ) -> Result<VisualizationResponse, RequestError> {
        self.api.post(VISUALIZATION_PATH, request).await
    }
}
