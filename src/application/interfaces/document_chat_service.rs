use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{
    DocumentQueryRequest, DocumentUploadResponse, QueryResponse, RequestError, SqlQueryRequest,
    VisualizationRequest, VisualizationResponse,
};

/// An interface for the document-chat operations.
///
/// Implementors encapsulate transport and serialization details. Consumers
/// (use cases, controllers) remain decoupled from any particular HTTP client
/// library, so the backend can be swapped for an in-memory mock in tests.
#[async_trait]
pub trait DocumentChatService: Send + Sync {
    /// Upload a document and receive its server-assigned identifier.
    async fn upload_document(
        &self,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<DocumentUploadResponse, RequestError>;

    /// Ask a natural-language question about an uploaded document.
    async fn query_document(
        &self,
        request: &DocumentQueryRequest,
    ) -> Result<QueryResponse, RequestError>;

    /// Run a natural-language query translated server-side to SQL.
    ///
    /// The response shape is server-defined, so callers receive the raw JSON.
    async fn execute_sql_query(&self, request: &SqlQueryRequest) -> Result<Value, RequestError>;

    /// Render a chart from document columns and return its asset location.
    async fn generate_visualization(
        &self,
        request: &VisualizationRequest,
    ) -> Result<VisualizationResponse, RequestError>;
}
