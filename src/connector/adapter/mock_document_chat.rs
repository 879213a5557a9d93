use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use crate::application::DocumentChatService;
use crate::domain::{
    DocumentQueryRequest, DocumentUploadResponse, QueryResponse, RequestError, SqlQueryRequest,
    VisualizationRequest, VisualizationResponse,
};

/// In-memory stand-in for the document-chat backend.
///
/// Uploads are assigned UUID document ids and remembered for the lifetime of
/// the process; queries answer with canned content derived from the stored
/// filename. An omitted `document_id` resolves to the most recently uploaded
/// document, which is the server-side interpretation this repo commits to.
pub struct MockDocumentChat {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    documents: HashMap<String, String>,
    last_document_id: Option<String>,
}

impl MockDocumentChat {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    /// Resolve an optional document id against the stored uploads.
    fn resolve_document(&self, document_id: Option<&str>) -> Result<(String, String), RequestError> {
        let state = self.state.lock().expect("mock state poisoned");

        let id = match document_id {
            Some(id) => id.to_string(),
            None => state
                .last_document_id
                .clone()
                .ok_or_else(|| RequestError::api("No document has been uploaded yet"))?,
        };

        let filename = state
            .documents
            .get(&id)
            .cloned()
            .ok_or_else(|| RequestError::api(format!("Unknown document: {id}")))?;

        Ok((id, filename))
    }
}

impl Default for MockDocumentChat {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentChatService for MockDocumentChat {
    async fn upload_document(
        &self,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<DocumentUploadResponse, RequestError> {
        let document_id = Uuid::new_v4().to_string();

        debug!(
            "Mock upload of {} ({} bytes) as {}",
            filename,
            content.len(),
            document_id
        );

        let mut state = self.state.lock().expect("mock state poisoned");
        state
            .documents
            .insert(document_id.clone(), filename.to_string());
        state.last_document_id = Some(document_id.clone());

        Ok(DocumentUploadResponse::new(
            document_id,
            filename,
            "File uploaded and processed successfully",
        ))
    }

    async fn query_document(
        &self,
        request: &DocumentQueryRequest,
    ) -> Result<QueryResponse, RequestError> {
        let (_, filename) = self.resolve_document(request.document_id())?;

        Ok(QueryResponse::new(format!(
            "Based on the contents of {filename}: this is a mock answer to \"{}\".",
            request.text()
        )))
    }

    async fn execute_sql_query(&self, request: &SqlQueryRequest) -> Result<Value, RequestError> {
        self.resolve_document(request.document_id())?;

        // Sample table shaped like the dashboard's demo data.
        Ok(json!({
            "response": format!(
                "I've translated your query to SQL and executed it. Here are the results for \"{}\".",
                request.query()
            ),
            "columns": ["id", "name", "category", "value"],
            "rows": [
                [1, "Product A", "Electronics", 400],
                [2, "Product B", "Clothing", 300],
                [3, "Product C", "Electronics", 600],
            ],
        }))
    }

    async fn generate_visualization(
        &self,
        request: &VisualizationRequest,
    ) -> Result<VisualizationResponse, RequestError> {
        let (id, _) = self.resolve_document(Some(request.document_id()))?;

        if request.columns().is_empty() {
            return Err(RequestError::api("No columns selected"));
        }

        Ok(VisualizationResponse::new(format!(
            "/generated/{id}-{}.png",
            request.visualization_type()
        )))
    }
}
