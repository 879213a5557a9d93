use std::sync::Arc;

use tracing::info;

use crate::application::DocumentChatService;
use crate::domain::{DocumentQueryRequest, QueryResponse, RequestError};

pub struct QueryDocumentUseCase {
    document_chat: Arc<dyn DocumentChatService>,
}

impl QueryDocumentUseCase {
    pub fn new(document_chat: Arc<dyn DocumentChatService>) -> Self {
        Self { document_chat }
    }

    /// Ask a question about a document.
    ///
    /// An absent `document_id` is forwarded unchanged; which document the
    /// question then targets is the server's decision.
    pub async fn execute(
        &self,
        text: &str,
        document_id: Option<String>,
    ) -> Result<QueryResponse, RequestError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RequestError::invalid_input("query text must not be empty"));
        }

        let mut request = DocumentQueryRequest::new(text);
        if let Some(id) = document_id {
            request = request.with_document_id(id);
        }

        info!("Querying document (id={:?})", request.document_id());

        self.document_chat.query_document(&request).await
    }
}
