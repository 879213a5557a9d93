use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::application::DocumentChatService;
use crate::domain::{RequestError, SqlQueryRequest};

pub struct ExecuteSqlQueryUseCase {
    document_chat: Arc<dyn DocumentChatService>,
}

impl ExecuteSqlQueryUseCase {
    pub fn new(document_chat: Arc<dyn DocumentChatService>) -> Self {
        Self { document_chat }
    }

    /// Run a natural-language query against an uploaded database document.
    ///
    /// The server translates the text to SQL; the result shape is
    /// server-defined JSON.
    pub async fn execute(
        &self,
        query: &str,
        document_id: Option<String>,
    ) -> Result<Value, RequestError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(RequestError::invalid_input("query must not be empty"));
        }

        let mut request = SqlQueryRequest::new(query);
        if let Some(id) = document_id {
            request = request.with_document_id(id);
        }

        info!("Executing SQL query (id={:?})", request.document_id());

        self.document_chat.execute_sql_query(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockDocumentChat;

    #[tokio::test]
    async fn test_empty_query_is_rejected() {
        let use_case = ExecuteSqlQueryUseCase::new(Arc::new(MockDocumentChat::new()));
        let err = use_case.execute("", None).await.unwrap_err();

        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_sql_query_returns_tabular_json() {
        let chat = Arc::new(MockDocumentChat::new());
        chat.upload_document("sales.db", b"sqlite".to_vec())
            .await
            .unwrap();

        let use_case = ExecuteSqlQueryUseCase::new(chat);
        let value = use_case
            .execute("total sales by category", None)
            .await
            .unwrap();

        assert!(value.get("columns").is_some());
        assert!(value.get("rows").is_some());
    }
}
