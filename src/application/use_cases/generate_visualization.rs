use std::sync::Arc;

use tracing::info;

use crate::application::DocumentChatService;
use crate::domain::{
    RequestError, VisualizationRequest, VisualizationResponse, VisualizationType,
};

pub struct GenerateVisualizationUseCase {
    document_chat: Arc<dyn DocumentChatService>,
}

impl GenerateVisualizationUseCase {
    pub fn new(document_chat: Arc<dyn DocumentChatService>) -> Self {
        Self { document_chat }
    }

    pub async fn execute(
        &self,
        document_id: &str,
        visualization_type: VisualizationType,
        columns: Vec<String>,
    ) -> Result<VisualizationResponse, RequestError> {
        if document_id.trim().is_empty() {
            return Err(RequestError::invalid_input("document id must not be empty"));
        }
        if columns.is_empty() {
            return Err(RequestError::invalid_input(
                "at least one column is required",
            ));
        }
        if columns.iter().any(|c| c.trim().is_empty()) {
            return Err(RequestError::invalid_input("column names must not be blank"));
        }

        info!(
            "Generating {} visualization for {} over {} columns",
            visualization_type,
            document_id,
            columns.len()
        );

        let request = VisualizationRequest::new(document_id, visualization_type, columns);
        self.document_chat.generate_visualization(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockDocumentChat;

    #[tokio::test]
    async fn test_missing_columns_are_rejected() {
        let use_case = GenerateVisualizationUseCase::new(Arc::new(MockDocumentChat::new()));
        let err = use_case
            .execute("doc-1", VisualizationType::Bar, vec![])
            .await
            .unwrap_err();

        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_blank_document_id_is_rejected() {
        let use_case = GenerateVisualizationUseCase::new(Arc::new(MockDocumentChat::new()));
        let err = use_case
            .execute("  ", VisualizationType::Line, vec!["value".to_string()])
            .await
            .unwrap_err();

        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_visualization_returns_asset_url() {
        let chat = Arc::new(MockDocumentChat::new());
        let upload = chat
            .upload_document("data.csv", b"a,b\n1,2\n".to_vec())
            .await
            .unwrap();

        let use_case = GenerateVisualizationUseCase::new(chat);
        let response = use_case
            .execute(
                upload.document_id(),
                VisualizationType::Pie,
                vec!["category".to_string(), "value".to_string()],
            )
            .await
            .unwrap();

        assert!(response.image_url().contains("pie"));
    }
}
