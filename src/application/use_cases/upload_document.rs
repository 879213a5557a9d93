use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::application::DocumentChatService;
use crate::domain::{DocumentUploadResponse, RequestError};

pub struct UploadDocumentUseCase {
    document_chat: Arc<dyn DocumentChatService>,
}

impl UploadDocumentUseCase {
    pub fn new(document_chat: Arc<dyn DocumentChatService>) -> Self {
        Self { document_chat }
    }

    /// Read the file at `path` and upload it as a single multipart field.
    pub async fn execute(&self, path: &Path) -> Result<DocumentUploadResponse, RequestError> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                RequestError::invalid_input(format!("not a file path: {}", path.display()))
            })?
            .to_string();

        let content = tokio::fs::read(path).await?;
        if content.is_empty() {
            return Err(RequestError::invalid_input(format!(
                "file is empty: {}",
                path.display()
            )));
        }

        info!("Uploading {} ({} bytes)", filename, content.len());

        self.document_chat.upload_document(&filename, content).await
    }
}
