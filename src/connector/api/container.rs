use std::sync::Arc;

use tracing::debug;

use crate::application::{
    DocumentChatService, ExecuteSqlQueryUseCase, GenerateImagesUseCase,
    GenerateVisualizationUseCase, ImageGenerationService, QueryDocumentUseCase,
    UploadDocumentUseCase,
};
use crate::connector::{
    ApiClient, ApiConfig, DocumentChatClient, ImageGenerationClient, MockDocumentChat,
    MockImageGeneration,
};

pub struct ContainerConfig {
    /// Explicit base URL; when `None` the environment variable and then the
    /// fixed local default apply.
    pub api_url: Option<String>,
    /// Use in-process mock services instead of a live backend.
    pub mock: bool,
}

pub struct Container {
    document_chat: Arc<dyn DocumentChatService>,
    image_generation: Arc<dyn ImageGenerationService>,
    target: String,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        if config.mock {
            debug!("Using mock backend services");
            return Self {
                document_chat: Arc::new(MockDocumentChat::new()),
                image_generation: Arc::new(MockImageGeneration::new()),
                target: "(mock)".to_string(),
            };
        }

        let api_config = match config.api_url {
            Some(url) => ApiConfig::new(url),
            None => ApiConfig::from_env(),
        };
        let api = ApiClient::new(api_config);
        debug!("Targeting API at {}", api.base_url());

        Self {
            target: api.base_url().to_string(),
            document_chat: Arc::new(DocumentChatClient::new(api.clone())),
            image_generation: Arc::new(ImageGenerationClient::new(api)),
        }
    }

    pub fn upload_use_case(&self) -> UploadDocumentUseCase {
        UploadDocumentUseCase::new(self.document_chat.clone())
    }

    pub fn query_use_case(&self) -> QueryDocumentUseCase {
        QueryDocumentUseCase::new(self.document_chat.clone())
    }

    pub fn sql_use_case(&self) -> ExecuteSqlQueryUseCase {
        ExecuteSqlQueryUseCase::new(self.document_chat.clone())
    }

    pub fn visualization_use_case(&self) -> GenerateVisualizationUseCase {
        GenerateVisualizationUseCase::new(self.document_chat.clone())
    }

    pub fn images_use_case(&self) -> GenerateImagesUseCase {
        GenerateImagesUseCase::new(self.image_generation.clone())
    }

    /// Human-readable description of the backend this container talks to.
    pub fn target(&self) -> &str {
        &self.target
    }
}
