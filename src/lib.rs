pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    DocumentChatService, ExecuteSqlQueryUseCase, GenerateImagesUseCase,
    GenerateVisualizationUseCase, ImageGenerationService, QueryDocumentUseCase,
    UploadDocumentUseCase,
};

pub use cli::Commands;

pub use connector::{
    ApiClient, ApiConfig, Container, ContainerConfig, DocumentChatClient, ImageGenerationClient,
    MockDocumentChat, MockImageGeneration, Router, BASE_URL_ENV, DEFAULT_BASE_URL,
};

pub use domain::{
    DocumentQueryRequest, DocumentUploadResponse, ImageGenerationRequest, ImageGenerationResponse,
    QueryResponse, RequestError, SqlQueryRequest, VisualizationRequest, VisualizationResponse,
    VisualizationType, CONNECTION_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};
