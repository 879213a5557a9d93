use async_trait::async_trait;

use crate::application::ImageGenerationService;
use crate::connector::ApiClient;
use crate::domain::{ImageGenerationRequest, ImageGenerationResponse, RequestError};

const IMAGE_GENERATION_PATH: &str = "/image-generation";

/// HTTP client for the image-generation endpoint.
#[derive(Clone)]
pub struct ImageGenerationClient {
    api: ApiClient,
}

impl ImageGenerationClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ImageGenerationService for ImageGenerationClient {
    async fn generate_images(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, RequestError> {
        self.api.post(IMAGE_GENERATION_PATH, request).await
    }
}
