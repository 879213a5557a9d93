use async_trait::async_trait;

use crate::domain::{ImageGenerationRequest, ImageGenerationResponse, RequestError};

/// An interface for the image-generation operation.
#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate images from a text prompt and return their URLs in order.
    async fn generate_images(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, RequestError>;
}
