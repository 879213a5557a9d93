use std::sync::Arc;

use tracing::info;

use crate::application::ImageGenerationService;
use crate::domain::{ImageGenerationRequest, ImageGenerationResponse, RequestError};

pub struct GenerateImagesUseCase {
    image_generation: Arc<dyn ImageGenerationService>,
}

impl GenerateImagesUseCase {
    pub fn new(image_generation: Arc<dyn ImageGenerationService>) -> Self {
        Self { image_generation }
    }

    pub async fn execute(
        &self,
        prompt: &str,
        n: Option<u32>,
        size: Option<String>,
    ) -> Result<ImageGenerationResponse, RequestError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(RequestError::invalid_input("prompt must not be empty"));
        }
        if let Some(0) = n {
            return Err(RequestError::invalid_input(
                "image count must be at least 1",
            ));
        }
        if let Some(ref size) = size {
            parse_size(size)?;
        }

        info!("Generating images (n={:?}, size={:?})", n, size);

        let mut request = ImageGenerationRequest::new(prompt);
        if let Some(n) = n {
            request = request.with_count(n);
        }
        if let Some(size) = size {
            request = request.with_size(size);
        }

        self.image_generation.generate_images(&request).await
    }
}

/// Parse a "WxH" resolution string into its dimensions.
pub fn parse_size(size: &str) -> Result<(u32, u32), RequestError> {
    let invalid =
        || RequestError::invalid_input(format!("size must look like 512x512, got '{size}'"));

    let (width, height) = size.split_once('x').ok_or_else(invalid)?;
    let width: u32 = width.parse().map_err(|_| invalid())?;
    let height: u32 = height.parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    Ok((width, height))
}
