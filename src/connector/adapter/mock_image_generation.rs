use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use tracing::debug;

use crate::application::{use_cases::parse_size, ImageGenerationService};
use crate::domain::{ImageGenerationRequest, ImageGenerationResponse, RequestError};

/// Defaults applied when the request leaves `n` or `size` unset.
const DEFAULT_IMAGE_COUNT: u32 = 4;
const DEFAULT_SIZE: &str = "1024x1024";

/// In-memory stand-in for the image-generation backend.
///
/// Produces deterministic placeholder URLs: the same prompt always yields the
/// same seed, so repeated runs are reproducible in tests and demos.
pub struct MockImageGeneration;

impl MockImageGeneration {
    pub fn new() -> Self {
        Self
    }

    fn seed_for(prompt: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        prompt.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for MockImageGeneration {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGeneration {
    async fn generate_images(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, RequestError> {
        let count = request.count().unwrap_or(DEFAULT_IMAGE_COUNT);
        let size = request.size().unwrap_or(DEFAULT_SIZE);
        let (width, height) = parse_size(size)
            .map_err(|_| RequestError::api(format!("Unsupported image size: {size}")))?;

        let seed = Self::seed_for(request.prompt());
        debug!("Mock generating {count} images at {width}x{height} (seed {seed})");

        let images = (0..count)
            .map(|i| {
                format!(
                    "/placeholder.svg?width={width}&height={height}&seed={seed}&text=Generated+Image+{}",
                    i + 1
                )
            })
            .collect();

        Ok(ImageGenerationResponse::new(images, request.prompt()))
    }
}
