use serde::{Deserialize, Serialize};

/// Request to generate one or more images from a text prompt.
///
/// `n` and `size` are optional; when omitted the keys are absent from the
/// body and the server applies its own defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<String>,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            n: None,
            size: None,
        }
    }

    pub fn with_count(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }

    /// Resolution string, e.g. "1024x1024".
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn count(&self) -> Option<u32> {
        self.n
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }
}

/// Ordered image URLs plus an echo of the prompt that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    images: Vec<String>,
    prompt: String,
}

impl ImageGenerationResponse {
    pub fn new(images: Vec<String>, prompt: impl Into<String>) -> Self {
        Self {
            images,
            prompt: prompt.into(),
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
