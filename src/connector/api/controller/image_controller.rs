use anyhow::Result;

use super::super::Container;

pub struct ImageController<'a> {
    container: &'a Container,
}

impl<'a> ImageController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn imagine(
        &self,
        prompt: String,
        num: Option<u32>,
        size: Option<String>,
    ) -> Result<String> {
        let use_case = self.container.images_use_case();
        let response = use_case.execute(&prompt, num, size).await?;

        if response.is_empty() {
            return Ok("No images were generated.".to_string());
        }

        let mut output = format!(
            "Generated {} images for \"{}\":\n",
            response.images().len(),
            response.prompt()
        );
        for (i, url) in response.images().iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, url));
        }

        Ok(output)
    }
}
