use std::path::Path;

use anyhow::Result;

use super::super::Container;

pub struct UploadController<'a> {
    container: &'a Container,
}

impl<'a> UploadController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn upload(&self, file: String) -> Result<String> {
        let use_case = self.container.upload_use_case();
        let response = use_case.execute(Path::new(&file)).await?;

        Ok(format!(
            "Uploaded {}\nDocument ID: {}\n{}",
            response.filename(),
            response.document_id(),
            response.message()
        ))
    }
}
