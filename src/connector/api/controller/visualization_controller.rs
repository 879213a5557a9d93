use anyhow::Result;

use crate::domain::VisualizationType;

use super::super::Container;

pub struct VisualizationController<'a> {
    container: &'a Container,
}

impl<'a> VisualizationController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn visualize(
        &self,
        document_id: String,
        chart_type: String,
        columns: Vec<String>,
    ) -> Result<String> {
        let visualization_type: VisualizationType =
            chart_type.parse().map_err(anyhow::Error::msg)?;

        let use_case = self.container.visualization_use_case();
        let response = use_case
            .execute(&document_id, visualization_type, columns)
            .await?;

        Ok(format!(
            "{} chart ready: {}",
            visualization_type,
            response.image_url()
        ))
    }
}
