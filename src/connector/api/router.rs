use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{
    ChatController, ImageController, UploadController, VisualizationController,
};

pub struct Router<'a> {
    upload_controller: UploadController<'a>,
    chat_controller: ChatController<'a>,
    visualization_controller: VisualizationController<'a>,
    image_controller: ImageController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            upload_controller: UploadController::new(container),
            chat_controller: ChatController::new(container),
            visualization_controller: VisualizationController::new(container),
            image_controller: ImageController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Upload { file } => self.upload_controller.upload(file).await,
            Commands::Query { text, document_id } => {
                self.chat_controller.query(text, document_id).await
            }
            Commands::Sql { query, document_id } => {
                self.chat_controller.sql(query, document_id).await
            }
            Commands::Visualize {
                document_id,
                chart_type,
                column,
            } => {
                self.visualization_controller
                    .visualize(document_id, chart_type, column)
                    .await
            }
            Commands::Imagine { prompt, num, size } => {
                self.image_controller.imagine(prompt, num, size).await
            }
        }
    }
}
