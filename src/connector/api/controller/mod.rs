pub mod chat_controller;
pub mod image_controller;
pub mod upload_controller;
pub mod visualization_controller;

pub use chat_controller::ChatController;
pub use image_controller::ImageController;
pub use upload_controller::UploadController;
pub use visualization_controller::VisualizationController;
