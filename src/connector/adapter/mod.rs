mod api_client;
mod document_chat_client;
mod image_generation_client;
mod mock_document_chat;
mod mock_image_generation;

pub use api_client::*;
pub use document_chat_client::*;
pub use image_generation_client::*;
pub use mock_document_chat::*;
pub use mock_image_generation::*;
