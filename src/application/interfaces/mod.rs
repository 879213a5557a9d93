mod document_chat_service;
mod image_generation_service;

pub use document_chat_service::*;
pub use image_generation_service::*;
