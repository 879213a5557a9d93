mod execute_sql_query;
mod generate_images;
mod generate_visualization;
mod query_document;
mod upload_document;

pub use execute_sql_query::*;
pub use generate_images::*;
pub use generate_visualization::*;
pub use query_document::*;
pub use upload_document::*;
