use anyhow::Result;
use serde_json::Value;

use super::super::Container;

/// Handles both the free-form query and the SQL query commands.
pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn query(&self, text: String, document_id: Option<String>) -> Result<String> {
        let use_case = self.container.query_use_case();
        let response = use_case.execute(&text, document_id).await?;

        Ok(response.response().to_string())
    }

    pub async fn sql(&self, query: String, document_id: Option<String>) -> Result<String> {
        let use_case = self.container.sql_use_case();
        let value = use_case.execute(&query, document_id).await?;

        Ok(Self::format_result(&value))
    }

    /// Pretty-print the server-defined JSON, with the `response` text first
    /// when the body carries one.
    fn format_result(value: &Value) -> String {
        let pretty =
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());

        match value.get("response").and_then(|r| r.as_str()) {
            Some(text) => format!("{text}\n{pretty}"),
            None => pretty,
        }
    }
}
