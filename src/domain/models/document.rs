use serde::{Deserialize, Serialize};

/// Returned once per successful upload.
///
/// The server-assigned `document_id` must be supplied on subsequent queries
/// against that document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentUploadResponse {
    document_id: String,
    filename: String,
    message: String,
}

impl DocumentUploadResponse {
    pub fn new(
        document_id: impl Into<String>,
        filename: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            filename: filename.into(),
            message: message.into(),
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Natural-language question scoped to an uploaded document.
///
/// When `document_id` is omitted the key is absent from the serialized body
/// and the server decides which document the question targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentQueryRequest {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_id: Option<String>,
}

impl DocumentQueryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            document_id: None,
        }
    }

    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }
}

/// Free-form natural-language answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    response: String,
}

impl QueryResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    pub fn response(&self) -> &str {
        &self.response
    }
}

/// Natural-language query translated server-side to SQL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlQueryRequest {
    query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_id: Option<String>,
}

impl SqlQueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            document_id: None,
        }
    }

    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_builder() {
        let request = DocumentQueryRequest::new("what is the total?").with_document_id("doc-1");

        assert_eq!(request.text(), "what is the total?");
        assert_eq!(request.document_id(), Some("doc-1"));
    }

    #[test]
    fn test_omitted_document_id_is_absent_from_body() {
        let request = DocumentQueryRequest::new("summarize this");
        let body = serde_json::to_string(&request).unwrap();

        assert!(!body.contains("document_id"));
    }

    #[test]
    fn test_present_document_id_is_serialized() {
        let request = SqlQueryRequest::new("count the rows").with_document_id("doc-2");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["document_id"], "doc-2");
        assert_eq!(body["query"], "count the rows");
    }

    #[test]
    fn test_upload_response_deserializes() {
        let body = r#"{"document_id":"abc","filename":"report.pdf","message":"ok"}"#;
        let response: DocumentUploadResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.document_id(), "abc");
        assert_eq!(response.filename(), "report.pdf");
    }
}
