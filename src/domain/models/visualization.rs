use serde::{Deserialize, Serialize};

/// Chart family rendered by the visualization endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationType {
    Bar,
    Line,
    Pie,
}

impl VisualizationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualizationType::Bar => "bar",
            VisualizationType::Line => "line",
            VisualizationType::Pie => "pie",
        }
    }
}

impl std::fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VisualizationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bar" => Ok(VisualizationType::Bar),
            "line" => Ok(VisualizationType::Line),
            "pie" => Ok(VisualizationType::Pie),
            other => Err(format!(
                "unknown visualization type '{other}' (expected bar, line, or pie)"
            )),
        }
    }
}

/// Request to render a chart from document columns.
///
/// Column order is significant: the first column drives the x axis (or pie
/// labels) and the remaining columns become the series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationRequest {
    document_id: String,
    visualization_type: VisualizationType,
    columns: Vec<String>,
}

impl VisualizationRequest {
    pub fn new(
        document_id: impl Into<String>,
        visualization_type: VisualizationType,
        columns: Vec<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            visualization_type,
            columns,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn visualization_type(&self) -> VisualizationType {
        self.visualization_type
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// Location of a rendered chart asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationResponse {
    image_url: String,
}

impl VisualizationResponse {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
        }
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}
