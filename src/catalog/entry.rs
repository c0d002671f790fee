use serde::{Deserialize, Serialize};

/// A named markup snippet that can be applied to the document buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub features: Vec<String>,
    pub rating: f32,
    pub code: String,
}

impl TemplateEntry {
    pub fn new(
        id: &str,
        name: &str,
        industry: &str,
        features: &[&str],
        rating: f32,
        code: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            industry: industry.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            rating,
            code: code.to_string(),
        }
    }

    /// One-line description shown under the template name, e.g. `Software • Hero, Pricing`.
    pub fn summary(&self) -> String {
        format!("{} • {}", self.industry, self.features.join(", "))
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// File name used when the template is downloaded.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.id)
    }
}
