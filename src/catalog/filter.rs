use super::entry::TemplateEntry;

/// The value the facet dropdowns use for "no restriction".
pub const ALL: &str = "All";

/// A single facet restriction: either everything, or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    fn admits(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted == value,
        }
    }
}

impl From<&str> for Facet {
    fn from(value: &str) -> Self {
        if value == ALL {
            Facet::All
        } else {
            Facet::Only(value.to_string())
        }
    }
}

impl From<Option<&str>> for Facet {
    fn from(value: Option<&str>) -> Self {
        value.map(Facet::from).unwrap_or_default()
    }
}

/// The three predicates applied by the template search box and dropdowns.
#[derive(Debug, Clone, Default)]
pub struct TemplateQuery {
    pub text: String,
    pub industry: Facet,
    pub feature: Facet,
}

impl TemplateQuery {
    pub fn new(text: &str, industry: impl Into<Facet>, feature: impl Into<Facet>) -> Self {
        Self {
            text: text.to_string(),
            industry: industry.into(),
            feature: feature.into(),
        }
    }

    pub fn matches(&self, entry: &TemplateEntry) -> bool {
        self.matches_text(entry) && self.matches_industry(entry) && self.matches_feature(entry)
    }

    // Whitespace-only queries count as empty; otherwise the raw query is used.
    fn matches_text(&self, entry: &TemplateEntry) -> bool {
        self.text.trim().is_empty()
            || entry
                .name
                .to_lowercase()
                .contains(&self.text.to_lowercase())
    }

    fn matches_industry(&self, entry: &TemplateEntry) -> bool {
        self.industry.admits(&entry.industry)
    }

    fn matches_feature(&self, entry: &TemplateEntry) -> bool {
        match &self.feature {
            Facet::All => true,
            Facet::Only(feature) => entry.has_feature(feature),
        }
    }
}
