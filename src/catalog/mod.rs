//! The template library: a fixed, ordered list of markup snippets and the
//! search/facet filtering the library panel offers over it.

mod builtin;
mod entry;
mod filter;

pub use builtin::builtin_templates;
pub use entry::TemplateEntry;
pub use filter::{ALL, Facet, TemplateQuery};

use crate::error::CatalogError;
use itertools::Itertools;

/// An immutable collection of templates, kept in insertion order.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    entries: Vec<TemplateEntry>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateCatalog {
    pub fn new(entries: Vec<TemplateEntry>) -> Self {
        Self { entries }
    }

    /// The catalog bundled with the editor.
    pub fn builtin() -> Self {
        Self::new(builtin_templates())
    }

    /// Iterates the catalog in insertion order. Call again to restart.
    pub fn list(&self) -> impl Iterator<Item = &TemplateEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&TemplateEntry, CatalogError> {
        self.entries
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CatalogError::TemplateNotFound(id.to_string()))
    }

    /// Returns every entry matching the search text and both facets.
    ///
    /// Pass `"All"` for a facet to leave it unrestricted. Results keep catalog
    /// order; there is no ranking.
    pub fn filter(&self, query: &str, industry: &str, feature: &str) -> Vec<&TemplateEntry> {
        self.search(&TemplateQuery::new(query, industry, feature))
    }

    pub fn search(&self, query: &TemplateQuery) -> Vec<&TemplateEntry> {
        self.entries.iter().filter(|t| query.matches(t)).collect()
    }

    /// Distinct industries in first-seen order.
    pub fn distinct_industries(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|t| t.industry.as_str())
            .unique()
            .collect()
    }

    /// Distinct feature tags in first-seen order.
    pub fn distinct_features(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(|t| t.features.iter().map(String::as_str))
            .unique()
            .collect()
    }

    /// Industry dropdown options: `"All"` followed by the distinct industries.
    pub fn industry_options(&self) -> Vec<&str> {
        std::iter::once(ALL)
            .chain(self.distinct_industries())
            .collect()
    }

    /// Feature dropdown options: `"All"` followed by the distinct features.
    pub fn feature_options(&self) -> Vec<&str> {
        std::iter::once(ALL).chain(self.distinct_features()).collect()
    }
}
