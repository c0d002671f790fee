use crate::catalog::TemplateEntry;
use crate::error::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// A template packaged as a downloadable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDownload {
    pub file_name: String,
    /// `data:` URI carrying the percent-encoded markup.
    pub href: String,
}

impl TemplateDownload {
    pub fn for_template(entry: &TemplateEntry) -> Self {
        Self {
            file_name: entry.file_name(),
            href: format!(
                "data:{};charset=utf-8,{}",
                super::HTML_CONTENT_TYPE,
                urlencoding::encode(&entry.code)
            ),
        }
    }

    /// Recovers the markup carried by the link.
    pub fn decoded(&self) -> Option<String> {
        let (_, payload) = self.href.split_once(',')?;
        urlencoding::decode(payload).ok().map(|s| s.into_owned())
    }
}

/// Writes `<id>.html` with the template's markup into `dir`.
pub fn save_template(entry: &TemplateEntry, dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(entry.file_name());
    fs::write(&path, &entry.code).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
