use crate::error::ExportError;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// An HTML file holding a copy of the document, removed once its time is up.
#[derive(Debug)]
pub struct PreviewHandle {
    path: PathBuf,
    ttl: Duration,
    expiry: Option<JoinHandle<()>>,
}

impl PreviewHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content_type(&self) -> &'static str {
        super::HTML_CONTENT_TYPE
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// `file://` URL suitable for opening in a browser.
    pub fn url(&self) -> String {
        format!("file://{}", self.path.display())
    }

    /// Removes the resource now instead of waiting for it to expire.
    pub fn release(mut self) -> Result<(), ExportError> {
        if let Some(expiry) = self.expiry.take() {
            expiry.abort();
        }
        remove_preview(&self.path)
    }
}

/// Writes `text` byte-for-byte to a fresh preview file in `dir`.
///
/// When called inside a tokio runtime the file is removed after `ttl`;
/// otherwise it stays until [`PreviewHandle::release`] is called.
pub fn publish_preview(
    dir: &Path,
    text: &str,
    ttl: Duration,
) -> Result<PreviewHandle, ExportError> {
    let path = dir.join(format!("preview-{:016x}.html", rand::random::<u64>()));
    fs::write(&path, text.as_bytes()).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "Published preview");

    let expiry = match Handle::try_current() {
        Ok(handle) => {
            let doomed = path.clone();
            Some(handle.spawn(async move {
                tokio::time::sleep(ttl).await;
                if let Err(e) = remove_preview(&doomed) {
                    warn!("Failed to release expired preview: {}", e);
                }
            }))
        }
        Err(_) => {
            warn!(path = %path.display(), "No async runtime; preview will not expire on its own");
            None
        }
    };

    Ok(PreviewHandle { path, ttl, expiry })
}

fn remove_preview(path: &Path) -> Result<(), ExportError> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Released preview");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ExportError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
