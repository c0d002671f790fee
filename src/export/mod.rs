//! Ways of getting markup out of the editor: short-lived previews of the
//! document and downloadable template files.

mod download;
mod preview;

pub use download::{TemplateDownload, save_template};
pub use preview::{PreviewHandle, publish_preview};

pub const HTML_CONTENT_TYPE: &str = "text/html";
