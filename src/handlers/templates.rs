//! Template loading.
//!
//! Templates are plain static files read once at startup; there is no
//! templating engine. A missing or unreadable template is a startup error,
//! never a per-request one.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name of the form page inside the template directory.
const FORM_TEMPLATE: &str = "form.html";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load the form page from the template directory.
pub fn load_form_template(dir: &Path) -> Result<String, TemplateError> {
    let path = dir.join(FORM_TEMPLATE);
    std::fs::read_to_string(&path).map_err(|source| TemplateError::Read { path, source })
}
