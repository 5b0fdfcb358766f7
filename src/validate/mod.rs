//! Validation of configuration documents against the option vocabulary.
//!
//! The builder itself never fails; this is the check a caller can run before
//! handing a document to the backend. Keys must be known wire keys, and
//! options with a closed value set must carry one of their tokens. Paths and
//! integers are not checked.

use crate::builder::QnnConfigBuilder;
use crate::document::scan_document;
use crate::error::{QnnError, Result};
use crate::options::OptionKey;
use tracing::debug;

/// Validate a single key/value pair.
pub fn validate_entry(key: &str, value: &str) -> Result<()> {
    let option =
        OptionKey::from_wire_key(key).ok_or_else(|| QnnError::UnknownOption(key.to_string()))?;

    let kind = option.kind();
    if !kind.accepts(value) {
        return Err(QnnError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            allowed: kind.allowed_values().unwrap_or_default(),
        });
    }

    Ok(())
}

/// Validate a configuration document.
///
/// An empty string means no configuration was provided and is accepted.
/// Otherwise the text must be a flat object whose entries all pass
/// [`validate_entry`]. Every occurrence of a repeated key is checked, not
/// only the one that would win. The first failing entry is reported.
pub fn validate_document(text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    if !text.starts_with('{') || !text.ends_with('}') {
        return Err(QnnError::MalformedDocument(
            "must start with '{' and end with '}'".to_string(),
        ));
    }

    let mut entries = 0usize;
    scan_document(text, |key, value| {
        entries += 1;
        validate_entry(key, value)
    })?;

    debug!(entries, "validated QNN configuration document");
    Ok(())
}

impl QnnConfigBuilder {
    /// Check every stored entry against the vocabulary.
    ///
    /// Fails on custom keys the vocabulary does not know and on custom
    /// values outside an option's token set. Entries written by the typed
    /// setters always pass.
    pub fn validate(&self) -> Result<()> {
        self.iter()
            .try_for_each(|(key, value)| validate_entry(key, value))
    }
}
