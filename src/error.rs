//! Error types for content normalization.

/// Failure modes of [`normalize`](crate::normalize::normalize).
///
/// Both parser errors are kept as structured fields on [`Unparsable`] so a
/// caller can tell a JSON-targeted failure from a YAML-targeted one without
/// scraping the message text.
///
/// [`Unparsable`]: NormalizeError::Unparsable
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The input was neither a text candidate nor a mapping. `kind` names
    /// the rejected shape (`"null"`, `"array"`, `"number"`, ...).
    #[error("invalid content format: input must be a string or an object (got {kind})")]
    InvalidInput { kind: &'static str },

    /// A text candidate failed both parsers. The message labels and embeds
    /// both underlying errors verbatim.
    #[error("invalid content format:\nJSON parse error: {json}\nYAML parse error: {yaml}")]
    Unparsable {
        json: serde_json::Error,
        yaml: serde_yaml::Error,
    },
}
