//! Errors for spec construction and validation
//!
//! Note the deliberate asymmetry with the rest of the pipeline: assembling a
//! document is fallible and typed, while rendering a document degrades
//! silently on authoring mistakes. Only the former surfaces here.

/// Errors raised while assembling or validating a spec document
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// Two fragments (or a fragment and the synthetic root) wrote the same key
    #[error("duplicate element key: {0}")]
    DuplicateKey(String),

    /// The document's root key has no element
    #[error("root element not found: {0}")]
    MissingRoot(String),

    /// An element lists a child key that is absent from the document
    #[error("element '{parent}' references missing child '{child}'")]
    MissingChild {
        /// Key of the referencing element
        parent: String,
        /// The missing child key
        child: String,
    },

    /// A key is claimed as a child by more than one parent
    #[error("element '{child}' is referenced by both '{first}' and '{second}'")]
    MultipleParents {
        /// The shared child key
        child: String,
        /// First parent encountered
        first: String,
        /// Second parent encountered
        second: String,
    },

    /// The reachable subgraph contains a cycle
    #[error("cycle detected through element '{0}'")]
    Cycle(String),
}

/// Result type for spec operations
pub type Result<T> = std::result::Result<T, SpecError>;
