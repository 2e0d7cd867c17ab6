use girder_signature::SignatureError;
use thiserror::Error;

/// Per-declaration import failures.
///
/// A missing dependency is deliberately *not* in this taxonomy: a referenced
/// name with no record is the normal stub case, not an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImportError {
    /// A generic signature failed to parse; the declaration is degraded to its
    /// non-generic structure.
    #[error("malformed generic signature on `{name}`: {source}")]
    MalformedSignature {
        name: String,
        #[source]
        source: SignatureError,
    },
    /// A member's descriptor could not be linked; only that member is dropped.
    #[error("cannot link member `{member}` of `{class}`: {source}")]
    UnresolvableMember {
        class: String,
        member: String,
        #[source]
        source: SignatureError,
    },
    /// A second record arrived for an already-registered name. The first
    /// record stands untouched; the second is rejected.
    #[error("duplicate record for `{name}`; keeping the first definition")]
    DuplicateDefinition { name: String },
}

/// One captured failure, attributed to the declaration it degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedError {
    pub class: String,
    pub error: ImportError,
}

/// Everything that went wrong across one batch. The graph that produced it is
/// still usable; degraded declarations are marked via their own
/// `diagnostics`, not dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub errors: Vec<ReportedError>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors_for<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a ImportError> {
        self.errors
            .iter()
            .filter(move |e| e.class == class)
            .map(|e| &e.error)
    }
}
