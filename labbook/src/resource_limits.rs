/// Limits that keep a single evaluation pass cheap and bounded
///
/// Documents are re-evaluated on every edit, so these are set well above
/// anything a hand-written notebook reaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Maximum size of a document loaded from disk or received over HTTP
    /// Real usage: ~2KB, Limit: 1MB
    pub max_document_bytes: usize,

    /// Maximum nesting of a single expression
    /// Legacy chains of one operator share a level; operator changes nest
    pub max_expression_depth: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_document_bytes: 1024 * 1024, // 1 MB
            max_expression_depth: 100,
        }
    }
}

impl ResourceLimits {
    pub fn new() -> Self {
        Self::default()
    }
}
