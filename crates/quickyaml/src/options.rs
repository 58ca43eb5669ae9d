/// Default nesting limit for [`Options::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone)]
pub struct Options {
    /// Reject block entries indented deeper than their collection's baseline
    /// instead of ending the collection there.
    pub strict: bool,
    /// Maximum nesting of collections before parsing fails.
    pub max_depth: usize,
    /// Indentation size used by the encoder (default: 2 spaces)
    pub indent: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
            indent: 2,
        }
    }
}

impl Options {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
