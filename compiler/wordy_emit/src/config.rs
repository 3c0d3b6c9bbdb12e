//! Emission configuration.

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Class wrapping the generated `main` method.
pub const DEFAULT_CLASS_NAME: &str = "WordyProgram";

/// Configuration for the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Indentation size in spaces.
    pub indent_size: usize,

    /// Name of the generated class in [`emit_program`](crate::emit_program).
    pub class_name: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent_size: INDENT_WIDTH,
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl EmitConfig {
    #[must_use]
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Spaces for the given nesting depth.
    #[inline]
    pub fn indent(&self, depth: usize) -> usize {
        depth.saturating_mul(self.indent_size)
    }
}
