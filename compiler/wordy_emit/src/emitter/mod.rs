//! Output Emitter
//!
//! Append-only sink that emission writes into. Nodes write their fragments in
//! tree order and never read back what was written.

/// Trait for emitting generated source.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation as the given number of spaces.
    fn emit_indent(&mut self, spaces: usize);
}

/// String-based emitter for in-memory generation.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the generated output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, spaces: usize) {
        self.buffer.extend(std::iter::repeat(' ').take(spaces));
    }
}
