//! Destinations for `Print` statement output.
//!
//! - Stdout: the default for real runs
//! - Buffer: captured for tests and embedders that display output themselves
//! - Silent: discarded
//!
//! Enum dispatch keeps the per-statement call free of vtables.

use std::sync::Arc;

use parking_lot::Mutex;

/// Render a value the way Java's `Double.toString` prints a `double`.
///
/// Magnitudes in `[1e-3, 1e7)` print as plain decimals with at least one
/// fractional digit (`3.0`, `0.001`). Everything else uses Java's scientific
/// form (`1.0E7`, `1.5E-4`). Digits are the shortest that round-trip.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}Infinity");
    }
    if value == 0.0 {
        return format!("{sign}0.0");
    }

    let magnitude = value.abs();
    let Some((digits, exponent)) = decimal_digits(magnitude) else {
        return format!("{value:?}");
    };
    let text = if (1e-3..1e7).contains(&magnitude) {
        plain_decimal(&digits, exponent)
    } else {
        scientific(&digits, exponent)
    };
    format!("{sign}{text}")
}

/// Shortest round-trip significant digits of a positive finite value, and
/// the decimal exponent of the first digit.
fn decimal_digits(value: f64) -> Option<(String, i32)> {
    let formatted = format!("{value:e}");
    let (mantissa, exponent) = formatted.split_once('e')?;
    let exponent = exponent.parse().ok()?;
    Some((mantissa.replace('.', ""), exponent))
}

fn plain_decimal(digits: &str, exponent: i32) -> String {
    match usize::try_from(exponent) {
        Ok(exponent) => {
            let int_len = exponent + 1;
            if digits.len() > int_len {
                format!("{}.{}", &digits[..int_len], &digits[int_len..])
            } else {
                format!("{digits}{}.0", "0".repeat(int_len - digits.len()))
            }
        }
        Err(_) => {
            let leading_zeros = usize::try_from(-exponent - 1).unwrap_or_default();
            format!("0.{}{digits}", "0".repeat(leading_zeros))
        }
    }
}

fn scientific(digits: &str, exponent: i32) -> String {
    let (first, rest) = digits.split_at(1);
    let rest = if rest.is_empty() { "0" } else { rest };
    format!("{first}.{rest}E{exponent}")
}

/// Print handler that captures output to a buffer.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line.
    pub fn println(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    /// All captured output.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Where `Print` output goes.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout,
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Buffer(h) => h.println(line),
            Self::Silent => {}
        }
    }

    /// Captured output.
    ///
    /// Empty for handlers that don't capture (stdout, silent).
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Drop captured output. No-op for non-capturing handlers.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }

    /// Captured lines, in print order.
    pub fn lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_string).collect()
    }
}

/// Print handler shared between the interpreter and whoever reads the output.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
