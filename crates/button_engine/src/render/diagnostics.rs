//! Structured reporting of recovered rendering problems
//!
//! The engine never fails on malformed configuration: it logs, substitutes a
//! safe default and carries on. Every such substitution is also reported as a
//! [`Diagnostic`] value so callers can react to (and tests can assert on)
//! what happened without scraping log output.

use std::fmt;

/// Importance of a diagnostic, mirrors the log level it is emitted at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Expected behaviour worth tracing
    Debug,
    /// A fallback was applied
    Warning,
    /// Input was rejected or a render could not run
    Error,
}

impl Severity {
    fn level(self) -> log::Level {
        match self {
            Self::Debug => log::Level::Debug,
            Self::Warning => log::Level::Warn,
            Self::Error => log::Level::Error,
        }
    }
}

/// A recovered problem encountered while rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// More than five order codes; only the first five were used
    DrawOrderOverflow {
        /// Number of codes in the input
        count: usize,
    },
    /// An order code outside 01..=05; the default order was used
    InvalidDrawOrderCode {
        /// Zero-based index of the offending pair
        position: usize,
        /// The offending two characters
        pair: String,
    },
    /// Fewer than two gradient colors; gray to white was used
    GradientStopFallback {
        /// Number of colors configured
        configured: usize,
    },
    /// A bitmap layer could not be loaded and was skipped
    MissingBitmap {
        /// Layer index within the instance
        slot: usize,
        /// Image reference
        file: String,
        /// Loader error text
        reason: String,
    },
    /// The chameleon stencil could not be loaded and was skipped
    MissingChameleon {
        /// Image reference
        file: String,
        /// Loader error text
        reason: String,
    },
    /// Chameleon tinting was skipped because a border style is set
    ChameleonSuppressed {
        /// Border style name
        border: String,
    },
    /// The object has no drawable surface; nothing was rendered
    MissingSurface {
        /// Object name
        object: String,
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

impl Diagnostic {
    /// Severity of this diagnostic
    pub const fn severity(&self) -> Severity {
        match self {
            Self::DrawOrderOverflow { .. }
            | Self::GradientStopFallback { .. }
            | Self::MissingBitmap { .. }
            | Self::MissingChameleon { .. } => Severity::Warning,
            Self::InvalidDrawOrderCode { .. } | Self::MissingSurface { .. } => Severity::Error,
            Self::ChameleonSuppressed { .. } => Severity::Debug,
        }
    }

    /// Emit through the `log` facade at the matching level
    pub fn log(&self) {
        log::log!(target: "button_engine", self.severity().level(), "{}", self);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DrawOrderOverflow { count } => {
                write!(f, "Draw order has {} codes, only the first 5 are used", count)
            }
            Self::InvalidDrawOrderCode { position, pair } => {
                write!(f, "Invalid draw order code '{}' at position {}, using default order", pair, position)
            }
            Self::GradientStopFallback { configured } => {
                write!(f, "Gradient has {} color(s), falling back to gray/white", configured)
            }
            Self::MissingBitmap { slot, file, reason } => {
                write!(f, "Skipping bitmap layer {} ({}): {}", slot, file, reason)
            }
            Self::MissingChameleon { file, reason } => {
                write!(f, "Skipping chameleon image ({}): {}", file, reason)
            }
            Self::ChameleonSuppressed { border } => {
                write!(f, "Border style '{}' is set, chameleon image not tinted", border)
            }
            Self::MissingSurface { object, width, height } => {
                write!(f, "Object '{}' has no drawable surface ({}x{})", object, width, height)
            }
        }
    }
}

/// Receiver for diagnostics
pub trait DiagnosticSink {
    /// Accept one diagnostic
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects every diagnostic
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Discards diagnostics; they are still logged
impl DiagnosticSink for () {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Log a diagnostic and hand it to the sink
pub(crate) fn emit(sink: &mut dyn DiagnosticSink, diagnostic: Diagnostic) {
    diagnostic.log();
    sink.report(diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        emit(&mut sink, Diagnostic::DrawOrderOverflow { count: 6 });
        emit(&mut sink, Diagnostic::GradientStopFallback { configured: 1 });
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0], Diagnostic::DrawOrderOverflow { count: 6 });
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(Diagnostic::DrawOrderOverflow { count: 7 }.severity(), Severity::Warning);
        assert_eq!(
            Diagnostic::InvalidDrawOrderCode { position: 0, pair: "00".into() }.severity(),
            Severity::Error
        );
        assert_eq!(
            Diagnostic::ChameleonSuppressed { border: "Single Line".into() }.severity(),
            Severity::Debug
        );
    }

    #[test]
    fn test_display_mentions_details() {
        let text = Diagnostic::MissingBitmap { slot: 2, file: "logo.png".into(), reason: "not found".into() }.to_string();
        assert!(text.contains("logo.png"), "message should name the file: {}", text);
        assert!(text.contains('2'));
    }
}
