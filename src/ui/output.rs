//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show headers, the report, and the rules that produced it.
    Verbose,
    /// Show headers and the report.
    #[default]
    Normal,
    /// Show the report without headers.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows headers.
    pub fn shows_headers(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows the active rules.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
