//! Option vocabulary for the QNN execution provider.
//!
//! This module defines the closed value sets for each enumerated option and
//! the mapping from logical option names to wire keys. It is a static table:
//! nothing here can fail.

pub mod keys;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use keys::{OptionKey, OptionKind};
pub use types::{
    Choice, ContextPriority, GraphFinalizationMode, HtpArch, PerformanceMode, ProfilingLevel,
    parse_choice,
};
