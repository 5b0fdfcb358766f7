//! Option profiles for qnn-options.
//!
//! A profile is a YAML file declaring a set of QNN options, for example:
//!
//! ```yaml
//! backend_path: libQnnHtp.so
//! performance_mode: burst
//! htp_arch: 73
//! htp_fp16_precision: true
//! custom:
//!   htp_bf16_enable: 1
//! ```
//!
//! Every field is optional. Unknown fields are rejected so that a misspelled
//! option does not silently disappear from the generated document.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Profile;
pub use types::Scalar;
