//! qnn-options: typed configuration builder for the QNN execution provider.
//!
//! Options are declared through [`QnnConfigBuilder`] and rendered into the
//! flat string-keyed document the backend reads at initialization:
//!
//! ```
//! use qnn_options::QnnConfigBuilder;
//!
//! let doc = QnnConfigBuilder::new().use_npu(true).use_fp16(false).build();
//! assert_eq!(doc, r#"{"npu_enable":"1","fp16_enable":"0"}"#);
//! ```
//!
//! The builder never fails. Paths and integers are passed through for the
//! backend to check; enumerated options can only hold legal tokens.

pub mod builder;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod options;
pub mod profile;
pub mod validate;

pub use builder::QnnConfigBuilder;
pub use error::{QnnError, Result};
pub use profile::Profile;
