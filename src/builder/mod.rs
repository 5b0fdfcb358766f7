//! Fluent builder for QNN execution provider options.
//!
//! Each setter encodes its argument into the final string form and stores it
//! under the option's wire key, then returns the builder for chaining.
//! Setting a key that is already present replaces its value but keeps its
//! original position in the document.
//!
//! ```
//! use qnn_options::QnnConfigBuilder;
//! use qnn_options::options::{ContextPriority, PerformanceMode};
//!
//! let doc = QnnConfigBuilder::new()
//!     .performance_mode(PerformanceMode::Burst)
//!     .context_priority(ContextPriority::High)
//!     .build();
//! assert_eq!(doc, r#"{"htp_performance_mode":"burst","qnn_context_priority":"high"}"#);
//! ```
//!
//! A builder is plain data. Sharing one between threads for mutation needs
//! external synchronization.

use crate::document;
use crate::options::{
    Choice, ContextPriority, GraphFinalizationMode, HtpArch, OptionKey, PerformanceMode,
    ProfilingLevel,
};
use indexmap::IndexMap;
use tracing::trace;

/// Accumulates QNN options and renders them as a configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QnnConfigBuilder {
    options: IndexMap<String, String>,
}

fn flag(enable: bool) -> &'static str {
    if enable { "1" } else { "0" }
}

impl QnnConfigBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, key: String, value: String) -> &mut Self {
        if let Some(previous) = self.options.insert(key, value) {
            trace!(previous = %previous, "overwrote existing QNN option");
        }
        self
    }

    /// Store an already encoded value for a known option.
    pub fn set(&mut self, key: OptionKey, value: impl Into<String>) -> &mut Self {
        self.insert(key.wire_key().to_string(), value.into())
    }

    /// Store an arbitrary key/value pair.
    ///
    /// The key is not checked against the vocabulary, so this also covers
    /// options the backend supports but this crate does not model. It can
    /// override any known key too; the last write wins.
    pub fn custom(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.insert(key.into(), value.into())
    }

    // =========================================================================
    // Shorthand switches
    // =========================================================================

    pub fn use_npu(&mut self, enable: bool) -> &mut Self {
        self.set(OptionKey::Npu, flag(enable))
    }

    /// Same as `use_npu(true)`.
    pub fn npu(&mut self) -> &mut Self {
        self.use_npu(true)
    }

    pub fn use_fp16(&mut self, enable: bool) -> &mut Self {
        self.set(OptionKey::Fp16, flag(enable))
    }

    /// Same as `use_fp16(true)`.
    pub fn fp16(&mut self) -> &mut Self {
        self.use_fp16(true)
    }

    pub fn use_htp(&mut self, enable: bool) -> &mut Self {
        self.set(OptionKey::Htp, flag(enable))
    }

    /// Same as `use_htp(true)`.
    pub fn htp(&mut self) -> &mut Self {
        self.use_htp(true)
    }

    // =========================================================================
    // Paths and names
    // =========================================================================

    /// Path to the QNN backend library, e.g. `libQnnHtp.so`.
    pub fn backend_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.set(OptionKey::BackendPath, path)
    }

    /// Where the backend writes profiling output.
    pub fn profiling_file_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.set(OptionKey::ProfilingFilePath, path)
    }

    /// Path to the QNN saver backend library.
    pub fn saver_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.set(OptionKey::SaverPath, path)
    }

    pub fn soc_model(&mut self, model: impl Into<String>) -> &mut Self {
        self.set(OptionKey::SocModel, model)
    }

    /// Directory for graph dumps written when `dump_json_qnn_graph` is on.
    pub fn json_qnn_graph_dir(&mut self, path: impl Into<String>) -> &mut Self {
        self.set(OptionKey::JsonQnnGraphDir, path)
    }

    // =========================================================================
    // Numeric options
    // =========================================================================

    /// VTCM size in megabytes. Not range checked.
    pub fn vtcm_mb(&mut self, size: i64) -> &mut Self {
        self.set(OptionKey::VtcmMb, size.to_string())
    }

    pub fn device_id(&mut self, id: i64) -> &mut Self {
        self.set(OptionKey::DeviceId, id.to_string())
    }

    /// RPC control latency in microseconds.
    pub fn rpc_control_latency(&mut self, micros: u32) -> &mut Self {
        self.set(OptionKey::RpcControlLatency, micros.to_string())
    }

    // =========================================================================
    // Enumerated options
    // =========================================================================

    pub fn performance_mode(&mut self, mode: PerformanceMode) -> &mut Self {
        self.set(OptionKey::PerformanceMode, mode.token())
    }

    pub fn profiling_level(&mut self, level: ProfilingLevel) -> &mut Self {
        self.set(OptionKey::ProfilingLevel, level.token())
    }

    pub fn context_priority(&mut self, priority: ContextPriority) -> &mut Self {
        self.set(OptionKey::ContextPriority, priority.token())
    }

    pub fn graph_finalization_mode(&mut self, mode: GraphFinalizationMode) -> &mut Self {
        self.set(OptionKey::GraphFinalizationMode, mode.token())
    }

    pub fn htp_arch(&mut self, arch: HtpArch) -> &mut Self {
        self.set(OptionKey::HtpArch, arch.token())
    }

    // =========================================================================
    // HTP switches
    // =========================================================================

    pub fn enable_htp_fp16_precision(&mut self, enable: bool) -> &mut Self {
        self.set(OptionKey::HtpFp16Precision, flag(enable))
    }

    /// Same as `enable_htp_fp16_precision(true)`.
    pub fn htp_fp16_precision(&mut self) -> &mut Self {
        self.enable_htp_fp16_precision(true)
    }

    pub fn enable_htp_weight_sharing(&mut self, enable: bool) -> &mut Self {
        self.set(OptionKey::HtpWeightSharing, flag(enable))
    }

    /// Same as `enable_htp_weight_sharing(true)`.
    pub fn htp_weight_sharing(&mut self) -> &mut Self {
        self.enable_htp_weight_sharing(true)
    }

    pub fn offload_graph_io_quantization(&mut self, enable: bool) -> &mut Self {
        self.set(OptionKey::OffloadGraphIoQuantization, flag(enable))
    }

    /// Same as `offload_graph_io_quantization(true)`.
    pub fn graph_io_quantization_offload(&mut self) -> &mut Self {
        self.offload_graph_io_quantization(true)
    }

    pub fn enable_htp_spill_fill_buffer(&mut self, enable: bool) -> &mut Self {
        self.set(OptionKey::HtpSpillFillBuffer, flag(enable))
    }

    /// Same as `enable_htp_spill_fill_buffer(true)`.
    pub fn htp_spill_fill_buffer(&mut self) -> &mut Self {
        self.enable_htp_spill_fill_buffer(true)
    }

    pub fn enable_htp_shared_memory_allocator(&mut self, enable: bool) -> &mut Self {
        self.set(OptionKey::HtpSharedMemoryAllocator, flag(enable))
    }

    /// Same as `enable_htp_shared_memory_allocator(true)`.
    pub fn htp_shared_memory_allocator(&mut self) -> &mut Self {
        self.enable_htp_shared_memory_allocator(true)
    }

    pub fn dump_json_qnn_graph(&mut self, enable: bool) -> &mut Self {
        self.set(OptionKey::DumpJsonQnnGraph, flag(enable))
    }

    /// Same as `dump_json_qnn_graph(true)`.
    pub fn json_qnn_graph_dump(&mut self) -> &mut Self {
        self.dump_json_qnn_graph(true)
    }

    // =========================================================================
    // Inspection and output
    // =========================================================================

    /// The stored value for a wire key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn options(&self) -> &IndexMap<String, String> {
        &self.options
    }

    /// Render the configuration document.
    ///
    /// Does not consume or clear the builder; calling it twice without
    /// changes in between yields the same document.
    pub fn build(&self) -> String {
        document::to_document(self.iter())
    }
}
