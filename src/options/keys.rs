//! Wire keys understood by the QNN execution provider.
//!
//! [`OptionKey`] maps every logical option (canonical and shorthand) onto the
//! exact key string the backend expects, along with the kind of value it takes.

use super::types::{
    Choice, ContextPriority, GraphFinalizationMode, HtpArch, PerformanceMode, ProfilingLevel,
};
use std::fmt;

pub const BACKEND_PATH: &str = "backend_path";
pub const PROFILING_LEVEL: &str = "profiling_level";
pub const PROFILING_FILE_PATH: &str = "profiling_file_path";
pub const RPC_CONTROL_LATENCY: &str = "rpc_control_latency";
pub const VTCM_MB: &str = "vtcm_mb";
pub const HTP_PERFORMANCE_MODE: &str = "htp_performance_mode";
pub const QNN_SAVER_PATH: &str = "qnn_saver_path";
pub const QNN_CONTEXT_PRIORITY: &str = "qnn_context_priority";
pub const HTP_GRAPH_FINALIZATION_MODE: &str = "htp_graph_finalization_optimization_mode";
pub const SOC_MODEL: &str = "soc_model";
pub const HTP_ARCH: &str = "htp_arch";
pub const DEVICE_ID: &str = "device_id";
pub const ENABLE_HTP_FP16_PRECISION: &str = "enable_htp_fp16_precision";
pub const ENABLE_HTP_WEIGHT_SHARING: &str = "enable_htp_weight_sharing";
pub const OFFLOAD_GRAPH_IO_QUANTIZATION: &str = "offload_graph_io_quantization";
pub const ENABLE_HTP_SPILL_FILL_BUFFER: &str = "enable_htp_spill_fill_buffer";
pub const ENABLE_HTP_SHARED_MEMORY_ALLOCATOR: &str = "enable_htp_shared_memory_allocator";
pub const DUMP_JSON_QNN_GRAPH: &str = "dump_json_qnn_graph";
pub const JSON_QNN_GRAPH_DIR: &str = "json_qnn_graph_dir";

// Shorthand keys
pub const NPU_ENABLE: &str = "npu_enable";
pub const FP16_ENABLE: &str = "fp16_enable";
pub const HTP_ENABLE: &str = "htp_enable";

/// Tokens accepted by on/off options.
pub const FLAG_TOKENS: &[&str] = &["0", "1"];

/// The kind of value an option takes once encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean, encoded as `"1"` or `"0"`.
    Flag,
    /// Free-form string, passed through verbatim (usually a path).
    Text,
    /// Integer in decimal text. Range is checked by the backend only.
    Integer,
    /// One of a closed set of tokens.
    Choice(&'static [&'static str]),
}

impl OptionKind {
    /// Legal tokens for this kind, or `None` when any value is accepted.
    pub fn allowed_values(&self) -> Option<&'static [&'static str]> {
        match *self {
            OptionKind::Flag => Some(FLAG_TOKENS),
            OptionKind::Choice(tokens) => Some(tokens),
            OptionKind::Text | OptionKind::Integer => None,
        }
    }

    /// Whether `value` is acceptable for this kind.
    pub fn accepts(&self, value: &str) -> bool {
        self.allowed_values()
            .is_none_or(|allowed| allowed.contains(&value))
    }
}

/// Every option the builder knows how to set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    BackendPath,
    ProfilingLevel,
    ProfilingFilePath,
    RpcControlLatency,
    VtcmMb,
    PerformanceMode,
    SaverPath,
    ContextPriority,
    GraphFinalizationMode,
    SocModel,
    HtpArch,
    DeviceId,
    HtpFp16Precision,
    HtpWeightSharing,
    OffloadGraphIoQuantization,
    HtpSpillFillBuffer,
    HtpSharedMemoryAllocator,
    DumpJsonQnnGraph,
    JsonQnnGraphDir,
    /// Shorthand for enabling the NPU.
    Npu,
    /// Shorthand for fp16 execution.
    Fp16,
    /// Shorthand for enabling the HTP backend.
    Htp,
}

impl OptionKey {
    /// Every option: canonical keys first, then shorthands.
    pub const ALL: &'static [OptionKey] = &[
        OptionKey::BackendPath,
        OptionKey::ProfilingLevel,
        OptionKey::ProfilingFilePath,
        OptionKey::RpcControlLatency,
        OptionKey::VtcmMb,
        OptionKey::PerformanceMode,
        OptionKey::SaverPath,
        OptionKey::ContextPriority,
        OptionKey::GraphFinalizationMode,
        OptionKey::SocModel,
        OptionKey::HtpArch,
        OptionKey::DeviceId,
        OptionKey::HtpFp16Precision,
        OptionKey::HtpWeightSharing,
        OptionKey::OffloadGraphIoQuantization,
        OptionKey::HtpSpillFillBuffer,
        OptionKey::HtpSharedMemoryAllocator,
        OptionKey::DumpJsonQnnGraph,
        OptionKey::JsonQnnGraphDir,
        OptionKey::Npu,
        OptionKey::Fp16,
        OptionKey::Htp,
    ];

    /// The exact key string written into the document.
    pub fn wire_key(self) -> &'static str {
        match self {
            OptionKey::BackendPath => BACKEND_PATH,
            OptionKey::ProfilingLevel => PROFILING_LEVEL,
            OptionKey::ProfilingFilePath => PROFILING_FILE_PATH,
            OptionKey::RpcControlLatency => RPC_CONTROL_LATENCY,
            OptionKey::VtcmMb => VTCM_MB,
            OptionKey::PerformanceMode => HTP_PERFORMANCE_MODE,
            OptionKey::SaverPath => QNN_SAVER_PATH,
            OptionKey::ContextPriority => QNN_CONTEXT_PRIORITY,
            OptionKey::GraphFinalizationMode => HTP_GRAPH_FINALIZATION_MODE,
            OptionKey::SocModel => SOC_MODEL,
            OptionKey::HtpArch => HTP_ARCH,
            OptionKey::DeviceId => DEVICE_ID,
            OptionKey::HtpFp16Precision => ENABLE_HTP_FP16_PRECISION,
            OptionKey::HtpWeightSharing => ENABLE_HTP_WEIGHT_SHARING,
            OptionKey::OffloadGraphIoQuantization => OFFLOAD_GRAPH_IO_QUANTIZATION,
            OptionKey::HtpSpillFillBuffer => ENABLE_HTP_SPILL_FILL_BUFFER,
            OptionKey::HtpSharedMemoryAllocator => ENABLE_HTP_SHARED_MEMORY_ALLOCATOR,
            OptionKey::DumpJsonQnnGraph => DUMP_JSON_QNN_GRAPH,
            OptionKey::JsonQnnGraphDir => JSON_QNN_GRAPH_DIR,
            OptionKey::Npu => NPU_ENABLE,
            OptionKey::Fp16 => FP16_ENABLE,
            OptionKey::Htp => HTP_ENABLE,
        }
    }

    /// What kind of value this option takes.
    pub fn kind(self) -> OptionKind {
        match self {
            OptionKey::BackendPath
            | OptionKey::ProfilingFilePath
            | OptionKey::SaverPath
            | OptionKey::SocModel
            | OptionKey::JsonQnnGraphDir => OptionKind::Text,
            OptionKey::RpcControlLatency | OptionKey::VtcmMb | OptionKey::DeviceId => {
                OptionKind::Integer
            }
            OptionKey::ProfilingLevel => OptionKind::Choice(ProfilingLevel::TOKENS),
            OptionKey::PerformanceMode => OptionKind::Choice(PerformanceMode::TOKENS),
            OptionKey::ContextPriority => OptionKind::Choice(ContextPriority::TOKENS),
            OptionKey::GraphFinalizationMode => OptionKind::Choice(GraphFinalizationMode::TOKENS),
            OptionKey::HtpArch => OptionKind::Choice(HtpArch::TOKENS),
            OptionKey::HtpFp16Precision
            | OptionKey::HtpWeightSharing
            | OptionKey::OffloadGraphIoQuantization
            | OptionKey::HtpSpillFillBuffer
            | OptionKey::HtpSharedMemoryAllocator
            | OptionKey::DumpJsonQnnGraph
            | OptionKey::Npu
            | OptionKey::Fp16
            | OptionKey::Htp => OptionKind::Flag,
        }
    }

    /// Whether this is one of the shorthand options.
    pub fn is_shorthand(self) -> bool {
        matches!(self, OptionKey::Npu | OptionKey::Fp16 | OptionKey::Htp)
    }

    /// Look up an option by its wire key.
    pub fn from_wire_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.wire_key() == key)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}
