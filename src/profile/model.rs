//! Profile struct definition.

use super::types::Scalar;
use crate::options::{
    ContextPriority, GraphFinalizationMode, HtpArch, PerformanceMode, ProfilingLevel,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A declared set of QNN options.
///
/// Fields left out of the YAML are not written to the document at all, so
/// the backend applies its own default for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    // =========================================================================
    // Backend selection
    // =========================================================================
    /// Path to the QNN backend library.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_path: Option<String>,

    /// QNN saver backend library.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saver_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub soc_model: Option<Scalar>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub htp_arch: Option<HtpArch>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,

    // =========================================================================
    // Shorthand switches
    // =========================================================================
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npu: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fp16: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub htp: Option<bool>,

    // =========================================================================
    // Performance
    // =========================================================================
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_mode: Option<PerformanceMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_priority: Option<ContextPriority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_finalization_mode: Option<GraphFinalizationMode>,

    /// VTCM size in megabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vtcm_mb: Option<i64>,

    /// RPC control latency in microseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_control_latency: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub htp_fp16_precision: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub htp_weight_sharing: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offload_graph_io_quantization: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub htp_spill_fill_buffer: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub htp_shared_memory_allocator: Option<bool>,

    // =========================================================================
    // Diagnostics
    // =========================================================================
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiling_level: Option<ProfilingLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiling_file_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dump_json_qnn_graph: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_qnn_graph_dir: Option<String>,

    // =========================================================================
    // Extra options
    // =========================================================================
    /// Extra key/value pairs written verbatim, in file order, after the
    /// typed fields.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub custom: IndexMap<String, Scalar>,
}
