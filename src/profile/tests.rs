//! Tests for profile functionality.

use crate::error::QnnError;
use crate::options::{ContextPriority, GraphFinalizationMode, HtpArch, PerformanceMode};
use crate::profile::{Profile, Scalar};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_profile() {
    let profile = Profile::from_yaml("").unwrap();
    assert_eq!(profile, Profile::default());
    assert_eq!(profile.to_builder().build(), "{}");
}

#[test]
fn test_parse_partial_profile() {
    let yaml = r#"
backend_path: libQnnHtp.so
performance_mode: burst
htp_arch: 73
"#;
    let profile = Profile::from_yaml(yaml).unwrap();

    assert_eq!(profile.backend_path.as_deref(), Some("libQnnHtp.so"));
    assert_eq!(profile.performance_mode, Some(PerformanceMode::Burst));
    assert_eq!(profile.htp_arch, Some(HtpArch::V73));
    assert_eq!(profile.context_priority, None);
    assert!(profile.custom.is_empty());
}

#[test]
fn test_parse_full_profile() {
    let yaml = r#"
backend_path: libQnnHtp.so
saver_path: libQnnSaver.so
soc_model: 60
htp_arch: "75"
device_id: 0
npu: true
fp16: false
htp: true
performance_mode: sustained_high_performance
context_priority: normal_high
graph_finalization_mode: 3
vtcm_mb: 8
rpc_control_latency: 100
htp_fp16_precision: true
htp_weight_sharing: false
offload_graph_io_quantization: true
htp_spill_fill_buffer: false
htp_shared_memory_allocator: true
profiling_level: detailed
profiling_file_path: /data/local/tmp/profile.csv
dump_json_qnn_graph: true
json_qnn_graph_dir: /data/local/tmp/graphs
custom:
  htp_bf16_enable: 1
  extra_note: fast
"#;
    let profile = Profile::from_yaml(yaml).unwrap();

    assert_eq!(profile.soc_model, Some(Scalar::Integer(60)));
    assert_eq!(profile.htp_arch, Some(HtpArch::V75));
    assert_eq!(
        profile.graph_finalization_mode,
        Some(GraphFinalizationMode::MostOptimal)
    );
    assert_eq!(profile.context_priority, Some(ContextPriority::NormalHigh));
    assert_eq!(profile.rpc_control_latency, Some(100));
    assert_eq!(profile.custom.len(), 2);

    let builder = profile.to_builder();
    assert_eq!(builder.len(), 24);
    assert_eq!(builder.get("soc_model"), Some("60"));
    assert_eq!(builder.get("fp16_enable"), Some("0"));
    assert_eq!(builder.get("enable_htp_weight_sharing"), Some("0"));
    assert_eq!(builder.get("htp_bf16_enable"), Some("1"));
    assert_eq!(builder.get("extra_note"), Some("fast"));
}

#[test]
fn test_apply_order_is_vocabulary_then_custom() {
    let yaml = r#"
npu: true
htp_arch: 69
backend_path: libQnnHtp.so
custom:
  zeta: "1"
  alpha: "2"
"#;
    let doc = Profile::from_yaml(yaml).unwrap().to_builder().build();
    assert_eq!(
        doc,
        r#"{"backend_path":"libQnnHtp.so","htp_arch":"69","npu_enable":"1","zeta":"1","alpha":"2"}"#
    );
}

#[test]
fn test_custom_entry_overrides_typed_field() {
    let yaml = r#"
vtcm_mb: 4
custom:
  vtcm_mb: "16"
"#;
    let doc = Profile::from_yaml(yaml).unwrap().to_builder().build();
    assert_eq!(doc, r#"{"vtcm_mb":"16"}"#);
}

#[test]
fn test_apply_onto_existing_builder() {
    let profile = Profile::from_yaml("performance_mode: power_saver").unwrap();

    let mut builder = crate::QnnConfigBuilder::new();
    builder.performance_mode(PerformanceMode::Burst).npu();
    profile.apply(&mut builder);

    assert_eq!(
        builder.build(),
        r#"{"htp_performance_mode":"power_saver","npu_enable":"1"}"#
    );
}

#[test]
fn test_unknown_field_is_rejected() {
    let err = Profile::from_yaml("performance_mod: burst").unwrap_err();
    assert!(matches!(err, QnnError::Profile(_)));
    assert!(err.to_string().contains("performance_mod"));
}

#[test]
fn test_invalid_token_is_rejected() {
    let err = Profile::from_yaml("htp_arch: 70").unwrap_err();
    assert!(matches!(err, QnnError::Profile(_)));

    assert!(Profile::from_yaml("context_priority: urgent").is_err());
}

#[test]
fn test_validate_rejects_quotes_and_control_characters() {
    let err = Profile::from_yaml(r#"backend_path: 'lib"Qnn.so'"#).unwrap_err();
    assert!(err.to_string().contains("backend_path"));

    let yaml = "custom:\n  note: \"line\\nbreak\"\n";
    assert!(Profile::from_yaml(yaml).is_err());

    let yaml = "custom:\n  '': x\n";
    let err = Profile::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn test_windows_paths_are_accepted() {
    let profile = Profile::from_yaml(r#"backend_path: 'C:\qnn\QnnHtp.dll'"#).unwrap();
    assert_eq!(profile.backend_path.as_deref(), Some(r"C:\qnn\QnnHtp.dll"));
}

#[test]
fn test_yaml_roundtrip() {
    let mut profile = Profile::default();
    profile.htp_arch = Some(HtpArch::V68);
    profile.vtcm_mb = Some(8);
    profile.custom.insert("extra".to_string(), Scalar::from("x"));

    let yaml = profile.to_yaml().unwrap();
    assert!(!yaml.contains("backend_path"));
    assert_eq!(Profile::from_yaml(&yaml).unwrap(), profile);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "profiling_level: basic").unwrap();
    writeln!(file, "profiling_file_path: /tmp/qnn.csv").unwrap();

    let profile = Profile::load(file.path()).unwrap();
    assert_eq!(
        profile.to_builder().build(),
        r#"{"profiling_level":"basic","profiling_file_path":"/tmp/qnn.csv"}"#
    );
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Profile::load(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, QnnError::Io(_)));
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn test_unquoted_decimals_are_rejected() {
    let err = Profile::from_yaml("custom:\n  ratio: 1.10\n").unwrap_err();
    assert!(matches!(err, QnnError::Profile(_)));
    assert!(err.to_string().contains("ratio"));
    assert!(err.to_string().contains("quote"));

    assert!(Profile::from_yaml("soc_model: 2.0").is_err());
}

#[test]
fn test_quoted_decimals_are_kept_verbatim() {
    let yaml = "soc_model: '2.0'\ncustom:\n  ratio: \"1.10\"\n";
    let builder = Profile::from_yaml(yaml).unwrap().to_builder();
    assert_eq!(builder.get("soc_model"), Some("2.0"));
    assert_eq!(builder.get("ratio"), Some("1.10"));
}
