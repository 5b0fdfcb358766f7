//! Tests for the option vocabulary.

use crate::options::keys;
use crate::options::{
    Choice, ContextPriority, GraphFinalizationMode, HtpArch, OptionKey, OptionKind,
    PerformanceMode, ProfilingLevel, parse_choice,
};
use std::collections::HashSet;

fn assert_tokens_match<T: Choice>() {
    let tokens: Vec<&str> = T::ALL.iter().map(|c| c.token()).collect();
    assert_eq!(tokens, T::TOKENS, "{} tokens out of sync", T::NAME);

    let unique: HashSet<&str> = tokens.iter().copied().collect();
    assert_eq!(unique.len(), tokens.len(), "{} has duplicate tokens", T::NAME);

    for choice in T::ALL {
        assert_eq!(T::from_token(choice.token()), Some(*choice));
    }
}

#[test]
fn test_tokens_match_variants() {
    assert_tokens_match::<PerformanceMode>();
    assert_tokens_match::<ProfilingLevel>();
    assert_tokens_match::<ContextPriority>();
    assert_tokens_match::<GraphFinalizationMode>();
    assert_tokens_match::<HtpArch>();
}

#[test]
fn test_performance_mode_tokens() {
    assert_eq!(PerformanceMode::ALL.len(), 10);
    assert_eq!(PerformanceMode::Burst.token(), "burst");
    assert_eq!(PerformanceMode::HighPowerSaver.token(), "high_power_saver");
    assert_eq!(
        PerformanceMode::SustainedHighPerformance.token(),
        "sustained_high_performance"
    );
    assert_eq!(PerformanceMode::ExtremePowerSaver.to_string(), "extreme_power_saver");
}

#[test]
fn test_digit_vocabularies_are_distinct() {
    assert_eq!(GraphFinalizationMode::MostOptimal.token(), "3");
    assert_eq!(HtpArch::V73.token(), "73");
    assert_eq!(HtpArch::Default.token(), "0");
    assert_eq!(GraphFinalizationMode::Default.token(), "0");
    assert_eq!(HtpArch::from_token("3"), None);
    assert_eq!(GraphFinalizationMode::from_token("68"), None);
}

#[test]
fn test_from_token_rejects_unknown() {
    assert_eq!(ProfilingLevel::from_token("verbose"), None);
    assert_eq!(ContextPriority::from_token("HIGH"), None);
    assert_eq!(PerformanceMode::from_token(""), None);
}

#[test]
fn test_parse_choice_error_lists_tokens() {
    let err = parse_choice::<ContextPriority>("urgent").unwrap_err();
    assert!(err.contains("context priority"));
    assert!(err.contains("low, normal, normal_high, high"));

    assert_eq!(parse_choice::<HtpArch>("75"), Ok(HtpArch::V75));
}

#[test]
fn test_wire_keys_are_unique() {
    let wire: HashSet<&str> = OptionKey::ALL.iter().map(|k| k.wire_key()).collect();
    assert_eq!(wire.len(), OptionKey::ALL.len());
    assert_eq!(OptionKey::ALL.iter().filter(|k| !k.is_shorthand()).count(), 19);
}

#[test]
fn test_wire_key_lookup() {
    assert_eq!(
        OptionKey::GraphFinalizationMode.wire_key(),
        "htp_graph_finalization_optimization_mode"
    );
    assert_eq!(OptionKey::Npu.wire_key(), keys::NPU_ENABLE);
    assert_eq!(
        OptionKey::from_wire_key("qnn_context_priority"),
        Some(OptionKey::ContextPriority)
    );
    assert_eq!(OptionKey::from_wire_key("fp16_enable"), Some(OptionKey::Fp16));
    assert_eq!(OptionKey::from_wire_key("not_an_option"), None);
}

#[test]
fn test_option_kinds() {
    assert_eq!(OptionKey::BackendPath.kind(), OptionKind::Text);
    assert_eq!(OptionKey::VtcmMb.kind(), OptionKind::Integer);
    assert_eq!(OptionKey::Htp.kind(), OptionKind::Flag);
    assert_eq!(
        OptionKey::HtpArch.kind().allowed_values(),
        Some(HtpArch::TOKENS)
    );
    assert_eq!(OptionKey::DeviceId.kind().allowed_values(), None);
}

#[test]
fn test_option_kind_accepts() {
    assert!(OptionKind::Flag.accepts("1"));
    assert!(!OptionKind::Flag.accepts("true"));
    assert!(OptionKind::Integer.accepts("-5"));
    assert!(OptionKind::Text.accepts(""));
    assert!(OptionKey::ProfilingLevel.kind().accepts("detailed"));
    assert!(!OptionKey::ProfilingLevel.kind().accepts("full"));
}

#[test]
fn test_deserialize_choice_from_yaml() {
    let arch: HtpArch = serde_yaml::from_str("73").unwrap();
    assert_eq!(arch, HtpArch::V73);

    let arch: HtpArch = serde_yaml::from_str("\"69\"").unwrap();
    assert_eq!(arch, HtpArch::V69);

    let mode: PerformanceMode = serde_yaml::from_str("low_balanced").unwrap();
    assert_eq!(mode, PerformanceMode::LowBalanced);

    assert!(serde_yaml::from_str::<ProfilingLevel>("loud").is_err());
}

#[test]
fn test_serialize_choice_as_token() {
    let json = serde_json::to_string(&GraphFinalizationMode::OptimalGraph).unwrap();
    assert_eq!(json, "\"2\"");
}
