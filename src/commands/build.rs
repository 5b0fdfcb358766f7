//! Implementation of the `qnn-options build` command.

use crate::cli::BuildArgs;
use qnn_options::validate::validate_document;
use qnn_options::{Profile, QnnConfigBuilder, QnnError, Result};
use tracing::{debug, info};

/// Assemble the document described by `args`.
///
/// Order of application: profile, typed flags, then `--set` pairs.
pub fn cmd_build(args: &BuildArgs) -> Result<String> {
    let mut builder = match &args.profile {
        Some(path) => {
            info!(profile = %path.display(), "applying profile");
            Profile::load(path)?.to_builder()
        }
        None => QnnConfigBuilder::new(),
    };

    apply_flags(args, &mut builder);

    for pair in &args.set {
        let (key, value) = parse_pair(pair)?;
        builder.custom(key, value);
    }

    let document = builder.build();
    // `--check` validates the emitted text exactly as `check` does.
    if args.check {
        validate_document(&document)?;
    }

    debug!(options = builder.len(), "built QNN configuration");
    Ok(document)
}

fn apply_flags(args: &BuildArgs, builder: &mut QnnConfigBuilder) {
    if let Some(enable) = args.npu {
        builder.use_npu(enable);
    }
    if let Some(enable) = args.fp16 {
        builder.use_fp16(enable);
    }
    if let Some(enable) = args.htp {
        builder.use_htp(enable);
    }
    if let Some(path) = &args.backend_path {
        builder.backend_path(path.as_str());
    }
    if let Some(mode) = args.performance_mode {
        builder.performance_mode(mode);
    }
    if let Some(level) = args.profiling_level {
        builder.profiling_level(level);
    }
    if let Some(path) = &args.profiling_file_path {
        builder.profiling_file_path(path.as_str());
    }
    if let Some(size) = args.vtcm_mb {
        builder.vtcm_mb(size);
    }
    if let Some(path) = &args.saver_path {
        builder.saver_path(path.as_str());
    }
    if let Some(priority) = args.context_priority {
        builder.context_priority(priority);
    }
    if let Some(mode) = args.graph_finalization_mode {
        builder.graph_finalization_mode(mode);
    }
    if let Some(model) = &args.soc_model {
        builder.soc_model(model.as_str());
    }
    if let Some(arch) = args.htp_arch {
        builder.htp_arch(arch);
    }
    if let Some(id) = args.device_id {
        builder.device_id(id);
    }
    if let Some(latency) = args.rpc_control_latency {
        builder.rpc_control_latency(latency);
    }
}

/// Split a `KEY=VALUE` argument at the first `=`.
fn parse_pair(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(QnnError::Usage(format!(
            "--set expects KEY=VALUE, got '{}'",
            pair
        ))),
    }
}
