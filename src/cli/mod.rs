//! CLI argument parsing for qnn-options.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use qnn_options::options::{
    ContextPriority, GraphFinalizationMode, HtpArch, PerformanceMode, ProfilingLevel, parse_choice,
};
use std::path::PathBuf;

/// qnn-options: assemble and check QNN execution provider configuration documents.
#[derive(Parser, Debug)]
#[command(name = "qnn-options")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for qnn-options.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a configuration document and print it.
    ///
    /// A profile is applied first, then option flags, then `--set` pairs.
    /// Later settings override earlier ones for the same key.
    Build(BuildArgs),

    /// Validate a configuration document against the option vocabulary.
    Check(CheckArgs),

    /// List every known option with its wire key and allowed values.
    Keys,
}

/// Arguments for the `build` command.
#[derive(Parser, Debug, Default)]
pub struct BuildArgs {
    /// YAML profile to start from.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Enable or disable the NPU (npu_enable).
    #[arg(long, action = ArgAction::Set)]
    pub npu: Option<bool>,

    /// Enable or disable fp16 execution (fp16_enable).
    #[arg(long, action = ArgAction::Set)]
    pub fp16: Option<bool>,

    /// Enable or disable the HTP backend (htp_enable).
    #[arg(long, action = ArgAction::Set)]
    pub htp: Option<bool>,

    /// Path to the QNN backend library.
    #[arg(long)]
    pub backend_path: Option<String>,

    #[arg(long, value_parser = parse_choice::<PerformanceMode>)]
    pub performance_mode: Option<PerformanceMode>,

    #[arg(long, value_parser = parse_choice::<ProfilingLevel>)]
    pub profiling_level: Option<ProfilingLevel>,

    #[arg(long)]
    pub profiling_file_path: Option<String>,

    /// VTCM size in megabytes.
    #[arg(long, allow_negative_numbers = true)]
    pub vtcm_mb: Option<i64>,

    /// Path to the QNN saver backend library.
    #[arg(long)]
    pub saver_path: Option<String>,

    #[arg(long, value_parser = parse_choice::<ContextPriority>)]
    pub context_priority: Option<ContextPriority>,

    /// Graph finalization optimization mode (0-3).
    #[arg(long, value_parser = parse_choice::<GraphFinalizationMode>)]
    pub graph_finalization_mode: Option<GraphFinalizationMode>,

    #[arg(long)]
    pub soc_model: Option<String>,

    /// HTP architecture (0, 68, 69, 73, 75, 79).
    #[arg(long, value_parser = parse_choice::<HtpArch>)]
    pub htp_arch: Option<HtpArch>,

    #[arg(long, allow_negative_numbers = true)]
    pub device_id: Option<i64>,

    /// RPC control latency in microseconds.
    #[arg(long)]
    pub rpc_control_latency: Option<u32>,

    /// Extra option as KEY=VALUE (repeatable).
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Validate the document before printing it.
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// The configuration document to validate.
    pub document: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
