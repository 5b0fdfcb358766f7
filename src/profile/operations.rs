//! Profile loading, validation, and application to a builder.

use super::model::Profile;
use super::types::Scalar;
use crate::builder::QnnConfigBuilder;
use crate::error::{QnnError, Result};
use std::path::Path;
use tracing::debug;

impl Profile {
    /// Load a profile from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Profile)` - Successfully loaded and validated profile
    /// * `Err(QnnError::Io)` - The file could not be read
    /// * `Err(QnnError::Profile)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            QnnError::Io(format!(
                "failed to read profile '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded QNN option profile");
        Self::from_yaml(&content)
    }

    /// Parse a profile from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes as YAML null rather than an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let profile: Profile = serde_yaml::from_str(yaml)
            .map_err(|e| QnnError::Profile(format!("failed to parse profile YAML: {}", e)))?;

        profile.validate()?;
        Ok(profile)
    }

    /// Serialize the profile to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| QnnError::Profile(format!("failed to serialize profile to YAML: {}", e)))
    }

    /// Reject text that cannot be written into the document unescaped.
    ///
    /// Validation rules:
    /// - `custom` keys must be non-empty
    /// - no key or text value may contain `"` or a control character
    /// - `soc_model` and `custom` values must not be unquoted decimals
    pub fn validate(&self) -> Result<()> {
        let text_fields = [
            ("backend_path", self.backend_path.as_deref()),
            ("saver_path", self.saver_path.as_deref()),
            ("profiling_file_path", self.profiling_file_path.as_deref()),
            ("json_qnn_graph_dir", self.json_qnn_graph_dir.as_deref()),
        ];
        for (field, value) in text_fields {
            if let Some(value) = value {
                check_plain(field, value)?;
            }
        }

        if let Some(soc_model) = &self.soc_model {
            check_scalar("soc_model", soc_model)?;
        }

        for (key, value) in &self.custom {
            if key.is_empty() {
                return Err(QnnError::Profile(
                    "profile validation failed: custom keys must be non-empty".to_string(),
                ));
            }
            check_plain("custom key", key)?;
            check_scalar(key, value)?;
        }

        Ok(())
    }

    /// Apply every option set in this profile to `builder`.
    ///
    /// Typed fields are applied in vocabulary order, then `custom` entries
    /// in file order, so a custom entry can override a typed field.
    pub fn apply(&self, builder: &mut QnnConfigBuilder) {
        if let Some(path) = &self.backend_path {
            builder.backend_path(path.as_str());
        }
        if let Some(level) = self.profiling_level {
            builder.profiling_level(level);
        }
        if let Some(path) = &self.profiling_file_path {
            builder.profiling_file_path(path.as_str());
        }
        if let Some(latency) = self.rpc_control_latency {
            builder.rpc_control_latency(latency);
        }
        if let Some(size) = self.vtcm_mb {
            builder.vtcm_mb(size);
        }
        if let Some(mode) = self.performance_mode {
            builder.performance_mode(mode);
        }
        if let Some(path) = &self.saver_path {
            builder.saver_path(path.as_str());
        }
        if let Some(priority) = self.context_priority {
            builder.context_priority(priority);
        }
        if let Some(mode) = self.graph_finalization_mode {
            builder.graph_finalization_mode(mode);
        }
        if let Some(model) = &self.soc_model {
            builder.soc_model(model.encode());
        }
        if let Some(arch) = self.htp_arch {
            builder.htp_arch(arch);
        }
        if let Some(id) = self.device_id {
            builder.device_id(id);
        }
        if let Some(enable) = self.htp_fp16_precision {
            builder.enable_htp_fp16_precision(enable);
        }
        if let Some(enable) = self.htp_weight_sharing {
            builder.enable_htp_weight_sharing(enable);
        }
        if let Some(enable) = self.offload_graph_io_quantization {
            builder.offload_graph_io_quantization(enable);
        }
        if let Some(enable) = self.htp_spill_fill_buffer {
            builder.enable_htp_spill_fill_buffer(enable);
        }
        if let Some(enable) = self.htp_shared_memory_allocator {
            builder.enable_htp_shared_memory_allocator(enable);
        }
        if let Some(enable) = self.dump_json_qnn_graph {
            builder.dump_json_qnn_graph(enable);
        }
        if let Some(path) = &self.json_qnn_graph_dir {
            builder.json_qnn_graph_dir(path.as_str());
        }
        if let Some(enable) = self.npu {
            builder.use_npu(enable);
        }
        if let Some(enable) = self.fp16 {
            builder.use_fp16(enable);
        }
        if let Some(enable) = self.htp {
            builder.use_htp(enable);
        }

        for (key, value) in &self.custom {
            builder.custom(key.as_str(), value.encode());
        }
    }

    /// A fresh builder holding this profile's options.
    pub fn to_builder(&self) -> QnnConfigBuilder {
        let mut builder = QnnConfigBuilder::new();
        self.apply(&mut builder);
        builder
    }
}

fn check_scalar(field: &str, value: &Scalar) -> Result<()> {
    // YAML has already normalized the digits (1.10 -> 1.1), so the author's
    // text cannot be reproduced.
    if let Scalar::Float(x) = value {
        return Err(QnnError::Profile(format!(
            "profile validation failed: {} is the decimal {}; quote it to keep the exact text",
            field, x
        )));
    }
    check_plain(field, &value.encode())
}

fn check_plain(field: &str, value: &str) -> Result<()> {
    if let Some(c) = value
        .chars()
        .find(|c| *c == '"' || c.is_control())
    {
        return Err(QnnError::Profile(format!(
            "profile validation failed: {} contains unsupported character {:?}",
            field, c
        )));
    }
    Ok(())
}
