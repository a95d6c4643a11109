//! In-memory CMake presets document
//!
//! Built append-only over one pass of the description file and serialized
//! exactly once at the end, so a crash mid-run never leaves a partial file.

use crate::constants::{MULTI_CONFIG_GENERATOR_FAMILY, PRESETS_SCHEMA_VERSION};
use crate::error::{PresetgenError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Whether a generator keeps several build types in one configured tree
/// (Visual Studio style). Those need the configuration repeated at
/// build/test time; single-config generators bake it into the configure
/// step and must not.
///
/// Substring match on purpose: new single-config generators must not
/// require a code change here.
pub fn is_multi_config(generator: &str) -> bool {
    generator.contains(MULTI_CONFIG_GENERATOR_FAMILY)
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurePreset {
    pub name: String,
    pub description: String,
    pub generator: String,
    pub cache_variables: Map<String, Value>,
    pub toolchain_file: String,
    pub binary_dir: String,
}

/// A build or test preset: a back-reference to its configure preset,
/// plus an explicit configuration for multi-config generators only.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPreset {
    pub name: String,
    pub configure_preset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PresetDocument {
    pub version: u32,
    pub configure_presets: Vec<ConfigurePreset>,
    pub build_presets: Vec<WorkflowPreset>,
    pub test_presets: Vec<WorkflowPreset>,
}

impl Default for PresetDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetDocument {
    pub fn new() -> Self {
        Self {
            version: PRESETS_SCHEMA_VERSION,
            configure_presets: Vec::new(),
            build_presets: Vec::new(),
            test_presets: Vec::new(),
        }
    }

    /// Append one configure preset and its matching build/test presets.
    ///
    /// Append-only by design: a second preset under the same name is not
    /// merged or rejected, the later entry wins in consuming tools.
    pub fn add(&mut self, configure: ConfigurePreset, build_type: &str) {
        let name = configure.name.clone();
        let configuration =
            is_multi_config(&configure.generator).then(|| build_type.to_string());

        self.configure_presets.push(configure);
        self.build_presets.push(WorkflowPreset {
            name: name.clone(),
            configure_preset: name.clone(),
            configuration: configuration.clone(),
        });
        self.test_presets.push(WorkflowPreset {
            name: name.clone(),
            configure_preset: name,
            configuration,
        });
    }

    /// Serialize the whole document to `path`, replacing any previous file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| PresetgenError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }
}
