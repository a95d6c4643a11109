//! Conan profile-based manager
//!
//! One preset per profile. Installs land in the per-preset binary
//! directory, so every request is installed independently and the
//! toolchain file is the one conan generates next to the build tree.

use crate::constants::BUILD_DIR;
use crate::managers::PresetManager;
use crate::presets::{ConfigurePreset, PresetRequest};
use serde_json::{Map, Value};
use std::path::PathBuf;

pub struct ConanManager {
    install_prefix: PathBuf,
}

impl ConanManager {
    pub fn new(install_prefix: PathBuf) -> Self {
        Self { install_prefix }
    }
}

impl PresetManager for ConanManager {
    fn label(&self) -> &'static str {
        "conan"
    }

    fn tool(&self) -> &'static str {
        "conan"
    }

    fn preset_name(&self, req: &PresetRequest) -> String {
        req.target.clone()
    }

    fn dedup_key(&self, _req: &PresetRequest) -> Option<String> {
        // Each profile installs into its own build/{name}, so there is
        // nothing to share between requests.
        None
    }

    fn install_command(&self, req: &PresetRequest) -> String {
        let name = self.preset_name(req);
        format!(
            "conan install -pr:b default -pr:h {} -b missing -of {}/{} .",
            req.target, BUILD_DIR, name
        )
    }

    fn configure_preset(&self, req: &PresetRequest) -> ConfigurePreset {
        let name = self.preset_name(req);

        let mut cache_variables = Map::new();
        cache_variables.insert(
            "CMAKE_BUILD_TYPE".to_string(),
            Value::String(req.build_type.clone()),
        );
        cache_variables.insert(
            "CMAKE_INSTALL_PREFIX".to_string(),
            Value::String(self.install_prefix.to_string_lossy().into_owned()),
        );

        ConfigurePreset {
            name: name.clone(),
            description: format!("({})", req.generator),
            generator: req.generator.clone(),
            cache_variables,
            toolchain_file: format!("{}/{}/conan_toolchain.cmake", BUILD_DIR, name),
            binary_dir: format!("{}/{}", BUILD_DIR, name),
        }
    }
}
