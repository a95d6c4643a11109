//! Vcpkg triplet-based manager
//!
//! Installed trees are shared per triplet under `vcpkg/{triplet}`, so the
//! installer runs at most once per triplet no matter how many build types
//! or generators reference it. The Release preset keeps the bare triplet
//! name; other build types get a `-{buildType}` suffix.

use crate::constants::{BUILD_DIR, VCPKG_INSTALL_DIR, VCPKG_ROOT_ENV};
use crate::error::{PresetgenError, Result};
use crate::managers::PresetManager;
use crate::presets::{ConfigurePreset, PresetRequest};
use serde_json::{Map, Value};
use std::env;
use std::path::PathBuf;

#[derive(Debug)]
pub struct VcpkgManager {
    install_prefix: PathBuf,
    vcpkg_root: PathBuf,
}

impl VcpkgManager {
    pub fn new(install_prefix: PathBuf, vcpkg_root: PathBuf) -> Self {
        Self {
            install_prefix,
            vcpkg_root,
        }
    }

    /// Resolve the vcpkg checkout from the environment. Its absence is a
    /// fatal configuration error: the toolchain file lives inside it.
    pub fn from_env(install_prefix: PathBuf) -> Result<Self> {
        let root = env::var_os(VCPKG_ROOT_ENV)
            .ok_or_else(|| PresetgenError::MissingEnv(VCPKG_ROOT_ENV.to_string()))?;

        Ok(Self::new(install_prefix, PathBuf::from(root)))
    }

    fn installed_dir(&self, req: &PresetRequest) -> String {
        format!("{}/{}", VCPKG_INSTALL_DIR, req.target)
    }
}

impl PresetManager for VcpkgManager {
    fn label(&self) -> &'static str {
        "vcpkg"
    }

    fn tool(&self) -> &'static str {
        "vcpkg"
    }

    fn preset_name(&self, req: &PresetRequest) -> String {
        if req.build_type == "Release" {
            req.target.clone()
        } else {
            format!("{}-{}", req.target, req.build_type)
        }
    }

    fn dedup_key(&self, req: &PresetRequest) -> Option<String> {
        Some(req.target.clone())
    }

    fn install_command(&self, req: &PresetRequest) -> String {
        format!(
            "vcpkg install --triplet {} --x-install-root {}",
            req.target,
            self.installed_dir(req)
        )
    }

    fn configure_preset(&self, req: &PresetRequest) -> ConfigurePreset {
        let name = self.preset_name(req);

        let mut cache_variables = Map::new();
        cache_variables.insert(
            "VCPKG_INSTALLED_DIR".to_string(),
            Value::String(self.installed_dir(req)),
        );
        cache_variables.insert(
            "X_VCPKG_APPLOCAL_DEPS_INSTALL".to_string(),
            Value::String("ON".to_string()),
        );
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
            toolchain_file: self
                .vcpkg_root
                .join("scripts/buildsystems/vcpkg.cmake")
                .to_string_lossy()
                .into_owned(),
            binary_dir: format!("{}/{}", BUILD_DIR, name),
        }
    }
}
