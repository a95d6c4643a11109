//! Installer driver
//!
//! Runs the external package manager once per unique install unit, in
//! file order, blocking. Failures are not fatal: the presets file is
//! generation-time metadata and the real error surfaces later when CMake
//! configures against a missing install tree.

use crate::error::Result;
use crate::managers::PresetManager;
use crate::presets::PresetRequest;
use crate::ui as output;
use std::collections::HashSet;
use std::process::{Command, Stdio};

pub struct InstallDriver {
    seen: HashSet<String>,
    skip_install: bool,
}

impl InstallDriver {
    pub fn new(skip_install: bool) -> Self {
        Self {
            seen: HashSet::new(),
            skip_install,
        }
    }

    /// Install dependencies for one request unless its unit was already
    /// handled this run. Returns whether this request triggered an
    /// installation.
    pub fn ensure_installed<M: PresetManager + ?Sized>(
        &mut self,
        manager: &M,
        req: &PresetRequest,
    ) -> Result<bool> {
        if let Some(key) = manager.dedup_key(req) {
            if self.seen.contains(&key) {
                return Ok(false);
            }
            self.seen.insert(key);
        }

        output::info(&format!("Installing dependencies for {}", req.target));

        if !self.skip_install {
            run_shell(&manager.install_command(req), &req.target);
        }

        Ok(true)
    }
}

/// Run one installer command through the shell with inherited stdio.
/// The exit status is observed but never enforced.
fn run_shell(command: &str, target: &str) {
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    match status {
        Ok(status) if status.success() => {}
        Ok(status) => {
            output::warning(&format!(
                "Install for {} exited with {}; continuing",
                target, status
            ));
        }
        Err(e) => {
            output::warning(&format!(
                "Could not run installer for {}: {}; continuing",
                target, e
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::ConfigurePreset;
    use serde_json::Map;

    struct StubManager {
        command: &'static str,
        dedup: bool,
    }

    impl PresetManager for StubManager {
        fn label(&self) -> &'static str {
            "stub"
        }

        fn tool(&self) -> &'static str {
            "true"
        }

        fn preset_name(&self, req: &PresetRequest) -> String {
            req.target.clone()
        }

        fn dedup_key(&self, req: &PresetRequest) -> Option<String> {
            self.dedup.then(|| req.target.clone())
        }

        fn install_command(&self, _req: &PresetRequest) -> String {
            self.command.to_string()
        }

        fn configure_preset(&self, req: &PresetRequest) -> ConfigurePreset {
            ConfigurePreset {
                name: req.target.clone(),
                description: format!("({})", req.generator),
                generator: req.generator.clone(),
                cache_variables: Map::new(),
                toolchain_file: String::new(),
                binary_dir: format!("build/{}", req.target),
            }
        }
    }

    fn request(target: &str, build_type: &str) -> PresetRequest {
        PresetRequest {
            target: target.to_string(),
            build_type: build_type.to_string(),
            generator: "Ninja".to_string(),
        }
    }

    #[test]
    fn deduplicates_on_the_unit_key() {
        let manager = StubManager {
            command: "true",
            dedup: true,
        };
        let mut driver = InstallDriver::new(true);

        assert!(driver.ensure_installed(&manager, &request("x64-linux", "Debug")).unwrap());
        assert!(!driver.ensure_installed(&manager, &request("x64-linux", "Release")).unwrap());
        assert!(driver.ensure_installed(&manager, &request("x64-osx", "Debug")).unwrap());
    }

    #[test]
    fn installs_every_request_without_a_key() {
        let manager = StubManager {
            command: "true",
            dedup: false,
        };
        let mut driver = InstallDriver::new(true);

        assert!(driver.ensure_installed(&manager, &request("profile", "Debug")).unwrap());
        assert!(driver.ensure_installed(&manager, &request("profile", "Release")).unwrap());
    }

    #[test]
    fn failing_installer_is_not_fatal() {
        let manager = StubManager {
            command: "exit 1",
            dedup: true,
        };
        let mut driver = InstallDriver::new(false);

        assert!(driver.ensure_installed(&manager, &request("x64-linux", "Debug")).unwrap());
    }

    #[test]
    fn succeeding_installer_runs() {
        let manager = StubManager {
            command: "true",
            dedup: true,
        };
        let mut driver = InstallDriver::new(false);

        assert!(driver.ensure_installed(&manager, &request("x64-linux", "Debug")).unwrap());
    }
}
