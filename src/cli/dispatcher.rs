//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::constants::{CONAN_PRESETS_FILE, OUTPUT_FILE_NAME, VCPKG_PRESETS_FILE};
use crate::error::Result;
use crate::managers::{ConanManager, VcpkgManager};
use crate::utils::paths;
use std::path::PathBuf;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Command::Conan {
            file,
            output,
            skip_install,
        } => {
            let manager = ConanManager::new(paths::install_prefix()?);
            commands::generate::run(
                &manager,
                commands::generate::GenerateOptions {
                    file: file.clone().unwrap_or_else(|| PathBuf::from(CONAN_PRESETS_FILE)),
                    output: output.clone().unwrap_or_else(|| PathBuf::from(OUTPUT_FILE_NAME)),
                    skip_install: *skip_install,
                },
            )
        }

        Command::Vcpkg {
            file,
            output,
            skip_install,
        } => {
            let manager = VcpkgManager::from_env(paths::install_prefix()?)?;
            commands::generate::run(
                &manager,
                commands::generate::GenerateOptions {
                    file: file.clone().unwrap_or_else(|| PathBuf::from(VCPKG_PRESETS_FILE)),
                    output: output.clone().unwrap_or_else(|| PathBuf::from(OUTPUT_FILE_NAME)),
                    skip_install: *skip_install,
                },
            )
        }
    }
}
