pub mod conan;
pub mod driver;
pub mod vcpkg;

use crate::presets::{ConfigurePreset, PresetRequest};

pub use conan::ConanManager;
pub use driver::InstallDriver;
pub use vcpkg::VcpkgManager;

/// One package-manager family: how preset names are derived, how installs
/// are invoked and deduplicated, and how configure presets are shaped.
pub trait PresetManager {
    /// Human-readable family name for output.
    fn label(&self) -> &'static str;

    /// Binary expected on PATH.
    fn tool(&self) -> &'static str;

    /// Preset name tying the configure/build/test triple together.
    fn preset_name(&self, req: &PresetRequest) -> String;

    /// Deduplication key for installs. `None` means every request installs
    /// independently.
    fn dedup_key(&self, req: &PresetRequest) -> Option<String>;

    /// Shell command line that installs dependencies for this request.
    fn install_command(&self, req: &PresetRequest) -> String;

    /// Configure preset for this request, including manager-specific cache
    /// variables and toolchain file.
    fn configure_preset(&self, req: &PresetRequest) -> ConfigurePreset;
}
