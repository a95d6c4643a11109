//! Generate command
//!
//! The full pipeline for one manager family: read the description file,
//! install dependencies per unique unit, synthesize presets, and write
//! the document once at the end.

use crate::error::Result;
use crate::managers::{InstallDriver, PresetManager};
use crate::presets::{PresetDocument, reader};
use crate::ui as output;
use std::path::PathBuf;

pub struct GenerateOptions {
    pub file: PathBuf,
    pub output: PathBuf,
    pub skip_install: bool,
}

pub fn run<M: PresetManager>(manager: &M, opts: GenerateOptions) -> Result<()> {
    let parsed = reader::read_presets(&opts.file)?;

    if parsed.skipped > 0 {
        output::verbose(&format!(
            "Skipped {} comment/malformed line(s) in {}",
            parsed.skipped,
            opts.file.display()
        ));
    }

    if !opts.skip_install && which::which(manager.tool()).is_err() {
        output::warning(&format!(
            "'{}' not found on PATH; installs will fail but presets are still generated",
            manager.tool()
        ));
    }

    let mut driver = InstallDriver::new(opts.skip_install);
    let mut document = PresetDocument::new();

    for req in &parsed.requests {
        driver.ensure_installed(manager, req)?;
        document.add(manager.configure_preset(req), &req.build_type);
    }

    document.write_to(&opts.output)?;

    output::success(&format!(
        "Wrote {} {} preset(s) to {}",
        document.configure_presets.len(),
        manager.label(),
        opts.output.display()
    ));

    Ok(())
}
