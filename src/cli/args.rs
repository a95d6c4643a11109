use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "presetgen",
    about = "Generate CMakeUserPresets.json from conan profiles or vcpkg triplets",
    long_about = "Reads a line-oriented preset description file, installs dependencies \
through the chosen package manager, and writes matching configure/build/test \
presets to CMakeUserPresets.json",
    version,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install conan profiles and generate presets (reads cpresets.txt)
    Conan {
        /// Preset description file
        #[arg(short = 'f', long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output presets file
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Generate presets without running the installer
        #[arg(long)]
        skip_install: bool,
    },

    /// Install vcpkg triplets and generate presets (reads vpresets.txt)
    Vcpkg {
        /// Preset description file
        #[arg(short = 'f', long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output presets file
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Generate presets without running the installer
        #[arg(long)]
        skip_install: bool,
    },
}
