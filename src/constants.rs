// Common constants used throughout the codebase

/// Generated presets document name (consumed by IDEs that support CMake presets)
pub const OUTPUT_FILE_NAME: &str = "CMakeUserPresets.json";

/// CMake presets schema version written into the document
pub const PRESETS_SCHEMA_VERSION: u32 = 3;

/// Default description file for the conan manager
pub const CONAN_PRESETS_FILE: &str = "cpresets.txt";

/// Default description file for the vcpkg manager
pub const VCPKG_PRESETS_FILE: &str = "vpresets.txt";

/// Per-preset binary directory root
pub const BUILD_DIR: &str = "build";

/// Shared per-triplet install root for vcpkg
pub const VCPKG_INSTALL_DIR: &str = "vcpkg";

/// Environment variable pointing at the vcpkg checkout
pub const VCPKG_ROOT_ENV: &str = "VCPKG_ROOT";

/// Generator family that requires an explicit configuration at build/test time
pub const MULTI_CONFIG_GENERATOR_FAMILY: &str = "Visual Studio";
