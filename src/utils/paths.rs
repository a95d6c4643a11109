use crate::error::{PresetgenError, Result};
use directories::UserDirs;
use std::path::PathBuf;

/// Default CMAKE_INSTALL_PREFIX for generated presets: `~/.local`.
pub fn install_prefix() -> Result<PathBuf> {
    let user_dirs = UserDirs::new().ok_or_else(|| {
        PresetgenError::Other("Could not determine user home directory".to_string())
    })?;

    Ok(user_dirs.home_dir().join(".local"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_prefix_ends_with_dot_local() {
        let prefix = install_prefix().unwrap();
        assert!(prefix.ends_with(".local"));
    }
}
