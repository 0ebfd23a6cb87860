//! Locating the CSV a user typed
//!
//! Candidates, in order: the name as given (absolute, or relative to the
//! current directory), then the name under the install directory.

use std::path::{Path, PathBuf};

use crate::errors::{RecordError, Result};

/// Resolves user-supplied file names against a fixed list of locations
#[derive(Debug, Clone)]
pub struct PathResolver {
    install_dir: Option<PathBuf>,
}

impl PathResolver {
    pub fn new(install_dir: Option<PathBuf>) -> Self {
        PathResolver { install_dir }
    }

    /// Resolver rooted at the directory of the running executable
    pub fn from_current_exe() -> Self {
        let install_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self::new(install_dir)
    }

    /// First existing candidate for `file_name`.
    ///
    /// Fails with `FileNotFound` carrying every absolute form tried, in order.
    /// Contents are not inspected here.
    pub fn resolve(&self, file_name: &str) -> Result<PathBuf> {
        let mut attempts = Vec::new();

        let as_given = PathBuf::from(file_name);
        attempts.push(absolutize(&as_given));
        if as_given.exists() {
            log::debug!("Resolved {} as given", file_name);
            return Ok(as_given);
        }

        if let Some(dir) = &self.install_dir {
            let beside_install = dir.join(file_name);
            if !attempts.contains(&beside_install) {
                attempts.push(beside_install.clone());
            }
            if beside_install.exists() {
                log::debug!("Resolved {} under {}", file_name, dir.display());
                return Ok(beside_install);
            }
        }

        log::info!("Could not resolve {} after {} attempt(s)", file_name, attempts.len());
        Err(RecordError::FileNotFound { attempts })
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::from_current_exe()
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absolute_path_as_given() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("aqi.csv");
        std::fs::write(&file, "City,AQI\n").unwrap();

        let resolver = PathResolver::new(None);
        let resolved = resolver.resolve(file.to_str().unwrap()).unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn test_falls_back_to_install_dir() {
        let install = TempDir::new().unwrap();
        let name = "resolver_install_only_fixture.csv";
        std::fs::write(install.path().join(name), "City,AQI\n").unwrap();

        let resolver = PathResolver::new(Some(install.path().to_path_buf()));
        let resolved = resolver.resolve(name).unwrap();
        assert_eq!(resolved, install.path().join(name));
    }

    #[test]
    fn test_not_found_lists_attempts_in_order() {
        let install = TempDir::new().unwrap();
        let name = "resolver_missing_fixture.csv";

        let resolver = PathResolver::new(Some(install.path().to_path_buf()));
        match resolver.resolve(name) {
            Err(RecordError::FileNotFound { attempts }) => {
                assert_eq!(attempts.len(), 2);
                assert!(attempts[0].is_absolute());
                assert!(attempts[0].ends_with(name));
                assert_eq!(attempts[1], install.path().join(name));
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_absolute_missing_path_not_repeated() {
        let install = TempDir::new().unwrap();
        let missing = install.path().join("nope.csv");

        let resolver = PathResolver::new(Some(install.path().to_path_buf()));
        match resolver.resolve(missing.to_str().unwrap()) {
            Err(RecordError::FileNotFound { attempts }) => assert_eq!(attempts, vec![missing]),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }
}
