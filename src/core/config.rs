use crate::error::{GomiiError, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Remote host serving package archives.
pub const DEFAULT_BASE_URL: &str = "https://gomii.example.com";

/// Local directory archives are written to. Must already exist.
pub const DEFAULT_INSTALL_DIR: &str = "/opt/gomii";

const PACKAGE_SUFFIX: &str = ".zip";

/// A package identifier as given on the command line.
///
/// Only names that stay inside the install directory are accepted; anything
/// else is used verbatim with no escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName(String);

impl PackageName {
    pub fn parse(name: &str) -> Result<Self> {
        let escapes_dir = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\', '\0']);

        if escapes_dir {
            return Err(GomiiError::invalid_package_name(name));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub install_dir: PathBuf,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            install_dir: PathBuf::from(DEFAULT_INSTALL_DIR),
            timeout: None,
        }
    }
}

impl Config {
    pub fn new(base_url: String, install_dir: PathBuf, timeout: Option<Duration>) -> Self {
        Config {
            base_url,
            install_dir,
            timeout,
        }
    }

    /// `<base>/packages/<name>.zip`
    pub fn get_package_url(&self, name: &PackageName) -> String {
        format!("{}/packages/{}{}", self.base_url, name, PACKAGE_SUFFIX)
    }

    /// `<install-dir>/<name>.zip`, built by concatenation rather than
    /// `Path::join` so nothing is normalized. An install dir ending in `/`
    /// yields a doubled separator, which the OS resolves to the same file.
    pub fn get_package_path(&self, name: &PackageName) -> PathBuf {
        let mut path = OsString::from(self.install_dir.as_os_str());
        path.push("/");
        path.push(name.as_str());
        path.push(PACKAGE_SUFFIX);
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn name(s: &str) -> PackageName {
        PackageName::parse(s).unwrap()
    }

    #[test]
    fn test_default_package_url() {
        let config = Config::default();
        assert_eq!(
            config.get_package_url(&name("hello-world")),
            "https://gomii.example.com/packages/hello-world.zip"
        );
    }

    #[test]
    fn test_default_package_path() {
        let config = Config::default();
        assert_eq!(
            config.get_package_path(&name("hello-world")),
            PathBuf::from("/opt/gomii/hello-world.zip")
        );
    }

    #[test]
    fn test_names_are_not_escaped() {
        let config = Config::default();
        let odd = name("my pkg?v=1&x#frag");
        assert_eq!(
            config.get_package_url(&odd),
            "https://gomii.example.com/packages/my pkg?v=1&x#frag.zip"
        );
        assert_eq!(
            config.get_package_path(&odd),
            PathBuf::from("/opt/gomii/my pkg?v=1&x#frag.zip")
        );
    }

    #[test]
    fn test_dotted_names_are_kept() {
        let config = Config::default();
        assert_eq!(
            config.get_package_path(&name("..hidden")),
            PathBuf::from("/opt/gomii/..hidden.zip")
        );
        assert_eq!(
            config.get_package_path(&name("lib.core-1.2")),
            PathBuf::from("/opt/gomii/lib.core-1.2.zip")
        );
    }

    #[test]
    fn test_custom_locations() {
        let config = Config::new(
            "http://127.0.0.1:8080".to_string(),
            PathBuf::from("/tmp/gomii"),
            None,
        );
        assert_eq!(
            config.get_package_url(&name("demo")),
            "http://127.0.0.1:8080/packages/demo.zip"
        );
        assert_eq!(
            config.get_package_path(&name("demo")),
            PathBuf::from("/tmp/gomii/demo.zip")
        );
    }

    #[test]
    fn test_trailing_separators_are_kept() {
        let config = Config::new(
            "http://127.0.0.1:8080/".to_string(),
            PathBuf::from("/tmp/gomii/"),
            None,
        );
        assert_eq!(
            config.get_package_url(&name("demo")),
            "http://127.0.0.1:8080//packages/demo.zip"
        );
        assert_eq!(
            config.get_package_path(&name("demo")).as_os_str(),
            "/tmp/gomii//demo.zip"
        );
    }

    #[test]
    fn test_rejects_names_leaving_install_dir() {
        for bad in ["", ".", "..", "../etc/passwd", "a/b", "/abs", "a\\b", "nul\0byte"] {
            let err = PackageName::parse(bad).unwrap_err();
            assert!(
                matches!(err, GomiiError::InvalidPackageName { ref name } if name == bad),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
