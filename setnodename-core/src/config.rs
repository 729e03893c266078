use crate::constants::{DEBUG_ENV, NODENAME_ENV};
use crate::nodename::Nodename;
use std::ffi::OsString;
use std::os::unix::ffi::OsStrExt;

/// Source of environment variables.
pub trait Environment {
    /// Get the value of `key`, `None` if unset.
    fn var_os(&self, key: &str) -> Option<OsString>;
}

/// The environment of the current process.
#[derive(Debug, Copy, Clone, Default)]
pub struct ProcessEnvironment {}

impl Environment for ProcessEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// The substitute nodename and debug flag, fixed once loaded.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Config {
    nodename: Nodename,
    debug: bool,
}

impl Config {
    /// Read `SETNODENAME` and `SETNODENAME_DEBUG` from `env`.
    ///
    /// When `SETNODENAME` is unset a warning is written and `real` is used.
    pub fn load(env: &impl Environment, real: &Nodename) -> Self {
        let nodename = match env.var_os(NODENAME_ENV) {
            Some(value) => Nodename::new(value.as_bytes()),
            None => {
                crate::warn!("ERROR: Environment variable {NODENAME_ENV} is not set !");
                *real
            }
        };
        let debug = env.var_os(DEBUG_ENV).is_some();
        if debug {
            crate::info!("INFO: Setting new hostname '{nodename}'");
        }
        Config { nodename, debug }
    }

    /// The nodename reported to callers.
    #[must_use]
    pub fn nodename(&self) -> &Nodename {
        &self.nodename
    }

    /// Whether diagnostic tracing is enabled.
    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    impl Environment for HashMap<&'static str, &'static str> {
        fn var_os(&self, key: &str) -> Option<OsString> {
            self.get(key).map(OsString::from)
        }
    }

    fn real() -> Nodename {
        Nodename::new(b"prod-db-1")
    }

    #[test]
    fn test_set() {
        let env = HashMap::from([(NODENAME_ENV, "test-host")]);
        let config = Config::load(&env, &real());
        assert_eq!(b"test-host", config.nodename().as_bytes());
        assert!(!config.debug());
    }

    #[test]
    fn test_unset_falls_back_to_real() {
        let env: HashMap<&'static str, &'static str> = HashMap::new();
        let config = Config::load(&env, &real());
        assert_eq!(real(), *config.nodename());
        assert!(!config.debug());
    }

    #[test]
    fn test_empty_is_set() {
        let env = HashMap::from([(NODENAME_ENV, "")]);
        let config = Config::load(&env, &real());
        assert!(config.nodename().is_empty());
    }

    #[test]
    fn test_debug_presence_only() {
        for value in ["1", "0", ""] {
            let env = HashMap::from([(NODENAME_ENV, "x"), (DEBUG_ENV, value)]);
            let config = Config::load(&env, &real());
            assert!(config.debug());
            assert_eq!(b"x", config.nodename().as_bytes());
        }
    }

    #[test]
    fn test_overlong_is_truncated() {
        let long: &'static str = Box::leak("n".repeat(70_000).into_boxed_str());
        let env = HashMap::from([(NODENAME_ENV, long)]);
        let config = Config::load(&env, &real());
        assert_eq!(
            crate::constants::NODENAME_CAPACITY - 1,
            config.nodename().len()
        );
    }

    #[test]
    fn test_process_environment() {
        let env = ProcessEnvironment::default();
        assert_eq!(std::env::var_os("PATH"), env.var_os("PATH"));
    }
}
