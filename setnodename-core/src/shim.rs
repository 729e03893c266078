use crate::config::{Config, Environment};
use crate::error::InitError;
use crate::nodename::Nodename;
use crate::real::RealLibrary;
use libc::{c_char, c_int, utsname};

/// The resolved real implementation plus the loaded configuration.
///
/// Built once per process by [`crate::facade`], immutable afterwards.
#[derive(Debug, Copy, Clone)]
pub struct Shim {
    real: RealLibrary,
    config: Config,
}

impl Shim {
    /// Resolve the real `uname` from `library`, take a snapshot of the real
    /// identity and load the configuration from `env`.
    ///
    /// # Errors
    /// if the library can not be loaded, `uname` can not be resolved, or the
    /// real `uname` fails.
    pub fn new(library: &str, env: &impl Environment) -> Result<Self, InitError> {
        let real = RealLibrary::open(library)?;
        let snapshot = real.snapshot()?;
        let config = Config::load(env, &Nodename::from_c_chars(&snapshot.nodename));
        Ok(Shim { real, config })
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `gethostname` with the configured nodename, always succeeds.
    pub fn gethostname(&self, name: &mut [c_char]) -> c_int {
        self.config.nodename().copy_to(name);
        if self.config.debug() {
            crate::info!("INFO: Replaced gethostname() function");
        }
        0
    }

    /// Forward to the real `uname` and substitute the nodename on success.
    ///
    /// A failing real call leaves `buf` untouched and its result code is returned.
    ///
    /// # Safety
    /// `buf` must be null or point to a writable `utsname`.
    pub unsafe fn uname(&self, buf: *mut utsname) -> c_int {
        let ret = self.real.uname(buf);
        if ret == 0 {
            if let Some(buf) = buf.as_mut() {
                self.config.nodename().copy_to(&mut buf.nodename);
            }
        }
        if self.config.debug() {
            crate::info!("INFO: Replaced uname() function");
        }
        ret
    }
}
