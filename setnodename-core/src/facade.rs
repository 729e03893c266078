use crate::config::{Environment, ProcessEnvironment};
use crate::constants::{ShimState, REAL_LIBRARY};
use crate::nodename::Nodename;
use crate::shim::Shim;
use libc::{c_char, c_int, size_t, utsname};
use once_cell::sync::Lazy;

static SHIM: Lazy<Shim> = Lazy::new(|| establish(REAL_LIBRARY, &ProcessEnvironment::default()));

/// Build the shim from `library` and `env`, or write the diagnostic and exit
/// the process with `EXIT_FAILURE`.
#[must_use]
pub fn establish(library: &str, env: &impl Environment) -> Shim {
    match Shim::new(library, env) {
        Ok(shim) => shim,
        Err(e) => {
            crate::error!("{e}");
            std::process::exit(libc::EXIT_FAILURE)
        }
    }
}

/// The process-wide shim, initialized by the first caller.
///
/// Concurrent first callers block until initialization is done. Exits the
/// process if the real implementation can not be established.
#[must_use]
pub fn shim() -> &'static Shim {
    Lazy::force(&SHIM)
}

/// Get the current state without triggering initialization.
#[must_use]
pub fn state() -> ShimState {
    if Lazy::get(&SHIM).is_some() {
        ShimState::Initialized
    } else {
        ShimState::Uninitialized
    }
}

/// The nodename currently reported, the default one before initialization.
#[must_use]
pub fn nodename() -> Nodename {
    Lazy::get(&SHIM).map_or_else(Nodename::default, |shim| *shim.config().nodename())
}

/// gethostname

/// # Safety
/// `name` must be null or valid for writes of `len` bytes.
pub unsafe fn gethostname(name: *mut c_char, len: size_t) -> c_int {
    let shim = shim();
    if name.is_null() {
        return shim.gethostname(&mut []);
    }
    shim.gethostname(std::slice::from_raw_parts_mut(name, len))
}

/// uname

/// # Safety
/// `buf` must be null or point to a writable `utsname`.
pub unsafe fn uname(buf: *mut utsname) -> c_int {
    shim().uname(buf)
}
