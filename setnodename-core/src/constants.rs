use std::fmt::{Debug, Display, Formatter};

/// Environment variable holding the substitute nodename.
pub const NODENAME_ENV: &str = "SETNODENAME";

/// Environment variable whose presence enables diagnostic tracing.
pub const DEBUG_ENV: &str = "SETNODENAME_DEBUG";

/// The nodename reported before initialization has run.
pub const DEFAULT_NODENAME: &str = "schlomo";

/// Capacity of the nodename buffer, including room for a terminator.
pub const NODENAME_CAPACITY: usize = 256;

cfg_if::cfg_if! {
    if #[cfg(all(target_os = "linux", target_env = "gnu"))] {
        /// Name of the real system library the resolver loads.
        pub const REAL_LIBRARY: &str = "libc.so.6";
    } else {
        /// Name of the real system library the resolver loads.
        pub const REAL_LIBRARY: &str = "libc.so";
    }
}

/// Name of the real `uname` symbol.
pub const UNAME_SYMBOL: &str = "uname";

/// Enums used to describe the process-wide shim state
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShimState {
    ///No interceptor has been called yet.
    Uninitialized,
    ///The real `uname` is resolved and the nodename is configured.
    Initialized,
}

impl Display for ShimState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}
