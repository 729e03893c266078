use libc::c_int;

/// Failures while establishing the real implementation.
///
/// All of them are fatal for the host process: without a working real `uname`
/// there is nothing to forward to.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The real system library could not be loaded, carries the loader's message.
    #[error("{0}")]
    LibraryLoad(String),
    /// A symbol could not be resolved from the real library, carries the loader's message.
    #[error("{0}")]
    SymbolResolve(String),
    /// The real `uname` reported failure with this result code.
    #[error("ERROR: Could not get real uname !")]
    RealUname(c_int),
}
