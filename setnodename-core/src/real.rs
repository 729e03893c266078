use crate::constants::UNAME_SYMBOL;
use crate::error::InitError;
use libc::{c_int, c_void, utsname};
use std::ffi::{CStr, CString};

/// Signature of the real `uname`.
pub type UnameFn = unsafe extern "C" fn(*mut utsname) -> c_int;

/// Handle to the real system library and the `uname` resolved from it.
///
/// The handle is never closed, process exit reclaims it.
#[derive(Debug, Copy, Clone)]
pub struct RealLibrary {
    #[cfg_attr(not(test), allow(dead_code))]
    handle: *mut c_void,
    uname: UnameFn,
}

// The handle is only ever passed back to the loader and the function pointer is immutable.
unsafe impl Send for RealLibrary {}
unsafe impl Sync for RealLibrary {}

impl RealLibrary {
    /// Load `library` and resolve the real `uname` from it.
    ///
    /// # Errors
    /// if the library can not be loaded or `uname` can not be found in it.
    pub fn open(library: &str) -> Result<Self, InitError> {
        let name = CString::new(library)
            .map_err(|_| InitError::LibraryLoad(format!("{library}: invalid library name")))?;
        let handle = unsafe { libc::dlopen(name.as_ptr(), libc::RTLD_LAZY) };
        if handle.is_null() {
            return Err(InitError::LibraryLoad(last_error()));
        }
        let ptr = resolve(handle, UNAME_SYMBOL)?;
        Ok(RealLibrary {
            handle,
            uname: unsafe { std::mem::transmute::<*mut c_void, UnameFn>(ptr) },
        })
    }

    #[cfg(test)]
    pub(crate) fn handle(&self) -> *mut c_void {
        self.handle
    }

    /// Call the real `uname`, result code verbatim.
    ///
    /// # Safety
    /// `buf` must be null or point to a writable `utsname`.
    pub unsafe fn uname(&self, buf: *mut utsname) -> c_int {
        (self.uname)(buf)
    }

    /// Call the real `uname` into a fresh structure.
    ///
    /// # Errors
    /// if the real call reports failure.
    pub fn snapshot(&self) -> Result<utsname, InitError> {
        let mut buf: utsname = unsafe { std::mem::zeroed() };
        match unsafe { self.uname(&mut buf) } {
            0 => Ok(buf),
            ret => Err(InitError::RealUname(ret)),
        }
    }
}

/// Resolve `symbol` from a loader handle.
///
/// # Errors
/// if the symbol is missing, carrying the loader's message.
pub fn resolve(handle: *mut c_void, symbol: &str) -> Result<*mut c_void, InitError> {
    let name = CString::new(symbol)
        .map_err(|_| InitError::SymbolResolve(format!("{symbol}: invalid symbol name")))?;
    // clear any stale error so a null result can be told apart
    _ = unsafe { libc::dlerror() };
    let ptr = unsafe { libc::dlsym(handle, name.as_ptr()) };
    if ptr.is_null() {
        return Err(InitError::SymbolResolve(last_error()));
    }
    Ok(ptr)
}

fn last_error() -> String {
    let err = unsafe { libc::dlerror() };
    if err.is_null() {
        String::from("unknown dynamic loader error")
    } else {
        unsafe { CStr::from_ptr(err) }
            .to_string_lossy()
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REAL_LIBRARY;

    #[test]
    fn test_open() {
        let real = RealLibrary::open(REAL_LIBRARY).unwrap();
        assert!(!real.handle().is_null());
    }

    #[test]
    fn test_snapshot_matches_libc() {
        let real = RealLibrary::open(REAL_LIBRARY).unwrap();
        let snapshot = real.snapshot().unwrap();
        let mut expected: utsname = unsafe { std::mem::zeroed() };
        assert_eq!(0, unsafe { libc::uname(&mut expected) });
        assert_eq!(expected.sysname, snapshot.sysname);
        assert_eq!(expected.nodename, snapshot.nodename);
        assert_eq!(expected.release, snapshot.release);
        assert_eq!(expected.machine, snapshot.machine);
    }

    #[test]
    fn test_uname_result_verbatim() {
        let real = RealLibrary::open(REAL_LIBRARY).unwrap();
        let mut buf: utsname = unsafe { std::mem::zeroed() };
        assert_eq!(0, unsafe { real.uname(&mut buf) });
        assert_eq!(-1, unsafe { real.uname(std::ptr::null_mut()) });
    }

    #[test]
    fn test_missing_library() {
        let err = RealLibrary::open("libsetnodename-missing.so.0").unwrap_err();
        match err {
            InitError::LibraryLoad(message) => {
                assert!(message.contains("libsetnodename-missing.so.0"), "{message}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_symbol() {
        let real = RealLibrary::open(REAL_LIBRARY).unwrap();
        let err = resolve(real.handle(), "setnodename_no_such_symbol").unwrap_err();
        match err {
            InitError::SymbolResolve(message) => {
                assert!(message.contains("setnodename_no_such_symbol"), "{message}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_invalid_names() {
        assert!(matches!(
            RealLibrary::open("lib\0c.so"),
            Err(InitError::LibraryLoad(_))
        ));
        let real = RealLibrary::open(REAL_LIBRARY).unwrap();
        assert!(matches!(
            resolve(real.handle(), "una\0me"),
            Err(InitError::SymbolResolve(_))
        ));
    }
}
