// Exports a C function with the exact signature of the libc one and forwards it
// to the facade of the same name.
macro_rules! intercept {
    ( $symbol:ident ( $($arg:ident : $ty:ty),* $(,)? ) -> $ret:ty ) => {
        #[allow(unreachable_pub)]
        #[no_mangle]
        pub extern "C" fn $symbol($($arg: $ty),*) -> $ret {
            unsafe { setnodename_core::facade::$symbol($($arg),*) }
        }
    };
}

pub mod gethostname;

pub mod uname;
