use libc::{c_char, c_int, size_t};

intercept!(gethostname(name: *mut c_char, len: size_t) -> c_int);
