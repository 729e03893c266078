use libc::{c_int, utsname};

intercept!(uname(buf: *mut utsname) -> c_int);
