#![deny(
    // The following are allowed by default lints according to
    // https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html
    anonymous_parameters,
    bare_trait_objects,
    // elided_lifetimes_in_paths, // allow anonymous lifetime
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    single_use_lifetimes,
    // trivial_casts,
    // trivial_numeric_casts, // c_char is unsigned on some targets
    unreachable_pub,
    // unsafe_code,
    unstable_features,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results,
    variant_size_differences,

    clippy::all,
    // clippy::restriction,
    clippy::pedantic,
    // clippy::nursery, // It's still under development
    clippy::cargo,
)]
#![allow(
    // Some explicitly allowed Clippy lints, must have clear reason to allow
    clippy::blanket_clippy_restriction_lints, // allow clippy::restriction
    clippy::implicit_return, // actually omitting the return keyword is idiomatic Rust code
    clippy::module_name_repetitions, // repeation of module name in a struct name is not big deal
    clippy::multiple_crate_versions, // multi-version dependency crates is not able to fix
    clippy::cast_sign_loss, // c_char <-> u8 reinterpretation is intended
    clippy::cast_possible_wrap, // c_char <-> u8 reinterpretation is intended
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::indexing_slicing,
    clippy::separated_literal_suffix, // conflicts with clippy::unseparated_literal_suffix
)]
#![cfg(unix)]

//! Make programs believe that they are running on a different host.
//!
//! This crate holds everything behind the `libsetnodename` preload library:
//! resolving the real `uname`, reading `SETNODENAME`/`SETNODENAME_DEBUG` once,
//! and substituting the configured nodename into `gethostname`/`uname` results.

#[allow(missing_docs)]
pub mod log;

/// Constants.
pub mod constants;

/// Initialization errors.
pub mod error;

/// Bounded nodename buffer.
pub mod nodename;

/// Configuration read from the process environment.
pub mod config;

/// Resolver for the real system library.
pub mod real;

/// The exactly-once shim object.
pub mod shim;

/// Process-wide entry points used by the hooks.
pub mod facade;
