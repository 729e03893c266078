pub use ::log::Level;

use ::log::{LevelFilter, Log, Record};
use once_cell::sync::Lazy;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::fmt::Arguments;

/// The shim lives inside foreign processes, so it never calls `log::set_logger`
/// and keeps a private logger instead.
static LOGGER: Lazy<Box<TermLogger>> = Lazy::new(|| {
    let config = ConfigBuilder::new()
        .set_max_level(LevelFilter::Off)
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();
    TermLogger::new(
        LevelFilter::Info,
        config,
        TerminalMode::Stderr,
        ColorChoice::Never,
    )
});

/// write one diagnostic line to the error stream.
pub fn emit(level: Level, args: Arguments<'_>) {
    let logger = Lazy::force(&LOGGER);
    logger.log(
        &Record::builder()
            .args(args)
            .level(level)
            .target("setnodename")
            .build(),
    );
    logger.flush();
}

#[macro_export]
macro_rules! info {
    // info!("a {} event", "log")
    ($($arg:tt)+) => {
        $crate::log::emit($crate::log::Level::Info, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    // warn!("a {} event", "log")
    ($($arg:tt)+) => {
        $crate::log::emit($crate::log::Level::Warn, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    // error!("a {} event", "log")
    ($($arg:tt)+) => {
        $crate::log::emit($crate::log::Level::Error, format_args!($($arg)+))
    };
}
