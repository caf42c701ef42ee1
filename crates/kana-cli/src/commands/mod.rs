//! Subcommand implementations for `kanatool`.
//!
//! Each function prints its result to stdout and exits with status 1 on
//! failure.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
