use std::env;

use once_cell::sync::Lazy;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var("TEXTFORM_DEBUG").map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED
}

/// Logs a debug message with optional formatted arguments.
///
/// # Arguments
///
/// * `fmt` - The format string for the debug message.
/// * `args` - Optional arguments to be formatted into the message.
///
/// # Examples
///
/// ```
/// use std::env;
/// use textform::debug;
///
/// // Enable debug logging for this test
/// env::set_var("TEXTFORM_DEBUG", "true");
///
/// // These will print in yellow when debug is enabled
/// debug!("Transformation applied");
/// debug!("field set to {:?} from raw {:?}", "John", "john");
///
/// // Clean up
/// env::remove_var("TEXTFORM_DEBUG");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            println!("{}", nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            println!("{}", nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}
