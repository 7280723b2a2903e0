/// Macros for properly formatted console logging
/// These macros wrap gloo_console functions and prefix every line with the
/// browser timestamp so interleaved async output can be ordered.
///
/// Only call these from code that runs in the browser: `js_sys` imports
/// panic on native targets, so shared logic should log through `tracing`.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_stamped {
    ($level:ident, $msg:expr) => {
        ::gloo_console::$level!(format!("[{}] {}", ::js_sys::Date::now(), $msg))
    };
}

#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::__console_stamped!(info, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_stamped!(info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::__console_stamped!(warn, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_stamped!(warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::__console_stamped!(error, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_stamped!(error, format!($fmt, $($arg)*))
    };
}

/// Logs an error to the console AND surfaces it on the login panel.
/// The panel receives the bare message; the console line gets the `[ERROR]` tag.
#[macro_export]
macro_rules! console_error_with_dispatch {
    ($dispatch:expr, $fmt:expr) => {
        let message: String = ($fmt).to_string();
        ::gloo_console::error!(format!("[ERROR] {}", message));
        $dispatch.call($crate::features::auth::LoginAction::SetError(message));
    };
    ($dispatch:expr, $fmt:expr, $($arg:tt)*) => {
        let message = format!($fmt, $($arg)*);
        ::gloo_console::error!(format!("[ERROR] {}", message));
        $dispatch.call($crate::features::auth::LoginAction::SetError(message));
    };
}
