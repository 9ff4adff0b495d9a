//! Console logging macros
//!
//! On wasm32 these forward to the browser console through `web_sys::console`.
//! Native builds (headless tests, benches) format the message and discard it,
//! so call sites stay identical on both targets.
//!
//! Usage:
//! ```rust
//! use dragon_catch_engine::{console_log, console_warn};
//!
//! let score = 3;
//! console_log!("Updating score display to: {}", score);
//! console_warn!("Instructions elements not found.");
//! ```

/// Log an informational message to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = ::std::format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = ::std::format_args!($($arg)*);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_format_arguments_on_native() {
        let score = 7;
        console_log!("Score after increment: {}", score);
        console_warn!("missing {}", "capture box");
    }
}
