/// Sends `msg` to `console.debug` in the browser.
#[cfg(target_arch = "wasm32")]
pub fn debug(msg: &str) {
    web_sys::console::debug_1(&msg.into());
}

/// Native builds (unit tests) drop the message.
#[cfg(not(target_arch = "wasm32"))]
pub fn debug(_msg: &str) {}

/// Logs a formatted message through [`debug`].
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::log::debug(&format!($($arg)*))
    };
}

pub(crate) use log_debug;
