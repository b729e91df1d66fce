use log::{Level, SetLoggerError};

pub fn try_init() -> Result<(), SetLoggerError> {
    console_log::init_with_level(Level::Info)
}

pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(err) = try_init() {
        web_sys::console::warn_1(&format!("Logger not installed: {}", err).into());
    }
}
