use wasm_bindgen::JsValue;

/// Routes the `log` facade into the browser console. Safe to call twice; the
/// second call is ignored.
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = fern::Dispatch::new()
        .level(level)
        .chain(fern::Output::call(|record| {
            let line = JsValue::from_str(&format!("[{}] {}", record.level(), record.args()));
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&line),
                log::Level::Warn => web_sys::console::warn_1(&line),
                _ => web_sys::console::log_1(&line),
            }
        }))
        .apply();
}
