//! Logging bootstrap.

/// Route `tracing` events to the browser console.
///
/// Safe to call more than once; later calls keep the first subscriber and
/// say so on the console.
pub fn init_logging() {
    if wasm_tracing::set_as_global_default().is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}
