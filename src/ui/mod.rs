// Browser glue. Only the listener registry compiles natively (for tests);
// everything touching `web_sys` is wasm-only.
pub mod listeners;

#[cfg(target_arch = "wasm32")]
pub mod binder;
#[cfg(target_arch = "wasm32")]
pub mod card;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod gallery;
#[cfg(target_arch = "wasm32")]
pub mod logging;
#[cfg(target_arch = "wasm32")]
pub mod table;

pub use listeners::ListenerRegistry;
