//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so the
//! browser console stays quiet. Every use is additionally gated by
//! `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit one line per document fetched (url, byte count, entry count).
    pub print_data_load: bool,
    /// Emit selector change events (card, size, color, resolution).
    pub print_ui_events: bool,
    /// Emit gallery swaps and thumbnail activations.
    pub print_gallery_events: bool,
    /// Emit listener registry replacements during (re)binding.
    pub print_listener_registry: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_data_load: true,
    print_ui_events: false,
    print_gallery_events: false,
    print_listener_registry: false,
};
