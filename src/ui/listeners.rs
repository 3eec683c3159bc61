//! Keeps every event listener the page binds, keyed by the control it belongs to.
//!
//! Binding the same key again drops the previous listener. In the browser the
//! listener type is `gloo::events::EventListener`, which detaches itself on
//! drop, so rebinding a page never stacks a second handler on a control.

use std::collections::{HashMap, HashSet};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub fn size_key(model_id: &str) -> String {
    format!("size:{}", model_id)
}

pub fn color_key(product_id: &str) -> String {
    format!("color:{}", product_id)
}

/// Key for a card's color selector: the product id when the selector carries
/// one, otherwise the card's model id. `None` when the card has neither.
pub fn color_listener_key(product_id: Option<&str>, model_id: Option<&str>) -> Option<String> {
    match (product_id, model_id) {
        (Some(product_id), _) => Some(color_key(product_id)),
        (None, Some(model_id)) => Some(format!("color-model:{}", model_id)),
        (None, None) => None,
    }
}

pub fn thumbs_key(product_id: &str) -> String {
    format!("thumbs:{}", product_id)
}

pub struct ListenerRegistry<L> {
    slots: HashMap<String, Vec<L>>,
}

impl<L> Default for ListenerRegistry<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> ListenerRegistry<L> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Binds a single listener under `key`. Returns true if something was replaced.
    pub fn replace(&mut self, key: impl Into<String>, listener: L) -> bool {
        self.replace_all(key, vec![listener])
    }

    /// Binds a group of listeners (e.g. one per thumbnail) under `key`.
    pub fn replace_all(&mut self, key: impl Into<String>, listeners: Vec<L>) -> bool {
        let key = key.into();
        let previous = self.slots.insert(key.clone(), listeners);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_listener_registry && previous.is_some() {
            log::debug!("Rebound listeners for {}", key);
        }

        // Old listeners are dropped (detached) here
        previous.is_some()
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.slots.remove(key).is_some()
    }

    /// Drops (detaches) every key not in `live`. Returns how many keys went.
    pub fn retain_keys(&mut self, live: &HashSet<String>) -> usize {
        let before = self.slots.len();
        self.slots.retain(|key, _| live.contains(key));
        let removed = before - self.slots.len();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_listener_registry && removed > 0 {
            log::debug!("Dropped {} stale listener groups", removed);
        }

        removed
    }

    pub fn is_bound(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Number of bound keys
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of individual listeners across all keys
    pub fn listener_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }
}
