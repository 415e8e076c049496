#![forbid(unsafe_code)]

//! Named split layouts addressable from anywhere in the host UI.
//!
//! Toolbars and sibling panels open, close or toggle a layout they do not
//! own by sending a [`SplitCommand`] to its id.

use rustc_hash::FxHashMap;

use crate::{SplitCommand, SplitGeometry, SplitLayout, SplitLayoutError};

/// Id-keyed collection of independent split layouts.
#[derive(Debug, Clone, Default)]
pub struct SplitLayoutRegistry {
    layouts: FxHashMap<String, SplitLayout>,
}

impl SplitLayoutRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `layout` under `id`; ids are unique.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        layout: SplitLayout,
    ) -> Result<(), SplitLayoutError> {
        let id = id.into();
        if self.contains(&id) {
            return Err(SplitLayoutError::DuplicateLayout { id });
        }
        tracing::debug!(layout_id = %id, "split layout registered");
        self.layouts.insert(id, layout);
        Ok(())
    }

    /// Remove and return the layout registered under `id`.
    pub fn unregister(&mut self, id: &str) -> Option<SplitLayout> {
        let removed = self.layouts.remove(id);
        if removed.is_some() {
            tracing::debug!(layout_id = id, "split layout unregistered");
        }
        removed
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SplitLayout> {
        self.layouts.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SplitLayout> {
        self.layouts.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.layouts.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Registered ids in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.layouts.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Run `command` against the layout registered under `id`.
    pub fn dispatch(
        &mut self,
        id: &str,
        command: SplitCommand,
    ) -> Result<SplitGeometry, SplitLayoutError> {
        let layout = self
            .layouts
            .get_mut(id)
            .ok_or_else(|| SplitLayoutError::UnknownLayout { id: id.to_owned() })?;
        layout.apply(command)
    }
}
