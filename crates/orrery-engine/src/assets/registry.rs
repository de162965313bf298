use std::collections::HashMap;

use crate::api::types::TextureSlot;
use crate::assets::manifest::TextureManifest;

/// Load state of one texture slot. Images resolve asynchronously in the
/// embedder; until its completion callback fires the slot stays Pending
/// and draws against it fall back to untextured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureState {
    Pending,
    Ready,
}

#[derive(Debug, Clone)]
struct TextureEntry {
    name: String,
    path: String,
    state: TextureState,
}

/// Registry of texture slots, built from a TextureManifest.
/// Tracks readiness; never blocks a frame on a loading image.
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    by_name: HashMap<String, u32>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn from_manifest(manifest: &TextureManifest) -> Self {
        let mut entries = Vec::with_capacity(manifest.textures.len());
        let mut by_name = HashMap::with_capacity(manifest.textures.len());
        for (i, desc) in manifest.textures.iter().enumerate() {
            by_name.insert(desc.name.clone(), i as u32);
            entries.push(TextureEntry {
                name: desc.name.clone(),
                path: desc.path.clone(),
                state: TextureState::Pending,
            });
        }
        Self { entries, by_name }
    }

    /// Look up a slot by name. Returns None if the manifest never listed it.
    pub fn slot(&self, name: &str) -> Option<TextureSlot> {
        self.by_name.get(name).map(|&i| TextureSlot(i))
    }

    pub fn path(&self, slot: TextureSlot) -> Option<&str> {
        self.entries.get(slot.0 as usize).map(|e| e.path.as_str())
    }

    pub fn state(&self, slot: TextureSlot) -> TextureState {
        self.entries
            .get(slot.0 as usize)
            .map(|e| e.state)
            .unwrap_or(TextureState::Pending)
    }

    pub fn is_ready(&self, slot: TextureSlot) -> bool {
        self.state(slot) == TextureState::Ready
    }

    /// Mark a slot's image as loaded. Called from the embedder's
    /// image-onload callback.
    pub fn mark_ready(&mut self, slot: TextureSlot) {
        match self.entries.get_mut(slot.0 as usize) {
            Some(entry) => {
                entry.state = TextureState::Ready;
                log::debug!("texture ready: {} ({})", entry.name, entry.path);
            }
            None => log::warn!("texture ready for unknown slot {}", slot.0),
        }
    }

    /// Texture uniform value for a draw: the slot index once the image is
    /// ready, -1 (untextured fallback) while it is still loading.
    pub fn bindable(&self, slot: TextureSlot) -> f32 {
        if self.is_ready(slot) {
            slot.0 as f32
        } else {
            -1.0
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
