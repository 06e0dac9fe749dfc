//! Texture store.
//!
//! A non-send resource holding loaded textures keyed by string IDs. Sprites
//! refer to textures by key; a key with no texture is drawn as a placeholder.
//!
//! Note: This is a non-send resource because Raylib textures must be
//! accessed from the main thread only.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

// NonSend resource: insert with insert_non_send_resource and access via NonSend/NonSendMut
#[derive(Default)]
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.textures.insert(key.into(), texture);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(key.as_ref())
    }
}
