//! Texture registry: symbolic names resolved to decoded image handles.
//!
//! Applications queue image files while preloading; the loop owner decodes
//! the whole batch in one pass before setup runs. Lookups after that point
//! are by name and never fail hard: unknown names and failed decodes both
//! resolve to absent.

use std::collections::HashMap;
use std::path::PathBuf;

/// Handle to a texture owned by an [`AssetStore`].
///
/// Plain index, valid for the lifetime of the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(usize);

/// A decoded RGBA8 image.
#[derive(Debug, Clone)]
pub struct Texture {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Name-keyed texture registry with a one-shot batch load.
#[derive(Debug, Default)]
pub struct AssetStore {
    pending: Vec<(String, PathBuf)>,
    textures: Vec<Texture>,
    by_name: HashMap<String, TextureHandle>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an image file for the next [`load_all`](Self::load_all) pass.
    pub fn queue(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.pending.push((name.into(), path.into()));
    }

    /// Number of files queued and not yet loaded.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Decode every queued file, then invoke `on_complete`.
    ///
    /// A file that fails to open or decode is logged and skipped; its name
    /// stays absent. The completion callback runs exactly once, queue or no
    /// queue.
    pub fn load_all<F: FnOnce()>(&mut self, on_complete: F) {
        for (name, path) in std::mem::take(&mut self.pending) {
            match image::open(&path) {
                Ok(img) => {
                    let rgba = img.to_rgba8();
                    let (width, height) = rgba.dimensions();
                    self.register(name, width, height, rgba.into_raw());
                }
                Err(err) => {
                    tracing::warn!("skipping asset {name} ({}): {err}", path.display());
                }
            }
        }
        on_complete();
    }

    /// Insert an already-decoded texture and return its handle.
    ///
    /// Re-registering a name rebinds it; the old texture stays reachable
    /// through its handle.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    ) -> TextureHandle {
        let name = name.into();
        let handle = TextureHandle(self.textures.len());
        self.textures.push(Texture {
            name: name.clone(),
            width,
            height,
            rgba,
        });
        self.by_name.insert(name, handle);
        handle
    }

    /// Resolve a symbolic name to its texture handle.
    pub fn image(&self, name: &str) -> Option<TextureHandle> {
        self.by_name.get(name).copied()
    }

    /// Fetch the texture behind a handle.
    pub fn texture(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle.0)
    }

    /// Number of loaded textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut store = AssetStore::new();
        let handle = store.register("bot", 2, 2, vec![0; 16]);
        assert_eq!(store.image("bot"), Some(handle));
        let tex = store.texture(handle).unwrap();
        assert_eq!((tex.width, tex.height), (2, 2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_name_is_absent() {
        let store = AssetStore::new();
        assert_eq!(store.image("missing"), None);
    }

    #[test]
    fn load_all_decodes_queued_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let mut store = AssetStore::new();
        store.queue("bot", &path);
        assert_eq!(store.pending_count(), 1);

        let mut completed = 0;
        store.load_all(|| completed += 1);

        assert_eq!(completed, 1);
        assert_eq!(store.pending_count(), 0);
        let handle = store.image("bot").expect("bot loaded");
        let tex = store.texture(handle).unwrap();
        assert_eq!((tex.width, tex.height), (3, 2));
        assert_eq!(tex.rgba.len(), 3 * 2 * 4);
    }

    #[test]
    fn load_all_skips_undecodable_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        let mut store = AssetStore::new();
        store.queue("broken", &path);

        let mut completed = 0;
        store.load_all(|| completed += 1);

        assert_eq!(completed, 1);
        assert_eq!(store.image("broken"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn load_all_with_empty_queue_still_completes() {
        let mut store = AssetStore::new();
        let mut completed = 0;
        store.load_all(|| completed += 1);
        assert_eq!(completed, 1);
    }
}
