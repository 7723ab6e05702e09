use pyrite_assets::AssetStore;
use pyrite_event::{ActionKind, Key, Modifiers, MouseEventKind};

/// Application hooks driven by the loop owner.
///
/// Every method runs on the loop thread; implementations must not block
/// indefinitely. All methods default to no-ops so applications implement
/// only what they use.
///
/// Startup ordering is fixed: `preload` runs before any asset is loaded,
/// then the store loads its queue in one pass, then `setup` runs with every
/// queued asset resolved, then the first `update`.
pub trait Responder {
    /// Queue assets into the store. Nothing is loaded yet.
    fn preload(&mut self, _assets: &mut AssetStore) {}

    /// One-time initialization after all queued assets have loaded.
    fn setup(&mut self, _assets: &AssetStore) {}

    /// Advance application state by `dt` seconds.
    fn update(&mut self, _dt: f32) {}

    /// Draw the frame. The color buffer has already been cleared.
    fn render(&mut self) {}

    /// The drawable surface changed to `width` x `height`.
    fn resize(&mut self, _width: u32, _height: u32) {}

    fn mouse(&mut self, _x: f32, _y: f32, _kind: MouseEventKind) {}

    fn key(&mut self, _key: Key, _modifiers: Modifiers, _kind: ActionKind) {}

    /// Vertical scroll amount; positive is away from the user.
    fn scroll(&mut self, _amount: f32) {}

    /// Character input produced by key presses.
    fn typed(&mut self, _ch: char) {}
}
