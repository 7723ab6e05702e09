use serde::{Deserialize, Serialize};

/// Window and run configuration, populated externally before [`run`].
///
/// Immutable during a run except `width`/`height`, which the loop owner
/// corrects to the actual drawable size right after window creation and again
/// on every resize event.
///
/// [`run`]: crate::driver::run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Use the primary display's native mode, borderless.
    pub fullscreen: bool,
    pub resizable: bool,
    /// Swap-interval 1 when set.
    pub vsync: bool,
    /// Multisample count; 0 or 1 disables antialiasing.
    pub fsaa: u32,
    /// Log the frame rate once per second.
    pub log_fps: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "pyrite".into(),
            fullscreen: false,
            resizable: false,
            vsync: true,
            fsaa: 1,
            log_fps: false,
        }
    }
}
