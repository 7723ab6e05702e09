use thiserror::Error;

/// Fatal platform-initialization failures.
///
/// There is no recovery path: any of these aborts the run. Window creation
/// either succeeds once or the environment is unusable.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] winit::error::EventLoopError),
    #[error("no primary monitor available")]
    NoPrimaryMonitor,
    #[error("failed to create window: {0}")]
    CreateWindow(#[source] winit::error::OsError),
    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[source] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter")]
    NoAdapter,
    #[error("failed to acquire graphics device: {0}")]
    RequestDevice(#[source] wgpu::RequestDeviceError),
    #[error("event loop failed: {0}")]
    EventLoop(#[source] winit::error::EventLoopError),
}
