use crate::clock::Clock;
use crate::config::WindowConfig;
use crate::error::PlatformError;
use crate::gfx::{FrameSink, GpuSink};
use crate::keymap;
use crate::normalize::EventNormalizer;
use crate::responder::Responder;
use pyrite_assets::AssetStore;
use pyrite_event::{Event, EventQueue};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Fullscreen, Window, WindowId};

/// Cooperative close request.
///
/// Setting the flag never interrupts an in-flight frame: the loop observes
/// it at the top of the next iteration, so an exit requested during update
/// still gets that frame's render and present. Clones share one flag;
/// `Rc` because everything lives on the loop thread.
#[derive(Debug, Clone, Default)]
pub struct ExitHandle(Rc<Cell<bool>>);

impl ExitHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_exit(&self) {
        self.0.set(true);
    }

    fn is_set(&self) -> bool {
        self.0.get()
    }
}

enum FrameOutcome {
    Continue,
    Exit,
}

/// Everything one loop iteration touches, owned in one place so the frame
/// cycle runs without globals and without a window in tests.
struct LoopState {
    config: WindowConfig,
    clock: Clock,
    queue: EventQueue,
    exit: ExitHandle,
}

impl LoopState {
    fn new(config: WindowConfig, exit: ExitHandle) -> Self {
        let clock = Clock::new(config.log_fps);
        Self {
            config,
            clock,
            queue: EventQueue::new(),
            exit,
        }
    }

    /// One loop iteration: update, clear, render, present, deliver pending
    /// input, advance timing. Input drained here was pushed during or before
    /// this frame and becomes visible to update only next iteration.
    fn frame<R: Responder, S: FrameSink>(
        &mut self,
        responder: &mut R,
        sink: &mut S,
    ) -> FrameOutcome {
        if self.exit.is_set() {
            return FrameOutcome::Exit;
        }

        responder.update(self.clock.delta());
        sink.clear();
        responder.render();
        sink.present();
        self.dispatch_pending(responder);
        self.clock.advance();

        FrameOutcome::Continue
    }

    fn dispatch_pending<R: Responder>(&mut self, responder: &mut R) {
        for event in self.queue.drain() {
            match event {
                Event::Resize { width, height } => responder.resize(width, height),
                Event::Mouse { x, y, kind } => responder.mouse(x, y, kind),
                Event::Scroll { amount } => responder.scroll(amount),
                Event::Key {
                    key,
                    modifiers,
                    kind,
                } => responder.key(key, modifiers, kind),
                Event::Typed { ch } => responder.typed(ch),
            }
        }
    }
}

struct WindowDriver<R: Responder> {
    state: LoopState,
    normalizer: EventNormalizer,
    assets: AssetStore,
    responder: R,
    window: Option<Arc<Window>>,
    sink: Option<GpuSink>,
    fatal: Option<PlatformError>,
}

impl<R: Responder> WindowDriver<R> {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let monitor = event_loop
            .primary_monitor()
            .ok_or(PlatformError::NoPrimaryMonitor)?;
        let monitor_size = monitor.size();

        let config = &mut self.state.config;
        let mut attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_resizable(config.resizable);
        if config.fullscreen {
            attrs = attrs
                .with_decorations(false)
                .with_fullscreen(Some(Fullscreen::Borderless(Some(monitor))));
        } else {
            attrs = attrs.with_inner_size(PhysicalSize::new(config.width, config.height));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(PlatformError::CreateWindow)?,
        );

        // The backing surface may differ from the request; the corrected
        // size is authoritative from here on.
        let size = window.inner_size();
        config.width = size.width.max(1);
        config.height = size.height.max(1);
        tracing::debug!("drawable size {}x{}", config.width, config.height);

        if !config.fullscreen {
            let x = monitor_size.width.saturating_sub(config.width) / 2;
            let y = monitor_size.height.saturating_sub(config.height) / 2;
            window.set_outer_position(PhysicalPosition::new(x as i32, y as i32));
        }

        let sink = GpuSink::new(window.clone(), config)?;

        // Fixed startup ordering: assets must resolve before setup, setup
        // must finish before the first update.
        self.responder.preload(&mut self.assets);
        self.assets.load_all(|| tracing::debug!("asset load complete"));
        self.responder.setup(&self.assets);

        // Loading time must not inflate the first frame's delta.
        self.state.clock.restart();

        window.request_redraw();
        self.window = Some(window);
        self.sink = Some(sink);
        Ok(())
    }
}

impl<R: Responder> ApplicationHandler for WindowDriver<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.fatal = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.state.exit.request_exit();
            }
            WindowEvent::Resized(size) => {
                let (width, height) = (size.width.max(1), size.height.max(1));
                self.state.config.width = width;
                self.state.config.height = height;
                if let Some(sink) = &mut self.sink {
                    sink.resize(width, height);
                }
                self.normalizer.resize(width, height, &mut self.state.queue);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.normalizer.cursor_moved(
                    position.x as f32,
                    position.y as f32,
                    &mut self.state.queue,
                );
            }
            WindowEvent::MouseInput { state, .. } => {
                self.normalizer
                    .mouse_button(state.is_pressed(), &mut self.state.queue);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (x, y),
                    MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
                };
                self.normalizer.scroll(x, y, &mut self.state.queue);
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.normalizer
                    .set_modifiers(keymap::modifiers_from_state(modifiers.state()));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.normalizer
                        .key_input(code, event.state.is_pressed(), &mut self.state.queue);
                }
                if event.state.is_pressed() {
                    if let Some(text) = &event.text {
                        self.normalizer.text(text, &mut self.state.queue);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(sink) = self.sink.as_mut() else {
                    return;
                };
                match self.state.frame(&mut self.responder, sink) {
                    FrameOutcome::Continue => {}
                    FrameOutcome::Exit => event_loop.exit(),
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Create the window and drive the loop until a close request.
///
/// Blocks the calling thread for the lifetime of the window; the native
/// layer requires that thread to own the window and GPU handles throughout.
/// `exit` is the same handle the application holds to request shutdown.
/// Any platform failure is fatal and returned as the run's error.
pub fn run<R: Responder>(
    config: WindowConfig,
    assets: AssetStore,
    responder: R,
    exit: ExitHandle,
) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new().map_err(PlatformError::CreateEventLoop)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut driver = WindowDriver {
        state: LoopState::new(config, exit),
        normalizer: EventNormalizer::new(),
        assets,
        responder,
        window: None,
        sink: None,
        fatal: None,
    };

    event_loop
        .run_app(&mut driver)
        .map_err(PlatformError::EventLoop)?;

    match driver.fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyrite_event::MouseEventKind;
    use std::cell::RefCell;

    /// Shared call log so responder and sink interleave into one ordering.
    type Log = Rc<RefCell<Vec<String>>>;

    struct RecordingResponder {
        log: Log,
        exit_on_update: Option<ExitHandle>,
        dts: Vec<f32>,
    }

    impl RecordingResponder {
        fn new(log: Log) -> Self {
            Self {
                log,
                exit_on_update: None,
                dts: Vec::new(),
            }
        }
    }

    impl Responder for RecordingResponder {
        fn update(&mut self, dt: f32) {
            self.log.borrow_mut().push("update".into());
            self.dts.push(dt);
            if let Some(exit) = &self.exit_on_update {
                exit.request_exit();
            }
        }

        fn render(&mut self) {
            self.log.borrow_mut().push("render".into());
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.log.borrow_mut().push(format!("resize {width}x{height}"));
        }

        fn mouse(&mut self, x: f32, y: f32, kind: MouseEventKind) {
            self.log.borrow_mut().push(format!("mouse {x},{y} {kind:?}"));
        }

        fn scroll(&mut self, amount: f32) {
            self.log.borrow_mut().push(format!("scroll {amount}"));
        }
    }

    struct RecordingSink {
        log: Log,
    }

    impl FrameSink for RecordingSink {
        fn clear(&mut self) {
            self.log.borrow_mut().push("clear".into());
        }

        fn present(&mut self) {
            self.log.borrow_mut().push("present".into());
        }
    }

    fn harness() -> (LoopState, RecordingResponder, RecordingSink, Log) {
        let log: Log = Rc::default();
        let state = LoopState::new(WindowConfig::default(), ExitHandle::new());
        let responder = RecordingResponder::new(log.clone());
        let sink = RecordingSink { log: log.clone() };
        (state, responder, sink, log)
    }

    #[test]
    fn frame_order_without_pending_events() {
        let (mut state, mut responder, mut sink, log) = harness();

        for _ in 0..3 {
            assert!(matches!(
                state.frame(&mut responder, &mut sink),
                FrameOutcome::Continue
            ));
        }

        let expected: Vec<String> = ["update", "clear", "render", "present"]
            .iter()
            .cycle()
            .take(12)
            .map(|s| s.to_string())
            .collect();
        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn update_receives_the_clocks_latest_measurement() {
        let (mut state, mut responder, mut sink, _log) = harness();

        std::thread::sleep(std::time::Duration::from_millis(3));
        state.clock.advance();
        let expected = state.clock.delta();

        state.frame(&mut responder, &mut sink);

        assert_eq!(responder.dts, vec![expected]);
    }

    #[test]
    fn pending_input_is_delivered_after_present_not_before_update() {
        let (mut state, mut responder, mut sink, log) = harness();

        // Event already queued when frame K starts, as if the native layer
        // delivered it while the previous frame presented.
        state.queue.push(Event::Mouse {
            x: 1.0,
            y: 2.0,
            kind: MouseEventKind::Move,
        });

        state.frame(&mut responder, &mut sink);
        state.frame(&mut responder, &mut sink);

        let log = log.borrow();
        let mouse_at = log.iter().position(|e| e.starts_with("mouse")).unwrap();
        let present_at = log.iter().position(|e| e.as_str() == "present").unwrap();
        let second_update_at = log.iter().rposition(|e| e.as_str() == "update").unwrap();
        // Delivered after frame K's present, before frame K+1's update.
        assert!(mouse_at > present_at);
        assert!(mouse_at < second_update_at);
    }

    #[test]
    fn events_drain_in_arrival_order() {
        let (mut state, mut responder, mut sink, log) = harness();

        state.queue.push(Event::Scroll { amount: 5.0 });
        state.queue.push(Event::Resize {
            width: 320,
            height: 240,
        });

        state.frame(&mut responder, &mut sink);

        let log = log.borrow();
        let tail: Vec<&str> = log.iter().map(|s| s.as_str()).skip(4).collect();
        assert_eq!(tail, vec!["scroll 5", "resize 320x240"]);
    }

    #[test]
    fn exit_during_update_runs_exactly_one_more_render() {
        let (mut state, mut responder, mut sink, log) = harness();
        responder.exit_on_update = Some(state.exit.clone());

        assert!(matches!(
            state.frame(&mut responder, &mut sink),
            FrameOutcome::Continue
        ));
        assert!(matches!(
            state.frame(&mut responder, &mut sink),
            FrameOutcome::Exit
        ));

        // The requesting frame finished in full; no new iteration began.
        assert_eq!(
            *log.borrow(),
            vec!["update", "clear", "render", "present"]
        );
    }

    #[test]
    fn exit_requested_between_frames_stops_before_update() {
        let (mut state, mut responder, mut sink, log) = harness();

        state.exit.request_exit();
        assert!(matches!(
            state.frame(&mut responder, &mut sink),
            FrameOutcome::Exit
        ));
        assert!(log.borrow().is_empty());
    }
}
