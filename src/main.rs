//! Galactic Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{EventTarget, HtmlCanvasElement, KeyboardEvent, PageTransitionEvent};

    use galactic_dash::renderer::RenderState;
    use galactic_dash::sim::{RunState, Surface};
    use galactic_dash::{
        BestScore, FrameDriver, FrameHandle, FrameScheduler, Session, Settings,
    };

    /// `requestAnimationFrame` behind the driver's scheduler seam
    struct RafScheduler {
        window: web_sys::Window,
        /// Frame callback; dropped on teardown to release the game
        callback: Option<Closure<dyn FnMut(f64)>>,
    }

    impl FrameScheduler for RafScheduler {
        fn request_frame(&mut self) -> Option<FrameHandle> {
            let callback = self.callback.as_ref()?;
            self.window
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .ok()
                .map(FrameHandle)
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            let _ = self.window.cancel_animation_frame(handle.0);
        }
    }

    /// Registered DOM listener, kept so it can be removed again
    struct Listener {
        target: EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver<RafScheduler, RenderState>,
        session: Session,
        listeners: Vec<Listener>,
        /// Last values pushed to the DOM
        shown: Option<(RunState, u32)>,
    }

    impl Game {
        /// Space, arrow up, click or tap
        fn on_input(&mut self) {
            if self.session.status() == RunState::Running {
                self.driver.impulse();
            } else {
                let status = self.session.start();
                self.driver.set_run_state(status, &mut self.session);
                log::info!("Run started");
            }
        }

        fn on_frame(&mut self, time: f64) {
            self.driver.on_frame(time, &mut self.session);
            // The container decides the run state; a crash comes back as Ended
            self.driver
                .set_run_state(self.session.status(), &mut self.session);
            self.update_hud();
        }

        fn resize(&mut self, css: Surface, device: (u32, u32)) {
            self.driver.resize(css);
            if let Some(render_state) = self.driver.painter_mut() {
                render_state.resize(device.0, device.1);
            }
        }

        /// Update HUD and overlays in DOM
        fn update_hud(&mut self) {
            let current = (self.session.status(), self.session.score());
            if self.shown == Some(current) {
                return;
            }
            self.shown = Some(current);

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.session.score().to_string()));
            }
            if let Some(el) = document.query_selector("#hud-best .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.session.best().to_string()));
            }

            let show = |id: &str, visible: bool| {
                if let Some(el) = document.get_element_by_id(id) {
                    let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
                }
            };
            let status = self.session.status();
            show("start-screen", status == RunState::Idle);
            show("hud", status == RunState::Running);
            show("game-over", status == RunState::Ended);
            show("new-best", status == RunState::Ended && self.session.is_new_best());

            if status == RunState::Ended {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&self.session.score().to_string()));
                }
                if let Some(el) = document.get_element_by_id("best-score") {
                    el.set_text_content(Some(&self.session.best().to_string()));
                }
            }
        }

        /// Stop the loop and release every listener
        fn teardown(&mut self) {
            self.driver.teardown();
            let listeners: Vec<Listener> = self.listeners.drain(..).collect();
            for listener in &listeners {
                let _ = listener.target.remove_event_listener_with_callback(
                    listener.event,
                    listener.closure.as_ref().unchecked_ref(),
                );
            }
            // Breaks the game <-> callback cycle
            self.driver.scheduler_mut().callback = None;
            // Called from inside the pagehide listener, so its closure is
            // freed after the handler returns
            wasm_bindgen_futures::spawn_local(async move {
                drop(listeners);
            });
        }
    }

    /// Canvas size in CSS pixels and in device pixels
    fn fit_canvas(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (Surface, (u32, u32)) {
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width().max(0);
        let client_h = canvas.client_height().max(0);
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        (Surface::new(client_w as f32, client_h as f32), (width, height))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Galactic Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (surface, (width, height)) = fit_canvas(&window, &canvas);

        let mut settings = Settings::load();
        let search = window.location().search().unwrap_or_default();
        if settings.apply_launch_options(&search, prefers_reduced_motion(&window)) {
            settings.save();
        }
        let seed = js_sys::Date::now() as u64;
        let scheduler = RafScheduler {
            window: window.clone(),
            callback: None,
        };
        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(seed, surface, settings, scheduler),
            session: Session::new(BestScore::load()),
            listeners: Vec::new(),
            shown: None,
        }));

        log::info!("Game initialized with seed: {}", seed);

        {
            let frame_game = game.clone();
            let callback = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                frame_game.borrow_mut().on_frame(time);
            });
            game.borrow_mut().driver.scheduler_mut().callback = Some(callback);
        }

        setup_input_handlers(&window, &canvas, &game);
        setup_page_lifecycle(&window, &game);
        setup_motion_preference(&window, &game);

        // Idle frames draw the title backdrop until the GPU is ready
        game.borrow_mut().driver.start();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let gpu_surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&gpu_surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(gpu_surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().driver.attach_painter(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        log::info!("Galactic Dash running!");
    }

    fn listen<F>(game: &Rc<RefCell<Game>>, target: EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        if target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_ok()
        {
            game.borrow_mut().listeners.push(Listener {
                target,
                event,
                closure,
            });
        }
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: &Rc<RefCell<Game>>,
    ) {
        // Keyboard thrust
        {
            let game_ref = game.clone();
            listen(game, window.clone().into(), "keydown", move |event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if matches!(key.code().as_str(), "Space" | "ArrowUp") {
                    event.prevent_default();
                    if !key.repeat() {
                        game_ref.borrow_mut().on_input();
                    }
                }
            });
        }

        // Mouse and touch thrust
        for event_name in ["mousedown", "touchstart"] {
            let game_ref = game.clone();
            listen(game, canvas.clone().into(), event_name, move |event| {
                event.prevent_default();
                game_ref.borrow_mut().on_input();
            });
        }

        // Keep the canvas matched to the window
        {
            let game_ref = game.clone();
            let window_ref = window.clone();
            let canvas_ref = canvas.clone();
            listen(game, window.clone().into(), "resize", move |_event| {
                let (css, device) = fit_canvas(&window_ref, &canvas_ref);
                game_ref.borrow_mut().resize(css, device);
            });
        }
    }

    fn persisted(event: &web_sys::Event) -> bool {
        event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(|e| e.persisted())
    }

    /// Pause while the page sits in the back/forward cache; unmount when it
    /// is really going away
    fn setup_page_lifecycle(window: &web_sys::Window, game: &Rc<RefCell<Game>>) {
        {
            let game_ref = game.clone();
            listen(game, window.clone().into(), "pagehide", move |event| {
                let mut g = game_ref.borrow_mut();
                if persisted(&event) {
                    g.driver.suspend();
                } else {
                    g.teardown();
                }
            });
        }

        {
            let game_ref = game.clone();
            listen(game, window.clone().into(), "pageshow", move |event| {
                if persisted(&event) {
                    log::info!("Restored from page cache");
                    game_ref.borrow_mut().driver.start();
                }
            });
        }
    }

    const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

    fn prefers_reduced_motion(window: &web_sys::Window) -> bool {
        window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .is_some_and(|mql| mql.matches())
    }

    /// Follow changes to the system reduced-motion setting while playing
    fn setup_motion_preference(window: &web_sys::Window, game: &Rc<RefCell<Game>>) {
        let Some(query) = window.match_media(REDUCED_MOTION_QUERY).ok().flatten() else {
            return;
        };
        let game_ref = game.clone();
        let query_ref = query.clone();
        listen(game, query.into(), "change", move |_event| {
            let mut g = game_ref.borrow_mut();
            let mut settings = g.driver.settings().clone();
            settings.reduced_motion = query_ref.matches();
            log::info!("Reduced motion: {}", settings.reduced_motion);
            g.driver.set_settings(settings);
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Galactic Dash (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let score = headless::autopilot(seed, 60 * 60);
    println!("Autopilot run with seed {} scored {}", seed, score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: the frame driver with a counting scheduler and a simple
/// autopilot in place of the player
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use galactic_dash::consts::*;
    use galactic_dash::renderer::Scene;
    use galactic_dash::sim::{RunState, Surface};
    use galactic_dash::{FrameDriver, FrameHandle, FrameScheduler, Painter, Session, Settings};

    #[derive(Default)]
    struct StepScheduler {
        next: i32,
    }

    impl FrameScheduler for StepScheduler {
        fn request_frame(&mut self) -> Option<FrameHandle> {
            self.next += 1;
            Some(FrameHandle(self.next))
        }

        fn cancel_frame(&mut self, _handle: FrameHandle) {}
    }

    #[derive(Default)]
    struct VertexCounter {
        last: usize,
    }

    impl Painter for VertexCounter {
        fn paint(&mut self, scene: &Scene) {
            self.last = scene.vertices.len();
        }
    }

    /// Play one run, thrusting whenever the craft sinks below the next gap.
    /// Returns the final score.
    pub fn autopilot(seed: u64, max_frames: u32) -> u32 {
        let surface = Surface::new(800.0, 600.0);
        let mut driver: FrameDriver<StepScheduler, VertexCounter> =
            FrameDriver::new(seed, surface, Settings::default(), StepScheduler::default());
        driver.attach_painter(VertexCounter::default());
        let mut session = Session::default();

        let status = session.start();
        driver.set_run_state(status, &mut session);
        driver.start();

        let mut frame = 0;
        while session.status() == RunState::Running && frame < max_frames {
            let state = driver.state();
            let target = state
                .obstacles
                .iter()
                .find(|o| o.right() >= CRAFT_X)
                .map(|o| o.gap_top + PIPE_GAP * 0.6)
                .unwrap_or(surface.height / 2.0);
            if state.craft.center().y > target && state.craft.velocity > 0.0 {
                driver.impulse();
            }

            driver.on_frame(frame as f64 * 1000.0 / 60.0, &mut session);
            driver.set_run_state(session.status(), &mut session);
            frame += 1;
        }

        let vertices = driver.painter_mut().map(|p| p.last).unwrap_or(0);
        log::info!(
            "Autopilot stopped after {} frames (score {}, last frame {} vertices)",
            frame,
            session.score(),
            vertices
        );
        session.score()
    }
}
