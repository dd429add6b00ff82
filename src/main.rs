//! Neon Gravity entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};

    use neon_gravity::persistence::{LocalStore, Progress};
    use neon_gravity::renderer::{RenderState, scene};
    use neon_gravity::{Game, Hud, LevelDefinition, Screen, Settings, Tuning, levels};

    /// Game instance holding all state
    struct App {
        game: Game<LocalStore>,
        render_state: Option<RenderState>,
        settings: Settings,
        /// Overlay currently marked active in the DOM
        shown_screen: Option<Screen>,
        /// Last HUD pushed to the DOM
        last_hud: Option<Hud>,
    }

    impl App {
        /// Render the current frame
        fn render(&mut self, time: f64) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = scene(self.game.state(), &self.settings, time);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements and overlay screens in the DOM
        fn update_hud(&mut self, document: &Document) {
            let hud = self.game.hud();
            if self.last_hud.as_ref() == Some(&hud) {
                return;
            }

            set_text(document, "energyVal", &hud.energy.to_string());
            set_text(document, "pulseCount", &hud.pulses.to_string());
            set_text(document, "levelName", &hud.level_name);
            set_text(document, "bestPulses", &hud.best_label());
            set_text(document, "finalScore", &hud.final_score);
            if let Some(reason) = hud.over_reason {
                set_text(document, "overReason", reason);
            }

            if let Some(el) = document
                .get_element_by_id("energyVal")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let color = if hud.energy_low {
                    "var(--danger)"
                } else {
                    "var(--primary-color)"
                };
                let _ = el.style().set_property("color", color);
            }

            if self.shown_screen != Some(hud.screen) {
                show_screen(document, hud.screen);
                self.shown_screen = Some(hud.screen);
            }

            self.last_hud = Some(hud);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Deactivate every `.screen`, then activate the one for `screen`
    fn show_screen(document: &Document, screen: Screen) {
        if let Ok(screens) = document.query_selector_all(".screen") {
            for i in 0..screens.length() {
                if let Some(el) = screens
                    .item(i)
                    .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                {
                    let _ = el.class_list().remove_1("active");
                }
            }
        }
        if let Some(el) = screen
            .element_id()
            .and_then(|id| document.get_element_by_id(id))
        {
            let _ = el.class_list().add_1("active");
        }
    }

    /// Read an optional inline JSON block (e.g. `<script id="neon-levels" type="application/json">`)
    fn inline_json(document: &Document, id: &str) -> Option<String> {
        document.get_element_by_id(id)?.text_content()
    }

    fn load_levels(document: &Document) -> Vec<LevelDefinition> {
        match inline_json(document, "neon-levels").map(|json| levels::from_json(&json)) {
            Some(Ok(levels)) => levels,
            Some(Err(e)) => {
                log::warn!("Using built-in levels: {e}");
                levels::builtin()
            }
            None => levels::builtin(),
        }
    }

    fn load_tuning(document: &Document) -> Tuning {
        match inline_json(document, "neon-tuning").map(|json| Tuning::from_json(&json)) {
            Some(Ok(tuning)) => tuning,
            Some(Err(e)) => {
                log::warn!("Using default tuning: {e}");
                Tuning::default()
            }
            None => Tuning::default(),
        }
    }

    /// Viewport size in CSS pixels and the matching canvas size in device pixels
    fn viewport(window: &web_sys::Window) -> ((f32, f32), (u32, u32)) {
        let dpr = window.device_pixel_ratio();
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        ((w as f32, h as f32), ((w * dpr) as u32, (h * dpr) as u32))
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Neon Gravity starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let (view, (width, height)) = viewport(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            load_levels(&document),
            load_tuning(&document),
            Progress::new(LocalStore::open()),
            glam::Vec2::new(view.0, view.1),
            seed,
        );
        let app = Rc::new(RefCell::new(App {
            game,
            render_state: None,
            settings: Settings::load(),
            shown_screen: None,
            last_hud: None,
        }));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::HighPerformance,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        match RenderState::new(surface, &adapter, width, height, view).await {
                            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::error!("Failed to create device: {e}"),
                        }
                    }
                    Err(e) => log::error!("No GPU adapter: {e}"),
                }
            }
            Err(e) => log::error!("Failed to create surface: {e}"),
        }

        setup_input_handlers(&canvas, app.clone());
        setup_buttons(&document, app.clone());
        setup_resize(&canvas, app.clone());

        request_animation_frame(app);

        log::info!("Neon Gravity running!");
        Ok(())
    }

    /// Canvas-relative position of a client coordinate
    fn canvas_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f32, f32) {
        let rect = canvas.get_bounding_client_rect();
        (
            client_x as f32 - rect.left() as f32,
            client_y as f32 - rect.top() as f32,
        )
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse down - launch a well
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let (x, y) = canvas_point(&canvas_clone, event.client_x(), event.client_y());
                app.borrow_mut().game.handle_pointer(x, y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - first touch launches a well
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let (x, y) = canvas_point(&canvas_clone, touch.client_x(), touch.client_y());
                    app.borrow_mut().game.handle_pointer(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn on_click(document: &Document, id: &str, app: Rc<RefCell<App>>, action: fn(&mut App)) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("Missing button #{id}");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            action(&mut app.borrow_mut());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, app: Rc<RefCell<App>>) {
        on_click(document, "startBtn", app.clone(), |a| a.game.start_game());
        on_click(document, "nextBtn", app.clone(), |a| a.game.next_level());
        on_click(document, "retryBtn", app, |a| a.game.retry());
    }

    fn setup_resize(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (view, (width, height)) = viewport(&window);
            canvas.set_width(width);
            canvas.set_height(height);
            let mut a = app.borrow_mut();
            a.game.resize(view.0, view.1);
            if let Some(ref mut render_state) = a.render_state {
                render_state.resize(width, height, view);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.game.update();
            a.render(time);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                a.update_hud(&document);
            }
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Neon Gravity (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let levels = match args.next() {
        Some(path) => match read_file(&path).and_then(|json| neon_gravity::levels::from_json(&json)) {
            Ok(levels) => levels,
            Err(e) => {
                log::warn!("Using built-in levels ({path}: {e})");
                neon_gravity::levels::builtin()
            }
        },
        None => neon_gravity::levels::builtin(),
    };
    let tuning = match args.next() {
        Some(path) => match read_file(&path).and_then(|json| neon_gravity::Tuning::from_json(&json)) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Using default tuning ({path}: {e})");
                neon_gravity::Tuning::default()
            }
        },
        None => neon_gravity::Tuning::default(),
    };

    autopilot(levels, tuning);
}

#[cfg(not(target_arch = "wasm32"))]
fn read_file(path: &str) -> Result<String, neon_gravity::GameError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Play each level once with a naive "pulse toward the goal" strategy
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(levels: Vec<neon_gravity::LevelDefinition>, tuning: neon_gravity::Tuning) {
    use neon_gravity::Game;
    use neon_gravity::persistence::{MemoryStore, Progress};
    use neon_gravity::sim::GamePhase;

    const MAX_FRAMES: u32 = 60 * 60;

    let count = levels.len();
    let mut game = Game::new(
        levels,
        tuning,
        Progress::new(MemoryStore::new()),
        glam::Vec2::new(800.0, 600.0),
        0x5eed,
    );
    game.start_game();

    for _ in 0..count {
        let mut frames = 0;
        while game.phase() == GamePhase::Playing && frames < MAX_FRAMES {
            let state = game.state();
            if state.wells.is_empty() && state.orb.vel.length() < 0.5 {
                let toward = (state.goal.pos - state.orb.pos).normalize_or_zero();
                let target = state.orb.pos + toward * 100.0;
                game.handle_pointer(target.x, target.y);
            }
            game.update();
            frames += 1;
        }

        let hud = game.hud();
        match game.phase() {
            GamePhase::Win => println!("{}: cleared with {}", hud.level_name, hud.final_score),
            GamePhase::Over(reason) => println!("{}: {}", hud.level_name, reason),
            _ => println!("{}: still drifting after {} frames", hud.level_name, frames),
        }
        game.next_level();
    }
}
