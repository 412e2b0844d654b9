//! Solo Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{Context, anyhow};
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, Window};

    use solo_pong::audio::AudioManager;
    use solo_pong::consts::{HEIGHT, WIDTH};
    use solo_pong::renderer::{RenderState, frame_vertices};
    use solo_pong::{Game, Hud, Settings};

    /// Everything the browser loop touches
    struct App {
        game: Game,
        audio: AudioManager,
        render_state: RenderState,
        document: Document,
        /// Last HUD written to the DOM
        shown_hud: Option<Hud>,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            self.game.frame(time, &self.audio);
            self.render();
            self.update_hud();
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = frame_vertices(&self.game.state);
            match self.render_state.render(&vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    self.render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let hud = self.game.hud();
            if self.shown_hud.as_ref() == Some(&hud) {
                return;
            }

            let doc = &self.document;
            set_visible(doc, "start-screen", hud.start_screen);
            set_text(doc, "start-prompt", &hud.start_prompt);

            set_visible(doc, "hud", hud.game_screen);
            set_text(doc, "hud-time", &hud.time);
            set_text(doc, "hud-speed", &hud.speed);

            set_visible(doc, "lose-overlay", hud.lose_overlay);
            set_text(doc, "lose-title", hud.lose_title);
            set_text(doc, "play-again", &hud.play_again);

            self.shown_hud = Some(hud);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    pub async fn run() -> anyhow::Result<()> {
        let window = web_sys::window().context("no window")?;
        let document = window.document().context("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .context("no canvas")?
            .dyn_into()
            .map_err(|_| anyhow!("#canvas is not a canvas"))?;

        // Fixed-size screen; CSS may scale it
        let width = WIDTH as u32;
        let height = HEIGHT as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let game = Game::new(&settings);
        let audio = AudioManager::new(&settings);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| anyhow!("create surface: {e}"))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("request adapter: {e}"))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .context("WebGPU setup")?;

        let app = Rc::new(RefCell::new(App {
            game,
            audio,
            render_state,
            document,
            shown_hud: None,
        }));

        setup_keyboard(&window, app.clone());
        app.borrow_mut().update_hud();

        // Start game loop
        request_animation_frame(app);

        log::info!("Solo Pong running!");
        Ok(())
    }

    fn setup_keyboard(window: &Window, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().game.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().game.key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
    }
    log::info!("Solo Pong starting...");

    if let Err(e) = wasm_game::run().await {
        log::error!("Solo Pong failed to start: {e:#}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Solo Pong (native) starting...");
    log::info!("Native mode runs headless - serve the web build to play");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use solo_pong::sim::GamePhase;
    use solo_pong::{Game, NullAudio, Settings};

    /// Give up after five minutes of simulated play
    const MAX_FRAMES: u32 = 60 * 60 * 5;

    /// Start a game and leave the paddle alone until the ball gets past it
    pub fn run() {
        let settings = Settings::load();
        let mut game = Game::new(&settings);

        game.key_down(&settings.action_key);
        game.key_up(&settings.action_key);
        game.step(1.0, &NullAudio);

        let mut frames = 0;
        while game.state.phase == GamePhase::Playing && frames < MAX_FRAMES {
            game.step(1.0, &NullAudio);
            frames += 1;
        }

        let hud = game.hud();
        let outcome = if hud.lose_overlay {
            hud.lose_title
        } else {
            "Still playing"
        };
        println!("{} after {} ({})", outcome, hud.time, hud.speed);
    }
}
