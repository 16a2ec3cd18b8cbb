//! Dino Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use dino_dash::Game;
    use dino_dash::Tuning;
    use dino_dash::persistence::LocalStorageStore;
    use dino_dash::platform::{RawInput, is_autopilot_toggle};
    use dino_dash::renderer::CanvasSurface;
    use dino_dash::ui::{Hud, Overlay};

    /// HUD backed by the page's score/best/overlay elements
    struct DomHud {
        document: Document,
    }

    impl DomHud {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
    }

    impl Hud for DomHud {
        fn set_score(&mut self, score: u32) {
            self.set_text("score", &format!("Score: {}", score));
        }

        fn set_best(&mut self, best: u32) {
            self.set_text("best", &format!("Best: {}", best));
        }

        fn set_overlay(&mut self, overlay: Overlay) {
            let Some(el) = self.document.get_element_by_id("overlay") else {
                return;
            };
            match overlay.text() {
                Some(text) => {
                    el.set_text_content(Some(text));
                    let _ = el.class_list().remove_1("hidden");
                }
                None => {
                    let _ = el.class_list().add_1("hidden");
                }
            }
        }
    }

    type WebGame = Game<LocalStorageStore, DomHud>;

    /// Game plus its drawing surface
    struct App {
        game: WebGame,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Dino Dash starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no canvas")?
            .dyn_into()?;
        let surface = CanvasSurface::new(canvas.clone())?;

        let seed = js_sys::Date::now() as u64;
        let hud = DomHud {
            document: document.clone(),
        };
        let game = Game::new(seed, Tuning::load(), LocalStorageStore, hud);
        let app = Rc::new(RefCell::new(App { game, surface }));

        setup_input_handlers(&canvas, app.clone());
        setup_restart_button(&document, app.clone());
        setup_resize(app.clone());

        request_animation_frame(app);

        log::info!("Dino Dash running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                let key = event.key();
                let mut a = app.borrow_mut();
                if is_autopilot_toggle(&key) {
                    a.game.toggle_autopilot();
                    return;
                }
                if code == "Space" || code == "ArrowUp" {
                    event.prevent_default();
                }
                a.game.dispatch(RawInput::Key {
                    code: &code,
                    key: &key,
                });
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.dispatch(RawInput::PointerDown);
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().game.dispatch(RawInput::TouchStart);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &Document, app: Rc<RefCell<App>>) {
        if let Some(btn) = document.get_element_by_id("restart") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.dispatch(RawInput::RestartButton);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Err(e) = app.borrow_mut().surface.fit() {
                log::warn!("Canvas resize failed: {:?}", e);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            let App { game, surface } = &mut *a;
            game.frame(surface);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use dino_dash::cli::Cli;
    use dino_dash::persistence::FileStore;
    use dino_dash::renderer::NullSurface;
    use dino_dash::sim::{InputEvent, RunState};
    use dino_dash::ui::LogHud;
    use dino_dash::{Game, Tuning};

    env_logger::init();
    log::info!("Dino Dash (native) starting...");
    log::info!("Running a headless autopilot session - run with `trunk serve` to play");

    let Cli {
        seed,
        max_ticks,
        best_file,
    } = Cli::parse();

    let mut game = Game::new(seed, Tuning::load(), FileStore::new(best_file), LogHud::default());
    let mut surface = NullSurface {
        size: glam::Vec2::new(800.0, 200.0),
    };

    game.autopilot = true;
    game.handle(InputEvent::RequestStart);

    for _ in 0..max_ticks {
        game.frame(&mut surface);
        if game.session.state == RunState::GameOver {
            break;
        }
    }

    println!(
        "seed {}: {:?} after {} ticks, score {}, best {}",
        seed,
        game.session.state,
        game.session.time_ticks,
        game.session.floored_score(),
        game.session.best.get()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
