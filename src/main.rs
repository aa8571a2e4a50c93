//! Drop Dash entry point
//!
//! Browser builds wire the DOM to a `Session`; native builds run a headless
//! autopilot for a fixed number of frames.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use drop_dash::consts::FRAME_DT;
    use drop_dash::snapshot::palette;
    use drop_dash::{FrameSnapshot, Session, Settings};

    /// Browser host holding the session and drawing context
    struct Game {
        session: Session,
        ctx: CanvasRenderingContext2d,
        last_time: f64,
        game_over_shown: bool,
    }

    impl Game {
        fn update(&mut self, dt: f32) {
            for event in self.session.advance_frame(dt) {
                log::debug!("{:?}", event);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self, snap: &FrameSnapshot) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("lives") {
                el.set_text_content(Some(&snap.lives.to_string()));
            }
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&snap.score.to_string()));
            }

            // Non-blocking game over prompt
            if snap.game_over != self.game_over_shown {
                if let Some(el) = document.get_element_by_id("game-over") {
                    let class = if snap.game_over { "" } else { "hidden" };
                    let _ = el.set_attribute("class", class);
                }
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&snap.score.to_string()));
                }
                self.game_over_shown = snap.game_over;
            }
        }

        /// Draw the frame on the 2D canvas
        fn render(&self, snap: &FrameSnapshot) {
            let ctx = &self.ctx;
            let (w, h) = (snap.width as f64, snap.height as f64);
            let ground = snap.ground_y as f64;

            let grad = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
            let _ = grad.add_color_stop(0.0, palette::SKY_TOP);
            let _ = grad.add_color_stop(0.7, palette::SKY_MID);
            let _ = grad.add_color_stop(1.0, palette::SKY_BOTTOM);
            ctx.set_fill_style_canvas_gradient(&grad);
            ctx.fill_rect(0.0, 0.0, w, h);

            // Hills
            ctx.set_fill_style_str(palette::HILLS);
            ctx.begin_path();
            let _ = ctx.arc(80.0, ground + 40.0, 60.0, std::f64::consts::PI, 0.0);
            let _ = ctx.arc(320.0, ground + 60.0, 90.0, std::f64::consts::PI, 0.0);
            ctx.close_path();
            ctx.fill();

            ctx.set_fill_style_str(palette::GROUND);
            ctx.fill_rect(0.0, ground, w, h - ground);

            ctx.set_fill_style_str(palette::PLATFORM);
            for p in &snap.platforms {
                rounded_rect(ctx, p.x as f64, p.y as f64, p.w as f64, p.h as f64, PLATFORM_CORNER);
                ctx.fill();
            }

            // Actor: body plus head
            let a = &snap.actor;
            ctx.set_fill_style_str(palette::ACTOR_BODY);
            ctx.fill_rect(a.x as f64, a.y as f64 + 10.0, a.w as f64, a.h as f64 - 10.0);
            ctx.begin_path();
            let _ = ctx.arc(
                (a.x + a.w / 2.0) as f64,
                a.y as f64 + 10.0,
                10.0,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.set_fill_style_str(palette::ACTOR_HEAD);
            ctx.fill();

            // Items as drops hanging from their anchor
            for item in &snap.items {
                let (x, y, r) = (item.x as f64, item.y as f64, item.radius as f64);
                ctx.begin_path();
                ctx.move_to(x, y);
                ctx.bezier_curve_to(x - r, y - r, x - r, y + r, x, y + r * 1.5);
                ctx.bezier_curve_to(x + r, y + r, x + r, y - r, x, y);
                ctx.close_path();
                ctx.set_fill_style_str(&item.color);
                ctx.set_shadow_color(item.category.glow());
                ctx.set_shadow_blur(8.0);
                ctx.fill();
                ctx.set_shadow_blur(0.0);
            }
        }
    }

    /// Platform corner radius
    const PLATFORM_CORNER: f64 = 12.0;

    /// Trace a rounded rectangle path (radius clamped to half the short side)
    fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
        let r = r.min(w / 2.0).min(h / 2.0);
        ctx.begin_path();
        ctx.move_to(x + r, y);
        let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
        let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
        let _ = ctx.arc_to(x, y + h, x, y, r);
        let _ = ctx.arc_to(x, y, x + w, y, r);
        ctx.close_path();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                FRAME_DT
            };
            g.last_time = time;

            g.update(dt);
            let snap = g.session.snapshot();
            g.render(&snap);
            g.update_hud(&snap);
        }

        request_animation_frame(game);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Jump button
        if let Some(btn) = document.get_element_by_id("jumpBtn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.press_jump();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Space bar
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    game.borrow_mut().session.press_jump();
                }
            });
            let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Restart from the game over prompt
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.reset();
                log::info!("Restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Drop Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings {
            playfield_width: canvas.width() as f32,
            playfield_height: canvas.height() as f32,
            seed: Some(js_sys::Date::now() as u64),
            ..Default::default()
        };
        let session = match Session::new(&settings) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Invalid settings: {}", e);
                return;
            }
        };

        let game = Rc::new(RefCell::new(Game {
            session,
            ctx,
            last_time: 0.0,
            game_over_shown: false,
        }));

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Drop Dash running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Drop Dash (native, headless) starting...");

    let args = match native::Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("usage: drop-dash [--seed N] [--frames N] [--config PATH]");
            std::process::exit(2);
        }
    };

    if let Err(e) = native::run(&args).map(|summary| log::debug!("{:?}", summary)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use drop_dash::consts::{FRAME_DT, ITEM_SPEED};
    use drop_dash::sim::{GameEvent, GameState, ItemCategory};
    use drop_dash::{Session, Settings, SettingsError};

    /// Command line options
    #[derive(Debug, Default)]
    pub struct Args {
        pub seed: Option<u64>,
        pub frames: Option<u64>,
        pub config: Option<String>,
    }

    impl Args {
        pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
            let mut parsed = Args::default();
            while let Some(flag) = args.next() {
                let value = args
                    .next()
                    .ok_or_else(|| format!("missing value for {}", flag))?;
                match flag.as_str() {
                    "--seed" => {
                        parsed.seed = Some(value.parse().map_err(|_| format!("bad seed: {}", value))?)
                    }
                    "--frames" => {
                        parsed.frames =
                            Some(value.parse().map_err(|_| format!("bad frame count: {}", value))?)
                    }
                    "--config" => parsed.config = Some(value),
                    other => return Err(format!("unknown argument: {}", other)),
                }
            }
            Ok(parsed)
        }
    }

    /// One minute of play at 60 fps
    const DEFAULT_FRAMES: u64 = 3600;

    /// Frames of lead the autopilot gives itself before a penalty item arrives
    const JUMP_LEAD_TICKS: f32 = 8.0;

    /// Jump when a penalty item is about to reach the actor
    fn should_jump(state: &GameState) -> bool {
        let actor = &state.actor;
        let front = actor.pos.x + actor.size.x;
        state.items.iter().any(|item| {
            item.category == ItemCategory::Penalty
                && item.pos.x >= actor.pos.x
                && item.pos.x - front <= ITEM_SPEED * JUMP_LEAD_TICKS
        })
    }

    /// Outcome of a headless run
    #[derive(Debug, Clone, PartialEq)]
    pub struct RunSummary {
        pub frames: u64,
        pub score: u64,
        pub lives: i32,
        pub spawned: u32,
        pub jumps: u32,
        pub rewards: u32,
        pub penalties: u32,
        pub expired: u32,
        pub game_over: bool,
    }

    pub fn run(args: &Args) -> Result<RunSummary, SettingsError> {
        let mut settings = match &args.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if args.seed.is_some() {
            settings.seed = args.seed;
        }

        let mut session = Session::new(&settings)?;
        let frames = args.frames.unwrap_or(DEFAULT_FRAMES);
        let (mut rewards, mut penalties, mut expired) = (0u32, 0u32, 0u32);
        let (mut spawned, mut jumps) = (0u32, 0u32);
        let mut frames_run = 0;

        for frame in 0..frames {
            frames_run += 1;
            if should_jump(session.state()) {
                session.press_jump();
            }
            for event in session.advance_frame(FRAME_DT) {
                match event {
                    GameEvent::RewardCollected { score } => {
                        rewards += 1;
                        log::info!("frame {}: reward, score {}", frame, score);
                    }
                    GameEvent::PenaltyTaken { lives } => {
                        penalties += 1;
                        log::info!("frame {}: penalty, lives {}", frame, lives);
                    }
                    GameEvent::ItemExpired { .. } => expired += 1,
                    GameEvent::ItemSpawned { .. } => spawned += 1,
                    GameEvent::Jumped => jumps += 1,
                    _ => {}
                }
            }
            if session.is_game_over() {
                break;
            }
        }

        let snap = session.snapshot();
        println!(
            "seed {}: score {}, lives {}, {} rewards, {} penalties, {} items passed{}",
            session.seed(),
            snap.score,
            snap.lives,
            rewards,
            penalties,
            expired,
            if snap.game_over { " - GAME OVER" } else { "" }
        );
        Ok(RunSummary {
            frames: frames_run,
            score: snap.score,
            lives: snap.lives,
            spawned,
            jumps,
            rewards,
            penalties,
            expired,
            game_over: snap.game_over,
        })
    }

}
