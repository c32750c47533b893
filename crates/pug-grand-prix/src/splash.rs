use std::f32::consts::PI;

use glam::Vec2;
use pug_engine::{Command, EngineContext, KeyCode, RenderContext, Scene, SceneBase, TextCommand};

use crate::menu::MenuScene;

pub const WELCOME: &str = "Welcome to the Ultimate Pug Race!\n\nBark, Dash, and Race to Glory!";
pub const PROMPT: &str = "Press any key to continue...";

/// Input is ignored this long so a held key does not skip the splash.
pub const MIN_DISPLAY_SECONDS: f32 = 1.0;
const PULSE_RATE: f32 = 0.8;

/// Title card shown once at startup. Replaces itself with the menu.
pub struct SplashScene {
    base: SceneBase,
    elapsed: f32,
    ready: bool,
}

impl SplashScene {
    pub fn new() -> Self {
        let mut splash = Self {
            base: SceneBase::new(),
            elapsed: 0.0,
            ready: false,
        };
        splash.register_action(KeyCode::Space, "CONTINUE");
        splash.register_action(KeyCode::Return, "CONTINUE");
        splash.register_action(KeyCode::Escape, "CONTINUE");
        splash
    }

    /// Prompt opacity: hidden for the first second, then pulsing between 55 and 255.
    pub fn prompt_alpha(&self) -> u8 {
        if self.elapsed < MIN_DISPLAY_SECONDS {
            return 0;
        }
        let alpha = 155.0 + 100.0 * (self.elapsed * PULSE_RATE * PI).sin();
        alpha.clamp(0.0, 255.0) as u8
    }
}

impl Default for SplashScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for SplashScene {
    fn name(&self) -> &str {
        "splash"
    }

    fn base(&self) -> &SceneBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SceneBase {
        &mut self.base
    }

    fn do_action(&mut self, _ctx: &mut EngineContext, command: &Command) {
        if self.elapsed >= MIN_DISPLAY_SECONDS && command.is_start() && command.name() == "CONTINUE" {
            self.ready = true;
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, dt: f32) {
        self.elapsed += dt;
        if self.ready {
            self.ready = false;
            let menu = MenuScene::new(ctx);
            ctx.change_scene("MENU", Box::new(menu), true);
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        ctx.buffer.clear_color = [25, 25, 50];
        let center = ctx.window_size / 2.0;

        ctx.buffer.push_text(TextCommand {
            text: WELCOME.to_string(),
            font: "main".to_string(),
            size: 30,
            pos: center - Vec2::new(0.0, 50.0),
            color: [255, 255, 255, 255],
        });

        let alpha = self.prompt_alpha();
        if alpha > 0 {
            ctx.buffer.push_text(TextCommand {
                text: PROMPT.to_string(),
                font: "main".to_string(),
                size: 22,
                pos: center + Vec2::new(0.0, 150.0),
                color: [200, 200, 200, alpha],
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continue_ignored_during_first_second() {
        let mut ctx = EngineContext::default();
        let mut splash = SplashScene::new();
        splash.update(&mut ctx, 0.5);
        splash.do_action(&mut ctx, &Command::start("CONTINUE"));
        splash.update(&mut ctx, 0.1);
        assert!(!ctx.has_pending_transitions());
        assert_eq!(splash.prompt_alpha(), 0);

        splash.update(&mut ctx, 0.5);
        assert!(splash.prompt_alpha() > 0);
        splash.do_action(&mut ctx, &Command::start("CONTINUE"));
        splash.update(&mut ctx, 0.1);
        assert!(ctx.has_pending_transitions());
    }

    #[test]
    fn key_release_does_not_continue() {
        let mut ctx = EngineContext::default();
        let mut splash = SplashScene::new();
        splash.update(&mut ctx, 2.0);
        splash.do_action(&mut ctx, &Command::end("CONTINUE"));
        splash.update(&mut ctx, 0.1);
        assert!(!ctx.has_pending_transitions());
    }
}
