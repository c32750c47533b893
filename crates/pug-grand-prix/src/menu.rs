use glam::Vec2;
use pug_engine::{
    Command, EngineContext, KeyCode, LevelEntry, Rect, RenderContext, RenderLayer, Scene, SceneBase,
    ShapeCommand, Sprite, TextCommand, Transform,
};

use crate::race::RaceScene;

pub const TITLE: &str = "PUG GRAND PRIX";
const CONTROLS: &str = "Game Controls\nUP: W\nDOWN: S\nLEFT: A\nRIGHT: D\nQUIT: Q\nBARK: E";

const SELECTED: [u8; 4] = [255, 255, 255, 255];
const NORMAL: [u8; 4] = [0, 0, 0, 255];

/// Level picker. Starting a level keeps the menu around for `BACK`.
pub struct MenuScene {
    base: SceneBase,
    levels: Vec<LevelEntry>,
    selected: usize,
}

impl MenuScene {
    pub fn new(ctx: &EngineContext) -> Self {
        let mut base = SceneBase::new();
        if ctx.assets.has_texture("MenuBackground") {
            let bkg = base.entities.add_entity("bkg");
            bkg.layer = RenderLayer::Background;
            bkg.add(Transform::new(Vec2::ZERO));
            bkg.add(Sprite::whole("MenuBackground"));
        }
        base.entities.update();

        let mut menu = Self {
            base,
            levels: ctx.config.levels.clone(),
            selected: 0,
        };
        menu.register_action(KeyCode::W, "UP");
        menu.register_action(KeyCode::Up, "UP");
        menu.register_action(KeyCode::S, "DOWN");
        menu.register_action(KeyCode::Down, "DOWN");
        menu.register_action(KeyCode::D, "PLAY");
        menu.register_action(KeyCode::Escape, "QUIT");
        menu
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn levels(&self) -> &[LevelEntry] {
        &self.levels
    }

    fn play(&mut self, ctx: &mut EngineContext) {
        let Some(entry) = self.levels.get(self.selected) else {
            return;
        };
        match RaceScene::load(ctx, &entry.path) {
            Ok(race) => ctx.change_scene("PLAY", Box::new(race), false),
            Err(err) => log::error!("cannot start {}: {}", entry.name, err),
        }
    }
}

impl Scene for MenuScene {
    fn name(&self) -> &str {
        "menu"
    }

    fn base(&self) -> &SceneBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SceneBase {
        &mut self.base
    }

    fn do_action(&mut self, ctx: &mut EngineContext, command: &Command) {
        if !command.is_start() {
            return;
        }
        let count = self.levels.len().max(1);
        match command.name() {
            "UP" => self.selected = (self.selected + count - 1) % count,
            "DOWN" => self.selected = (self.selected + 1) % count,
            "PLAY" => self.play(ctx),
            "QUIT" => ctx.quit(),
            _ => {}
        }
    }

    fn update(&mut self, _ctx: &mut EngineContext, _dt: f32) {
        self.base.entities.update();
    }

    fn render(&self, ctx: &mut RenderContext) {
        pug_engine::build_render_buffer(
            self.base.entities.entities().iter(),
            ctx.assets,
            ctx.buffer,
            Default::default(),
        );
        ctx.buffer.clear_color = [120, 180, 230];

        let mut text = |label: &str, pos: Vec2, size: u32, color: [u8; 4]| {
            ctx.buffer.push_text(TextCommand {
                text: label.to_string(),
                font: "Arcade".to_string(),
                size,
                pos,
                color,
            });
        };
        text(TITLE, Vec2::new(10.0, 10.0), 64, NORMAL);
        for (i, level) in self.levels.iter().enumerate() {
            let color = if i == self.selected { SELECTED } else { NORMAL };
            text(&level.name, Vec2::new(32.0, 32.0 + (i + 1) as f32 * 96.0), 64, color);
        }

        let footer = Vec2::new(32.0, ctx.window_size.y - 180.0);
        ctx.buffer.push_shape(ShapeCommand {
            rect: Rect::new(footer.x - 8.0, footer.y - 8.0, 200.0, 170.0),
            color: [255, 255, 255, 90],
            filled: true,
            layer: RenderLayer::Hud,
        });
        ctx.buffer.push_text(TextCommand {
            text: CONTROLS.to_string(),
            font: "Arial".to_string(),
            size: 20,
            pos: footer,
            color: NORMAL,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        let mut ctx = EngineContext::default();
        let mut menu = MenuScene::new(&ctx);
        assert_eq!(menu.levels().len(), 3);

        menu.do_action(&mut ctx, &Command::start("UP"));
        assert_eq!(menu.selected(), 2);
        menu.do_action(&mut ctx, &Command::start("DOWN"));
        menu.do_action(&mut ctx, &Command::start("DOWN"));
        assert_eq!(menu.selected(), 1);
        menu.do_action(&mut ctx, &Command::end("DOWN"));
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn missing_level_keeps_menu() {
        let mut ctx = EngineContext::default();
        ctx.config.levels = vec![LevelEntry {
            name: "Ghost".into(),
            path: "no/such/level.txt".into(),
        }];
        let mut menu = MenuScene::new(&ctx);
        menu.do_action(&mut ctx, &Command::start("PLAY"));
        assert!(!ctx.has_pending_transitions());
    }

    #[test]
    fn quit_requests_shutdown() {
        let mut ctx = EngineContext::default();
        let mut menu = MenuScene::new(&ctx);
        menu.do_action(&mut ctx, &Command::start("QUIT"));
        assert!(ctx.has_pending_transitions());
    }

    #[test]
    fn renders_title_and_levels() {
        let ctx = EngineContext::default();
        let menu = MenuScene::new(&ctx);
        let mut buffer = pug_engine::RenderBuffer::new(pug_engine::Camera2D::new(1280.0, 768.0));
        let mut render_ctx = RenderContext {
            buffer: &mut buffer,
            assets: &ctx.assets,
            window_size: ctx.window_size(),
        };
        menu.render(&mut render_ctx);

        let names: Vec<&str> = buffer.texts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(&names[..4], &[TITLE, "Level 1", "Level 2", "Level 3"]);
        assert_eq!(buffer.texts[1].color, SELECTED);
    }
}
