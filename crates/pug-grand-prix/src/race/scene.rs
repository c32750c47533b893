//! One playable level: two competitors race the same track in turn.

use std::path::Path;

use glam::Vec2;
use image::RgbaImage;
use pug_engine::{
    build_render_buffer, integrate_transforms, push_apart, resolve_static, tick_animations, Assets,
    BoundingBox, Camera2D, Command, EngineContext, EntityId, Input, KeyCode, Rect, RenderContext,
    RenderLayer, RenderOptions, Scene, SceneBase, ShapeCommand, Sprite, State, TextCommand, Transform,
};

use crate::blocking::{generate_blocking_squares, sample_world};
use crate::error::LevelError;
use crate::level::Level;
use crate::race::laps::{LapProgress, LapTracker, RaceResult, Standings};
use crate::race::timer::{RacePhase, RaceTimer, TimerEvent};
use crate::track::{spawn_point, TrackLayout};

pub const PLAYER_SIZE: Vec2 = Vec2::new(35.0, 33.0);
pub const BARREL_SIZE: Vec2 = Vec2::new(40.0, 40.0);
const BONE_SIZE: Vec2 = Vec2::new(24.0, 24.0);

/// Fixed correction applied per overlapping barrel per frame.
pub const BARREL_PUSH: f32 = 5.0;
/// Speed multiplier while the player stands on grass.
pub const GRASS_SLOWDOWN: f32 = 0.5;

pub const BONE_PICKUP_RANGE: f32 = 40.0;
pub const BOOST_SECONDS: f32 = 3.0;
/// Added to each moving axis of the velocity while boosted.
pub const BOOST_KICK: f32 = 150.0;

pub const BARK_CHARGES: u32 = 2;
pub const BARK_RANGE: f32 = 150.0;

const BONUS_BANNER_SECONDS: f32 = 2.0;
const ZOOM_OUT: f32 = 1.5;
const ZOOM_IN: f32 = 0.66667;

pub const COMPETITORS: [&str; 2] = ["Player 1", "Player 2"];

// Sprite records
const PLAYER_SPRITE: &str = "pug";
const BOOST_SPRITE: &str = "pugBoost";
const BARREL_SPRITE: &str = "barrel";
const BONE_SPRITE: &str = "bone";
const BONE_ANIMATION: &str = "boneSpin";

const HUD_FONT: &str = "main";
const WHITE: [u8; 4] = [255, 255, 255, 255];
const YELLOW: [u8; 4] = [255, 220, 0, 255];

pub struct RaceScene {
    base: SceneBase,
    level: Level,
    layout: TrackLayout,
    view: Camera2D,
    spawn: Vec2,
    player: EntityId,
    /// Background pixels and their world-space origin, for grass sampling.
    background: Option<(RgbaImage, Vec2)>,
    blocking: Vec<Rect>,
    timer: RaceTimer,
    laps: LapTracker,
    standings: Standings,
    competitor: usize,
    result: Option<RaceResult>,
    bark_charges: u32,
    /// Seconds of boost left.
    boost: Option<f32>,
    /// Last checkpoint bonus and how long it stays on screen.
    bonus_banner: Option<(f32, f32)>,
    options: RenderOptions,
}

impl RaceScene {
    /// Load a level file and its background collision mask.
    ///
    /// A background that cannot be decoded only disables the grass effects;
    /// a level file that cannot be read is an error.
    pub fn load(ctx: &mut EngineContext, path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let level = Level::load(path)?;
        let layout = *TrackLayout::for_level(path);

        let background = level
            .backgrounds
            .first()
            .and_then(|bkg| match ctx.assets.load_image(&bkg.texture) {
                Ok(image) => Some((image, bkg.pos)),
                Err(err) => {
                    log::warn!("no collision mask for {}: {}", bkg.texture, err);
                    None
                }
            });

        Ok(Self::new(ctx, level, layout, background))
    }

    pub fn new(
        ctx: &mut EngineContext,
        level: Level,
        layout: TrackLayout,
        background: Option<(RgbaImage, Vec2)>,
    ) -> Self {
        let window = ctx.window_size();
        let mut view = Camera2D::new(window.x, window.y);
        view.set_bounds(0.0, 0.0, level.world.x, level.world.y);
        let spawn = spawn_point(level.world, view.size());
        view.look_at(spawn);

        let blocking = background
            .as_ref()
            .map(|(image, origin)| {
                generate_blocking_squares(image, *origin, layout.track_color, layout.grass_color)
            })
            .unwrap_or_default();

        let mut base = SceneBase::new();
        for bkg in &level.backgrounds {
            let e = base.entities.add_entity("bkg");
            e.layer = RenderLayer::Background;
            e.add(Transform::new(bkg.pos));
            e.add(Sprite::whole(bkg.texture.clone()));
        }

        let player = base.entities.add_entity("player");
        player.add(Transform::new(spawn));
        player.add(sprite_or(&ctx.assets, PLAYER_SPRITE, PLAYER_SIZE));
        player.add(BoundingBox::new(PLAYER_SIZE));
        player.add(State::new("straight"));
        player.add(Input::default());
        let player = player.id;

        let mut scene = Self {
            base,
            laps: LapTracker::new(layout.checkpoints, layout.finish_line),
            level,
            layout,
            view,
            spawn,
            player,
            background,
            blocking,
            timer: RaceTimer::default(),
            standings: Standings::new(),
            competitor: 0,
            result: None,
            bark_charges: BARK_CHARGES,
            boost: None,
            bonus_banner: None,
            options: RenderOptions::default(),
        };
        scene.spawn_pickups_and_hazards(&ctx.assets);
        scene.base.entities.update();
        scene.register_actions();

        let volume = ctx.config.music_volume;
        ctx.music.play("gameTheme");
        ctx.music.set_volume(volume);

        log::info!(
            "race on {} track: {} checkpoints, {} blocking squares, {} starts",
            scene.layout.name,
            scene.layout.checkpoints.len(),
            scene.blocking.len(),
            COMPETITORS[0]
        );
        scene
    }

    fn register_actions(&mut self) {
        self.register_action(KeyCode::Z, "ZOOMOUT");
        self.register_action(KeyCode::X, "ZOOMIN");

        self.register_action(KeyCode::P, "PAUSE");
        self.register_action(KeyCode::Escape, "BACK");
        self.register_action(KeyCode::Q, "QUIT");
        self.register_action(KeyCode::E, "BARK");
        self.register_action(KeyCode::C, "TOGGLE_COLLISION");
        self.register_action(KeyCode::T, "TOGGLE_TEXTURE");

        self.register_action(KeyCode::A, "LEFT");
        self.register_action(KeyCode::Left, "LEFT");
        self.register_action(KeyCode::D, "RIGHT");
        self.register_action(KeyCode::Right, "RIGHT");
        self.register_action(KeyCode::W, "UP");
        self.register_action(KeyCode::Up, "UP");
        self.register_action(KeyCode::S, "DOWN");
        self.register_action(KeyCode::Down, "DOWN");
    }

    fn spawn_pickups_and_hazards(&mut self, assets: &Assets) {
        for &pos in self.layout.barrels {
            let barrel = self.base.entities.add_entity("Barrel");
            barrel.add(Transform::new(pos));
            barrel.add(sprite_or(assets, BARREL_SPRITE, BARREL_SIZE));
            barrel.add(BoundingBox::new(BARREL_SIZE));
        }
        for &pos in self.layout.bones {
            let bone = self.base.entities.add_entity("Bone");
            bone.add(Transform::new(pos));
            bone.add(sprite_or(assets, BONE_SPRITE, BONE_SIZE));
            if let Some(animation) = assets.animation(BONE_ANIMATION) {
                bone.add(animation);
            }
        }
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub fn player_transform(&self) -> Option<&Transform> {
        self.base.entities.get(self.player)?.try_get::<Transform>()
    }

    pub fn player_pos(&self) -> Option<Vec2> {
        self.player_transform().map(|t| t.pos)
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn timer(&self) -> &RaceTimer {
        &self.timer
    }

    pub fn laps(&self) -> &LapTracker {
        &self.laps
    }

    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    pub fn result(&self) -> Option<&RaceResult> {
        self.result.as_ref()
    }

    pub fn competitor(&self) -> &'static str {
        COMPETITORS[self.competitor]
    }

    pub fn bark_charges(&self) -> u32 {
        self.bark_charges
    }

    pub fn is_boosted(&self) -> bool {
        self.boost.is_some()
    }

    pub fn view(&self) -> &Camera2D {
        &self.view
    }

    pub fn blocking_squares(&self) -> &[Rect] {
        &self.blocking
    }

    pub fn render_options(&self) -> RenderOptions {
        self.options
    }

    fn set_input(&mut self, action: &str, held: bool) {
        if let Some(input) = self.base.entities.get_mut(self.player).and_then(|p| p.get_mut::<Input>()) {
            input.set(action, held);
        }
    }

    /// Speed factor for the terrain under `pos`. Sampling outside the
    /// background leaves the speed alone.
    fn terrain_factor(&self, pos: Vec2) -> f32 {
        match &self.background {
            Some((image, origin)) if sample_world(image, *origin, pos) == Some(self.layout.grass_color) => {
                GRASS_SLOWDOWN
            }
            _ => 1.0,
        }
    }

    fn player_movement(&mut self) {
        let Some(pos) = self.player_pos() else {
            return;
        };
        let speed = self.level.player_speed * self.terrain_factor(pos);
        let racing = self.timer.is_racing();
        let boosted = self.boost.is_some();

        let Some(player) = self.base.entities.get_mut(self.player) else {
            return;
        };
        let heading = player.get::<Input>().heading();
        let transform = player.component_mut::<Transform>();

        if !racing {
            transform.vel = Vec2::ZERO;
            return;
        }
        let mut vel = heading.normalize_or_zero() * speed;
        if boosted {
            vel += Vec2::new(axis_sign(heading.x), axis_sign(heading.y)) * BOOST_KICK;
        }
        transform.vel = vel;
    }

    fn collide_barrels(&mut self) {
        let barrels: Vec<(Vec2, Vec2)> = self
            .base
            .entities
            .entities_by_tag("Barrel")
            .filter(|e| e.is_alive())
            .map(|e| (e.get::<Transform>().pos, e.get::<BoundingBox>().half_size))
            .collect();

        let Some(player) = self.base.entities.get_mut(self.player) else {
            return;
        };
        let half = player.get::<BoundingBox>().half_size;
        let transform = player.component_mut::<Transform>();
        for (pos, barrel_half) in barrels {
            transform.pos = push_apart(transform.pos, half, pos, barrel_half, BARREL_PUSH);
        }
    }

    fn collide_track(&mut self) {
        if self.blocking.is_empty() {
            return;
        }
        let Some(player) = self.base.entities.get_mut(self.player) else {
            return;
        };
        let half = player.get::<BoundingBox>().half_size;
        let transform = player.component_mut::<Transform>();
        transform.pos = resolve_static(transform.pos, transform.prev_pos, half, &self.blocking);
    }

    fn pick_up_bones(&mut self, ctx: &mut EngineContext) {
        let Some(pos) = self.player_pos() else {
            return;
        };
        let bones: Vec<EntityId> = self
            .base
            .entities
            .entities_by_tag("Bone")
            .filter(|e| e.is_alive() && e.get::<Transform>().pos.distance(pos) < BONE_PICKUP_RANGE)
            .map(|e| e.id)
            .collect();
        if bones.is_empty() {
            return;
        }

        for id in bones {
            self.base.entities.destroy(id);
        }
        log::debug!("{} picked up a bone", self.competitor());
        ctx.play_sound_at("bone", pos);
        self.boost = Some(BOOST_SECONDS);
        self.set_player_look(&ctx.assets, BOOST_SPRITE, "boost");
    }

    fn tick_boost(&mut self, ctx: &EngineContext, dt: f32) {
        let Some(remaining) = self.boost.as_mut() else {
            return;
        };
        *remaining -= dt;
        if *remaining > 0.0 {
            return;
        }

        self.boost = None;
        let speed = self.level.player_speed;
        if let Some(player) = self.base.entities.get_mut(self.player) {
            let heading = player.get::<Input>().heading();
            player.component_mut::<Transform>().vel = heading.normalize_or_zero() * speed;
        }
        self.set_player_look(&ctx.assets, PLAYER_SPRITE, "straight");
        log::debug!("boost expired");
    }

    fn set_player_look(&mut self, assets: &Assets, sprite: &str, state: &str) {
        if let Some(player) = self.base.entities.get_mut(self.player) {
            player.add(sprite_or(assets, sprite, PLAYER_SIZE));
            player.component_mut::<State>().set(state);
        }
    }

    fn follow_and_clamp(&mut self) {
        let Some(pos) = self.player_pos() else {
            return;
        };
        self.view.look_at(pos);

        let view = &self.view;
        if let Some(player) = self.base.entities.get_mut(self.player) {
            let half = player.get::<BoundingBox>().half_size;
            let transform = player.component_mut::<Transform>();
            transform.pos = view.clamp_inside(transform.pos, half);
        }
    }

    fn check_laps(&mut self, ctx: &mut EngineContext) {
        let Some(player) = self.base.entities.get(self.player) else {
            return;
        };
        let area = Rect::from_center(player.get::<Transform>().pos, player.get::<BoundingBox>().size);

        match self.laps.check(&area) {
            Some(LapProgress::Checkpoint { bonus, .. }) => {
                self.timer.add_bonus(bonus);
                self.bonus_banner = Some((bonus, BONUS_BANNER_SECONDS));
                ctx.play_sound("checkpoint");
            }
            Some(LapProgress::Finished) => {
                if let Some(lap_time) = self.timer.finish() {
                    self.end_attempt(ctx, Some(lap_time));
                }
            }
            None => {}
        }
    }

    fn bark(&mut self, ctx: &mut EngineContext) {
        if self.is_paused() || self.timer.is_finished() {
            return;
        }
        if self.bark_charges == 0 {
            log::debug!("{} has no barks left", self.competitor());
            return;
        }
        let Some(origin) = self.player_pos() else {
            return;
        };

        let nearest = self
            .base
            .entities
            .entities_by_tag("Barrel")
            .filter(|e| e.is_alive())
            .map(|e| (e.id, e.get::<Transform>().pos.distance(origin)))
            .filter(|(_, distance)| *distance <= BARK_RANGE)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        match nearest {
            Some((id, distance)) => {
                self.base.entities.destroy(id);
                self.bark_charges -= 1;
                ctx.play_sound("bark");
                log::info!("bark! barrel {} at {:.0} units ({} left)", id, distance, self.bark_charges);
            }
            None => log::debug!("bark with no barrel in range"),
        }
    }

    /// Record the attempt, then hand over to the next competitor or call the race.
    fn end_attempt(&mut self, ctx: &mut EngineContext, lap_time: Option<f32>) {
        let name = self.competitor();
        self.standings.record(name, lap_time);

        if self.competitor + 1 < COMPETITORS.len() {
            self.competitor += 1;
            self.restart_attempt(&ctx.assets);
            log::info!("{} to the start line", self.competitor());
            return;
        }

        let result = self.standings.result();
        log::info!("race over: {}", result);
        self.result = Some(result);
        if let Some(transform) = self.base.entities.get_mut(self.player).and_then(|p| p.get_mut::<Transform>()) {
            transform.vel = Vec2::ZERO;
        }
    }

    fn restart_attempt(&mut self, assets: &Assets) {
        let stale: Vec<EntityId> = ["Barrel", "Bone"]
            .iter()
            .flat_map(|tag| self.base.entities.ids_by_tag(tag).to_vec())
            .collect();
        for id in stale {
            self.base.entities.destroy(id);
        }
        self.spawn_pickups_and_hazards(assets);

        if let Some(player) = self.base.entities.get_mut(self.player) {
            player.add(Transform::new(self.spawn));
        }
        self.set_player_look(assets, PLAYER_SPRITE, "straight");
        self.base.entities.update();

        self.view.look_at(self.spawn);
        self.timer = RaceTimer::default();
        self.laps.reset();
        self.bark_charges = BARK_CHARGES;
        self.boost = None;
    }

    fn render_debug(&self, ctx: &mut RenderContext) {
        for square in &self.blocking {
            ctx.buffer.push_shape(ShapeCommand {
                rect: *square,
                color: [255, 0, 0, 255],
                filled: false,
                layer: RenderLayer::Debug,
            });
        }
        for checkpoint in self.laps.checkpoints() {
            ctx.buffer.push_shape(ShapeCommand {
                rect: checkpoint.area,
                color: if checkpoint.reached { [0, 255, 0, 120] } else { [255, 220, 0, 120] },
                filled: true,
                layer: RenderLayer::Debug,
            });
        }
        ctx.buffer.push_shape(ShapeCommand {
            rect: self.laps.finish_line(),
            color: if self.laps.all_reached() { [255, 255, 255, 160] } else { [80, 80, 80, 160] },
            filled: true,
            layer: RenderLayer::Debug,
        });
    }

    fn render_hud(&self, ctx: &mut RenderContext) {
        let visible = self.view.visible_rect();
        ctx.buffer.push_shape(ShapeCommand {
            rect: Rect::new(visible.left, visible.top, 280.0, 130.0),
            color: [0, 0, 0, 150],
            filled: true,
            layer: RenderLayer::Hud,
        });

        let clock = match self.timer.phase() {
            RacePhase::Countdown(t) => format!("Get ready: {}", t.ceil() as u32),
            RacePhase::Racing(t) => format!("Time: {:.1}", t),
            RacePhase::Finished => "Finished".to_string(),
        };
        hud_text(ctx, clock, Vec2::new(16.0, 12.0), 28, WHITE);
        hud_text(ctx, format!("Barks: {}", self.bark_charges), Vec2::new(16.0, 48.0), 22, WHITE);
        let gates = format!(
            "Checkpoints: {}/{} (+{:.0}s)",
            self.laps.current(),
            self.layout.checkpoints.len(),
            self.layout.total_bonus()
        );
        hud_text(ctx, gates, Vec2::new(120.0, 48.0), 18, WHITE);

        let mut lines: Vec<String> = self
            .standings
            .records()
            .iter()
            .map(|r| match r.lap_time {
                Some(t) => format!("{}: {:.2}s", r.name, t),
                None => format!("{}: out of time", r.name),
            })
            .collect();
        if self.result.is_none() {
            lines.push(format!("{} racing", self.competitor()));
        }
        hud_text(ctx, lines.join("\n"), Vec2::new(16.0, 78.0), 18, WHITE);

        let center = ctx.window_size / 2.0;
        if let Some((bonus, _)) = self.bonus_banner {
            hud_text(ctx, format!("+{:.0}s", bonus), Vec2::new(center.x, 80.0), 40, YELLOW);
        }
        if let Some(result) = &self.result {
            hud_text(ctx, result.to_string(), center, 48, YELLOW);
        } else if self.is_paused() {
            hud_text(ctx, "PAUSED".to_string(), center, 48, WHITE);
        }
    }
}

impl Scene for RaceScene {
    fn name(&self) -> &str {
        "race"
    }

    fn base(&self) -> &SceneBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SceneBase {
        &mut self.base
    }

    fn do_action(&mut self, ctx: &mut EngineContext, command: &Command) {
        let name = command.name();
        if !command.is_start() {
            self.set_input(name, false);
            return;
        }
        match name {
            "PAUSE" => {
                let paused = !self.is_paused();
                self.set_paused(paused);
            }
            "QUIT" => ctx.quit_level(),
            "BACK" => ctx.back_level(),
            "ZOOMOUT" => self.view.zoom(ZOOM_OUT),
            "ZOOMIN" => self.view.zoom(ZOOM_IN),
            "TOGGLE_TEXTURE" => self.options.textures = !self.options.textures,
            "TOGGLE_COLLISION" => self.options.collision = !self.options.collision,
            "BARK" => self.bark(ctx),
            _ => self.set_input(name, true),
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, dt: f32) {
        // The bonus banner is UI and keeps counting down while paused.
        if let Some((_, shown)) = self.bonus_banner.as_mut() {
            *shown -= dt;
            if *shown <= 0.0 {
                self.bonus_banner = None;
            }
        }
        if self.is_paused() {
            return;
        }

        self.base.entities.update();
        if self.timer.is_finished() {
            return;
        }

        match self.timer.tick(dt) {
            Some(TimerEvent::Started) => log::info!("{}: go!", self.competitor()),
            Some(TimerEvent::TimedOut) => {
                self.end_attempt(ctx, None);
                return;
            }
            None => {}
        }

        self.player_movement();
        integrate_transforms(&mut self.base.entities, dt);
        self.collide_barrels();
        self.collide_track();
        self.pick_up_bones(ctx);
        self.tick_boost(ctx, dt);
        tick_animations(&mut self.base.entities, dt);
        self.follow_and_clamp();
        self.check_laps(ctx);
    }

    fn render(&self, ctx: &mut RenderContext) {
        ctx.buffer.view = self.view.clone();
        build_render_buffer(self.base.entities.entities().iter(), ctx.assets, ctx.buffer, self.options);
        if self.options.collision {
            self.render_debug(ctx);
        }
        self.render_hud(ctx);
    }

    fn on_end(&mut self, ctx: &mut EngineContext) {
        log::debug!("leaving {} track", self.layout.name);
        ctx.music.stop();
    }
}

fn sprite_or(assets: &Assets, name: &str, size: Vec2) -> Sprite {
    assets
        .sprite(name)
        .unwrap_or_else(|| Sprite::new(name, Rect::new(0.0, 0.0, size.x, size.y)))
}

fn hud_text(ctx: &mut RenderContext, text: String, pos: Vec2, size: u32, color: [u8; 4]) {
    ctx.buffer.push_text(TextCommand {
        text,
        font: HUD_FONT.to_string(),
        size,
        pos,
        color,
    });
}

/// -1, 0 or 1. Unlike `f32::signum`, zero stays zero.
fn axis_sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::{CheckpointSpec, PARK};
    use image::Rgba;

    const DT: f32 = 1.0 / 60.0;

    fn level() -> Level {
        Level::parse("World 1280 3072 PlayerSpeed 200").unwrap()
    }

    const SINGLE_CHECKPOINT: [CheckpointSpec; 1] = [CheckpointSpec::new(Rect::new(0.0, 100.0, 1280.0, 20.0), 5.0)];
    const BARREL_BESIDE_SPAWN: [Vec2; 1] = [Vec2::new(660.0, 2700.0)];

    fn open_track() -> TrackLayout {
        TrackLayout {
            checkpoints: &SINGLE_CHECKPOINT,
            barrels: &[],
            bones: &[],
            ..PARK
        }
    }

    fn run(scene: &mut RaceScene, ctx: &mut EngineContext, seconds: f32, dt: f32) {
        let frames = (seconds / dt).round() as usize;
        for _ in 0..frames {
            scene.update(ctx, dt);
        }
    }

    #[test]
    fn spawns_player_hazards_and_background() {
        let mut ctx = EngineContext::default();
        let level = Level::parse("Bkg Track1 0 0 World 1280 3072").unwrap();
        let scene = RaceScene::new(&mut ctx, level, PARK, None);

        let entities = scene.entities();
        assert_eq!(entities.entities_by_tag("Barrel").count(), PARK.barrels.len());
        assert_eq!(entities.entities_by_tag("Bone").count(), PARK.bones.len());
        assert_eq!(entities.entities_by_tag("bkg").count(), 1);
        assert_eq!(scene.player_pos(), Some(Vec2::new(640.0, 2688.0)));
        assert_eq!(scene.bark_charges(), BARK_CHARGES);
        assert_eq!(ctx.music.current(), Some("gameTheme"));
    }

    #[test]
    fn overlapping_barrel_pushes_player_away() {
        let mut ctx = EngineContext::default();
        let layout = TrackLayout {
            barrels: &BARREL_BESIDE_SPAWN,
            ..open_track()
        };
        let mut scene = RaceScene::new(&mut ctx, level(), layout, None);
        scene.update(&mut ctx, DT);
        assert_eq!(scene.player_pos(), Some(Vec2::new(635.0, 2683.0)));
    }

    #[test]
    fn grass_halves_speed() {
        let mut ctx = EngineContext::default();
        let grass = PARK.grass_color;
        let image = RgbaImage::from_pixel(200, 200, Rgba([grass[0], grass[1], grass[2], 255]));
        let background = Some((image, Vec2::new(540.0, 2588.0)));
        let mut scene = RaceScene::new(&mut ctx, level(), open_track(), background);
        assert!(scene.blocking_squares().is_empty(), "no track pixels, no barrier");

        run(&mut scene, &mut ctx, 3.0, DT);
        scene.do_action(&mut ctx, &Command::start("RIGHT"));
        scene.update(&mut ctx, DT);
        assert_eq!(scene.player_transform().unwrap().vel, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn pause_freezes_race_but_not_banner() {
        let mut ctx = EngineContext::default();
        let mut scene = RaceScene::new(&mut ctx, level(), open_track(), None);
        scene.bonus_banner = Some((5.0, 1.0));

        scene.do_action(&mut ctx, &Command::start("PAUSE"));
        assert!(scene.is_paused());
        run(&mut scene, &mut ctx, 1.5, DT);
        assert_eq!(scene.timer().phase(), RacePhase::Countdown(3.0));
        assert!(scene.bonus_banner.is_none());

        scene.do_action(&mut ctx, &Command::start("PAUSE"));
        assert!(!scene.is_paused());
        scene.update(&mut ctx, 0.5);
        assert_eq!(scene.timer().phase(), RacePhase::Countdown(2.5));
    }

    #[test]
    fn two_timeouts_mean_no_winner() {
        let mut ctx = EngineContext::default();
        let mut scene = RaceScene::new(&mut ctx, level(), open_track(), None);

        run(&mut scene, &mut ctx, 13.0, 0.1);
        assert_eq!(scene.competitor(), COMPETITORS[1]);
        assert!(scene.timer().is_countdown());
        assert_eq!(scene.standings().records()[0].lap_time, None);

        run(&mut scene, &mut ctx, 13.0, 0.1);
        assert_eq!(scene.result(), Some(&RaceResult::NoWinner));
        assert!(scene.timer().is_finished());

        scene.do_action(&mut ctx, &Command::start("LEFT"));
        run(&mut scene, &mut ctx, 1.0, 0.1);
        assert_eq!(scene.player_transform().unwrap().vel, Vec2::ZERO);
    }

    #[test]
    fn debug_toggles_and_zoom() {
        let mut ctx = EngineContext::default();
        let mut scene = RaceScene::new(&mut ctx, level(), open_track(), None);

        scene.do_action(&mut ctx, &Command::start("TOGGLE_COLLISION"));
        scene.do_action(&mut ctx, &Command::start("TOGGLE_TEXTURE"));
        let options = scene.render_options();
        assert!(options.collision && !options.textures);

        scene.do_action(&mut ctx, &Command::start("ZOOMOUT"));
        assert!((scene.view().width - 1920.0).abs() < 1e-3);
        scene.do_action(&mut ctx, &Command::start("ZOOMIN"));
        assert!((scene.view().width - 1280.0).abs() < 0.1);
    }

    #[test]
    fn back_and_quit_request_transitions() {
        let mut ctx = EngineContext::default();
        let mut scene = RaceScene::new(&mut ctx, level(), open_track(), None);
        assert!(!ctx.has_pending_transitions());
        scene.do_action(&mut ctx, &Command::start("BACK"));
        assert!(ctx.has_pending_transitions());
    }

    #[test]
    fn render_draws_world_and_hud() {
        let mut ctx = EngineContext::default();
        let scene = RaceScene::new(&mut ctx, level(), open_track(), None);
        let mut buffer = pug_engine::RenderBuffer::new(Camera2D::new(1280.0, 768.0));
        let mut render_ctx = RenderContext {
            buffer: &mut buffer,
            assets: &ctx.assets,
            window_size: ctx.window_size(),
        };
        scene.render(&mut render_ctx);

        assert_eq!(buffer.view.center, scene.view().center);
        assert_eq!(buffer.instance_count(), 1);
        assert!(buffer.texts.iter().any(|t| t.text == "Get ready: 3"));
        assert!(buffer.texts.iter().any(|t| t.text == "Barks: 2"));
        assert!(buffer.texts.iter().any(|t| t.text == "Checkpoints: 0/1 (+5s)"));
    }
}
