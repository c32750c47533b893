use std::collections::{HashMap, HashSet};

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::assets::registry::Assets;
use crate::audio::{MusicPlayer, SoundPlayer};
use crate::core::time::{FrameClock, FrameStats};
use crate::error::{EngineError, Result};
use crate::input::queue::{InputEvent, InputQueue, KeyCode};
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::window::Window;
use crate::scene::action::ActionKind;
use crate::scene::scene::Scene;

/// A scene-change request. Scenes cannot reach the engine while it is
/// driving them, so they queue these on the [`EngineContext`] and the engine
/// applies them once the current call returns.
pub enum Transition {
    Change {
        name: String,
        scene: Box<dyn Scene>,
        end_current: bool,
    },
    Quit,
    QuitLevel,
    BackLevel,
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Change { name, end_current, .. } => f
                .debug_struct("Change")
                .field("name", name)
                .field("end_current", end_current)
                .finish_non_exhaustive(),
            Self::Quit => f.write_str("Quit"),
            Self::QuitLevel => f.write_str("QuitLevel"),
            Self::BackLevel => f.write_str("BackLevel"),
        }
    }
}

/// Services shared by every scene, passed into `do_action`, `update` and `on_end`.
pub struct EngineContext {
    pub config: GameConfig,
    pub assets: Assets,
    pub music: MusicPlayer,
    pub sounds: SoundPlayer,
    window_size: Vec2,
    transitions: Vec<Transition>,
}

impl EngineContext {
    pub fn new(config: GameConfig, assets: Assets) -> Self {
        let window_size = Vec2::new(config.window.width as f32, config.window.height as f32);
        Self {
            music: MusicPlayer::new(config.music_volume),
            sounds: SoundPlayer::new(config.sound_volume),
            config,
            assets,
            window_size,
            transitions: Vec::new(),
        }
    }

    pub fn window_size(&self) -> Vec2 {
        self.window_size
    }

    /// Play a sound effect for its manifest duration.
    pub fn play_sound(&mut self, name: &str) {
        let duration = self.assets.sound_duration(name);
        self.sounds.play(name, duration);
    }

    pub fn play_sound_at(&mut self, name: &str, position: Vec2) {
        let duration = self.assets.sound_duration(name);
        self.sounds.play_at(name, position, duration);
    }

    /// Register `scene` under `name` and make it current.
    pub fn change_scene(&mut self, name: impl Into<String>, scene: Box<dyn Scene>, end_current: bool) {
        self.transitions.push(Transition::Change {
            name: name.into(),
            scene,
            end_current,
        });
    }

    pub fn quit(&mut self) {
        self.transitions.push(Transition::Quit);
    }

    pub fn quit_level(&mut self) {
        self.transitions.push(Transition::QuitLevel);
    }

    pub fn back_level(&mut self) {
        self.transitions.push(Transition::BackLevel);
    }

    pub fn has_pending_transitions(&self) -> bool {
        !self.transitions.is_empty()
    }

    fn take_transitions(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.transitions)
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(GameConfig::default(), Assets::new())
    }
}

/// Read-only services plus the frame being built, passed to `Scene::render`.
pub struct RenderContext<'a> {
    pub buffer: &'a mut RenderBuffer,
    pub assets: &'a Assets,
    pub window_size: Vec2,
}

/// Host loop: owns the window and the scenes, and pumps frames.
pub struct GameEngine<W: Window> {
    window: W,
    ctx: EngineContext,
    scenes: HashMap<String, Box<dyn Scene>>,
    current: Option<String>,
    back_stack: Vec<String>,
    input: InputQueue,
    held_keys: HashSet<KeyCode>,
    frame: RenderBuffer,
    clock: FrameClock,
    stats: FrameStats,
    simulation_speed: f32,
    running: bool,
}

impl<W: Window> GameEngine<W> {
    pub fn new(window: W, ctx: EngineContext) -> Self {
        let size = window.size();
        let clock = FrameClock::realtime();
        let simulation_speed = ctx.config.simulation_speed;
        Self {
            window,
            ctx,
            scenes: HashMap::new(),
            current: None,
            back_stack: Vec::new(),
            input: InputQueue::new(),
            held_keys: HashSet::new(),
            frame: RenderBuffer::new(Camera2D::new(size.x, size.y)),
            clock,
            stats: FrameStats::default(),
            simulation_speed,
            running: true,
        }
    }

    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_size(&self) -> Vec2 {
        self.window.size()
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn simulation_speed(&self) -> f32 {
        self.simulation_speed
    }

    pub fn set_simulation_speed(&mut self, speed: f32) {
        self.simulation_speed = speed.max(0.0);
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_scene(&self) -> Option<&dyn Scene> {
        let name = self.current.as_ref()?;
        self.scenes.get(name).map(|s| s.as_ref())
    }

    pub fn current_scene_mut(&mut self) -> Option<&mut (dyn Scene + 'static)> {
        let name = self.current.as_ref()?;
        self.scenes.get_mut(name).map(|s| s.as_mut())
    }

    pub fn has_scene(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    /// Names that `back_level` would return to, oldest first.
    pub fn back_stack(&self) -> &[String] {
        &self.back_stack
    }

    pub fn is_running(&self) -> bool {
        self.running && self.window.is_open()
    }

    /// Register `scene` under `name` and make it current.
    ///
    /// With `end_current` the current scene's `on_end` fires first and it is
    /// dropped; otherwise it stays registered and goes on the back stack.
    pub fn change_scene(&mut self, name: impl Into<String>, scene: Box<dyn Scene>, end_current: bool) {
        let name = name.into();
        if let Some(current) = self.current.take() {
            if current != name {
                if end_current {
                    self.end_scene(&current);
                } else {
                    self.back_stack.push(current);
                }
            }
        }
        self.back_stack.retain(|n| n != &name);

        if self.scenes.contains_key(&name) {
            self.end_scene(&name);
        }
        log::info!("scene -> {} ({})", name, scene.name());
        self.scenes.insert(name.clone(), scene);
        self.current = Some(name);
    }

    /// Make an already registered scene current without ending anything.
    pub fn switch_to(&mut self, name: &str) -> Result<()> {
        if !self.scenes.contains_key(name) {
            return Err(EngineError::UnknownScene(name.to_string()));
        }
        self.current = Some(name.to_string());
        log::info!("scene -> {}", name);
        Ok(())
    }

    /// End every scene and stop the loop.
    pub fn quit(&mut self) {
        log::info!("quitting");
        let names: Vec<String> = self.scenes.keys().cloned().collect();
        for name in names {
            self.end_scene(&name);
        }
        self.current = None;
        self.back_stack.clear();
        self.running = false;
        self.window.close();
    }

    /// End the current scene and return to the root of the back stack.
    pub fn quit_level(&mut self) {
        if let Some(current) = self.current.take() {
            self.end_scene(&current);
        }
        let root = if self.back_stack.is_empty() {
            None
        } else {
            Some(self.back_stack.remove(0))
        };
        for name in std::mem::take(&mut self.back_stack) {
            self.end_scene(&name);
        }
        self.return_to(root);
    }

    /// End the current scene and pop to the previous one.
    pub fn back_level(&mut self) {
        if let Some(current) = self.current.take() {
            self.end_scene(&current);
        }
        let previous = self.back_stack.pop();
        self.return_to(previous);
    }

    fn return_to(&mut self, target: Option<String>) {
        match target {
            Some(name) => {
                if let Err(err) = self.switch_to(&name) {
                    log::warn!("{}; quitting", err);
                    self.quit();
                }
            }
            None => self.quit(),
        }
    }

    fn end_scene(&mut self, name: &str) {
        if let Some(mut scene) = self.scenes.remove(name) {
            if !scene.base().is_ended() {
                log::debug!("ending scene {}", name);
                scene.on_end(&mut self.ctx);
                scene.base_mut().mark_ended();
            }
        }
    }

    fn apply_transitions(&mut self) {
        // on_end hooks may queue further transitions; drain until quiet.
        loop {
            let transitions = self.ctx.take_transitions();
            if transitions.is_empty() {
                break;
            }
            for transition in transitions {
                log::debug!("applying {:?}", transition);
                match transition {
                    Transition::Change {
                        name,
                        scene,
                        end_current,
                    } => self.change_scene(name, scene, end_current),
                    Transition::Quit => self.quit(),
                    Transition::QuitLevel => self.quit_level(),
                    Transition::BackLevel => self.back_level(),
                }
                if !self.running {
                    return;
                }
            }
        }
    }

    /// Run frames until the window closes or a scene quits.
    pub fn run(&mut self) {
        log::info!("running on {} backend", self.window.backend());
        while self.is_running() {
            self.step();
        }
        log::info!("stopped after {} frames", self.stats.total_frames());
    }

    /// One frame: input, update, render, present.
    pub fn step(&mut self) {
        self.process_input();
        if !self.running {
            return;
        }

        let frame_time = self.clock.tick();
        self.stats.record(frame_time);
        let dt = frame_time * self.simulation_speed;

        if let Some(name) = self.current.clone() {
            if let Some(scene) = self.scenes.get_mut(&name) {
                if !scene.base().is_ended() {
                    scene.base_mut().activate();
                    scene.update(&mut self.ctx, dt);
                }
            }
            self.apply_transitions();
            if !self.running {
                return;
            }
        }

        self.ctx.sounds.advance(dt);
        self.ctx.sounds.remove_stopped_sounds();

        self.render();
    }

    fn process_input(&mut self) {
        self.window.poll_events(&mut self.input);
        for event in self.input.drain() {
            let (key, kind) = match event {
                InputEvent::Closed => {
                    self.quit();
                    return;
                }
                InputEvent::Resized { width, height } => {
                    self.ctx.window_size = Vec2::new(width, height);
                    continue;
                }
                InputEvent::KeyDown { key } => {
                    // Ignore OS key repeat: one START per physical press.
                    if !self.held_keys.insert(key) {
                        continue;
                    }
                    (key, ActionKind::Start)
                }
                InputEvent::KeyUp { key } => {
                    self.held_keys.remove(&key);
                    (key, ActionKind::End)
                }
            };

            let Some(name) = self.current.clone() else {
                continue;
            };
            if let Some(scene) = self.scenes.get_mut(&name) {
                if scene.base().is_ended() {
                    continue;
                }
                if let Some(command) = scene.base().actions.translate(key, kind) {
                    log::trace!("{} -> {}", name, command);
                    scene.do_action(&mut self.ctx, &command);
                }
            }
            self.apply_transitions();
            if !self.running {
                return;
            }
        }
    }

    fn render(&mut self) {
        let size = self.ctx.window_size;
        self.frame.clear();
        self.frame.view = Camera2D::new(size.x, size.y);

        if let Some(scene) = self.current.as_ref().and_then(|name| self.scenes.get(name)) {
            if !scene.base().is_ended() {
                let mut render_ctx = RenderContext {
                    buffer: &mut self.frame,
                    assets: &self.ctx.assets,
                    window_size: size,
                };
                scene.render(&mut render_ctx);
            }
        }
        self.frame.finish();

        let sounds = self.ctx.sounds.drain();
        let music = self.ctx.music.drain();
        self.window.play_audio(&sounds, &music);

        self.window.clear(self.frame.clear_color);
        self.window.present(&self.frame);
    }
}
