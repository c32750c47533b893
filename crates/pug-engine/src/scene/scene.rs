use crate::api::engine::{EngineContext, RenderContext};
use crate::core::entity_manager::EntityManager;
use crate::input::queue::KeyCode;
use crate::scene::action::{ActionMap, Command};

/// Where a scene is in its life.
///
/// `Created -> Active <-> Paused -> Ended`. Active and Paused scenes both
/// render and receive input; only gameplay differs. Ended is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneLifecycle {
    #[default]
    Created,
    Active,
    Paused,
    Ended,
}

/// State every scene carries: its entities, its key bindings and its lifecycle.
#[derive(Debug, Default)]
pub struct SceneBase {
    pub entities: EntityManager,
    pub actions: ActionMap,
    lifecycle: SceneLifecycle,
}

impl SceneBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lifecycle(&self) -> SceneLifecycle {
        self.lifecycle
    }

    pub fn is_paused(&self) -> bool {
        self.lifecycle == SceneLifecycle::Paused
    }

    pub fn is_ended(&self) -> bool {
        self.lifecycle == SceneLifecycle::Ended
    }

    /// Created -> Active. No effect in any other state.
    pub fn activate(&mut self) {
        if self.lifecycle == SceneLifecycle::Created {
            self.lifecycle = SceneLifecycle::Active;
        }
    }

    /// Toggle between Active and Paused. Ended scenes stay ended.
    pub fn set_paused(&mut self, paused: bool) {
        if self.lifecycle == SceneLifecycle::Ended {
            return;
        }
        self.lifecycle = if paused {
            SceneLifecycle::Paused
        } else {
            SceneLifecycle::Active
        };
    }

    pub fn mark_ended(&mut self) {
        self.lifecycle = SceneLifecycle::Ended;
    }
}

/// One screen of the application: a race level, the menu or the splash.
///
/// The host loop calls `do_action` once per bound key transition, then
/// `update`, then `render`, every frame, until the scene is ended.
pub trait Scene {
    /// Short name for logs.
    fn name(&self) -> &str;

    fn base(&self) -> &SceneBase;
    fn base_mut(&mut self) -> &mut SceneBase;

    /// Interpret a logical action.
    fn do_action(&mut self, ctx: &mut EngineContext, command: &Command);

    /// Advance one simulation step of `dt` seconds.
    fn update(&mut self, ctx: &mut EngineContext, dt: f32);

    /// Draw the current state into the frame.
    fn render(&self, ctx: &mut RenderContext);

    /// Cleanup hook, called when the scene is replaced or popped.
    fn on_end(&mut self, _ctx: &mut EngineContext) {}

    fn register_action(&mut self, key: KeyCode, action: &str) {
        self.base_mut().actions.register(key, action);
    }

    fn set_paused(&mut self, paused: bool) {
        self.base_mut().set_paused(paused);
    }

    fn is_paused(&self) -> bool {
        self.base().is_paused()
    }

    fn entities(&self) -> &EntityManager {
        &self.base().entities
    }
}
