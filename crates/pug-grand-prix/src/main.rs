//! Headless simulator: runs the game against a scripted window.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use pug_engine::{
    AssetManifest, Assets, EngineContext, FrameClock, GameConfig, GameEngine, HeadlessWindow, ScriptedKey,
};
use pug_grand_prix::{MenuScene, RaceScene, SplashScene};

#[derive(Debug, Parser)]
#[command(name = "pug-grand-prix", about = "Run Pug Grand Prix headless for a fixed number of frames")]
struct Args {
    /// Game config JSON. Relative paths inside it resolve against its directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start straight in this level instead of the splash screen.
    #[arg(long)]
    level: Option<PathBuf>,

    /// Frames to run before the window closes.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// JSON list of `{ "frame", "key", "pressed" }` input events.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Simulation speed multiplier (overrides the config).
    #[arg(long)]
    speed: Option<f32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (mut config, root) = match &args.config {
        Some(path) => {
            let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
            (GameConfig::load(path)?, root)
        }
        None => (GameConfig::default(), PathBuf::new()),
    };
    if let Some(speed) = args.speed {
        config.simulation_speed = speed;
    }
    for level in &mut config.levels {
        level.path = root.join(&level.path).to_string_lossy().into_owned();
    }

    let assets = load_assets(&root.join(&config.assets))?;
    let script: Vec<ScriptedKey> = match &args.script {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => Vec::new(),
    };

    let window = HeadlessWindow::new(config.window.width as f32, config.window.height as f32)
        .with_max_frames(args.frames)
        .with_script(&script);
    let clock = FrameClock::fixed(config.frame_dt());
    let mut engine = GameEngine::new(window, EngineContext::new(config, assets)).with_clock(clock);

    match &args.level {
        Some(level) => {
            let menu = MenuScene::new(engine.context());
            engine.change_scene("MENU", Box::new(menu), false);
            let race = RaceScene::load(engine.context_mut(), level)?;
            engine.change_scene("PLAY", Box::new(race), false);
        }
        None => engine.change_scene("SPLASH", Box::new(SplashScene::new()), false),
    }

    engine.run();

    let window = engine.window();
    log::info!(
        "presented {} frames ({} instance bytes), {} sounds, final scene {:?}",
        window.frames_presented(),
        window.uploaded_bytes(),
        window.sounds().len(),
        engine.current_name()
    );
    Ok(())
}

/// The asset manifest is optional: without one every lookup falls back to defaults.
fn load_assets(manifest: &Path) -> Result<Assets, Box<dyn Error>> {
    if !manifest.exists() {
        log::warn!("no asset manifest at {}, running without assets", manifest.display());
        return Ok(Assets::new());
    }
    let root = manifest.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(Assets::from_manifest(AssetManifest::load(manifest)?, root))
}
