use pug_engine::{
    EngineContext, FrameClock, GameConfig, GameEngine, HeadlessWindow, InputEvent, KeyCode, LevelEntry, Window,
};
use pug_grand_prix::SplashScene;

fn level_file(name: &str) -> String {
    let path = std::env::temp_dir().join(format!("pug-grand-prix-{}-{}.txt", name, std::process::id()));
    std::fs::write(&path, "World 1280 3072\nPlayerSpeed 180\nMusic ignored\n").unwrap();
    path.to_string_lossy().into_owned()
}

fn tap(window: &mut HeadlessWindow, frame: u64, key: KeyCode) {
    window.schedule(frame, InputEvent::KeyDown { key });
    window.schedule(frame + 1, InputEvent::KeyUp { key });
}

fn engine(window: HeadlessWindow, levels: Vec<LevelEntry>) -> GameEngine<HeadlessWindow> {
    let config = GameConfig {
        levels,
        ..GameConfig::default()
    };
    let ctx = EngineContext::new(config, Default::default());
    let mut engine = GameEngine::new(window, ctx).with_clock(FrameClock::fixed(1.0 / 60.0));
    engine.change_scene("SPLASH", Box::new(SplashScene::new()), false);
    engine
}

fn steps(engine: &mut GameEngine<HeadlessWindow>, n: usize) {
    for _ in 0..n {
        engine.step();
    }
}

#[test]
fn splash_menu_race_and_back() {
    let levels = vec![LevelEntry {
        name: "Park".into(),
        path: level_file("nav"),
    }];
    let mut window = HeadlessWindow::new(1280.0, 768.0);
    tap(&mut window, 30, KeyCode::Space); // too early, ignored
    tap(&mut window, 70, KeyCode::Space);
    tap(&mut window, 80, KeyCode::D);
    tap(&mut window, 90, KeyCode::Escape);
    tap(&mut window, 100, KeyCode::Escape);
    let mut engine = engine(window, levels);

    steps(&mut engine, 70);
    assert_eq!(engine.current_name(), Some("SPLASH"));

    steps(&mut engine, 2);
    assert_eq!(engine.current_name(), Some("MENU"));
    assert!(!engine.has_scene("SPLASH"), "splash ends itself");

    steps(&mut engine, 10);
    assert_eq!(engine.current_name(), Some("PLAY"));
    assert_eq!(engine.back_stack(), ["MENU".to_string()]);

    // Escape in the race goes back to the retained menu.
    steps(&mut engine, 10);
    assert_eq!(engine.current_name(), Some("MENU"));
    assert!(!engine.has_scene("PLAY"));

    // Escape in the menu quits.
    steps(&mut engine, 10);
    assert!(!engine.is_running());
    assert!(!engine.window().is_open());
}

#[test]
fn quit_from_race_returns_to_menu() {
    let levels = vec![LevelEntry {
        name: "Park".into(),
        path: level_file("quit"),
    }];
    let mut window = HeadlessWindow::new(1280.0, 768.0);
    tap(&mut window, 70, KeyCode::Return);
    tap(&mut window, 75, KeyCode::D);
    tap(&mut window, 80, KeyCode::Q);
    let mut engine = engine(window, levels);

    steps(&mut engine, 78);
    assert_eq!(engine.current_name(), Some("PLAY"));
    steps(&mut engine, 4);
    assert_eq!(engine.current_name(), Some("MENU"));
    assert!(engine.back_stack().is_empty());
}
