//! Dino Run entry point
//!
//! Headless native runner: loads settings and tuning, then lets the
//! autopilot play a few paced sessions against the placeholder sprites.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::sync::Arc;

    use dino_run::audio::{AudioManager, LogBackend};
    use dino_run::game_loop::Autopilot;
    use dino_run::renderer::DrawRecorder;
    use dino_run::settings::DEFAULT_SETTINGS_FILE;
    use dino_run::{FileScoreStore, GameLoop, Settings, SpriteSet, Tuning};

    env_logger::init();
    log::info!("Dino Run (native) starting...");

    let settings = Settings::load(DEFAULT_SETTINGS_FILE);
    // First run: leave an editable copy of the defaults behind
    if !std::path::Path::new(DEFAULT_SETTINGS_FILE).exists() {
        if let Err(e) = settings.save(DEFAULT_SETTINGS_FILE) {
            log::warn!("Could not write {}: {}", DEFAULT_SETTINGS_FILE, e);
        }
    }
    let tuning = match &settings.tuning_path {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let sprites = Arc::new(SpriteSet::placeholder(&tuning));
    let store = FileScoreStore::new(&settings.high_score_path);
    let audio = AudioManager::from_settings(LogBackend, &settings);
    let seed: u64 = rand::random();
    log::info!("Game initialized with seed: {}", seed);

    let mut game = GameLoop::new(tuning, sprites, store, audio, DrawRecorder::new(), seed)?
        .with_frame_limiter(settings.effective_fps());
    let mut pilot = Autopilot::new(settings.demo_sessions);
    let sessions = game.run(&mut pilot);

    log::info!(
        "Played {} session(s), {} frame(s) drawn",
        sessions,
        game.target().frames
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is driven by an embedding page
}
