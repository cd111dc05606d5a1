use chrono::Utc;
use directories::ProjectDirs;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyModifiers};
use recipe_wizard::app::App;
use recipe_wizard::{logging, Config};
use std::path::PathBuf;
use std::time::Duration;

fn get_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "recipe-wizard", "recipe-wizard") {
        proj_dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config/default.toml")
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config_path = get_config_path();
    let (config, config_error) = Config::load_or_default(&config_path);

    match logging::init(&config.logging) {
        Ok(path) => tracing::info!(
            log = %path.display(),
            config = %config_path.display(),
            "starting recipe-wizard"
        ),
        Err(e) => eprintln!("Failed to initialize logging: {}", e),
    }

    if let Some(e) = config_error {
        tracing::warn!(
            config = %config_path.display(),
            "Invalid config, using defaults: {:#}",
            e
        );
    }

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, App::new(config));
    ratatui::restore();

    result
}

fn run(
    terminal: &mut ratatui::DefaultTerminal,
    mut app: App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;

            if let Event::Key(key) = &event {
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
            }

            match app.handle_event(event) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => tracing::warn!("Failed to handle event: {}", e),
            }
        }

        app.expire_notices(Utc::now());

        if app.should_quit {
            break;
        }
    }

    tracing::info!("exiting recipe-wizard");
    Ok(())
}
