/// Native entry point: replay an event script against the viewer engine.
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    let cli = cli::Cli::parse();
    match cli::run(cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("pinview: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::Parser;
    use pinview::{render_records, replay, AppConfig, EventScript, LogLevel, ReplayError};
    use std::path::PathBuf;

    /// Replay pan/zoom/pin input scripts and print what the render surface receives.
    #[derive(Parser, Debug)]
    #[command(name = "pinview", version, about)]
    pub struct Cli {
        /// Event script (JSON)
        pub script: PathBuf,

        /// Image whose dimensions replace the ones named in the script
        #[arg(long)]
        pub image: Option<PathBuf>,

        /// Configuration file (defaults to the user config directory)
        #[arg(long)]
        pub config: Option<PathBuf>,

        /// Log level override: error, warn, info, debug or trace
        #[arg(long)]
        pub log_level: Option<String>,

        /// Print frames as JSON instead of one line per event
        #[arg(long)]
        pub json: bool,

        /// Save the effective configuration to the user config directory
        #[arg(long)]
        pub write_config: bool,
    }

    pub fn run(cli: Cli) -> Result<(), ReplayError> {
        // A broken default config is reported once the logger is running
        let (config, config_problem) = match &cli.config {
            Some(path) => (AppConfig::load(path)?, None),
            None => match AppConfig::load_from_default_path() {
                Ok(config) => (config.unwrap_or_default(), None),
                Err(e) => (AppConfig::default(), Some(e)),
            },
        };

        let level = cli
            .log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or(config.preferences.log_level);
        env_logger::Builder::new()
            .filter_level(level.to_level_filter())
            .parse_default_env()
            .init();
        if let Some(e) = config_problem {
            log::warn!(
                "Failed to load config file {:?}: {}. Using defaults",
                AppConfig::default_path(),
                e
            );
        }
        if let Some(name) = cli.log_level.as_deref().filter(|name| LogLevel::parse(name).is_none()) {
            log::warn!("Unknown log level '{}', using {}", name, level.name());
        }

        if cli.write_config {
            let mut effective = config.clone();
            effective.preferences.log_level = level;
            let path = effective.save_to_default_path()?;
            log::info!("Saved configuration to {:?}", path);
        }

        let script = EventScript::load(&cli.script)?;
        let image = match &cli.image {
            Some(path) => Some(pinview::image_source::probe_dimensions(path)?),
            None => script.resolve_image()?,
        };
        if image.is_none() {
            log::warn!("No image size given, the view uses a 1x1 placeholder");
        }

        let records = replay(&script, image, config.viewer);
        println!("{}", render_records(&records, cli.json)?);
        Ok(())
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
