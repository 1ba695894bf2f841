use chrono::Local;
use log::LevelFilter;
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

const LEVEL_VAR: &str = "IBAN_LOG_LEVEL";
const DIR_VAR: &str = "IBAN_LOG_DIR";

/// Logger settings taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub dir: Option<PathBuf>,
}

impl LogConfig {
    /// `IBAN_LOG_LEVEL` (falling back to `RUST_LOG`) and `IBAN_LOG_DIR`.
    pub fn from_env() -> Self {
        let level = std::env::var(LEVEL_VAR)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();
        Self::from_values(level.as_deref(), std::env::var(DIR_VAR).ok().as_deref())
    }

    fn from_values(level: Option<&str>, dir: Option<&str>) -> Self {
        let level = level
            .and_then(|value| value.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);
        let dir = match dir.map(str::trim) {
            Some("off") | Some("none") | Some("") => None,
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from("logs")),
        };
        Self { level, dir }
    }
}

pub fn init_logging(app_name: &str, config: &LogConfig) -> Result<(), String> {
    let mut init_result: Result<(), String> = Ok(());
    INIT.call_once(|| {
        if let Err(err) = install(app_name, config) {
            init_result = Err(err);
        }
    });
    init_result
}

fn install(app_name: &str, config: &LogConfig) -> Result<(), String> {
    let mut dispatch = fern::Dispatch::new()
        .level(config.level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stdout());

    if let Some(dir) = &config.dir {
        std::fs::create_dir_all(dir).map_err(|err| err.to_string())?;
        let file_path = dir.join(format!("{app_name}-{}.log", Local::now().format("%Y_%m_%d")));
        dispatch = dispatch.chain(fern::log_file(file_path).map_err(|err| err.to_string())?);
    }

    dispatch.apply().map_err(|err| err.to_string())
}
