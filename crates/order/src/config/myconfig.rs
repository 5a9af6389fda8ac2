use crate::config::menu::MenuCatalog;
use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

pub const DEFAULT_ORDER_FILE: &str = "order_history.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub order_file: PathBuf,
    pub menu: MenuCatalog,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let order_file = std::env::var("ORDER_QUEUE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ORDER_FILE));

        let menu = match std::env::var("MENU_PRICES") {
            Ok(value) => MenuCatalog::parse(&value).context("Unable to parse MENU_PRICES")?,
            Err(_) => MenuCatalog::default(),
        };

        let dev_mode = parse_flag("DEV_MODE")?;
        let enable_file_log = parse_flag("ENABLE_FILE_LOG")?;

        Ok(Self {
            order_file,
            menu,
            dev_mode,
            enable_file_log,
        })
    }
}

fn parse_flag(name: &str) -> Result<bool> {
    match std::env::var(name) {
        Err(_) => Ok(false),
        Ok(value) => match value.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
        },
    }
}
