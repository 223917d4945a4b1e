use std::collections::HashMap;
use std::fs;

#[derive(Debug)]
pub struct Settings {
    pub nudge_delay_ms: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nudge_delay_ms: 4000,
            log_filter: "info".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("inspector.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("nudge_delay_ms") {
                if let Ok(ms) = v.parse() {
                    settings.nudge_delay_ms = ms;
                }
            }
            if let Some(v) = file_cfg.get("log_filter") {
                settings.log_filter = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("NUDGE_DELAY_MS") {
        if let Ok(ms) = v.parse() {
            settings.nudge_delay_ms = ms;
        }
    }
    if let Ok(v) = std::env::var("APP__NUDGE_DELAY_MS") {
        if let Ok(ms) = v.parse() {
            settings.nudge_delay_ms = ms;
        }
    }
    if let Ok(v) = std::env::var("LOG_FILTER") {
        settings.log_filter = v;
    }

    settings
}
