//! Page Configuration
//!
//! Optional override in the page head:
//! `<meta name="list-keeper-config" content='{"storage_key":"lists"}'>`

use list_keeper_core::Config;

pub const CONFIG_META_NAME: &str = "list-keeper-config";

/// Config from the page, defaults when absent or unreadable
pub fn load_config() -> Config {
    match read_meta() {
        Some(json) => parse_or_default(&json),
        None => Config::default(),
    }
}

fn read_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", CONFIG_META_NAME);
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content")
}

fn parse_or_default(json: &str) -> Config {
    match Config::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}; using defaults", e);
            Config::default()
        }
    }
}
