#![allow(non_snake_case)]

use std::env;
use std::sync::Arc;

use wishMaker::clients::calendar_client::LocalCalendarStore;
use wishMaker::config::{AppConfig, resolve_timezone};
use wishMaker::service::calendar::CalendarGateway;
use wishMaker::{cli, runtime};

const DEFAULT_RUN_MODE: &str = "cli";
const DEFAULT_CALENDAR_NAME: &str = "personal";

#[tokio::main]
async fn main() {
    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let get_prop = |key: &str| -> Option<String> {
        config.get(key).or_else(|| env::var(key).ok())
    };

    let tz = resolve_timezone(get_prop("TIMEZONE"));
    let calendar_name =
        get_prop("CALENDAR_NAME").unwrap_or(DEFAULT_CALENDAR_NAME.to_string());
    let store = Arc::new(LocalCalendarStore::new(calendar_name));
    let gateway = CalendarGateway::new(store);

    let run_mode = get_prop("RUN_MODE").unwrap_or(DEFAULT_RUN_MODE.to_string());
    if run_mode == "app" {
        runtime::run_app(&gateway, tz).await;
    } else if run_mode == "cli" {
        cli::cli(&gateway, tz).await;
    } else {
        println!("Invalid run mode {}", run_mode);
    }
}
