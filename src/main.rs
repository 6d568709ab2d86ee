// SPDX-License-Identifier: MPL-2.0
//! `vidlens` probe: loads a video into a headless player store and prints
//! the information panel and the saved playback preferences.

use std::process::ExitCode;
use std::rc::Rc;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidlens::application::port::PreferenceStore;
use vidlens::infrastructure::{
    LocalResourceRegistry, MediaInfoCli, MemoryPreferenceStore, TomlPreferenceStore,
};
use vidlens::media::{self, format_file_size, format_rate, info_lines};
use vidlens::player::{MetadataWorker, PlayerStore};
use vidlens::{config, paths};

const USAGE: &str = "usage: vidlens [--config-dir DIR] FILE";

#[tokio::main]
async fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(error) => {
            eprintln!("{error}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    let file_path = args.finish().into_iter().next();

    paths::init_cli_override(config_dir);
    let (config, config_warning) = config::load();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(key) = config_warning {
        tracing::warn!(%key, "using default configuration");
    }

    let Some(file_path) = file_path else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let file = match media::open_file(&file_path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let preferences: Box<dyn PreferenceStore> = match TomlPreferenceStore::open_default() {
        Ok(store) => Box::new(store),
        Err(error) => {
            tracing::warn!(%error, "preferences unavailable, using in-memory defaults");
            Box::new(MemoryPreferenceStore::new())
        }
    };

    let mut store = PlayerStore::new(preferences, Rc::new(LocalResourceRegistry::new()))
        .with_controls_config(&config.controls);
    if config.metadata.enabled {
        let analyzer = MediaInfoCli::new(config.metadata.mediainfo_path.clone());
        store = store.with_metadata_worker(MetadataWorker::spawn(Arc::new(analyzer)));
    }

    if let Err(error) = store.load_file(file) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }
    store.settle_metadata().await;

    if let Some(title) = store.media_title() {
        println!("{title}");
    }
    match store.overlay_metadata() {
        Some(record) => {
            for line in info_lines(&record) {
                println!("  {:<16}{}", line.label, line.value);
            }
        }
        None => {
            if let Some(file) = store.media_file() {
                println!("  {:<16}{}", "File Size", format_file_size(file.size()));
            }
            println!("  no metadata available");
        }
    }

    let state = store.snapshot();
    println!();
    println!("Preferences");
    println!("  {:<16}{:.0}%", "Volume", state.volume.value() * 100.0);
    println!("  {:<16}{}", "Muted", state.is_muted);
    println!("  {:<16}{}", "Speed", format_rate(state.playback_rate.value()));
    println!("  {:<16}{}", "Loop", state.loop_enabled);

    ExitCode::SUCCESS
}
