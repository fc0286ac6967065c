//! Build script for lastfm-sync.
//!
//! Copies the `.env.example` template into the user's local data directory,
//! next to where `config::load_env` looks for the real `.env` file:
//! - Linux: `~/.local/share/lastfm-sync/.env.example`
//! - macOS: `~/Library/Application Support/lastfm-sync/.env.example`
//! - Windows: `%LOCALAPPDATA%/lastfm-sync/.env.example`
//!
//! A missing template or data directory only produces a cargo warning and
//! leaves the file system untouched.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let template = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?).join(".env.example");
    if !template.is_file() {
        println!("cargo:warning=.env.example not found at {}", template.display());
        return Ok(());
    }

    let Some(data_dir) = dirs::data_local_dir() else {
        println!("cargo:warning=no local data directory, skipping .env.example");
        return Ok(());
    };

    let target_dir = data_dir.join("lastfm-sync");
    fs::create_dir_all(&target_dir)?;
    fs::copy(&template, target_dir.join(".env.example"))?;

    Ok(())
}
