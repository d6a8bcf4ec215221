use anyhow::Result;

use crate::infrastructure::config::{ConfigStore, canonical_json};

pub fn execute(store: &ConfigStore) -> Result<()> {
    let location = store.resolve_path();
    if !location.exists {
        println!("No config file at {}", location.file.display());
        println!("\nCreate one with: waypost init");
        return Ok(());
    }

    let config = store.ensure_and_load()?;
    println!("Found config {}:\n", location.file.display());
    println!("{}", canonical_json(&config)?);

    Ok(())
}
