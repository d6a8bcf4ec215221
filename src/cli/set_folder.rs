use std::path::PathBuf;

use anyhow::Result;

use crate::domain::{Destination, DomainName, editor};
use crate::infrastructure::config::ConfigStore;

pub fn execute(store: &ConfigStore, domain: String, folder: PathBuf) -> Result<()> {
    let domain = DomainName::new(&domain)?;

    // Resolve to an absolute path before it reaches the editor
    let destination = Destination::folder(folder)?;

    let mut config = store.ensure_and_load()?;

    if let Some(existing) = config.entries.iter().find(|e| e.source == domain) {
        println!(
            "Replacing existing entry for {}: {}",
            domain, existing.destination
        );
    }

    config.entries = editor::upsert(&config.entries, &domain, destination.clone());
    store.write_config(&config)?;

    println!("Registered: {} => {}", domain, destination);

    Ok(())
}
