use anyhow::Result;

use crate::infrastructure::config::ConfigStore;

pub fn execute(store: &ConfigStore) -> Result<()> {
    let config = store.ensure_and_load()?;

    if config.entries.is_empty() {
        println!("No domains mapped.");
        println!("\nMap a domain with:");
        println!("  waypost set-host myapp.test 3000");
        println!("  waypost set-folder myapp.test ./public");
        return Ok(());
    }

    println!("Mapped domains:\n");
    for entry in &config.entries {
        println!("  {:<24} -> {}", entry.source.to_string(), entry.destination);
    }

    Ok(())
}
