use anyhow::Result;

use crate::domain::{DomainName, editor};
use crate::infrastructure::config::ConfigStore;

pub fn execute(store: &ConfigStore, domain: String) -> Result<()> {
    let domain = DomainName::new(&domain)?;

    let mut config = store.ensure_and_load()?;
    let had_entry = config.entries.iter().any(|e| e.source == domain);

    // Removing an absent domain is a no-op, but the result is still
    // persisted like any other mutation.
    config.entries = editor::remove(&config.entries, &domain);
    store.write_config(&config)?;

    if had_entry {
        println!("Removed mapping for {}", domain);
    } else {
        println!("No mapping for {} (nothing to remove)", domain);
    }

    Ok(())
}
