use anyhow::Result;

use crate::domain::{DomainName, Port, editor};
use crate::infrastructure::config::ConfigStore;

pub fn execute(store: &ConfigStore, domain: String, port: u16) -> Result<()> {
    let domain = DomainName::new(&domain)?;
    let port = Port::new(port)?;
    let dest = format!("localhost:{}", port);

    let mut config = store.ensure_and_load()?;

    if let Some(existing) = config.entries.iter().find(|e| e.source == domain) {
        println!(
            "Replacing existing entry for {}: {}",
            domain, existing.destination
        );
    }

    config.entries = editor::upsert_host(&config.entries, &domain, &dest);
    store.write_config(&config)?;

    println!("Registered: {} => {}", domain, dest);

    Ok(())
}
