use anyhow::Result;

use crate::infrastructure::config::ConfigStore;

pub fn execute(store: &ConfigStore) -> Result<()> {
    let location = store.resolve_path();
    if location.exists {
        println!("Found config file: {}", location.file.display());
        return Ok(());
    }

    store.ensure()?;
    println!("Created config file: {}", location.file.display());

    Ok(())
}
