use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};

pub fn execute(mut cmd: Command, shell: Shell) -> Result<()> {
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
