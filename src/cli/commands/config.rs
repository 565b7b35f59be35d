use anyhow::Result;
use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::CpfScanConfig;

pub fn execute(cmd: ConfigCommands, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config_path),
    }
}

fn show(config_path: Option<&Path>) -> Result<()> {
    let config = CpfScanConfig::load::<()>(config_path, None)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
