use crate::commands::{CmdMessage, CmdResult};
use crate::config::NotezConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or writes `config.json` under `dir`. Unknown keys and invalid values
/// come back as error messages; nothing is written for them.
pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = NotezConfig::load(dir)?;
    let message = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => CmdMessage::info(value),
            None => CmdMessage::error(format!("Unknown config key: {}", key)),
        },
        ConfigAction::Set(key, value) => {
            if let Err(reason) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(reason)));
            }
            config.save(dir)?;
            // Show the normalized form (`seq` is stored as `sequential`)
            let stored = config.get(&key).unwrap_or(value);
            return Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!("{} set to {}", key, stored)))
                .with_config(config));
        }
    };
    Ok(CmdResult::default().with_message(message))
}
