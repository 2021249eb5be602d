use crate::commands::{CmdMessage, CmdResult};
use crate::config::CatalogConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates the config stored in `dir`. Returns the (possibly
/// updated) config alongside the result so callers can keep using it.
pub fn run(dir: &Path, action: ConfigAction) -> Result<(CatalogConfig, CmdResult)> {
    let mut config = CatalogConfig::load(dir)?;
    match action {
        ConfigAction::ShowAll => {
            let settings = CatalogConfig::keys()
                .iter()
                .map(|key| config.get(key).map(|val| (key.to_string(), val)))
                .collect::<Result<Vec<_>>>()?;
            Ok((config, CmdResult::default().with_settings(settings)))
        }
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Ok(val) => result.settings.push((key, val)),
                Err(e) => result.add_message(CmdMessage::error(e.to_string())),
            }
            Ok((config, result))
        }
        ConfigAction::Set(key, value) => {
            let mut result = CmdResult::default();
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok((config, result));
            }
            config.save(dir)?;
            let display_val = config.get(&key)?;
            tracing::info!(%key, value = %display_val, "config updated");
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok((config, result))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::SalesDispatch;

    #[test]
    fn show_all_lists_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let (_, result) = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(
            result.settings,
            vec![
                ("sales-dispatch".to_string(), "literal".to_string()),
                ("senior-cutoff".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn set_persists_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let (config, result) = run(
            dir.path(),
            ConfigAction::Set("sales-dispatch".into(), "comparison".into()),
        )
        .unwrap();
        assert_eq!(config.sales_dispatch, SalesDispatch::Comparison);
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let (_, shown) = run(dir.path(), ConfigAction::ShowKey("sales-dispatch".into())).unwrap();
        assert_eq!(shown.settings[0].1, "comparison");
    }

    #[test]
    fn invalid_set_is_reported_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let (_, result) = run(
            dir.path(),
            ConfigAction::Set("senior-cutoff".into(), "lots".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let (_, result) = run(dir.path(), ConfigAction::ShowKey("theme".into())).unwrap();
        assert!(result.settings.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
