use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::Level;
use uno_engine::constants::STARTING_HAND_SIZE;

const HAND_SIZE_VAR: &str = "UNO_HAND_SIZE";
const SEED_VAR: &str = "UNO_SEED";
const LOG_VAR: &str = "UNO_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub hand_size: usize,
    pub seed: Option<u64>,
    pub log_level: Level,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let hand_size = match lookup(HAND_SIZE_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .wrap_err_with(|| format!("`{HAND_SIZE_VAR}` must be a whole number, got {raw:?}"))?,
            None => STARTING_HAND_SIZE,
        };
        if hand_size == 0 {
            return Err(eyre!("`{HAND_SIZE_VAR}` must be at least 1"));
        }

        let seed = lookup(SEED_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .wrap_err_with(|| format!("`{SEED_VAR}` must be an unsigned number, got {raw:?}"))
            })
            .transpose()?;

        let log_level = match lookup(LOG_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<Level>()
                .wrap_err_with(|| format!("`{LOG_VAR}` is not a log level, got {raw:?}"))?,
            None => Level::WARN,
        };

        Ok(Self {
            hand_size,
            seed,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(
            settings,
            Settings {
                hand_size: 7,
                seed: None,
                log_level: Level::WARN,
            }
        );
    }

    #[test]
    fn reads_every_variable() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("UNO_HAND_SIZE", "5"),
            ("UNO_SEED", " 42 "),
            ("UNO_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(settings.hand_size, 5);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_zero_hand_size() {
        let error = Settings::from_lookup(lookup_from(&[("UNO_HAND_SIZE", "0")])).unwrap_err();
        assert!(error.to_string().contains("UNO_HAND_SIZE"));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(Settings::from_lookup(lookup_from(&[("UNO_HAND_SIZE", "seven")])).is_err());
        assert!(Settings::from_lookup(lookup_from(&[("UNO_SEED", "-3")])).is_err());
        assert!(Settings::from_lookup(lookup_from(&[("UNO_LOG", "loud")])).is_err());
    }
}
