use shared::StorageConfig;

pub struct Config;

impl Config {
    /// Prefix the tournament builder uses for its localStorage slots
    pub fn storage_key_prefix() -> String {
        "tournament_builder_".to_string()
    }

    pub fn storage_config() -> StorageConfig {
        StorageConfig {
            key_prefix: Self::storage_key_prefix(),
            ..Default::default()
        }
    }

    pub fn log_level() -> log::Level {
        if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}
