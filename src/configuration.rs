use std::path::PathBuf;
use std::time::Duration;

use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub source: SourceSettings,
    pub output: OutputSettings,
    pub schedule: ScheduleSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct SourceSettings {
    pub page_url: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct OutputSettings {
    pub directory: PathBuf,
    pub file_name: String,
    pub log_file: PathBuf,
}

#[derive(serde::Deserialize, Clone)]
pub struct ScheduleSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub interval_hours: u64,
}

impl ScheduleSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_hours * 60 * 60)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::new(
            "configuration.yaml",
            config::FileFormat::Yaml,
        ))
        .build()?;

    settings.try_deserialize::<Settings>()
}
