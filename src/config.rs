use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub application: Application,
    pub upstream: Upstream,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Application {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

impl Default for Application {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".into(),
        }
    }
}

impl Application {
    pub fn get_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where manga metadata and cover images are fetched from.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Upstream {
    pub api_url: String,
    pub uploads_url: String,
    pub user_agent: String,
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            api_url: "https://api.mangadex.org".into(),
            uploads_url: "https://uploads.mangadex.org".into(),
            user_agent: "Yomikata/0.1.0".into(),
        }
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine the current directory")]
    CurrentDir(#[from] std::io::Error),
    #[error("Failed to parse APP_ENVIRONMENT: {0}")]
    Environment(String),
    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(ConfigError::Environment)?;

        let config_directory = std::env::current_dir()?.join("configuration");
        let environment_filename = format!("{}.yaml", environment.as_str());

        Self::figment()
            .merge(Yaml::file(config_directory.join("base.yaml")))
            .merge(Yaml::file(config_directory.join(environment_filename)))
            .merge(Env::prefixed("APP_").split("__"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "application.port".into()))
            .extract()
            .map_err(|e| ConfigError::Figment(Box::new(e)))
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
    }
}
