use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq, ::thiserror::Error)]
pub enum ConfigError {
    #[error("`{key}` has invalid value `{value}`")]
    InvalidValue { key: &'static str, value: String },
}

/// настройки сервера, читаются из переменных окружения (и `.env`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub port: u16,
    pub workers: usize,
    pub static_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: String::from("0.0.0.0"),
            port: 8000,
            workers: 2,
            static_dir: PathBuf::from("./static/"),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        for (k, v) in vars {
            match k.as_str() {
                "BIND_ADDR" => settings.bind_addr = v,
                "PORT" => settings.port = parse("PORT", v)?,
                "WORKERS" => settings.workers = parse("WORKERS", v)?,
                "STATIC_DIR" => settings.static_dir = PathBuf::from(v),
                _ => {}
            }
        }

        if settings.workers == 0 {
            return Err(ConfigError::InvalidValue {
                key: "WORKERS",
                value: String::from("0"),
            });
        }

        Ok(settings)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
