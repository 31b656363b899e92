use crate::error::{PlacesError, Result};
use crate::models::Coordinate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub location: LocationConfig,
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LocationConfig {
    pub use_ip_geolocation: bool, // Look up a live position at startup
    pub lookup_ip: String,        // Address to geolocate; empty means this machine
    pub default_lat: f64,         // Seeded into the store on first run
    pub default_lon: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout_seconds: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub database_path: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub directory: String,
    pub file_name: String, // Rotated daily with a date suffix
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: LocationConfig {
                use_ip_geolocation: false,
                lookup_ip: String::new(),
                default_lat: 14.586716,
                default_lon: 121.062449,
            },
            api: ApiConfig {
                endpoint: "https://places.ls.hereapi.com/places/v1/discover/search".to_string(),
                api_key: String::new(),
                timeout_seconds: 10,
            },
            storage: StorageConfig {
                database_path: "places.db".to_string(),
            },
            logging: LoggingConfig {
                directory: "logs".to_string(),
                file_name: "nearby-places.log".to_string(),
            },
        }
    }
}

impl LocationConfig {
    pub fn default_coordinate(&self) -> Coordinate {
        Coordinate::new(self.default_lat, self.default_lon)
    }
}

impl Config {
    /// Loads the config file at `path`.
    /// A file that doesn't parse falls back to defaults; a missing one is
    /// created with defaults for the user to edit later.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if let Ok(content) = fs::read_to_string(path) {
            match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => {
                    warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    return Self::default();
                }
            }
        }

        let default_config = Self::default();
        if let Err(e) = default_config.save(path) {
            warn!("Could not write default config: {}", e);
        }

        info!("Loaded default configuration.");
        default_config
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).map_err(|e| PlacesError::Config(e.to_string()))?;
        fs::write(path.as_ref(), toml_string)
            .map_err(|e| PlacesError::Config(format!("{}: {}", path.as_ref().display(), e)))
    }
}
