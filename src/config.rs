//! Configuration management


use std::env::{self, VarError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::trace;
use serde::Deserialize;

use crate::error::Result;


const DEFAULT_BACKEND: &str = "http://127.0.0.1:8000";
const DEFAULT_LISTEN: &str = "127.0.0.1:9351";


fn default_backend() -> String {
    DEFAULT_BACKEND.into()
}

fn default_listen() -> String {
    DEFAULT_LISTEN.into()
}


/// Settings needed to run the portal
#[derive(Debug, PartialEq)]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {

    /// Base URL of the camera API backend
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Address on which the portal listens for HTTP requests
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Directory of HTML templates, replacing the built-in ones
    #[serde(default)]
    pub template_path: Option<String>,

    /// Directory of static web content (e.g. stylesheets) served under */static*
    #[serde(default)]
    pub static_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            listen: default_listen(),
            template_path: None,
            static_path: None,
        }
    }
}

impl Settings {

    /// Loads settings from the specified JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads settings from the environment
    ///
    /// | Variable            | Setting        |
    /// |---------------------|----------------|
    /// | `CAMLIST_BACKEND`   | `backend`      |
    /// | `CAMLIST_LISTEN`    | `listen`       |
    /// | `CAMLIST_TEMPLATES` | `templatePath` |
    /// | `CAMLIST_STATIC`    | `staticPath`   |
    pub fn from_env() -> Result<Settings> {
        Ok(Settings {
            backend: var("CAMLIST_BACKEND")?.unwrap_or_else(default_backend),
            listen: var("CAMLIST_LISTEN")?.unwrap_or_else(default_listen),
            template_path: var("CAMLIST_TEMPLATES")?,
            static_path: var("CAMLIST_STATIC")?,
        })
    }
}


/// Reads an environment variable, treating absence as `None`
fn var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => {
            trace!("{} is set", name);
            Ok(Some(value))
        },
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}


#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.backend, "http://127.0.0.1:8000");
        assert_eq!(settings.listen, "127.0.0.1:9351");
    }

    #[test]
    fn fields_are_camel_case() {
        let settings: Settings = serde_json::from_str(r#"{
            "backend": "http://pi.local:8000",
            "templatePath": "/usr/share/camlist/templates",
            "staticPath": "/usr/share/camlist/static"
        }"#).unwrap();

        assert_eq!(settings.backend, "http://pi.local:8000");
        assert_eq!(settings.listen, DEFAULT_LISTEN);
        assert_eq!(settings.template_path.as_deref(), Some("/usr/share/camlist/templates"));
        assert_eq!(settings.static_path.as_deref(), Some("/usr/share/camlist/static"));
    }

    #[test]
    fn load_reads_file() {
        let path = env::temp_dir().join(format!("camlist-settings-{}.json", std::process::id()));
        fs::write(&path, r#"{"listen": "0.0.0.0:8080"}"#).unwrap();

        let settings = Settings::load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(settings.unwrap().listen, "0.0.0.0:8080");
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(Settings::load("/nonexistent/camlist.json").is_err());
    }

    #[test]
    fn unset_variable_is_none() {
        assert_eq!(var("CAMLIST_TEST_SURELY_UNSET").unwrap(), None);
    }

    #[test]
    fn set_variable_is_read() {
        env::set_var("CAMLIST_TEST_VAR_IS_READ", "value");
        assert_eq!(var("CAMLIST_TEST_VAR_IS_READ").unwrap().as_deref(), Some("value"));
    }
}
