use config::ConfigError;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use std::convert::TryInto;
use std::env;
use std::path::{Path, PathBuf};

const LOCAL_DIRECTORY: &str = "configuration";

/// Directory holding `base.yaml` and the per-environment overrides.
///
/// `CONFIG_PATH` wins, then `./configuration` if it exists, then the user
/// configuration directory.
pub fn configuration_directory(app_name: &str) -> PathBuf {
    resolve_configuration_directory(
        env::var("CONFIG_PATH").ok(),
        Path::new(LOCAL_DIRECTORY),
        ProjectDirs::from("", "", app_name).map(|dirs| dirs.config_dir().to_path_buf()),
    )
}

fn resolve_configuration_directory(
    config_path: Option<String>,
    local: &Path,
    user: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = config_path {
        return PathBuf::from(path);
    }
    if local.is_dir() {
        return local.to_path_buf();
    }
    user.unwrap_or_else(|| local.to_path_buf())
}

/// Load settings for `app_name`. Every file source is optional, so `T`
/// must provide defaults for keys no source sets.
pub fn get_configuration<T: DeserializeOwned + std::fmt::Display>(
    app_name: &str,
) -> Result<T, ConfigError> {
    let configuration_directory = configuration_directory(app_name);

    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        // APP_QSTAT__COMMAND=/opt/pbs/bin/qstat sets qstat.command
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<T>()
}

pub enum Environment {
    Local,
    Production,
    CI,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
            Environment::CI => "ci",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    /// Case insensitive; only "local", "ci" and "production" are accepted.
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            "ci" => Ok(Self::CI),
            other => Err(format!(
                "{} is not a supported environment. Use either `local`, `ci` or `production`.",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_overrides_everything() {
        let local = tempfile::tempdir().unwrap();
        let dir = resolve_configuration_directory(
            Some("/etc/jobinfo".into()),
            local.path(),
            Some(PathBuf::from("/home/dj/.config/jobinfo")),
        );
        assert_eq!(dir, PathBuf::from("/etc/jobinfo"));
    }

    #[test]
    fn local_directory_beats_user_directory() {
        let local = tempfile::tempdir().unwrap();
        let dir = resolve_configuration_directory(
            None,
            local.path(),
            Some(PathBuf::from("/home/dj/.config/jobinfo")),
        );
        assert_eq!(dir, local.path());
    }

    #[test]
    fn user_directory_when_no_local_one() {
        let local = tempfile::tempdir().unwrap();
        let missing = local.path().join("configuration");
        let user = PathBuf::from("/home/dj/.config/jobinfo");
        assert_eq!(
            resolve_configuration_directory(None, &missing, Some(user.clone())),
            user
        );
        assert_eq!(resolve_configuration_directory(None, &missing, None), missing);
    }

    #[test]
    fn environment_names_are_case_insensitive() {
        let env: Environment = "Production".to_string().try_into().unwrap();
        assert_eq!(env.as_str(), "production");
        let env: Environment = "CI".to_string().try_into().unwrap();
        assert_eq!(env.as_str(), "ci");
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = Environment::try_from("staging".to_string()).err().unwrap();
        assert!(err.contains("staging is not a supported environment"));
    }
}
