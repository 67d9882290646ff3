use crate::{
    env::{ProcessEnv, ReadEnv},
    env_flags::EnvBool,
};
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::env::VarError;

pub const ENV_CHECK_UPDATES: &str = "MPW_CHECKUPDATES";
pub const ENV_FULL_NAME: &str = "MPW_FULLNAME";
pub const ENV_ALGORITHM: &str = "MPW_ALGORITHM";
pub const ENV_FORMAT: &str = "MPW_FORMAT";

pub const DEFAULT_CHECK_FOR_UPDATES: bool = true;

static INSTANCE: Lazy<Config> = Lazy::new(Config::from_env);

/// Application settings sourced from the environment.
///
/// Holds no values of its own: every accessor reads its variable again, so
/// changes to the environment are visible on the next call. Build one at
/// startup with [`Config::from_env`] and pass it by reference, or use
/// [`Config::get`] for the shared process-wide instance.
#[derive(Clone, Debug, Default)]
pub struct Config<E = ProcessEnv> {
    env: E,
}

impl Config<ProcessEnv> {
    pub fn get() -> &'static Config {
        &INSTANCE
    }

    pub fn from_env() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: ReadEnv> Config<E> {
    pub fn with_env(env: E) -> Self {
        Self { env }
    }

    /// Whether the application should look for a newer release.
    ///
    /// Unset or unrecognized values fall back to `true`.
    pub fn check_for_updates(&self) -> bool {
        self.resolve_check_for_updates().value
    }

    pub fn resolve_check_for_updates(&self) -> FlagResolution {
        resolve_flag(&self.env, ENV_CHECK_UPDATES, DEFAULT_CHECK_FOR_UPDATES)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FlagResolution {
    pub key: &'static str,
    pub value: bool,
    pub origin: FlagOrigin,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlagOrigin {
    Unset,
    Recognized { raw: String },
    Unrecognized { raw: String },
}

impl FlagOrigin {
    pub fn is_default(&self) -> bool {
        !matches!(self, FlagOrigin::Recognized { .. })
    }
}

fn resolve_flag(env: &impl ReadEnv, key: &'static str, default: bool) -> FlagResolution {
    let (value, origin) = match env.var(key) {
        Ok(raw) => match raw.parse::<EnvBool>() {
            Ok(EnvBool(value)) => (value, FlagOrigin::Recognized { raw }),
            Err(err) => {
                warn!("ignoring {key}: {err}; using default {default}");
                (default, FlagOrigin::Unrecognized { raw })
            }
        },
        Err(VarError::NotUnicode(raw)) => {
            warn!("ignoring {key}: value {raw:?} is not valid unicode; using default {default}");
            (
                default,
                FlagOrigin::Unrecognized {
                    raw: raw.to_string_lossy().into_owned(),
                },
            )
        }
        Err(VarError::NotPresent) => (default, FlagOrigin::Unset),
    };

    debug!("resolved {key}={value} ({origin:?})");
    FlagResolution { key, value, origin }
}
