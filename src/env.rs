use std::{collections::HashMap, env::VarError, sync::Arc};

/// Source of environment variables.
///
/// `ProcessEnv` reads the real process environment. `MapEnv` keeps values in
/// memory so callers can resolve configuration without touching global state.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl ReadEnv for ProcessEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }
}

impl ReadEnv for MapEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for Arc<E> {
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}
