pub mod config;
pub mod env;
pub mod env_flags;
pub mod error;

pub use config::{Config, FlagOrigin, FlagResolution};
pub use env::{MapEnv, ProcessEnv, ReadEnv};
pub use env_flags::{parse_bool, EnvBool};
pub use error::UnrecognizedToken;
