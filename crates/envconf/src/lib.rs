//! Typed, prefix-aware access to environment variables.
//!
//! Variable names are normalized before lookup: trimmed, upper-cased,
//! with runs of spaces turned into a single underscore. An optional
//! prefix is prepended to every name, so one binary can read
//! `MY_APP_PORT` as `conf.get_uint("port")`.
//!
//! # Examples
//!
//! ```no_run
//! use envconf::EnvConf;
//!
//! let conf = EnvConf::system().with_prefix("my app");
//! let port = conf.must_get_uint("port")?;
//! let verbose = conf.get_bool("verbose").unwrap_or_default();
//! # Ok::<(), envconf::Error>(())
//! ```
//!
//! Tests substitute an in-memory provider instead of mutating the process
//! environment (requires the `test-support` feature of `envconf-std`):
//!
//! ```ignore
//! use envconf::EnvConf;
//! use envconf_std::env::InMemoryEnv;
//!
//! let conf = EnvConf::new(InMemoryEnv::new()).with_prefix("my app");
//! conf.set_uint("port", 8080);
//! assert_eq!(conf.env().var("MY_APP_PORT").unwrap(), "8080");
//! ```

pub mod duration;
pub mod error;
pub mod value;

mod env_conf;
mod key;

pub use duration::{Duration, DurationError};
pub use env_conf::EnvConf;
pub use error::{Error, Result};
pub use key::normalize;
pub use value::{EnvValue, ParseError};
