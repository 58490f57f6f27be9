//! Environment variable access split into one trait per capability.
//!
//! # Examples
//!
//! ```
//! use envconf_std::env::{ReadEnv, SystemEnv};
//!
//! fn get_database_url<E: ReadEnv>(env: &E) -> String {
//!     env.var("DATABASE_URL")
//!         .unwrap_or_else(|_| "postgres://localhost".to_string())
//! }
//!
//! let url = get_database_url(&SystemEnv);
//! ```
//!
//! ```ignore
//! use envconf_std::env::{InMemoryEnv, ReadEnv, WriteEnv};
//!
//! let env = InMemoryEnv::new();
//! env.set_var("DATABASE_URL", "postgres://test").unwrap(); // &self, no `mut`
//!
//! assert_eq!(get_database_url(&env), "postgres://test");
//! ```

mod in_memory;
mod list_env;
mod read_env;
mod remove_env;
mod system;
mod write_env;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use list_env::ListEnv;
pub use read_env::ReadEnv;
pub use remove_env::RemoveEnv;
pub use system::SystemEnv;
pub use write_env::{WriteEnv, validate_name, validate_value};
