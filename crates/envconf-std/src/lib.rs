//! Zero-cost abstractions over the process environment.
//!
//! # Quick Start
//!
//! | Capability | Trait | Production | Test |
//! |------------|-------|------------|------|
//! | Lookup | [`ReadEnv`] | [`SystemEnv`] | [`InMemoryEnv`]* |
//! | Write | [`WriteEnv`] | [`SystemEnv`] | [`InMemoryEnv`]* |
//! | Remove | [`RemoveEnv`] | [`SystemEnv`] | [`InMemoryEnv`]* |
//! | Enumerate | [`ListEnv`] | [`SystemEnv`] | [`InMemoryEnv`]* |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! # Thread Safety
//!
//! [`SystemEnv`] is zero-sized and trivially `Send + Sync`, but writes
//! through it mutate process-global state. See [`SystemEnv`] for the
//! constraints that come with that.
//!
//! [`InMemoryEnv`] is backed by a `RefCell<BTreeMap>` and is **not**
//! `Sync`. Wrap it behind your own `Mutex` if a test needs to share it
//! across threads.
//!
//! [`InMemoryEnv`]: env::InMemoryEnv

pub mod env;

pub use env::{ListEnv, ReadEnv, RemoveEnv, SystemEnv, WriteEnv};
