use std::env;

/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site:
///
/// ```ignore
/// fn spawn_work<E: ReadEnv + Send + Sync + 'static>(env: Arc<E>) { … }
/// ```
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError>;

    /// `true` when `key` exists, even if its value is empty or not unicode.
    fn contains_var(&self, key: &str) -> bool {
        !matches!(self.var(key), Err(env::VarError::NotPresent))
    }
}
