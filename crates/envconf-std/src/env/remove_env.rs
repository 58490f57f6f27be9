use std::io;

pub trait RemoveEnv {
    /// Removing a variable that does not exist is not an error.
    fn remove_var(&self, key: &str) -> io::Result<()>;
}
