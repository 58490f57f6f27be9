pub trait ListEnv {
    /// Every variable whose name and value are valid unicode, in no
    /// particular order.
    fn vars(&self) -> Vec<(String, String)>;
}
