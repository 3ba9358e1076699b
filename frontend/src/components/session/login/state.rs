#[derive(Debug, Default)]
pub struct Login {
    pub email: String,
    pub password: String,
    /// A login request is in flight; further submits are ignored.
    pub submitting: bool,
}
