/// Screens of the app. Navigation is a plain value: screens ask the shell to
/// switch to a `Route`, the shell mounts the matching component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Waiting for the stored session to be validated.
    Gate,
    Login,
    ChangePassword,
    Home,
    CandidateList,
    CandidateForm { id: Option<i64> },
    UserList,
    UserForm { id: Option<i64> },
    Survey,
}

impl Route {
    /// The list a form returns to after a successful submission.
    pub fn after_submit(self) -> Route {
        match self {
            Route::CandidateForm { .. } => Route::CandidateList,
            Route::UserForm { .. } => Route::UserList,
            Route::Survey => Route::Home,
            other => other,
        }
    }

    /// Whether the screen needs a validated session.
    pub fn requires_session(self) -> bool {
        !matches!(self, Route::Gate | Route::Login | Route::ChangePassword)
    }
}
