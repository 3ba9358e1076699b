use common::error::Result;
use common::model::user::User;
use common::references::UserReferences;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NomeUsuario,
    Email,
    Senha,
    Status,
    Profile,
}

pub enum Msg {
    ReferencesLoaded(UserReferences),
    Loaded(Result<User>),
    Edit(Field, String),
    ToggleMustChangePassword(bool),
    Submit,
    Submitted(Result<()>),
    Back,
}
