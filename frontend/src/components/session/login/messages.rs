use common::error::Result;
use common::session::LoginOutcome;

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Finished(Result<LoginOutcome>),
}
