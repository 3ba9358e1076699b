use std::rc::Rc;

use common::session::LoginOutcome;
use yew::prelude::*;

use crate::services::AppServices;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    pub services: Rc<AppServices>,
    /// Fired once the token has been stored.
    pub on_login: Callback<LoginOutcome>,
}
