use common::session;
use log::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::show_failure;

use super::messages::Msg;
use super::state::Login;

pub fn update(component: &mut Login, ctx: &Context<Login>, msg: Msg) -> bool {
    match msg {
        Msg::SetEmail(email) => {
            component.email = email;
            true
        }
        Msg::SetPassword(password) => {
            component.password = password;
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            component.submitting = true;

            let services = ctx.props().services.clone();
            let link = ctx.link().clone();
            let email = component.email.clone();
            let password = component.password.clone();
            spawn_local(async move {
                let outcome =
                    session::login(&services.client, &services.session, &email, &password).await;
                link.send_message(Msg::Finished(outcome));
            });
            true
        }
        Msg::Finished(Ok(outcome)) => {
            component.submitting = false;
            ctx.props().on_login.emit(outcome);
            false
        }
        Msg::Finished(Err(e)) => {
            warn!("login failed: {e}");
            component.submitting = false;
            show_failure(&e, "fazer login");
            true
        }
    }
}
