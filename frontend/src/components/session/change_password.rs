//! Forced password change, reached from login when the backend flags the
//! account.

use common::error::Result;
use common::routes::Route;
use common::session;
use log::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{input_value, show_failure, show_toast, spinner};
use crate::services::ScreenProps;

pub enum Msg {
    SetCurrent(String),
    SetNew(String),
    Submit,
    Finished(Result<()>),
}

#[derive(Default)]
pub struct ChangePassword {
    current: String,
    new_password: String,
    /// Field-level rejection of the new password, shown under its input.
    rejection: Option<String>,
    submitting: bool,
}

impl Component for ChangePassword {
    type Message = Msg;
    type Properties = ScreenProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetCurrent(value) => self.current = value,
            Msg::SetNew(value) => self.new_password = value,
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                self.submitting = true;
                self.rejection = None;

                let services = ctx.props().services.clone();
                let link = ctx.link().clone();
                let current = self.current.clone();
                let new_password = self.new_password.clone();
                spawn_local(async move {
                    let result =
                        session::change_password(&services.client, &current, &new_password).await;
                    link.send_message(Msg::Finished(result));
                });
            }
            Msg::Finished(Ok(())) => {
                self.submitting = false;
                show_toast("Senha redefinida com sucesso!");
                ctx.props().navigate.emit(Route::Login);
            }
            Msg::Finished(Err(e)) => {
                warn!("password change failed: {e}");
                self.submitting = false;
                match session::new_password_rejection(&e) {
                    Some(message) => self.rejection = Some(message),
                    None => show_failure(&e, "redefinir a senha"),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="login-root">
                <h2>{ "Redefinir Senha" }</h2>
                <form class="card" onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <input
                        type="password"
                        placeholder="Senha Atual"
                        value={self.current.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetCurrent(input_value(&e)))}
                    />
                    <input
                        type="password"
                        placeholder="Nova Senha"
                        value={self.new_password.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetNew(input_value(&e)))}
                    />
                    if let Some(message) = &self.rejection {
                        <p class="field-error">{ message }</p>
                    }
                    <button type="submit" class="primary" disabled={self.submitting}>
                        { if self.submitting { "Carregando..." } else { "Redefinir Senha" } }
                    </button>
                </form>
                { if self.submitting { spinner() } else { html! {} } }
            </div>
        }
    }
}
