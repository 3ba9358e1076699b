use yew::prelude::*;

use crate::components::helpers::{input_value, spinner};

use super::messages::Msg;
use super::state::Login;

pub fn view(component: &Login, ctx: &Context<Login>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="login-root">
            <h1 class="brand">{ "MapeiaVoto" }</h1>
            <form class="card" {onsubmit}>
                <input
                    type="email"
                    placeholder="E-mail"
                    value={component.email.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetEmail(input_value(&e)))}
                />
                <input
                    type="password"
                    placeholder="Senha"
                    value={component.password.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetPassword(input_value(&e)))}
                />
                <button type="submit" class="primary" disabled={component.submitting}>
                    { "Entrar" }
                </button>
            </form>
            { if component.submitting { spinner() } else { html! {} } }
        </div>
    }
}
