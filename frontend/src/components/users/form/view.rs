use common::forms::FormMode;
use yew::prelude::*;

use crate::components::helpers::{checked, input_value, lookup_options, select_value, spinner};

use super::messages::{Field, Msg};
use super::state::UserFormScreen;

pub fn view(component: &UserFormScreen, ctx: &Context<UserFormScreen>) -> Html {
    let link = ctx.link();
    let form = &component.form;
    let edit = |field: Field| link.callback(move |e: InputEvent| Msg::Edit(field, input_value(&e)));
    let pick = |field: Field| link.callback(move |e: Event| Msg::Edit(field, select_value(&e)));
    let (title, password_hint) = match component.mode {
        FormMode::Create => ("Cadastrar Usuário", "Digite a senha"),
        FormMode::Edit(_) => ("Editar Usuário", "Deixe em branco para manter a senha"),
    };

    html! {
        <div class="form-root">
            <h2>{ title }</h2>
            <form class="card" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <label>{ "Nome de Usuário" }</label>
                <input
                    placeholder="Digite o nome de usuário"
                    value={form.nome_usuario.clone()}
                    oninput={edit(Field::NomeUsuario)}
                />

                <label>{ "E-mail" }</label>
                <input
                    type="email"
                    placeholder="Digite o email"
                    value={form.email.clone()}
                    oninput={edit(Field::Email)}
                />

                <label>{ "Senha" }</label>
                <input
                    type="password"
                    placeholder={password_hint}
                    value={form.senha.clone()}
                    oninput={edit(Field::Senha)}
                />

                <label>{ "Status" }</label>
                <select onchange={pick(Field::Status)}>
                    { lookup_options(&component.statuses, &form.id_status, "Selecione o Status") }
                </select>

                <label>{ "Perfil" }</label>
                <select onchange={pick(Field::Profile)}>
                    { lookup_options(&component.profiles, &form.id_perfil_usuario, "Selecione o Perfil de Usuário") }
                </select>

                <label class="checkbox">
                    <input
                        type="checkbox"
                        checked={form.precisa_trocar_senha}
                        onchange={link.callback(|e: Event| Msg::ToggleMustChangePassword(checked(&e)))}
                    />
                    { "Exigir troca de senha no próximo acesso" }
                </label>

                <div class="form-actions">
                    <button type="submit" class="primary" disabled={component.phase.is_busy()}>
                        { "Salvar" }
                    </button>
                    <button type="button" onclick={link.callback(|_| Msg::Back)}>{ "Voltar" }</button>
                </div>
            </form>
            { if component.phase.is_busy() { spinner() } else { html! {} } }
        </div>
    }
}
