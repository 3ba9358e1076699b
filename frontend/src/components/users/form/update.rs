use common::forms::user::UserForm;
use common::forms::{self, FormMode, FormPhase, Hydrate};
use common::references;
use common::routes::Route;
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{report_missing, show_toast};

use super::messages::{Field, Msg};
use super::state::UserFormScreen;

pub fn load(component: &mut UserFormScreen, ctx: &Context<UserFormScreen>) {
    component.phase = FormPhase::Loading;
    component.pending = 1;

    let services = ctx.props().services.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let references = references::user_references(&services.client).await;
        link.send_message(Msg::ReferencesLoaded(references));
    });

    if let FormMode::Edit(id) = component.mode {
        component.pending += 1;
        let services = ctx.props().services.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let user = forms::load_entity::<_, UserForm>(&services.client, id).await;
            link.send_message(Msg::Loaded(user));
        });
    }
}

pub fn update(component: &mut UserFormScreen, ctx: &Context<UserFormScreen>, msg: Msg) -> bool {
    match msg {
        Msg::ReferencesLoaded(references) => {
            report_missing(&references.missing);
            component.statuses = references.statuses;
            component.profiles = references.profiles;
            component.settle();
        }
        Msg::Loaded(Ok(user)) => {
            component.form.hydrate(user);
            component.settle();
        }
        Msg::Loaded(Err(e)) => {
            error!("failed to load user: {e}");
            show_toast("Erro ao carregar os dados do usuário.");
            component.settle();
        }
        Msg::Edit(field, value) => {
            let form = &mut component.form;
            match field {
                Field::NomeUsuario => form.nome_usuario = value,
                Field::Email => form.email = value,
                Field::Senha => form.senha = value,
                Field::Status => form.id_status = value,
                Field::Profile => form.id_perfil_usuario = value,
            }
        }
        Msg::ToggleMustChangePassword(value) => component.form.precisa_trocar_senha = value,
        Msg::Submit => {
            if component.phase.is_busy() {
                return false;
            }
            component.phase = FormPhase::Submitting;

            let services = ctx.props().services.clone();
            let link = ctx.link().clone();
            let form = component.form.clone();
            let mode = component.mode;
            spawn_local(async move {
                let result = forms::submit(&services.client, &form, mode).await;
                link.send_message(Msg::Submitted(result));
            });
        }
        Msg::Submitted(Ok(())) => {
            component.phase = FormPhase::Succeeded;
            show_toast(match component.mode {
                FormMode::Create => "Usuário cadastrado com sucesso!",
                FormMode::Edit(_) => "Usuário atualizado com sucesso!",
            });
            ctx.props()
                .navigate
                .emit(Route::UserForm { id: component.mode.id() }.after_submit());
        }
        Msg::Submitted(Err(e)) => {
            let verb = match component.mode {
                FormMode::Create => "cadastrar o usuário",
                FormMode::Edit(_) => "atualizar o usuário",
            };
            let message = e.alert_message(verb);
            show_toast(&message);
            component.phase = FormPhase::Failed(message);
        }
        Msg::Back => {
            ctx.props().navigate.emit(Route::UserList);
            return false;
        }
    }
    true
}
