use common::cascade::{self, Ticket};
use common::error::Error;
use common::forms::candidate::CandidateForm;
use common::forms::{self, FormMode, FormPhase, Hydrate};
use common::references;
use common::routes::Route;
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{report_missing, show_toast};

use super::messages::{Field, Msg};
use super::state::CandidateFormScreen;

/// Starts the mount fetches.
pub fn load(component: &mut CandidateFormScreen, ctx: &Context<CandidateFormScreen>) {
    component.phase = FormPhase::Loading;
    component.pending = 1;

    let services = ctx.props().services.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let references = references::candidate_references(&services.client).await;
        link.send_message(Msg::ReferencesLoaded(references));
    });

    if let FormMode::Edit(id) = component.mode {
        component.pending += 1;
        let services = ctx.props().services.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let candidate = forms::load_entity::<_, CandidateForm>(&services.client, id).await;
            link.send_message(Msg::Loaded(candidate));
        });
    }
}

pub fn update(
    component: &mut CandidateFormScreen,
    ctx: &Context<CandidateFormScreen>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::ReferencesLoaded(references) => {
            report_missing(&references.missing);
            component.statuses = references.statuses;
            component.parties = references.parties;
            component.offices = references.offices;
            component.form.geography.states = references.states;
            component.settle();
            true
        }
        Msg::Loaded(Ok(candidate)) => {
            if let Some(ticket) = component.form.hydrate(candidate) {
                fetch_municipalities(component, ctx, ticket);
            }
            component.settle();
            true
        }
        Msg::Loaded(Err(e)) => {
            error!("failed to load candidate: {e}");
            show_toast("Erro ao carregar os dados do candidato.");
            component.settle();
            true
        }
        Msg::MunicipalitiesLoaded(ticket, Ok(municipalities)) => {
            component.form.geography.apply_municipalities(ticket, municipalities)
        }
        Msg::MunicipalitiesLoaded(_, Err(e)) => {
            error!("failed to load municipalities: {e}");
            show_toast("Erro ao carregar os municípios.");
            false
        }
        Msg::Edit(field, value) => {
            let form = &mut component.form;
            match field {
                Field::NomeCompleto => form.nome_completo = value,
                Field::NomeUrna => form.nome_urna = value,
                Field::DataNascimento => form.type_birth_date(&value),
                Field::Foto => form.foto = value,
                Field::Status => form.id_status = value,
                Field::Party => form.id_partido_politico = value,
                Field::Office => form.id_cargo_disputado = value,
            }
            true
        }
        Msg::SelectState(uf) => {
            if let Some(ticket) = component.form.geography.select_state(&uf) {
                fetch_municipalities(component, ctx, ticket);
            }
            true
        }
        Msg::SelectMunicipality(municipality) => {
            component.form.geography.select_municipality(&municipality);
            true
        }
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
            true
        }
        Msg::Submitted(Ok(())) => {
            component.phase = FormPhase::Succeeded;
            let done = match component.mode {
                FormMode::Create => "Candidato cadastrado com sucesso!",
                FormMode::Edit(_) => "Candidato atualizado com sucesso!",
            };
            show_toast(done);
            ctx.props()
                .navigate
                .emit(Route::CandidateForm { id: component.mode.id() }.after_submit());
            true
        }
        Msg::Submitted(Err(e)) => {
            let message = failure_message(&e, component.verb());
            show_toast(&message);
            component.phase = FormPhase::Failed(message);
            true
        }
        Msg::Back => {
            ctx.props().navigate.emit(Route::CandidateList);
            false
        }
    }
}

fn fetch_municipalities(
    component: &CandidateFormScreen,
    ctx: &Context<CandidateFormScreen>,
    ticket: Ticket,
) {
    let uf = component.form.geography.state().to_string();
    let services = ctx.props().services.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let municipalities = cascade::fetch_municipalities(&services.client, &uf).await;
        link.send_message(Msg::MunicipalitiesLoaded(ticket, municipalities));
    });
}

/// The candidate screen shows the server's payload along with the alert.
fn failure_message(error: &Error, verb: &str) -> String {
    let base = error.alert_message(&format!("{verb} o candidato"));
    match error.server_detail() {
        Some(detail) => format!("{}: {detail}", base.trim_end_matches('.')),
        None => base,
    }
}
