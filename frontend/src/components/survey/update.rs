use chrono::Utc;
use common::cascade::{self, Ticket};
use common::forms::{self, FormMode, FormPhase};
use common::references;
use common::routes::Route;
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{report_missing, show_failure, show_toast};

use super::messages::{Field, Msg};
use super::state::SurveyScreen;

pub fn load(component: &mut SurveyScreen, ctx: &Context<SurveyScreen>) {
    component.phase = FormPhase::Loading;
    let services = ctx.props().services.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let references = references::survey_references(&services.client).await;
        link.send_message(Msg::ReferencesLoaded(references));
    });
}

pub fn update(component: &mut SurveyScreen, ctx: &Context<SurveyScreen>, msg: Msg) -> bool {
    match msg {
        Msg::ReferencesLoaded(references) => {
            report_missing(&references.missing);
            component.form.geography.states = references.states;
            component.genders = references.genders;
            component.education_tiers = references.education_tiers;
            component.income_tiers = references.income_tiers;
            component.phase = FormPhase::Ready;
        }
        Msg::MunicipalitiesLoaded(ticket, Ok(municipalities)) => {
            return component.form.geography.apply_municipalities(ticket, municipalities);
        }
        Msg::MunicipalitiesLoaded(_, Err(e)) => {
            error!("failed to load municipalities: {e}");
            show_toast("Erro ao carregar os municípios.");
            return false;
        }
        Msg::CandidatesLoaded(ticket, candidates) => {
            if !component.form.geography.apply_candidates(ticket, candidates) {
                return false;
            }
            component.looking_up = false;
        }
        Msg::Edit(field, value) => {
            let form = &mut component.form;
            match field {
                Field::Name => form.interviewee_name = value,
                Field::BirthDate => form.type_birth_date(&value),
                Field::Phone => form.type_phone(&value),
                Field::Gender => form.id_genero = value,
                Field::Education => form.id_nivel_escolaridade = value,
                Field::Income => form.id_renda_familiar = value,
                Field::Suggestion => form.suggestion = value,
                Field::Mayor => form.choose_mayor(&value),
                Field::Councillor => form.choose_councillor(&value),
            }
        }
        Msg::SetUndecided(value) => component.form.undecided = value,
        Msg::SetBlankOrNull(value) => component.form.blank_or_null = value,
        Msg::SelectState(uf) => {
            component.looking_up = false;
            if let Some(ticket) = component.form.select_state(&uf) {
                fetch_municipalities(component, ctx, ticket);
            }
        }
        Msg::SelectMunicipality(municipality) => {
            component.looking_up = false;
            if let Some(ticket) = component.form.select_municipality(&municipality) {
                component.looking_up = true;
                fetch_candidates(component, ctx, ticket);
            }
        }
        Msg::Submit => {
            if component.phase.is_busy() {
                return false;
            }
            component.phase = FormPhase::Submitting;
            component.form.interviewed_at = Utc::now();

            let services = ctx.props().services.clone();
            let link = ctx.link().clone();
            let form = component.form.clone();
            spawn_local(async move {
                let result = forms::submit(&services.client, &form, FormMode::Create).await;
                link.send_message(Msg::Submitted(result));
            });
        }
        Msg::Submitted(Ok(())) => {
            component.phase = FormPhase::Succeeded;
            show_toast("Pesquisa eleitoral salva com sucesso!");
            ctx.props().navigate.emit(Route::Survey.after_submit());
        }
        Msg::Submitted(Err(e)) => {
            show_failure(&e, "salvar a pesquisa eleitoral");
            component.phase = FormPhase::Failed(e.alert_message("salvar a pesquisa eleitoral"));
        }
        Msg::Back => {
            ctx.props().navigate.emit(Route::Home);
            return false;
        }
    }
    true
}

fn fetch_municipalities(component: &SurveyScreen, ctx: &Context<SurveyScreen>, ticket: Ticket) {
    let uf = component.form.geography.state().to_string();
    let services = ctx.props().services.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let municipalities = cascade::fetch_municipalities(&services.client, &uf).await;
        link.send_message(Msg::MunicipalitiesLoaded(ticket, municipalities));
    });
}

fn fetch_candidates(component: &SurveyScreen, ctx: &Context<SurveyScreen>, ticket: Ticket) {
    let uf = component.form.geography.state().to_string();
    let municipality = component.form.geography.municipality().to_string();
    let services = ctx.props().services.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let candidates = cascade::fetch_scoped_candidates(&services.client, &uf, &municipality).await;
        link.send_message(Msg::CandidatesLoaded(ticket, candidates));
    });
}
