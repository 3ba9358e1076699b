use common::forms::parse_choice;
use common::list::{self, StatusChange};
use common::model::candidate::{Candidate, CandidateRow};
use common::requests::endpoints;
use common::routes::Route;
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{show_failure, show_toast};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::state::{CandidateListScreen, Details};

pub fn update(
    component: &mut CandidateListScreen,
    ctx: &Context<CandidateListScreen>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Refresh => {
            let ticket = component.list.begin_refresh();
            let services = ctx.props().services.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let snapshot = list::refresh::<_, CandidateRow>(&services.client).await;
                link.send_message(Msg::Refreshed(ticket, snapshot));
            });
            true
        }
        Msg::Refreshed(ticket, snapshot) => component.list.apply(ticket, snapshot),
        Msg::ChangeStatus { id, status } => {
            let status = parse_choice(&status);
            let row = component.list.row(id).cloned();
            let (Some(row), false) = (row, status <= 0 || component.saving_status) else {
                component.list.reset_pickers();
                return true;
            };
            component.saving_status = true;

            let services = ctx.props().services.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = list::change_status(&services.client, &[row], id, status).await;
                link.send_message(Msg::StatusChanged(outcome));
            });
            true
        }
        Msg::StatusChanged(outcome) => {
            component.saving_status = false;
            match outcome {
                Ok(StatusChange::Changed) => {
                    show_toast("Status do candidato alterado com sucesso!");
                    ctx.link().send_message(Msg::Refresh);
                }
                Ok(StatusChange::Unchanged) => {}
                Err(e) => {
                    component.list.reset_pickers();
                    show_failure(&e, "alterar o status do candidato");
                }
            }
            true
        }
        Msg::Create => {
            ctx.props().navigate.emit(Route::CandidateForm { id: None });
            false
        }
        Msg::Edit(id) => {
            ctx.props().navigate.emit(Route::CandidateForm { id: Some(id) });
            false
        }
        Msg::ShowDetails(id) => {
            component.details = Details::Loading(id);
            open_top_sheet(component.details_ref.clone());

            let services = ctx.props().services.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let candidate = services
                    .client
                    .get::<Candidate>(&endpoints::candidate_details(id))
                    .await;
                link.send_message(Msg::DetailsLoaded(id, candidate));
            });
            true
        }
        Msg::DetailsLoaded(id, candidate) => {
            if component.details != Details::Loading(id) {
                return false;
            }
            component.details = match candidate {
                Ok(candidate) => Details::Loaded(candidate),
                Err(e) => {
                    error!("failed to load candidate {id}: {e}");
                    Details::Failed
                }
            };
            true
        }
        Msg::CloseDetails => {
            close_top_sheet(component.details_ref.clone());
            component.details = Details::Closed;
            true
        }
    }
}
