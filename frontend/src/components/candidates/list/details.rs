use common::dates;
use common::model::candidate::Candidate;
use common::model::reference::label_of;
use yew::html::Scope;
use yew::prelude::*;

use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

use super::messages::Msg;
use super::state::{CandidateListScreen, Details};

/// Read-only sheet with the full record of one candidate.
pub fn details_sheet(component: &CandidateListScreen, link: &Scope<CandidateListScreen>) -> Html {
    let body = match &component.details {
        Details::Closed => html! {},
        Details::Loading(_) => html! { <div class="spinner" /> },
        Details::Failed => html! { <p>{ "Erro ao carregar os detalhes do candidato." }</p> },
        Details::Loaded(candidate) => candidate_fields(component, candidate),
    };

    html! {
        <YwMaterialTopSheet node_ref={component.details_ref.clone()}>
            <div class="sheet-content">
                <button class="sheet-close" onclick={link.callback(|_| Msg::CloseDetails)}>
                    { "✕" }
                </button>
                <h2>{ "Detalhes do Candidato" }</h2>
                { body }
            </div>
        </YwMaterialTopSheet>
    }
}

fn candidate_fields(component: &CandidateListScreen, candidate: &Candidate) -> Html {
    let birth_date = dates::api_to_display(&candidate.data_nascimento)
        .unwrap_or_else(|_| candidate.data_nascimento.clone());
    let status = label_of(&component.list.statuses, candidate.id_status).unwrap_or("-");

    html! {
        <>
            if !candidate.foto.is_empty() {
                <img class="candidate-photo" src={candidate.foto.clone()} alt={candidate.nome_urna.clone()} />
            }
            <p>{ format!("Nome Completo: {}", candidate.nome_completo) }</p>
            <p>{ format!("Nome Urna: {}", candidate.nome_urna) }</p>
            <p>{ format!("UF: {}", candidate.uf) }</p>
            <p>{ format!("Município: {}", candidate.municipio) }</p>
            <p>{ format!("Data de Nascimento: {birth_date}") }</p>
            <p>{ format!("Status: {status}") }</p>
        </>
    }
}
