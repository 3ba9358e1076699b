use common::model::candidate::CandidateRow;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::helpers::{lookup_options, select_value, spinner};

use super::details::details_sheet;
use super::messages::Msg;
use super::state::CandidateListScreen;

pub fn view(component: &CandidateListScreen, ctx: &Context<CandidateListScreen>) -> Html {
    let link = ctx.link();
    let list = &component.list;

    html! {
        <div class="list-root">
            <h2>{ "Lista de Candidatos" }</h2>
            <button class="primary" onclick={link.callback(|_| Msg::Create)}>
                { "Cadastrar Candidato" }
            </button>
            if list.loading && list.rows.is_empty() {
                { spinner() }
            } else {
                <ul class="rows">
                    { for list.rows.iter().map(|row| row_view(component, link, row)) }
                </ul>
            }
            { details_sheet(component, link) }
        </div>
    }
}

fn row_view(
    component: &CandidateListScreen,
    link: &Scope<CandidateListScreen>,
    row: &CandidateRow,
) -> Html {
    let id = row.id;
    html! {
        <li class="row" key={id.to_string()}>
            <div class="row-info" onclick={link.callback(move |_| Msg::Edit(id))}>
                <strong>{ format!("Nome Completo: {}", row.nome_completo) }</strong>
                <span>{ format!("Nome Urna: {}", row.nome_urna) }</span>
                <span>{ format!("UF: {}", row.uf) }</span>
                <span>{ format!("Município: {}", row.municipio) }</span>
            </div>
            <div class="row-actions">
                <label>{ "Status:" }</label>
                <select
                    key={component.list.picker_key(id)}
                    disabled={component.saving_status}
                    onchange={link.callback(move |e: Event| Msg::ChangeStatus {
                        id,
                        status: select_value(&e),
                    })}
                >
                    { lookup_options(&component.list.statuses, &row.id_status.to_string(), "Status") }
                </select>
                <button class="icon-btn" title="Detalhes" onclick={link.callback(move |_| Msg::ShowDetails(id))}>
                    <i class="material-icons">{ "visibility" }</i>
                </button>
            </div>
        </li>
    }
}
