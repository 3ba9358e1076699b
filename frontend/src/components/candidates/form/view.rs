use yew::prelude::*;

use crate::components::helpers::{
    input_value, lookup_options, municipality_options, select_value, spinner, state_options,
};

use super::messages::{Field, Msg};
use super::state::CandidateFormScreen;

pub fn view(component: &CandidateFormScreen, ctx: &Context<CandidateFormScreen>) -> Html {
    let link = ctx.link();
    let form = &component.form;
    let geography = &form.geography;
    let edit = |field: Field| link.callback(move |e: InputEvent| Msg::Edit(field, input_value(&e)));
    let pick = |field: Field| link.callback(move |e: Event| Msg::Edit(field, select_value(&e)));
    let title = if component.mode.id().is_some() {
        "Editar Candidato"
    } else {
        "Cadastrar Candidato"
    };

    html! {
        <div class="form-root">
            <h2>{ title }</h2>
            <form class="card" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <label>{ "Nome Completo" }</label>
                <input value={form.nome_completo.clone()} oninput={edit(Field::NomeCompleto)} />

                <label>{ "Nome na Urna" }</label>
                <input value={form.nome_urna.clone()} oninput={edit(Field::NomeUrna)} />

                <label>{ "Data de Nascimento" }</label>
                <input
                    placeholder="DD/MM/AAAA"
                    inputmode="numeric"
                    value={form.data_nascimento.clone()}
                    oninput={edit(Field::DataNascimento)}
                />

                <label>{ "UF" }</label>
                <select onchange={link.callback(|e: Event| Msg::SelectState(select_value(&e)))}>
                    { state_options(&geography.states, geography.state()) }
                </select>

                <label>{ "Município" }</label>
                <select
                    disabled={!geography.municipality_selectable()}
                    onchange={link.callback(|e: Event| Msg::SelectMunicipality(select_value(&e)))}
                >
                    { municipality_options(&geography.municipalities, geography.municipality()) }
                </select>

                <label>{ "Foto (URL)" }</label>
                <input type="url" value={form.foto.clone()} oninput={edit(Field::Foto)} />
                if !form.foto.trim().is_empty() {
                    <img class="photo-preview" src={form.foto.trim().to_string()} alt="Foto do candidato" />
                }

                <label>{ "Status" }</label>
                <select onchange={pick(Field::Status)}>
                    { lookup_options(&component.statuses, &form.id_status, "Selecione o Status") }
                </select>

                <label>{ "Partido Político" }</label>
                <select onchange={pick(Field::Party)}>
                    { lookup_options(&component.parties, &form.id_partido_politico, "Selecione o Partido Político") }
                </select>

                <label>{ "Cargo Disputado" }</label>
                <select onchange={pick(Field::Office)}>
                    { lookup_options(&component.offices, &form.id_cargo_disputado, "Selecione o Cargo") }
                </select>

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
