use common::model::candidate::CandidateOption;
use yew::prelude::*;

use crate::components::helpers::{
    input_value, lookup_options, municipality_options, select_value, spinner, state_options,
    textarea_value,
};

use super::messages::{Field, Msg};
use super::state::SurveyScreen;

pub fn view(component: &SurveyScreen, ctx: &Context<SurveyScreen>) -> Html {
    let link = ctx.link();
    let form = &component.form;
    let geography = &form.geography;
    let edit = |field: Field| link.callback(move |e: InputEvent| Msg::Edit(field, input_value(&e)));
    let pick = |field: Field| link.callback(move |e: Event| Msg::Edit(field, select_value(&e)));
    let candidates_disabled = !geography.candidates_selectable() || component.looking_up;

    html! {
        <div class="form-root">
            <h2>{ "Pesquisa Eleitoral" }</h2>
            <form class="card" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <label>{ "Nome do Entrevistado" }</label>
                <input
                    placeholder="Nome Completo"
                    value={form.interviewee_name.clone()}
                    oninput={edit(Field::Name)}
                />

                <label>{ "Data de Nascimento do Entrevistado" }</label>
                <input
                    placeholder="DD/MM/AAAA"
                    inputmode="numeric"
                    value={form.interviewee_birth_date.clone()}
                    oninput={edit(Field::BirthDate)}
                />

                <label>{ "Celular do Entrevistado" }</label>
                <input
                    type="tel"
                    placeholder="(00) 00000-0000"
                    value={form.interviewee_phone.clone()}
                    oninput={edit(Field::Phone)}
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

                <label>{ "Gênero" }</label>
                <select onchange={pick(Field::Gender)}>
                    { lookup_options(&component.genders, &form.id_genero, "Selecione o Gênero") }
                </select>

                <label>{ "Nível de Escolaridade" }</label>
                <select onchange={pick(Field::Education)}>
                    { lookup_options(&component.education_tiers, &form.id_nivel_escolaridade, "Selecione o Nível de Escolaridade") }
                </select>

                <label>{ "Renda Familiar" }</label>
                <select onchange={pick(Field::Income)}>
                    { lookup_options(&component.income_tiers, &form.id_renda_familiar, "Selecione a Renda Familiar") }
                </select>

                <label>{ "Voto Indeciso" }</label>
                <select onchange={link.callback(|e: Event| Msg::SetUndecided(select_value(&e) == "true"))}>
                    { yes_no(form.undecided) }
                </select>

                <label>{ "Voto Branco/Nulo" }</label>
                <select onchange={link.callback(|e: Event| Msg::SetBlankOrNull(select_value(&e) == "true"))}>
                    { yes_no(form.blank_or_null) }
                </select>

                <label>{ "Candidato a Prefeito" }</label>
                <select disabled={candidates_disabled} onchange={pick(Field::Mayor)}>
                    { candidate_options(&geography.candidates.mayors, form.mayor()) }
                </select>

                <label>{ "Candidato a Vereador" }</label>
                <select disabled={candidates_disabled} onchange={pick(Field::Councillor)}>
                    { candidate_options(&geography.candidates.councillors, form.councillor()) }
                </select>

                <label>{ "Sugestão de Melhoria" }</label>
                <textarea
                    placeholder="Escreva sua sugestão"
                    value={form.suggestion.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::Edit(Field::Suggestion, textarea_value(&e)))}
                />

                <div class="form-actions">
                    <button type="submit" class="primary" disabled={component.phase.is_busy()}>
                        { "Salvar Pesquisa" }
                    </button>
                    <button type="button" onclick={link.callback(|_| Msg::Back)}>{ "Voltar" }</button>
                </div>
            </form>
            { if component.phase.is_busy() { spinner() } else { html! {} } }
        </div>
    }
}

fn yes_no(value: bool) -> Html {
    html! {
        <>
            <option value="true" selected={value}>{ "Sim" }</option>
            <option value="false" selected={!value}>{ "Não" }</option>
        </>
    }
}

fn candidate_options(candidates: &[CandidateOption], selected: Option<i64>) -> Html {
    html! {
        <>
            <option value="0" selected={selected.is_none()}>{ "Selecione o Candidato" }</option>
            { for candidates.iter().map(|c| html! {
                <option value={c.id.to_string()} selected={selected == Some(c.id)}>{ &c.nome_urna }</option>
            }) }
        </>
    }
}
