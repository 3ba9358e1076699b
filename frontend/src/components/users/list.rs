//! User list: rows from `Usuario/dadosBasicos` with an inline status picker.

use common::cascade::Ticket;
use common::error::Result;
use common::forms::parse_choice;
use common::list::{self, EntityList, ListSnapshot, StatusChange};
use common::model::user::UserRow;
use common::routes::Route;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{lookup_options, select_value, show_failure, show_toast, spinner};
use crate::services::ScreenProps;

pub enum Msg {
    Refresh,
    Refreshed(Ticket, ListSnapshot<UserRow>),
    ChangeStatus { id: i64, status: String },
    StatusChanged(Result<StatusChange>),
    Navigate(Route),
}

#[derive(Default)]
pub struct UserListScreen {
    list: EntityList<UserRow>,
    saving_status: bool,
}

impl Component for UserListScreen {
    type Message = Msg;
    type Properties = ScreenProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Refresh);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Refresh => {
                let ticket = self.list.begin_refresh();
                let services = ctx.props().services.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let snapshot = list::refresh::<_, UserRow>(&services.client).await;
                    link.send_message(Msg::Refreshed(ticket, snapshot));
                });
                true
            }
            Msg::Refreshed(ticket, snapshot) => self.list.apply(ticket, snapshot),
            Msg::ChangeStatus { id, status } => {
                let status = parse_choice(&status);
                let row = self.list.row(id).cloned();
                let (Some(row), false) = (row, status <= 0 || self.saving_status) else {
                    self.list.reset_pickers();
                    return true;
                };
                self.saving_status = true;

                let services = ctx.props().services.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = list::change_status(&services.client, &[row], id, status).await;
                    link.send_message(Msg::StatusChanged(outcome));
                });
                true
            }
            Msg::StatusChanged(outcome) => {
                self.saving_status = false;
                match outcome {
                    Ok(StatusChange::Changed) => {
                        show_toast("Status do usuário alterado com sucesso!");
                        ctx.link().send_message(Msg::Refresh);
                    }
                    Ok(StatusChange::Unchanged) => {}
                    Err(e) => {
                        self.list.reset_pickers();
                        show_failure(&e, "alterar o status do usuário");
                    }
                }
                true
            }
            Msg::Navigate(route) => {
                ctx.props().navigate.emit(route);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="list-root">
                <h2>{ "Lista de Usuários" }</h2>
                if self.list.loading && self.list.rows.is_empty() {
                    { spinner() }
                } else {
                    <ul class="rows">
                        { for self.list.rows.iter().map(|row| self.row_view(link, row)) }
                    </ul>
                }
                <div class="form-actions">
                    <button onclick={link.callback(|_| Msg::Navigate(Route::Home))}>{ "Voltar" }</button>
                    <button class="primary" onclick={link.callback(|_| Msg::Navigate(Route::UserForm { id: None }))}>
                        { "Cadastrar Usuário" }
                    </button>
                </div>
            </div>
        }
    }
}

impl UserListScreen {
    fn row_view(&self, link: &Scope<Self>, row: &UserRow) -> Html {
        let id = row.id;
        html! {
            <li class="row" key={id.to_string()}>
                <div
                    class="row-info"
                    onclick={link.callback(move |_| Msg::Navigate(Route::UserForm { id: Some(id) }))}
                >
                    <strong>{ &row.nome_usuario }</strong>
                    <span>{ &row.email }</span>
                    <span>{ format!("Perfil: {}", row.perfil_nome) }</span>
                </div>
                <div class="row-actions">
                    <label>{ "Status:" }</label>
                    <select
                        key={self.list.picker_key(id)}
                        disabled={self.saving_status}
                        onchange={link.callback(move |e: Event| Msg::ChangeStatus {
                            id,
                            status: select_value(&e),
                        })}
                    >
                        { lookup_options(&self.list.statuses, &row.id_status.to_string(), "Status") }
                    </select>
                </div>
            </li>
        }
    }
}
