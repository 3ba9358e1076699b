use common::routes::Route;
use yew::prelude::*;

use crate::services::ScreenProps;

/// Landing menu with shortcuts to the main screens.
pub struct Home;

impl Component for Home {
    type Message = ();
    type Properties = ScreenProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Home
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let shortcut = |label: &'static str, route: Route| {
            let navigate = ctx.props().navigate.clone();
            html! {
                <button class="menu-button" onclick={Callback::from(move |_: MouseEvent| navigate.emit(route))}>
                    { label }
                </button>
            }
        };
        html! {
            <div class="home">
                <h1>{ "Bem-vindo ao MapeiaVoto" }</h1>
                <p class="subtitle">{ "Escolha uma das opções abaixo:" }</p>
                { shortcut("Ver Lista de Candidatos", Route::CandidateList) }
                { shortcut("Gerenciar Usuários", Route::UserList) }
                { shortcut("Iniciar Pesquisa Eleitoral", Route::Survey) }
            </div>
        }
    }
}
