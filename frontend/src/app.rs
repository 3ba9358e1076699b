//! Application shell: owns the current route and the services, runs the
//! session gate at launch and mounts one screen at a time.
//!
//! Every navigation bumps `visits`, which keys the mounted screen. Entering a
//! screen (again) therefore always mounts a fresh component, so lists refetch
//! on each focus and forms start from a clean state.

use std::rc::Rc;

use common::config::ApiConfig;
use common::routes::Route;
use common::session::{self, LoginOutcome};
use log::{error, info};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::candidates::form::CandidateFormScreen;
use crate::components::candidates::list::CandidateListScreen;
use crate::components::helpers::{show_toast, spinner};
use crate::components::home::Home;
use crate::components::session::change_password::ChangePassword;
use crate::components::session::login::Login;
use crate::components::survey::SurveyScreen;
use crate::components::users::form::UserFormScreen;
use crate::components::users::list::UserListScreen;
use crate::services::AppServices;

pub enum Msg {
    Started(Route),
    Navigate(Route),
    LoggedIn(LoginOutcome),
    Logout,
}

pub struct App {
    services: Rc<AppServices>,
    route: Route,
    visits: u32,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            services: Rc::new(AppServices::new(ApiConfig::default())),
            route: Route::Gate,
            visits: 0,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let services = self.services.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let route = session::resolve_start(&services.client, &services.session).await;
                link.send_message(Msg::Started(route));
            });
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Started(route) => {
                info!("session gate resolved to {route:?}");
                self.go(route);
            }
            Msg::Navigate(route) => self.go(route),
            Msg::LoggedIn(outcome) => {
                self.services = Rc::new(self.services.with_token(Some(outcome.token)));
                self.go(outcome.route);
            }
            Msg::Logout => {
                let route = session::logout(&self.services.session).unwrap_or_else(|e| {
                    error!("failed to clear the session: {e}");
                    show_toast("Não foi possível encerrar a sessão.");
                    Route::Login
                });
                self.services = Rc::new(self.services.with_token(None));
                self.go(route);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                { if self.route.requires_session() { self.nav_bar(ctx) } else { html! {} } }
                <main>{ self.screen(ctx) }</main>
            </div>
        }
    }
}

impl App {
    fn go(&mut self, route: Route) {
        self.route = if route.requires_session() && self.services.client.token().is_none() {
            Route::Login
        } else {
            route
        };
        self.visits = self.visits.wrapping_add(1);
    }

    fn nav_bar(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let item = |label: &'static str, route: Route| {
            let active = std::mem::discriminant(&self.route) == std::mem::discriminant(&route);
            html! {
                <button
                    class={classes!("nav-item", active.then_some("active"))}
                    onclick={link.callback(move |_| Msg::Navigate(route))}
                >
                    { label }
                </button>
            }
        };
        html! {
            <nav class="nav-bar">
                { item("Principal", Route::Home) }
                { item("Candidatos", Route::CandidateList) }
                { item("Pesquisa", Route::Survey) }
                { item("Usuários", Route::UserList) }
                <button class="nav-item" onclick={link.callback(|_| Msg::Logout)}>{ "Sair" }</button>
            </nav>
        }
    }

    fn screen(&self, ctx: &Context<Self>) -> Html {
        let services = self.services.clone();
        let navigate = ctx.link().callback(Msg::Navigate);
        let key = self.visits.to_string();
        match self.route {
            Route::Gate => spinner(),
            Route::Login => html! {
                <Login key={key} {services} on_login={ctx.link().callback(Msg::LoggedIn)} />
            },
            Route::ChangePassword => html! { <ChangePassword key={key} {services} {navigate} /> },
            Route::Home => html! { <Home key={key} {services} {navigate} /> },
            Route::CandidateList => html! { <CandidateListScreen key={key} {services} {navigate} /> },
            Route::CandidateForm { id } => html! {
                <CandidateFormScreen key={key} {services} {navigate} {id} />
            },
            Route::UserList => html! { <UserListScreen key={key} {services} {navigate} /> },
            Route::UserForm { id } => html! { <UserFormScreen key={key} {services} {navigate} {id} /> },
            Route::Survey => html! { <SurveyScreen key={key} {services} {navigate} /> },
        }
    }
}
