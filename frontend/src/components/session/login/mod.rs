//! Login screen: exchanges credentials for a session token.
//!
//! The shell receives the outcome through `on_login` and decides where to go
//! (forced password change or the candidate list). Any failure shows a toast
//! and leaves the typed credentials in place.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::LoginProps;
pub use state::Login;

impl Component for Login {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Login::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
