//! Candidate list: rows from `dadosBasicos`, an inline status picker per row,
//! and a details sheet.
//!
//! The shell remounts this screen on every visit, so the first render is the
//! focus event that triggers the refresh.

use yew::prelude::*;

mod details;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CandidateListScreen;

use crate::services::ScreenProps;

impl Component for CandidateListScreen {
    type Message = Msg;
    type Properties = ScreenProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CandidateListScreen::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Refresh);
        }
    }
}
