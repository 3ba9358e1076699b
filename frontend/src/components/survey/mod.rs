//! Field survey: interviewee data, the place of the interview and the voting
//! intention for the candidates running there.
//!
//! UF picks trigger the municipality list; once both are chosen the mayor and
//! councillor candidates for that place are looked up. Every dependent answer
//! goes through the cascade's tickets, so only the latest pick is applied.

use common::forms::FormPhase;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::{Field, Msg};
pub use state::SurveyScreen;

use crate::services::ScreenProps;

impl Component for SurveyScreen {
    type Message = Msg;
    type Properties = ScreenProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SurveyScreen::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.phase == FormPhase::Idle {
            update::load(self, ctx);
        }
    }
}
