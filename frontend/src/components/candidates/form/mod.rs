//! Candidate form: create, or edit when an id is given.
//!
//! Mount fires the reference lists and, in edit mode, the full record in
//! parallel. The record fills every field; its state triggers the
//! municipality list through the geography cascade.

use common::forms::{FormMode, FormPhase};
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::{Field, Msg};
pub use state::CandidateFormScreen;

use crate::services::FormProps;

impl Component for CandidateFormScreen {
    type Message = Msg;
    type Properties = FormProps;

    fn create(ctx: &Context<Self>) -> Self {
        CandidateFormScreen::new(FormMode::from_id(ctx.props().id))
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
