//! User form: create, or edit an existing account when an id is given.

use common::forms::{FormMode, FormPhase};
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::{Field, Msg};
pub use state::UserFormScreen;

use crate::services::FormProps;

impl Component for UserFormScreen {
    type Message = Msg;
    type Properties = FormProps;

    fn create(ctx: &Context<Self>) -> Self {
        UserFormScreen::new(FormMode::from_id(ctx.props().id))
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
