//! Sliding sheet used for read-only detail panels.
//!
//! The sheet is always mounted; `open_top_sheet`/`close_top_sheet` toggle its
//! `show` class. Opening is deferred a few milliseconds so the content
//! rendered in the same update is already in place when the transition runs.

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

const SHOW_CLASS: &str = "show";

pub struct YwMaterialTopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    Timeout::new(50, move || {
        if let Some(sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
            sheet.class_list().add_1(SHOW_CLASS).ok();
        }
    })
    .forget();
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    if let Some(sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        sheet.class_list().remove_1(SHOW_CLASS).ok();
    }
}
