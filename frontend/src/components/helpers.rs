//! Small view and feedback utilities shared by the screens.

use common::error::Error;
use common::model::reference::{LookupItem, Municipality, Uf};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Shows a short notification at the bottom of the page. It removes itself
/// after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    let style = toast.style();
    for (property, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", "rgba(0, 0, 0, 0.8)"),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "4px"),
        ("z-index", "10000"),
        ("font-family", "Arial, sans-serif"),
    ] {
        style.set_property(property, value).ok();
    }

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

/// Generic failure toast for `action` ("salvar o usuário", ...). Local
/// validation failures show their own message.
pub fn show_failure(error: &Error, action: &str) {
    show_toast(&error.alert_message(action));
}

/// Toast for a screen whose reference lists did not all load.
pub fn report_missing(missing: &[&str]) {
    if !missing.is_empty() {
        show_toast(&format!(
            "Não foi possível carregar: {}.",
            missing.join(", ")
        ));
    }
}

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

pub fn checked(e: &Event) -> bool {
    e.target_unchecked_into::<HtmlInputElement>().checked()
}

/// `<option>`s for a lookup list, with a leading empty choice.
pub fn lookup_options(items: &[LookupItem], selected: &str, placeholder: &str) -> Html {
    html! {
        <>
            <option value="" selected={selected.is_empty()}>{ placeholder }</option>
            { for items.iter().map(|item| {
                let value = item.id.to_string();
                let is_selected = value == selected;
                html! { <option {value} selected={is_selected}>{ &item.nome }</option> }
            }) }
        </>
    }
}

pub fn state_options(states: &[Uf], selected: &str) -> Html {
    html! {
        <>
            <option value="" selected={selected.is_empty()}>{ "UF" }</option>
            { for states.iter().map(|uf| html! {
                <option value={uf.sigla.clone()} selected={uf.sigla == selected}>
                    { format!("{} - {}", uf.sigla, uf.nome) }
                </option>
            }) }
        </>
    }
}

pub fn municipality_options(municipalities: &[Municipality], selected: &str) -> Html {
    html! {
        <>
            <option value="" selected={selected.is_empty()}>{ "Município" }</option>
            { for municipalities.iter().map(|m| html! {
                <option value={m.nome.clone()} selected={m.nome == selected}>{ &m.nome }</option>
            }) }
        </>
    }
}

/// Full-screen loading overlay.
pub fn spinner() -> Html {
    html! {
        <div class="overlay">
            <div class="spinner" />
        </div>
    }
}
