use crate::app::App;

mod app;
mod components;
mod logging;
mod services;
mod storage;
mod tops_sheet;
mod transport;

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
