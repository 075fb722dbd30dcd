use crate::app::App;

mod app;
mod attachments;
mod components;
mod helpers;
mod logging;
mod pages;
mod routes;
mod storage;

fn main() {
    logging::init();
    storage::init();
    yew::Renderer::<App>::new().render();
}
