use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod download;
mod session;
mod side_sheet;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
