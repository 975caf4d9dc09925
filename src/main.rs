mod app;
mod config;
mod contact;
#[cfg(target_arch = "wasm32")]
mod dom;
mod error;
mod gallery;
mod grid;
mod router;
mod video;

fn main() {
    dioxus::launch(app::App);
}
