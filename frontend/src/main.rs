//! Back-office frontend application entry point.

mod api;
mod components;
mod config;
/// Reusable Yew hooks for list state and async actions.
pub mod hooks;
mod pages;
mod router;
mod session;
mod toast;
mod utils;

use yew::prelude::*;

use crate::session::SessionProvider;
use crate::toast::ToastProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <ToastProvider>
            <SessionProvider>
                <router::AppRouter />
            </SessionProvider>
        </ToastProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
