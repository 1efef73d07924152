use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::{DashboardTab, Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("flex", "flex-col", "items-center", "justify-center", "min-h-screen", "gap-3")}>
            <h2 class={classes!("m-0", "text-2xl", "font-bold")}>{ "404 - Page not found" }</h2>
            <p class={classes!("m-0", "text-[var(--muted)]")}>
                { "The page you are looking for does not exist." }
            </p>
            <Link<Route> to={DashboardTab::Overview.route()} classes={classes!("text-[var(--primary)]", "underline")}>
                { "Back to the dashboard" }
            </Link<Route>>
        </main>
    }
}
