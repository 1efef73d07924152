use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::pages;
use crate::router::DashboardTab;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub tab: DashboardTab,
}

/// Dashboard shell: sidebar, navbar, and the active screen. Each screen
/// owns its own list controller; switching tabs unmounts the old one.
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let screen = match props.tab {
        DashboardTab::Overview => html! { <pages::overview::OverviewPage /> },
        DashboardTab::Requests => html! { <pages::requests::RequestsPage /> },
        DashboardTab::Brands => html! { <pages::brands::BrandsPage /> },
        DashboardTab::Reviews => html! { <pages::reviews::ReviewsPage /> },
        DashboardTab::Reels => html! { <pages::reels::ReelsPage /> },
        DashboardTab::Billing => html! { <pages::billing::BillingPage /> },
        DashboardTab::Disputes => html! { <pages::disputes::DisputesPage /> },
        DashboardTab::Admins => html! { <pages::admins::AdminsPage /> },
        DashboardTab::Categories => html! { <pages::categories::CategoriesPage /> },
        DashboardTab::Settings => html! { <pages::settings::SettingsPage /> },
    };

    html! {
        <div class={classes!("flex", "min-h-screen", "bg-[var(--bg)]")}>
            <Sidebar active={props.tab} />
            <div class={classes!("flex-1", "flex", "flex-col", "min-w-0")}>
                <Navbar title={props.tab.label()} />
                <main class={classes!("flex-1", "p-6")} key={props.tab.slug()}>
                    { screen }
                </main>
            </div>
        </div>
    }
}
