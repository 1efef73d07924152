use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::pages;
use crate::session::use_session;

/// Screens reachable from the dashboard sidebar.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DashboardTab {
    Overview,
    Requests,
    Brands,
    Reviews,
    Reels,
    Billing,
    Disputes,
    Admins,
    Categories,
    Settings,
}

impl DashboardTab {
    /// Sidebar order.
    pub const ALL: [DashboardTab; 10] = [
        DashboardTab::Overview,
        DashboardTab::Requests,
        DashboardTab::Brands,
        DashboardTab::Reviews,
        DashboardTab::Reels,
        DashboardTab::Billing,
        DashboardTab::Disputes,
        DashboardTab::Admins,
        DashboardTab::Categories,
        DashboardTab::Settings,
    ];

    /// URL segment under `/dashboard/`.
    pub fn slug(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Requests => "requests",
            DashboardTab::Brands => "brands",
            DashboardTab::Reviews => "reviews",
            DashboardTab::Reels => "reels",
            DashboardTab::Billing => "billing",
            DashboardTab::Disputes => "disputes",
            DashboardTab::Admins => "admins",
            DashboardTab::Categories => "categories",
            DashboardTab::Settings => "settings",
        }
    }

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Requests => "Brand Requests",
            DashboardTab::Brands => "Brands",
            DashboardTab::Reviews => "Reviews",
            DashboardTab::Reels => "Reels",
            DashboardTab::Billing => "Billing",
            DashboardTab::Disputes => "Support & Disputes",
            DashboardTab::Admins => "Admins",
            DashboardTab::Categories => "Categories",
            DashboardTab::Settings => "Settings",
        }
    }

    /// Icon glyph shown next to the label.
    pub fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "📊",
            DashboardTab::Requests => "📥",
            DashboardTab::Brands => "🏷️",
            DashboardTab::Reviews => "⭐",
            DashboardTab::Reels => "🎬",
            DashboardTab::Billing => "💳",
            DashboardTab::Disputes => "🎧",
            DashboardTab::Admins => "🛡️",
            DashboardTab::Categories => "🗂️",
            DashboardTab::Settings => "⚙️",
        }
    }

    /// Unknown slugs fall back to the overview.
    pub fn from_slug(slug: &str) -> DashboardTab {
        DashboardTab::ALL
            .into_iter()
            .find(|tab| tab.slug() == slug)
            .unwrap_or(DashboardTab::Overview)
    }

    /// Route for this tab.
    pub fn route(&self) -> Route {
        Route::Dashboard {
            tab: self.slug().to_string(),
        }
    }
}

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/login")]
    Login,

    #[at("/dashboard/:tab")]
    Dashboard { tab: String },

    #[at("/")]
    Home,

    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct GateProps {
    children: Children,
}

/// Renders children only with a live session; otherwise bounces to the
/// login page. While the cookie check is still in flight nothing is
/// decided yet, so a full-page spinner holds the screen.
#[function_component(RequireSession)]
fn require_session(props: &GateProps) -> Html {
    let session = use_session();

    if session.is_restoring() {
        return html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen=true /> };
    }
    if !session.is_signed_in() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }
    html! { <>{ props.children.clone() }</> }
}

/// Inverse gate for the login page: a signed-in admin lands on the
/// dashboard instead.
#[function_component(RequireAnonymous)]
fn require_anonymous(props: &GateProps) -> Html {
    let session = use_session();

    if session.is_restoring() {
        return html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen=true /> };
    }
    if session.is_signed_in() {
        return html! { <Redirect<Route> to={DashboardTab::Overview.route()} /> };
    }
    html! { <>{ props.children.clone() }</> }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! {
            <RequireAnonymous>
                <pages::login::LoginPage />
            </RequireAnonymous>
        },
        Route::Dashboard { tab } => {
            let tab = DashboardTab::from_slug(&tab);
            html! {
                <RequireSession>
                    <pages::dashboard::DashboardPage {tab} />
                </RequireSession>
            }
        }
        Route::Home => html! { <Redirect<Route> to={DashboardTab::Overview.route()} /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_slug_round_trips() {
        for tab in DashboardTab::ALL {
            assert_eq!(DashboardTab::from_slug(tab.slug()), tab);
        }
    }

    #[test]
    fn unknown_slug_falls_back_to_overview() {
        assert_eq!(DashboardTab::from_slug("payroll"), DashboardTab::Overview);
        assert_eq!(DashboardTab::from_slug(""), DashboardTab::Overview);
    }
}
