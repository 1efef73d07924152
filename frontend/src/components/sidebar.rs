use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::PLATFORM_NAME;
use crate::router::{DashboardTab, Route};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: DashboardTab,
}

/// Dashboard navigation rail; the current route's tab is highlighted.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside
            class={classes!(
                "w-60", "shrink-0", "border-r", "border-[var(--border)]",
                "bg-[var(--surface)]", "flex", "flex-col", "min-h-screen"
            )}
        >
            <div class={classes!("px-4", "py-5", "border-b", "border-[var(--border)]")}>
                <span class={classes!("text-lg", "font-bold")}>{ PLATFORM_NAME }</span>
            </div>
            <nav class={classes!("flex", "flex-col", "gap-1", "p-3")} aria-label="Dashboard sections">
                { for DashboardTab::ALL.iter().map(|tab| {
                    let is_active = *tab == props.active;
                    html! {
                        <Link<Route>
                            key={tab.slug()}
                            to={tab.route()}
                            classes={classes!(
                                "flex", "items-center", "gap-2", "rounded-lg", "px-3", "py-2",
                                "text-sm", "transition-colors",
                                if is_active {
                                    "bg-[var(--primary)] text-white font-semibold"
                                } else {
                                    "text-[var(--muted)] hover:bg-[var(--surface-alt)] hover:text-[var(--text)]"
                                }
                            )}
                        >
                            <span aria-hidden="true">{ tab.icon() }</span>
                            <span>{ tab.label() }</span>
                        </Link<Route>>
                    }
                }) }
            </nav>
        </aside>
    }
}
