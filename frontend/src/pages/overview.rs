use brandboard_shared::records::Insights;
use yew::prelude::*;

use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::components::stats_card::StatsCard;
use crate::utils::format_money;

/// Fetch outcome for the single insights request; the three variants
/// render mutually exclusive screens.
#[derive(Clone, PartialEq)]
enum InsightsView {
    Loading,
    Failed(String),
    Ready(Box<Insights>),
}

/// Platform analytics. A single fetch on mount, no list controller.
#[function_component(OverviewPage)]
pub fn overview_page() -> Html {
    let view = use_state(|| InsightsView::Loading);

    let load = {
        let view = view.clone();
        Callback::from(move |_: ()| {
            view.set(InsightsView::Loading);

            let view = view.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_insights().await {
                    Ok(insights) => view.set(InsightsView::Ready(Box::new(insights))),
                    Err(err) => view.set(InsightsView::Failed(err.user_message())),
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
            || ()
        });
    }

    match (*view).clone() {
        InsightsView::Loading => html! { <LoadingSpinner size={SpinnerSize::Large} /> },
        InsightsView::Failed(message) => html! {
            <div class={classes!("flex", "flex-col", "items-center", "gap-3", "py-12")}>
                <p class={classes!("m-0", "text-red-600")}>{ message }</p>
                <button
                    class={classes!("btn-fluent-secondary", "!px-3", "!py-1.5", "!text-sm")}
                    onclick={load.reform(|_| ())}
                >
                    { "Retry" }
                </button>
            </div>
        },
        InsightsView::Ready(insights) => render_insights(&insights),
    }
}

fn render_insights(insights: &Insights) -> Html {
    let has_data = insights.total_orders > 0
        || insights.total_products > 0
        || insights.total_customers > 0;
    if !has_data {
        return html! {
            <p class={classes!("m-0", "py-12", "text-center", "text-[var(--muted)]")}>
                { "No platform activity recorded yet" }
            </p>
        };
    }

    let max_monthly = insights
        .revenue_data
        .monthly
        .iter()
        .map(|point| point.amount)
        .fold(0.0_f64, f64::max);

    let card_classes = classes!(
        "rounded-[var(--radius)]",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "p-4"
    );

    html! {
        <div class={classes!("flex", "flex-col", "gap-4")}>
            <div class={classes!("grid", "grid-cols-2", "lg:grid-cols-5", "gap-3")}>
                <StatsCard icon="💰" label="Total revenue" value={format_money(insights.total_revenue)} />
                <StatsCard icon="🧾" label="Orders" value={insights.total_orders.to_string()} />
                <StatsCard icon="📦" label="Products" value={insights.total_products.to_string()} />
                <StatsCard icon="👥" label="Customers" value={insights.total_customers.to_string()} />
                <StatsCard
                    icon="🧮"
                    label="Avg. order value"
                    value={format_money(insights.average_order_value())}
                    hint="revenue / orders"
                />
            </div>

            <div class={classes!("grid", "lg:grid-cols-2", "gap-4")}>
                <div class={card_classes.clone()}>
                    <h3 class={classes!("m-0", "mb-3", "text-sm", "uppercase", "tracking-[0.08em]", "text-[var(--muted)]")}>
                        { "Monthly revenue" }
                    </h3>
                    if insights.revenue_data.monthly.is_empty() {
                        <p class={classes!("m-0", "text-sm", "text-[var(--muted)]")}>{ "No revenue yet" }</p>
                    } else {
                        <div class={classes!("flex", "flex-col", "gap-2")}>
                            { for insights.revenue_data.monthly.iter().map(|point| {
                                let share = if max_monthly > 0.0 {
                                    (point.amount / max_monthly * 100.0).clamp(2.0, 100.0)
                                } else {
                                    2.0
                                };
                                html! {
                                    <div key={point.period.clone()} class={classes!("flex", "items-center", "gap-2", "text-sm")}>
                                        <span class={classes!("w-16", "shrink-0", "text-[var(--muted)]")}>
                                            { &point.period }
                                        </span>
                                        <div class={classes!("flex-1", "bg-[var(--surface-alt)]", "rounded", "h-4")}>
                                            <div
                                                class={classes!("h-4", "rounded", "bg-[var(--primary)]")}
                                                style={format!("width: {share:.1}%;")}
                                            />
                                        </div>
                                        <span class={classes!("w-24", "text-right")}>
                                            { format_money(point.amount) }
                                        </span>
                                    </div>
                                }
                            }) }
                        </div>
                    }
                </div>

                <div class={card_classes.clone()}>
                    <h3 class={classes!("m-0", "mb-3", "text-sm", "uppercase", "tracking-[0.08em]", "text-[var(--muted)]")}>
                        { "Products by category" }
                    </h3>
                    <table class={classes!("w-full", "text-left", "text-sm", "border-collapse")}>
                        <tbody>
                            { for insights.product_distribution_by_category.iter().map(|share| html! {
                                <tr key={share.category.clone()} class={classes!("border-t", "border-[var(--border)]")}>
                                    <td class={classes!("py-1.5", "pr-3")}>{ &share.category }</td>
                                    <td class={classes!("py-1.5", "text-right")}>{ share.product_count }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                    <h3 class={classes!("m-0", "mt-4", "mb-3", "text-sm", "uppercase", "tracking-[0.08em]", "text-[var(--muted)]")}>
                        { "Units sold by category" }
                    </h3>
                    <table class={classes!("w-full", "text-left", "text-sm", "border-collapse")}>
                        <tbody>
                            { for insights.product_sales_by_category.iter().map(|sales| html! {
                                <tr key={sales.name.clone()} class={classes!("border-t", "border-[var(--border)]")}>
                                    <td class={classes!("py-1.5", "pr-3")}>{ &sales.name }</td>
                                    <td class={classes!("py-1.5", "text-right")}>{ sales.value }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>

            <div class={card_classes}>
                <h3 class={classes!("m-0", "mb-3", "text-sm", "uppercase", "tracking-[0.08em]", "text-[var(--muted)]")}>
                    { "Top selling products" }
                </h3>
                <table class={classes!("w-full", "text-left", "text-sm", "border-collapse")}>
                    <thead>
                        <tr class={classes!("text-xs", "uppercase", "tracking-[0.06em]", "text-[var(--muted)]")}>
                            <th class={classes!("py-2", "pr-3")}>{ "Product" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Brand" }</th>
                            <th class={classes!("py-2", "pr-3", "text-right")}>{ "Units sold" }</th>
                            <th class={classes!("py-2", "text-right")}>{ "Revenue" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for insights.top_selling_products.iter().map(|product| html! {
                            <tr key={product.name.clone()} class={classes!("border-t", "border-[var(--border)]")}>
                                <td class={classes!("py-2", "pr-3", "font-medium")}>{ &product.name }</td>
                                <td class={classes!("py-2", "pr-3")}>{ &product.brand_name }</td>
                                <td class={classes!("py-2", "pr-3", "text-right")}>{ product.units_sold }</td>
                                <td class={classes!("py-2", "text-right")}>{ format_money(product.revenue) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
