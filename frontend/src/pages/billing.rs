use brandboard_shared::{DisplayState, ListConfig};
use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::search_box::SearchBox;
use crate::components::skeleton::SkeletonRows;
use crate::hooks::use_list_view;

const PAGE_SIZE: u32 = 10;
const COLS: u32 = 4;

/// Payout details per brand. Read-only with live search.
#[function_component(BillingPage)]
pub fn billing_page() -> Html {
    let list = use_list_view(ListConfig::new(PAGE_SIZE), |query| async move {
        crate::api::fetch_billing(&query).await
    });

    let body = match list.snapshot.display {
        DisplayState::Loading => html! { <SkeletonRows rows={PAGE_SIZE} cols={COLS} /> },
        DisplayState::Empty => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center", "text-[var(--muted)]")}>
                    { "No billing records match this search" }
                </td>
            </tr>
        },
        DisplayState::Failed => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center")}>
                    <span class={classes!("text-red-600", "mr-3")}>{ "Could not load billing records" }</span>
                    <button
                        class={classes!("btn-fluent-secondary", "!px-3", "!py-1", "!text-xs")}
                        onclick={list.refetch.reform(|_| ())}
                    >
                        { "Retry" }
                    </button>
                </td>
            </tr>
        },
        DisplayState::Populated => html! {
            { for list.snapshot.items.iter().map(|record| html! {
                <tr key={record.id.clone()} class={classes!("border-t", "border-[var(--border)]")}>
                    <td class={classes!("py-2", "pr-3")}>
                        <div class={classes!("flex", "items-center", "gap-2")}>
                            if let Some(logo) = &record.logo {
                                <img
                                    src={logo.url.clone()}
                                    alt=""
                                    class={classes!("w-8", "h-8", "rounded-full", "object-cover")}
                                />
                            }
                            <span class={classes!("font-medium")}>{ &record.brand_name }</span>
                        </div>
                    </td>
                    <td class={classes!("py-2", "pr-3")}>{ &record.bank_details.bank_name }</td>
                    <td class={classes!("py-2", "pr-3", "font-mono")}>{ &record.bank_details.account_number }</td>
                    <td class={classes!("py-2", "pr-3")}>{ &record.bank_details.account_holder_name }</td>
                </tr>
            }) }
        },
    };

    html! {
        <section
            class={classes!(
                "rounded-[var(--radius)]", "border", "border-[var(--border)]",
                "bg-[var(--surface)]", "p-4"
            )}
        >
            <div class={classes!("flex", "items-center", "justify-between", "gap-3", "mb-4")}>
                <SearchBox
                    placeholder="Search by brand..."
                    on_search={list.set_search.clone()}
                />
                <span class={classes!("text-sm", "text-[var(--muted)]")}>
                    { format!("{} records", list.snapshot.total_items) }
                </span>
            </div>
            <div class={classes!("overflow-x-auto")}>
                <table class={classes!("w-full", "text-left", "text-sm", "border-collapse")}>
                    <thead>
                        <tr class={classes!("text-xs", "uppercase", "tracking-[0.06em]", "text-[var(--muted)]")}>
                            <th class={classes!("py-2", "pr-3")}>{ "Brand" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Bank" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Account number" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Account holder" }</th>
                        </tr>
                    </thead>
                    <tbody>{ body }</tbody>
                </table>
            </div>
            <Pagination
                current_page={list.snapshot.page}
                total_pages={list.snapshot.total_pages}
                on_page_change={list.set_page.clone()}
            />
        </section>
    }
}
