use brandboard_shared::{DisplayState, ListConfig};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::skeleton::SkeletonRows;
use crate::hooks::use_list_view;
use crate::utils::format_date;

const PAGE_SIZE: u32 = 10;
const COLS: u32 = 6;

/// `"★★★★☆"` for a 1-5 rating.
fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

/// Marketplace-wide product reviews. Read-only; filters are staged in
/// the bar and only hit the server on Apply, unlike the live search on
/// other screens.
#[function_component(ReviewsPage)]
pub fn reviews_page() -> Html {
    let list = use_list_view(
        ListConfig::new(PAGE_SIZE)
            .with_filter("replyStatus", "")
            .with_filter("dateFilter", "")
            .with_filter("productName", ""),
        |query| async move { crate::api::fetch_reviews(&query).await },
    );

    // Which review's full comment/reply is expanded under its row.
    let expanded = use_state(|| None::<String>);

    let stage_select = |key: &'static str| {
        let stage_filter = list.stage_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            stage_filter.emit((key.to_string(), select.value()));
        })
    };

    let stage_product_name = {
        let stage_filter = list.stage_filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            stage_filter.emit(("productName".to_string(), input.value()));
        })
    };

    let select_classes = classes!(
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "px-3",
        "py-2",
        "text-sm"
    );

    let body = match list.snapshot.display {
        DisplayState::Loading => html! { <SkeletonRows rows={PAGE_SIZE} cols={COLS} /> },
        DisplayState::Empty => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center", "text-[var(--muted)]")}>
                    { "No reviews match these filters" }
                </td>
            </tr>
        },
        DisplayState::Failed => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center")}>
                    <span class={classes!("text-red-600", "mr-3")}>{ "Could not load reviews" }</span>
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
            { for list.snapshot.items.iter().map(|review| {
                let id = review.id.clone();
                let is_expanded = expanded.as_deref() == Some(id.as_str());

                let toggle = {
                    let expanded = expanded.clone();
                    let id = id.clone();
                    Callback::from(move |_| {
                        if expanded.as_deref() == Some(id.as_str()) {
                            expanded.set(None);
                        } else {
                            expanded.set(Some(id.clone()));
                        }
                    })
                };

                let buyer = review.user.as_ref().map(|u| u.name.as_str()).unwrap_or("-");
                let (product, brand) = review
                    .product
                    .as_ref()
                    .map(|p| {
                        let brand = p
                            .seller
                            .as_ref()
                            .map(|b| b.brand_name.as_str())
                            .unwrap_or("-");
                        (p.name.as_str(), brand)
                    })
                    .unwrap_or(("-", "-"));

                html! {
                    <>
                        <tr key={id.clone()} class={classes!("border-t", "border-[var(--border)]")}>
                            <td class={classes!("py-2", "pr-3")}>{ product }</td>
                            <td class={classes!("py-2", "pr-3")}>{ brand }</td>
                            <td class={classes!("py-2", "pr-3")}>{ buyer }</td>
                            <td class={classes!("py-2", "pr-3", "text-amber-500")}>
                                { rating_stars(review.rating) }
                            </td>
                            <td class={classes!("py-2", "pr-3")}>
                                { if review.has_reply() { "Replied" } else { "Not replied" } }
                            </td>
                            <td class={classes!("py-2", "pr-3")}>
                                <div class={classes!("flex", "items-center", "gap-3")}>
                                    <span>{ format_date(&review.created_at) }</span>
                                    <button
                                        class={classes!("text-[var(--primary)]", "underline", "text-xs")}
                                        onclick={toggle}
                                    >
                                        { if is_expanded { "Hide" } else { "View" } }
                                    </button>
                                </div>
                            </td>
                        </tr>
                        if is_expanded {
                            <tr key={format!("{id}-detail")}>
                                <td colspan={COLS.to_string()} class={classes!("py-3", "pr-3", "bg-[var(--surface-alt)]")}>
                                    <p class={classes!("m-0", "text-sm")}>{ &review.comment }</p>
                                    if let Some(reply) = &review.seller_reply {
                                        if !reply.text.is_empty() {
                                            <p class={classes!("m-0", "mt-2", "text-sm", "text-[var(--muted)]")}>
                                                { format!("Brand reply: {}", reply.text) }
                                            </p>
                                        }
                                    }
                                </td>
                            </tr>
                        }
                    </>
                }
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
            <div class={classes!("flex", "flex-wrap", "items-center", "gap-2", "mb-4")}>
                <select
                    class={select_classes.clone()}
                    onchange={stage_select("replyStatus")}
                >
                    <option value="" selected={list.snapshot.staged_value("replyStatus").is_empty()}>
                        { "Any reply status" }
                    </option>
                    <option value="replied" selected={list.snapshot.staged_value("replyStatus") == "replied"}>
                        { "Replied" }
                    </option>
                    <option value="not replied" selected={list.snapshot.staged_value("replyStatus") == "not replied"}>
                        { "Not replied" }
                    </option>
                </select>
                <select
                    class={select_classes.clone()}
                    onchange={stage_select("dateFilter")}
                >
                    <option value="" selected={list.snapshot.staged_value("dateFilter").is_empty()}>
                        { "Any time" }
                    </option>
                    <option value="thisWeek" selected={list.snapshot.staged_value("dateFilter") == "thisWeek"}>
                        { "This week" }
                    </option>
                    <option value="thisMonth" selected={list.snapshot.staged_value("dateFilter") == "thisMonth"}>
                        { "This month" }
                    </option>
                    <option value="lastMonth" selected={list.snapshot.staged_value("dateFilter") == "lastMonth"}>
                        { "Last month" }
                    </option>
                </select>
                <input
                    class={select_classes}
                    placeholder="Product name"
                    value={list.snapshot.staged_value("productName").to_string()}
                    oninput={stage_product_name}
                />
                <button
                    class={classes!("btn-fluent-primary", "!px-3", "!py-1.5", "!text-sm")}
                    onclick={list.apply_filters.reform(|_| ())}
                >
                    { "Apply" }
                </button>
                <button
                    class={classes!("btn-fluent-secondary", "!px-3", "!py-1.5", "!text-sm")}
                    onclick={list.clear_filters.reform(|_| ())}
                >
                    { "Clear" }
                </button>
            </div>
            <div class={classes!("overflow-x-auto")}>
                <table class={classes!("w-full", "text-left", "text-sm", "border-collapse")}>
                    <thead>
                        <tr class={classes!("text-xs", "uppercase", "tracking-[0.06em]", "text-[var(--muted)]")}>
                            <th class={classes!("py-2", "pr-3")}>{ "Product" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Brand" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Buyer" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Rating" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Reply" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Posted" }</th>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_render_filled_and_empty() {
        assert_eq!(rating_stars(0), "☆☆☆☆☆");
        assert_eq!(rating_stars(3), "★★★☆☆");
        assert_eq!(rating_stars(5), "★★★★★");
        // Out-of-range ratings clamp instead of panicking.
        assert_eq!(rating_stars(9), "★★★★★");
    }
}
