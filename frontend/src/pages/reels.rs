use brandboard_shared::{DisplayState, ListConfig};
use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::skeleton::SkeletonRows;
use crate::hooks::use_list_view;
use crate::utils::{clip, format_date};

// Reels carry video previews, so the page is kept short.
const PAGE_SIZE: u32 = 5;
const COLS: u32 = 5;

/// Promo reels uploaded by brands. Read-only.
#[function_component(ReelsPage)]
pub fn reels_page() -> Html {
    let list = use_list_view(ListConfig::new(PAGE_SIZE), |query| async move {
        crate::api::fetch_reels(&query).await
    });

    let body = match list.snapshot.display {
        DisplayState::Loading => html! { <SkeletonRows rows={PAGE_SIZE} cols={COLS} /> },
        DisplayState::Empty => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center", "text-[var(--muted)]")}>
                    { "No reels uploaded yet" }
                </td>
            </tr>
        },
        DisplayState::Failed => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center")}>
                    <span class={classes!("text-red-600", "mr-3")}>{ "Could not load reels" }</span>
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
            { for list.snapshot.items.iter().map(|reel| {
                let brand = reel
                    .uploaded_by
                    .as_ref()
                    .map(|b| b.brand_name.as_str())
                    .unwrap_or("-");

                html! {
                    <tr key={reel.id.clone()} class={classes!("border-t", "border-[var(--border)]")}>
                        <td class={classes!("py-2", "pr-3")}>
                            <video
                                src={reel.video_url.clone()}
                                controls=true
                                preload="metadata"
                                class={classes!("w-40", "rounded-lg")}
                            />
                        </td>
                        <td class={classes!("py-2", "pr-3")}>{ clip(&reel.caption, 80) }</td>
                        <td class={classes!("py-2", "pr-3")}>{ &reel.product_name }</td>
                        <td class={classes!("py-2", "pr-3")}>{ brand }</td>
                        <td class={classes!("py-2", "pr-3")}>
                            <div class={classes!("flex", "flex-col")}>
                                <span>{ format!("{} likes", reel.likes) }</span>
                                <span class={classes!("text-xs", "text-[var(--muted)]")}>
                                    { format_date(&reel.created_at) }
                                </span>
                            </div>
                        </td>
                    </tr>
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
            <div class={classes!("overflow-x-auto")}>
                <table class={classes!("w-full", "text-left", "text-sm", "border-collapse")}>
                    <thead>
                        <tr class={classes!("text-xs", "uppercase", "tracking-[0.06em]", "text-[var(--muted)]")}>
                            <th class={classes!("py-2", "pr-3")}>{ "Video" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Caption" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Product" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Brand" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Engagement" }</th>
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
