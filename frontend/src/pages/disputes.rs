use brandboard_shared::records::{Dispute, DisputeParty, DisputeStatus};
use brandboard_shared::{ActionKind, ActionRequest, DisplayState, ListConfig};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::skeleton::SkeletonRows;
use crate::components::status_chip::StatusChip;
use crate::hooks::{use_actions, use_list_view};
use crate::utils::clip;

const PAGE_SIZE: u32 = 10;
const COLS: u32 = 5;

/// Support tickets from sellers and buyers. The party tabs drive the
/// `fromType` filter; switching a tab commits it immediately. A detail
/// dialog shows the full message and lets the admin move the ticket
/// between pending and resolved.
#[function_component(DisputesPage)]
pub fn disputes_page() -> Html {
    let list = use_list_view(
        ListConfig::new(PAGE_SIZE).with_filter("fromType", DisputeParty::Seller.as_str()),
        |query| async move { crate::api::fetch_disputes(&query).await },
    );
    let actions = use_actions(list.refetch.clone());

    // (ticket, staged status) while the detail dialog is open.
    let detail = use_state(|| None::<(Dispute, DisputeStatus)>);

    let close_detail = {
        let detail = detail.clone();
        Callback::from(move |_: ()| detail.set(None))
    };

    let select_tab = |party: DisputeParty| {
        let stage_filter = list.stage_filter.clone();
        let apply_filters = list.apply_filters.clone();
        Callback::from(move |_: MouseEvent| {
            stage_filter.emit(("fromType".to_string(), party.as_str().to_string()));
            apply_filters.emit(());
        })
    };

    let on_status_change = {
        let detail = detail.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some((dispute, _)) = (*detail).clone() {
                let staged = if select.value() == "resolved" {
                    DisputeStatus::Resolved
                } else {
                    DisputeStatus::Pending
                };
                detail.set(Some((dispute, staged)));
            }
        })
    };

    let save_status = {
        let actions = actions.clone();
        let detail = detail.clone();
        let close_detail = close_detail.clone();
        Callback::from(move |_: MouseEvent| {
            let Some((dispute, staged)) = (*detail).clone() else {
                return;
            };
            let id = dispute.id.clone();
            actions.dispatch(ActionRequest::new(ActionKind::Update, &id), async move {
                crate::api::update_dispute_status(&id, staged).await
            });
            close_detail.emit(());
        })
    };

    let active_party = if list.snapshot.filter_value("fromType") == DisputeParty::Buyer.as_str() {
        DisputeParty::Buyer
    } else {
        DisputeParty::Seller
    };

    // Last-known total per tab; the inactive tab keeps showing the count
    // from its last visit instead of dropping it.
    let seller_count = use_state(|| None::<u64>);
    let buyer_count = use_state(|| None::<u64>);
    {
        let seller_count = seller_count.clone();
        let buyer_count = buyer_count.clone();
        let settled = matches!(
            list.snapshot.display,
            DisplayState::Empty | DisplayState::Populated
        );
        let total = list.snapshot.total_items;
        use_effect_with(
            (active_party, total, settled),
            move |(party, total, settled)| {
                if *settled {
                    match party {
                        DisputeParty::Seller => seller_count.set(Some(*total)),
                        DisputeParty::Buyer => buyer_count.set(Some(*total)),
                    }
                }
                || ()
            },
        );
    }

    let body = match list.snapshot.display {
        DisplayState::Loading => html! { <SkeletonRows rows={PAGE_SIZE} cols={COLS} /> },
        DisplayState::Empty => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center", "text-[var(--muted)]")}>
                    { "No tickets from this side of the marketplace" }
                </td>
            </tr>
        },
        DisplayState::Failed => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center")}>
                    <span class={classes!("text-red-600", "mr-3")}>{ "Could not load tickets" }</span>
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
            { for list.snapshot.items.iter().map(|dispute| {
                let contact = dispute
                    .from
                    .as_ref()
                    .map(|c| c.email.as_str())
                    .unwrap_or("-");
                let updating = actions.is_inflight(&dispute.id, ActionKind::Update);

                let open_click = {
                    let detail = detail.clone();
                    let dispute = dispute.clone();
                    Callback::from(move |_| {
                        detail.set(Some((dispute.clone(), dispute.status)));
                    })
                };

                html! {
                    <tr key={dispute.id.clone()} class={classes!("border-t", "border-[var(--border)]")}>
                        <td class={classes!("py-2", "pr-3", "font-medium")}>{ &dispute.subject }</td>
                        <td class={classes!("py-2", "pr-3", "text-[var(--muted)]")}>
                            { clip(&dispute.message, 60) }
                        </td>
                        <td class={classes!("py-2", "pr-3")}>{ contact }</td>
                        <td class={classes!("py-2", "pr-3")}>
                            <StatusChip status={dispute.status.as_str()} />
                        </td>
                        <td class={classes!("py-2", "pr-3")}>
                            <button
                                class={classes!("btn-fluent-secondary", "!px-2", "!py-1", "!text-xs")}
                                disabled={updating}
                                onclick={open_click}
                            >
                                { if updating { "Updating..." } else { "Open" } }
                            </button>
                        </td>
                    </tr>
                }
            }) }
        },
    };

    let tab_classes = |party: DisputeParty| {
        classes!(
            "px-4",
            "py-2",
            "rounded-lg",
            "text-sm",
            "font-semibold",
            "transition-colors",
            if party == active_party {
                "bg-[var(--primary)] text-white"
            } else {
                "text-[var(--muted)] hover:bg-[var(--surface-alt)]"
            }
        )
    };

    html! {
        <section
            class={classes!(
                "rounded-[var(--radius)]", "border", "border-[var(--border)]",
                "bg-[var(--surface)]", "p-4"
            )}
        >
            <div class={classes!("flex", "items-center", "gap-2", "mb-4")}>
                <button class={tab_classes(DisputeParty::Seller)} onclick={select_tab(DisputeParty::Seller)}>
                    { tab_caption("From sellers", *seller_count) }
                </button>
                <button class={tab_classes(DisputeParty::Buyer)} onclick={select_tab(DisputeParty::Buyer)}>
                    { tab_caption("From buyers", *buyer_count) }
                </button>
            </div>
            <div class={classes!("overflow-x-auto")}>
                <table class={classes!("w-full", "text-left", "text-sm", "border-collapse")}>
                    <thead>
                        <tr class={classes!("text-xs", "uppercase", "tracking-[0.06em]", "text-[var(--muted)]")}>
                            <th class={classes!("py-2", "pr-3")}>{ "Subject" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Message" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Contact" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Status" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Actions" }</th>
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

            if let Some((dispute, staged)) = (*detail).clone() {
                <Modal title={dispute.subject.clone()} on_close={close_detail.clone()}>
                    <div class={classes!("flex", "flex-col", "gap-3", "text-sm")}>
                        <p class={classes!("m-0", "whitespace-pre-wrap")}>{ &dispute.message }</p>
                        if let Some(contact) = &dispute.from {
                            <p class={classes!("m-0", "text-[var(--muted)]")}>
                                { format!("Contact: {}", contact.email) }
                            </p>
                        }
                        <label class={classes!("block")}>
                            { "Status" }
                            <select
                                class={classes!(
                                    "mt-1", "w-full", "rounded-lg", "border",
                                    "border-[var(--border)]", "px-3", "py-2", "text-sm"
                                )}
                                onchange={on_status_change.clone()}
                            >
                                <option value="pending" selected={staged == DisputeStatus::Pending}>
                                    { "pending" }
                                </option>
                                <option value="resolved" selected={staged == DisputeStatus::Resolved}>
                                    { "resolved" }
                                </option>
                            </select>
                        </label>
                        <div class={classes!("flex", "justify-end", "gap-2")}>
                            <button
                                class={classes!("btn-fluent-secondary", "!px-3", "!py-1.5", "!text-sm")}
                                onclick={close_detail.reform(|_| ())}
                            >
                                { "Cancel" }
                            </button>
                            <button
                                class={classes!("btn-fluent-primary", "!px-3", "!py-1.5", "!text-sm")}
                                disabled={staged == dispute.status}
                                onclick={save_status.clone()}
                            >
                                { "Save status" }
                            </button>
                        </div>
                    </div>
                </Modal>
            }
        </section>
    }
}

/// `"From sellers (12)"` once the tab's total is known, the bare label
/// before its first load settles.
fn tab_caption(label: &str, count: Option<u64>) -> String {
    match count {
        Some(n) => format!("{label} ({n})"),
        None => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_caption_appends_count_once_known() {
        assert_eq!(tab_caption("From sellers", None), "From sellers");
        assert_eq!(tab_caption("From buyers", Some(0)), "From buyers (0)");
        assert_eq!(tab_caption("From sellers", Some(12)), "From sellers (12)");
    }
}
