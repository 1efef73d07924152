use brandboard_shared::records::Seller;
use brandboard_shared::{ActionKind, ActionRequest, DisplayState, ListConfig};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::skeleton::SkeletonRows;
use crate::components::status_chip::StatusChip;
use crate::hooks::{use_actions, use_list_view};
use crate::utils::{clip, format_date};

const PAGE_SIZE: u32 = 10;
const COLS: u32 = 6;

/// Pending seller registrations with approve/reject row actions.
/// Rejection requires a reason the applicant will see, collected in a
/// dialog before the mutation dispatches.
#[function_component(RequestsPage)]
pub fn requests_page() -> Html {
    let list = use_list_view(ListConfig::new(PAGE_SIZE), |query| async move {
        crate::api::fetch_pending_sellers(&query).await
    });
    let actions = use_actions(list.refetch.clone());

    let reject_target = use_state(|| None::<Seller>);
    let reject_reason = use_state(String::new);
    let reason_error = use_state(|| false);

    let close_reject = {
        let reject_target = reject_target.clone();
        let reject_reason = reject_reason.clone();
        let reason_error = reason_error.clone();
        Callback::from(move |_: ()| {
            reject_target.set(None);
            reject_reason.set(String::new());
            reason_error.set(false);
        })
    };

    let on_reason = {
        let reject_reason = reject_reason.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            reject_reason.set(input.value());
        })
    };

    let confirm_reject = {
        let actions = actions.clone();
        let reject_target = reject_target.clone();
        let reject_reason = reject_reason.clone();
        let reason_error = reason_error.clone();
        let close_reject = close_reject.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(seller) = (*reject_target).clone() else {
                return;
            };
            let reason = reject_reason.trim().to_string();
            if reason.is_empty() {
                reason_error.set(true);
                return;
            }

            let id = seller.id.clone();
            actions.dispatch(ActionRequest::new(ActionKind::Reject, &id), async move {
                crate::api::reject_seller(&id, &reason).await
            });
            close_reject.emit(());
        })
    };

    let body = match list.snapshot.display {
        DisplayState::Loading => html! { <SkeletonRows rows={PAGE_SIZE} cols={COLS} /> },
        DisplayState::Empty => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center", "text-[var(--muted)]")}>
                    { "No pending brand requests" }
                </td>
            </tr>
        },
        DisplayState::Failed => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center")}>
                    <span class={classes!("text-red-600", "mr-3")}>{ "Could not load brand requests" }</span>
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
            { for list.snapshot.items.iter().map(|seller| {
                let id = seller.id.clone();
                let approving = actions.is_inflight(&id, ActionKind::Approve);
                let row_busy = actions.row_busy(&id);

                let approve_click = {
                    let actions = actions.clone();
                    let id = id.clone();
                    Callback::from(move |_| {
                        let id = id.clone();
                        actions.dispatch(
                            ActionRequest::new(ActionKind::Approve, &id),
                            async move { crate::api::approve_seller(&id).await },
                        );
                    })
                };
                let reject_click = {
                    let reject_target = reject_target.clone();
                    let seller = seller.clone();
                    Callback::from(move |_| reject_target.set(Some(seller.clone())))
                };

                html! {
                    <tr key={id.clone()} class={classes!("border-t", "border-[var(--border)]")}>
                        <td class={classes!("py-2", "pr-3", "font-medium")}>{ &seller.brand_name }</td>
                        <td class={classes!("py-2", "pr-3")}>{ &seller.email }</td>
                        <td class={classes!("py-2", "pr-3")}>{ &seller.contact_number }</td>
                        <td class={classes!("py-2", "pr-3", "text-[var(--muted)]")}>
                            { clip(&seller.brand_description, 60) }
                        </td>
                        <td class={classes!("py-2", "pr-3")}>{ format_date(&seller.created_at) }</td>
                        <td class={classes!("py-2", "pr-3")}>
                            <div class={classes!("flex", "gap-2")}>
                                <button
                                    class={classes!("btn-fluent-primary", "!px-2", "!py-1", "!text-xs")}
                                    disabled={row_busy}
                                    onclick={approve_click}
                                >
                                    { if approving { "Approving..." } else { "Approve" } }
                                </button>
                                <button
                                    class={classes!("btn-fluent-secondary", "!px-2", "!py-1", "!text-xs")}
                                    disabled={row_busy}
                                    onclick={reject_click}
                                >
                                    { "Reject" }
                                </button>
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
                            <th class={classes!("py-2", "pr-3")}>{ "Brand" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Email" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Contact" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Description" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Applied" }</th>
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

            if let Some(seller) = (*reject_target).clone() {
                <Modal
                    title={format!("Reject {}", seller.brand_name)}
                    on_close={close_reject.clone()}
                >
                    <div class={classes!("flex", "flex-col", "gap-3")}>
                        <div class={classes!("flex", "items-center", "gap-2", "text-sm")}>
                            <StatusChip status={seller.status.as_str()} />
                            <span class={classes!("text-[var(--muted)]")}>{ &seller.email }</span>
                        </div>
                        <label class={classes!("block", "text-sm")}>
                            { "Reason (shown to the applicant)" }
                            <textarea
                                class={classes!(
                                    "mt-1", "w-full", "min-h-[90px]", "rounded-lg", "border",
                                    "border-[var(--border)]", "px-3", "py-2", "text-sm"
                                )}
                                value={(*reject_reason).clone()}
                                oninput={on_reason}
                            />
                            if *reason_error {
                                <span class={classes!("block", "mt-1", "text-xs", "text-red-600")}>
                                    { "A rejection reason is required" }
                                </span>
                            }
                        </label>
                        <div class={classes!("flex", "justify-end", "gap-2")}>
                            <button
                                class={classes!("btn-fluent-secondary", "!px-3", "!py-1.5", "!text-sm")}
                                onclick={close_reject.reform(|_| ())}
                            >
                                { "Cancel" }
                            </button>
                            <button
                                class={classes!("btn-fluent-primary", "!px-3", "!py-1.5", "!text-sm")}
                                onclick={confirm_reject}
                            >
                                { "Reject brand" }
                            </button>
                        </div>
                    </div>
                </Modal>
            }
        </section>
    }
}
