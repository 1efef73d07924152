use brandboard_shared::records::{SellerDetails, SellerStatus, SellerUpdate};
use brandboard_shared::{ActionKind, ActionRequest, DisplayState, ListConfig};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::search_box::SearchBox;
use crate::components::skeleton::SkeletonRows;
use crate::components::status_chip::StatusChip;
use crate::hooks::{use_actions, use_list_view};
use crate::utils::format_date;

const PAGE_SIZE: u32 = 10;
const COLS: u32 = 6;

/// Outcome of the detail-dialog fetch, independent of the list
/// controller.
#[derive(Clone, PartialEq)]
enum DetailView {
    Loading,
    Failed(String),
    Ready(Box<SellerDetails>),
}

fn status_from_value(value: &str) -> SellerStatus {
    SellerStatus::ALL
        .into_iter()
        .find(|status| status.as_str() == value)
        .unwrap_or_default()
}

fn edit_input(
    edit: &UseStateHandle<Option<(String, SellerUpdate)>>,
    apply: fn(&mut SellerUpdate, String),
) -> Callback<InputEvent> {
    let edit = edit.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        if let Some((id, mut draft)) = (*edit).clone() {
            apply(&mut draft, input.value());
            edit.set(Some((id, draft)));
        }
    })
}

/// All registered brands with live search, an edit dialog over the full
/// profile, and a read-only sales detail dialog.
#[function_component(BrandsPage)]
pub fn brands_page() -> Html {
    let list = use_list_view(ListConfig::new(PAGE_SIZE), |query| async move {
        crate::api::fetch_sellers(&query).await
    });
    let actions = use_actions(list.refetch.clone());

    // (seller id, staged edits) while the edit dialog is open.
    let edit = use_state(|| None::<(String, SellerUpdate)>);
    // (seller id, fetch outcome) while the detail dialog is open.
    let detail = use_state(|| None::<(String, DetailView)>);

    let close_edit = {
        let edit = edit.clone();
        Callback::from(move |_: ()| edit.set(None))
    };
    let close_detail = {
        let detail = detail.clone();
        Callback::from(move |_: ()| detail.set(None))
    };

    let open_detail = {
        let detail = detail.clone();
        Callback::from(move |id: String| {
            detail.set(Some((id.clone(), DetailView::Loading)));

            let detail = detail.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match crate::api::fetch_seller_details(&id).await {
                    Ok(details) => DetailView::Ready(Box::new(details)),
                    Err(err) => DetailView::Failed(err.user_message()),
                };
                // The dialog may have been closed or reopened for
                // another row in the meantime.
                if detail.as_ref().is_some_and(|(current, _)| *current == id) {
                    detail.set(Some((id, outcome)));
                }
            });
        })
    };

    let save_edit = {
        let actions = actions.clone();
        let edit = edit.clone();
        let close_edit = close_edit.clone();
        Callback::from(move |_: MouseEvent| {
            let Some((id, draft)) = (*edit).clone() else {
                return;
            };
            actions.dispatch(ActionRequest::new(ActionKind::Update, &id), async move {
                crate::api::update_seller(&id, &draft).await
            });
            close_edit.emit(());
        })
    };

    let on_status_change = {
        let edit = edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some((id, mut draft)) = (*edit).clone() {
                draft.status = status_from_value(&select.value());
                edit.set(Some((id, draft)));
            }
        })
    };

    let on_description = {
        let edit = edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            if let Some((id, mut draft)) = (*edit).clone() {
                draft.brand_description = input.value();
                edit.set(Some((id, draft)));
            }
        })
    };

    let body = match list.snapshot.display {
        DisplayState::Loading => html! { <SkeletonRows rows={PAGE_SIZE} cols={COLS} /> },
        DisplayState::Empty => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center", "text-[var(--muted)]")}>
                    { "No brands match this search" }
                </td>
            </tr>
        },
        DisplayState::Failed => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center")}>
                    <span class={classes!("text-red-600", "mr-3")}>{ "Could not load brands" }</span>
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
                let saving = actions.is_inflight(&id, ActionKind::Update);

                let edit_click = {
                    let edit = edit.clone();
                    let seller = seller.clone();
                    Callback::from(move |_| {
                        edit.set(Some((seller.id.clone(), SellerUpdate::from(&seller))));
                    })
                };
                let detail_click = {
                    let open_detail = open_detail.clone();
                    let id = id.clone();
                    Callback::from(move |_| open_detail.emit(id.clone()))
                };

                html! {
                    <tr key={id.clone()} class={classes!("border-t", "border-[var(--border)]")}>
                        <td class={classes!("py-2", "pr-3")}>
                            <div class={classes!("flex", "items-center", "gap-2")}>
                                if let Some(logo) = &seller.logo {
                                    <img
                                        src={logo.url.clone()}
                                        alt=""
                                        class={classes!("w-8", "h-8", "rounded-full", "object-cover")}
                                    />
                                }
                                <span class={classes!("font-medium")}>{ &seller.brand_name }</span>
                            </div>
                        </td>
                        <td class={classes!("py-2", "pr-3")}>{ &seller.email }</td>
                        <td class={classes!("py-2", "pr-3")}>{ &seller.contact_number }</td>
                        <td class={classes!("py-2", "pr-3")}>
                            <StatusChip status={seller.status.as_str()} />
                        </td>
                        <td class={classes!("py-2", "pr-3")}>{ format_date(&seller.created_at) }</td>
                        <td class={classes!("py-2", "pr-3")}>
                            <div class={classes!("flex", "gap-2")}>
                                <button
                                    class={classes!("btn-fluent-secondary", "!px-2", "!py-1", "!text-xs")}
                                    disabled={saving}
                                    onclick={edit_click}
                                >
                                    { if saving { "Saving..." } else { "Edit" } }
                                </button>
                                <button
                                    class={classes!("btn-fluent-secondary", "!px-2", "!py-1", "!text-xs")}
                                    onclick={detail_click}
                                >
                                    { "Details" }
                                </button>
                            </div>
                        </td>
                    </tr>
                }
            }) }
        },
    };

    let field_classes = classes!(
        "mt-1",
        "w-full",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "px-3",
        "py-2",
        "text-sm"
    );

    html! {
        <section
            class={classes!(
                "rounded-[var(--radius)]", "border", "border-[var(--border)]",
                "bg-[var(--surface)]", "p-4"
            )}
        >
            <div class={classes!("flex", "items-center", "justify-between", "gap-3", "mb-4")}>
                <SearchBox
                    placeholder="Search brands..."
                    on_search={list.set_search.clone()}
                />
                <span class={classes!("text-sm", "text-[var(--muted)]")}>
                    { format!("{} brands", list.snapshot.total_items) }
                </span>
            </div>
            <div class={classes!("overflow-x-auto")}>
                <table class={classes!("w-full", "text-left", "text-sm", "border-collapse")}>
                    <thead>
                        <tr class={classes!("text-xs", "uppercase", "tracking-[0.06em]", "text-[var(--muted)]")}>
                            <th class={classes!("py-2", "pr-3")}>{ "Brand" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Email" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Contact" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Status" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Joined" }</th>
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

            if let Some((_, draft)) = (*edit).clone() {
                <Modal title={format!("Edit {}", draft.brand_name)} on_close={close_edit.clone()}>
                    <div class={classes!("flex", "flex-col", "gap-3")}>
                        <label class={classes!("block", "text-sm")}>
                            { "Brand name" }
                            <input
                                class={field_classes.clone()}
                                value={draft.brand_name.clone()}
                                oninput={edit_input(&edit, |d, v| d.brand_name = v)}
                            />
                        </label>
                        <label class={classes!("block", "text-sm")}>
                            { "Contact number" }
                            <input
                                class={field_classes.clone()}
                                value={draft.contact_number.clone()}
                                oninput={edit_input(&edit, |d, v| d.contact_number = v)}
                            />
                        </label>
                        <label class={classes!("block", "text-sm")}>
                            { "Description" }
                            <textarea
                                class={classes!(field_classes.clone(), "min-h-[80px]")}
                                value={draft.brand_description.clone()}
                                oninput={on_description.clone()}
                            />
                        </label>
                        <label class={classes!("block", "text-sm")}>
                            { "Business address" }
                            <input
                                class={field_classes.clone()}
                                value={draft.business_address.clone()}
                                oninput={edit_input(&edit, |d, v| d.business_address = v)}
                            />
                        </label>
                        <label class={classes!("block", "text-sm")}>
                            { "Status" }
                            <select
                                class={field_classes.clone()}
                                onchange={on_status_change.clone()}
                            >
                                { for SellerStatus::ALL.iter().map(|status| html! {
                                    <option
                                        value={status.as_str()}
                                        selected={*status == draft.status}
                                    >
                                        { status.as_str() }
                                    </option>
                                }) }
                            </select>
                        </label>

                        <fieldset class={classes!("border", "border-[var(--border)]", "rounded-lg", "p-3")}>
                            <legend class={classes!("text-xs", "uppercase", "text-[var(--muted)]", "px-1")}>
                                { "Social links" }
                            </legend>
                            <div class={classes!("grid", "grid-cols-2", "gap-2")}>
                                <input
                                    class={field_classes.clone()}
                                    placeholder="Instagram"
                                    value={draft.social_links.instagram.clone()}
                                    oninput={edit_input(&edit, |d, v| d.social_links.instagram = v)}
                                />
                                <input
                                    class={field_classes.clone()}
                                    placeholder="Facebook"
                                    value={draft.social_links.facebook.clone()}
                                    oninput={edit_input(&edit, |d, v| d.social_links.facebook = v)}
                                />
                                <input
                                    class={field_classes.clone()}
                                    placeholder="Twitter"
                                    value={draft.social_links.twitter.clone()}
                                    oninput={edit_input(&edit, |d, v| d.social_links.twitter = v)}
                                />
                                <input
                                    class={field_classes.clone()}
                                    placeholder="LinkedIn"
                                    value={draft.social_links.linkedin.clone()}
                                    oninput={edit_input(&edit, |d, v| d.social_links.linkedin = v)}
                                />
                            </div>
                        </fieldset>

                        <fieldset class={classes!("border", "border-[var(--border)]", "rounded-lg", "p-3")}>
                            <legend class={classes!("text-xs", "uppercase", "text-[var(--muted)]", "px-1")}>
                                { "Bank details" }
                            </legend>
                            <div class={classes!("flex", "flex-col", "gap-2")}>
                                <input
                                    class={field_classes.clone()}
                                    placeholder="Bank name"
                                    value={draft.bank_details.bank_name.clone()}
                                    oninput={edit_input(&edit, |d, v| d.bank_details.bank_name = v)}
                                />
                                <input
                                    class={field_classes.clone()}
                                    placeholder="Account number"
                                    value={draft.bank_details.account_number.clone()}
                                    oninput={edit_input(&edit, |d, v| d.bank_details.account_number = v)}
                                />
                                <input
                                    class={field_classes.clone()}
                                    placeholder="Account holder"
                                    value={draft.bank_details.account_holder_name.clone()}
                                    oninput={edit_input(&edit, |d, v| d.bank_details.account_holder_name = v)}
                                />
                            </div>
                        </fieldset>

                        <div class={classes!("flex", "justify-end", "gap-2")}>
                            <button
                                class={classes!("btn-fluent-secondary", "!px-3", "!py-1.5", "!text-sm")}
                                onclick={close_edit.reform(|_| ())}
                            >
                                { "Cancel" }
                            </button>
                            <button
                                class={classes!("btn-fluent-primary", "!px-3", "!py-1.5", "!text-sm")}
                                onclick={save_edit.clone()}
                            >
                                { "Save changes" }
                            </button>
                        </div>
                    </div>
                </Modal>
            }

            if let Some((_, view)) = (*detail).clone() {
                <Modal title="Brand details" on_close={close_detail.clone()}>
                    { match view {
                        DetailView::Loading => html! { <LoadingSpinner size={SpinnerSize::Small} /> },
                        DetailView::Failed(message) => html! {
                            <p class={classes!("m-0", "text-sm", "text-red-600")}>{ message }</p>
                        },
                        DetailView::Ready(details) => html! { <SellerDetailBody details={*details} /> },
                    } }
                </Modal>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SellerDetailBodyProps {
    details: SellerDetails,
}

#[function_component(SellerDetailBody)]
fn seller_detail_body(props: &SellerDetailBodyProps) -> Html {
    let details = &props.details;
    let seller = &details.seller;

    let product_table = |title: &str, products: &[brandboard_shared::records::ProductSummary]| {
        if products.is_empty() {
            return Html::default();
        }
        html! {
            <div class={classes!("mt-3")}>
                <h4 class={classes!("m-0", "mb-1", "text-xs", "uppercase", "text-[var(--muted)]")}>
                    { title.to_string() }
                </h4>
                <table class={classes!("w-full", "text-left", "text-sm", "border-collapse")}>
                    <tbody>
                        { for products.iter().map(|product| html! {
                            <tr key={product.id.clone()} class={classes!("border-t", "border-[var(--border)]")}>
                                <td class={classes!("py-1.5", "pr-3")}>{ &product.name }</td>
                                <td class={classes!("py-1.5", "pr-3")}>{ crate::utils::format_money(product.price) }</td>
                                <td class={classes!("py-1.5")}>{ format!("{} sold", product.total_sold) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class={classes!("text-sm")}>
            <div class={classes!("flex", "items-center", "gap-2", "mb-2")}>
                <strong>{ &seller.brand_name }</strong>
                <StatusChip status={seller.status.as_str()} />
            </div>
            <p class={classes!("m-0", "text-[var(--muted)]")}>{ &seller.brand_description }</p>
            <p class={classes!("m-0", "mt-2")}>
                { format!("{} products in catalog", details.total_products) }
            </p>
            { product_table("Top sellers", &details.top_products) }
            { product_table("Recently added", &details.recent_products) }
        </div>
    }
}
