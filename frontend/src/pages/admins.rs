use brandboard_shared::records::Credentials;
use brandboard_shared::{ActionKind, ActionRequest, DisplayState, ListConfig};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::skeleton::SkeletonRows;
use crate::hooks::{use_actions, use_list_view};
use crate::session::use_session;
use crate::utils::{format_date, is_valid_email, MIN_PASSWORD_LEN};

const PAGE_SIZE: u32 = 10;
const COLS: u32 = 3;

/// Console operator accounts, with a create form above the table.
/// Creation uses the same local validation as login.
#[function_component(AdminsPage)]
pub fn admins_page() -> Html {
    let session = use_session();
    let list = use_list_view(ListConfig::new(PAGE_SIZE), |query| async move {
        crate::api::fetch_admins(&query).await
    });
    let actions = use_actions(list.refetch.clone());

    let email = use_state(String::new);
    let password = use_state(String::new);
    let form_error = use_state(|| None::<&'static str>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let creating = actions.is_inflight("", ActionKind::Create);

    let onsubmit = {
        let actions = actions.clone();
        let email = email.clone();
        let password = password.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_value = email.trim().to_string();
            if !is_valid_email(&email_value) {
                form_error.set(Some("Enter a valid email address"));
                return;
            }
            if password.len() < MIN_PASSWORD_LEN {
                form_error.set(Some("Password must be at least 6 characters"));
                return;
            }
            form_error.set(None);

            let credentials = Credentials {
                email: email_value,
                password: (*password).clone(),
            };
            let email = email.clone();
            let password = password.clone();
            actions.dispatch(ActionRequest::create(), async move {
                let message = crate::api::create_admin(&credentials).await?;
                email.set(String::new());
                password.set(String::new());
                Ok(message)
            });
        })
    };

    let current_id = session.current().map(|account| account.id);

    let body = match list.snapshot.display {
        DisplayState::Loading => html! { <SkeletonRows rows={PAGE_SIZE} cols={COLS} /> },
        DisplayState::Empty => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center", "text-[var(--muted)]")}>
                    { "No admin accounts" }
                </td>
            </tr>
        },
        DisplayState::Failed => html! {
            <tr>
                <td colspan={COLS.to_string()} class={classes!("py-8", "text-center")}>
                    <span class={classes!("text-red-600", "mr-3")}>{ "Could not load admins" }</span>
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
            { for list.snapshot.items.iter().map(|admin| {
                let is_me = current_id.as_deref() == Some(admin.id.as_str());
                html! {
                    <tr key={admin.id.clone()} class={classes!("border-t", "border-[var(--border)]")}>
                        <td class={classes!("py-2", "pr-3", "font-medium")}>{ &admin.email }</td>
                        <td class={classes!("py-2", "pr-3")}>{ format_date(&admin.created_at) }</td>
                        <td class={classes!("py-2", "pr-3", "text-[var(--muted)]")}>
                            { if is_me { "You" } else { "" } }
                        </td>
                    </tr>
                }
            }) }
        },
    };

    let field_classes = classes!(
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
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
            <form class={classes!("flex", "flex-wrap", "items-end", "gap-2", "mb-4")} {onsubmit}>
                <label class={classes!("block", "text-sm")}>
                    { "Email" }
                    <input
                        type="email"
                        class={classes!(field_classes.clone(), "mt-1", "block")}
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                </label>
                <label class={classes!("block", "text-sm")}>
                    { "Password" }
                    <input
                        type="password"
                        class={classes!(field_classes, "mt-1", "block")}
                        value={(*password).clone()}
                        oninput={on_password}
                        autocomplete="new-password"
                    />
                </label>
                <button
                    type="submit"
                    class={classes!("btn-fluent-primary", "!px-3", "!py-2", "!text-sm")}
                    disabled={creating}
                >
                    { if creating { "Creating..." } else { "Add admin" } }
                </button>
                if let Some(message) = *form_error {
                    <span class={classes!("text-xs", "text-red-600")}>{ message }</span>
                }
            </form>
            <div class={classes!("overflow-x-auto")}>
                <table class={classes!("w-full", "text-left", "text-sm", "border-collapse")}>
                    <thead>
                        <tr class={classes!("text-xs", "uppercase", "tracking-[0.06em]", "text-[var(--muted)]")}>
                            <th class={classes!("py-2", "pr-3")}>{ "Email" }</th>
                            <th class={classes!("py-2", "pr-3")}>{ "Created" }</th>
                            <th class={classes!("py-2", "pr-3")}></th>
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
