use brandboard_shared::records::{AdminAccount, CredentialsUpdate};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::components::modal::Modal;
use crate::session::use_session;
use crate::toast::use_toasts;
use crate::utils::{format_date, is_valid_email, MIN_PASSWORD_LEN};

#[derive(Clone, Copy, PartialEq, Eq)]
enum EditField {
    Email,
    Password,
}

/// Account settings for the signed-in admin. Email and password change
/// through separate dialogs; a confirmed change re-fetches the account
/// so the screen (and the navbar identity) reflect what the server
/// actually stored.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let session = use_session();
    let toasts = use_toasts();

    let account = use_state(|| None::<AdminAccount>);
    let load_error = use_state(|| None::<String>);
    let editing = use_state(|| None::<EditField>);
    let draft = use_state(String::new);
    let draft_error = use_state(|| None::<&'static str>);
    let saving = use_state(|| false);

    let load = {
        let account = account.clone();
        let load_error = load_error.clone();
        Callback::from(move |_: ()| {
            let account = account.clone();
            let load_error = load_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_current_admin().await {
                    Ok(current) => {
                        load_error.set(None);
                        account.set(Some(current));
                    }
                    Err(err) => load_error.set(Some(err.user_message())),
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

    let close_dialog = {
        let editing = editing.clone();
        let draft = draft.clone();
        let draft_error = draft_error.clone();
        Callback::from(move |_: ()| {
            editing.set(None);
            draft.set(String::new());
            draft_error.set(None);
        })
    };

    let open_dialog = |field: EditField| {
        let editing = editing.clone();
        let draft = draft.clone();
        let account = account.clone();
        Callback::from(move |_: MouseEvent| {
            let initial = match field {
                EditField::Email => account
                    .as_ref()
                    .map(|a| a.email.clone())
                    .unwrap_or_default(),
                EditField::Password => String::new(),
            };
            draft.set(initial);
            editing.set(Some(field));
        })
    };

    let on_draft = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let save = {
        let session = session.clone();
        let toasts = toasts.clone();
        let load = load.clone();
        let editing = editing.clone();
        let draft = draft.clone();
        let draft_error = draft_error.clone();
        let saving = saving.clone();
        let close_dialog = close_dialog.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(field) = *editing else {
                return;
            };
            if *saving {
                return;
            }

            let value = draft.trim().to_string();
            let update = match field {
                EditField::Email => {
                    if !is_valid_email(&value) {
                        draft_error.set(Some("Enter a valid email address"));
                        return;
                    }
                    CredentialsUpdate::email(&value)
                }
                EditField::Password => {
                    if draft.len() < MIN_PASSWORD_LEN {
                        draft_error.set(Some("Password must be at least 6 characters"));
                        return;
                    }
                    CredentialsUpdate::password(&draft)
                }
            };
            draft_error.set(None);
            saving.set(true);

            let session = session.clone();
            let toasts = toasts.clone();
            let load = load.clone();
            let saving = saving.clone();
            let close_dialog = close_dialog.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::update_credentials(&update).await {
                    Ok(message) => {
                        toasts.success(message);
                        close_dialog.emit(());
                        load.emit(());
                        // The navbar shows the session identity; refresh
                        // it too after an email change.
                        if let Ok(current) = crate::api::fetch_current_admin().await {
                            session.sign_in(current);
                        }
                    }
                    Err(err) => toasts.error(err.user_message()),
                }
                saving.set(false);
            });
        })
    };

    if let Some(message) = &*load_error {
        return html! {
            <div class={classes!("flex", "flex-col", "items-center", "gap-3", "py-12")}>
                <p class={classes!("m-0", "text-red-600")}>{ message.clone() }</p>
                <button
                    class={classes!("btn-fluent-secondary", "!px-3", "!py-1.5", "!text-sm")}
                    onclick={load.reform(|_| ())}
                >
                    { "Retry" }
                </button>
            </div>
        };
    }
    let Some(current) = (*account).clone() else {
        return html! { <LoadingSpinner size={SpinnerSize::Large} /> };
    };

    let row_classes = classes!(
        "flex",
        "items-center",
        "justify-between",
        "py-3",
        "border-t",
        "border-[var(--border)]"
    );

    html! {
        <section
            class={classes!(
                "rounded-[var(--radius)]", "border", "border-[var(--border)]",
                "bg-[var(--surface)]", "p-4", "max-w-xl"
            )}
        >
            <h3 class={classes!("m-0", "mb-2", "text-sm", "uppercase", "tracking-[0.08em]", "text-[var(--muted)]")}>
                { "Account" }
            </h3>
            <div class={row_classes.clone()}>
                <div class={classes!("text-sm")}>
                    <span class={classes!("block", "text-[var(--muted)]")}>{ "Email" }</span>
                    <span class={classes!("font-medium")}>{ &current.email }</span>
                </div>
                <button
                    class={classes!("btn-fluent-secondary", "!px-3", "!py-1.5", "!text-sm")}
                    onclick={open_dialog(EditField::Email)}
                >
                    { "Change email" }
                </button>
            </div>
            <div class={row_classes.clone()}>
                <div class={classes!("text-sm")}>
                    <span class={classes!("block", "text-[var(--muted)]")}>{ "Password" }</span>
                    <span class={classes!("font-mono")}>{ "••••••••" }</span>
                </div>
                <button
                    class={classes!("btn-fluent-secondary", "!px-3", "!py-1.5", "!text-sm")}
                    onclick={open_dialog(EditField::Password)}
                >
                    { "Change password" }
                </button>
            </div>
            <div class={row_classes}>
                <div class={classes!("text-sm")}>
                    <span class={classes!("block", "text-[var(--muted)]")}>{ "Member since" }</span>
                    <span>{ format_date(&current.created_at) }</span>
                </div>
            </div>

            if let Some(field) = *editing {
                <Modal
                    title={match field {
                        EditField::Email => "Change email",
                        EditField::Password => "Change password",
                    }}
                    on_close={close_dialog.clone()}
                >
                    <div class={classes!("flex", "flex-col", "gap-3")}>
                        <label class={classes!("block", "text-sm")}>
                            { match field {
                                EditField::Email => "New email",
                                EditField::Password => "New password",
                            } }
                            <input
                                type={if field == EditField::Password { "password" } else { "email" }}
                                class={classes!(
                                    "mt-1", "w-full", "rounded-lg", "border",
                                    "border-[var(--border)]", "px-3", "py-2", "text-sm"
                                )}
                                value={(*draft).clone()}
                                oninput={on_draft.clone()}
                            />
                            if let Some(message) = *draft_error {
                                <span class={classes!("block", "mt-1", "text-xs", "text-red-600")}>
                                    { message }
                                </span>
                            }
                        </label>
                        <div class={classes!("flex", "justify-end", "gap-2")}>
                            <button
                                class={classes!("btn-fluent-secondary", "!px-3", "!py-1.5", "!text-sm")}
                                onclick={close_dialog.reform(|_| ())}
                            >
                                { "Cancel" }
                            </button>
                            <button
                                class={classes!("btn-fluent-primary", "!px-3", "!py-1.5", "!text-sm")}
                                disabled={*saving}
                                onclick={save.clone()}
                            >
                                { if *saving { "Saving..." } else { "Save" } }
                            </button>
                        </div>
                    </div>
                </Modal>
            }
        </section>
    }
}
