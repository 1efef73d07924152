use brandboard_shared::records::Credentials;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::PLATFORM_NAME;
use crate::router::DashboardTab;
use crate::session::use_session;
use crate::toast::use_toasts;
use crate::utils::{is_valid_email, MIN_PASSWORD_LEN};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let toasts = use_toasts();
    let navigator = use_navigator().expect("login page rendered inside the router");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let email_error = use_state(|| None::<&'static str>);
    let password_error = use_state(|| None::<&'static str>);
    let submitting = use_state(|| false);

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

    let onsubmit = {
        let session = session.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            // Local checks run before any request goes out.
            let email_value = email.trim().to_string();
            let mut valid = true;
            if !is_valid_email(&email_value) {
                email_error.set(Some("Enter a valid email address"));
                valid = false;
            } else {
                email_error.set(None);
            }
            if password.len() < MIN_PASSWORD_LEN {
                password_error.set(Some("Password must be at least 6 characters"));
                valid = false;
            } else {
                password_error.set(None);
            }
            if !valid {
                return;
            }

            submitting.set(true);
            let credentials = Credentials {
                email: email_value,
                password: (*password).clone(),
            };

            let session = session.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::login(&credentials).await {
                    Ok(account) => {
                        session.sign_in(account);
                        navigator.push(&DashboardTab::Overview.route());
                    }
                    Err(err) => toasts.error(err.user_message()),
                }
                submitting.set(false);
            });
        })
    };

    let field_classes = classes!(
        "w-full",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "px-3",
        "py-2",
        "text-sm"
    );

    html! {
        <main class={classes!("flex", "items-center", "justify-center", "min-h-screen", "bg-[var(--bg)]", "p-4")}>
            <form
                class={classes!(
                    "w-full", "max-w-sm", "rounded-[var(--radius)]", "border",
                    "border-[var(--border)]", "bg-[var(--surface)]", "p-6",
                    "flex", "flex-col", "gap-4", "shadow-lg"
                )}
                {onsubmit}
            >
                <div class={classes!("text-center", "mb-2")}>
                    <h1 class={classes!("m-0", "text-xl", "font-bold")}>{ PLATFORM_NAME }</h1>
                    <p class={classes!("m-0", "mt-1", "text-sm", "text-[var(--muted)]")}>
                        { "Sign in to the admin console" }
                    </p>
                </div>

                <label class={classes!("block", "text-sm")}>
                    { "Email" }
                    <input
                        type="email"
                        class={classes!(field_classes.clone(), "mt-1")}
                        value={(*email).clone()}
                        oninput={on_email}
                        autocomplete="username"
                    />
                    if let Some(message) = *email_error {
                        <span class={classes!("block", "mt-1", "text-xs", "text-red-600")}>{ message }</span>
                    }
                </label>

                <label class={classes!("block", "text-sm")}>
                    { "Password" }
                    <input
                        type="password"
                        class={classes!(field_classes, "mt-1")}
                        value={(*password).clone()}
                        oninput={on_password}
                        autocomplete="current-password"
                    />
                    if let Some(message) = *password_error {
                        <span class={classes!("block", "mt-1", "text-xs", "text-red-600")}>{ message }</span>
                    }
                </label>

                <button
                    type="submit"
                    class={classes!("btn-fluent-primary", "w-full", "!py-2")}
                    disabled={*submitting}
                >
                    { if *submitting { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </main>
    }
}
