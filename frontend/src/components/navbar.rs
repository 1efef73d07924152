use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::use_session;
use crate::toast::use_toasts;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Heading of the active screen.
    pub title: AttrValue,
}

/// Top bar: active screen title, signed-in email, logout. The logout
/// button disables while the request runs; a failed logout keeps the
/// session and surfaces the error.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let session = use_session();
    let toasts = use_toasts();
    let navigator = use_navigator().expect("navbar rendered inside the router");
    let signing_out = use_state(|| false);

    let email = session
        .current()
        .map(|account| account.email)
        .unwrap_or_default();

    let on_logout = {
        let session = session.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        let signing_out = signing_out.clone();
        Callback::from(move |_| {
            if *signing_out {
                return;
            }
            signing_out.set(true);

            let session = session.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let signing_out = signing_out.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::logout().await {
                    Ok(()) => {
                        session.sign_out();
                        navigator.push(&Route::Login);
                    }
                    Err(err) => toasts.error(err.user_message()),
                }
                signing_out.set(false);
            });
        })
    };

    html! {
        <header
            class={classes!(
                "flex", "items-center", "justify-between", "px-6", "py-4",
                "border-b", "border-[var(--border)]", "bg-[var(--surface)]"
            )}
        >
            <h1 class={classes!("m-0", "text-lg", "font-semibold")}>{ props.title.clone() }</h1>
            <div class={classes!("flex", "items-center", "gap-3")}>
                <span class={classes!("text-sm", "text-[var(--muted)]")}>{ email }</span>
                <button
                    type="button"
                    class={classes!("btn-fluent-secondary", "!px-3", "!py-1.5", "!text-sm")}
                    disabled={*signing_out}
                    onclick={on_logout}
                >
                    { if *signing_out { "Signing out..." } else { "Sign out" } }
                </button>
            </div>
        </header>
    }
}
