use brandboard_shared::records::AdminAccount;
use yew::prelude::*;

/// Signed-in admin identity, shared through context.
///
/// The session cookie itself is HttpOnly, so the only way to learn who is
/// signed in is to ask the backend. On mount the provider fires one silent
/// `GET /admin/single`; until it settles `is_restoring` stays true and the
/// router holds off on redirecting to the login page.
#[derive(Clone, PartialEq)]
pub struct Session {
    account: UseStateHandle<Option<AdminAccount>>,
    restoring: UseStateHandle<bool>,
}

impl Session {
    /// The signed-in admin, if any.
    pub fn current(&self) -> Option<AdminAccount> {
        (*self.account).clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.account.is_some()
    }

    /// True while the initial cookie check is still in flight.
    pub fn is_restoring(&self) -> bool {
        *self.restoring
    }

    pub fn sign_in(&self, account: AdminAccount) {
        self.account.set(Some(account));
    }

    pub fn sign_out(&self) {
        self.account.set(None);
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let account = use_state(|| None::<AdminAccount>);
    let restoring = use_state(|| true);

    {
        let account = account.clone();
        let restoring = restoring.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // A 401 here just means nobody is signed in yet.
                if let Ok(admin) = crate::api::fetch_current_admin().await {
                    account.set(Some(admin));
                }
                restoring.set(false);
            });
            || ()
        });
    }

    let session = Session { account, restoring };

    html! {
        <ContextProvider<Session> context={session}>
            { props.children.clone() }
        </ContextProvider<Session>>
    }
}

/// Access the session from any component below `SessionProvider`.
#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider is mounted at the app root")
}
