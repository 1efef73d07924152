use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_timeout;

/// How long a toast stays on screen.
const TOAST_DISMISS_MS: u32 = 3000;

/// Notification severity, mapped to the card accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Handle for pushing notifications from anywhere in the tree.
#[derive(Clone, PartialEq)]
pub struct Toasts {
    items: UseStateHandle<Vec<Toast>>,
    next_id: Rc<RefCell<u64>>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        let mut items = (*self.items).clone();
        items.push(Toast { id, level, message });
        self.items.set(items);
    }

    fn dismiss(&self, id: u64) {
        let items: Vec<Toast> = self.items.iter().filter(|t| t.id != id).cloned().collect();
        self.items.set(items);
    }
}

#[derive(Properties, PartialEq)]
struct ToastCardProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastCard)]
fn toast_card(props: &ToastCardProps) -> Html {
    let id = props.toast.id;

    // Auto-dismiss once, counted from mount.
    let _dismiss_timer = {
        let on_dismiss = props.on_dismiss.clone();
        use_timeout(move || on_dismiss.emit(id), TOAST_DISMISS_MS)
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    let accent = match props.toast.level {
        ToastLevel::Success => "border-emerald-500 bg-emerald-50 text-emerald-800",
        ToastLevel::Error => "border-red-500 bg-red-50 text-red-800",
    };

    html! {
        <div
            class={classes!("toast-card", "cursor-pointer", "rounded-lg", "border-l-4",
                            "px-4", "py-3", "shadow-lg", "text-sm", accent)}
            role="status"
            {onclick}
        >
            { &props.toast.message }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Mounts the toast context plus the stack that renders active toasts.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let items = use_state(Vec::<Toast>::new);
    let next_id = use_mut_ref(|| 0_u64);

    let toasts = Toasts {
        items: items.clone(),
        next_id,
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| toasts.dismiss(id))
    };

    html! {
        <ContextProvider<Toasts> context={toasts.clone()}>
            { props.children.clone() }
            <div class="toast-stack fixed top-4 right-4 z-50 flex flex-col gap-2 w-80">
                { for items.iter().map(|toast| html! {
                    <ToastCard
                        key={toast.id.to_string()}
                        toast={toast.clone()}
                        on_dismiss={on_dismiss.clone()}
                    />
                }) }
            </div>
        </ContextProvider<Toasts>>
    }
}

/// Access the toast queue from any component below `ToastProvider`.
#[hook]
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("ToastProvider is mounted at the app root")
}
