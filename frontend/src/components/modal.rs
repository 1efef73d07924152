use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button closes it; clicks inside the card do not bubble out.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let backdrop_onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let card_onclick = Callback::from(|e: MouseEvent| e.stop_propagation());

    let close_onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div
            class={classes!(
                "fixed", "inset-0", "z-50", "flex", "items-center", "justify-center",
                "bg-black/40", "p-4"
            )}
            onclick={backdrop_onclick}
        >
            <div
                class={classes!(
                    "w-full", "max-w-lg", "max-h-[85vh]", "overflow-y-auto",
                    "rounded-[var(--radius)]", "border", "border-[var(--border)]",
                    "bg-[var(--surface)]", "p-5", "shadow-xl"
                )}
                role="dialog"
                aria-modal="true"
                onclick={card_onclick}
            >
                <div class={classes!("flex", "items-center", "justify-between", "mb-4")}>
                    <h3 class={classes!("m-0", "text-base", "font-semibold")}>
                        { props.title.clone() }
                    </h3>
                    <button
                        type="button"
                        class={classes!("text-[var(--muted)]", "hover:text-[var(--text)]", "text-lg")}
                        aria-label="Close dialog"
                        onclick={close_onclick}
                    >
                        {"✕"}
                    </button>
                </div>
                { props.children.clone() }
            </div>
        </div>
    }
}
