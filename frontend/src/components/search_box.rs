use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Pause after the last keystroke before the search commits.
const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub placeholder: AttrValue,
    /// Fired with the settled term; the list controller resets to page 1.
    pub on_search: Callback<String>,
}

/// Debounced live-search input. Every keystroke restarts the timer, so
/// only the final term of a typing burst reaches the controller.
#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let draft = use_state(String::new);
    let pending = use_mut_ref(|| None::<Timeout>);

    let oninput = {
        let draft = draft.clone();
        let pending = pending.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            draft.set(value.clone());

            let on_search = on_search.clone();
            // Dropping the previous Timeout cancels it.
            *pending.borrow_mut() = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                on_search.emit(value);
            }));
        })
    };

    html! {
        <input
            type="search"
            class={classes!(
                "w-full",
                "max-w-xs",
                "rounded-lg",
                "border",
                "border-[var(--border)]",
                "bg-[var(--surface)]",
                "px-3",
                "py-2",
                "text-sm"
            )}
            placeholder={props.placeholder.clone()}
            value={(*draft).clone()}
            {oninput}
        />
    }
}
