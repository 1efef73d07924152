use brandboard_shared::records::{Category, NewCategory};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::toast::use_toasts;

/// Which level of the tree a new name is added to, driven by the two
/// parent selects: no main selected → new main category; main selected →
/// new sub category; main and sub selected → new sub-sub category.
#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let toasts = use_toasts();

    let tree = use_state(|| None::<Vec<Category>>);
    let load_error = use_state(|| None::<String>);
    let name = use_state(String::new);
    let name_error = use_state(|| false);
    let selected_main = use_state(String::new);
    let selected_sub = use_state(String::new);
    let creating = use_state(|| false);

    let load = {
        let tree = tree.clone();
        let load_error = load_error.clone();
        Callback::from(move |_: ()| {
            let tree = tree.clone();
            let load_error = load_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_categories().await {
                    Ok(categories) => {
                        load_error.set(None);
                        tree.set(Some(categories));
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

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_main_change = {
        let selected_main = selected_main.clone();
        let selected_sub = selected_sub.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected_main.set(select.value());
            // The sub list belongs to the old main; reset it.
            selected_sub.set(String::new());
        })
    };

    let on_sub_change = {
        let selected_sub = selected_sub.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected_sub.set(select.value());
        })
    };

    let onsubmit = {
        let toasts = toasts.clone();
        let load = load.clone();
        let name = name.clone();
        let name_error = name_error.clone();
        let selected_main = selected_main.clone();
        let selected_sub = selected_sub.clone();
        let creating = creating.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *creating {
                return;
            }

            let trimmed = name.trim().to_string();
            if trimmed.is_empty() {
                name_error.set(true);
                return;
            }
            name_error.set(false);

            let parent = if !selected_sub.is_empty() {
                Some((*selected_sub).clone())
            } else if !selected_main.is_empty() {
                Some((*selected_main).clone())
            } else {
                None
            };

            creating.set(true);
            let body = NewCategory {
                name: trimmed,
                parent,
            };

            let toasts = toasts.clone();
            let load = load.clone();
            let name = name.clone();
            let creating = creating.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::create_category(&body).await {
                    Ok(message) => {
                        toasts.success(message);
                        name.set(String::new());
                        load.emit(());
                    }
                    Err(err) => toasts.error(err.user_message()),
                }
                creating.set(false);
            });
        })
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

    let categories = match (&*load_error, &*tree) {
        (Some(message), _) => {
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
        (None, None) => return html! { <LoadingSpinner size={SpinnerSize::Large} /> },
        (None, Some(categories)) => categories.clone(),
    };

    let main_node = categories.iter().find(|c| c.id == *selected_main);
    let sub_options = main_node.map(|c| c.sub_categories.clone()).unwrap_or_default();

    html! {
        <section
            class={classes!(
                "rounded-[var(--radius)]", "border", "border-[var(--border)]",
                "bg-[var(--surface)]", "p-4"
            )}
        >
            <form class={classes!("flex", "flex-wrap", "items-end", "gap-2", "mb-5")} {onsubmit}>
                <label class={classes!("block", "text-sm")}>
                    { "Main category" }
                    <select class={classes!(field_classes.clone(), "mt-1", "block")} onchange={on_main_change}>
                        <option value="" selected={selected_main.is_empty()}>{ "None (create main)" }</option>
                        { for categories.iter().map(|category| html! {
                            <option
                                value={category.id.clone()}
                                selected={category.id == *selected_main}
                            >
                                { &category.name }
                            </option>
                        }) }
                    </select>
                </label>
                <label class={classes!("block", "text-sm")}>
                    { "Sub category" }
                    <select
                        class={classes!(field_classes.clone(), "mt-1", "block")}
                        disabled={selected_main.is_empty()}
                        onchange={on_sub_change}
                    >
                        <option value="" selected={selected_sub.is_empty()}>{ "None (create sub)" }</option>
                        { for sub_options.iter().map(|category| html! {
                            <option
                                value={category.id.clone()}
                                selected={category.id == *selected_sub}
                            >
                                { &category.name }
                            </option>
                        }) }
                    </select>
                </label>
                <label class={classes!("block", "text-sm")}>
                    { "New category name" }
                    <input
                        class={classes!(field_classes, "mt-1", "block")}
                        value={(*name).clone()}
                        oninput={on_name}
                    />
                </label>
                <button
                    type="submit"
                    class={classes!("btn-fluent-primary", "!px-3", "!py-2", "!text-sm")}
                    disabled={*creating}
                >
                    { if *creating { "Adding..." } else { "Add category" } }
                </button>
                if *name_error {
                    <span class={classes!("text-xs", "text-red-600")}>{ "A category name is required" }</span>
                }
            </form>

            if categories.is_empty() {
                <p class={classes!("m-0", "py-8", "text-center", "text-[var(--muted)]")}>
                    { "No categories yet" }
                </p>
            } else {
                <ul class={classes!("m-0", "p-0", "list-none", "flex", "flex-col", "gap-2")}>
                    { for categories.iter().map(render_main) }
                </ul>
            }
        </section>
    }
}

fn render_main(category: &Category) -> Html {
    html! {
        <li
            key={category.id.clone()}
            class={classes!("rounded-lg", "border", "border-[var(--border)]", "p-3")}
        >
            <span class={classes!("font-semibold")}>{ &category.name }</span>
            if !category.sub_categories.is_empty() {
                <ul class={classes!("m-0", "mt-2", "ml-4", "p-0", "list-none", "flex", "flex-col", "gap-1")}>
                    { for category.sub_categories.iter().map(|sub| html! {
                        <li key={sub.id.clone()}>
                            <span class={classes!("text-sm")}>{ &sub.name }</span>
                            if !sub.sub_categories.is_empty() {
                                <span class={classes!("text-xs", "text-[var(--muted)]", "ml-2")}>
                                    { sub.sub_categories
                                        .iter()
                                        .map(|leaf| leaf.name.clone())
                                        .collect::<Vec<_>>()
                                        .join(" · ") }
                                </span>
                            }
                        </li>
                    }) }
                </ul>
            }
        </li>
    }
}
