use yew::prelude::*;

/// Badge classes keyed by wire status value.
pub fn status_chip_class(status: &str) -> Classes {
    let base = classes!(
        "inline-flex",
        "items-center",
        "rounded-full",
        "px-2",
        "py-0.5",
        "text-xs",
        "font-semibold",
        "uppercase",
        "tracking-[0.06em]"
    );
    match status {
        "pending" => classes!(base, "bg-amber-500/15", "text-amber-700", "dark:text-amber-200"),
        "approved" => classes!(base, "bg-emerald-500/15", "text-emerald-700", "dark:text-emerald-200"),
        "resolved" => classes!(base, "bg-emerald-500/15", "text-emerald-700", "dark:text-emerald-200"),
        "rejected" => classes!(base, "bg-red-500/15", "text-red-700", "dark:text-red-200"),
        "blocked" => classes!(base, "bg-slate-500/15", "text-slate-700", "dark:text-slate-200"),
        _ => classes!(base, "bg-[var(--surface-alt)]", "text-[var(--muted)]"),
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusChipProps {
    pub status: AttrValue,
}

#[function_component(StatusChip)]
pub fn status_chip(props: &StatusChipProps) -> Html {
    html! {
        <span class={status_chip_class(&props.status)}>{ props.status.clone() }</span>
    }
}
