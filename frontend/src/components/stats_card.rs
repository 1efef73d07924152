use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub icon: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    html! {
        <div
            class={classes!(
                "rounded-[var(--radius)]", "border", "border-[var(--border)]",
                "bg-[var(--surface)]", "p-4", "flex", "flex-col", "gap-1"
            )}
            role="status"
        >
            <span class={classes!("text-xl")} aria-hidden="true">{ props.icon.clone() }</span>
            <strong class={classes!("text-2xl", "font-bold")}>{ props.value.clone() }</strong>
            <span class={classes!("text-sm", "text-[var(--muted)]")}>{ props.label.clone() }</span>
            if let Some(hint) = &props.hint {
                <span class={classes!("text-xs", "text-[var(--muted)]")}>{ hint.clone() }</span>
            }
        </div>
    }
}
