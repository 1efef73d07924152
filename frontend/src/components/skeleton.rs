use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkeletonRowsProps {
    /// How many placeholder rows to paint; pages pass their page size so
    /// the table keeps its height while loading.
    pub rows: u32,
    pub cols: u32,
}

/// Pulsing placeholder rows shown inside a table body while a fetch is
/// in flight.
#[function_component(SkeletonRows)]
pub fn skeleton_rows(props: &SkeletonRowsProps) -> Html {
    html! {
        { for (0..props.rows).map(|row| html! {
            <tr key={format!("skeleton-{row}")} class={classes!("border-t", "border-[var(--border)]")}>
                { for (0..props.cols).map(|col| html! {
                    <td key={format!("skeleton-{row}-{col}")} class={classes!("py-3", "pr-3")}>
                        <div class={classes!(
                            "h-4",
                            "rounded",
                            "bg-[var(--surface-alt)]",
                            "animate-pulse"
                        )} />
                    </td>
                }) }
            </tr>
        }) }
    }
}
