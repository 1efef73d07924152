use yew::prelude::*;

/// Tables paint [`SkeletonRows`](super::skeleton::SkeletonRows) while they
/// load; this ring covers the fetches that have no table shape to mimic:
/// the session restore, the insights screen and dialog bodies.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SpinnerSize {
    /// Inline, inside modal bodies.
    Small,
    /// Screen-level placeholder.
    Large,
}

impl SpinnerSize {
    fn ring(&self) -> Classes {
        match self {
            SpinnerSize::Small => classes!("w-5", "h-5", "border-2"),
            SpinnerSize::Large => classes!("w-12", "h-12", "border-4"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    pub size: SpinnerSize,
    /// Cover the whole viewport, used while the router waits on the
    /// session restore.
    #[prop_or(false)]
    pub fullscreen: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner = html! {
        <div
            class={classes!("flex", "items-center", "justify-center", "py-8")}
            role="status"
            aria-live="polite"
        >
            <div class={classes!(
                props.size.ring(),
                "rounded-full",
                "border-[var(--surface-alt)]",
                "border-t-[var(--primary)]",
                "animate-spin"
            )} />
            <span class={classes!("sr-only")}>{ "Loading" }</span>
        </div>
    };

    if props.fullscreen {
        html! {
            <div class={classes!(
                "fixed", "inset-0", "z-40", "flex",
                "items-center", "justify-center", "bg-[var(--bg)]"
            )}>
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}
