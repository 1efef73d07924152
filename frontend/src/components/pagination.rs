use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: u32,
    pub total_pages: u32,
    pub on_page_change: Callback<u32>,
}

#[derive(Debug, PartialEq, Eq)]
enum PageSlot {
    Page(u32),
    Ellipsis(&'static str),
}

/// Page picker for list screens. Hidden entirely while there is only one
/// page; the result cache clamps `total_pages` to at least 1, so the
/// zero-page case never reaches here.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = props.current_page.clamp(1, total_pages);
    let slots = visible_slots(current_page, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-9",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "text-sm",
        "font-semibold",
        "transition-colors",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class={classes!("flex", "flex-wrap", "items-center", "gap-2", "mt-4")} aria-label="Pagination">
            <button
                type="button"
                class={base_btn_classes.clone()}
                disabled={current_page <= 1}
                onclick={prev_onclick}
                aria-label="Previous page"
            >
                {"<"}
            </button>
            { for slots.into_iter().map(|slot| match slot {
                PageSlot::Page(page) => {
                    let page_classes = classes!(
                        base_btn_classes.clone(),
                        if page == current_page {
                            "bg-[var(--primary)] text-white border-transparent pointer-events-none"
                        } else {
                            ""
                        }
                    );
                    let onclick = {
                        let on_page_change = on_page_change.clone();
                        Callback::from(move |_| on_page_change.emit(page))
                    };

                    html! {
                        <button
                            key={format!("page-{page}")}
                            type="button"
                            class={page_classes}
                            aria-current={if page == current_page {
                                Some(AttrValue::from("page"))
                            } else {
                                None
                            }}
                            disabled={page == current_page}
                            {onclick}
                        >
                            { page }
                        </button>
                    }
                }
                PageSlot::Ellipsis(id) => html! {
                    <span
                        key={format!("ellipsis-{id}-{current_page}")}
                        class={classes!(base_btn_classes.clone(), "opacity-60", "pointer-events-none")}
                        aria-hidden="true"
                    >
                        {"..."}
                    </span>
                },
            }) }
            <button
                type="button"
                class={base_btn_classes}
                disabled={current_page >= total_pages}
                onclick={next_onclick}
                aria-label="Next page"
            >
                {">"}
            </button>
        </nav>
    }
}

fn visible_slots(current: u32, total: u32) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut slots = Vec::new();
    slots.push(PageSlot::Page(1));

    let mut start = current.saturating_sub(2).max(2);
    let mut end = (current + 2).min(total - 1);

    if current <= 3 {
        start = 2;
        end = 5;
    } else if current + 2 >= total {
        start = total.saturating_sub(4).max(2);
        end = total - 1;
    }

    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }

    for page in start..=end {
        slots.push(PageSlot::Page(page));
    }

    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }

    slots.push(PageSlot::Page(total));

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(slots: &[PageSlot]) -> Vec<u32> {
        slots
            .iter()
            .filter_map(|slot| match slot {
                PageSlot::Page(p) => Some(*p),
                PageSlot::Ellipsis(_) => None,
            })
            .collect()
    }

    #[test]
    fn few_pages_render_without_ellipsis() {
        let slots = visible_slots(3, 7);
        assert_eq!(pages(&slots), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(slots.len(), 7);
    }

    #[test]
    fn middle_window_keeps_both_edges() {
        let slots = visible_slots(10, 20);
        let visible = pages(&slots);
        assert_eq!(visible.first(), Some(&1));
        assert_eq!(visible.last(), Some(&20));
        assert!(visible.contains(&10));
        assert!(slots.contains(&PageSlot::Ellipsis("left")));
        assert!(slots.contains(&PageSlot::Ellipsis("right")));
    }

    #[test]
    fn head_and_tail_windows_expand() {
        assert_eq!(pages(&visible_slots(1, 20)), vec![1, 2, 3, 4, 5, 20]);
        assert_eq!(pages(&visible_slots(20, 20)), vec![1, 16, 17, 18, 19, 20]);
    }
}
