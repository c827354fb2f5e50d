use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};

/// Page buttons shown around the current page.
const WINDOW: u32 = 5;

/// One slot in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

/// Slots for page `current` of `total`: a window of up to five pages around
/// `current`, plus the first and last page with a gap where pages are
/// skipped. Out-of-range input is clamped.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(2).max(1);
    let end = (start + WINDOW - 1).min(total);
    if end - start < WINDOW - 1 {
        start = end.saturating_sub(WINDOW - 1).max(1);
    }

    let mut items = Vec::with_capacity(WINDOW as usize + 4);
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Gap);
        }
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total {
        if end + 1 < total {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page(total));
    }
    items
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: u32,
    pub total_pages: u32,
    pub on_page_change: Callback<u32>,
}

/// Pager for listings. Renders nothing for a single page.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }
    let current = props.current_page.clamp(1, props.total_pages);
    let go = |page: u32| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(page))
    };

    html! {
        <div class="join flex justify-center mt-4">
            <button
                class="join-item btn btn-sm"
                disabled={current == 1}
                onclick={go(current.saturating_sub(1).max(1))}
            >
                <i class="fa-solid fa-chevron-left"></i>
            </button>
            { for page_items(current, props.total_pages).into_iter().map(|item| match item {
                PageItem::Page(page) => html! {
                    <button
                        class={classes!("join-item", "btn", "btn-sm", (page == current).then_some("btn-active"))}
                        onclick={go(page)}
                    >
                        {page.to_string()}
                    </button>
                },
                PageItem::Gap => html! {
                    <button class="join-item btn btn-sm btn-disabled">{"..."}</button>
                },
            }) }
            <button
                class="join-item btn btn-sm"
                disabled={current == props.total_pages}
                onclick={go((current + 1).min(props.total_pages))}
            >
                <i class="fa-solid fa-chevron-right"></i>
            </button>
        </div>
    }
}
