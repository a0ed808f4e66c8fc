use leptos::*;

/// Prev/next controls; hidden when everything fits on one page.
#[component]
pub fn Pager(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] page_count: Signal<usize>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || { page_count.get() > 1 }>
            <div class="pager">
                <button
                    class="pager-prev"
                    disabled=move || page.get() == 0
                    on:click=move |_| on_prev.call(())
                >
                    "‹ Prev"
                </button>
                <span class="pager-status">
                    {move || format!("{} / {}", page.get() + 1, page_count.get())}
                </span>
                <button
                    class="pager-next"
                    disabled=move || { page.get() + 1 >= page_count.get() }
                    on:click=move |_| on_next.call(())
                >
                    "Next ›"
                </button>
            </div>
        </Show>
    }
}
