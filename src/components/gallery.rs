//! Paginated photo grid with a fullscreen lightbox.

use leptos::*;

use super::pager::Pager;
use crate::catalog::GalleryEntry;
use crate::config::GALLERY_PAGE_SIZE;
use crate::utils::pagination::{step_next, step_prev, Pagination};

#[component]
pub fn Gallery(#[prop(into)] entries: Signal<Vec<GalleryEntry>>) -> impl IntoView {
    let pagination = create_rw_signal(Pagination::new(GALLERY_PAGE_SIZE));
    let lightbox = create_rw_signal(None::<usize>);

    create_effect(move |_| {
        let total = entries.with(Vec::len);
        pagination.update(|p| p.clamp(total));
    });

    let keys = window_event_listener(ev::keydown, move |ev| {
        let Some(Some(index)) = lightbox.try_get_untracked() else {
            return;
        };
        let total = entries.with_untracked(Vec::len);
        match ev.key().as_str() {
            "Escape" => lightbox.set(None),
            "ArrowRight" => lightbox.set(Some(step_next(index, total))),
            "ArrowLeft" => lightbox.set(Some(step_prev(index))),
            _ => {}
        }
    });
    on_cleanup(move || keys.remove());

    let tiles = move || {
        let page = pagination.get();
        entries.with(|all| {
            page.slice(all)
                .iter()
                .cloned()
                .enumerate()
                .map(|(offset, entry)| {
                    let index = page.absolute_index(offset);
                    view! {
                        <button class="gallery-tile" on:click=move |_| lightbox.set(Some(index))>
                            <img src=entry.url alt=entry.caption.clone() loading="lazy"/>
                            <span class="gallery-caption">{entry.caption}</span>
                        </button>
                    }
                })
                .collect_view()
        })
    };

    let viewer = move || {
        let index = lightbox.get()?;
        let total = entries.with(Vec::len);
        let entry = entries.with(|all| all.get(index).cloned())?;
        Some(view! {
            <div class="lightbox" on:click=move |_| lightbox.set(None)>
                <button class="lightbox-close" on:click=move |_| lightbox.set(None)>"×"</button>
                <button
                    class="lightbox-prev"
                    disabled=index == 0
                    on:click=move |ev| {
                        ev.stop_propagation();
                        lightbox.set(Some(step_prev(index)));
                    }
                >
                    "‹"
                </button>
                <figure on:click=|ev| ev.stop_propagation()>
                    <img src=entry.url alt=entry.caption.clone()/>
                    <figcaption>{entry.caption}</figcaption>
                </figure>
                <button
                    class="lightbox-next"
                    disabled={index + 1 >= total}
                    on:click=move |ev| {
                        ev.stop_propagation();
                        lightbox.set(Some(step_next(index, total)));
                    }
                >
                    "›"
                </button>
                <span class="lightbox-counter">{format!("{} / {}", index + 1, total)}</span>
            </div>
        })
    };

    view! {
        <div class="gallery">
            <div class="gallery-grid">{tiles}</div>
            <Pager
                page=Signal::derive(move || pagination.get().page())
                page_count=Signal::derive(move || entries.with(|all| pagination.get().page_count(all.len())))
                on_prev=move |_| pagination.update(|p| p.prev())
                on_next=move |_| {
                    let total = entries.with_untracked(Vec::len);
                    pagination.update(|p| p.next(total));
                }
            />
            {viewer}
        </div>
    }
}
