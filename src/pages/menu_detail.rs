//! `/menu/:id`: photo carousel and narration for a single item.

use gloo_timers::future::TimeoutFuture;
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::{use_params_map, A};

use crate::api::ApiClient;
use crate::components::narration::use_voice_player;
use crate::config::AUTOPLAY_DELAY_MS;
use crate::models::menu_item::MenuItem;
use crate::utils::format::price_full;
use crate::utils::pagination::{wrap_next, wrap_prev};
use crate::voice::VoiceSource;

#[component]
pub fn MenuDetailPage() -> impl IntoView {
    let api = ApiClient::use_client();
    let params = use_params_map();
    let player = use_voice_player();

    let item_id = move || params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()));
    let item = create_local_resource(item_id, move |id| async move {
        match id {
            Some(id) => api.menu().get(id).await.map(Some),
            None => Ok(None),
        }
    });

    on_cleanup(move || player.stop());

    view! {
        <div class="menu-detail-page">
            <A href="/" class="back-link">"← Back to menu"</A>
            <Transition fallback=|| view! { <p class="loading">"Loading..."</p> }>
                {move || {
                    item.get()
                        .map(|result| match result {
                            Ok(Some(item)) => view! { <MenuDetail item/> }.into_view(),
                            Ok(None) => view! { <p class="not-found">"Menu item not found."</p> }.into_view(),
                            Err(e) => {
                                error!("[DETAIL] Failed to load item: {}", e);
                                let message = if e.status() == Some(404) {
                                    "Menu item not found."
                                } else {
                                    "Failed to load this item."
                                };
                                view! { <p class="load-error">{message}</p> }.into_view()
                            }
                        })
                }}
            </Transition>
        </div>
    }
}

#[component]
fn MenuDetail(item: MenuItem) -> impl IntoView {
    let player = use_voice_player();
    let urls = store_value(item.carousel_urls());
    let count = urls.with_value(Vec::len);
    let index = create_rw_signal(0usize);
    let fullscreen = create_rw_signal(false);
    let source = store_value(VoiceSource::for_item(&item));
    let has_voice = !source.with_value(VoiceSource::is_silent);

    if has_voice {
        spawn_local(async move {
            TimeoutFuture::new(AUTOPLAY_DELAY_MS).await;
            // The page may have been left during the delay.
            if source.try_with_value(|s| player.play(s)).is_some() {
                log!("[DETAIL] Autoplaying narration");
            }
        });
    }

    let keys = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && fullscreen.try_get_untracked() == Some(true) {
            fullscreen.set(false);
        }
    });
    on_cleanup(move || keys.remove());

    let current = move || urls.with_value(|u| u.get(index.get()).cloned().unwrap_or_default());
    let prev = move |_| index.update(|i| *i = wrap_prev(*i, count));
    let next = move |_| index.update(|i| *i = wrap_next(*i, count));

    let price = price_full(item.price, item.price_display.as_deref());
    let unit = item.unit.clone().filter(|u| !u.trim().is_empty());
    let category = item.category_label().map(str::to_string);
    let tag = item.tag().map(str::to_string);

    let thumbnails = move || {
        urls.with_value(|all| {
            all.iter()
                .cloned()
                .enumerate()
                .map(|(i, url)| {
                    view! {
                        <button
                            class="thumbnail"
                            class:active=move || index.get() == i
                            on:click=move |_| index.set(i)
                        >
                            <img src=url alt=""/>
                        </button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <article class="menu-detail">
            <div class="carousel">
                <img class="carousel-image" src=current alt=item.name.clone() on:click=move |_| fullscreen.set(true)/>
                <Show when=move || { count > 1 }>
                    <button class="carousel-prev" on:click=prev>"‹"</button>
                    <button class="carousel-next" on:click=next>"›"</button>
                    <div class="carousel-thumbnails">{thumbnails}</div>
                </Show>
            </div>

            <div class="menu-detail-info">
                {category.map(|c| view! { <span class="menu-detail-category">{c}</span> })}
                <h1>
                    {item.name.clone()}
                    {item.is_featured.then(|| view! { <span class="menu-detail-star">" ★"</span> })}
                </h1>
                {tag.map(|t| view! { <span class="menu-detail-tag">{t}</span> })}
                <p class="menu-detail-price">
                    {price}
                    {unit.map(|u| view! { <span class="menu-detail-unit">{format!(" / {}", u)}</span> })}
                </p>
                <p class="menu-detail-description">{item.description.clone()}</p>
                <Show when=move || has_voice>
                    <button
                        class="btn-voice"
                        on:click=move |_| source.with_value(|s| player.toggle(s))
                    >
                        {move || if player.is_playing().get() { "⏹ Stop" } else { "🔊 Listen" }}
                    </button>
                </Show>
            </div>

            <Show when=move || fullscreen.get()>
                <div class="fullscreen" on:click=move |_| fullscreen.set(false)>
                    <button class="fullscreen-close" on:click=move |_| fullscreen.set(false)>"×"</button>
                    <img src=current alt=""/>
                </div>
            </Show>
        </article>
    }
}
