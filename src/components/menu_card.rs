use leptos::*;
use leptos_router::A;

use super::narration::use_voice_player;
use crate::models::menu_item::MenuItem;
use crate::utils::format::price_short;
use crate::voice::VoiceSource;

/// Grid tile for a menu item. Hovering the tile narrates the item.
#[component]
pub fn MenuCard(item: MenuItem) -> impl IntoView {
    let player = use_voice_player();
    let source = VoiceSource::for_item(&item);
    let has_voice = !source.is_silent();

    let href = format!("/menu/{}", item.id);
    let image = item.main_image_url();
    let price = price_short(item.price, item.price_display.as_deref());
    let tag = item.tag().map(str::to_string);
    let category = item.category_label().map(str::to_string);
    let name = item.name;

    view! {
        <div
            class="menu-card"
            class:featured=item.is_featured
            on:mouseenter=move |_| player.play(&source)
            on:mouseleave=move |_| player.stop()
        >
            <A href=href class="menu-card-link">
                <div class="menu-card-image">
                    <img src=image alt=name.clone() loading="lazy"/>
                    {item.is_featured.then(|| view! { <span class="menu-card-star" title="Favorite">"★"</span> })}
                    {tag.map(|tag| view! { <span class="menu-card-tag">{tag}</span> })}
                </div>
                <div class="menu-card-body">
                    {category.map(|c| view! { <span class="menu-card-category">{c}</span> })}
                    <h3 class="menu-card-name">{name}</h3>
                    <div class="menu-card-footer">
                        <span class="menu-card-price">{price}</span>
                        {has_voice.then(|| view! { <span class="menu-card-voice" title="Hover to listen">"🔊"</span> })}
                    </div>
                </div>
            </A>
        </div>
    }
}
