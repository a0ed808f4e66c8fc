use leptos::*;

use super::narration::use_voice_player;
use crate::models::menu_item::MenuItem;
use crate::utils::format::price_short;
use crate::voice::VoiceSource;

#[component]
pub fn MenuTable(
    #[prop(into)] items: Signal<Vec<MenuItem>>,
    #[prop(into)] on_edit: Callback<MenuItem>,
    #[prop(into)] on_delete: Callback<MenuItem>,
) -> impl IntoView {
    let player = use_voice_player();

    let rows = move || {
        items
            .get()
            .into_iter()
            .map(|item| {
                let source = VoiceSource::for_item(&item);
                let silent = source.is_silent();
                let thumb = item.main_image_url();
                let price = price_short(item.price, item.price_display.as_deref());
                let category = item.category_label().unwrap_or("-").to_string();
                let tag = item.tag().map(str::to_string);
                let image_count = item.images.len();
                let for_edit = item.clone();
                let for_delete = item.clone();
                view! {
                    <tr>
                        <td><img class="menu-table-thumb" src=thumb alt=item.name.clone()/></td>
                        <td>
                            <span class="menu-table-name">{item.name.clone()}</span>
                            {item.is_featured.then(|| view! { <span class="menu-table-star">" ★"</span> })}
                            {tag.map(|t| view! { <span class="menu-table-tag">{t}</span> })}
                        </td>
                        <td>{category}</td>
                        <td>{price}</td>
                        <td>{format!("{}", image_count)}</td>
                        <td class="menu-table-actions">
                            <button
                                class="btn-play"
                                title="Play voice"
                                disabled=silent
                                on:click=move |_| player.toggle(&source)
                            >
                                "🔊"
                            </button>
                            <button class="btn-edit" on:click=move |_| on_edit.call(for_edit.clone())>"Edit"</button>
                            <button class="btn-delete" on:click=move |_| on_delete.call(for_delete.clone())>"Delete"</button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <table class="menu-table">
            <thead>
                <tr>
                    <th>"Image"</th>
                    <th>"Name"</th>
                    <th>"Category"</th>
                    <th>"Price"</th>
                    <th>"Photos"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {rows}
                <Show when=move || items.with(Vec::is_empty)>
                    <tr><td colspan="6" class="empty">"No menu items match the filters."</td></tr>
                </Show>
            </tbody>
        </table>
    }
}
