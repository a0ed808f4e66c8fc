//! Add/edit modal for a menu item.
//!
//! An existing item gets its images uploaded, deleted and promoted right
//! away. A new item has no id yet, so picked images are staged with a local
//! preview and uploaded one at a time once the item has been created.

use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::*;
use web_sys::File;

use super::modal::Modal;
use super::narration::use_voice_player;
use super::toast::use_toasts;
use crate::api::ApiClient;
use crate::config::{file_url, MAX_ITEM_IMAGES};
use crate::error::ApiError;
use crate::forms::image_staging::{ensure_room, persist_staged, ImageStaging};
use crate::forms::menu_form::MenuForm;
use crate::models::category::Category;
use crate::models::menu_item::{MenuImage, MenuItem};
use crate::utils::browser;
use crate::utils::format::file_name;
use crate::voice::VoiceSource;

#[component]
pub fn MenuEditor(
    /// `None` opens an empty form for a new item.
    item: Option<MenuItem>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
    /// Fired after an image of a saved item changes while the dialog stays open.
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let api = ApiClient::use_client();
    let toasts = use_toasts();
    let player = use_voice_player();

    let item_id = item.as_ref().map(|i| i.id);
    let saved_voice = store_value(item.as_ref().and_then(|i| i.voice_file().map(str::to_string)));
    let initial = match &item {
        Some(item) => MenuForm::from_item(item),
        None => MenuForm::blank(categories.with_untracked(|c| c.first().map(|c| c.id))),
    };

    let form = create_rw_signal(initial);
    let images = create_rw_signal(item.map(|i| i.images).unwrap_or_default());
    let staging = create_rw_signal(ImageStaging::<File>::default());
    let voice_file = create_rw_signal(None::<File>);
    let voice_preview = create_rw_signal(None::<String>);
    let saving = create_rw_signal(false);

    on_cleanup(move || {
        player.stop();
        if let Some(Some(url)) = voice_preview.try_get_untracked() {
            browser::revoke_object_url(&url);
        }
        if let Some(staged) = staging.try_update_untracked(|s| s.take()) {
            for image in staged {
                browser::revoke_object_url(&image.preview);
            }
        }
    });

    let refresh_images = move |id: i64| {
        on_changed.call(());
        spawn_local(async move {
            match api.menu().get(id).await {
                Ok(fresh) => {
                    let _ = images.try_set(fresh.images);
                }
                Err(e) => error!("[ADMIN] Could not reload images of item {}: {}", id, e),
            }
        });
    };

    let pick_image = move |ev: web_sys::Event| {
        let Some(file) = browser::take_selected_file(&ev) else {
            return;
        };
        match item_id {
            Some(id) => {
                if let Err(e) = ensure_room(images.with_untracked(Vec::len), MAX_ITEM_IMAGES) {
                    toasts.error(e.to_string());
                    return;
                }
                spawn_local(async move {
                    match api.menu().upload_image(id, file).await {
                        Ok(()) => {
                            toasts.success("Image uploaded");
                            refresh_images(id);
                        }
                        Err(e) => toasts.error(e.user_message("Failed to upload image")),
                    }
                });
            }
            None => {
                if let Err(e) = staging.with_untracked(|s| ensure_room(s.len(), MAX_ITEM_IMAGES)) {
                    toasts.error(e.to_string());
                    return;
                }
                let Some(preview) = browser::object_url(&file) else {
                    return;
                };
                if let Some(Err(e)) = staging.try_update(|s| s.stage(file, preview.clone())) {
                    browser::revoke_object_url(&preview);
                    toasts.error(e.to_string());
                }
            }
        }
    };

    let delete_image = move |image: MenuImage| {
        let Some(id) = item_id else {
            return;
        };
        if !browser::confirm("Delete this image?") {
            return;
        }
        spawn_local(async move {
            match api.menu().delete_image(id, image.id).await {
                Ok(()) => {
                    toasts.success("Image deleted");
                    refresh_images(id);
                }
                Err(e) => toasts.error(e.user_message("Failed to delete image")),
            }
        });
    };

    let make_main = move |image: MenuImage| {
        let Some(id) = item_id else {
            return;
        };
        spawn_local(async move {
            match api.menu().set_main_image(id, image.id).await {
                Ok(()) => {
                    toasts.success("Main image updated");
                    refresh_images(id);
                }
                Err(e) => toasts.error(e.user_message("Failed to set main image")),
            }
        });
    };

    let pick_voice = move |ev: web_sys::Event| {
        let Some(file) = browser::take_selected_file(&ev) else {
            return;
        };
        player.stop();
        let preview = browser::object_url(&file);
        if let Some(old) = voice_preview.get_untracked() {
            browser::revoke_object_url(&old);
        }
        voice_preview.set(preview);
        voice_file.set(Some(file));
    };

    let preview_voice = move |_| {
        let description = form.with_untracked(|f| f.voice_description.clone());
        let source = saved_voice.with_value(|saved| {
            VoiceSource::for_preview(voice_preview.get_untracked(), saved.as_deref(), &description)
        });
        if source.is_silent() {
            toasts.error("Add a voice file or description first");
            return;
        }
        player.toggle(&source);
    };

    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut body = match form.with_untracked(MenuForm::to_multipart) {
            Ok(body) => body,
            Err(e) => {
                toasts.error(e.to_string());
                return;
            }
        };
        if let Some(file) = voice_file.get_untracked() {
            body = body.file("voice_file", file);
        }
        saving.set(true);

        spawn_local(async move {
            let menu = api.menu();
            let result = match item_id {
                Some(id) => menu.update(id, body).await.map(|_| None),
                None => menu.create(body).await.map(|created| Some(created.id)),
            };
            match result {
                Ok(created) => {
                    if let Some(new_id) = created {
                        log!("[ADMIN] Created menu item {}", new_id);
                        let staged = staging.try_update(|s| s.take()).unwrap_or_default();
                        if !staged.is_empty() {
                            match persist_staged(&menu, new_id, staged, browser::revoke_object_url).await {
                                Ok(_) => {}
                                Err(e @ ApiError::MissingId(_)) => {
                                    error!("[ADMIN] {}", e);
                                    toasts.error("Item saved, but images were not uploaded");
                                }
                                Err(e) => {
                                    toasts.error(e.user_message("Item saved, but some images failed to upload"));
                                }
                            }
                        }
                        toasts.success("Menu item added");
                    } else {
                        toasts.success("Menu item updated");
                    }
                    let _ = saving.try_set(false);
                    on_saved.call(());
                }
                Err(e) => {
                    error!("[ADMIN] Failed to save menu item: {}", e);
                    toasts.error(e.user_message("Failed to save menu item"));
                    let _ = saving.try_set(false);
                }
            }
        });
    };

    let title = if item_id.is_some() { "Edit menu item" } else { "Add menu item" };

    let category_options = move || {
        categories
            .get()
            .into_iter()
            .map(|c| {
                let value = c.id.to_string();
                let selected = {
                    let value = value.clone();
                    move || form.with(|f| f.category_id == value)
                };
                view! { <option value=value selected=selected>{c.name}</option> }
            })
            .collect_view()
    };

    let saved_images = move || {
        images
            .get()
            .into_iter()
            .map(|image| {
                let url = image.resolved_url();
                let is_main = image.is_main;
                let for_main = image.clone();
                view! {
                    <div class="image-slot" class:main=is_main>
                        <img src=url alt="Menu item photo"/>
                        {is_main.then(|| view! { <span class="image-badge">"Main"</span> })}
                        <div class="image-actions">
                            <button
                                type="button"
                                disabled=is_main
                                on:click=move |_| make_main(for_main.clone())
                            >
                                "Set main"
                            </button>
                            <button type="button" on:click=move |_| delete_image(image.clone())>"Delete"</button>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let staged_images = move || {
        staging.with(|s| {
            s.images()
                .iter()
                .enumerate()
                .map(|(index, staged)| {
                    let id = staged.id;
                    view! {
                        <div class="image-slot staged" class:main=index == 0>
                            <img src=staged.preview.clone() alt="Image to upload"/>
                            {(index == 0).then(|| view! { <span class="image-badge">"Main"</span> })}
                            <div class="image-actions">
                                <button
                                    type="button"
                                    on:click=move |_| {
                                        staging.update(|s| {
                                            if let Some(removed) = s.remove(id) {
                                                browser::revoke_object_url(&removed.preview);
                                            }
                                        })
                                    }
                                >
                                    "Remove"
                                </button>
                            </div>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let image_count = move || match item_id {
        Some(_) => images.with(Vec::len),
        None => staging.with(ImageStaging::len),
    };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <form class="menu-editor" on:submit=save>
                <label>
                    "Item name *"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Category *"
                    <select on:change=move |ev| form.update(|f| f.category_id = event_target_value(&ev))>
                        <option value="" selected=move || form.with(|f| f.category_id.is_empty())>
                            "Select category"
                        </option>
                        {category_options}
                    </select>
                </label>
                <div class="form-row">
                    <label>
                        "Price (Rp) *"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || form.with(|f| f.price.clone())
                            on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Display price"
                        <input
                            type="text"
                            placeholder="e.g. 55K"
                            prop:value=move || form.with(|f| f.price_display.clone())
                            on:input=move |ev| form.update(|f| f.price_display = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label>
                    "Description *"
                    <textarea
                        rows="3"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Tag"
                    <input
                        type="text"
                        placeholder="e.g. Best Seller"
                        prop:value=move || form.with(|f| f.tag.clone())
                        on:input=move |ev| form.update(|f| f.tag = event_target_value(&ev))
                    />
                </label>

                <fieldset class="voice-section">
                    <legend>"Voice"</legend>
                    <input type="file" accept="audio/*" on:change=pick_voice/>
                    {move || {
                        let picked = voice_file.with(|f| f.as_ref().map(File::name));
                        let saved = saved_voice.with_value(|s| s.clone());
                        let text = match (picked, saved) {
                            (Some(name), _) => Some(format!("Selected: {}", name)),
                            (None, Some(path)) => Some(format!("Current: {}", file_name(&path))),
                            (None, None) => None,
                        };
                        text.map(|text| view! { <p class="voice-current">{text}</p> })
                    }}
                    <label>
                        "Voice description"
                        <textarea
                            rows="2"
                            placeholder="Read aloud when there is no voice file"
                            prop:value=move || form.with(|f| f.voice_description.clone())
                            on:input=move |ev| form.update(|f| f.voice_description = event_target_value(&ev))
                        />
                    </label>
                    <button type="button" class="btn-secondary" on:click=preview_voice>
                        {move || if player.is_playing().get() { "⏹ Stop" } else { "▶ Preview voice" }}
                    </button>
                    {move || {
                        saved_voice
                            .with_value(|s| file_url(s.as_deref()))
                            .map(|url| view! { <a class="voice-link" href=url target="_blank">"Open saved clip"</a> })
                    }}
                </fieldset>

                <fieldset class="image-section">
                    <legend>{move || format!("Images ({}/{})", image_count(), MAX_ITEM_IMAGES)}</legend>
                    <div class="image-grid">
                        {move || if item_id.is_some() { saved_images().into_view() } else { staged_images().into_view() }}
                    </div>
                    <Show when=move || { image_count() < MAX_ITEM_IMAGES }>
                        <input type="file" accept="image/*" on:change=pick_image/>
                    </Show>
                    <Show when=move || { item_id.is_none() && image_count() > 0 }>
                        <p class="hint">"Images are uploaded after the item is saved."</p>
                    </Show>
                </fieldset>

                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_featured)
                        on:change=move |ev| form.update(|f| f.is_featured = event_target_checked(&ev))
                    />
                    "Favorite"
                </label>

                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.call(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
