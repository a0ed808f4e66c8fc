//! Category cards on the admin dashboard.

use leptos::logging::{error, log};
use leptos::*;

use super::toast::use_toasts;
use crate::api::ApiClient;
use crate::catalog::{items_in_category, AdminFilter};
use crate::forms::content::new_category;
use crate::models::category::Category;
use crate::models::menu_item::MenuItem;
use crate::utils::browser;

#[component]
pub fn CategoryManager(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] menu: Signal<Vec<MenuItem>>,
    filter: RwSignal<AdminFilter>,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let api = ApiClient::use_client();
    let toasts = use_toasts();
    let draft = create_rw_signal(String::new());
    let busy = create_rw_signal(false);

    let add = move || {
        let Some(input) = new_category(&draft.get_untracked()) else {
            return;
        };
        busy.set(true);
        spawn_local(async move {
            match api.categories().create(&input).await {
                Ok(created) => {
                    log!("[ADMIN] Added category {} ({})", created.name, created.id);
                    let _ = draft.try_set(String::new());
                    toasts.success("Category added");
                    on_changed.call(());
                }
                Err(e) => {
                    error!("[ADMIN] Failed to add category: {}", e);
                    toasts.error(e.user_message("Failed to add category"));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let remove = move |category: Category| {
        if !browser::confirm(&format!("Delete category \"{}\"?", category.name)) {
            return;
        }
        spawn_local(async move {
            match api.categories().delete(category.id).await {
                Ok(()) => {
                    toasts.success("Category deleted");
                    let _ = filter.try_update(|f| {
                        if f.category == Some(category.id) {
                            f.category = None;
                        }
                    });
                    on_changed.call(());
                }
                Err(e) => {
                    error!("[ADMIN] Failed to delete category {}: {}", category.id, e);
                    toasts.error(e.user_message("Cannot delete category with items"));
                }
            }
        });
    };

    let cards = move || {
        categories
            .get()
            .into_iter()
            .map(|category| {
                let id = category.id;
                let count = menu.with(|items| items_in_category(items, id));
                let selected = move || filter.with(|f| f.category == Some(id));
                let name = category.name.clone();
                view! {
                    <div class="category-card" class:selected=selected>
                        <button
                            class="category-card-body"
                            on:click=move |_| filter.update(|f| {
                                f.category = if f.category == Some(id) { None } else { Some(id) };
                            })
                        >
                            <span class="category-name">{name}</span>
                            <span class="category-count">{format!("{} items", count)}</span>
                        </button>
                        <button
                            class="category-delete"
                            title="Delete category"
                            on:click=move |_| remove(category.clone())
                        >
                            "×"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="category-manager">
            <div class="category-cards">{cards}</div>
            <div class="category-add">
                <input
                    type="text"
                    placeholder="New category"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add();
                        }
                    }
                />
                <button
                    class="btn-primary"
                    disabled=move || busy.get() || draft.with(|d| d.trim().is_empty())
                    on:click=move |_| add()
                >
                    "+ Add category"
                </button>
            </div>
        </section>
    }
}
