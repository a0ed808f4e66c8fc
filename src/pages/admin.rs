//! Admin dashboard: menu and categories, FAQs, administrator accounts.

use leptos::logging::{error, log, warn};
use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api::{ApiClient, Availability};
use crate::app::redirect_options;
use crate::catalog::{AdminFilter, FeaturedFilter};
use crate::components::accounts::{AdminsTable, ChangePasswordDialog, RegisterAdminDialog};
use crate::components::category_manager::CategoryManager;
use crate::components::faq_editor::FaqEditor;
use crate::components::kpi_pills::KpiPills;
use crate::components::menu_editor::MenuEditor;
use crate::components::menu_table::MenuTable;
use crate::components::toast::use_toasts;
use crate::config::BUSINESS_NAME;
use crate::error::ApiError;
use crate::models::admin::Admin;
use crate::models::category::Category;
use crate::models::faq::Faq;
use crate::models::menu_item::MenuItem;
use crate::models::stats::Stats;
use crate::session;
use crate::utils::browser;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Menu,
    Faq,
    Admins,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Menu, Tab::Faq, Tab::Admins];

    fn label(&self) -> &'static str {
        match self {
            Tab::Menu => "Menu & Categories",
            Tab::Faq => "FAQ",
            Tab::Admins => "Administrators",
        }
    }
}

/// Which dialog is open on top of the dashboard.
#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    NewItem,
    EditItem(MenuItem),
    NewFaq,
    EditFaq(Faq),
    RegisterAdmin,
    ChangePassword,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Dashboard {
    categories: Vec<Category>,
    menu: Vec<MenuItem>,
    faqs: Vec<Faq>,
    stats: Stats,
}

async fn load_dashboard(api: ApiClient) -> Result<Dashboard, ApiError> {
    let (categories, menu, faqs, stats) = futures::try_join!(
        api.categories().get_all(),
        api.menu().get_all(Availability::All),
        api.faqs().get_all(),
        api.stats().get(),
    )?;
    Ok(Dashboard {
        categories,
        menu,
        faqs,
        stats,
    })
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let api = ApiClient::use_client();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let tab = create_rw_signal(Tab::Menu);
    let dialog = create_rw_signal(None::<Dialog>);
    let loading = create_rw_signal(true);
    let categories = create_rw_signal(Vec::<Category>::new());
    let menu = create_rw_signal(Vec::<MenuItem>::new());
    let faqs = create_rw_signal(Vec::<Faq>::new());
    let stats = create_rw_signal(Stats::default());
    let admins = create_rw_signal(Vec::<Admin>::new());
    let filter = create_rw_signal(AdminFilter::default());
    let user = session::current_user();

    let load_data = move || {
        spawn_local(async move {
            match load_dashboard(api).await {
                Ok(data) => {
                    log!(
                        "[ADMIN] Loaded {} items, {} categories, {} FAQs",
                        data.menu.len(),
                        data.categories.len(),
                        data.faqs.len()
                    );
                    let _ = categories.try_set(data.categories);
                    let _ = menu.try_set(data.menu);
                    let _ = faqs.try_set(data.faqs);
                    let _ = stats.try_set(data.stats);
                }
                Err(e) => {
                    error!("[ADMIN] Failed to load data: {}", e);
                    toasts.error(e.user_message("Failed to load data"));
                }
            }
            let _ = loading.try_set(false);
        });
    };

    let load_admins = move || {
        spawn_local(async move {
            match api.auth().admins().await {
                Ok(list) => {
                    let _ = admins.try_set(list);
                }
                Err(e) => {
                    error!("[ADMIN] Failed to load admins: {}", e);
                    toasts.error(e.user_message("Failed to load admins"));
                }
            }
        });
    };

    create_effect(move |_| load_data());
    create_effect(move |_| {
        if tab.get() == Tab::Admins {
            load_admins();
        }
    });

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = api.auth().logout().await {
                warn!("[ADMIN] Logout call failed, clearing session anyway: {}", e);
            }
            session::clear();
            navigate("/login", redirect_options());
        });
    };

    let delete_item = move |item: MenuItem| {
        if !browser::confirm(&format!("Delete \"{}\"?", item.name)) {
            return;
        }
        spawn_local(async move {
            match api.menu().delete(item.id).await {
                Ok(()) => {
                    toasts.success("Menu item deleted");
                    load_data();
                }
                Err(e) => toasts.error(e.user_message("Failed to delete menu item")),
            }
        });
    };

    let delete_faq = move |faq: Faq| {
        if !browser::confirm("Delete this FAQ?") {
            return;
        }
        spawn_local(async move {
            match api.faqs().delete(faq.id).await {
                Ok(()) => {
                    toasts.success("FAQ deleted");
                    load_data();
                }
                Err(e) => toasts.error(e.user_message("Failed to delete FAQ")),
            }
        });
    };

    let edit_item = move |item: MenuItem| {
        spawn_local(async move {
            match api.menu().get(item.id).await {
                Ok(full) => {
                    let _ = dialog.try_set(Some(Dialog::EditItem(full)));
                }
                Err(e) => {
                    error!("[ADMIN] Failed to load item {}: {}", item.id, e);
                    toasts.error(e.user_message("Failed to load item details"));
                }
            }
        });
    };

    let close_dialog = move |_: ()| dialog.set(None);
    let after_save = move |_: ()| {
        dialog.set(None);
        load_data();
    };

    let filtered = create_memo(move |_| filter.with(|f| menu.with(|items| f.apply(items))));

    let menu_tab = move || {
        view! {
            <KpiPills stats=stats filter=filter/>
            <CategoryManager
                categories=categories
                menu=menu
                filter=filter
                on_changed=move |_| load_data()
            />
            <div class="table-toolbar">
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.category = value.parse::<i64>().ok());
                }>
                    <option value="" selected=move || filter.with(|f| f.category.is_none())>"All categories"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| {
                                let id = c.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || filter.with(|f| f.category == Some(id))
                                    >
                                        {c.name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <div class="featured-filter">
                    {[
                        (FeaturedFilter::All, "All"),
                        (FeaturedFilter::Featured, "Favorite"),
                        (FeaturedFilter::NotFeatured, "Not favorite"),
                    ]
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <button
                                    class:active=move || filter.with(|f| f.featured == value)
                                    on:click=move |_| filter.update(|f| f.featured = value)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <input
                    type="search"
                    placeholder="Search menu..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <Show when=move || filter.with(|f| f.voice_only)>
                    <button class="chip" on:click=move |_| filter.update(|f| f.voice_only = false)>
                        "With voice ×"
                    </button>
                </Show>
                <button class="btn-primary" on:click=move |_| dialog.set(Some(Dialog::NewItem))>
                    "+ Add item"
                </button>
            </div>
            <MenuTable
                items=filtered
                on_edit=edit_item
                on_delete=delete_item
            />
        }
    };

    let faq_tab = move || {
        view! {
            <div class="table-toolbar">
                <button class="btn-primary" on:click=move |_| dialog.set(Some(Dialog::NewFaq))>
                    "+ Add FAQ"
                </button>
            </div>
            <div class="faq-admin-list">
                {move || {
                    faqs.get()
                        .into_iter()
                        .map(|faq| {
                            let for_edit = faq.clone();
                            let for_delete = faq.clone();
                            view! {
                                <div class="faq-admin-item">
                                    <div>
                                        <strong>{faq.question}</strong>
                                        <p>{faq.answer}</p>
                                    </div>
                                    <div class="faq-admin-actions">
                                        <button
                                            class="btn-edit"
                                            on:click=move |_| dialog.set(Some(Dialog::EditFaq(for_edit.clone())))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn-delete"
                                            on:click=move |_| delete_faq(for_delete.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || faqs.with(Vec::is_empty)>
                    <p class="empty">"No FAQs yet."</p>
                </Show>
            </div>
        }
    };

    let admins_tab = move || {
        view! {
            <div class="table-toolbar">
                <button class="btn-primary" on:click=move |_| dialog.set(Some(Dialog::RegisterAdmin))>
                    "+ Register admin"
                </button>
                <button class="btn-secondary" on:click=move |_| dialog.set(Some(Dialog::ChangePassword))>
                    "Change password"
                </button>
            </div>
            <AdminsTable admins=admins/>
        }
    };

    let open_dialog = move || {
        dialog.get().map(|open| match open {
            Dialog::NewItem => view! {
                <MenuEditor
                    item=None
                    categories=categories
                    on_close=close_dialog
                    on_saved=after_save
                    on_changed=move |_| load_data()
                />
            }
            .into_view(),
            Dialog::EditItem(item) => view! {
                <MenuEditor
                    item=Some(item)
                    categories=categories
                    on_close=close_dialog
                    on_saved=after_save
                    on_changed=move |_| load_data()
                />
            }
            .into_view(),
            Dialog::NewFaq => view! { <FaqEditor faq=None on_close=close_dialog on_saved=after_save/> }.into_view(),
            Dialog::EditFaq(faq) => {
                view! { <FaqEditor faq=Some(faq) on_close=close_dialog on_saved=after_save/> }.into_view()
            }
            Dialog::RegisterAdmin => view! {
                <RegisterAdminDialog
                    on_close=close_dialog
                    on_saved=move |_| {
                        dialog.set(None);
                        load_admins();
                    }
                />
            }
            .into_view(),
            Dialog::ChangePassword => view! { <ChangePasswordDialog on_close=close_dialog/> }.into_view(),
        })
    };

    view! {
        <div class="admin-page">
            <header class="admin-header">
                <div>
                    <h1>{BUSINESS_NAME} " Admin"</h1>
                    {user.map(|u| view! { <span class="admin-user">{format!("Signed in as {}", u.name)}</span> })}
                </div>
                <div class="admin-header-actions">
                    <A href="/" class="btn-secondary">"View site"</A>
                    <button class="btn-secondary" on:click=logout>"Logout"</button>
                </div>
            </header>
            <nav class="admin-tabs">
                {Tab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button class:active=move || tab.get() == t on:click=move |_| tab.set(t)>
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading dashboard..."</p> }
            >
                {move || match tab.get() {
                    Tab::Menu => menu_tab().into_view(),
                    Tab::Faq => faq_tab().into_view(),
                    Tab::Admins => admins_tab().into_view(),
                }}
            </Show>
            {open_dialog}
        </div>
    }
}
