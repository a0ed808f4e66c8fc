//! Public landing page: menu grid, specials, FAQ and gallery.

use leptos::logging::{error, log, warn};
use leptos::*;

use crate::api::{ApiClient, Availability};
use crate::catalog::{active_specials, gallery_entries, home_grid, CategorySelection};
use crate::components::faq_list::FaqList;
use crate::components::gallery::Gallery;
use crate::components::menu_card::MenuCard;
use crate::components::pager::Pager;
use crate::config::{
    file_url, BUSINESS_ADDRESS, BUSINESS_HOURS, BUSINESS_NAME, BUSINESS_PHONE, GALLERY_LIMIT,
    MENU_PAGE_SIZE, WHATSAPP_URL,
};
use crate::error::ApiError;
use crate::models::category::Category;
use crate::models::faq::Faq;
use crate::models::gallery::GalleryImage;
use crate::models::menu_item::MenuItem;
use crate::models::special::Special;
use crate::utils::format::price_short;
use crate::utils::pagination::Pagination;

#[derive(Clone, Debug, Default, PartialEq)]
struct HomeData {
    categories: Vec<Category>,
    menu: Vec<MenuItem>,
    specials: Vec<Special>,
    faqs: Vec<Faq>,
    gallery: Vec<GalleryImage>,
}

async fn load_home(api: ApiClient) -> Result<HomeData, ApiError> {
    let core = async {
        futures::try_join!(
            api.categories().get_all(),
            api.menu().get_all(Availability::Default),
            api.specials().get_all(),
            api.faqs().get_all(),
        )
    };
    let (core, gallery) = futures::join!(core, api.gallery().get_all());
    let (categories, menu, specials, faqs) = core?;
    let gallery = gallery.unwrap_or_else(|e| {
        warn!("[HOME] Gallery unavailable: {}", e);
        Vec::new()
    });
    log!("[HOME] Loaded {} menu items in {} categories", menu.len(), categories.len());
    Ok(HomeData {
        categories,
        menu,
        specials,
        faqs,
        gallery,
    })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = ApiClient::use_client();
    let data = create_local_resource(|| (), move |_| load_home(api));

    view! {
        <div class="home">
            <Hero/>
            <Transition fallback=|| view! { <p class="loading">"Loading menu..."</p> }>
                {move || {
                    data.get()
                        .map(|result| match result {
                            Ok(data) => view! { <HomeContent data/> }.into_view(),
                            Err(e) => {
                                error!("[HOME] Failed to load: {}", e);
                                view! {
                                    <p class="load-error">"Failed to load the menu. Please try again later."</p>
                                }
                                .into_view()
                            }
                        })
                }}
            </Transition>
            <Contact/>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>{BUSINESS_NAME}</h1>
            <p class="hero-tagline">"Freshly baked every day"</p>
            <a class="btn-primary" href=WHATSAPP_URL target="_blank" rel="noopener">"Order via WhatsApp"</a>
        </header>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <footer class="contact">
            <h2>"Visit us"</h2>
            <p>{BUSINESS_ADDRESS}</p>
            <p>"Open daily " {BUSINESS_HOURS}</p>
            <p>
                <a href=WHATSAPP_URL target="_blank" rel="noopener">{BUSINESS_PHONE}</a>
            </p>
        </footer>
    }
}

#[component]
fn HomeContent(data: HomeData) -> impl IntoView {
    let HomeData {
        categories,
        menu,
        specials,
        faqs,
        gallery,
    } = data;

    let selection = create_rw_signal(CategorySelection::All);
    let pagination = create_rw_signal(Pagination::new(MENU_PAGE_SIZE));
    let menu = store_value(menu);
    let grid = create_memo(move |_| menu.with_value(|items| home_grid(items, selection.get())));
    let tiles = gallery_entries(&menu.get_value(), &gallery, GALLERY_LIMIT);
    let specials = active_specials(&specials);

    let select = move |next: CategorySelection| {
        selection.set(next);
        pagination.update(Pagination::reset);
    };

    let category_button = move |label: String, value: CategorySelection| {
        view! {
            <button
                class="category-button"
                class:active=move || selection.get() == value
                on:click=move |_| select(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <section class="menu-section" id="menu">
            <h2>"Our Menu"</h2>
            <div class="category-buttons">
                {category_button("Highlights".to_string(), CategorySelection::All)}
                {categories
                    .into_iter()
                    .map(|c| category_button(c.name, CategorySelection::Category(c.id)))
                    .collect_view()}
            </div>
            <div class="menu-grid">
                {move || {
                    let page = pagination.get();
                    grid.with(|items| {
                        if items.is_empty() {
                            return view! { <p class="empty">"No items in this category yet."</p> }.into_view();
                        }
                        page.slice(items)
                            .iter()
                            .cloned()
                            .map(|item| view! { <MenuCard item/> })
                            .collect_view()
                    })
                }}
            </div>
            <Pager
                page=Signal::derive(move || pagination.get().page())
                page_count=Signal::derive(move || grid.with(|items| pagination.get().page_count(items.len())))
                on_prev=move |_| pagination.update(Pagination::prev)
                on_next=move |_| {
                    let total = grid.with_untracked(Vec::len);
                    pagination.update(|p| p.next(total));
                }
            />
        </section>

        {(!specials.is_empty()).then(|| view! { <Specials specials/> })}

        <section class="faq-section" id="faq">
            <h2>"Frequently Asked Questions"</h2>
            <FaqList faqs/>
        </section>

        <section class="gallery-section" id="gallery">
            <h2>"Gallery"</h2>
            <Gallery entries=Signal::derive(move || tiles.clone())/>
        </section>
    }
}

#[component]
fn Specials(specials: Vec<Special>) -> impl IntoView {
    view! {
        <section class="specials-section" id="specials">
            <h2>"Specials"</h2>
            <div class="specials-strip">
                {specials
                    .into_iter()
                    .map(|special| {
                        let price = special
                            .price
                            .map(|p| price_short(p, special.price_display.as_deref()))
                            .or_else(|| special.price_display.clone());
                        let image = file_url(special.image_url.as_deref());
                        view! {
                            <article class="special-card">
                                {image.map(|src| view! { <img src=src alt=special.title.clone()/> })}
                                <h3>{special.title.clone()}</h3>
                                {special.description.clone().map(|d| view! { <p>{d}</p> })}
                                {price.map(|p| view! { <span class="special-price">{p}</span> })}
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    fn owns_its_handles<F: Future + 'static>(_: &F) {}

    #[test]
    fn test_home_load_is_a_standalone_future() {
        let pending = load_home(ApiClient::new("http://localhost:5000/api"));
        owns_its_handles(&pending);
    }
}
