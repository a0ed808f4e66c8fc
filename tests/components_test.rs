#![cfg(all(target_arch = "wasm32", feature = "wasm-test"))]

use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::*;
use leptos_router::Router;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlButtonElement, HtmlElement};

use zelan::components::faq_list::FaqList;
use zelan::components::menu_card::MenuCard;
use zelan::components::pager::Pager;
use zelan::components::toast::{provide_toasts, ToastHost};
use zelan::models::faq::Faq;
use zelan::models::menu_item::MenuItem;

wasm_bindgen_test_configure!(run_in_browser);

// Mounts a fresh container and returns it so each test queries only its own DOM.
fn container(id: &str) -> HtmlElement {
    let document = gloo_utils::document();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn button(root: &HtmlElement, selector: &str) -> HtmlButtonElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {}", selector))
        .dyn_into::<HtmlButtonElement>()
        .unwrap()
}

#[wasm_bindgen_test]
async fn test_pager_bounds() {
    let root = container("pager-test");
    let page = create_rw_signal(0usize);

    mount_to(root.clone(), move || {
        view! {
            <Pager
                page=page
                page_count=Signal::derive(|| 3)
                on_prev=move |_| page.update(|p| *p = p.saturating_sub(1))
                on_next=move |_| page.update(|p| *p = (*p + 1).min(2))
            />
        }
    });

    let prev = button(&root, ".pager-prev");
    let next = button(&root, ".pager-next");
    assert!(prev.disabled());
    assert!(!next.disabled());

    next.click();
    next.click();
    TimeoutFuture::new(0).await;
    log!("[TEST] Pager page after two clicks: {}", page.get_untracked());
    assert_eq!(page.get_untracked(), 2);
    assert!(next.disabled());
    assert!(!prev.disabled());
    assert_eq!(
        root.query_selector(".pager-status").unwrap().unwrap().text_content().as_deref(),
        Some("3 / 3")
    );
}

#[wasm_bindgen_test]
async fn test_pager_hidden_for_single_page() {
    let root = container("pager-single-test");
    mount_to(root.clone(), || {
        view! { <Pager page=Signal::derive(|| 0) page_count=Signal::derive(|| 1) on_prev=|_| {} on_next=|_| {}/> }
    });
    assert!(root.query_selector(".pager").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn test_faq_accordion_opens_one_at_a_time() {
    let root = container("faq-test");
    let faqs = vec![
        Faq { id: 1, question: "Buka jam berapa?".into(), answer: "08:00 - 20:00".into() },
        Faq { id: 2, question: "Bisa pesan antar?".into(), answer: "Bisa lewat WhatsApp".into() },
    ];
    mount_to(root.clone(), move || view! { <FaqList faqs=faqs.clone()/> });

    let questions = root.query_selector_all(".faq-question").unwrap();
    assert_eq!(questions.length(), 2);
    assert_eq!(root.query_selector_all(".faq-answer").unwrap().length(), 0);

    let first = questions.get(0).unwrap().dyn_into::<HtmlElement>().unwrap();
    let second = questions.get(1).unwrap().dyn_into::<HtmlElement>().unwrap();

    first.click();
    TimeoutFuture::new(0).await;
    let answers = root.query_selector_all(".faq-answer").unwrap();
    assert_eq!(answers.length(), 1);
    assert_eq!(answers.get(0).unwrap().text_content().as_deref(), Some("08:00 - 20:00"));

    second.click();
    TimeoutFuture::new(0).await;
    let answers = root.query_selector_all(".faq-answer").unwrap();
    assert_eq!(answers.length(), 1);
    assert_eq!(answers.get(0).unwrap().text_content().as_deref(), Some("Bisa lewat WhatsApp"));
}

#[wasm_bindgen_test]
async fn test_menu_card_renders_label_and_link() {
    let root = container("menu-card-test");
    let item = MenuItem {
        id: 12,
        name: "Nastar Keju".into(),
        price: 85_000,
        tag: Some("Best Seller".into()),
        is_featured: true,
        voice_description: Some("Nastar isi selai nanas".into()),
        ..Default::default()
    };
    mount_to(root.clone(), move || view! { <Router><MenuCard item=item.clone()/></Router> });

    let text = |selector: &str| {
        root.query_selector(selector)
            .unwrap()
            .and_then(|el| el.text_content())
    };
    assert_eq!(text(".menu-card-name").as_deref(), Some("Nastar Keju"));
    assert_eq!(text(".menu-card-price").as_deref(), Some("85K"));
    assert_eq!(text(".menu-card-tag").as_deref(), Some("Best Seller"));
    assert!(root.query_selector(".menu-card-star").unwrap().is_some());
    assert!(root.query_selector(".menu-card-voice").unwrap().is_some());

    let href = root
        .query_selector("a")
        .unwrap()
        .and_then(|a| a.get_attribute("href"));
    assert_eq!(href.as_deref(), Some("/menu/12"));
}

#[wasm_bindgen_test]
async fn test_toast_dismisses_itself() {
    let root = container("toast-test");
    let toasts = create_rw_signal(None);
    mount_to(root.clone(), move || {
        toasts.set(Some(provide_toasts()));
        view! { <ToastHost/> }
    });

    let handle = toasts.get_untracked().unwrap();
    handle.error("Failed to save menu item");
    TimeoutFuture::new(0).await;
    assert_eq!(root.query_selector_all(".toast").unwrap().length(), 1);

    TimeoutFuture::new(3_200).await;
    assert_eq!(root.query_selector_all(".toast").unwrap().length(), 0);
}
