use leptos::*;

use crate::models::faq::Faq;

/// Next open question after clicking `id`: clicking the open one closes it.
pub fn toggle_open(current: Option<i64>, id: i64) -> Option<i64> {
    if current == Some(id) {
        None
    } else {
        Some(id)
    }
}

/// Accordion with at most one answer open.
#[component]
pub fn FaqList(faqs: Vec<Faq>) -> impl IntoView {
    let open = create_rw_signal(None::<i64>);

    if faqs.is_empty() {
        return view! { <p class="empty">"No questions yet."</p> }.into_view();
    }

    view! {
        <div class="faq-list">
            {faqs
                .into_iter()
                .map(|Faq { id, question, answer }| {
                    let is_open = move || open.get() == Some(id);
                    view! {
                        <div class="faq-item" class:open=is_open>
                            <button
                                class="faq-question"
                                on:click=move |_| open.update(|o| *o = toggle_open(*o, id))
                            >
                                <span>{question}</span>
                                <span class="faq-chevron">{move || if is_open() { "−" } else { "+" }}</span>
                            </button>
                            <Show when=is_open>
                                <p class="faq-answer">{answer.clone()}</p>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}
