use leptos::ev::SubmitEvent;
use leptos::logging::error;
use leptos::*;

use super::modal::Modal;
use super::toast::use_toasts;
use crate::api::ApiClient;
use crate::forms::content::FaqForm;
use crate::models::faq::Faq;

#[component]
pub fn FaqEditor(
    faq: Option<Faq>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let api = ApiClient::use_client();
    let toasts = use_toasts();

    let faq_id = faq.as_ref().map(|f| f.id);
    let form = create_rw_signal(faq.as_ref().map(FaqForm::from_faq).unwrap_or_default());
    let saving = create_rw_signal(false);

    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input = match form.with_untracked(FaqForm::to_input) {
            Ok(input) => input,
            Err(e) => {
                toasts.error(e.to_string());
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            let result = match faq_id {
                Some(id) => api.faqs().update(id, &input).await,
                None => api.faqs().create(&input).await,
            };
            let _ = saving.try_set(false);
            match result {
                Ok(_) => {
                    toasts.success(if faq_id.is_some() { "FAQ updated" } else { "FAQ added" });
                    on_saved.call(());
                }
                Err(e) => {
                    error!("[ADMIN] Failed to save FAQ: {}", e);
                    toasts.error(e.user_message("Failed to save FAQ"));
                }
            }
        });
    };

    let title = if faq_id.is_some() { "Edit FAQ" } else { "Add FAQ" };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <form class="faq-editor" on:submit=save>
                <label>
                    "Question *"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.question.clone())
                        on:input=move |ev| form.update(|f| f.question = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Answer *"
                    <textarea
                        rows="4"
                        prop:value=move || form.with(|f| f.answer.clone())
                        on:input=move |ev| form.update(|f| f.answer = event_target_value(&ev))
                    />
                </label>
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.call(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary" disabled=move || saving.get()>
                        "Save"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
