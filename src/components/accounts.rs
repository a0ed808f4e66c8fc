//! Administrator list and account dialogs.

use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::*;

use super::modal::Modal;
use super::toast::use_toasts;
use crate::api::ApiClient;
use crate::forms::account::{ChangePasswordForm, RegisterForm};
use crate::models::admin::Admin;
use crate::utils::format::timestamp;

#[component]
pub fn AdminsTable(#[prop(into)] admins: Signal<Vec<Admin>>) -> impl IntoView {
    let rows = move || {
        admins
            .get()
            .into_iter()
            .map(|admin| {
                let status = if admin.is_active { "Active" } else { "Inactive" };
                view! {
                    <tr>
                        <td>{admin.name.clone()}</td>
                        <td>{admin.username.clone()}</td>
                        <td>{admin.role.clone().unwrap_or_else(|| "admin".to_string())}</td>
                        <td>
                            <span class="status" class:active=admin.is_active>{status}</span>
                        </td>
                        <td>{timestamp(admin.created_at.as_deref(), "-")}</td>
                        <td>{timestamp(admin.last_login.as_deref(), "Never")}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <table class="admins-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Username"</th>
                    <th>"Role"</th>
                    <th>"Status"</th>
                    <th>"Created"</th>
                    <th>"Last login"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
pub fn RegisterAdminDialog(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let api = ApiClient::use_client();
    let toasts = use_toasts();
    let form = create_rw_signal(RegisterForm::default());
    let saving = create_rw_signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input = match form.with_untracked(RegisterForm::to_input) {
            Ok(input) => input,
            Err(e) => {
                toasts.error(e.to_string());
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            let result = api.auth().register(&input).await;
            let _ = saving.try_set(false);
            match result {
                Ok(admin) => {
                    log!("[ADMIN] Registered admin {}", admin.username);
                    toasts.success("Admin registered");
                    on_saved.call(());
                }
                Err(e) => {
                    error!("[ADMIN] Failed to register admin: {}", e);
                    toasts.error(e.user_message("Failed to register admin"));
                }
            }
        });
    };

    view! {
        <Modal title="Register admin".to_string() on_close=on_close>
            <form class="account-form" on:submit=submit>
                <label>
                    "Name *"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Username *"
                    <input
                        type="text"
                        autocomplete="off"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password *"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.call(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary" disabled=move || saving.get()>
                        "Register"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
pub fn ChangePasswordDialog(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let api = ApiClient::use_client();
    let toasts = use_toasts();
    let form = create_rw_signal(ChangePasswordForm::default());
    let saving = create_rw_signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input = match form.with_untracked(ChangePasswordForm::to_input) {
            Ok(input) => input,
            Err(e) => {
                toasts.error(e.to_string());
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            let result = api.auth().change_password(&input).await;
            let _ = saving.try_set(false);
            match result {
                Ok(()) => {
                    toasts.success("Password changed");
                    on_close.call(());
                }
                Err(e) => {
                    error!("[ADMIN] Failed to change password: {}", e);
                    toasts.error(e.user_message("Failed to change password"));
                }
            }
        });
    };

    view! {
        <Modal title="Change password".to_string() on_close=on_close>
            <form class="account-form" on:submit=submit>
                <label>
                    "Current password *"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.current_password.clone())
                        on:input=move |ev| form.update(|f| f.current_password = event_target_value(&ev))
                    />
                </label>
                <label>
                    "New password *"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.new_password.clone())
                        on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm new password *"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                </label>
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.call(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary" disabled=move || saving.get()>
                        "Change password"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
