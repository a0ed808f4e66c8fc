use leptos::ev::SubmitEvent;
use leptos::logging::{log, warn};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, A};

use crate::api::ApiClient;
use crate::config::BUSINESS_NAME;
use crate::forms::account::LoginForm;
use crate::session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = ApiClient::use_client();
    let navigate = use_navigate();
    let form = create_rw_signal(LoginForm::default());
    let error_message = create_rw_signal(None::<String>);
    let pending = create_rw_signal(false);

    let go_admin = move || navigate("/admin", NavigateOptions::default());

    {
        let go_admin = go_admin.clone();
        create_effect(move |_| {
            if session::is_authenticated() {
                go_admin();
            }
        });
    }

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = match form.with_untracked(LoginForm::to_credentials) {
            Ok(credentials) => credentials,
            Err(e) => {
                error_message.set(Some(e.to_string()));
                return;
            }
        };
        error_message.set(None);
        pending.set(true);
        let go_admin = go_admin.clone();
        spawn_local(async move {
            match api.auth().login(&credentials).await {
                Ok(data) => {
                    session::store(&data);
                    log!("[LOGIN] Logged in as {}", credentials.username);
                    go_admin();
                }
                Err(e) => {
                    warn!("[LOGIN] Login failed: {}", e);
                    let _ = error_message.try_set(Some(e.user_message("Invalid username or password")));
                }
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=submit>
                <h1>{BUSINESS_NAME}</h1>
                <p class="login-subtitle">"Admin login"</p>
                {move || error_message.get().map(|message| view! { <div class="error-banner">{message}</div> })}
                <label>
                    "Username"
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn-primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <A href="/" class="back-link">"← Back to site"</A>
            </form>
        </div>
    }
}
