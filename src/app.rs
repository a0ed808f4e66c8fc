/// Root component for the Zelan Bakery site.
/// Provides the shared API client, toasts and narration player, and routes
/// the public pages and the admin dashboard.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::narration::{provide_voice_player, NarrationAudio};
use crate::components::toast::{provide_toasts, ToastHost};
use crate::config::BUSINESS_NAME;
use crate::pages::admin::AdminPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::menu_detail::MenuDetailPage;
use crate::session;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::default());
    provide_toasts();
    let player = provide_voice_player();

    view! {
        <Title text=BUSINESS_NAME/>
        <Meta name="description" content="Freshly baked bread, cakes and cookies in Denpasar."/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/menu/:id" view=MenuDetailPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/admin/*any" view=|| view! { <AdminGate><AdminPage/></AdminGate> }/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
            <NarrationAudio player/>
            <ToastHost/>
        </Router>
    }
}

/// Navigation that replaces the current history entry, so Back does not
/// return to a page that would redirect again.
pub(crate) fn redirect_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// Sends visitors without a stored session to `/login`.
///
/// The check runs in the browser only; the server always renders the
/// placeholder and the API rejects requests without a valid token anyway.
#[component]
fn AdminGate(children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    let allowed = create_rw_signal(false);

    create_effect(move |_| {
        if session::is_authenticated() {
            allowed.set(true);
        } else {
            navigate("/login", redirect_options());
        }
    });

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <p class="loading">"Checking session..."</p> }
        >
            {children()}
        </Show>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <A href="/">"Back to the menu"</A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirects_replace_history() {
        let options = redirect_options();
        assert!(options.replace);
        assert!(options.resolve);
    }
}
