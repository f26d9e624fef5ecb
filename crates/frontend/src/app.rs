use leptos::prelude::*;

use crate::bootstrap::AppStores;
use crate::config::ApiConfig;
use crate::layout::Shell;
use crate::shared::notifications::NotificationService;

#[component]
pub fn App() -> impl IntoView {
    let notify = NotificationService::new();
    provide_context(notify);

    let stores = AppStores::new(ApiConfig::from_build_env(), notify);
    provide_context(stores);

    stores.load_initial_data();

    view! { <Shell /> }
}
