use contracts::inventory::{Category, Product, Supplier, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ApiConfig;
use crate::shared::api::ApiClient;
use crate::shared::crud::CrudController;
use crate::shared::notifications::NotificationService;

/// One controller per entity kind, shared through context so a section
/// can reach a sibling's data (the product form derives its category
/// select from the category list).
#[derive(Clone, Copy)]
pub struct AppStores {
    pub products: CrudController<Product>,
    pub categories: CrudController<Category>,
    pub suppliers: CrudController<Supplier>,
    pub users: CrudController<User>,
}

impl AppStores {
    pub fn new(config: ApiConfig, notify: NotificationService) -> Self {
        let api = ApiClient::new(config);
        Self {
            products: CrudController::new(api.clone(), notify),
            categories: CrudController::new(api.clone(), notify),
            suppliers: CrudController::new(api.clone(), notify),
            users: CrudController::new(api, notify),
        }
    }

    /// Initial load. Categories are awaited first because the product
    /// form's select is derived from them; the other three collections
    /// then load concurrently, each failing on its own without taking
    /// the rest down.
    pub fn load_initial_data(&self) {
        let stores = *self;

        // Indicators up-front, before the first response arrives.
        stores.products.loading.set(true);
        stores.categories.loading.set(true);
        stores.suppliers.loading.set(true);
        stores.users.loading.set(true);

        spawn_local(async move {
            log::info!("Iniciando carga de datos...");
            stores.categories.load_async().await;
            stores.products.load();
            stores.suppliers.load();
            stores.users.load();
        });
    }
}
