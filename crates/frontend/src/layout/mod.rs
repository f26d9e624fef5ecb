pub mod footer;
pub mod header;

use leptos::prelude::*;

use crate::domain::categories::CategoriesSection;
use crate::domain::products::ProductsSection;
use crate::domain::suppliers::SuppliersSection;
use crate::domain::users::UsersSection;
use crate::shared::notifications::NotificationArea;
use footer::Footer;
use header::Header;

/// Which management section is on screen. Exactly one at a time; the
/// others stay mounted but hidden so their lists survive navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Products,
    Categories,
    Suppliers,
    Users,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Products,
        Section::Categories,
        Section::Suppliers,
        Section::Users,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Products => "Productos",
            Section::Categories => "Categorías",
            Section::Suppliers => "Proveedores",
            Section::Users => "Usuarios",
        }
    }
}

#[component]
pub fn Shell() -> impl IntoView {
    let (active, set_active) = signal(Section::Products);

    view! {
        <NotificationArea />
        <Header active=active set_active=set_active />
        <main class="container">
            <div hidden=move || active.get() != Section::Products>
                <ProductsSection />
            </div>
            <div hidden=move || active.get() != Section::Categories>
                <CategoriesSection />
            </div>
            <div hidden=move || active.get() != Section::Suppliers>
                <SuppliersSection />
            </div>
            <div hidden=move || active.get() != Section::Users>
                <UsersSection />
            </div>
        </main>
        <Footer />
    }
}
