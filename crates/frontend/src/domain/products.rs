use contracts::inventory::{Category, Product};
use leptos::prelude::*;

use super::{opt_text_or, text_or};
use crate::bootstrap::AppStores;
use crate::shared::components::{EntityList, FormActions, FormToggle};
use crate::shared::crud::CrudController;

/// Product row with display fallbacks already applied, so the template
/// never touches an absent field.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: u64,
    pub nombre: String,
    pub descripcion: String,
    pub precio: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id_producto,
            nombre: text_or(&p.nombre, "Sin nombre"),
            descripcion: opt_text_or(&p.descripcion, "Sin descripción"),
            precio: format!("${:.2}", p.precio_venta),
        }
    }
}

/// `(value, label)` pairs for the category select, with a placeholder
/// option when no categories exist yet.
pub fn category_options(categories: &[Category]) -> Vec<(String, String)> {
    if categories.is_empty() {
        return vec![(String::new(), "No hay categorías disponibles".to_string())];
    }
    categories
        .iter()
        .map(|c| (c.id_categoria.to_string(), text_or(&c.nombre, "Sin nombre")))
        .collect()
}

#[component]
pub fn ProductsSection() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let ctrl = stores.products;
    let categories = stores.categories.items;

    view! {
        <section id="productos" class="management-section">
            <div class="section-header">
                <h2>"Gestión de Productos"</h2>
                <FormToggle ctrl=ctrl label="Nuevo producto" />
            </div>
            <Show when=move || ctrl.form_state.get().is_visible()>
                <ProductForm ctrl=ctrl categories=categories />
            </Show>
            <EntityList ctrl=ctrl row=product_row />
        </section>
    }
}

fn product_row(p: &Product) -> AnyView {
    let row = ProductRow::from(p);
    view! {
        <div class="item-content">
            <h3>{row.nombre}</h3>
            <p>{row.descripcion}</p>
            <p class="price">{row.precio}</p>
        </div>
    }
    .into_any()
}

#[component]
fn ProductForm(
    ctrl: CrudController<Product>,
    categories: RwSignal<Vec<Category>>,
) -> impl IntoView {
    let draft = ctrl.draft;

    // A controlled select must hold a real option value; default a fresh
    // create form to the first category once categories are known.
    Effect::new(move |_| {
        let all = categories.get();
        if draft.with_untracked(|d| d.categoria_id.is_empty()) {
            if let Some(first) = all.first() {
                let id = first.id_categoria.to_string();
                draft.update(|d| d.categoria_id = id);
            }
        }
    });

    view! {
        <form
            id="producto-form"
            class="entity-form"
            on:submit=move |ev| {
                ev.prevent_default();
                ctrl.submit();
            }
        >
            <div class="form-group">
                <label for="nombre">"Nombre"</label>
                <input
                    type="text"
                    id="nombre"
                    name="nombre"
                    prop:value=move || draft.get().nombre
                    on:input=move |ev| draft.update(|d| d.nombre = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="descripcion">"Descripción"</label>
                <textarea
                    id="descripcion"
                    name="descripcion"
                    rows="3"
                    prop:value=move || draft.get().descripcion
                    on:input=move |ev| draft.update(|d| d.descripcion = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="precio_venta">"Precio de venta"</label>
                <input
                    type="number"
                    id="precio_venta"
                    name="precio_venta"
                    step="0.01"
                    min="0"
                    prop:value=move || draft.get().precio_venta
                    on:input=move |ev| draft.update(|d| d.precio_venta = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="categoria_id">"Categoría"</label>
                <select
                    id="categoria_id"
                    name="categoria_id"
                    prop:value=move || draft.get().categoria_id
                    on:change=move |ev| draft.update(|d| d.categoria_id = event_target_value(&ev))
                >
                    {move || {
                        category_options(&categories.get())
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <FormActions ctrl=ctrl />
        </form>
    }
}
