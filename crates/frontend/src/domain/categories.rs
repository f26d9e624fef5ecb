use contracts::inventory::Category;
use leptos::prelude::*;

use super::text_or;
use crate::bootstrap::AppStores;
use crate::shared::components::{EntityList, FormActions, FormToggle};
use crate::shared::crud::CrudController;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub id: u64,
    pub nombre: String,
}

impl From<&Category> for CategoryRow {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id_categoria,
            nombre: text_or(&c.nombre, "Sin nombre"),
        }
    }
}

#[component]
pub fn CategoriesSection() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let ctrl = stores.categories;

    view! {
        <section id="categorias" class="management-section">
            <div class="section-header">
                <h2>"Gestión de Categorías"</h2>
                <FormToggle ctrl=ctrl label="Nueva categoría" />
            </div>
            <Show when=move || ctrl.form_state.get().is_visible()>
                <CategoryForm ctrl=ctrl />
            </Show>
            <EntityList ctrl=ctrl row=category_row />
        </section>
    }
}

fn category_row(c: &Category) -> AnyView {
    let row = CategoryRow::from(c);
    view! {
        <div class="item-content">
            <h3>{row.nombre}</h3>
        </div>
    }
    .into_any()
}

#[component]
fn CategoryForm(ctrl: CrudController<Category>) -> impl IntoView {
    let draft = ctrl.draft;

    view! {
        <form
            id="categoria-form"
            class="entity-form"
            on:submit=move |ev| {
                ev.prevent_default();
                ctrl.submit();
            }
        >
            <div class="form-group">
                <label for="categoria-nombre">"Nombre"</label>
                <input
                    type="text"
                    id="categoria-nombre"
                    name="nombre"
                    prop:value=move || draft.get().nombre
                    on:input=move |ev| draft.update(|d| d.nombre = event_target_value(&ev))
                />
            </div>
            <FormActions ctrl=ctrl />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_falls_back_on_blank_name() {
        let c = Category {
            id_categoria: 3,
            nombre: String::new(),
        };
        let row = CategoryRow::from(&c);
        assert_eq!(row.id, 3);
        assert_eq!(row.nombre, "Sin nombre");
    }
}
