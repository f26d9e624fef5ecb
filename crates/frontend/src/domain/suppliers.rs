use contracts::inventory::Supplier;
use leptos::prelude::*;

use super::{opt_text_or, text_or};
use crate::bootstrap::AppStores;
use crate::shared::components::{EntityList, FormActions, FormToggle};
use crate::shared::crud::CrudController;

/// Supplier row. Contact and phone degrade to fallback text; the email
/// line is rendered only when present, as in the original console.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierRow {
    pub id: u64,
    pub nombre: String,
    pub contacto: String,
    pub telefono: String,
    pub email: Option<String>,
}

impl From<&Supplier> for SupplierRow {
    fn from(s: &Supplier) -> Self {
        Self {
            id: s.id_proveedor,
            nombre: text_or(&s.nombre, "Sin nombre"),
            contacto: opt_text_or(&s.contacto, "Sin contacto"),
            telefono: opt_text_or(&s.telefono, "Sin teléfono"),
            email: s.email.clone().filter(|e| !e.trim().is_empty()),
        }
    }
}

#[component]
pub fn SuppliersSection() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let ctrl = stores.suppliers;

    view! {
        <section id="proveedores" class="management-section">
            <div class="section-header">
                <h2>"Gestión de Proveedores"</h2>
                <FormToggle ctrl=ctrl label="Nuevo proveedor" />
            </div>
            <Show when=move || ctrl.form_state.get().is_visible()>
                <SupplierForm ctrl=ctrl />
            </Show>
            <EntityList ctrl=ctrl row=supplier_row />
        </section>
    }
}

fn supplier_row(s: &Supplier) -> AnyView {
    let row = SupplierRow::from(s);
    view! {
        <div class="item-content">
            <h3>{row.nombre}</h3>
            <p>{row.contacto}</p>
            <p>{row.telefono}</p>
            {row.email.map(|email| view! { <p>{email}</p> })}
        </div>
    }
    .into_any()
}

#[component]
fn SupplierForm(ctrl: CrudController<Supplier>) -> impl IntoView {
    let draft = ctrl.draft;

    view! {
        <form
            id="proveedor-form"
            class="entity-form"
            on:submit=move |ev| {
                ev.prevent_default();
                ctrl.submit();
            }
        >
            <div class="form-group">
                <label for="proveedor-nombre">"Nombre"</label>
                <input
                    type="text"
                    id="proveedor-nombre"
                    name="nombre"
                    prop:value=move || draft.get().nombre
                    on:input=move |ev| draft.update(|d| d.nombre = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="proveedor-contacto">"Contacto"</label>
                <input
                    type="text"
                    id="proveedor-contacto"
                    name="contacto"
                    prop:value=move || draft.get().contacto
                    on:input=move |ev| draft.update(|d| d.contacto = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="proveedor-telefono">"Teléfono"</label>
                <input
                    type="tel"
                    id="proveedor-telefono"
                    name="telefono"
                    prop:value=move || draft.get().telefono
                    on:input=move |ev| draft.update(|d| d.telefono = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="proveedor-email">"Email"</label>
                <input
                    type="email"
                    id="proveedor-email"
                    name="email"
                    prop:value=move || draft.get().email
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
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
    fn row_applies_contact_fallbacks() {
        let s = Supplier {
            id_proveedor: 4,
            nombre: "Acme".into(),
            contacto: None,
            telefono: None,
            email: None,
        };
        let row = SupplierRow::from(&s);
        assert_eq!(row.contacto, "Sin contacto");
        assert_eq!(row.telefono, "Sin teléfono");
        assert_eq!(row.email, None);
    }

    #[test]
    fn blank_email_is_not_rendered() {
        let s = Supplier {
            id_proveedor: 4,
            nombre: "Acme".into(),
            contacto: Some("Ana".into()),
            telefono: Some("555-0100".into()),
            email: Some("  ".into()),
        };
        assert_eq!(SupplierRow::from(&s).email, None);
    }
}
