//! Building blocks shared by the four management sections: the list
//! container with its loading/empty/error states, the form toggle
//! button, and the submit/cancel button row.

use contracts::inventory::Entity;
use leptos::prelude::*;

use crate::shared::crud::CrudController;

/// Renders one collection. `row` produces the per-entity display block;
/// the action buttons and the empty/loading placeholders are uniform.
#[component]
pub fn EntityList<E, F>(ctrl: CrudController<E>, row: F) -> impl IntoView
where
    E: Entity,
    F: Fn(&E) -> AnyView + Copy + Send + Sync + 'static,
{
    let kind = ctrl.kind();

    view! {
        <div class="list" id=format!("lista-{}", kind.collection())>
            {move || {
                ctrl.error
                    .get()
                    .map(|e| view! { <div class="list-error">{e}</div> })
            }}
            {move || {
                if ctrl.loading.get() {
                    return view! { <div class="loading-indicator">"Cargando..."</div> }
                        .into_any();
                }
                let items = ctrl.items.get();
                if items.is_empty() {
                    return view! {
                        <p class="no-data">
                            {format!("No hay {} disponibles", kind.collection())}
                        </p>
                    }
                    .into_any();
                }
                items
                    .iter()
                    .map(|item| {
                        let id = item.id();
                        view! {
                            <div class="list-item">
                                {row(item)}
                                <div class="item-actions">
                                    <button
                                        class="btn btn-edit"
                                        data-id=id.to_string()
                                        data-type=kind.collection()
                                        on:click=move |_| ctrl.begin_edit(id)
                                    >
                                        "Editar"
                                    </button>
                                    <button
                                        class="btn btn-delete"
                                        data-id=id.to_string()
                                        data-type=kind.collection()
                                        on:click=move |_| ctrl.remove(id)
                                    >
                                        "Eliminar"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

/// Expand/collapse button for a section's form, with the accessibility
/// state kept in sync with visibility.
#[component]
pub fn FormToggle<E: Entity>(ctrl: CrudController<E>, label: &'static str) -> impl IntoView {
    let kind = ctrl.kind();

    view! {
        <button
            type="button"
            class="btn btn-toggle"
            id=format!("toggle-{}-form", kind.singular())
            aria-expanded=move || ctrl.form_state.get().is_visible().to_string()
            on:click=move |_| ctrl.toggle_form()
        >
            {move || {
                if ctrl.form_state.get().is_visible() {
                    "Ocultar formulario".to_string()
                } else {
                    label.to_string()
                }
            }}
        </button>
    }
}

/// Submit/cancel row; the submit label tracks create vs edit mode.
#[component]
pub fn FormActions<E: Entity>(ctrl: CrudController<E>) -> impl IntoView {
    let kind = ctrl.kind();

    view! {
        <div class="form-actions">
            <button type="submit" class="btn btn-submit">
                {move || ctrl.form_state.get().submit_label(kind)}
            </button>
            <button type="button" class="btn btn-cancel" on:click=move |_| ctrl.cancel()>
                "Cancelar"
            </button>
        </div>
    }
}
