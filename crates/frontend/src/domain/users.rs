use contracts::inventory::User;
use leptos::prelude::*;

use super::text_or;
use crate::bootstrap::AppStores;
use crate::shared::components::{EntityList, FormActions, FormToggle};
use crate::shared::crud::CrudController;

const ROLES: [&str; 3] = ["admin", "editor", "visor"];

/// User row. The role doubles as the badge's CSS class, with `visor`
/// styling when the server sent none.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub id: u64,
    pub nombre: String,
    pub email: String,
    pub rol_label: String,
    pub rol_class: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id_usuario,
            nombre: text_or(&u.nombre, "Sin nombre"),
            email: text_or(&u.email, "Sin email"),
            rol_label: text_or(&u.rol, "Sin rol"),
            rol_class: if u.rol.trim().is_empty() {
                "visor".to_string()
            } else {
                u.rol.clone()
            },
        }
    }
}

#[component]
pub fn UsersSection() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let ctrl = stores.users;

    view! {
        <section id="usuarios" class="management-section">
            <div class="section-header">
                <h2>"Gestión de Usuarios"</h2>
                <FormToggle ctrl=ctrl label="Nuevo usuario" />
            </div>
            <Show when=move || ctrl.form_state.get().is_visible()>
                <UserForm ctrl=ctrl />
            </Show>
            <EntityList ctrl=ctrl row=user_row />
        </section>
    }
}

fn user_row(u: &User) -> AnyView {
    let row = UserRow::from(u);
    view! {
        <div class="item-content">
            <h3>{row.nombre}</h3>
            <p>{row.email}</p>
            <span class=format!("badge {}", row.rol_class)>{row.rol_label}</span>
        </div>
    }
    .into_any()
}

#[component]
fn UserForm(ctrl: CrudController<User>) -> impl IntoView {
    let draft = ctrl.draft;
    let editing = move || ctrl.form_state.get().editing_id().is_some();

    // Keep the controlled select in step with what the browser shows.
    Effect::new(move |_| {
        if draft.with_untracked(|d| d.rol.is_empty()) {
            draft.update(|d| d.rol = ROLES[0].to_string());
        }
    });

    view! {
        <form
            id="usuario-form"
            class="entity-form"
            on:submit=move |ev| {
                ev.prevent_default();
                ctrl.submit();
            }
        >
            <div class="form-group">
                <label for="usuario-nombre">"Nombre"</label>
                <input
                    type="text"
                    id="usuario-nombre"
                    name="nombre"
                    prop:value=move || draft.get().nombre
                    on:input=move |ev| draft.update(|d| d.nombre = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="usuario-email">"Email"</label>
                <input
                    type="email"
                    id="usuario-email"
                    name="email"
                    prop:value=move || draft.get().email
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="usuario-contrasena">"Contraseña"</label>
                <input
                    type="password"
                    id="usuario-contrasena"
                    name="contraseña"
                    placeholder=move || {
                        if editing() { "Dejar en blanco para no cambiarla" } else { "" }
                    }
                    prop:value=move || draft.get().contrasena
                    on:input=move |ev| draft.update(|d| d.contrasena = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="usuario-rol">"Rol"</label>
                <select
                    id="usuario-rol"
                    name="rol"
                    prop:value=move || draft.get().rol
                    on:change=move |ev| draft.update(|d| d.rol = event_target_value(&ev))
                >
                    {ROLES
                        .into_iter()
                        .map(|rol| view! { <option value=rol>{rol}</option> })
                        .collect_view()}
                </select>
            </div>
            <FormActions ctrl=ctrl />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_uses_role_as_badge_class() {
        let u = User {
            id_usuario: 2,
            nombre: "Ana".into(),
            email: "ana@example.com".into(),
            rol: "admin".into(),
        };
        let row = UserRow::from(&u);
        assert_eq!(row.rol_class, "admin");
        assert_eq!(row.rol_label, "admin");
    }

    #[test]
    fn missing_role_degrades_to_visor_badge() {
        let u = User {
            id_usuario: 2,
            nombre: "Ana".into(),
            email: String::new(),
            rol: String::new(),
        };
        let row = UserRow::from(&u);
        assert_eq!(row.rol_class, "visor");
        assert_eq!(row.rol_label, "Sin rol");
        assert_eq!(row.email, "Sin email");
    }
}
