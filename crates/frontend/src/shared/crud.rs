//! Generic CRUD flow, one controller per entity kind.
//!
//! The controller owns everything the four management sections share:
//! the fetched list, the loading flag, the per-list error state and the
//! form (draft plus [`FormState`]). Sections only supply templates.
//! Every mutation re-fetches the affected collection; the rendered list
//! is a read-through cache, never patched in place.
//!
//! The async commands are thin wrappers: each awaits a request and then
//! hands the `Result` to a synchronous apply method, and the delete
//! confirmation comes through an injected gate. Both seams keep the
//! orchestration rules testable without a browser.

use contracts::inventory::{Draft, Entity, EntityKind};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::{ApiClient, ApiError};
use crate::shared::confirm;
use crate::shared::form_state::FormState;
use crate::shared::notifications::NotificationService;

/// Decides a delete; the browser confirm in production.
pub type ConfirmGate = fn(&str) -> bool;

/// Which HTTP call a submit performs, decided by the form state alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitMethod {
    Post,
    Put(u64),
}

fn submit_method(state: FormState) -> SubmitMethod {
    match state.editing_id() {
        Some(id) => SubmitMethod::Put(id),
        None => SubmitMethod::Post,
    }
}

pub struct CrudController<E: Entity> {
    api: StoredValue<ApiClient>,
    notify: NotificationService,
    confirm_gate: StoredValue<ConfirmGate>,
    pub items: RwSignal<Vec<E>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub form_state: RwSignal<FormState>,
    pub draft: RwSignal<E::Draft>,
}

// Derived Clone/Copy would demand E: Copy; every field already is.
impl<E: Entity> Clone for CrudController<E> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<E: Entity> Copy for CrudController<E> {}

impl<E: Entity> CrudController<E> {
    pub fn new(api: ApiClient, notify: NotificationService) -> Self {
        Self::with_confirm_gate(api, notify, confirm::confirm)
    }

    pub fn with_confirm_gate(
        api: ApiClient,
        notify: NotificationService,
        confirm_gate: ConfirmGate,
    ) -> Self {
        Self {
            api: StoredValue::new(api),
            notify,
            confirm_gate: StoredValue::new(confirm_gate),
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            form_state: RwSignal::new(FormState::Hidden),
            draft: RwSignal::new(E::Draft::default()),
        }
    }

    pub fn kind(&self) -> EntityKind {
        E::KIND
    }

    /// Fetch the collection and replace the rendered list. A failure
    /// leaves an empty list plus the per-list error state, and fires a
    /// notification; it never propagates.
    pub fn load(self) {
        spawn_local(async move { self.load_async().await });
    }

    /// Awaitable variant, used by the bootstrap sequence that must load
    /// categories before everything else.
    pub async fn load_async(self) {
        self.loading.set(true);
        let result = self.api.get_value().get_list::<E>(E::KIND).await;
        self.apply_load_result(result);
    }

    fn apply_load_result(self, result: Result<Vec<E>, ApiError>) {
        let kind = E::KIND;
        match result {
            Ok(items) => {
                log::debug!("{}: {} registros", kind.collection(), items.len());
                self.items.set(items);
                self.error.set(None);
            }
            Err(e) => {
                log::error!("error al cargar {}: {}", kind.collection(), e);
                self.notify
                    .error(format!("Error al cargar {}: {}", kind.collection(), e));
                self.items.set(Vec::new());
                self.error.set(Some(format!("Error al cargar {}", kind.collection())));
            }
        }
        self.loading.set(false);
    }

    /// Submit the form: POST in create mode, PUT in edit mode. Success
    /// resets the form and re-fetches; failure leaves the draft and the
    /// form state untouched so the user can retry.
    pub fn submit(self) {
        let kind = E::KIND;
        let method = submit_method(self.form_state.get_untracked());
        let updating = matches!(method, SubmitMethod::Put(_));
        let body = match self.draft.get_untracked().payload(updating) {
            Ok(body) => body,
            Err(message) => {
                log::warn!("{}: {}", kind.singular(), message);
                self.notify.error(message);
                return;
            }
        };

        spawn_local(async move {
            let api = self.api.get_value();
            let result = match method {
                SubmitMethod::Put(id) => api.update(kind, id, &body).await,
                SubmitMethod::Post => api.create(kind, &body).await,
            };
            if self.apply_submit_result(updating, result) {
                self.load_async().await;
            }
        });
    }

    /// Returns true when the collection must be re-fetched.
    fn apply_submit_result(
        self,
        updating: bool,
        result: Result<serde_json::Value, ApiError>,
    ) -> bool {
        let kind = E::KIND;
        match result {
            Ok(_) => {
                let verb = if updating { "actualizado" } else { "guardado" };
                self.notify
                    .success(format!("{} {} correctamente", kind.singular(), verb));
                self.reset_form();
                true
            }
            Err(e) => {
                let verb = if updating { "actualizar" } else { "guardar" };
                log::error!("error al {} {}: {}", verb, kind.singular(), e);
                self.notify
                    .error(format!("Error al {} {}: {}", verb, kind.singular(), e));
                false
            }
        }
    }

    /// Fetch one record and open the form on it. If the fetch fails the
    /// form stays as it was.
    pub fn begin_edit(self, id: u64) {
        let kind = E::KIND;
        spawn_local(async move {
            match self.api.get_value().get_one::<E>(kind, id).await {
                Ok(record) => {
                    self.draft.set(record.to_draft());
                    self.form_state.set(FormState::Edit(id));
                    scroll_form_into_view(kind);
                }
                Err(e) => {
                    log::error!("error al editar {} {}: {}", kind.singular(), id, e);
                    self.notify.error(format!(
                        "Error al cargar {} para edición: {}",
                        kind.singular(),
                        e
                    ));
                }
            }
        });
    }

    /// Delete after consulting the confirm gate. Declining sends
    /// nothing; a failed DELETE leaves the displayed list stale.
    pub fn remove(self, id: u64) {
        let kind = E::KIND;
        let gate = self.confirm_gate.get_value();
        if !gate(&confirm::delete_prompt(kind)) {
            return;
        }
        spawn_local(async move {
            let result = self.api.get_value().delete(kind, id).await;
            if self.apply_remove_result(result) {
                self.load_async().await;
            }
        });
    }

    /// Returns true when the collection must be re-fetched.
    fn apply_remove_result(self, result: Result<(), ApiError>) -> bool {
        let kind = E::KIND;
        match result {
            Ok(()) => {
                self.notify
                    .success(format!("{} eliminado correctamente", kind.singular()));
                true
            }
            Err(e) => {
                log::error!("error al eliminar {}: {}", kind.singular(), e);
                self.notify
                    .error(format!("Error al eliminar {}: {}", kind.singular(), e));
                false
            }
        }
    }

    /// Expand/collapse from the section header button. Opening always
    /// starts from a clean create form.
    pub fn toggle_form(self) {
        let next = self.form_state.get_untracked().toggled();
        self.draft.set(E::Draft::default());
        self.form_state.set(next);
    }

    pub fn cancel(self) {
        self.reset_form();
    }

    fn reset_form(self) {
        self.draft.set(E::Draft::default());
        self.form_state.set(FormState::Hidden);
    }
}

/// Bring the section's form into view after an edit begins, matching the
/// smooth scroll of the original console.
fn scroll_form_into_view(kind: EntityKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id(&format!("{}-form", kind.singular())) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        log::warn!("formulario no encontrado: {}-form", kind.singular());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::inventory::{Category, Product};

    use crate::config::ApiConfig;

    fn controller<E: Entity>(gate: ConfirmGate) -> (CrudController<E>, NotificationService) {
        let notify = NotificationService::new();
        let api = ApiClient::new(ApiConfig::new("https://api.test/api"));
        (CrudController::with_confirm_gate(api, notify, gate), notify)
    }

    fn product(id: u64) -> Product {
        Product {
            id_producto: id,
            nombre: "Widget".into(),
            descripcion: None,
            precio_venta: 9.5,
            categoria_id: 1,
        }
    }

    fn declining_gate(message: &str) -> bool {
        assert!(message.contains("producto"));
        false
    }

    #[test]
    fn declined_confirm_sends_no_delete() {
        let (ctrl, notify) = controller::<Product>(declining_gate);
        ctrl.items.set(vec![product(7)]);

        // A declined gate returns before any task is spawned, so the
        // list, the error state and the banners all stay untouched.
        ctrl.remove(7);

        assert_eq!(ctrl.items.get_untracked(), vec![product(7)]);
        assert!(ctrl.error.get_untracked().is_none());
        assert!(notify.items().get_untracked().is_empty());
    }

    #[test]
    fn edit_mode_selects_put_never_post() {
        assert_eq!(submit_method(FormState::Hidden), SubmitMethod::Post);
        assert_eq!(submit_method(FormState::Create), SubmitMethod::Post);
        assert_eq!(submit_method(FormState::Edit(7)), SubmitMethod::Put(7));
    }

    #[test]
    fn one_failed_collection_does_not_block_another() {
        let (products, _) = controller::<Product>(declining_gate);
        let (categories, _) = controller::<Category>(|_| false);

        products.apply_load_result(Err(ApiError::Http {
            status: 500,
            body: "boom".into(),
        }));
        categories.apply_load_result(Ok(vec![Category {
            id_categoria: 1,
            nombre: "Beverages".into(),
        }]));

        assert!(products.items.get_untracked().is_empty());
        assert!(products.error.get_untracked().is_some());
        assert!(!products.loading.get_untracked());
        assert_eq!(categories.items.get_untracked().len(), 1);
        assert!(categories.error.get_untracked().is_none());
    }

    #[test]
    fn failed_delete_keeps_list_and_emits_one_error() {
        let (ctrl, notify) = controller::<Product>(|_| true);
        ctrl.items.set(vec![product(7)]);

        let reload = ctrl.apply_remove_result(Err(ApiError::Http {
            status: 500,
            body: "boom".into(),
        }));

        assert!(!reload);
        assert_eq!(ctrl.items.get_untracked(), vec![product(7)]);
        let banners = notify.items().get_untracked();
        assert_eq!(banners.len(), 1);
        assert!(banners[0].message.contains("Error al eliminar producto"));
    }

    #[test]
    fn successful_submit_resets_form_and_requests_reload() {
        let (ctrl, _) = controller::<Product>(|_| true);
        ctrl.form_state.set(FormState::Edit(7));
        ctrl.draft.set(product(7).to_draft());

        let reload = ctrl.apply_submit_result(true, Ok(serde_json::json!({})));

        assert!(reload);
        assert_eq!(ctrl.form_state.get_untracked(), FormState::Hidden);
        assert_eq!(ctrl.draft.get_untracked(), Default::default());
    }

    #[test]
    fn failed_submit_leaves_draft_for_retry() {
        let (ctrl, _) = controller::<Product>(|_| true);
        ctrl.form_state.set(FormState::Edit(7));
        let draft = product(7).to_draft();
        ctrl.draft.set(draft.clone());

        let reload = ctrl.apply_submit_result(
            true,
            Err(ApiError::Transport("connection refused".into())),
        );

        assert!(!reload);
        assert_eq!(ctrl.form_state.get_untracked(), FormState::Edit(7));
        assert_eq!(ctrl.draft.get_untracked(), draft);
    }
}
