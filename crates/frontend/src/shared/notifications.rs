//! Transient success/error banners.
//!
//! The service lives in Leptos context; any component or controller can
//! push a banner, which dismisses itself after a level-dependent delay.

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    pub fn css_class(self) -> &'static str {
        match self {
            Level::Success => "alert-success",
            Level::Error => "alert-error",
        }
    }

    /// Errors linger longer so the user can read the detail.
    pub fn dismiss_after_ms(self) -> u32 {
        match self {
            Level::Success => 3_000,
            Level::Error => 5_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub level: Level,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn items(&self) -> RwSignal<Vec<Notification>> {
        self.items
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Level::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Level::Error, message.into());
    }

    fn push(&self, level: Level, message: String) {
        match level {
            Level::Success => log::info!("{}", message),
            Level::Error => log::error!("{}", message),
        }

        let id = self
            .next_id
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or(0);
        self.items.update(|all| {
            all.push(Notification { id, level, message });
        });

        // Auto-dismiss runs only in the browser.
        #[cfg(target_arch = "wasm32")]
        {
            let items = self.items;
            spawn_local(async move {
                TimeoutFuture::new(level.dismiss_after_ms()).await;
                items.update(|all| all.retain(|n| n.id != id));
            });
        }
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NotificationArea() -> impl IntoView {
    let notify = expect_context::<NotificationService>();

    view! {
        <div class="alerts" aria-live="polite">
            {move || {
                notify
                    .items()
                    .get()
                    .into_iter()
                    .map(|n| {
                        view! { <div class=format!("alert {}", n.level.css_class())>{n.message}</div> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_outlive_successes() {
        assert!(Level::Error.dismiss_after_ms() > Level::Success.dismiss_after_ms());
    }

    #[test]
    fn css_classes_per_level() {
        assert_eq!(Level::Success.css_class(), "alert-success");
        assert_eq!(Level::Error.css_class(), "alert-error");
    }

    #[test]
    fn pushed_banners_are_recorded_in_order() {
        let svc = NotificationService::new();
        svc.success("guardado correctamente");
        svc.error("Error al cargar productos");
        let items = svc.items().get_untracked();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].level, Level::Success);
        assert_eq!(items[1].level, Level::Error);
        assert!(items[1].id > items[0].id);
    }
}
