use contracts::inventory::EntityKind;

/// Blocking browser confirm; anything but an explicit "OK" counts as a
/// decline, including a missing window.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

pub fn delete_prompt(kind: EntityKind) -> String {
    format!("¿Estás seguro de eliminar este {}?", kind.singular())
}
