use contracts::inventory::EntityKind;

/// Per-form state: hidden, creating, or editing one record. The editing
/// id lives in this value, never on a DOM attribute, so create vs update
/// is decided in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    Create,
    Edit(u64),
}

impl FormState {
    pub fn is_visible(self) -> bool {
        !matches!(self, FormState::Hidden)
    }

    pub fn editing_id(self) -> Option<u64> {
        match self {
            FormState::Edit(id) => Some(id),
            _ => None,
        }
    }

    /// Toggle-button transition: any visible state collapses, hidden
    /// opens in create mode.
    pub fn toggled(self) -> FormState {
        if self.is_visible() {
            FormState::Hidden
        } else {
            FormState::Create
        }
    }

    pub fn submit_label(self, kind: EntityKind) -> String {
        match self {
            FormState::Edit(_) => format!("Actualizar {}", kind.display()),
            _ => format!("Guardar {}", kind.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_in_create_mode() {
        assert_eq!(FormState::Hidden.toggled(), FormState::Create);
    }

    #[test]
    fn toggle_collapses_any_visible_state() {
        assert_eq!(FormState::Create.toggled(), FormState::Hidden);
        assert_eq!(FormState::Edit(7).toggled(), FormState::Hidden);
    }

    #[test]
    fn editing_id_only_in_edit_mode() {
        assert_eq!(FormState::Edit(7).editing_id(), Some(7));
        assert_eq!(FormState::Create.editing_id(), None);
        assert_eq!(FormState::Hidden.editing_id(), None);
    }

    #[test]
    fn submit_label_switches_between_save_and_update() {
        assert_eq!(
            FormState::Create.submit_label(EntityKind::Product),
            "Guardar Producto"
        );
        assert_eq!(
            FormState::Edit(7).submit_label(EntityKind::Product),
            "Actualizar Producto"
        );
        assert_eq!(
            FormState::Hidden.submit_label(EntityKind::Category),
            "Guardar Categoría"
        );
    }
}
