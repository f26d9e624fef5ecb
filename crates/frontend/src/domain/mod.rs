//! The four management sections. Each pairs a row model (record with
//! display fallbacks applied) with its form, on top of the generic
//! [`crate::shared::crud::CrudController`].

pub mod categories;
pub mod products;
pub mod suppliers;
pub mod users;

/// Fallback text for a blank display field.
pub(crate) fn text_or(value: &str, fallback: &'static str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Fallback text for an absent or blank optional field.
pub(crate) fn opt_text_or(value: &Option<String>, fallback: &'static str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_fall_back() {
        assert_eq!(text_or("", "Sin nombre"), "Sin nombre");
        assert_eq!(text_or("  ", "Sin nombre"), "Sin nombre");
        assert_eq!(text_or("Widget", "Sin nombre"), "Widget");
    }

    #[test]
    fn optional_fields_fall_back() {
        assert_eq!(opt_text_or(&None, "Sin descripción"), "Sin descripción");
        assert_eq!(
            opt_text_or(&Some(String::new()), "Sin descripción"),
            "Sin descripción"
        );
        assert_eq!(opt_text_or(&Some("ok".into()), "Sin descripción"), "ok");
    }
}
