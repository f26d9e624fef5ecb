use serde::{Deserialize, Serialize};

use super::{Draft, Entity, EntityKind};

/// Category record. Categories feed the product form's select, so they
/// are always fetched before products on startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id_categoria: u64,
    #[serde(default)]
    pub nombre: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub nombre: String,
}

impl Draft for CategoryDraft {
    fn payload(&self, _editing: bool) -> Result<serde_json::Value, String> {
        Ok(serde_json::json!({ "nombre": self.nombre }))
    }
}

impl Entity for Category {
    const KIND: EntityKind = EntityKind::Category;

    type Draft = CategoryDraft;

    fn id(&self) -> u64 {
        self.id_categoria
    }

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            nombre: self.nombre.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_name_only() {
        let body = CategoryDraft { nombre: "Bebidas".into() }.payload(false).unwrap();
        assert_eq!(body, serde_json::json!({ "nombre": "Bebidas" }));
    }

    #[test]
    fn record_requires_its_own_id_field() {
        assert!(serde_json::from_str::<Category>(r#"{"id": 1, "nombre": "Bebidas"}"#).is_err());
    }
}
