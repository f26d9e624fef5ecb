use serde::{Deserialize, Serialize};

use super::{Draft, Entity, EntityKind};

/// Supplier record. Contact details are all optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id_proveedor: u64,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub contacto: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierDraft {
    pub nombre: String,
    pub contacto: String,
    pub telefono: String,
    pub email: String,
}

impl Draft for SupplierDraft {
    fn payload(&self, _editing: bool) -> Result<serde_json::Value, String> {
        Ok(serde_json::json!({
            "nombre": self.nombre,
            "contacto": self.contacto,
            "telefono": self.telefono,
            "email": self.email,
        }))
    }
}

impl Entity for Supplier {
    const KIND: EntityKind = EntityKind::Supplier;

    type Draft = SupplierDraft;

    fn id(&self) -> u64 {
        self.id_proveedor
    }

    fn to_draft(&self) -> SupplierDraft {
        SupplierDraft {
            nombre: self.nombre.clone(),
            contacto: self.contacto.clone().unwrap_or_default(),
            telefono: self.telefono.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_draft_blanks_missing_contact_fields() {
        let s = Supplier {
            id_proveedor: 4,
            nombre: "Acme".into(),
            contacto: None,
            telefono: Some("555-0100".into()),
            email: None,
        };
        let d = s.to_draft();
        assert_eq!(d.contacto, "");
        assert_eq!(d.telefono, "555-0100");
        assert_eq!(d.email, "");
    }

    #[test]
    fn record_tolerates_sparse_wire_objects() {
        let s: Supplier = serde_json::from_str(r#"{"id_proveedor": 4}"#).unwrap();
        assert_eq!(s.nombre, "");
        assert_eq!(s.contacto, None);
    }
}
