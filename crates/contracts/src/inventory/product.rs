use serde::{Deserialize, Deserializer, Serialize};

use super::{Draft, Entity, EntityKind};

/// Product record as served by `GET /productos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id_producto: u64,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "de_decimal")]
    pub precio_venta: f64,
    #[serde(default)]
    pub categoria_id: u64,
}

/// Product form input. `precio_venta` and `categoria_id` stay raw until
/// [`Draft::payload`] coerces them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub nombre: String,
    pub descripcion: String,
    pub precio_venta: String,
    pub categoria_id: String,
}

impl Draft for ProductDraft {
    fn payload(&self, _editing: bool) -> Result<serde_json::Value, String> {
        let precio = self
            .precio_venta
            .trim()
            .parse::<f64>()
            .map_err(|_| "Precio de venta inválido".to_string())?;
        let categoria = self
            .categoria_id
            .trim()
            .parse::<u64>()
            .map_err(|_| "Categoría inválida".to_string())?;

        Ok(serde_json::json!({
            "nombre": self.nombre,
            "descripcion": self.descripcion,
            "precio_venta": precio,
            "categoria_id": categoria,
        }))
    }
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;

    type Draft = ProductDraft;

    fn id(&self) -> u64 {
        self.id_producto
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone().unwrap_or_default(),
            precio_venta: self.precio_venta.to_string(),
            categoria_id: self.categoria_id.to_string(),
        }
    }
}

/// Accept the price as a JSON number or a numeric string; some backends
/// serialize DECIMAL columns as strings.
fn de_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_requires_its_own_id_field() {
        // Entity-specific identifier only; a generic `id` does not count.
        let err = serde_json::from_str::<Product>(r#"{"id": 7, "nombre": "Widget"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn optional_fields_default() {
        let p: Product = serde_json::from_str(r#"{"id_producto": 7}"#).unwrap();
        assert_eq!(p.id_producto, 7);
        assert_eq!(p.nombre, "");
        assert_eq!(p.descripcion, None);
        assert_eq!(p.precio_venta, 0.0);
    }

    #[test]
    fn price_accepts_string_or_number() {
        let a: Product =
            serde_json::from_str(r#"{"id_producto": 1, "precio_venta": 9.5}"#).unwrap();
        let b: Product =
            serde_json::from_str(r#"{"id_producto": 2, "precio_venta": "9.50"}"#).unwrap();
        assert_eq!(a.precio_venta, 9.5);
        assert_eq!(b.precio_venta, 9.5);
    }

    #[test]
    fn payload_coerces_numeric_fields() {
        let draft = ProductDraft {
            nombre: "Widget".into(),
            descripcion: "".into(),
            precio_venta: "9.5".into(),
            categoria_id: "1".into(),
        };
        let body = draft.payload(false).unwrap();
        assert_eq!(body["precio_venta"], serde_json::json!(9.5));
        assert_eq!(body["categoria_id"], serde_json::json!(1));
    }

    #[test]
    fn payload_rejects_unparsable_price() {
        let draft = ProductDraft {
            precio_venta: "gratis".into(),
            categoria_id: "1".into(),
            ..Default::default()
        };
        assert!(draft.payload(false).is_err());
    }

    #[test]
    fn to_draft_round_trips_display_values() {
        let p = Product {
            id_producto: 7,
            nombre: "Widget".into(),
            descripcion: None,
            precio_venta: 9.5,
            categoria_id: 3,
        };
        let d = p.to_draft();
        assert_eq!(d.nombre, "Widget");
        assert_eq!(d.precio_venta, "9.5");
        assert_eq!(d.categoria_id, "3");
    }
}
