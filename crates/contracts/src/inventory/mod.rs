//! Wire types for the inventory REST API.
//!
//! The server speaks Spanish field names (`nombre`, `precio_venta`, ...);
//! structs here mirror the wire exactly so no rename layer is needed.
//! Each entity carries:
//! - a record type, deserialized from the API (identifier required, every
//!   other field tolerant of absence),
//! - a draft type holding raw form input, turned into a JSON body by
//!   [`Draft::payload`].

mod category;
mod kind;
mod product;
mod supplier;
mod user;

pub use category::{Category, CategoryDraft};
pub use kind::EntityKind;
pub use product::{Product, ProductDraft};
pub use supplier::{Supplier, SupplierDraft};
pub use user::{User, UserDraft};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Form payload for an entity. Field values are kept as the raw strings
/// the user typed; numeric coercion happens in [`Draft::payload`] so an
/// unparsable number surfaces as an error instead of a garbage body.
pub trait Draft: Clone + Default + Send + Sync + 'static {
    /// Build the JSON body for a create (POST) or update (PUT) request.
    /// `editing` is true for updates, which lets an entity shape the two
    /// payloads differently (users omit an untouched password).
    fn payload(&self, editing: bool) -> Result<serde_json::Value, String>;
}

/// A record kind served by the inventory API.
///
/// The identifier is the entity-specific field (`id_producto`,
/// `id_categoria`, ...); records without it fail deserialization. There
/// is deliberately no generic `id` fallback.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: EntityKind;

    type Draft: Draft;

    fn id(&self) -> u64;

    /// Populate a form draft from an existing record, for editing.
    fn to_draft(&self) -> Self::Draft;
}
