/// The four entity kinds managed by the console, with their REST and
/// display metadata. This registry replaces per-entity branching: code
/// that needs a path, a label or an identifier field asks the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Product,
    Category,
    Supplier,
    User,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Product,
        EntityKind::Category,
        EntityKind::Supplier,
        EntityKind::User,
    ];

    /// Plural REST path segment.
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Product => "productos",
            EntityKind::Category => "categorias",
            EntityKind::Supplier => "proveedores",
            EntityKind::User => "usuarios",
        }
    }

    /// Singular form, used in prompts and DOM ids.
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Product => "producto",
            EntityKind::Category => "categoria",
            EntityKind::Supplier => "proveedor",
            EntityKind::User => "usuario",
        }
    }

    /// Capitalized singular for button labels and notifications.
    pub fn display(&self) -> &'static str {
        match self {
            EntityKind::Product => "Producto",
            EntityKind::Category => "Categoría",
            EntityKind::Supplier => "Proveedor",
            EntityKind::User => "Usuario",
        }
    }

    /// Name of the identifier field on the wire.
    pub fn id_field(&self) -> &'static str {
        match self {
            EntityKind::Product => "id_producto",
            EntityKind::Category => "id_categoria",
            EntityKind::Supplier => "id_proveedor",
            EntityKind::User => "id_usuario",
        }
    }
}
