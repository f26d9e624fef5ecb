use serde::{Deserialize, Serialize};

use super::{Draft, Entity, EntityKind};

/// User record. The credential never appears here: the API does not
/// return it and the console never renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id_usuario: u64,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub rol: String,
}

/// User form input. `contrasena` is write-only; see [`Draft::payload`]
/// for the update rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub nombre: String,
    pub email: String,
    pub contrasena: String,
    pub rol: String,
}

impl Draft for UserDraft {
    /// On update, a blank password field means "keep the stored
    /// credential", so the key is omitted from the PUT body. Creates
    /// always send it.
    fn payload(&self, editing: bool) -> Result<serde_json::Value, String> {
        let mut body = serde_json::json!({
            "nombre": self.nombre,
            "email": self.email,
            "rol": self.rol,
        });
        if !editing || !self.contrasena.is_empty() {
            body["contraseña"] = serde_json::Value::String(self.contrasena.clone());
        }
        Ok(body)
    }
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    type Draft = UserDraft;

    fn id(&self) -> u64 {
        self.id_usuario
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            nombre: self.nombre.clone(),
            email: self.email.clone(),
            // Password is never echoed back into the form.
            contrasena: String::new(),
            rol: self.rol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(password: &str) -> UserDraft {
        UserDraft {
            nombre: "Ana".into(),
            email: "ana@example.com".into(),
            contrasena: password.into(),
            rol: "admin".into(),
        }
    }

    #[test]
    fn create_always_sends_password() {
        let body = draft("secreta").payload(false).unwrap();
        assert_eq!(body["contraseña"], "secreta");
    }

    #[test]
    fn update_omits_untouched_password() {
        let body = draft("").payload(true).unwrap();
        assert!(body.get("contraseña").is_none());
        assert_eq!(body["nombre"], "Ana");
    }

    #[test]
    fn update_sends_edited_password() {
        let body = draft("nueva").payload(true).unwrap();
        assert_eq!(body["contraseña"], "nueva");
    }

    #[test]
    fn editing_never_echoes_credential_into_the_form() {
        let u = User {
            id_usuario: 2,
            nombre: "Ana".into(),
            email: "ana@example.com".into(),
            rol: "editor".into(),
        };
        assert_eq!(u.to_draft().contrasena, "");
    }
}
