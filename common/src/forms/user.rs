use crate::cascade::Ticket;
use crate::error::ValidationError;
use crate::forms::{EntityForm, FormMode, Hydrate, parse_choice};
use crate::model::user::User;
use crate::requests::endpoints;
use crate::validation;

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub nome_usuario: String,
    pub email: String,
    /// Required when creating. Left blank while editing, the current
    /// password is kept.
    pub senha: String,
    pub id_status: String,
    pub id_perfil_usuario: String,
    pub precisa_trocar_senha: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            nome_usuario: String::new(),
            email: String::new(),
            senha: String::new(),
            id_status: String::new(),
            id_perfil_usuario: String::new(),
            precisa_trocar_senha: true,
        }
    }
}

impl EntityForm for UserForm {
    type Payload = User;

    const COLLECTION: &'static str = endpoints::USERS;

    fn item_path(id: i64) -> String {
        endpoints::user(id)
    }

    fn payload(&self, mode: FormMode) -> Result<User, ValidationError> {
        validation::required("Nome de Usuário", &self.nome_usuario)?;
        validation::required("Email", &self.email)?;
        if mode == FormMode::Create {
            validation::required("Senha", &self.senha)?;
        }
        let id_status = parse_choice(&self.id_status);
        let id_perfil_usuario = parse_choice(&self.id_perfil_usuario);
        validation::required_choice("Status", id_status)?;
        validation::required_choice("Perfil de Usuário", id_perfil_usuario)?;

        Ok(User {
            id: mode.id().unwrap_or(0),
            nome_usuario: self.nome_usuario.trim().to_string(),
            email: self.email.trim().to_string(),
            senha: self.senha.clone(),
            id_status,
            id_perfil_usuario,
            precisa_trocar_senha: self.precisa_trocar_senha,
        })
    }
}

impl Hydrate for UserForm {
    type Entity = User;

    fn detail_path(id: i64) -> String {
        endpoints::user(id)
    }

    fn hydrate(&mut self, user: User) -> Option<Ticket> {
        self.nome_usuario = user.nome_usuario;
        self.email = user.email;
        self.senha.clear();
        self.id_status = user.id_status.to_string();
        self.id_perfil_usuario = user.id_perfil_usuario.to_string();
        self.precisa_trocar_senha = user.precisa_trocar_senha;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UserForm {
        UserForm {
            nome_usuario: "ana".into(),
            email: "ana@example.com".into(),
            senha: "s3nh@".into(),
            id_status: "1".into(),
            id_perfil_usuario: "2".into(),
            precisa_trocar_senha: true,
        }
    }

    #[test]
    fn new_users_must_change_their_password_by_default() {
        assert!(UserForm::default().precisa_trocar_senha);
    }

    #[test]
    fn password_is_required_only_when_creating() {
        let mut form = filled();
        form.senha.clear();
        assert_eq!(
            form.payload(FormMode::Create),
            Err(ValidationError::MissingField("Senha"))
        );

        let user = form.payload(FormMode::Edit(9)).unwrap();
        assert_eq!(user.id, 9);
        let body = serde_json::to_value(&user).unwrap();
        assert!(body.get("senha").is_none());
    }

    #[test]
    fn profile_must_be_chosen() {
        let mut form = filled();
        form.id_perfil_usuario = "0".into();
        assert_eq!(
            form.payload(FormMode::Create),
            Err(ValidationError::MissingChoice("Perfil de Usuário"))
        );
    }

    #[test]
    fn body_uses_backend_field_names() {
        let body = serde_json::to_value(filled().payload(FormMode::Create).unwrap()).unwrap();
        assert_eq!(body["nomeUsuario"], "ana");
        assert_eq!(body["idPerfilUsuario"], 2);
        assert_eq!(body["precisaTrocarSenha"], true);
        assert_eq!(body["senha"], "s3nh@");
    }
}
