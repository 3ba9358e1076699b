use serde::{Deserialize, Serialize};

/// User record sent by `POST /Usuario` and `PUT /Usuario/{id}`.
///
/// `senha` is write-only: the backend never returns it, so it defaults to an
/// empty string when a user is fetched for editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: i64,
    pub nome_usuario: String,
    pub email: String,
    #[serde(
        default,
        deserialize_with = "super::null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub senha: String,
    pub id_status: i64,
    pub id_perfil_usuario: i64,
    #[serde(default)]
    pub precisa_trocar_senha: bool,
}

/// Row of `GET /Usuario/dadosBasicos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: i64,
    pub nome_usuario: String,
    pub email: String,
    pub id_status: i64,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub status_nome: String,
    pub id_perfil_usuario: i64,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub perfil_nome: String,
}
