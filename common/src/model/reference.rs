use serde::{Deserialize, Serialize};

/// An `{id, nome}` pair served by the backend's lookup endpoints.
///
/// Every selection control in the app (status, party, office, gender,
/// education tier, income tier, user profile) is populated from a list of
/// these. They are read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupItem {
    pub id: i64,
    pub nome: String,
}

pub type Status = LookupItem;
pub type Party = LookupItem;
pub type Office = LookupItem;
pub type Gender = LookupItem;
pub type EducationTier = LookupItem;
pub type IncomeTier = LookupItem;
pub type UserProfile = LookupItem;

/// A Brazilian federative unit as returned by IBGE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uf {
    pub id: i64,
    pub sigla: String,
    pub nome: String,
}

/// A municipality as returned by IBGE. IBGE sends a deeply nested
/// `microrregiao` object too; only the fields used by the forms are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    pub id: i64,
    pub nome: String,
}

/// Returns the label for `id` in `items`, if present.
pub fn label_of(items: &[LookupItem], id: i64) -> Option<&str> {
    items
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.nome.as_str())
}
