use serde::{Deserialize, Serialize};

/// Full candidate record, as served by `GET /Candidato/{id}/dadosCompletos`
/// and sent by `POST /Candidato` / `PUT /Candidato/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub id: i64,
    pub nome_completo: String,
    pub nome_urna: String,
    /// ISO date string, e.g. `1980-05-17T00:00:00.000Z`.
    pub data_nascimento: String,
    pub uf: String,
    pub municipio: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub foto: String,
    pub id_status: i64,
    pub id_partido_politico: i64,
    pub id_cargo_disputado: i64,
}

/// Row of `GET /Candidato/dadosBasicos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRow {
    pub id: i64,
    pub nome_completo: String,
    pub nome_urna: String,
    pub uf: String,
    pub municipio: String,
    pub data_nascimento: String,
    pub id_status: i64,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub status_nome: String,
}

/// Candidate choice offered by the survey, scoped to one UF + municipality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateOption {
    pub id: i64,
    pub nome_urna: String,
}
