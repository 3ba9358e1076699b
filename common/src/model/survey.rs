use serde::{Deserialize, Serialize};

/// Body of `POST /PesquisaEleitoral`.
///
/// The backend models the interviewee as a collection even though the app
/// always records exactly one, hence `entrevistado` is a `Vec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub id: i64,
    pub data_entrevista: String,
    pub uf: String,
    pub municipio: String,
    pub voto_indeciso: bool,
    pub voto_branco_nulo: bool,
    pub sugestao_melhoria: String,
    /// `0` when the interviewee picked no mayoral candidate.
    pub id_candidato_prefeito: i64,
    /// `0` when the interviewee picked no councillor candidate.
    pub id_candidato_vereador: i64,
    pub id_usuario: i64,
    pub id_status: i64,
    pub entrevistado: Vec<Interviewee>,
    #[serde(default)]
    pub request: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interviewee {
    pub id: i64,
    pub nome_completo: String,
    pub data_nascimento: String,
    pub celular: String,
    pub uf: String,
    pub municipio: String,
    pub id_genero: i64,
    pub id_nivel_escolaridade: i64,
    pub id_renda_familiar: i64,
}
