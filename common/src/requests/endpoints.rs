//! Paths of every endpoint the app consumes, relative to the configured base.

use urlencoding::encode;

pub const LOGIN: &str = "/Seguranca/Login";
pub const VALIDATE_TOKEN: &str = "/Seguranca/ValidateToken";
pub const CHANGE_PASSWORD: &str = "/Seguranca/TrocarSenha";

pub const CANDIDATES: &str = "/Candidato";
pub const CANDIDATE_ROWS: &str = "/Candidato/dadosBasicos";
pub const CANDIDATE_STATUSES: &str = "/Candidato/tipoStatus";
pub const PARTIES: &str = "/Candidato/tipoPartidoPolitico";
pub const OFFICES: &str = "/Candidato/tipoCargoDisputado";

pub const USERS: &str = "/Usuario";
pub const USER_ROWS: &str = "/Usuario/dadosBasicos";
pub const USER_PROFILES: &str = "/PerfilUsuario";

pub const SURVEYS: &str = "/PesquisaEleitoral";
pub const GENDERS: &str = "/PesquisaEleitoral/generos";
pub const EDUCATION_TIERS: &str = "/PesquisaEleitoral/nivelEscolaridade";
pub const INCOME_TIERS: &str = "/PesquisaEleitoral/rendaFamiliar";

/// IBGE: every federative unit of the country.
pub const STATES: &str = "/localidades/estados";

pub fn candidate(id: i64) -> String {
    format!("{CANDIDATES}/{id}")
}

pub fn candidate_details(id: i64) -> String {
    format!("{CANDIDATES}/{id}/dadosCompletos")
}

pub fn candidate_status(id: i64) -> String {
    format!("{CANDIDATES}/{id}/mudarStatus")
}

pub fn user(id: i64) -> String {
    format!("{USERS}/{id}")
}

pub fn user_status(id: i64) -> String {
    format!("{USERS}/{id}/mudarStatus")
}

/// IBGE: municipalities of one federative unit.
pub fn municipalities(uf: &str) -> String {
    format!("{STATES}/{}/municipios", encode(uf))
}

pub fn mayor_candidates(uf: &str, municipio: &str) -> String {
    format!(
        "{SURVEYS}/prefeitos?uf={}&municipio={}",
        encode(uf),
        encode(municipio)
    )
}

pub fn councillor_candidates(uf: &str, municipio: &str) -> String {
    format!(
        "{SURVEYS}/vereadores?uf={}&municipio={}",
        encode(uf),
        encode(municipio)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_lookups_encode_municipality_names() {
        assert_eq!(
            mayor_candidates("SP", "São José dos Campos"),
            "/PesquisaEleitoral/prefeitos?uf=SP&municipio=S%C3%A3o%20Jos%C3%A9%20dos%20Campos"
        );
        assert_eq!(
            councillor_candidates("SP", "Campinas"),
            "/PesquisaEleitoral/vereadores?uf=SP&municipio=Campinas"
        );
    }

    #[test]
    fn entity_paths() {
        assert_eq!(candidate_details(42), "/Candidato/42/dadosCompletos");
        assert_eq!(candidate(42), "/Candidato/42");
        assert_eq!(user_status(7), "/Usuario/7/mudarStatus");
        assert_eq!(municipalities("RJ"), "/localidades/estados/RJ/municipios");
    }
}
