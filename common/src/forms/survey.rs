use chrono::{DateTime, Utc};

use crate::cascade::{GeographyCascade, Ticket};
use crate::dates;
use crate::error::ValidationError;
use crate::forms::{EntityForm, FormMode, parse_choice};
use crate::masks;
use crate::model::survey::{Interviewee, SurveyResponse};
use crate::requests::endpoints;
use crate::validation;

/// Interviewer id recorded on every survey.
pub const SURVEY_USER_ID: i64 = 1;

/// Status every new survey starts in.
pub const SURVEY_INITIAL_STATUS: i64 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyForm {
    pub interviewee_name: String,
    /// `DD/MM/YYYY` as typed.
    pub interviewee_birth_date: String,
    /// Masked as `(00) 00000-0000`.
    pub interviewee_phone: String,
    pub id_genero: String,
    pub id_nivel_escolaridade: String,
    pub id_renda_familiar: String,
    pub undecided: bool,
    pub blank_or_null: bool,
    pub suggestion: String,
    pub geography: GeographyCascade,
    pub interviewed_at: DateTime<Utc>,
    mayor: Option<i64>,
    councillor: Option<i64>,
}

impl SurveyForm {
    pub fn new(interviewed_at: DateTime<Utc>) -> Self {
        Self {
            interviewee_name: String::new(),
            interviewee_birth_date: String::new(),
            interviewee_phone: String::new(),
            id_genero: String::new(),
            id_nivel_escolaridade: String::new(),
            id_renda_familiar: String::new(),
            undecided: false,
            blank_or_null: false,
            suggestion: String::new(),
            geography: GeographyCascade::default(),
            interviewed_at,
            mayor: None,
            councillor: None,
        }
    }

    pub fn type_birth_date(&mut self, typed: &str) {
        self.interviewee_birth_date = masks::mask_date(typed);
    }

    pub fn type_phone(&mut self, typed: &str) {
        self.interviewee_phone = masks::mask_phone(typed);
    }

    /// Candidate choices are tied to the place, so they reset with it.
    pub fn select_state(&mut self, uf: &str) -> Option<Ticket> {
        self.reset_choices();
        self.geography.select_state(uf)
    }

    pub fn select_municipality(&mut self, municipality: &str) -> Option<Ticket> {
        self.reset_choices();
        self.geography.select_municipality(municipality)
    }

    pub fn mayor(&self) -> Option<i64> {
        self.mayor
    }

    pub fn councillor(&self) -> Option<i64> {
        self.councillor
    }

    /// Picks a mayoral candidate from the scoped lookup. Unknown ids and
    /// `"0"` clear the choice.
    pub fn choose_mayor(&mut self, raw: &str) {
        let id = parse_choice(raw);
        self.mayor = self
            .geography
            .candidates
            .mayors
            .iter()
            .any(|c| c.id == id)
            .then_some(id);
    }

    pub fn choose_councillor(&mut self, raw: &str) {
        let id = parse_choice(raw);
        self.councillor = self
            .geography
            .candidates
            .councillors
            .iter()
            .any(|c| c.id == id)
            .then_some(id);
    }

    fn reset_choices(&mut self) {
        self.mayor = None;
        self.councillor = None;
    }
}

impl EntityForm for SurveyForm {
    type Payload = SurveyResponse;

    const COLLECTION: &'static str = endpoints::SURVEYS;

    fn item_path(id: i64) -> String {
        format!("{}/{id}", endpoints::SURVEYS)
    }

    fn payload(&self, mode: FormMode) -> Result<SurveyResponse, ValidationError> {
        validation::required("UF", self.geography.state())?;
        validation::required("Município", self.geography.municipality())?;
        validation::required("Nome do Entrevistado", &self.interviewee_name)?;
        let birth_date =
            validation::required_date("Data de Nascimento do Entrevistado", &self.interviewee_birth_date)?;
        validation::required("Celular do Entrevistado", &self.interviewee_phone)?;

        let uf = self.geography.state().to_string();
        let municipio = self.geography.municipality().to_string();
        Ok(SurveyResponse {
            id: mode.id().unwrap_or(0),
            data_entrevista: dates::timestamp(self.interviewed_at),
            uf: uf.clone(),
            municipio: municipio.clone(),
            voto_indeciso: self.undecided,
            voto_branco_nulo: self.blank_or_null,
            sugestao_melhoria: self.suggestion.trim().to_string(),
            id_candidato_prefeito: self.mayor.unwrap_or(0),
            id_candidato_vereador: self.councillor.unwrap_or(0),
            id_usuario: SURVEY_USER_ID,
            id_status: SURVEY_INITIAL_STATUS,
            entrevistado: vec![Interviewee {
                id: 0,
                nome_completo: self.interviewee_name.trim().to_string(),
                data_nascimento: birth_date,
                celular: self.interviewee_phone.clone(),
                uf,
                municipio,
                id_genero: parse_choice(&self.id_genero),
                id_nivel_escolaridade: parse_choice(&self.id_nivel_escolaridade),
                id_renda_familiar: parse_choice(&self.id_renda_familiar),
            }],
            request: serde_json::Map::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::ScopedCandidates;
    use crate::model::candidate::CandidateOption;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, 14, 0, 0).unwrap()
    }

    fn filled() -> SurveyForm {
        let mut form = SurveyForm::new(at());
        form.interviewee_name = "Carlos Lima".into();
        form.type_birth_date("02031990");
        form.type_phone("19987654321");
        form.geography.restore("SP", "Campinas");
        form
    }

    fn option(id: i64) -> CandidateOption {
        CandidateOption {
            id,
            nome_urna: format!("Candidato {id}"),
        }
    }

    #[test]
    fn payload_nests_a_single_interviewee() {
        let survey = filled().payload(FormMode::Create).unwrap();
        assert_eq!(survey.id, 0);
        assert_eq!(survey.data_entrevista, "2024-09-01T14:00:00.000Z");
        assert_eq!(survey.entrevistado.len(), 1);
        let interviewee = &survey.entrevistado[0];
        assert_eq!(interviewee.data_nascimento, "1990-03-02T00:00:00.000Z");
        assert_eq!(interviewee.celular, "(19) 98765-4321");
        assert_eq!(interviewee.municipio, "Campinas");
        assert_eq!(survey.id_candidato_prefeito, 0);
        assert_eq!(survey.id_usuario, SURVEY_USER_ID);
    }

    #[test]
    fn required_fields_block_the_payload() {
        let mut form = filled();
        form.interviewee_phone.clear();
        assert_eq!(
            form.payload(FormMode::Create),
            Err(ValidationError::MissingField("Celular do Entrevistado"))
        );

        let mut form = filled();
        form.select_state("");
        assert_eq!(
            form.payload(FormMode::Create),
            Err(ValidationError::MissingField("UF"))
        );
    }

    #[test]
    fn choices_must_come_from_the_scoped_lookup() {
        let mut form = SurveyForm::new(at());
        form.select_state("SP");
        let ticket = form.select_municipality("Campinas").unwrap();
        form.geography.apply_candidates(
            ticket,
            ScopedCandidates {
                mayors: vec![option(10)],
                councillors: vec![option(20)],
            },
        );

        form.choose_mayor("10");
        form.choose_councillor("99");
        assert_eq!(form.mayor(), Some(10));
        assert_eq!(form.councillor(), None);

        form.select_municipality("Valinhos");
        assert_eq!(form.mayor(), None);
    }

    #[test]
    fn body_matches_backend_shape() {
        let body = serde_json::to_value(filled().payload(FormMode::Create).unwrap()).unwrap();
        assert_eq!(body["votoBrancoNulo"], false);
        assert_eq!(body["entrevistado"][0]["nomeCompleto"], "Carlos Lima");
        assert_eq!(body["request"], serde_json::json!({}));
    }
}
