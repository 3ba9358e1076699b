use log::warn;

use crate::cascade::{GeographyCascade, Ticket};
use crate::dates;
use crate::error::ValidationError;
use crate::forms::{EntityForm, FormMode, Hydrate, parse_choice};
use crate::masks;
use crate::model::candidate::Candidate;
use crate::requests::endpoints;
use crate::validation;

/// Editable state of the candidate screen. Pickers keep their raw string
/// values until the body is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateForm {
    pub nome_completo: String,
    pub nome_urna: String,
    /// `DD/MM/YYYY` as typed.
    pub data_nascimento: String,
    pub foto: String,
    pub id_status: String,
    pub id_partido_politico: String,
    pub id_cargo_disputado: String,
    pub geography: GeographyCascade,
}

impl CandidateForm {
    pub fn type_birth_date(&mut self, typed: &str) {
        self.data_nascimento = masks::mask_date(typed);
    }
}

impl EntityForm for CandidateForm {
    type Payload = Candidate;

    const COLLECTION: &'static str = endpoints::CANDIDATES;

    fn item_path(id: i64) -> String {
        endpoints::candidate(id)
    }

    fn payload(&self, mode: FormMode) -> Result<Candidate, ValidationError> {
        validation::required("Nome Completo", &self.nome_completo)?;
        validation::required("Nome na Urna", &self.nome_urna)?;
        let data_nascimento = validation::required_date("Data de Nascimento", &self.data_nascimento)?;
        validation::required("UF", self.geography.state())?;
        validation::required("Município", self.geography.municipality())?;
        validation::optional_url("Foto", &self.foto)?;

        let id_status = parse_choice(&self.id_status);
        let id_partido_politico = parse_choice(&self.id_partido_politico);
        let id_cargo_disputado = parse_choice(&self.id_cargo_disputado);
        validation::required_choice("Status", id_status)?;
        validation::required_choice("Partido Político", id_partido_politico)?;
        validation::required_choice("Cargo Disputado", id_cargo_disputado)?;

        Ok(Candidate {
            id: mode.id().unwrap_or(0),
            nome_completo: self.nome_completo.trim().to_string(),
            nome_urna: self.nome_urna.trim().to_string(),
            data_nascimento,
            uf: self.geography.state().to_string(),
            municipio: self.geography.municipality().to_string(),
            foto: self.foto.trim().to_string(),
            id_status,
            id_partido_politico,
            id_cargo_disputado,
        })
    }
}

impl Hydrate for CandidateForm {
    type Entity = Candidate;

    fn detail_path(id: i64) -> String {
        endpoints::candidate_details(id)
    }

    fn hydrate(&mut self, candidate: Candidate) -> Option<Ticket> {
        self.nome_completo = candidate.nome_completo;
        self.nome_urna = candidate.nome_urna;
        self.data_nascimento = dates::api_to_display(&candidate.data_nascimento)
            .unwrap_or_else(|e| {
                warn!("candidate {} has an unreadable birth date: {e}", candidate.id);
                String::new()
            });
        self.foto = candidate.foto;
        self.id_status = candidate.id_status.to_string();
        self.id_partido_politico = candidate.id_partido_politico.to_string();
        self.id_cargo_disputado = candidate.id_cargo_disputado.to_string();
        self.geography.restore(&candidate.uf, &candidate.municipio)
    }
}
