use common::cascade::Ticket;
use common::error::Result;
use common::model::candidate::Candidate;
use common::model::reference::Municipality;
use common::references::CandidateReferences;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NomeCompleto,
    NomeUrna,
    DataNascimento,
    Foto,
    Status,
    Party,
    Office,
}

pub enum Msg {
    ReferencesLoaded(CandidateReferences),
    Loaded(Result<Candidate>),
    MunicipalitiesLoaded(Ticket, Result<Vec<Municipality>>),
    Edit(Field, String),
    SelectState(String),
    SelectMunicipality(String),
    Submit,
    Submitted(Result<()>),
    Back,
}
