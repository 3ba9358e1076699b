use common::cascade::{ScopedCandidates, Ticket};
use common::error::Result;
use common::model::reference::Municipality;
use common::references::SurveyReferences;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    BirthDate,
    Phone,
    Gender,
    Education,
    Income,
    Suggestion,
    Mayor,
    Councillor,
}

pub enum Msg {
    ReferencesLoaded(SurveyReferences),
    MunicipalitiesLoaded(Ticket, Result<Vec<Municipality>>),
    CandidatesLoaded(Ticket, ScopedCandidates),
    Edit(Field, String),
    SetUndecided(bool),
    SetBlankOrNull(bool),
    SelectState(String),
    SelectMunicipality(String),
    Submit,
    Submitted(Result<()>),
    Back,
}
