use common::cascade::Ticket;
use common::error::Result;
use common::list::{ListSnapshot, StatusChange};
use common::model::candidate::{Candidate, CandidateRow};

pub enum Msg {
    Refresh,
    Refreshed(Ticket, ListSnapshot<CandidateRow>),
    /// Raw picker value for the row's new status.
    ChangeStatus { id: i64, status: String },
    StatusChanged(Result<StatusChange>),
    Create,
    Edit(i64),
    ShowDetails(i64),
    DetailsLoaded(i64, Result<Candidate>),
    CloseDetails,
}
