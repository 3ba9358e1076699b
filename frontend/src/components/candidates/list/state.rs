use common::list::EntityList;
use common::model::candidate::{Candidate, CandidateRow};
use yew::NodeRef;

/// What the details sheet currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Details {
    #[default]
    Closed,
    Loading(i64),
    Loaded(Candidate),
    Failed,
}

pub struct CandidateListScreen {
    pub list: EntityList<CandidateRow>,
    pub details: Details,
    pub details_ref: NodeRef,
    /// A status `PATCH` is in flight.
    pub saving_status: bool,
}

impl CandidateListScreen {
    pub fn new() -> Self {
        Self {
            list: EntityList::default(),
            details: Details::Closed,
            details_ref: NodeRef::default(),
            saving_status: false,
        }
    }
}
