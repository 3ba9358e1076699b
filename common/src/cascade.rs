//! Cascading Geography Resolver: state -> municipalities -> scoped candidates.
//!
//! Responses of the dependent fetches may arrive in any order. Each fetch is
//! tagged with a [`Ticket`]; a response is applied only while its ticket is
//! the latest one issued for that level, so a slow answer for a previous
//! state can never overwrite the list of the current one.

use futures_util::join;
use log::{error, warn};

use crate::client::{ApiClient, HttpTransport};
use crate::error::Result;
use crate::model::candidate::CandidateOption;
use crate::model::reference::{Municipality, Uf};
use crate::requests::endpoints;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Issues monotonically increasing tickets; only the newest one is current.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        Ticket(self.latest)
    }

    /// Makes every ticket issued so far stale.
    pub fn invalidate(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScopedCandidates {
    pub mayors: Vec<CandidateOption>,
    pub councillors: Vec<CandidateOption>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeographyCascade {
    pub states: Vec<Uf>,
    pub municipalities: Vec<Municipality>,
    pub candidates: ScopedCandidates,
    state: String,
    municipality: String,
    municipality_requests: RequestSequence,
    candidate_requests: RequestSequence,
}

impl GeographyCascade {
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn municipality(&self) -> &str {
        &self.municipality
    }

    /// Picks a state. Returns the ticket for the municipality fetch, or
    /// `None` when nothing must be fetched (same state, or no state).
    ///
    /// The municipality selection, its list and the scoped candidates all
    /// belong to the previous state and are dropped.
    pub fn select_state(&mut self, uf: &str) -> Option<Ticket> {
        let uf = uf.trim();
        if uf == self.state {
            return None;
        }
        self.state = uf.to_string();
        self.municipality.clear();
        self.municipalities.clear();
        self.clear_candidates();

        if self.state.is_empty() {
            self.municipality_requests.invalidate();
            None
        } else {
            Some(self.municipality_requests.issue())
        }
    }

    /// Sets both levels at once, as when an existing record is loaded.
    /// Returns the ticket for the municipality list of `uf`.
    pub fn restore(&mut self, uf: &str, municipality: &str) -> Option<Ticket> {
        self.state = uf.trim().to_string();
        self.municipality = municipality.trim().to_string();
        self.municipalities.clear();
        self.clear_candidates();

        if self.state.is_empty() {
            self.municipality_requests.invalidate();
            None
        } else {
            Some(self.municipality_requests.issue())
        }
    }

    /// Applies a municipality list. Returns `false` if the answer was stale
    /// and has been discarded.
    pub fn apply_municipalities(&mut self, ticket: Ticket, municipalities: Vec<Municipality>) -> bool {
        if !self.municipality_requests.is_current(ticket) {
            warn!("discarding stale municipality list");
            return false;
        }
        self.municipalities = municipalities;
        true
    }

    /// Picks a municipality. Returns the ticket for the scoped candidate
    /// lookup once both levels are filled.
    pub fn select_municipality(&mut self, municipality: &str) -> Option<Ticket> {
        let municipality = municipality.trim();
        if municipality == self.municipality {
            return None;
        }
        self.municipality = municipality.to_string();
        self.clear_candidates();

        if self.candidates_selectable() {
            Some(self.candidate_requests.issue())
        } else {
            None
        }
    }

    pub fn apply_candidates(&mut self, ticket: Ticket, candidates: ScopedCandidates) -> bool {
        if !self.candidate_requests.is_current(ticket) {
            warn!("discarding stale candidate lookup");
            return false;
        }
        self.candidates = candidates;
        true
    }

    pub fn municipality_selectable(&self) -> bool {
        !self.state.is_empty()
    }

    pub fn candidates_selectable(&self) -> bool {
        !self.state.is_empty() && !self.municipality.is_empty()
    }

    fn clear_candidates(&mut self) {
        self.candidates = ScopedCandidates::default();
        self.candidate_requests.invalidate();
    }
}

pub async fn fetch_municipalities<T: HttpTransport>(
    client: &ApiClient<T>,
    uf: &str,
) -> Result<Vec<Municipality>> {
    client.get_geo(&endpoints::municipalities(uf)).await
}

/// Mayor and councillor candidates running in `municipality`/`uf`. One
/// request per office; a failed office is logged and left empty.
pub async fn fetch_scoped_candidates<T: HttpTransport>(
    client: &ApiClient<T>,
    uf: &str,
    municipality: &str,
) -> ScopedCandidates {
    let mayors_path = endpoints::mayor_candidates(uf, municipality);
    let councillors_path = endpoints::councillor_candidates(uf, municipality);
    let (mayors, councillors) = join!(
        client.get::<Vec<CandidateOption>>(&mayors_path),
        client.get::<Vec<CandidateOption>>(&councillors_path)
    );

    ScopedCandidates {
        mayors: mayors.unwrap_or_else(|e| {
            error!("failed to load mayor candidates: {e}");
            Vec::new()
        }),
        councillors: councillors.unwrap_or_else(|e| {
            error!("failed to load councillor candidates: {e}");
            Vec::new()
        }),
    }
}
