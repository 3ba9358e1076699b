//! Entity List workflow: focus-driven refresh and inline status change.

use futures_util::join;
use log::{error, info};
use serde::de::DeserializeOwned;

use crate::cascade::{RequestSequence, Ticket};
use crate::client::{ApiClient, HttpTransport};
use crate::error::Result;
use crate::model::candidate::CandidateRow;
use crate::model::reference::Status;
use crate::model::user::UserRow;
use crate::references::fetch_statuses;
use crate::requests::endpoints;

/// A row of a list screen that carries a status.
pub trait ListRow: DeserializeOwned {
    /// Collection of rows, `GET`.
    const ROWS: &'static str;

    fn id(&self) -> i64;
    fn status_id(&self) -> i64;

    /// Target of the inline status `PATCH`.
    fn status_path(id: i64) -> String;
}

impl ListRow for CandidateRow {
    const ROWS: &'static str = endpoints::CANDIDATE_ROWS;

    fn id(&self) -> i64 {
        self.id
    }

    fn status_id(&self) -> i64 {
        self.id_status
    }

    fn status_path(id: i64) -> String {
        endpoints::candidate_status(id)
    }
}

impl ListRow for UserRow {
    const ROWS: &'static str = endpoints::USER_ROWS;

    fn id(&self) -> i64 {
        self.id
    }

    fn status_id(&self) -> i64 {
        self.id_status
    }

    fn status_path(id: i64) -> String {
        endpoints::user_status(id)
    }
}

/// What one refresh brought back. Rows and statuses fail independently.
#[derive(Debug)]
pub struct ListSnapshot<R> {
    pub rows: Result<Vec<R>>,
    pub statuses: Result<Vec<Status>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityList<R> {
    pub rows: Vec<R>,
    pub statuses: Vec<Status>,
    pub loading: bool,
    refreshes: RequestSequence,
    /// Bumped whenever a status picker must drop what the user picked.
    picker_revision: u32,
}

impl<R> Default for EntityList<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            statuses: Vec::new(),
            loading: false,
            refreshes: RequestSequence::default(),
            picker_revision: 0,
        }
    }
}

impl<R: ListRow> EntityList<R> {
    /// The screen gained focus (or a status change succeeded): one refresh
    /// starts, tagged with the returned ticket.
    pub fn begin_refresh(&mut self) -> Ticket {
        self.loading = true;
        self.refreshes.issue()
    }

    /// Applies a refresh. A failed part keeps what was displayed before.
    /// Returns `false` when a newer refresh has started since.
    pub fn apply(&mut self, ticket: Ticket, snapshot: ListSnapshot<R>) -> bool {
        if !self.refreshes.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match snapshot.rows {
            Ok(rows) => self.rows = rows,
            Err(e) => error!("failed to load {}: {e}", R::ROWS),
        }
        match snapshot.statuses {
            Ok(statuses) => self.statuses = statuses,
            Err(e) => error!("failed to load statuses: {e}"),
        }
        true
    }

    pub fn row(&self, id: i64) -> Option<&R> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// A picked status was not applied (rejected by the backend, or not a
    /// status at all). Every picker keyed with [`Self::picker_key`] must be
    /// rebuilt from the stored rows.
    pub fn reset_pickers(&mut self) {
        self.picker_revision = self.picker_revision.wrapping_add(1);
    }

    /// Key of the status picker of row `id`; changes after [`Self::reset_pickers`].
    pub fn picker_key(&self, id: i64) -> String {
        format!("{id}-{}", self.picker_revision)
    }
}

/// Fetches the collection and the status list, one request each.
pub async fn refresh<T, R>(client: &ApiClient<T>) -> ListSnapshot<R>
where
    T: HttpTransport,
    R: ListRow,
{
    let (rows, statuses) = join!(client.get::<Vec<R>>(R::ROWS), fetch_statuses(client));
    ListSnapshot { rows, statuses }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// Same status (or unknown row); nothing was sent.
    Unchanged,
    /// The backend accepted the new status; the list must be refreshed.
    Changed,
}

/// Sends the new status of row `id` unless it already has it. The body is
/// the bare status id.
pub async fn change_status<T, R>(
    client: &ApiClient<T>,
    rows: &[R],
    id: i64,
    new_status: i64,
) -> Result<StatusChange>
where
    T: HttpTransport,
    R: ListRow,
{
    let Some(current) = rows.iter().find(|row| row.id() == id) else {
        return Ok(StatusChange::Unchanged);
    };
    if current.status_id() == new_status {
        return Ok(StatusChange::Unchanged);
    }

    client.patch(&R::status_path(id), &new_status).await?;
    info!("{} now has status {new_status}", R::status_path(id));
    Ok(StatusChange::Changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn row(id: i64, status: i64) -> UserRow {
        UserRow {
            id,
            nome_usuario: format!("user{id}"),
            email: format!("user{id}@example.com"),
            id_status: status,
            status_nome: String::new(),
            id_perfil_usuario: 1,
            perfil_nome: String::new(),
        }
    }

    #[test]
    fn failed_refresh_keeps_previous_rows() {
        let mut list = EntityList::<UserRow>::default();
        let first = list.begin_refresh();
        list.apply(
            first,
            ListSnapshot {
                rows: Ok(vec![row(1, 1)]),
                statuses: Ok(Vec::new()),
            },
        );

        let second = list.begin_refresh();
        assert!(list.loading);
        list.apply(
            second,
            ListSnapshot {
                rows: Err(Error::Transport("offline".into())),
                statuses: Err(Error::Transport("offline".into())),
            },
        );
        assert!(!list.loading);
        assert_eq!(list.rows, vec![row(1, 1)]);
    }

    #[test]
    fn older_refresh_is_ignored() {
        let mut list = EntityList::<UserRow>::default();
        let old = list.begin_refresh();
        let new = list.begin_refresh();
        assert!(list.apply(
            new,
            ListSnapshot {
                rows: Ok(vec![row(2, 1)]),
                statuses: Ok(Vec::new()),
            },
        ));
        assert!(!list.apply(
            old,
            ListSnapshot {
                rows: Ok(vec![row(1, 1)]),
                statuses: Ok(Vec::new()),
            },
        ));
        assert_eq!(list.row(2).map(|r| r.id), Some(2));
        assert!(list.row(1).is_none());
    }

    #[test]
    fn resetting_pickers_changes_their_keys() {
        let mut list = EntityList::<UserRow>::default();
        let before = list.picker_key(5);
        list.reset_pickers();
        assert_ne!(list.picker_key(5), before);
        assert_ne!(list.picker_key(5), list.picker_key(6));
    }
}
