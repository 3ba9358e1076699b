//! Entity Form workflow shared by the candidate, user and survey screens.
//!
//! A form lives through `Idle -> Loading -> Ready -> Submitting ->
//! (Succeeded | Failed)`. Submitting validates locally first: a validation
//! failure returns before any request is built. The HTTP verb follows the
//! mode: `POST` to the collection when creating, `PUT` to the item when
//! editing.

pub mod candidate;
pub mod survey;
pub mod user;

use log::{error, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cascade::Ticket;
use crate::client::{ApiClient, HttpTransport};
use crate::error::{Result, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Submitting,
    Succeeded,
    Failed(String),
}

impl FormPhase {
    /// Whether the form must show a spinner instead of accepting input.
    pub fn is_busy(&self) -> bool {
        matches!(self, FormPhase::Loading | FormPhase::Submitting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn from_id(id: Option<i64>) -> Self {
        match id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn id(self) -> Option<i64> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }
}

/// A form whose local state turns into a request body.
pub trait EntityForm {
    type Payload: Serialize;

    /// Collection path, target of `POST`.
    const COLLECTION: &'static str;

    /// Item path, target of `PUT`.
    fn item_path(id: i64) -> String;

    /// Validates the fields and builds the body. The body carries `id = 0`
    /// when creating.
    fn payload(&self, mode: FormMode) -> std::result::Result<Self::Payload, ValidationError>;
}

/// A form that can be filled from an existing record.
pub trait Hydrate {
    type Entity: DeserializeOwned;

    fn detail_path(id: i64) -> String;

    /// Copies every field of `entity` into the form. Returns the ticket of
    /// the dependent fetch the new values require, if any.
    fn hydrate(&mut self, entity: Self::Entity) -> Option<Ticket>;
}

pub async fn load_entity<T, F>(client: &ApiClient<T>, id: i64) -> Result<F::Entity>
where
    T: HttpTransport,
    F: Hydrate,
{
    client.get(&F::detail_path(id)).await
}

pub async fn submit<T, F>(client: &ApiClient<T>, form: &F, mode: FormMode) -> Result<()>
where
    T: HttpTransport,
    F: EntityForm,
{
    let payload = form.payload(mode)?;
    let sent = match mode {
        FormMode::Create => client.post(F::COLLECTION, &payload).await,
        FormMode::Edit(id) => client.put(&F::item_path(id), &payload).await,
    };
    match sent {
        Ok(_) => {
            info!("{} saved ({mode:?})", F::COLLECTION);
            Ok(())
        }
        Err(e) => {
            error!("failed to save {} ({mode:?}): {e}", F::COLLECTION);
            Err(e)
        }
    }
}

/// Picker values arrive as strings; anything unparsable means "none".
pub fn parse_choice(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_values() {
        assert_eq!(parse_choice("12"), 12);
        assert_eq!(parse_choice(" 3 "), 3);
        assert_eq!(parse_choice(""), 0);
        assert_eq!(parse_choice("abc"), 0);
    }

    #[test]
    fn mode_follows_id_presence() {
        assert_eq!(FormMode::from_id(Some(42)), FormMode::Edit(42));
        assert_eq!(FormMode::from_id(None).id(), None);
        assert!(FormPhase::Submitting.is_busy());
        assert!(!FormPhase::Failed("x".into()).is_busy());
    }
}
