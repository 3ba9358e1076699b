//! Reference Data Loader: the lookup lists behind every selection control.
//!
//! All lists of a screen are requested at once. A list that fails to load is
//! logged and left empty; the name of each failed list is reported so the
//! screen can decide whether to alert.

use futures_util::join;
use log::error;

use crate::client::{ApiClient, HttpTransport};
use crate::error::Result;
use crate::model::reference::{
    EducationTier, Gender, IncomeTier, LookupItem, Office, Party, Status, Uf, UserProfile,
};
use crate::requests::endpoints;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateReferences {
    pub statuses: Vec<Status>,
    pub parties: Vec<Party>,
    pub offices: Vec<Office>,
    pub states: Vec<Uf>,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserReferences {
    pub statuses: Vec<Status>,
    pub profiles: Vec<UserProfile>,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyReferences {
    pub states: Vec<Uf>,
    pub genders: Vec<Gender>,
    pub education_tiers: Vec<EducationTier>,
    pub income_tiers: Vec<IncomeTier>,
    pub missing: Vec<&'static str>,
}

pub async fn candidate_references<T: HttpTransport>(client: &ApiClient<T>) -> CandidateReferences {
    let (statuses, parties, offices, states) = join!(
        fetch_statuses(client),
        client.get::<Vec<LookupItem>>(endpoints::PARTIES),
        client.get::<Vec<LookupItem>>(endpoints::OFFICES),
        fetch_states(client)
    );

    let mut missing = Vec::new();
    CandidateReferences {
        statuses: or_empty(statuses, "status", &mut missing),
        parties: or_empty(parties, "partidos", &mut missing),
        offices: or_empty(offices, "cargos", &mut missing),
        states: or_empty(states, "estados", &mut missing),
        missing,
    }
}

pub async fn user_references<T: HttpTransport>(client: &ApiClient<T>) -> UserReferences {
    let (statuses, profiles) = join!(
        fetch_statuses(client),
        client.get::<Vec<LookupItem>>(endpoints::USER_PROFILES)
    );

    let mut missing = Vec::new();
    UserReferences {
        statuses: or_empty(statuses, "status", &mut missing),
        profiles: or_empty(profiles, "perfis", &mut missing),
        missing,
    }
}

pub async fn survey_references<T: HttpTransport>(client: &ApiClient<T>) -> SurveyReferences {
    let (states, genders, education_tiers, income_tiers) = join!(
        fetch_states(client),
        client.get::<Vec<LookupItem>>(endpoints::GENDERS),
        client.get::<Vec<LookupItem>>(endpoints::EDUCATION_TIERS),
        client.get::<Vec<LookupItem>>(endpoints::INCOME_TIERS)
    );

    let mut missing = Vec::new();
    SurveyReferences {
        states: or_empty(states, "estados", &mut missing),
        genders: or_empty(genders, "gêneros", &mut missing),
        education_tiers: or_empty(education_tiers, "níveis de escolaridade", &mut missing),
        income_tiers: or_empty(income_tiers, "rendas familiares", &mut missing),
        missing,
    }
}

/// Statuses shared by candidates and users.
pub async fn fetch_statuses<T: HttpTransport>(client: &ApiClient<T>) -> Result<Vec<Status>> {
    client.get(endpoints::CANDIDATE_STATUSES).await
}

/// Every UF, sorted by abbreviation for the picker.
pub async fn fetch_states<T: HttpTransport>(client: &ApiClient<T>) -> Result<Vec<Uf>> {
    let mut states: Vec<Uf> = client.get_geo(endpoints::STATES).await?;
    states.sort_by(|a, b| a.sigla.cmp(&b.sigla));
    Ok(states)
}

fn or_empty<R>(
    result: Result<Vec<R>>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Vec<R> {
    result.unwrap_or_else(|e| {
        error!("failed to load {name}: {e}");
        missing.push(name);
        Vec::new()
    })
}
