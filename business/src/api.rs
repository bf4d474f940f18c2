//! REST API client for the collections the pages display.
//!
//! Every call takes the API root (see [`BusinessConfig::api_url`](crate::BusinessConfig::api_url))
//! and maps transport, status and decoding failures into [`ApiError`].

use futures::future::join_all;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::applicants::{
    Applicant, ApplicationStatus, ApplicationStatusResponse, LastStep, LastStepResponse,
    ListApplicantsResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::http;
use crate::leads::{Lead, ListLeadsResponse};

async fn get_json<T: DeserializeOwned>(url: &str, what: &'static str) -> ApiResult<T> {
    let response = http::get(url).await?;

    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }

    response.json().map_err(|e| ApiError::decode(what, e))
}

/// GET `/leads/`
pub async fn list_leads(api_url: &str) -> ApiResult<Vec<Lead>> {
    let url = format!("{api_url}/leads/");
    let response: ListLeadsResponse = get_json(&url, "ListLeadsResponse").await?;
    Ok(response.into_leads())
}

/// GET `/application/status/?email=...`
pub async fn application_status(api_url: &str, email: &str) -> ApiResult<ApplicationStatus> {
    let url = format!(
        "{api_url}/application/status/?email={}",
        urlencoding::encode(email)
    );
    let response: ApplicationStatusResponse = get_json(&url, "ApplicationStatusResponse").await?;
    Ok(response.into())
}

/// GET `/step-cache/last/?phone=...`
///
/// `None` when the cache has no step for this phone number.
pub async fn last_step(api_url: &str, phone: &str) -> ApiResult<Option<LastStep>> {
    let url = format!(
        "{api_url}/step-cache/last/?phone={}",
        urlencoding::encode(phone)
    );
    let response: LastStepResponse = get_json(&url, "LastStepResponse").await?;
    Ok(response.into_last_step())
}

async fn status_or_unknown(api_url: &str, applicant: Applicant) -> Applicant {
    let status = match application_status(api_url, &applicant.email).await {
        Ok(status) => status,
        Err(e) => {
            warn!("Error fetching status for {}: {e}", applicant.email);
            ApplicationStatus::unknown()
        }
    };
    applicant.with_status(status)
}

async fn with_last_step(api_url: &str, applicant: Applicant) -> Applicant {
    if !applicant.is_status_unknown() {
        return applicant;
    }
    let step = match last_step(api_url, &applicant.phone).await {
        Ok(step) => step,
        Err(e) => {
            warn!("Error fetching step details for {}: {e}", applicant.phone);
            None
        }
    };
    applicant.with_last_step(step)
}

/// GET `/users/`, then the application status of every user.
///
/// Status lookups run concurrently and keep the list order. A failed lookup
/// marks that applicant as unknown instead of failing the list. Applicants
/// left unknown get their last onboarding step looked up as well.
pub async fn list_applicants(api_url: &str) -> ApiResult<Vec<Applicant>> {
    let url = format!("{api_url}/users/");
    let response: ListApplicantsResponse = get_json(&url, "ListApplicantsResponse").await?;
    debug!("Looking up application status for {} users", response.users.len());

    let applicants = join_all(
        response
            .users
            .into_iter()
            .map(|applicant| status_or_unknown(api_url, applicant)),
    )
    .await;

    let applicants = join_all(
        applicants
            .into_iter()
            .map(|applicant| with_last_step(api_url, applicant)),
    )
    .await;

    Ok(applicants)
}
