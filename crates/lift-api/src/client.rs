//! Async client for the LiftCare backend.
//!
//! Every endpoint answers with the [`Envelope`] shape. Transport failures,
//! HTTP errors, rejections and malformed bodies are mapped onto [`ApiError`].

use lift_model::{
    AmcContract, Complaint, ComplaintDraft, CustomerProfile, Invoice, MaintenanceVisit, NewUser,
    Quotation, Registration, Session,
};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::config::ApiSettings;
use crate::envelope::Envelope;
use crate::error::{ApiError, Result};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("LiftCare/", env!("CARGO_PKG_VERSION"));

/// Client for the customer backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Create a client for the backend described by `settings`.
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let base = Url::parse(settings.base_url.trim()).map_err(|e| ApiError::InvalidUrl {
            url: settings.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl {
                url: settings.base_url.clone(),
                reason: "expected an http or https URL".to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { http, base })
    }

    /// The base URL endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// Ask the backend to send a one-time password to `email`.
    pub async fn request_otp(&self, email: &str) -> Result<()> {
        self.call::<serde_json::Value>(Method::POST, &["auth", "send-otp"], Some(&json!({ "email": email })))
            .await?;
        info!("OTP requested");
        Ok(())
    }

    /// Exchange an email and one-time password for a session.
    pub async fn login(&self, email: &str, otp: &str) -> Result<Session> {
        let session: Session = self
            .call(Method::POST, &["auth", "login"], Some(&json!({ "email": email, "otp": otp })))
            .await?
            .into_data()?;
        info!(user_id = %session.user_id, role = %session.role, "signed in");
        Ok(session)
    }

    /// Submit a self-registration.
    pub async fn register(&self, form: &Registration) -> Result<()> {
        self.call::<serde_json::Value>(Method::POST, &["auth", "register"], Some(form))
            .await?;
        info!("registration submitted");
        Ok(())
    }

    /// End the session on the server.
    pub async fn logout(&self, session: &Session) -> Result<()> {
        self.call::<serde_json::Value>(
            Method::POST,
            &["auth", "logout"],
            Some(&json!({ "user_id": session.user_id })),
        )
        .await?;
        info!(user_id = %session.user_id, "signed out");
        Ok(())
    }

    // =========================================================================
    // CUSTOMER DATA
    // =========================================================================

    pub async fn amc_contracts(&self, customer_id: &str) -> Result<Vec<AmcContract>> {
        self.list(customer_id, "amc-contracts").await
    }

    pub async fn complaints(&self, customer_id: &str) -> Result<Vec<Complaint>> {
        self.list(customer_id, "complaints").await
    }

    pub async fn maintenance_schedule(&self, customer_id: &str) -> Result<Vec<MaintenanceVisit>> {
        self.list(customer_id, "maintenance").await
    }

    pub async fn invoices(&self, customer_id: &str) -> Result<Vec<Invoice>> {
        self.list(customer_id, "invoices").await
    }

    pub async fn quotations(&self, customer_id: &str) -> Result<Vec<Quotation>> {
        self.list(customer_id, "quotations").await
    }

    /// Profiles the customer can act as.
    pub async fn sub_customers(&self, customer_id: &str) -> Result<Vec<CustomerProfile>> {
        self.list(customer_id, "sub-customers").await
    }

    /// Raise a complaint and return the created ticket.
    pub async fn create_complaint(&self, draft: &ComplaintDraft) -> Result<Complaint> {
        let complaint: Complaint = self
            .call(Method::POST, &["complaints"], Some(&draft.normalized()))
            .await?
            .into_data()?;
        info!(ticket = %complaint.reference(), "complaint created");
        Ok(complaint)
    }

    /// Create a sub-customer under `customer_id`.
    pub async fn create_user(&self, customer_id: &str, form: &NewUser) -> Result<CustomerProfile> {
        let profile: CustomerProfile = self
            .call(
                Method::POST,
                &["customers", customer_id, "sub-customers"],
                Some(form),
            )
            .await?
            .into_data()?;
        info!(user_id = %profile.id, "sub-customer created");
        Ok(profile)
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    async fn list<T: DeserializeOwned>(&self, customer_id: &str, resource: &str) -> Result<Vec<T>> {
        let items: Vec<T> = self
            .call::<Vec<T>>(Method::GET, &["customers", customer_id, resource], None::<&()>)
            .await?
            .into_data_or_default();
        debug!(resource, count = items.len(), "list fetched");
        Ok(items)
    }

    /// Resolve endpoint path segments against the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl {
                url: self.base.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<Envelope<T>> {
        let url = self.endpoint(segments)?;
        debug!(%method, %url, "backend request");

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|e| {
            error!(%method, %url, error = %e, "request failed");
            ApiError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let message = error_message(status, &text);
            error!(%method, %url, status = status.as_u16(), %message, "backend returned an error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&text).map_err(|e| {
            error!(%method, %url, error = %e, "malformed response body");
            ApiError::from(e)
        })?;
        envelope.accepted().inspect_err(|e| {
            warn!(%method, %url, reason = %e, "backend rejected request");
        })
    }
}

/// Message for a failed response: the envelope's message if present,
/// otherwise the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(|env| env.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ApiClient::new(&ApiSettings::with_base_url("https://api.example/api/v1/")).unwrap();
        let url = client.endpoint(&["customers", "C 1/2", "complaints"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example/api/v1/customers/C%201%2F2/complaints"
        );
    }

    #[test]
    fn test_rejects_non_http_base() {
        let err = ApiClient::new(&ApiSettings::with_base_url("ftp://files.example")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
        assert!(ApiClient::new(&ApiSettings::with_base_url("not a url")).is_err());
    }

    #[test]
    fn test_error_message_prefers_envelope() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"success":false,"message":"Email taken"}"#),
            "Email taken"
        );
        assert_eq!(
            error_message(StatusCode::SERVICE_UNAVAILABLE, "<html>"),
            "Service Unavailable"
        );
    }
}
