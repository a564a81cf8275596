//! reqwest-based client for the recruiting backend REST API.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::{
    Application, ApplicationCreateRequest, ApplicationFilter, ApplicationUpdateRequest,
    Candidate, CandidateCreateRequest, CandidateFilter, CandidateUpdateRequest, Comment,
    CommentCreateRequest, Company, CompanyCreateRequest, CompanyFilter, CompanyList,
    CompanyRepresentative, CompanyRepresentativeCreateRequest, CompanyUpdateRequest, EntityType,
    ItemId, Language, LanguageCreateRequest, Notification, Paginated, Reminder,
    ReminderCreateRequest, Skill, SkillCreateRequest, Stage, StageCreateRequest, StageId,
    StageUpdateRequest, Vacancy, VacancyCreateRequest, VacancyFilter, VacancyUpdateRequest,
};

use super::config::{ApiConfig, Session};
use super::source::ItemSource;
use async_trait::async_trait;

/// Typed client for the backend REST API.
///
/// Cheap to clone; clones share the HTTP connection pool and the auth
/// session, so a login through one handle authenticates all of them.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Arc<Session>,
}

impl RestClient {
    /// Creates a client from a configuration, with a fresh session.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Self::with_session(config, Arc::new(Session::new()))
    }

    /// Creates a client sharing an existing session.
    pub fn with_session(config: ApiConfig, session: Arc<Session>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| ApiError::Transport(format!("invalid header name '{key}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::Transport(format!("invalid header value for '{key}': {e}")))?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            config,
            session,
        })
    }

    /// The shared auth session.
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    pub(super) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(bearer) = self.session.bearer() {
            req = req.header(AUTHORIZATION, bearer);
        }
        req
    }

    pub(super) async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = req.send().await?;
        self.checked(resp)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn send_empty(&self, req: RequestBuilder) -> Result<(), ApiError> {
        let resp = req.send().await?;
        self.checked(resp).await.map(|_| ())
    }

    /// Turns non-success responses into typed errors. A 401 additionally
    /// clears the shared session, matching the backend's token revocation.
    async fn checked(&self, resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            self.session.clear();
            return Err(ApiError::NotAuthenticated);
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %message, "request rejected");
            return Err(ApiError::rejected(status.as_u16(), message));
        }
        Ok(resp)
    }

    // Companies

    /// Lists companies matching a filter.
    pub async fn list_companies(&self, filter: &CompanyFilter) -> Result<CompanyList, ApiError> {
        self.send(self.request(Method::GET, "/companies").query(filter))
            .await
    }

    /// Fetches one company by id.
    pub async fn get_company(&self, id: i64) -> Result<Company, ApiError> {
        self.send(self.request(Method::GET, &format!("/companies/{id}")))
            .await
    }

    /// Creates a company.
    pub async fn create_company(&self, req: &CompanyCreateRequest) -> Result<Company, ApiError> {
        self.send(self.request(Method::POST, "/companies").json(req))
            .await
    }

    /// Updates a company.
    pub async fn update_company(
        &self,
        id: i64,
        req: &CompanyUpdateRequest,
    ) -> Result<Company, ApiError> {
        self.send(self.request(Method::PUT, &format!("/companies/{id}")).json(req))
            .await
    }

    /// Deletes a company.
    pub async fn delete_company(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("/companies/{id}")))
            .await
    }

    /// Lists a company's representatives.
    pub async fn list_representatives(
        &self,
        company_id: i64,
    ) -> Result<Vec<CompanyRepresentative>, ApiError> {
        self.send(self.request(Method::GET, &format!("/companies/{company_id}/representatives")))
            .await
    }

    /// Adds a representative to a company.
    pub async fn create_representative(
        &self,
        company_id: i64,
        req: &CompanyRepresentativeCreateRequest,
    ) -> Result<CompanyRepresentative, ApiError> {
        self.send(
            self.request(Method::POST, &format!("/companies/{company_id}/representatives"))
                .json(req),
        )
        .await
    }

    /// Removes a representative from a company.
    pub async fn delete_representative(&self, company_id: i64, id: i64) -> Result<(), ApiError> {
        self.send_empty(self.request(
            Method::DELETE,
            &format!("/companies/{company_id}/representatives/{id}"),
        ))
        .await
    }

    // Vacancies

    /// Lists vacancies matching a filter.
    pub async fn list_vacancies(&self, filter: &VacancyFilter) -> Result<Vec<Vacancy>, ApiError> {
        self.send(self.request(Method::GET, "/vacancies").query(filter))
            .await
    }

    /// Fetches one vacancy by id.
    pub async fn get_vacancy(&self, id: ItemId) -> Result<Vacancy, ApiError> {
        self.send(self.request(Method::GET, &format!("/vacancies/{id}")))
            .await
    }

    /// Creates a vacancy.
    pub async fn create_vacancy(&self, req: &VacancyCreateRequest) -> Result<Vacancy, ApiError> {
        self.send(self.request(Method::POST, "/vacancies").json(req))
            .await
    }

    /// Updates a vacancy.
    pub async fn update_vacancy(
        &self,
        id: ItemId,
        req: &VacancyUpdateRequest,
    ) -> Result<Vacancy, ApiError> {
        self.send(self.request(Method::PUT, &format!("/vacancies/{id}")).json(req))
            .await
    }

    /// Deletes a vacancy.
    pub async fn delete_vacancy(&self, id: ItemId) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("/vacancies/{id}")))
            .await
    }

    // Candidates

    /// Lists candidates matching a filter.
    pub async fn list_candidates(
        &self,
        filter: &CandidateFilter,
    ) -> Result<Vec<Candidate>, ApiError> {
        self.send(self.request(Method::GET, "/candidates").query(filter))
            .await
    }

    /// Fetches one candidate by id.
    pub async fn get_candidate(&self, id: i64) -> Result<Candidate, ApiError> {
        self.send(self.request(Method::GET, &format!("/candidates/{id}")))
            .await
    }

    /// Creates a candidate.
    pub async fn create_candidate(
        &self,
        req: &CandidateCreateRequest,
    ) -> Result<Candidate, ApiError> {
        self.send(self.request(Method::POST, "/candidates").json(req))
            .await
    }

    /// Updates a candidate.
    pub async fn update_candidate(
        &self,
        id: i64,
        req: &CandidateUpdateRequest,
    ) -> Result<Candidate, ApiError> {
        self.send(self.request(Method::PUT, &format!("/candidates/{id}")).json(req))
            .await
    }

    /// Deletes a candidate.
    pub async fn delete_candidate(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("/candidates/{id}")))
            .await
    }

    // Applications

    /// Lists applications matching a filter.
    pub async fn list_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Paginated<Application>, ApiError> {
        self.send(self.request(Method::GET, "/applications").query(filter))
            .await
    }

    /// Creates an application.
    pub async fn create_application(
        &self,
        req: &ApplicationCreateRequest,
    ) -> Result<Application, ApiError> {
        self.send(self.request(Method::POST, "/applications").json(req))
            .await
    }

    /// Moves an application to a new pipeline stage.
    pub async fn update_application_stage(
        &self,
        id: ItemId,
        stage_id: StageId,
    ) -> Result<Application, ApiError> {
        self.send(
            self.request(Method::PUT, &format!("/applications/{id}"))
                .json(&ApplicationUpdateRequest::stage_move(stage_id)),
        )
        .await
    }

    /// Deletes an application.
    pub async fn delete_application(&self, id: ItemId) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("/applications/{id}")))
            .await
    }

    // Stages

    /// Lists the pipeline stages for an entity type.
    pub async fn list_stages(&self, entity_type: EntityType) -> Result<Vec<Stage>, ApiError> {
        self.send(
            self.request(Method::GET, "/stages")
                .query(&[("entity_type", entity_type.to_string())]),
        )
        .await
    }

    /// Creates a stage.
    pub async fn create_stage(&self, req: &StageCreateRequest) -> Result<Stage, ApiError> {
        self.send(self.request(Method::POST, "/stages").json(req))
            .await
    }

    /// Updates a stage.
    pub async fn update_stage(
        &self,
        id: StageId,
        req: &StageUpdateRequest,
    ) -> Result<Stage, ApiError> {
        self.send(self.request(Method::PUT, &format!("/stages/{id}")).json(req))
            .await
    }

    /// Deletes a stage.
    pub async fn delete_stage(&self, id: StageId) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("/stages/{id}")))
            .await
    }

    // Skills and languages

    /// Lists all skills.
    pub async fn list_skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.send(self.request(Method::GET, "/skills")).await
    }

    /// Creates a skill.
    pub async fn create_skill(&self, req: &SkillCreateRequest) -> Result<Skill, ApiError> {
        self.send(self.request(Method::POST, "/skills").json(req))
            .await
    }

    /// Lists all languages.
    pub async fn list_languages(&self) -> Result<Vec<Language>, ApiError> {
        self.send(self.request(Method::GET, "/languages")).await
    }

    /// Creates a language.
    pub async fn create_language(&self, req: &LanguageCreateRequest) -> Result<Language, ApiError> {
        self.send(self.request(Method::POST, "/languages").json(req))
            .await
    }

    // Comments, reminders, notifications

    /// Lists the comments on an application.
    pub async fn list_comments(&self, application_id: ItemId) -> Result<Vec<Comment>, ApiError> {
        self.send(self.request(
            Method::GET,
            &format!("/applications/{application_id}/comments"),
        ))
        .await
    }

    /// Adds a comment to an application.
    pub async fn create_comment(&self, req: &CommentCreateRequest) -> Result<Comment, ApiError> {
        self.send(self.request(Method::POST, "/comments").json(req))
            .await
    }

    /// Schedules a reminder on an application.
    pub async fn create_reminder(&self, req: &ReminderCreateRequest) -> Result<Reminder, ApiError> {
        self.send(self.request(Method::POST, "/reminders").json(req))
            .await
    }

    /// Lists the current user's notifications.
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.send(self.request(Method::GET, "/notifications")).await
    }

    /// Marks a notification as read.
    pub async fn mark_notification_read(&self, id: i64) -> Result<Notification, ApiError> {
        self.send(self.request(Method::PUT, &format!("/notifications/{id}/read")))
            .await
    }
}

#[async_trait]
impl ItemSource<Application> for RestClient {
    async fn list_stages(&self, entity_type: EntityType) -> Result<Vec<Stage>, ApiError> {
        Self::list_stages(self, entity_type).await
    }

    async fn list_items(&self, filter: &ApplicationFilter) -> Result<Vec<Application>, ApiError> {
        Ok(self.list_applications(filter).await?.items)
    }

    async fn update_item_stage(
        &self,
        item_id: ItemId,
        new_stage_id: StageId,
    ) -> Result<Application, ApiError> {
        self.update_application_stage(item_id, new_stage_id).await
    }
}

#[async_trait]
impl ItemSource<Vacancy> for RestClient {
    async fn list_stages(&self, entity_type: EntityType) -> Result<Vec<Stage>, ApiError> {
        Self::list_stages(self, entity_type).await
    }

    async fn list_items(&self, filter: &VacancyFilter) -> Result<Vec<Vacancy>, ApiError> {
        self.list_vacancies(filter).await
    }

    async fn update_item_stage(
        &self,
        item_id: ItemId,
        new_stage_id: StageId,
    ) -> Result<Vacancy, ApiError> {
        self.update_vacancy(item_id, &VacancyUpdateRequest::stage_move(new_stage_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_url_join() {
        let client = RestClient::new(
            ApiConfig::new().with_base_url("https://crm.example.com/api/"),
        )
        .unwrap();

        assert_eq!(
            client.url("/applications/7"),
            "https://crm.example.com/api/applications/7"
        );
    }

    #[test]
    fn test_invalid_header_rejected() {
        let config = ApiConfig::new().with_header("X-Bad\nName", "value");
        let err = RestClient::new(config).err();
        assert!(matches!(err, Some(ApiError::Transport(_))));
    }
}
