use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    ChangePasswordRequest, ErrorResponse, LoginRequest, LoginResponse, Pet, ScheduleEntry,
    SessionCheckResponse, User, Vaccination,
};

use crate::state::editing::{Method, SubmitPlan};

/// Generic message for transport-level failures (the fetch itself threw).
pub const CONNECTION_ERROR: &str = "Connection error";

/// Pull the backend's `{ "error": ... }` body out of a non-2xx response,
/// falling back to a per-action generic message.
async fn error_message(response: &Response, fallback: &str) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => fallback.to_string(),
    }
}

/// API client for the pet/vaccination record backend.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client issuing same-origin requests.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, path);
        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<T>()
                        .await
                        .map_err(|e| format!("Failed to parse response: {}", e))
                } else {
                    Err(error_message(&response, fallback).await)
                }
            }
            Err(_) => Err(CONNECTION_ERROR.to_string()),
        }
    }

    async fn delete(&self, path: &str, fallback: &str) -> Result<(), String> {
        let url = format!("{}{}", self.base_url, path);
        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(error_message(&response, fallback).await)
                }
            }
            Err(_) => Err(CONNECTION_ERROR.to_string()),
        }
    }

    /// Execute a modal submit: POST for create, PUT for update, as decided
    /// by the plan.
    pub async fn submit<B: Serialize>(
        &self,
        plan: &SubmitPlan,
        body: &B,
        fallback: &str,
    ) -> Result<(), String> {
        let url = format!("{}{}", self.base_url, plan.path);
        let builder = match plan.method {
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        };
        let request = builder
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;

        match request.send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(error_message(&response, fallback).await)
                }
            }
            Err(_) => Err(CONNECTION_ERROR.to_string()),
        }
    }

    // --- Auth ---

    pub async fn check_session(&self) -> Result<SessionCheckResponse, String> {
        self.get_json("/api/auth/check-session", "Session check failed")
            .await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<User, String> {
        let url = format!("{}/api/auth/login", self.base_url);
        let request = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;

        match request.send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<LoginResponse>()
                        .await
                        .map(|body| body.user)
                        .map_err(|e| format!("Failed to parse response: {}", e))
                } else {
                    Err(error_message(&response, "Login failed").await)
                }
            }
            Err(_) => Err(CONNECTION_ERROR.to_string()),
        }
    }

    pub async fn logout(&self) -> Result<(), String> {
        let url = format!("{}/api/auth/logout", self.base_url);
        match Request::post(&url).send().await {
            Ok(_) => Ok(()),
            Err(_) => Err(CONNECTION_ERROR.to_string()),
        }
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), String> {
        let url = format!("{}/api/auth/change-password", self.base_url);
        let request = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;

        match request.send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(error_message(&response, "Failed to change password").await)
                }
            }
            Err(_) => Err(CONNECTION_ERROR.to_string()),
        }
    }

    // --- Pets ---

    pub async fn list_pets(&self) -> Result<Vec<Pet>, String> {
        self.get_json("/api/pets", "Failed to load pets").await
    }

    pub async fn get_pet(&self, id: i64) -> Result<Pet, String> {
        self.get_json(&format!("/api/pets/{}", id), "Failed to load pet")
            .await
    }

    pub async fn delete_pet(&self, id: i64) -> Result<(), String> {
        self.delete(&format!("/api/pets/{}", id), "Failed to delete pet")
            .await
    }

    // --- Vaccinations ---

    pub async fn list_vaccinations(&self, pet_id: i64) -> Result<Vec<Vaccination>, String> {
        self.get_json(
            &format!("/api/pets/{}/vaccinations", pet_id),
            "Failed to load vaccinations",
        )
        .await
    }

    pub async fn delete_vaccination(&self, id: i64) -> Result<(), String> {
        self.delete(
            &format!("/api/vaccinations/{}", id),
            "Failed to delete vaccination",
        )
        .await
    }

    // --- Users (admin only) ---

    pub async fn list_users(&self) -> Result<Vec<User>, String> {
        self.get_json("/api/users", "Failed to load users").await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, String> {
        self.get_json(&format!("/api/users/{}", id), "Failed to load user")
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), String> {
        self.delete(&format!("/api/users/{}", id), "Failed to delete user")
            .await
    }

    // --- Reports ---

    pub async fn vaccination_schedule(&self) -> Result<Vec<ScheduleEntry>, String> {
        self.get_json(
            "/api/reports/vaccination-schedule",
            "Failed to load vaccination schedule",
        )
        .await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
