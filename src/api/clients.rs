use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::app_data::{AppData, ClientService};
use crate::errors::ApiFailure;
use crate::types::dto::clients::{Client, ClientApiResponse, ClientBody, ListClientsApiResponse};

/// Clients API
pub struct ClientsApi {
    clients: Arc<ClientService>,
}

impl ClientsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            clients: Arc::clone(&app_data.clients),
        }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// Client management endpoints
    Clients,
}

#[OpenApi]
impl ClientsApi {
    /// List clients, newest first
    #[oai(path = "/clients", method = "get", tag = "ApiTags::Clients")]
    async fn list_clients(&self) -> ListClientsApiResponse {
        match self.clients.list().await {
            Ok(clients) => ListClientsApiResponse::Ok(Json(clients.into_iter().map(Client::from).collect())),
            Err(err) => ApiFailure::from(err).into(),
        }
    }

    /// Create a client
    ///
    /// Body: `{"name": string, "email"?: string}`. A second client with the
    /// same email is rejected with 409.
    #[oai(path = "/clients", method = "post", tag = "ApiTags::Clients")]
    async fn create_client(&self, body: Json<ClientBody>) -> ClientApiResponse {
        match self.clients.create(body.0.value()).await {
            Ok(client) => ClientApiResponse::Created(Json(client.into())),
            Err(err) => ApiFailure::from(err).into(),
        }
    }

    #[oai(path = "/clients/:id", method = "get", tag = "ApiTags::Clients")]
    async fn get_client(&self, id: Path<String>) -> ClientApiResponse {
        match self.clients.get(&id.0).await {
            Ok(client) => ClientApiResponse::Ok(Json(client.into())),
            Err(err) => ApiFailure::from(err).into(),
        }
    }

    /// Replace a client's name and email
    #[oai(path = "/clients/:id", method = "put", tag = "ApiTags::Clients")]
    async fn update_client(&self, id: Path<String>, body: Json<ClientBody>) -> ClientApiResponse {
        match self.clients.update(&id.0, body.0.value()).await {
            Ok(client) => ClientApiResponse::Ok(Json(client.into())),
            Err(err) => ApiFailure::from(err).into(),
        }
    }

    #[oai(path = "/clients/:id", method = "delete", tag = "ApiTags::Clients")]
    async fn delete_client(&self, id: Path<String>) -> ClientApiResponse {
        match self.clients.delete(&id.0).await {
            Ok(()) => ClientApiResponse::Deleted,
            Err(err) => ApiFailure::from(err).into(),
        }
    }
}
