//! `App` endpoints

use serde_json::Value;

use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::Result;
use crate::transport::Transport;

pub static GET_APPLICATION_API_USAGE: Endpoint = Endpoint::get(
    "App.GetApplicationApiUsage",
    "/App/ApiUsage/{applicationId}/",
)
.with_query(&["end", "start"])
.authenticated();
pub static GET_BUNGIE_APPLICATIONS: Endpoint =
    Endpoint::get("App.GetBungieApplications", "/App/FirstParty/");

pub static ENDPOINTS: &[&Endpoint] = &[&GET_APPLICATION_API_USAGE, &GET_BUNGIE_APPLICATIONS];

#[derive(Debug, Clone, Copy)]
pub struct App<'a> {
    transport: &'a Transport,
}

impl<'a> App<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// API usage for an application. The window is at most 48 hours and no
    /// older than 30 days; omitted bounds default server-side.
    pub async fn get_application_api_usage(
        &self,
        application_id: i32,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_APPLICATION_API_USAGE)
            .path(application_id)
            .query_opt("end", end)
            .query_opt("start", start);
        self.transport.send(&request).await
    }

    /// Applications created by Bungie.
    pub async fn get_bungie_applications(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_BUNGIE_APPLICATIONS))
            .await
    }
}
