//! Uncategorised root endpoints

use serde_json::Value;

use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::Result;
use crate::transport::Transport;

pub static GET_AVAILABLE_LOCALES: Endpoint =
    Endpoint::get("Platform.GetAvailableLocales", "/GetAvailableLocales/");
pub static GET_COMMON_SETTINGS: Endpoint = Endpoint::get("Platform.GetCommonSettings", "/Settings/");
pub static GET_USER_SYSTEM_OVERRIDES: Endpoint =
    Endpoint::get("Platform.GetUserSystemOverrides", "/UserSystemOverrides/");
pub static GET_GLOBAL_ALERTS: Endpoint =
    Endpoint::get("Platform.GetGlobalAlerts", "/GlobalAlerts/").with_query(&["includestreaming"]);

pub static ENDPOINTS: &[&Endpoint] = &[
    &GET_AVAILABLE_LOCALES,
    &GET_COMMON_SETTINGS,
    &GET_USER_SYSTEM_OVERRIDES,
    &GET_GLOBAL_ALERTS,
];

#[derive(Debug, Clone, Copy)]
pub struct Platform<'a> {
    transport: &'a Transport,
}

impl<'a> Platform<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Locales the platform supports for content.
    pub async fn get_available_locales(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_AVAILABLE_LOCALES))
            .await
    }

    pub async fn get_common_settings(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_COMMON_SETTINGS))
            .await
    }

    pub async fn get_user_system_overrides(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_USER_SYSTEM_OVERRIDES))
            .await
    }

    pub async fn get_global_alerts(&self, include_streaming: bool) -> Result<Value> {
        let request =
            ApiRequest::new(&GET_GLOBAL_ALERTS).query("includestreaming", include_streaming);
        self.transport.send(&request).await
    }
}
