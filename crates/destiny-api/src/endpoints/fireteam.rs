//! `Fireteam` endpoints

use serde_json::Value;

use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::Result;
use crate::transport::Transport;

pub static GET_ACTIVE_PRIVATE_CLAN_FIRETEAM_COUNT: Endpoint = Endpoint::get(
    "Fireteam.GetActivePrivateClanFireteamCount",
    "/Fireteam/Clan/{groupId}/ActiveCount/",
)
.authenticated();
pub static GET_AVAILABLE_CLAN_FIRETEAMS: Endpoint = Endpoint::get(
    "Fireteam.GetAvailableClanFireteams",
    "/Fireteam/Clan/{groupId}/Available/{platform}/{activityType}/{dateRange}/{slotFilter}/{publicOnly}/{page}/",
)
.with_query(&["langFilter"])
.authenticated();
pub static SEARCH_PUBLIC_AVAILABLE_CLAN_FIRETEAMS: Endpoint = Endpoint::get(
    "Fireteam.SearchPublicAvailableClanFireteams",
    "/Fireteam/Search/Available/{platform}/{activityType}/{dateRange}/{slotFilter}/{page}/",
)
.with_query(&["langFilter"])
.authenticated();
pub static GET_MY_CLAN_FIRETEAMS: Endpoint = Endpoint::get(
    "Fireteam.GetMyClanFireteams",
    "/Fireteam/Clan/{groupId}/My/{platform}/{includeClosed}/{page}/",
)
.with_query(&["groupFilter", "langFilter"])
.authenticated();
pub static GET_CLAN_FIRETEAM: Endpoint = Endpoint::get(
    "Fireteam.GetClanFireteam",
    "/Fireteam/Clan/{groupId}/Summary/{fireteamId}/",
)
.authenticated();

pub static ENDPOINTS: &[&Endpoint] = &[
    &GET_ACTIVE_PRIVATE_CLAN_FIRETEAM_COUNT,
    &GET_AVAILABLE_CLAN_FIRETEAMS,
    &SEARCH_PUBLIC_AVAILABLE_CLAN_FIRETEAMS,
    &GET_MY_CLAN_FIRETEAMS,
    &GET_CLAN_FIRETEAM,
];

/// Listing filters shared by the fireteam searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FireteamFilter {
    /// `FireteamPlatform` value
    pub platform: i32,
    /// Activity type hash, 0 for any
    pub activity_type: i32,
    /// `FireteamDateRange` value
    pub date_range: i32,
    /// `FireteamSlotSearch` value
    pub slot_filter: i32,
    pub page: i32,
    pub lang_filter: Option<String>,
}

/// Clan fireteam listings.
#[derive(Debug, Clone, Copy)]
pub struct Fireteam<'a> {
    transport: &'a Transport,
}

impl<'a> Fireteam<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn get_active_private_clan_fireteam_count(&self, group_id: i64) -> Result<Value> {
        let request = ApiRequest::new(&GET_ACTIVE_PRIVATE_CLAN_FIRETEAM_COUNT).path(group_id);
        self.transport.send(&request).await
    }

    pub async fn get_available_clan_fireteams(
        &self,
        group_id: i64,
        filter: &FireteamFilter,
        public_only: i32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_AVAILABLE_CLAN_FIRETEAMS)
            .path(group_id)
            .path(filter.platform)
            .path(filter.activity_type)
            .path(filter.date_range)
            .path(filter.slot_filter)
            .path(public_only)
            .path(filter.page)
            .query_opt("langFilter", filter.lang_filter.as_deref());
        self.transport.send(&request).await
    }

    pub async fn search_public_available_clan_fireteams(
        &self,
        filter: &FireteamFilter,
    ) -> Result<Value> {
        let request = ApiRequest::new(&SEARCH_PUBLIC_AVAILABLE_CLAN_FIRETEAMS)
            .path(filter.platform)
            .path(filter.activity_type)
            .path(filter.date_range)
            .path(filter.slot_filter)
            .path(filter.page)
            .query_opt("langFilter", filter.lang_filter.as_deref());
        self.transport.send(&request).await
    }

    pub async fn get_my_clan_fireteams(
        &self,
        group_id: i64,
        platform: i32,
        include_closed: bool,
        page: i32,
        group_filter: Option<bool>,
        lang_filter: Option<&str>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_MY_CLAN_FIRETEAMS)
            .path(group_id)
            .path(platform)
            .path(include_closed)
            .path(page)
            .query_opt("groupFilter", group_filter)
            .query_opt("langFilter", lang_filter);
        self.transport.send(&request).await
    }

    pub async fn get_clan_fireteam(&self, group_id: i64, fireteam_id: i64) -> Result<Value> {
        let request = ApiRequest::new(&GET_CLAN_FIRETEAM)
            .path(group_id)
            .path(fireteam_id);
        self.transport.send(&request).await
    }
}
