//! `User` endpoints

use serde_json::{Value, json};

use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::Result;
use crate::transport::Transport;
use crate::types::BungieMembershipType;

pub static GET_BUNGIE_NET_USER_BY_ID: Endpoint =
    Endpoint::get("User.GetBungieNetUserById", "/User/GetBungieNetUserById/{id}/");
pub static GET_SANITIZED_PLATFORM_DISPLAY_NAMES: Endpoint = Endpoint::get(
    "User.GetSanitizedPlatformDisplayNames",
    "/User/GetSanitizedPlatformDisplayNames/{membershipId}/",
);
pub static GET_CREDENTIAL_TYPES_FOR_TARGET_ACCOUNT: Endpoint = Endpoint::get(
    "User.GetCredentialTypesForTargetAccount",
    "/User/GetCredentialTypesForTargetAccount/{membershipId}/",
)
.authenticated();
pub static GET_AVAILABLE_THEMES: Endpoint =
    Endpoint::get("User.GetAvailableThemes", "/User/GetAvailableThemes/");
pub static GET_MEMBERSHIP_DATA_BY_ID: Endpoint = Endpoint::get(
    "User.GetMembershipDataById",
    "/User/GetMembershipsById/{membershipId}/{membershipType}/",
);
pub static GET_MEMBERSHIP_DATA_FOR_CURRENT_USER: Endpoint = Endpoint::get(
    "User.GetMembershipDataForCurrentUser",
    "/User/GetMembershipsForCurrentUser/",
)
.authenticated();
pub static GET_MEMBERSHIP_FROM_HARD_LINKED_CREDENTIAL: Endpoint = Endpoint::get(
    "User.GetMembershipFromHardLinkedCredential",
    "/User/GetMembershipFromHardLinkedCredential/{crType}/{credential}/",
);
pub static SEARCH_BY_GLOBAL_NAME_POST: Endpoint =
    Endpoint::post("User.SearchByGlobalNamePost", "/User/Search/GlobalName/{page}/");

pub static ENDPOINTS: &[&Endpoint] = &[
    &GET_BUNGIE_NET_USER_BY_ID,
    &GET_SANITIZED_PLATFORM_DISPLAY_NAMES,
    &GET_CREDENTIAL_TYPES_FOR_TARGET_ACCOUNT,
    &GET_AVAILABLE_THEMES,
    &GET_MEMBERSHIP_DATA_BY_ID,
    &GET_MEMBERSHIP_DATA_FOR_CURRENT_USER,
    &GET_MEMBERSHIP_FROM_HARD_LINKED_CREDENTIAL,
    &SEARCH_BY_GLOBAL_NAME_POST,
];

/// Bungie.net account lookups.
#[derive(Debug, Clone, Copy)]
pub struct User<'a> {
    transport: &'a Transport,
}

impl<'a> User<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn get_bungie_net_user_by_id(&self, id: i64) -> Result<Value> {
        let request = ApiRequest::new(&GET_BUNGIE_NET_USER_BY_ID).path(id);
        self.transport.send(&request).await
    }

    pub async fn get_sanitized_platform_display_names(&self, membership_id: i64) -> Result<Value> {
        let request = ApiRequest::new(&GET_SANITIZED_PLATFORM_DISPLAY_NAMES).path(membership_id);
        self.transport.send(&request).await
    }

    pub async fn get_credential_types_for_target_account(
        &self,
        membership_id: i64,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_CREDENTIAL_TYPES_FOR_TARGET_ACCOUNT).path(membership_id);
        self.transport.send(&request).await
    }

    pub async fn get_available_themes(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_AVAILABLE_THEMES))
            .await
    }

    pub async fn get_membership_data_by_id(
        &self,
        membership_id: i64,
        membership_type: BungieMembershipType,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_MEMBERSHIP_DATA_BY_ID)
            .path(membership_id)
            .path(membership_type);
        self.transport.send(&request).await
    }

    /// Memberships of the account the access token belongs to.
    pub async fn get_membership_data_for_current_user(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_MEMBERSHIP_DATA_FOR_CURRENT_USER))
            .await
    }

    /// `credential_type` is a `BungieCredentialType` value, e.g. 12 for SteamId.
    pub async fn get_membership_from_hard_linked_credential(
        &self,
        credential_type: i32,
        credential: &str,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_MEMBERSHIP_FROM_HARD_LINKED_CREDENTIAL)
            .path(credential_type)
            .path(credential);
        self.transport.send(&request).await
    }

    pub async fn search_by_global_name_post(
        &self,
        page: i32,
        display_name_prefix: &str,
    ) -> Result<Value> {
        let request = ApiRequest::new(&SEARCH_BY_GLOBAL_NAME_POST)
            .path(page)
            .body(json!({ "displayNamePrefix": display_name_prefix }));
        self.transport.send(&request).await
    }
}
