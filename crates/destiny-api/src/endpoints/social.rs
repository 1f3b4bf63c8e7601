//! `Social` endpoints: friend lists and requests

use serde_json::Value;

use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::Result;
use crate::transport::Transport;

pub static GET_FRIEND_LIST: Endpoint =
    Endpoint::get("Social.GetFriendList", "/Social/Friends/").authenticated();
pub static GET_FRIEND_REQUEST_LIST: Endpoint =
    Endpoint::get("Social.GetFriendRequestList", "/Social/Friends/Requests/").authenticated();
pub static ISSUE_FRIEND_REQUEST: Endpoint =
    Endpoint::post("Social.IssueFriendRequest", "/Social/Friends/Add/{membershipId}/")
        .authenticated();
pub static ACCEPT_FRIEND_REQUEST: Endpoint = Endpoint::post(
    "Social.AcceptFriendRequest",
    "/Social/Friends/Requests/Accept/{membershipId}/",
)
.authenticated();
pub static DECLINE_FRIEND_REQUEST: Endpoint = Endpoint::post(
    "Social.DeclineFriendRequest",
    "/Social/Friends/Requests/Decline/{membershipId}/",
)
.authenticated();
pub static REMOVE_FRIEND: Endpoint =
    Endpoint::post("Social.RemoveFriend", "/Social/Friends/Remove/{membershipId}/")
        .authenticated();
pub static REMOVE_FRIEND_REQUEST: Endpoint = Endpoint::post(
    "Social.RemoveFriendRequest",
    "/Social/Friends/Requests/Remove/{membershipId}/",
)
.authenticated();
pub static GET_PLATFORM_FRIEND_LIST: Endpoint = Endpoint::get(
    "Social.GetPlatformFriendList",
    "/Social/PlatformFriends/{friendPlatform}/{page}/",
)
.authenticated();

pub static ENDPOINTS: &[&Endpoint] = &[
    &GET_FRIEND_LIST,
    &GET_FRIEND_REQUEST_LIST,
    &ISSUE_FRIEND_REQUEST,
    &ACCEPT_FRIEND_REQUEST,
    &DECLINE_FRIEND_REQUEST,
    &REMOVE_FRIEND,
    &REMOVE_FRIEND_REQUEST,
    &GET_PLATFORM_FRIEND_LIST,
];

/// Friend operations for the authenticated user.
#[derive(Debug, Clone, Copy)]
pub struct Social<'a> {
    transport: &'a Transport,
}

impl<'a> Social<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn get_friend_list(&self) -> Result<Value> {
        self.transport.send(&ApiRequest::new(&GET_FRIEND_LIST)).await
    }

    pub async fn get_friend_request_list(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_FRIEND_REQUEST_LIST))
            .await
    }

    pub async fn issue_friend_request(&self, membership_id: i64) -> Result<Value> {
        self.friend_action(&ISSUE_FRIEND_REQUEST, membership_id).await
    }

    pub async fn accept_friend_request(&self, membership_id: i64) -> Result<Value> {
        self.friend_action(&ACCEPT_FRIEND_REQUEST, membership_id).await
    }

    pub async fn decline_friend_request(&self, membership_id: i64) -> Result<Value> {
        self.friend_action(&DECLINE_FRIEND_REQUEST, membership_id).await
    }

    pub async fn remove_friend(&self, membership_id: i64) -> Result<Value> {
        self.friend_action(&REMOVE_FRIEND, membership_id).await
    }

    pub async fn remove_friend_request(&self, membership_id: i64) -> Result<Value> {
        self.friend_action(&REMOVE_FRIEND_REQUEST, membership_id).await
    }

    /// `friend_platform` is a `PlatformFriendType` value.
    pub async fn get_platform_friend_list(&self, friend_platform: i32, page: i32) -> Result<Value> {
        let request = ApiRequest::new(&GET_PLATFORM_FRIEND_LIST)
            .path(friend_platform)
            .path(page);
        self.transport.send(&request).await
    }

    async fn friend_action(&self, endpoint: &'static Endpoint, membership_id: i64) -> Result<Value> {
        let request = ApiRequest::new(endpoint).path(membership_id);
        self.transport.send(&request).await
    }
}
