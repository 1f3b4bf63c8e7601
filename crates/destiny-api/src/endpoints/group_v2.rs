//! `GroupV2` endpoints: clans and other groups, membership administration

use serde::Serialize;
use serde_json::{Value, json};

use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::Result;
use crate::transport::Transport;
use crate::types::BungieMembershipType;

pub static GET_AVAILABLE_AVATARS: Endpoint =
    Endpoint::get("GroupV2.GetAvailableAvatars", "/GroupV2/GetAvailableAvatars/");
pub static GET_AVAILABLE_THEMES: Endpoint =
    Endpoint::get("GroupV2.GetAvailableThemes", "/GroupV2/GetAvailableThemes/");
pub static GET_USER_CLAN_INVITE_SETTING: Endpoint = Endpoint::get(
    "GroupV2.GetUserClanInviteSetting",
    "/GroupV2/GetUserClanInviteSetting/{mType}/",
)
.authenticated();
pub static GET_RECOMMENDED_GROUPS: Endpoint = Endpoint::post(
    "GroupV2.GetRecommendedGroups",
    "/GroupV2/Recommended/{groupType}/{createDateRange}/",
)
.authenticated();
pub static GROUP_SEARCH: Endpoint = Endpoint::post("GroupV2.GroupSearch", "/GroupV2/Search/");
pub static GET_GROUP: Endpoint = Endpoint::get("GroupV2.GetGroup", "/GroupV2/{groupId}/");
pub static GET_GROUP_BY_NAME: Endpoint = Endpoint::get(
    "GroupV2.GetGroupByName",
    "/GroupV2/Name/{groupName}/{groupType}/",
);
pub static GET_GROUP_BY_NAME_V2: Endpoint =
    Endpoint::post("GroupV2.GetGroupByNameV2", "/GroupV2/NameV2/");
pub static GET_GROUP_OPTIONAL_CONVERSATIONS: Endpoint = Endpoint::get(
    "GroupV2.GetGroupOptionalConversations",
    "/GroupV2/{groupId}/OptionalConversations/",
);
pub static EDIT_GROUP: Endpoint =
    Endpoint::post("GroupV2.EditGroup", "/GroupV2/{groupId}/Edit/").authenticated();
pub static EDIT_CLAN_BANNER: Endpoint =
    Endpoint::post("GroupV2.EditClanBanner", "/GroupV2/{groupId}/EditClanBanner/").authenticated();
pub static EDIT_FOUNDER_OPTIONS: Endpoint = Endpoint::post(
    "GroupV2.EditFounderOptions",
    "/GroupV2/{groupId}/EditFounderOptions/",
)
.authenticated();
pub static ADD_OPTIONAL_CONVERSATION: Endpoint = Endpoint::post(
    "GroupV2.AddOptionalConversation",
    "/GroupV2/{groupId}/OptionalConversations/Add/",
)
.authenticated();
pub static EDIT_OPTIONAL_CONVERSATION: Endpoint = Endpoint::post(
    "GroupV2.EditOptionalConversation",
    "/GroupV2/{groupId}/OptionalConversations/Edit/{conversationId}/",
)
.authenticated();
pub static GET_MEMBERS_OF_GROUP: Endpoint =
    Endpoint::get("GroupV2.GetMembersOfGroup", "/GroupV2/{groupId}/Members/")
        .with_query(&["currentpage", "memberType", "nameSearch"]);
pub static GET_ADMINS_AND_FOUNDER_OF_GROUP: Endpoint = Endpoint::get(
    "GroupV2.GetAdminsAndFounderOfGroup",
    "/GroupV2/{groupId}/AdminsAndFounder/",
)
.with_query(&["currentpage"]);
pub static EDIT_GROUP_MEMBERSHIP: Endpoint = Endpoint::post(
    "GroupV2.EditGroupMembership",
    "/GroupV2/{groupId}/Members/{membershipType}/{membershipId}/SetMembershipType/{memberType}/",
)
.authenticated();
pub static KICK_MEMBER: Endpoint = Endpoint::post(
    "GroupV2.KickMember",
    "/GroupV2/{groupId}/Members/{membershipType}/{membershipId}/Kick/",
)
.authenticated();
pub static BAN_MEMBER: Endpoint = Endpoint::post(
    "GroupV2.BanMember",
    "/GroupV2/{groupId}/Members/{membershipType}/{membershipId}/Ban/",
)
.authenticated();
pub static UNBAN_MEMBER: Endpoint = Endpoint::post(
    "GroupV2.UnbanMember",
    "/GroupV2/{groupId}/Members/{membershipType}/{membershipId}/Unban/",
)
.authenticated();
pub static GET_BANNED_MEMBERS_OF_GROUP: Endpoint =
    Endpoint::get("GroupV2.GetBannedMembersOfGroup", "/GroupV2/{groupId}/Banned/")
        .with_query(&["currentpage"])
        .authenticated();
pub static ABDICATE_FOUNDERSHIP: Endpoint = Endpoint::post(
    "GroupV2.AbdicateFoundership",
    "/GroupV2/{groupId}/Admin/AbdicateFoundership/{membershipType}/{founderIdNew}/",
);
pub static GET_PENDING_MEMBERSHIPS: Endpoint =
    Endpoint::get("GroupV2.GetPendingMemberships", "/GroupV2/{groupId}/Members/Pending/")
        .with_query(&["currentpage"])
        .authenticated();
pub static GET_INVITED_INDIVIDUALS: Endpoint = Endpoint::get(
    "GroupV2.GetInvitedIndividuals",
    "/GroupV2/{groupId}/Members/InvitedIndividuals/",
)
.with_query(&["currentpage"])
.authenticated();
pub static APPROVE_ALL_PENDING: Endpoint =
    Endpoint::post("GroupV2.ApproveAllPending", "/GroupV2/{groupId}/Members/ApproveAll/")
        .authenticated();
pub static DENY_ALL_PENDING: Endpoint =
    Endpoint::post("GroupV2.DenyAllPending", "/GroupV2/{groupId}/Members/DenyAll/")
        .authenticated();
pub static APPROVE_PENDING_FOR_LIST: Endpoint = Endpoint::post(
    "GroupV2.ApprovePendingForList",
    "/GroupV2/{groupId}/Members/ApproveList/",
)
.authenticated();
pub static APPROVE_PENDING: Endpoint = Endpoint::post(
    "GroupV2.ApprovePending",
    "/GroupV2/{groupId}/Members/Approve/{membershipType}/{membershipId}/",
)
.authenticated();
pub static DENY_PENDING_FOR_LIST: Endpoint =
    Endpoint::post("GroupV2.DenyPendingForList", "/GroupV2/{groupId}/Members/DenyList/")
        .authenticated();
pub static GET_GROUPS_FOR_MEMBER: Endpoint = Endpoint::get(
    "GroupV2.GetGroupsForMember",
    "/GroupV2/User/{membershipType}/{membershipId}/{filter}/{groupType}/",
);
pub static RECOVER_GROUP_FOR_FOUNDER: Endpoint = Endpoint::get(
    "GroupV2.RecoverGroupForFounder",
    "/GroupV2/Recover/{membershipType}/{membershipId}/{groupType}/",
);
pub static GET_POTENTIAL_GROUPS_FOR_MEMBER: Endpoint = Endpoint::get(
    "GroupV2.GetPotentialGroupsForMember",
    "/GroupV2/User/Potential/{membershipType}/{membershipId}/{filter}/{groupType}/",
);
pub static INDIVIDUAL_GROUP_INVITE: Endpoint = Endpoint::post(
    "GroupV2.IndividualGroupInvite",
    "/GroupV2/{groupId}/Members/IndividualInvite/{membershipType}/{membershipId}/",
)
.authenticated();
pub static INDIVIDUAL_GROUP_INVITE_CANCEL: Endpoint = Endpoint::post(
    "GroupV2.IndividualGroupInviteCancel",
    "/GroupV2/{groupId}/Members/IndividualInviteCancel/{membershipType}/{membershipId}/",
)
.authenticated();

pub static ENDPOINTS: &[&Endpoint] = &[
    &GET_AVAILABLE_AVATARS,
    &GET_AVAILABLE_THEMES,
    &GET_USER_CLAN_INVITE_SETTING,
    &GET_RECOMMENDED_GROUPS,
    &GROUP_SEARCH,
    &GET_GROUP,
    &GET_GROUP_BY_NAME,
    &GET_GROUP_BY_NAME_V2,
    &GET_GROUP_OPTIONAL_CONVERSATIONS,
    &EDIT_GROUP,
    &EDIT_CLAN_BANNER,
    &EDIT_FOUNDER_OPTIONS,
    &ADD_OPTIONAL_CONVERSATION,
    &EDIT_OPTIONAL_CONVERSATION,
    &GET_MEMBERS_OF_GROUP,
    &GET_ADMINS_AND_FOUNDER_OF_GROUP,
    &EDIT_GROUP_MEMBERSHIP,
    &KICK_MEMBER,
    &BAN_MEMBER,
    &UNBAN_MEMBER,
    &GET_BANNED_MEMBERS_OF_GROUP,
    &ABDICATE_FOUNDERSHIP,
    &GET_PENDING_MEMBERSHIPS,
    &GET_INVITED_INDIVIDUALS,
    &APPROVE_ALL_PENDING,
    &DENY_ALL_PENDING,
    &APPROVE_PENDING_FOR_LIST,
    &APPROVE_PENDING,
    &DENY_PENDING_FOR_LIST,
    &GET_GROUPS_FOR_MEMBER,
    &RECOVER_GROUP_FOR_FOUNDER,
    &GET_POTENTIAL_GROUPS_FOR_MEMBER,
    &INDIVIDUAL_GROUP_INVITE,
    &INDIVIDUAL_GROUP_INVITE_CANCEL,
];

/// Body of a group search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupQuery {
    pub name: String,
    /// 0 = general, 1 = clan
    pub group_type: i32,
    pub creation_date: i32,
    pub sort_by: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_member_count_filter: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_text: Option<String>,
    pub items_per_page: i32,
    pub current_page: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_continuation_token: Option<String>,
}

/// Group settings to change. Unset fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_image_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_option: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public_topic_admin_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_chat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_security: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_sign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_invitation_messaging_for_admins: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_publicity: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanBanner {
    pub decal_id: u32,
    pub decal_color_id: u32,
    pub decal_background_color_id: u32,
    pub gonfalon_id: u32,
    pub gonfalon_color_id: u32,
    pub gonfalon_detail_id: u32,
    pub gonfalon_detail_color_id: u32,
}

/// Founder-only permission overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FounderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_permission_override: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_culture_permission_override: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_guided_game_permission_override: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_banner_permission_override: Option<bool>,
    #[serde(rename = "joinLevel", skip_serializing_if = "Option::is_none")]
    pub join_level: Option<i32>,
}

/// A platform membership reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMembership {
    pub membership_type: BungieMembershipType,
    pub membership_id: i64,
}

/// Clan and group operations.
#[derive(Debug, Clone, Copy)]
pub struct GroupV2<'a> {
    transport: &'a Transport,
}

impl<'a> GroupV2<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn get_available_avatars(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_AVAILABLE_AVATARS))
            .await
    }

    pub async fn get_available_themes(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_AVAILABLE_THEMES))
            .await
    }

    pub async fn get_user_clan_invite_setting(
        &self,
        membership_type: BungieMembershipType,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_USER_CLAN_INVITE_SETTING).path(membership_type);
        self.transport.send(&request).await
    }

    pub async fn get_recommended_groups(
        &self,
        group_type: i32,
        create_date_range: i32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_RECOMMENDED_GROUPS)
            .path(group_type)
            .path(create_date_range);
        self.transport.send(&request).await
    }

    pub async fn group_search(&self, query: &GroupQuery) -> Result<Value> {
        let request = ApiRequest::new(&GROUP_SEARCH).body(serde_json::to_value(query)?);
        self.transport.send(&request).await
    }

    pub async fn get_group(&self, group_id: i64) -> Result<Value> {
        let request = ApiRequest::new(&GET_GROUP).path(group_id);
        self.transport.send(&request).await
    }

    pub async fn get_group_by_name(&self, group_name: &str, group_type: i32) -> Result<Value> {
        let request = ApiRequest::new(&GET_GROUP_BY_NAME)
            .path(group_name)
            .path(group_type);
        self.transport.send(&request).await
    }

    pub async fn get_group_by_name_v2(&self, group_name: &str, group_type: i32) -> Result<Value> {
        let request = ApiRequest::new(&GET_GROUP_BY_NAME_V2).body(json!({
            "groupName": group_name,
            "groupType": group_type,
        }));
        self.transport.send(&request).await
    }

    pub async fn get_group_optional_conversations(&self, group_id: i64) -> Result<Value> {
        let request = ApiRequest::new(&GET_GROUP_OPTIONAL_CONVERSATIONS).path(group_id);
        self.transport.send(&request).await
    }

    pub async fn edit_group(&self, group_id: i64, edit: &GroupEdit) -> Result<Value> {
        let request = ApiRequest::new(&EDIT_GROUP)
            .path(group_id)
            .body(serde_json::to_value(edit)?);
        self.transport.send(&request).await
    }

    pub async fn edit_clan_banner(&self, group_id: i64, banner: &ClanBanner) -> Result<Value> {
        let request = ApiRequest::new(&EDIT_CLAN_BANNER)
            .path(group_id)
            .body(serde_json::to_value(banner)?);
        self.transport.send(&request).await
    }

    pub async fn edit_founder_options(
        &self,
        group_id: i64,
        options: &FounderOptions,
    ) -> Result<Value> {
        let request = ApiRequest::new(&EDIT_FOUNDER_OPTIONS)
            .path(group_id)
            .body(serde_json::to_value(options)?);
        self.transport.send(&request).await
    }

    pub async fn add_optional_conversation(
        &self,
        group_id: i64,
        chat_name: &str,
        chat_security: i32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&ADD_OPTIONAL_CONVERSATION)
            .path(group_id)
            .body(json!({
                "chatName": chat_name,
                "chatSecurity": chat_security,
            }));
        self.transport.send(&request).await
    }

    pub async fn edit_optional_conversation(
        &self,
        group_id: i64,
        conversation_id: i64,
        chat_enabled: Option<bool>,
        chat_name: Option<&str>,
        chat_security: Option<i32>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&EDIT_OPTIONAL_CONVERSATION)
            .path(group_id)
            .path(conversation_id)
            .body(json!({
                "chatEnabled": chat_enabled,
                "chatName": chat_name,
                "chatSecurity": chat_security,
            }));
        self.transport.send(&request).await
    }

    pub async fn get_members_of_group(
        &self,
        group_id: i64,
        current_page: i32,
        member_type: Option<i32>,
        name_search: Option<&str>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_MEMBERS_OF_GROUP)
            .path(group_id)
            .query("currentpage", current_page)
            .query_opt("memberType", member_type)
            .query_opt("nameSearch", name_search);
        self.transport.send(&request).await
    }

    pub async fn get_admins_and_founder_of_group(
        &self,
        group_id: i64,
        current_page: i32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_ADMINS_AND_FOUNDER_OF_GROUP)
            .path(group_id)
            .query("currentpage", current_page);
        self.transport.send(&request).await
    }

    pub async fn edit_group_membership(
        &self,
        group_id: i64,
        membership_type: BungieMembershipType,
        membership_id: i64,
        member_type: i32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&EDIT_GROUP_MEMBERSHIP)
            .path(group_id)
            .path(membership_type)
            .path(membership_id)
            .path(member_type);
        self.transport.send(&request).await
    }

    pub async fn kick_member(
        &self,
        group_id: i64,
        membership_type: BungieMembershipType,
        membership_id: i64,
    ) -> Result<Value> {
        let request = member_request(&KICK_MEMBER, group_id, membership_type, membership_id);
        self.transport.send(&request).await
    }

    /// Ban a member. `length` is a `IgnoreLength` value.
    pub async fn ban_member(
        &self,
        group_id: i64,
        membership_type: BungieMembershipType,
        membership_id: i64,
        comment: &str,
        length: i32,
    ) -> Result<Value> {
        let request = member_request(&BAN_MEMBER, group_id, membership_type, membership_id).body(
            json!({
                "comment": comment,
                "length": length,
            }),
        );
        self.transport.send(&request).await
    }

    pub async fn unban_member(
        &self,
        group_id: i64,
        membership_type: BungieMembershipType,
        membership_id: i64,
    ) -> Result<Value> {
        let request = member_request(&UNBAN_MEMBER, group_id, membership_type, membership_id);
        self.transport.send(&request).await
    }

    pub async fn get_banned_members_of_group(
        &self,
        group_id: i64,
        current_page: i32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_BANNED_MEMBERS_OF_GROUP)
            .path(group_id)
            .query("currentpage", current_page);
        self.transport.send(&request).await
    }

    pub async fn abdicate_foundership(
        &self,
        group_id: i64,
        membership_type: BungieMembershipType,
        founder_id_new: i64,
    ) -> Result<Value> {
        let request = member_request(&ABDICATE_FOUNDERSHIP, group_id, membership_type, founder_id_new);
        self.transport.send(&request).await
    }

    pub async fn get_pending_memberships(&self, group_id: i64, current_page: i32) -> Result<Value> {
        let request = ApiRequest::new(&GET_PENDING_MEMBERSHIPS)
            .path(group_id)
            .query("currentpage", current_page);
        self.transport.send(&request).await
    }

    pub async fn get_invited_individuals(&self, group_id: i64, current_page: i32) -> Result<Value> {
        let request = ApiRequest::new(&GET_INVITED_INDIVIDUALS)
            .path(group_id)
            .query("currentpage", current_page);
        self.transport.send(&request).await
    }

    pub async fn approve_all_pending(&self, group_id: i64, message: &str) -> Result<Value> {
        let request = ApiRequest::new(&APPROVE_ALL_PENDING)
            .path(group_id)
            .body(json!({ "message": message }));
        self.transport.send(&request).await
    }

    pub async fn deny_all_pending(&self, group_id: i64, message: &str) -> Result<Value> {
        let request = ApiRequest::new(&DENY_ALL_PENDING)
            .path(group_id)
            .body(json!({ "message": message }));
        self.transport.send(&request).await
    }

    pub async fn approve_pending_for_list(
        &self,
        group_id: i64,
        memberships: &[UserMembership],
        message: &str,
    ) -> Result<Value> {
        let request = ApiRequest::new(&APPROVE_PENDING_FOR_LIST)
            .path(group_id)
            .body(json!({
                "memberships": memberships,
                "message": message,
            }));
        self.transport.send(&request).await
    }

    pub async fn approve_pending(
        &self,
        group_id: i64,
        membership_type: BungieMembershipType,
        membership_id: i64,
        message: &str,
    ) -> Result<Value> {
        let request = member_request(&APPROVE_PENDING, group_id, membership_type, membership_id)
            .body(json!({ "message": message }));
        self.transport.send(&request).await
    }

    pub async fn deny_pending_for_list(
        &self,
        group_id: i64,
        memberships: &[UserMembership],
        message: &str,
    ) -> Result<Value> {
        let request = ApiRequest::new(&DENY_PENDING_FOR_LIST)
            .path(group_id)
            .body(json!({
                "memberships": memberships,
                "message": message,
            }));
        self.transport.send(&request).await
    }

    pub async fn get_groups_for_member(
        &self,
        membership_type: BungieMembershipType,
        membership_id: i64,
        filter: i32,
        group_type: i32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_GROUPS_FOR_MEMBER)
            .path(membership_type)
            .path(membership_id)
            .path(filter)
            .path(group_type);
        self.transport.send(&request).await
    }

    pub async fn recover_group_for_founder(
        &self,
        membership_type: BungieMembershipType,
        membership_id: i64,
        group_type: i32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&RECOVER_GROUP_FOR_FOUNDER)
            .path(membership_type)
            .path(membership_id)
            .path(group_type);
        self.transport.send(&request).await
    }

    pub async fn get_potential_groups_for_member(
        &self,
        membership_type: BungieMembershipType,
        membership_id: i64,
        filter: i32,
        group_type: i32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_POTENTIAL_GROUPS_FOR_MEMBER)
            .path(membership_type)
            .path(membership_id)
            .path(filter)
            .path(group_type);
        self.transport.send(&request).await
    }

    pub async fn individual_group_invite(
        &self,
        group_id: i64,
        membership_type: BungieMembershipType,
        membership_id: i64,
        message: &str,
    ) -> Result<Value> {
        let request =
            member_request(&INDIVIDUAL_GROUP_INVITE, group_id, membership_type, membership_id)
                .body(json!({ "message": message }));
        self.transport.send(&request).await
    }

    pub async fn individual_group_invite_cancel(
        &self,
        group_id: i64,
        membership_type: BungieMembershipType,
        membership_id: i64,
    ) -> Result<Value> {
        let request = member_request(
            &INDIVIDUAL_GROUP_INVITE_CANCEL,
            group_id,
            membership_type,
            membership_id,
        );
        self.transport.send(&request).await
    }
}

/// `/GroupV2/{groupId}/.../{membershipType}/{membershipId}/` shaped requests.
fn member_request(
    endpoint: &'static Endpoint,
    group_id: i64,
    membership_type: BungieMembershipType,
    membership_id: i64,
) -> ApiRequest {
    ApiRequest::new(endpoint)
        .path(group_id)
        .path(membership_type)
        .path(membership_id)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_group_query_skips_unset_filters() {
        let query = GroupQuery {
            name: "Clan".to_string(),
            group_type: 1,
            items_per_page: 25,
            ..GroupQuery::default()
        };
        let value = serde_json::to_value(&query).expect("Operation should succeed");
        assert_eq!(
            value,
            json!({
                "name": "Clan",
                "groupType": 1,
                "creationDate": 0,
                "sortBy": 0,
                "itemsPerPage": 25,
                "currentPage": 0,
            })
        );
    }

    #[test]
    fn test_founder_options_field_names() {
        let options = FounderOptions {
            invite_permission_override: Some(true),
            join_level: Some(2),
            ..FounderOptions::default()
        };
        let value = serde_json::to_value(options).expect("Operation should succeed");
        assert_eq!(value, json!({"InvitePermissionOverride": true, "joinLevel": 2}));
    }

    #[test]
    fn test_user_membership_serializes_type_as_integer() {
        let membership = UserMembership {
            membership_type: BungieMembershipType::TigerSteam,
            membership_id: 42,
        };
        let value = serde_json::to_value(membership).expect("Operation should succeed");
        assert_eq!(value, json!({"membershipType": 3, "membershipId": 42}));
    }
}
