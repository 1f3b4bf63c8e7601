//! `Destiny2` endpoints: manifest, profiles, items, vendors, stats and Awa

use base64::{Engine as _, engine::general_purpose};
use serde_json::{Value, json};

use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{BungieMembershipType, DestinyComponentType};

use super::join;

pub static GET_DESTINY_MANIFEST: Endpoint =
    Endpoint::get("Destiny2.GetDestinyManifest", "/Destiny2/Manifest/");
pub static GET_DESTINY_ENTITY_DEFINITION: Endpoint = Endpoint::get(
    "Destiny2.GetDestinyEntityDefinition",
    "/Destiny2/Manifest/{entityType}/{hashIdentifier}/",
);
pub static SEARCH_DESTINY_PLAYER_BY_BUNGIE_NAME: Endpoint = Endpoint::post(
    "Destiny2.SearchDestinyPlayerByBungieName",
    "/Destiny2/SearchDestinyPlayerByBungieName/{membershipType}/",
);
pub static GET_LINKED_PROFILES: Endpoint = Endpoint::get(
    "Destiny2.GetLinkedProfiles",
    "/Destiny2/{membershipType}/Profile/{membershipId}/LinkedProfiles/",
)
.with_query(&["getAllMemberships"]);
pub static GET_PROFILE: Endpoint = Endpoint::get(
    "Destiny2.GetProfile",
    "/Destiny2/{membershipType}/Profile/{destinyMembershipId}/",
)
.with_query(&["components"]);
pub static GET_CHARACTER: Endpoint = Endpoint::get(
    "Destiny2.GetCharacter",
    "/Destiny2/{membershipType}/Profile/{destinyMembershipId}/Character/{characterId}/",
)
.with_query(&["components"]);
pub static GET_CLAN_WEEKLY_REWARD_STATE: Endpoint = Endpoint::get(
    "Destiny2.GetClanWeeklyRewardState",
    "/Destiny2/Clan/{groupId}/WeeklyRewardState/",
);
pub static GET_CLAN_BANNER_SOURCE: Endpoint = Endpoint::get(
    "Destiny2.GetClanBannerSource",
    "/Destiny2/Clan/ClanBannerDictionary/",
);
pub static GET_ITEM: Endpoint = Endpoint::get(
    "Destiny2.GetItem",
    "/Destiny2/{membershipType}/Profile/{destinyMembershipId}/Item/{itemInstanceId}/",
)
.with_query(&["components"]);
pub static GET_VENDORS: Endpoint = Endpoint::get(
    "Destiny2.GetVendors",
    "/Destiny2/{membershipType}/Profile/{destinyMembershipId}/Character/{characterId}/Vendors/",
)
.with_query(&["components", "filter"])
.authenticated();
pub static GET_VENDOR: Endpoint = Endpoint::get(
    "Destiny2.GetVendor",
    "/Destiny2/{membershipType}/Profile/{destinyMembershipId}/Character/{characterId}/Vendors/{vendorHash}/",
)
.with_query(&["components"])
.authenticated();
pub static GET_PUBLIC_VENDORS: Endpoint =
    Endpoint::get("Destiny2.GetPublicVendors", "/Destiny2/Vendors/").with_query(&["components"]);
pub static GET_COLLECTIBLE_NODE_DETAILS: Endpoint = Endpoint::get(
    "Destiny2.GetCollectibleNodeDetails",
    "/Destiny2/{membershipType}/Profile/{destinyMembershipId}/Character/{characterId}/Collectibles/{collectiblePresentationNodeHash}/",
)
.with_query(&["components"]);
pub static TRANSFER_ITEM: Endpoint =
    Endpoint::post("Destiny2.TransferItem", "/Destiny2/Actions/Items/TransferItem/").authenticated();
pub static PULL_FROM_POSTMASTER: Endpoint = Endpoint::post(
    "Destiny2.PullFromPostmaster",
    "/Destiny2/Actions/Items/PullFromPostmaster/",
)
.authenticated();
pub static EQUIP_ITEM: Endpoint =
    Endpoint::post("Destiny2.EquipItem", "/Destiny2/Actions/Items/EquipItem/").authenticated();
pub static EQUIP_ITEMS: Endpoint =
    Endpoint::post("Destiny2.EquipItems", "/Destiny2/Actions/Items/EquipItems/").authenticated();
pub static SET_ITEM_LOCK_STATE: Endpoint =
    Endpoint::post("Destiny2.SetItemLockState", "/Destiny2/Actions/Items/SetLockState/")
        .authenticated();
pub static SET_QUEST_TRACKED_STATE: Endpoint = Endpoint::post(
    "Destiny2.SetQuestTrackedState",
    "/Destiny2/Actions/Items/SetTrackedState/",
)
.authenticated();
pub static INSERT_SOCKET_PLUG: Endpoint = Endpoint::post(
    "Destiny2.InsertSocketPlug",
    "/Destiny2/Actions/Items/InsertSocketPlug/",
)
.authenticated();
pub static INSERT_SOCKET_PLUG_FREE: Endpoint = Endpoint::post(
    "Destiny2.InsertSocketPlugFree",
    "/Destiny2/Actions/Items/InsertSocketPlugFree/",
)
.authenticated();
pub static GET_POST_GAME_CARNAGE_REPORT: Endpoint = Endpoint::get(
    "Destiny2.GetPostGameCarnageReport",
    "/Destiny2/Stats/PostGameCarnageReport/{activityId}/",
);
pub static REPORT_OFFENSIVE_POST_GAME_CARNAGE_REPORT_PLAYER: Endpoint = Endpoint::post(
    "Destiny2.ReportOffensivePostGameCarnageReportPlayer",
    "/Destiny2/Stats/PostGameCarnageReport/{activityId}/Report/",
)
.authenticated();
pub static GET_HISTORICAL_STATS_DEFINITION: Endpoint =
    Endpoint::get("Destiny2.GetHistoricalStatsDefinition", "/Destiny2/Stats/Definition/");
pub static GET_CLAN_LEADERBOARDS: Endpoint = Endpoint::get(
    "Destiny2.GetClanLeaderboards",
    "/Destiny2/Stats/Leaderboards/Clans/{groupId}/",
)
.with_query(&["maxtop", "modes", "statid"]);
pub static GET_CLAN_AGGREGATE_STATS: Endpoint = Endpoint::get(
    "Destiny2.GetClanAggregateStats",
    "/Destiny2/Stats/AggregateClanStats/{groupId}/",
)
.with_query(&["modes"]);
pub static GET_LEADERBOARDS: Endpoint = Endpoint::get(
    "Destiny2.GetLeaderboards",
    "/Destiny2/{membershipType}/Account/{destinyMembershipId}/Stats/Leaderboards/",
)
.with_query(&["maxtop", "modes", "statid"]);
pub static GET_LEADERBOARDS_FOR_CHARACTER: Endpoint = Endpoint::get(
    "Destiny2.GetLeaderboardsForCharacter",
    "/Destiny2/Stats/Leaderboards/{membershipType}/{destinyMembershipId}/{characterId}/",
)
.with_query(&["maxtop", "modes", "statid"]);
pub static SEARCH_DESTINY_ENTITIES: Endpoint = Endpoint::get(
    "Destiny2.SearchDestinyEntities",
    "/Destiny2/Armory/Search/{type}/{searchTerm}/",
)
.with_query(&["page"]);
pub static GET_HISTORICAL_STATS: Endpoint = Endpoint::get(
    "Destiny2.GetHistoricalStats",
    "/Destiny2/{membershipType}/Account/{destinyMembershipId}/Character/{characterId}/Stats/",
)
.with_query(&["dayend", "daystart", "groups", "modes", "periodType"]);
pub static GET_HISTORICAL_STATS_FOR_ACCOUNT: Endpoint = Endpoint::get(
    "Destiny2.GetHistoricalStatsForAccount",
    "/Destiny2/{membershipType}/Account/{destinyMembershipId}/Stats/",
)
.with_query(&["groups"]);
pub static GET_ACTIVITY_HISTORY: Endpoint = Endpoint::get(
    "Destiny2.GetActivityHistory",
    "/Destiny2/{membershipType}/Account/{destinyMembershipId}/Character/{characterId}/Stats/Activities/",
)
.with_query(&["count", "mode", "page"]);
pub static GET_UNIQUE_WEAPON_HISTORY: Endpoint = Endpoint::get(
    "Destiny2.GetUniqueWeaponHistory",
    "/Destiny2/{membershipType}/Account/{destinyMembershipId}/Character/{characterId}/Stats/UniqueWeapons/",
);
pub static GET_DESTINY_AGGREGATE_ACTIVITY_STATS: Endpoint = Endpoint::get(
    "Destiny2.GetDestinyAggregateActivityStats",
    "/Destiny2/{membershipType}/Account/{destinyMembershipId}/Character/{characterId}/Stats/AggregateActivityStats/",
);
pub static GET_PUBLIC_MILESTONE_CONTENT: Endpoint = Endpoint::get(
    "Destiny2.GetPublicMilestoneContent",
    "/Destiny2/Milestones/{milestoneHash}/Content/",
);
pub static GET_PUBLIC_MILESTONES: Endpoint =
    Endpoint::get("Destiny2.GetPublicMilestones", "/Destiny2/Milestones/");
pub static AWA_INITIALIZE_REQUEST: Endpoint =
    Endpoint::post("Destiny2.AwaInitializeRequest", "/Destiny2/Awa/Initialize/").authenticated();
pub static AWA_PROVIDE_AUTHORIZATION_RESULT: Endpoint = Endpoint::post(
    "Destiny2.AwaProvideAuthorizationResult",
    "/Destiny2/Awa/AwaProvideAuthorizationResult/",
);
pub static AWA_GET_ACTION_TOKEN: Endpoint = Endpoint::get(
    "Destiny2.AwaGetActionToken",
    "/Destiny2/Awa/GetActionToken/{correlationId}/",
)
.authenticated();

pub static ENDPOINTS: &[&Endpoint] = &[
    &GET_DESTINY_MANIFEST,
    &GET_DESTINY_ENTITY_DEFINITION,
    &SEARCH_DESTINY_PLAYER_BY_BUNGIE_NAME,
    &GET_LINKED_PROFILES,
    &GET_PROFILE,
    &GET_CHARACTER,
    &GET_CLAN_WEEKLY_REWARD_STATE,
    &GET_CLAN_BANNER_SOURCE,
    &GET_ITEM,
    &GET_VENDORS,
    &GET_VENDOR,
    &GET_PUBLIC_VENDORS,
    &GET_COLLECTIBLE_NODE_DETAILS,
    &TRANSFER_ITEM,
    &PULL_FROM_POSTMASTER,
    &EQUIP_ITEM,
    &EQUIP_ITEMS,
    &SET_ITEM_LOCK_STATE,
    &SET_QUEST_TRACKED_STATE,
    &INSERT_SOCKET_PLUG,
    &INSERT_SOCKET_PLUG_FREE,
    &GET_POST_GAME_CARNAGE_REPORT,
    &REPORT_OFFENSIVE_POST_GAME_CARNAGE_REPORT_PLAYER,
    &GET_HISTORICAL_STATS_DEFINITION,
    &GET_CLAN_LEADERBOARDS,
    &GET_CLAN_AGGREGATE_STATS,
    &GET_LEADERBOARDS,
    &GET_LEADERBOARDS_FOR_CHARACTER,
    &SEARCH_DESTINY_ENTITIES,
    &GET_HISTORICAL_STATS,
    &GET_HISTORICAL_STATS_FOR_ACCOUNT,
    &GET_ACTIVITY_HISTORY,
    &GET_UNIQUE_WEAPON_HISTORY,
    &GET_DESTINY_AGGREGATE_ACTIVITY_STATS,
    &GET_PUBLIC_MILESTONE_CONTENT,
    &GET_PUBLIC_MILESTONES,
    &AWA_INITIALIZE_REQUEST,
    &AWA_PROVIDE_AUTHORIZATION_RESULT,
    &AWA_GET_ACTION_TOKEN,
];

/// Socket plug selection used by the socket-insertion actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketPlug {
    pub socket_index: i32,
    /// 0 = default sockets, 1 = intrinsic sockets
    pub socket_array_type: i32,
    pub plug_item_hash: u32,
}

impl SocketPlug {
    fn to_json(self) -> Value {
        json!({
            "socketIndex": self.socket_index,
            "socketArrayType": self.socket_array_type,
            "plugItemHash": self.plug_item_hash,
        })
    }
}

/// Historical stats filter for [`Destiny2::get_historical_stats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoricalStatsQuery {
    /// Last day to return, `YYYY-MM-DD`
    pub day_end: Option<String>,
    /// First day to return, `YYYY-MM-DD`
    pub day_start: Option<String>,
    pub groups: Vec<i32>,
    pub modes: Vec<i32>,
    pub period_type: Option<i32>,
}

/// Game data, character and item operations.
#[derive(Debug, Clone, Copy)]
pub struct Destiny2<'a> {
    transport: &'a Transport,
}

impl<'a> Destiny2<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Current manifest version and content file locations.
    pub async fn get_destiny_manifest(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_DESTINY_MANIFEST))
            .await
    }

    /// Static definition of a single entity. Prefer the local manifest for bulk lookups.
    pub async fn get_destiny_entity_definition(
        &self,
        entity_type: &str,
        hash_identifier: u32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_DESTINY_ENTITY_DEFINITION)
            .path(entity_type)
            .path(hash_identifier);
        self.transport.send(&request).await
    }

    pub async fn search_destiny_player_by_bungie_name(
        &self,
        membership_type: BungieMembershipType,
        display_name: &str,
        display_name_code: u16,
    ) -> Result<Value> {
        let request = ApiRequest::new(&SEARCH_DESTINY_PLAYER_BY_BUNGIE_NAME)
            .path(membership_type)
            .body(json!({
                "displayName": display_name,
                "displayNameCode": display_name_code,
            }));
        self.transport.send(&request).await
    }

    pub async fn get_linked_profiles(
        &self,
        membership_type: BungieMembershipType,
        membership_id: i64,
        get_all_memberships: bool,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_LINKED_PROFILES)
            .path(membership_type)
            .path(membership_id)
            .query("getAllMemberships", get_all_memberships);
        self.transport.send(&request).await
    }

    pub async fn get_profile(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        components: &[DestinyComponentType],
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_PROFILE)
            .path(membership_type)
            .path(destiny_membership_id)
            .query("components", join(components));
        self.transport.send(&request).await
    }

    pub async fn get_character(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        character_id: i64,
        components: &[DestinyComponentType],
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_CHARACTER)
            .path(membership_type)
            .path(destiny_membership_id)
            .path(character_id)
            .query("components", join(components));
        self.transport.send(&request).await
    }

    pub async fn get_clan_weekly_reward_state(&self, group_id: i64) -> Result<Value> {
        let request = ApiRequest::new(&GET_CLAN_WEEKLY_REWARD_STATE).path(group_id);
        self.transport.send(&request).await
    }

    pub async fn get_clan_banner_source(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_CLAN_BANNER_SOURCE))
            .await
    }

    pub async fn get_item(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        item_instance_id: i64,
        components: &[DestinyComponentType],
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_ITEM)
            .path(membership_type)
            .path(destiny_membership_id)
            .path(item_instance_id)
            .query("components", join(components));
        self.transport.send(&request).await
    }

    pub async fn get_vendors(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        character_id: i64,
        components: &[DestinyComponentType],
        filter: Option<i32>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_VENDORS)
            .path(membership_type)
            .path(destiny_membership_id)
            .path(character_id)
            .query("components", join(components))
            .query_opt("filter", filter);
        self.transport.send(&request).await
    }

    pub async fn get_vendor(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        character_id: i64,
        vendor_hash: u32,
        components: &[DestinyComponentType],
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_VENDOR)
            .path(membership_type)
            .path(destiny_membership_id)
            .path(character_id)
            .path(vendor_hash)
            .query("components", join(components));
        self.transport.send(&request).await
    }

    pub async fn get_public_vendors(&self, components: &[DestinyComponentType]) -> Result<Value> {
        let request =
            ApiRequest::new(&GET_PUBLIC_VENDORS).query("components", join(components));
        self.transport.send(&request).await
    }

    pub async fn get_collectible_node_details(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        character_id: i64,
        collectible_presentation_node_hash: u32,
        components: &[DestinyComponentType],
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_COLLECTIBLE_NODE_DETAILS)
            .path(membership_type)
            .path(destiny_membership_id)
            .path(character_id)
            .path(collectible_presentation_node_hash)
            .query("components", join(components));
        self.transport.send(&request).await
    }

    /// Move an item between a character and the vault.
    pub async fn transfer_item(
        &self,
        item_reference_hash: u32,
        stack_size: i32,
        transfer_to_vault: bool,
        item_id: i64,
        character_id: i64,
        membership_type: BungieMembershipType,
    ) -> Result<Value> {
        let request = ApiRequest::new(&TRANSFER_ITEM).body(json!({
            "itemReferenceHash": item_reference_hash,
            "stackSize": stack_size,
            "transferToVault": transfer_to_vault,
            "itemId": item_id,
            "characterId": character_id,
            "membershipType": membership_type,
        }));
        self.transport.send(&request).await
    }

    pub async fn pull_from_postmaster(
        &self,
        item_reference_hash: u32,
        stack_size: i32,
        item_id: i64,
        character_id: i64,
        membership_type: BungieMembershipType,
    ) -> Result<Value> {
        let request = ApiRequest::new(&PULL_FROM_POSTMASTER).body(json!({
            "itemReferenceHash": item_reference_hash,
            "stackSize": stack_size,
            "itemId": item_id,
            "characterId": character_id,
            "membershipType": membership_type,
        }));
        self.transport.send(&request).await
    }

    pub async fn equip_item(
        &self,
        item_id: i64,
        character_id: i64,
        membership_type: BungieMembershipType,
    ) -> Result<Value> {
        let request = ApiRequest::new(&EQUIP_ITEM).body(json!({
            "itemId": item_id,
            "characterId": character_id,
            "membershipType": membership_type,
        }));
        self.transport.send(&request).await
    }

    pub async fn equip_items(
        &self,
        item_ids: &[i64],
        character_id: i64,
        membership_type: BungieMembershipType,
    ) -> Result<Value> {
        let request = ApiRequest::new(&EQUIP_ITEMS).body(json!({
            "itemIds": item_ids,
            "characterId": character_id,
            "membershipType": membership_type,
        }));
        self.transport.send(&request).await
    }

    pub async fn set_item_lock_state(
        &self,
        state: bool,
        item_id: i64,
        character_id: i64,
        membership_type: BungieMembershipType,
    ) -> Result<Value> {
        let request = ApiRequest::new(&SET_ITEM_LOCK_STATE).body(json!({
            "state": state,
            "itemId": item_id,
            "characterId": character_id,
            "membershipType": membership_type,
        }));
        self.transport.send(&request).await
    }

    pub async fn set_quest_tracked_state(
        &self,
        state: bool,
        item_id: i64,
        character_id: i64,
        membership_type: BungieMembershipType,
    ) -> Result<Value> {
        let request = ApiRequest::new(&SET_QUEST_TRACKED_STATE).body(json!({
            "state": state,
            "itemId": item_id,
            "characterId": character_id,
            "membershipType": membership_type,
        }));
        self.transport.send(&request).await
    }

    /// Insert a plug using an action token obtained through Awa.
    pub async fn insert_socket_plug(
        &self,
        action_token: &str,
        item_instance_id: i64,
        plug: SocketPlug,
        character_id: i64,
        membership_type: BungieMembershipType,
    ) -> Result<Value> {
        let request = ApiRequest::new(&INSERT_SOCKET_PLUG).body(json!({
            "actionToken": action_token,
            "itemInstanceId": item_instance_id,
            "plug": plug.to_json(),
            "characterId": character_id,
            "membershipType": membership_type,
        }));
        self.transport.send(&request).await
    }

    /// Insert a plug that costs nothing to apply.
    pub async fn insert_socket_plug_free(
        &self,
        plug: SocketPlug,
        item_instance_id: i64,
        character_id: i64,
        membership_type: BungieMembershipType,
    ) -> Result<Value> {
        let request = ApiRequest::new(&INSERT_SOCKET_PLUG_FREE).body(json!({
            "plug": plug.to_json(),
            "itemInstanceId": item_instance_id,
            "characterId": character_id,
            "membershipType": membership_type,
        }));
        self.transport.send(&request).await
    }

    pub async fn get_post_game_carnage_report(&self, activity_id: i64) -> Result<Value> {
        let request = ApiRequest::new(&GET_POST_GAME_CARNAGE_REPORT).path(activity_id);
        self.transport.send(&request).await
    }

    pub async fn report_offensive_post_game_carnage_report_player(
        &self,
        activity_id: i64,
        reason_category_hashes: &[u32],
        reason_hashes: &[u32],
        offending_character_id: i64,
    ) -> Result<Value> {
        let request = ApiRequest::new(&REPORT_OFFENSIVE_POST_GAME_CARNAGE_REPORT_PLAYER)
            .path(activity_id)
            .body(json!({
                "reasonCategoryHashes": reason_category_hashes,
                "reasonHashes": reason_hashes,
                "offendingCharacterId": offending_character_id,
            }));
        self.transport.send(&request).await
    }

    pub async fn get_historical_stats_definition(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_HISTORICAL_STATS_DEFINITION))
            .await
    }

    pub async fn get_clan_leaderboards(
        &self,
        group_id: i64,
        max_top: Option<i32>,
        modes: &[i32],
        stat_id: Option<&str>,
    ) -> Result<Value> {
        let request = leaderboard_query(
            ApiRequest::new(&GET_CLAN_LEADERBOARDS).path(group_id),
            max_top,
            modes,
            stat_id,
        );
        self.transport.send(&request).await
    }

    pub async fn get_clan_aggregate_stats(&self, group_id: i64, modes: &[i32]) -> Result<Value> {
        let mut request = ApiRequest::new(&GET_CLAN_AGGREGATE_STATS).path(group_id);
        if !modes.is_empty() {
            request = request.query("modes", join(modes));
        }
        self.transport.send(&request).await
    }

    pub async fn get_leaderboards(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        max_top: Option<i32>,
        modes: &[i32],
        stat_id: Option<&str>,
    ) -> Result<Value> {
        let request = leaderboard_query(
            ApiRequest::new(&GET_LEADERBOARDS)
                .path(membership_type)
                .path(destiny_membership_id),
            max_top,
            modes,
            stat_id,
        );
        self.transport.send(&request).await
    }

    pub async fn get_leaderboards_for_character(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        character_id: i64,
        max_top: Option<i32>,
        modes: &[i32],
        stat_id: Option<&str>,
    ) -> Result<Value> {
        let request = leaderboard_query(
            ApiRequest::new(&GET_LEADERBOARDS_FOR_CHARACTER)
                .path(membership_type)
                .path(destiny_membership_id)
                .path(character_id),
            max_top,
            modes,
            stat_id,
        );
        self.transport.send(&request).await
    }

    /// Armory search. `entity_type` is a definition name such as
    /// `DestinyInventoryItemDefinition`.
    pub async fn search_destiny_entities(
        &self,
        entity_type: &str,
        search_term: &str,
        page: i32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&SEARCH_DESTINY_ENTITIES)
            .path(entity_type)
            .path(search_term)
            .query("page", page);
        self.transport.send(&request).await
    }

    /// Pass `0` as `character_id` for account-wide stats.
    pub async fn get_historical_stats(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        character_id: i64,
        filter: &HistoricalStatsQuery,
    ) -> Result<Value> {
        let mut request = ApiRequest::new(&GET_HISTORICAL_STATS)
            .path(membership_type)
            .path(destiny_membership_id)
            .path(character_id)
            .query_opt("dayend", filter.day_end.as_deref())
            .query_opt("daystart", filter.day_start.as_deref());
        if !filter.groups.is_empty() {
            request = request.query("groups", join(&filter.groups));
        }
        if !filter.modes.is_empty() {
            request = request.query("modes", join(&filter.modes));
        }
        let request = request.query_opt("periodType", filter.period_type);
        self.transport.send(&request).await
    }

    pub async fn get_historical_stats_for_account(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        groups: &[i32],
    ) -> Result<Value> {
        let mut request = ApiRequest::new(&GET_HISTORICAL_STATS_FOR_ACCOUNT)
            .path(membership_type)
            .path(destiny_membership_id);
        if !groups.is_empty() {
            request = request.query("groups", join(groups));
        }
        self.transport.send(&request).await
    }

    pub async fn get_activity_history(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        character_id: i64,
        count: Option<i32>,
        mode: Option<i32>,
        page: Option<i32>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_ACTIVITY_HISTORY)
            .path(membership_type)
            .path(destiny_membership_id)
            .path(character_id)
            .query_opt("count", count)
            .query_opt("mode", mode)
            .query_opt("page", page);
        self.transport.send(&request).await
    }

    pub async fn get_unique_weapon_history(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        character_id: i64,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_UNIQUE_WEAPON_HISTORY)
            .path(membership_type)
            .path(destiny_membership_id)
            .path(character_id);
        self.transport.send(&request).await
    }

    pub async fn get_destiny_aggregate_activity_stats(
        &self,
        membership_type: BungieMembershipType,
        destiny_membership_id: i64,
        character_id: i64,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_DESTINY_AGGREGATE_ACTIVITY_STATS)
            .path(membership_type)
            .path(destiny_membership_id)
            .path(character_id);
        self.transport.send(&request).await
    }

    pub async fn get_public_milestone_content(&self, milestone_hash: u32) -> Result<Value> {
        let request = ApiRequest::new(&GET_PUBLIC_MILESTONE_CONTENT).path(milestone_hash);
        self.transport.send(&request).await
    }

    pub async fn get_public_milestones(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_PUBLIC_MILESTONES))
            .await
    }

    /// Start an advanced write action (Awa) authorization request.
    pub async fn awa_initialize_request(
        &self,
        awa_type: i32,
        affected_item_id: Option<i64>,
        membership_type: BungieMembershipType,
        character_id: Option<i64>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&AWA_INITIALIZE_REQUEST).body(json!({
            "type": awa_type,
            "affectedItemId": affected_item_id,
            "membershipType": membership_type,
            "characterId": character_id,
        }));
        self.transport.send(&request).await
    }

    /// Answer an Awa prompt. `nonce` is sent base64 encoded.
    pub async fn awa_provide_authorization_result(
        &self,
        selection: i32,
        correlation_id: &str,
        nonce: &[u8],
    ) -> Result<Value> {
        let request = ApiRequest::new(&AWA_PROVIDE_AUTHORIZATION_RESULT).body(json!({
            "selection": selection,
            "correlationId": correlation_id,
            "nonce": general_purpose::STANDARD.encode(nonce),
        }));
        self.transport.send(&request).await
    }

    pub async fn awa_get_action_token(&self, correlation_id: &str) -> Result<Value> {
        let request = ApiRequest::new(&AWA_GET_ACTION_TOKEN).path(correlation_id);
        self.transport.send(&request).await
    }
}

fn leaderboard_query(
    request: ApiRequest,
    max_top: Option<i32>,
    modes: &[i32],
    stat_id: Option<&str>,
) -> ApiRequest {
    let request = request.query_opt("maxtop", max_top);
    let request = if modes.is_empty() {
        request
    } else {
        request.query("modes", join(modes))
    };
    request.query_opt("statid", stat_id)
}
