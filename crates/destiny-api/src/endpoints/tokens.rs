//! `Tokens` endpoints: partner offers and Bungie rewards

use serde_json::{Value, json};

use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::Result;
use crate::transport::Transport;
use crate::types::BungieMembershipType;

pub static FORCE_DROPS_REPAIR: Endpoint =
    Endpoint::post("Tokens.ForceDropsRepair", "/Tokens/Partner/ForceDropsRepair/").authenticated();
pub static CLAIM_PARTNER_OFFER: Endpoint =
    Endpoint::post("Tokens.ClaimPartnerOffer", "/Tokens/Partner/ClaimOffer/").authenticated();
pub static APPLY_MISSING_PARTNER_OFFERS_WITHOUT_CLAIM: Endpoint = Endpoint::post(
    "Tokens.ApplyMissingPartnerOffersWithoutClaim",
    "/Tokens/Partner/ApplyMissingOffers/{partnerApplicationId}/{targetBnetMembershipId}/",
)
.authenticated();
pub static GET_PARTNER_OFFER_SKU_HISTORY: Endpoint = Endpoint::get(
    "Tokens.GetPartnerOfferSkuHistory",
    "/Tokens/Partner/History/{partnerApplicationId}/{targetBnetMembershipId}/",
)
.authenticated();
pub static GET_PARTNER_REWARD_HISTORY: Endpoint = Endpoint::get(
    "Tokens.GetPartnerRewardHistory",
    "/Tokens/Partner/History/{targetBnetMembershipId}/Application/{partnerApplicationId}/",
)
.authenticated();
pub static GET_BUNGIE_REWARDS_FOR_USER: Endpoint = Endpoint::get(
    "Tokens.GetBungieRewardsForUser",
    "/Tokens/Rewards/GetRewardsForUser/{membershipId}/",
)
.authenticated();
pub static GET_BUNGIE_REWARDS_FOR_PLATFORM_USER: Endpoint = Endpoint::get(
    "Tokens.GetBungieRewardsForPlatformUser",
    "/Tokens/Rewards/GetRewardsForPlatformUser/{membershipId}/{membershipType}/",
)
.authenticated();
pub static GET_BUNGIE_REWARDS_LIST: Endpoint =
    Endpoint::get("Tokens.GetBungieRewardsList", "/Tokens/Rewards/BungieRewards/");

pub static ENDPOINTS: &[&Endpoint] = &[
    &FORCE_DROPS_REPAIR,
    &CLAIM_PARTNER_OFFER,
    &APPLY_MISSING_PARTNER_OFFERS_WITHOUT_CLAIM,
    &GET_PARTNER_OFFER_SKU_HISTORY,
    &GET_PARTNER_REWARD_HISTORY,
    &GET_BUNGIE_REWARDS_FOR_USER,
    &GET_BUNGIE_REWARDS_FOR_PLATFORM_USER,
    &GET_BUNGIE_REWARDS_LIST,
];

/// Partner offer and reward operations.
#[derive(Debug, Clone, Copy)]
pub struct Tokens<'a> {
    transport: &'a Transport,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn force_drops_repair(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&FORCE_DROPS_REPAIR))
            .await
    }

    pub async fn claim_partner_offer(
        &self,
        partner_offer_id: &str,
        bungie_net_membership_id: i64,
        transaction_id: &str,
    ) -> Result<Value> {
        let request = ApiRequest::new(&CLAIM_PARTNER_OFFER).body(json!({
            "PartnerOfferId": partner_offer_id,
            "BungieNetMembershipId": bungie_net_membership_id,
            "TransactionId": transaction_id,
        }));
        self.transport.send(&request).await
    }

    pub async fn apply_missing_partner_offers_without_claim(
        &self,
        partner_application_id: i32,
        target_bnet_membership_id: i64,
    ) -> Result<Value> {
        let request = ApiRequest::new(&APPLY_MISSING_PARTNER_OFFERS_WITHOUT_CLAIM)
            .path(partner_application_id)
            .path(target_bnet_membership_id);
        self.transport.send(&request).await
    }

    pub async fn get_partner_offer_sku_history(
        &self,
        partner_application_id: i32,
        target_bnet_membership_id: i64,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_PARTNER_OFFER_SKU_HISTORY)
            .path(partner_application_id)
            .path(target_bnet_membership_id);
        self.transport.send(&request).await
    }

    pub async fn get_partner_reward_history(
        &self,
        target_bnet_membership_id: i64,
        partner_application_id: i32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_PARTNER_REWARD_HISTORY)
            .path(target_bnet_membership_id)
            .path(partner_application_id);
        self.transport.send(&request).await
    }

    pub async fn get_bungie_rewards_for_user(&self, membership_id: i64) -> Result<Value> {
        let request = ApiRequest::new(&GET_BUNGIE_REWARDS_FOR_USER).path(membership_id);
        self.transport.send(&request).await
    }

    pub async fn get_bungie_rewards_for_platform_user(
        &self,
        membership_id: i64,
        membership_type: BungieMembershipType,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_BUNGIE_REWARDS_FOR_PLATFORM_USER)
            .path(membership_id)
            .path(membership_type);
        self.transport.send(&request).await
    }

    pub async fn get_bungie_rewards_list(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_BUNGIE_REWARDS_LIST))
            .await
    }
}
