//! `CommunityContent` endpoints

use serde_json::Value;

use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::Result;
use crate::transport::Transport;

pub static GET_COMMUNITY_CONTENT: Endpoint = Endpoint::get(
    "CommunityContent.GetCommunityContent",
    "/CommunityContent/Get/{sort}/{mediaFilter}/{page}/",
);

pub static ENDPOINTS: &[&Endpoint] = &[&GET_COMMUNITY_CONTENT];

#[derive(Debug, Clone, Copy)]
pub struct CommunityContent<'a> {
    transport: &'a Transport,
}

impl<'a> CommunityContent<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `sort` is a `CommunityContentSortMode`, `media_filter` a `ForumTopicsCategoryFiltersEnum`.
    pub async fn get_community_content(
        &self,
        sort: i32,
        media_filter: i32,
        page: i32,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_COMMUNITY_CONTENT)
            .path(sort)
            .path(media_filter)
            .path(page);
        self.transport.send(&request).await
    }
}
