//! `Trending` endpoints

use serde_json::Value;

use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::Result;
use crate::transport::Transport;

pub static GET_TRENDING_CATEGORIES: Endpoint =
    Endpoint::get("Trending.GetTrendingCategories", "/Trending/Categories/");
pub static GET_TRENDING_CATEGORY: Endpoint = Endpoint::get(
    "Trending.GetTrendingCategory",
    "/Trending/Categories/{categoryId}/{pageNumber}/",
);
pub static GET_TRENDING_ENTRY_DETAIL: Endpoint = Endpoint::get(
    "Trending.GetTrendingEntryDetail",
    "/Trending/Details/{trendingEntryType}/{identifier}/",
);

pub static ENDPOINTS: &[&Endpoint] = &[
    &GET_TRENDING_CATEGORIES,
    &GET_TRENDING_CATEGORY,
    &GET_TRENDING_ENTRY_DETAIL,
];

#[derive(Debug, Clone, Copy)]
pub struct Trending<'a> {
    transport: &'a Transport,
}

impl<'a> Trending<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn get_trending_categories(&self) -> Result<Value> {
        self.transport
            .send(&ApiRequest::new(&GET_TRENDING_CATEGORIES))
            .await
    }

    pub async fn get_trending_category(&self, category_id: &str, page_number: i32) -> Result<Value> {
        let request = ApiRequest::new(&GET_TRENDING_CATEGORY)
            .path(category_id)
            .path(page_number);
        self.transport.send(&request).await
    }

    pub async fn get_trending_entry_detail(
        &self,
        trending_entry_type: i32,
        identifier: &str,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_TRENDING_ENTRY_DETAIL)
            .path(trending_entry_type)
            .path(identifier);
        self.transport.send(&request).await
    }
}
