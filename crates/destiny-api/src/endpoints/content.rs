//! `Content` endpoints: articles, help and news

use serde_json::Value;

use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::Result;
use crate::transport::Transport;

pub static GET_CONTENT_TYPE: Endpoint =
    Endpoint::get("Content.GetContentType", "/Content/GetContentType/{type}/");
pub static GET_CONTENT_BY_ID: Endpoint =
    Endpoint::get("Content.GetContentById", "/Content/GetContentById/{id}/{locale}/")
        .with_query(&["head"]);
pub static GET_CONTENT_BY_TAG_AND_TYPE: Endpoint = Endpoint::get(
    "Content.GetContentByTagAndType",
    "/Content/GetContentByTagAndType/{tag}/{type}/{locale}/",
)
.with_query(&["head"]);
pub static SEARCH_CONTENT_WITH_TEXT: Endpoint =
    Endpoint::get("Content.SearchContentWithText", "/Content/Search/{locale}/").with_query(&[
        "ctype",
        "currentpage",
        "head",
        "searchtext",
        "source",
        "tag",
    ]);
pub static SEARCH_CONTENT_BY_TAG_AND_TYPE: Endpoint = Endpoint::get(
    "Content.SearchContentByTagAndType",
    "/Content/SearchContentByTagAndType/{tag}/{type}/{locale}/",
)
.with_query(&["currentpage", "head", "itemsperpage"]);
pub static SEARCH_HELP_ARTICLES: Endpoint = Endpoint::get(
    "Content.SearchHelpArticles",
    "/Content/SearchHelpArticles/{searchtext}/{size}/",
);
pub static RSS_NEWS_ARTICLES: Endpoint =
    Endpoint::get("Content.RssNewsArticles", "/Content/Rss/NewsArticles/{pageToken}/")
        .with_query(&["categoryfilter", "includebody"]);

pub static ENDPOINTS: &[&Endpoint] = &[
    &GET_CONTENT_TYPE,
    &GET_CONTENT_BY_ID,
    &GET_CONTENT_BY_TAG_AND_TYPE,
    &SEARCH_CONTENT_WITH_TEXT,
    &SEARCH_CONTENT_BY_TAG_AND_TYPE,
    &SEARCH_HELP_ARTICLES,
    &RSS_NEWS_ARTICLES,
];

/// Free-text content search arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSearch {
    pub search_text: Option<String>,
    pub content_type: Option<String>,
    pub current_page: Option<i32>,
    pub source: Option<String>,
    pub tag: Option<String>,
    pub head: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Content<'a> {
    transport: &'a Transport,
}

impl<'a> Content<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn get_content_type(&self, content_type: &str) -> Result<Value> {
        let request = ApiRequest::new(&GET_CONTENT_TYPE).path(content_type);
        self.transport.send(&request).await
    }

    pub async fn get_content_by_id(&self, id: i64, locale: &str, head: bool) -> Result<Value> {
        let request = ApiRequest::new(&GET_CONTENT_BY_ID)
            .path(id)
            .path(locale)
            .query("head", head);
        self.transport.send(&request).await
    }

    pub async fn get_content_by_tag_and_type(
        &self,
        tag: &str,
        content_type: &str,
        locale: &str,
        head: bool,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_CONTENT_BY_TAG_AND_TYPE)
            .path(tag)
            .path(content_type)
            .path(locale)
            .query("head", head);
        self.transport.send(&request).await
    }

    pub async fn search_content_with_text(
        &self,
        locale: &str,
        search: &ContentSearch,
    ) -> Result<Value> {
        let request = ApiRequest::new(&SEARCH_CONTENT_WITH_TEXT)
            .path(locale)
            .query_opt("ctype", search.content_type.as_deref())
            .query_opt("currentpage", search.current_page)
            .query("head", search.head)
            .query_opt("searchtext", search.search_text.as_deref())
            .query_opt("source", search.source.as_deref())
            .query_opt("tag", search.tag.as_deref());
        self.transport.send(&request).await
    }

    pub async fn search_content_by_tag_and_type(
        &self,
        tag: &str,
        content_type: &str,
        locale: &str,
        current_page: Option<i32>,
        items_per_page: Option<i32>,
        head: bool,
    ) -> Result<Value> {
        let request = ApiRequest::new(&SEARCH_CONTENT_BY_TAG_AND_TYPE)
            .path(tag)
            .path(content_type)
            .path(locale)
            .query_opt("currentpage", current_page)
            .query("head", head)
            .query_opt("itemsperpage", items_per_page);
        self.transport.send(&request).await
    }

    pub async fn search_help_articles(&self, search_text: &str, size: &str) -> Result<Value> {
        let request = ApiRequest::new(&SEARCH_HELP_ARTICLES)
            .path(search_text)
            .path(size);
        self.transport.send(&request).await
    }

    /// RSS feed of news articles. `page_token` is zero-based.
    pub async fn rss_news_articles(
        &self,
        page_token: &str,
        category_filter: Option<&str>,
        include_body: Option<bool>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&RSS_NEWS_ARTICLES)
            .path(page_token)
            .query_opt("categoryfilter", category_filter)
            .query_opt("includebody", include_body);
        self.transport.send(&request).await
    }
}
