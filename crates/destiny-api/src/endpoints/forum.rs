//! `Forum` endpoints

use serde_json::{Value, json};

use crate::endpoint::{ApiRequest, Endpoint};
use crate::error::Result;
use crate::transport::Transport;

pub static GET_TOPICS_PAGED: Endpoint = Endpoint::get(
    "Forum.GetTopicsPaged",
    "/Forum/GetTopicsPaged/{page}/{pageSize}/{group}/{sort}/{quickDate}/{categoryFilter}/",
)
.with_query(&["locales", "tagstring"]);
pub static GET_CORE_TOPICS_PAGED: Endpoint = Endpoint::get(
    "Forum.GetCoreTopicsPaged",
    "/Forum/GetCoreTopicsPaged/{page}/{sort}/{quickDate}/{categoryFilter}/",
)
.with_query(&["locales"]);
pub static GET_POSTS_THREADED_PAGED: Endpoint = Endpoint::get(
    "Forum.GetPostsThreadedPaged",
    "/Forum/GetPostsThreadedPaged/{parentPostId}/{page}/{pageSize}/{replySize}/{getParentPost}/{rootThreadMode}/{sortMode}/",
)
.with_query(&["showbanned"]);
pub static GET_POSTS_THREADED_PAGED_FROM_CHILD: Endpoint = Endpoint::get(
    "Forum.GetPostsThreadedPagedFromChild",
    "/Forum/GetPostsThreadedPagedFromChild/{childPostId}/{page}/{pageSize}/{replySize}/{rootThreadMode}/{sortMode}/",
)
.with_query(&["showbanned"]);
pub static GET_POST_AND_PARENT: Endpoint =
    Endpoint::get("Forum.GetPostAndParent", "/Forum/GetPostAndParent/{childPostId}/")
        .with_query(&["showbanned"]);
pub static GET_POST_AND_PARENT_AWAITING_APPROVAL: Endpoint = Endpoint::get(
    "Forum.GetPostAndParentAwaitingApproval",
    "/Forum/GetPostAndParentAwaitingApproval/{childPostId}/",
)
.with_query(&["showbanned"]);
pub static GET_TOPIC_FOR_CONTENT: Endpoint =
    Endpoint::get("Forum.GetTopicForContent", "/Forum/GetTopicForContent/{contentId}/");
pub static GET_FORUM_TAG_SUGGESTIONS: Endpoint =
    Endpoint::get("Forum.GetForumTagSuggestions", "/Forum/GetForumTagSuggestions/")
        .with_query(&["partialtag"]);
pub static GET_POLL: Endpoint = Endpoint::get("Forum.GetPoll", "/Forum/Poll/{topicId}/");
pub static GET_RECRUITMENT_THREAD_SUMMARIES: Endpoint = Endpoint::post(
    "Forum.GetRecruitmentThreadSummaries",
    "/Forum/Recruit/Summaries/",
);

pub static ENDPOINTS: &[&Endpoint] = &[
    &GET_TOPICS_PAGED,
    &GET_CORE_TOPICS_PAGED,
    &GET_POSTS_THREADED_PAGED,
    &GET_POSTS_THREADED_PAGED_FROM_CHILD,
    &GET_POST_AND_PARENT,
    &GET_POST_AND_PARENT_AWAITING_APPROVAL,
    &GET_TOPIC_FOR_CONTENT,
    &GET_FORUM_TAG_SUGGESTIONS,
    &GET_POLL,
    &GET_RECRUITMENT_THREAD_SUMMARIES,
];

/// Paging and filter arguments shared by the topic listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicsQuery {
    pub page: i32,
    pub sort: i32,
    pub quick_date: i32,
    pub category_filter: i32,
    /// Comma separated locale list
    pub locales: Option<String>,
}

/// Forum topics, posts and polls.
#[derive(Debug, Clone, Copy)]
pub struct Forum<'a> {
    transport: &'a Transport,
}

impl<'a> Forum<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn get_topics_paged(
        &self,
        topics: &TopicsQuery,
        page_size: i32,
        group: i64,
        tag_string: Option<&str>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_TOPICS_PAGED)
            .path(topics.page)
            .path(page_size)
            .path(group)
            .path(topics.sort)
            .path(topics.quick_date)
            .path(topics.category_filter)
            .query_opt("locales", topics.locales.as_deref())
            .query_opt("tagstring", tag_string);
        self.transport.send(&request).await
    }

    pub async fn get_core_topics_paged(&self, topics: &TopicsQuery) -> Result<Value> {
        let request = ApiRequest::new(&GET_CORE_TOPICS_PAGED)
            .path(topics.page)
            .path(topics.sort)
            .path(topics.quick_date)
            .path(topics.category_filter)
            .query_opt("locales", topics.locales.as_deref());
        self.transport.send(&request).await
    }

    pub async fn get_posts_threaded_paged(
        &self,
        parent_post_id: i64,
        page: i32,
        page_size: i32,
        reply_size: i32,
        get_parent_post: bool,
        root_thread_mode: bool,
        sort_mode: i32,
        show_banned: Option<&str>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_POSTS_THREADED_PAGED)
            .path(parent_post_id)
            .path(page)
            .path(page_size)
            .path(reply_size)
            .path(get_parent_post)
            .path(root_thread_mode)
            .path(sort_mode)
            .query_opt("showbanned", show_banned);
        self.transport.send(&request).await
    }

    pub async fn get_posts_threaded_paged_from_child(
        &self,
        child_post_id: i64,
        page: i32,
        page_size: i32,
        reply_size: i32,
        root_thread_mode: bool,
        sort_mode: i32,
        show_banned: Option<&str>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_POSTS_THREADED_PAGED_FROM_CHILD)
            .path(child_post_id)
            .path(page)
            .path(page_size)
            .path(reply_size)
            .path(root_thread_mode)
            .path(sort_mode)
            .query_opt("showbanned", show_banned);
        self.transport.send(&request).await
    }

    pub async fn get_post_and_parent(
        &self,
        child_post_id: i64,
        show_banned: Option<&str>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_POST_AND_PARENT)
            .path(child_post_id)
            .query_opt("showbanned", show_banned);
        self.transport.send(&request).await
    }

    pub async fn get_post_and_parent_awaiting_approval(
        &self,
        child_post_id: i64,
        show_banned: Option<&str>,
    ) -> Result<Value> {
        let request = ApiRequest::new(&GET_POST_AND_PARENT_AWAITING_APPROVAL)
            .path(child_post_id)
            .query_opt("showbanned", show_banned);
        self.transport.send(&request).await
    }

    pub async fn get_topic_for_content(&self, content_id: i64) -> Result<Value> {
        let request = ApiRequest::new(&GET_TOPIC_FOR_CONTENT).path(content_id);
        self.transport.send(&request).await
    }

    pub async fn get_forum_tag_suggestions(&self, partial_tag: &str) -> Result<Value> {
        let request = ApiRequest::new(&GET_FORUM_TAG_SUGGESTIONS).query("partialtag", partial_tag);
        self.transport.send(&request).await
    }

    pub async fn get_poll(&self, topic_id: i64) -> Result<Value> {
        let request = ApiRequest::new(&GET_POLL).path(topic_id);
        self.transport.send(&request).await
    }

    /// Summaries for the given recruitment thread ids.
    pub async fn get_recruitment_thread_summaries(&self, topic_ids: &[i64]) -> Result<Value> {
        let request = ApiRequest::new(&GET_RECRUITMENT_THREAD_SUMMARIES).body(json!(topic_ids));
        self.transport.send(&request).await
    }
}
