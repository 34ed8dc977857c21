use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::store::TweetStore;

use super::types::*;

pub type ChirpSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<TweetStore>) -> ChirpSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<TweetStore>> {
    ctx.data::<Arc<TweetStore>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All tweets in insertion order
    async fn all_tweets(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Tweet>> {
        let store = get_store(ctx)?;
        Ok(store.list().into_iter().map(|t| t.into()).collect())
    }

    /// Get a single tweet by ID
    async fn tweet(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Tweet>> {
        let store = get_store(ctx)?;
        Ok(store.get(&id).map(|t| t.into()))
    }

    /// All known users
    async fn all_users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let store = get_store(ctx)?;
        Ok(store.users().into_iter().map(|u| u.into()).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Post a new tweet
    async fn post_tweet(
        &self,
        ctx: &Context<'_>,
        text: String,
        user_id: ID,
    ) -> async_graphql::Result<Tweet> {
        let store = get_store(ctx)?;
        let tweet = store.post(text, user_id.to_string());
        tracing::debug!(id = %tweet.id, "posted tweet");
        Ok(tweet.into())
    }

    /// Delete a tweet by ID. Returns whether a tweet was removed.
    async fn delete_tweet(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<bool> {
        let store = get_store(ctx)?;
        let removed = store.delete(&id);
        tracing::debug!(id = %*id, removed, "delete tweet");
        Ok(removed)
    }
}
