use std::sync::Arc;

use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::model::{Tweet as ModelTweet, User as ModelUser};
use crate::store::TweetStore;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    pub created_at: String,

    #[graphql(skip)]
    pub author_id: Option<String>,
}

#[ComplexObject]
impl Tweet {
    /// The tweet's author, when the referenced user is known to the store.
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let Some(ref author_id) = self.author_id else {
            return Ok(None);
        };
        let store = ctx.data::<Arc<TweetStore>>()?;
        Ok(store.user(author_id).map(|u| u.into()))
    }
}

impl From<ModelTweet> for Tweet {
    fn from(t: ModelTweet) -> Self {
        Self {
            id: t.id,
            text: t.text,
            created_at: t.created.to_rfc3339(),
            author_id: t.author_id,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        let full_name = u.last_name.as_ref().map(|_| u.full_name());
        Self {
            id: u.id,
            username: u.username,
            first_name: u.first_name,
            last_name: u.last_name,
            full_name,
        }
    }
}
