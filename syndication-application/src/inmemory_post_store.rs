use async_trait::async_trait;
use dashmap::DashMap;
use syndication_domain::post_store::PostStore;
use syndication_domain::{DomainError, DomainResult, PostId, PostRecord};

/// 基于内存的文章存储
/// - 以 DashMap 保存文章记录，可在并发场景下读写
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: DashMap<PostId, PostRecord>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入或覆盖一篇文章
    pub fn insert(&self, post: PostRecord) {
        self.posts.insert(post.id(), post);
    }

    pub fn remove(&self, id: PostId) -> Option<PostRecord> {
        self.posts.remove(&id).map(|(_, post)| post)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl FromIterator<PostRecord> for InMemoryPostStore {
    fn from_iter<I: IntoIterator<Item = PostRecord>>(iter: I) -> Self {
        let store = Self::new();
        for post in iter {
            store.insert(post);
        }
        store
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn resolve(&self, id: PostId) -> DomainResult<PostRecord> {
        self.posts
            .get(&id)
            .map(|p| p.value().clone())
            .ok_or_else(|| DomainError::not_found(format!("post {id}")))
    }
}
