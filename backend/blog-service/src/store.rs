/// In-memory post collection
///
/// The store owns the process-wide list of posts in insertion order and
/// provides the four operations the HTTP surface maps onto. It carries no
/// locking of its own; the handler layer wraps it in an `RwLock` and runs
/// every operation inside a single lock scope.
use serde_json::{Map, Value};

use crate::error::{AppError, Result};
use crate::models::Post;

#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// An empty store.
    pub fn new() -> Self {
        Self { posts: Vec::new() }
    }

    /// The collection every process starts with: three posts with ids 1
    /// through 3 and no comments yet.
    pub fn seeded() -> Self {
        Self {
            posts: vec![
                Post::seed(1, "First Post", "First Post Content"),
                Post::seed(2, "Second Post", "Second Post Content"),
                Post::seed(3, "Third Post", "Third Post Content"),
            ],
        }
    }

    /// All posts in collection order.
    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    /// Append a post exactly as submitted and return it.
    ///
    /// No id is assigned and no uniqueness check runs; the caller owns
    /// both.
    pub fn create(&mut self, post: Post) -> Post {
        self.posts.push(post.clone());
        post
    }

    /// Shallow-merge `patch` into the first post whose id matches and
    /// return the merged record.
    ///
    /// With duplicate ids the first record in collection order wins and
    /// later duplicates are left untouched. A miss, or a patch that breaks
    /// a typed field, leaves the collection unchanged.
    pub fn update_by_id(&mut self, id: i64, patch: &Map<String, Value>) -> Result<Post> {
        let slot = self
            .posts
            .iter_mut()
            .find(|post| post.id == Some(id))
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let merged = slot.merged(patch)?;
        *slot = merged.clone();
        Ok(merged)
    }

    /// Remove every post whose id matches, not just the first.
    ///
    /// Removing an id that is not present is not an error.
    pub fn delete_by_id(&mut self, id: i64) {
        self.posts.retain(|post| post.id != Some(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post_from(value: Value) -> Post {
        serde_json::from_value(value).expect("valid post")
    }

    fn patch_from(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("patch must be an object")
    }

    #[test]
    fn seeded_store_holds_three_posts_in_order() {
        let store = PostStore::seeded();
        let ids: Vec<_> = store.list().iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
        for post in store.list() {
            assert_eq!(post.comments, Some(Vec::new()));
        }
        assert_eq!(
            store.list()[0].title.as_deref(),
            Some("First Post"),
        );
    }

    #[test]
    fn create_appends_verbatim() {
        let mut store = PostStore::seeded();
        let body = json!({"id": 4, "title": "T", "author": "zed"});
        let created = store.create(post_from(body.clone()));

        assert_eq!(store.list().len(), 4);
        assert_eq!(store.list().last(), Some(&created));
        assert_eq!(serde_json::to_value(&created).unwrap(), body);
    }

    #[test]
    fn create_does_not_default_missing_fields() {
        let mut store = PostStore::new();
        let created = store.create(post_from(json!({"title": "no id"})));
        assert_eq!(created.id, None);
        assert_eq!(created.comments, None);
        assert_eq!(
            serde_json::to_value(&created).unwrap(),
            json!({"title": "no id"})
        );
    }

    #[test]
    fn update_merges_shallowly_in_place() {
        let mut store = PostStore::new();
        store.create(post_from(json!({"id": 1, "a": 1, "b": 2})));
        store.create(post_from(json!({"id": 2, "title": "other"})));

        let merged = store
            .update_by_id(1, &patch_from(json!({"b": 3, "c": 4})))
            .unwrap();

        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({"id": 1, "a": 1, "b": 3, "c": 4})
        );
        assert_eq!(store.list().len(), 2);
        assert_eq!(store.list()[0], merged);
        assert_eq!(store.list()[1].title.as_deref(), Some("other"));
    }

    #[test]
    fn update_with_duplicate_ids_hits_first_match_only() {
        let mut store = PostStore::new();
        store.create(post_from(json!({"id": 7, "title": "first"})));
        store.create(post_from(json!({"id": 7, "title": "second"})));

        store
            .update_by_id(7, &patch_from(json!({"title": "patched"})))
            .unwrap();

        assert_eq!(store.list()[0].title.as_deref(), Some("patched"));
        assert_eq!(store.list()[1].title.as_deref(), Some("second"));
    }

    #[test]
    fn update_miss_leaves_store_unchanged() {
        let mut store = PostStore::seeded();
        let before: Vec<Post> = store.list().to_vec();

        let err = store
            .update_by_id(99, &patch_from(json!({"title": "nope"})))
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.list(), &before[..]);
    }

    #[test]
    fn update_with_bad_patch_leaves_store_unchanged() {
        let mut store = PostStore::seeded();
        let before: Vec<Post> = store.list().to_vec();

        let err = store
            .update_by_id(1, &patch_from(json!({"title": 42})))
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(store.list(), &before[..]);
    }

    #[test]
    fn delete_removes_every_match() {
        let mut store = PostStore::seeded();
        store.create(post_from(json!({"id": 2, "title": "duplicate"})));
        assert_eq!(store.list().len(), 4);

        store.delete_by_id(2);

        assert_eq!(store.list().len(), 2);
        let ids: Vec<_> = store.list().iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
    }

    #[test]
    fn delete_of_absent_id_is_a_noop() {
        let mut store = PostStore::seeded();
        store.delete_by_id(99);
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn update_does_not_resurrect_omitted_fields() {
        let mut store = PostStore::new();
        store.create(post_from(json!({"id": 5, "title": "bare"})));

        let merged = store
            .update_by_id(5, &patch_from(json!({"title": "still bare"})))
            .unwrap();

        assert_eq!(merged.comments, None);
        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({"id": 5, "title": "still bare"})
        );
    }
}
