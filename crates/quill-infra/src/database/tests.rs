#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use mongodb::Client;
    use mongodb::bson::{self, doc, oid::ObjectId};
    use mongodb::error::Error as MongoError;

    use crate::database::entity::post::Model;
    use crate::database::mongo_repo::{id_filter, repo_error};
    use crate::database::{DatabaseConfig, DatabaseConnections, MongoPostRepository};
    use quill_core::domain::{Comment, Post, PostId};
    use quill_core::error::RepoError;
    use quill_core::ports::PostRepository;

    /// Nothing listens on port 1; server selection gives up quickly.
    const UNREACHABLE_URI: &str =
        "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300&connectTimeoutMS=300";

    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            uri: UNREACHABLE_URI.to_string(),
            name: "blog_test".to_string(),
            max_pool_size: 2,
            min_pool_size: 0,
            app_name: "quill-tests".to_string(),
        }
    }

    async fn unreachable_repository() -> MongoPostRepository {
        let client = Client::with_uri_str(UNREACHABLE_URI).await.unwrap();
        MongoPostRepository::new(&client.database("blog_test"))
    }

    fn stored_document() -> bson::Document {
        doc! {
            "_id": ObjectId::parse_str("65a1b2c3d4e5f60718293a4b").unwrap(),
            "body": "Body text",
            "permalink": "hello-world",
            "author": "ada",
            "title": "Hello World",
            "tags": ["a", "b"],
            "comments": [
                { "body": "First!", "email": "bob@example.com", "author": "bob" },
                { "body": "Nice post", "email": "eve@example.com", "author": "eve" }
            ],
            "date": bson::DateTime::from_millis(1_700_000_000_123),
        }
    }

    #[test]
    fn test_decode_post_document() {
        let model: Model = bson::from_document(stored_document()).unwrap();
        let post = Post::try_from(model).unwrap();

        assert_eq!(post.id.to_string(), "65a1b2c3d4e5f60718293a4b");
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.tags, vec!["a", "b"]);
        assert_eq!(
            post.comments,
            vec![
                Comment::new("First!", "bob@example.com", "bob"),
                Comment::new("Nice post", "eve@example.com", "eve"),
            ]
        );
        assert_eq!(post.date.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn test_decode_rejects_missing_required_field() {
        let mut document = stored_document();
        document.remove("tags");

        let result: Result<Model, _> = bson::from_document(document);

        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_out_of_range_date() {
        let mut model: Model = bson::from_document(stored_document()).unwrap();
        model.date = bson::DateTime::MAX;

        let result = Post::try_from(model);

        assert!(matches!(result, Err(RepoError::Decode(_))));
    }

    #[test]
    fn test_post_survives_document_conversion() {
        let post = Post::new("Title", "Body", "ada", "title")
            .with_tags(["rust", "mongo"])
            .with_comment(Comment::new("Hi", "bob@example.com", "bob"))
            .written_at(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap());

        let document = bson::to_document(&Model::from(post.clone())).unwrap();
        assert!(document.contains_key("_id"));

        let model: Model = bson::from_document(document).unwrap();
        assert_eq!(Post::try_from(model).unwrap(), post);
    }

    #[test]
    fn test_repo_error_classifies_decode_failures() {
        let decode = bson::from_document::<Model>(doc! { "title": "no other fields" }).unwrap_err();

        let err = repo_error(MongoError::from(decode));

        assert!(matches!(err, RepoError::Decode(_)));
    }

    #[test]
    fn test_repo_error_classifies_io_failures_as_connection() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");

        let err = repo_error(MongoError::from(io));

        assert!(matches!(err, RepoError::Connection(_)));
    }

    #[test]
    fn test_repo_error_falls_back_to_query() {
        let err = repo_error(MongoError::custom("cursor killed"));

        assert!(matches!(err, RepoError::Query(_)));
    }

    #[test]
    fn test_id_filter_matches_primary_key() {
        let id: PostId = "65a1b2c3d4e5f60718293a4b".parse().unwrap();

        let filter = id_filter(id);

        assert_eq!(
            filter,
            doc! { "_id": ObjectId::parse_str("65a1b2c3d4e5f60718293a4b").unwrap() }
        );
    }

    #[tokio::test]
    async fn test_list_zero_limit_skips_the_store() {
        let repo = unreachable_repository().await;

        let posts = repo.list(0).await.unwrap();

        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_store_is_a_connection_error() {
        let repo = unreachable_repository().await;
        let id: PostId = "65a1b2c3d4e5f60718293a4b".parse().unwrap();

        assert!(matches!(repo.list(5).await, Err(RepoError::Connection(_))));
        assert!(matches!(repo.find_one(id).await, Err(RepoError::Connection(_))));
    }

    #[tokio::test]
    async fn test_init_fails_when_store_is_unreachable() {
        let result = DatabaseConnections::init(&unreachable_config()).await;

        assert!(matches!(result, Err(RepoError::Connection(_))));
    }

    #[tokio::test]
    async fn test_init_rejects_malformed_uri() {
        let config = DatabaseConfig {
            uri: "not-a-connection-string".to_string(),
            ..unreachable_config()
        };

        let result = DatabaseConnections::init(&config).await;

        assert!(matches!(result, Err(RepoError::Connection(_))));
    }

    /// Runs against a real deployment: `ATLAS_URI=... DB_NAME=... cargo test -- --ignored`.
    #[tokio::test]
    #[ignore]
    async fn test_live_connection_lifecycle() {
        let (Ok(uri), Ok(name)) = (std::env::var("ATLAS_URI"), std::env::var("DB_NAME")) else {
            return;
        };
        let config = DatabaseConfig {
            uri,
            name,
            ..unreachable_config()
        };

        let connections = DatabaseConnections::init(&config).await.unwrap();
        let repo = MongoPostRepository::new(&connections.db);
        let posts = repo.list(100).await.unwrap();
        assert!(posts.len() <= 100);

        connections.close().await;
    }
}
