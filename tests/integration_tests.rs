use post_digest::api::{FetcherConfig, HttpFetcher};
use post_digest::post_renderer::render_report;
use post_digest::*;
use serde_json::json;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestPaths;
    impl TestPaths {
        const POSTS: &'static str = "/api/posts";
        const AUTHOR_1: &'static str = "/api/authors/1";
        const AUTHOR_2: &'static str = "/api/authors/2";
        const AUTHOR_3: &'static str = "/api/authors/3";
    }

    fn repository_for(base_url: &str) -> PostRepository {
        let fetcher = HttpFetcher::new(FetcherConfig::default()).unwrap();
        PostRepository::new(base_url, fetcher)
    }

    /// Serves one raw HTTP response on a local port, then closes the socket.
    fn serve_raw_once(response: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });
        (base_url, handle)
    }

    fn create_posts_json() -> serde_json::Value {
        json!([
            {
                "id": 101,
                "authorId": 1,
                "content": "First post about the new release",
                "published": 1700000000,
                "likedByMe": false,
                "likes": 4
            },
            {
                "id": 102,
                "authorId": 2,
                "author": null,
                "content": "Second post",
                "published": 1700000100,
                "likedByMe": true
            },
            {
                "id": 103,
                "authorId": 3,
                "author": "Carol",
                "authorAvatar": "carol.png",
                "content": "Third post with a video",
                "published": 1700000200,
                "likedByMe": false,
                "likes": 10,
                "attachment": {
                    "url": "https://example.com/v.mp4",
                    "description": "demo",
                    "type": "VIDEO"
                }
            },
            {
                "id": 104,
                "content": "Anonymous post",
                "published": 1700000300,
                "likedByMe": false,
                "unexpected": [1, 2, 3]
            }
        ])
    }

    #[test]
    fn test_get_posts_decodes_list() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", TestPaths::POSTS)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(create_posts_json().to_string())
            .create();

        let posts = repository_for(&server.url()).get_posts().unwrap();
        mock.assert();

        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![101, 102, 103, 104]);
        assert_eq!(posts[0].likes, 4);
        assert_eq!(posts[1].likes, 0);
        assert!(posts[1].needs_enrichment());
        assert!(!posts[2].needs_enrichment());
        assert_eq!(
            posts[2].attachment.as_ref().map(|a| a.kind),
            Some(AttachmentType::Video)
        );
        assert_eq!(posts[3].author_id, None);
    }

    #[test]
    fn test_get_posts_http_500() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", TestPaths::POSTS)
            .with_status(500)
            .with_body("{\"error\": \"boom\"}")
            .create();

        let err = repository_for(&server.url()).get_posts().unwrap_err();
        mock.assert();

        assert_eq!(err.status(), Some(500));
        match err {
            ApiError::Http { status, message, .. } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_posts_http_500_with_truncated_body() {
        let (base_url, server) = serve_raw_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\nshort",
        );

        let err = repository_for(&base_url).get_posts().unwrap_err();
        server.join().unwrap();

        assert_eq!(err.status(), Some(500));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_get_posts_truncated_success_body_is_transport_error() {
        let (base_url, server) =
            serve_raw_once("HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n[{\"id\"");

        let err = repository_for(&base_url).get_posts().unwrap_err();
        server.join().unwrap();

        assert!(err.is_transport());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_get_posts_malformed_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", TestPaths::POSTS)
            .with_status(200)
            .with_body("[{\"id\": 1, \"content\": \"missing fields\"}]")
            .create();

        let err = repository_for(&server.url()).get_posts().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_get_posts_connection_refused() {
        let err = repository_for("http://127.0.0.1:1").get_posts().unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_fetch_author() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", TestPaths::AUTHOR_1)
            .with_status(200)
            .with_body(json!({"id": 1, "name": "Alice", "avatar": "alice.png"}).to_string())
            .create();

        let repo = repository_for(&server.url());
        let author = repo.get_author(1).unwrap();
        assert_eq!(author.name, "Alice");
        assert_eq!(author.avatar, "alice.png");

        // mockito answers unmatched requests with 501
        assert_eq!(repo.fetch_author(42).unwrap_err().status(), Some(501));
        assert_eq!(repo.get_author(42), None);
    }

    #[test]
    fn test_pipeline_with_partial_author_failures() {
        let mut server = mockito::Server::new();
        let _posts = server
            .mock("GET", TestPaths::POSTS)
            .with_status(200)
            .with_body(create_posts_json().to_string())
            .create();
        let author_ok = server
            .mock("GET", TestPaths::AUTHOR_1)
            .with_status(200)
            .with_body(json!({"id": 1, "name": "Alice", "avatar": "alice.png"}).to_string())
            .expect(1)
            .create();
        let author_fail = server
            .mock("GET", TestPaths::AUTHOR_2)
            .with_status(404)
            .expect(1)
            .create();
        let author_unused = server
            .mock("GET", TestPaths::AUTHOR_3)
            .with_status(200)
            .with_body(json!({"id": 3, "name": "Not Carol", "avatar": "x.png"}).to_string())
            .expect(0)
            .create();

        let repo = repository_for(&server.url());
        let posts = repo.get_posts().unwrap();
        let enriched = Enricher::new(&repo, 4).enrich(&posts);

        author_ok.assert();
        author_fail.assert();
        author_unused.assert();

        assert_eq!(enriched.len(), posts.len());
        assert_eq!(enriched[0].author_name.as_deref(), Some("Alice"));
        assert_eq!(enriched[0].author_avatar.as_deref(), Some("alice.png"));
        assert_eq!(enriched[1], posts[1]);
        assert_eq!(enriched[1].author_display_name(), "Unknown Author");
        assert_eq!(enriched[2].author_name.as_deref(), Some("Carol"));
        assert_eq!(enriched[3], posts[3]);

        let summary = EnrichmentSummary::from_posts(&posts, &enriched);
        assert_eq!(summary.eligible, 2);
        assert_eq!(summary.resolved, 1);

        let report = render_report(&enriched);
        assert!(report.starts_with("Found 4 posts:"));
        assert!(report.contains("1. [ID: 101] Alice: First post about the new relea..."));
        assert!(report.contains("2. [ID: 102] Unknown Author: Second post..."));
        assert!(report.contains("Likes: 0 ♥"));
        assert!(report.contains("Attachment: VIDEO - https://example.com/v.mp4"));
        assert!(report.contains("4. [ID: 104] Unknown Author: Anonymous post..."));
    }

    #[test]
    fn test_enrich_survives_unreachable_author_service() {
        let posts: Vec<Post> = serde_json::from_value(create_posts_json()).unwrap();
        let repo = repository_for("http://127.0.0.1:1");

        let enriched = Enricher::new(&repo, 2).enrich(&posts);
        assert_eq!(enriched, posts);
    }
}
