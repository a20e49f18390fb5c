//! Behavior of the multi-destination publish engine.


use autopost_core::{
    DestinationKind, FormatOptions, NO_POST_ID_ERROR, PublishConfig, SkipReason,
};
use autopost_settings::StaticConfigSource;
use autopost_social::PublishEngine;
use test_helpers::{
    Article, BrokenConfig, LogCapture, RecordingPoster, Reply, config, disabled, group, page,
};

fn engine(
    config: PublishConfig,
    poster: &RecordingPoster,
) -> PublishEngine<StaticConfigSource, RecordingPoster> {
    PublishEngine::new(StaticConfigSource::new(config), poster.clone())
}

#[tokio::test]
async fn test_globally_disabled_publishes_nothing() {
    let poster = RecordingPoster::new();
    let disabled_config = PublishConfig::builder()
        .enabled(false)
        .destinations(vec![page("1", "A"), group("2", "B")])
        .build()
        .expect("Valid config");

    let run = engine(disabled_config, &poster)
        .publish(&Article::new("Title"))
        .await;

    assert!(run.is_empty());
    assert_eq!(run.skipped(), &Some(SkipReason::Disabled));
    assert!(poster.calls().is_empty());
}

#[tokio::test]
async fn test_no_destinations_publishes_nothing() {
    let poster = RecordingPoster::new();
    let run = engine(config(vec![], FormatOptions::default()), &poster)
        .publish(&Article::new("Title"))
        .await;

    assert!(run.is_empty());
    assert_eq!(run.skipped(), &Some(SkipReason::NoDestinations));
    assert!(poster.calls().is_empty());
}

#[tokio::test]
async fn test_unreadable_settings_publish_nothing() {
    let poster = RecordingPoster::new();
    let run = PublishEngine::new(BrokenConfig, poster.clone())
        .publish(&Article::new("Title"))
        .await;

    assert!(run.is_empty());
    assert_eq!(
        run.skipped(),
        &Some(SkipReason::ConfigUnavailable(
            "settings file is corrupt".to_string()
        ))
    );
    assert!(poster.calls().is_empty());
}

#[tokio::test]
async fn test_disabled_run_is_logged_without_detailed_logging() {
    let logs = LogCapture::default();
    let _guard = tracing::subscriber::set_default(logs.subscriber());

    let poster = RecordingPoster::new();
    let quiet_disabled = PublishConfig::builder()
        .enabled(false)
        .detailed_logging(false)
        .destinations(vec![page("1", "A")])
        .build()
        .expect("Valid config");

    let run = engine(quiet_disabled, &poster)
        .publish(&Article::new("Title"))
        .await;

    assert_eq!(run.skipped(), &Some(SkipReason::Disabled));
    assert!(logs.contents().contains("autoposting is disabled"));
}

#[tokio::test]
async fn test_step_logs_follow_detailed_logging() {
    let logs = LogCapture::default();
    let _guard = tracing::subscriber::set_default(logs.subscriber());

    let poster = RecordingPoster::new();
    let quiet = PublishConfig::builder()
        .enabled(true)
        .detailed_logging(false)
        .destinations(vec![page("1", "A")])
        .build()
        .expect("Valid config");

    engine(quiet, &poster).publish(&Article::new("Title")).await;

    let output = logs.contents();
    assert!(!output.contains("Built message"));
    assert!(output.contains("Posted to Facebook"));
}

#[tokio::test]
async fn test_disabled_destination_has_no_outcome() {
    let poster = RecordingPoster::new();
    let destinations = vec![page("1", "A"), disabled(page("2", "B")), group("3", "C")];

    let run = engine(config(destinations, FormatOptions::default()), &poster)
        .publish(&Article::new("Title"))
        .await;

    let ids: Vec<&str> = run
        .outcomes()
        .iter()
        .map(|o| o.destination_id().as_str())
        .collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(poster.calls().len(), 2);
}

#[tokio::test]
async fn test_successful_response_records_post_id() {
    let poster = RecordingPoster::with_replies(vec![Reply::Respond(
        200,
        r#"{"id": "12345"}"#.to_string(),
    )]);

    let run = engine(config(vec![page("1", "News")], FormatOptions::default()), &poster)
        .publish(&Article::new("Title"))
        .await;

    let outcome = &run.outcomes()[0];
    assert!(outcome.success());
    assert_eq!(outcome.post_id(), Some("12345"));
    assert_eq!(outcome.error(), None);
    assert_eq!(outcome.destination_name(), "News");
    assert_eq!(*outcome.kind(), DestinationKind::Page);
}

#[tokio::test]
async fn test_response_without_id_is_failure() {
    let poster = RecordingPoster::with_replies(vec![Reply::Respond(200, "{}".to_string())]);

    let run = engine(config(vec![page("1", "News")], FormatOptions::default()), &poster)
        .publish(&Article::new("Title"))
        .await;

    let outcome = &run.outcomes()[0];
    assert!(!outcome.success());
    assert_eq!(outcome.post_id(), None);
    assert_eq!(outcome.error(), Some(NO_POST_ID_ERROR));
}

#[tokio::test]
async fn test_transport_failure_does_not_stop_the_run() {
    let poster = RecordingPoster::with_replies(vec![
        Reply::Fail("connection refused".to_string()),
        Reply::Respond(200, r#"{"id":"ok_1"}"#.to_string()),
    ]);

    let destinations = vec![page("1", "Broken"), group("2", "Working")];
    let run = engine(config(destinations, FormatOptions::default()), &poster)
        .publish(&Article::new("Title"))
        .await;

    assert_eq!(run.len(), 2);
    assert_eq!(run.outcomes()[0].destination_id(), "1");
    assert_eq!(run.outcomes()[0].error(), Some("connection refused"));
    assert_eq!(run.outcomes()[1].destination_id(), "2");
    assert_eq!(run.outcomes()[1].post_id(), Some("ok_1"));
    assert_eq!(run.failed().count(), 1);
    assert_eq!(run.succeeded().count(), 1);
}

#[tokio::test]
async fn test_error_status_response_is_failure() {
    let poster = RecordingPoster::with_replies(vec![Reply::Respond(
        403,
        r#"{"error":{"message":"Insufficient permission to post to target","code":200}}"#
            .to_string(),
    )]);

    let run = engine(config(vec![group("9", "G")], FormatOptions::default()), &poster)
        .publish(&Article::new("Title"))
        .await;

    assert_eq!(
        run.outcomes()[0].error(),
        Some("HTTP 403: Insufficient permission to post to target")
    );
}

#[tokio::test]
async fn test_panicking_poster_is_contained() {
    let poster = RecordingPoster::with_replies(vec![
        Reply::Panic,
        Reply::Respond(200, r#"{"id":"after_panic"}"#.to_string()),
    ]);

    let destinations = vec![page("1", "A"), page("2", "B")];
    let run = engine(config(destinations, FormatOptions::default()), &poster)
        .publish(&Article::new("Title"))
        .await;

    assert_eq!(run.len(), 2);
    let error = run.outcomes()[0].error().expect("First destination failed");
    assert!(error.contains("poster exploded"));
    assert_eq!(run.outcomes()[1].post_id(), Some("after_panic"));
}

#[tokio::test]
async fn test_image_selects_photo_endpoint() {
    let cases = [
        (true, true, "/1/photos"),
        (true, false, "/1/feed"),
        (false, true, "/1/feed"),
        (false, false, "/1/feed"),
    ];

    for (include_image, has_image, expected_path) in cases {
        let poster = RecordingPoster::new();
        let options = FormatOptions::default().with_include_image(include_image);
        let mut article = Article::new("Title");
        if has_image {
            article = article.with_image("https://cdn.example.com/photo.jpg");
        }

        engine(config(vec![page("1", "A")], options), &poster)
            .publish(&article)
            .await;

        assert_eq!(
            poster.paths(),
            vec![expected_path.to_string()],
            "include_image={include_image}, has_image={has_image}"
        );
    }
}

#[tokio::test]
async fn test_empty_image_url_is_no_image() {
    let poster = RecordingPoster::new();
    engine(config(vec![page("1", "A")], FormatOptions::default()), &poster)
        .publish(&Article::new("Title").with_image(""))
        .await;

    assert_eq!(poster.paths(), vec!["/1/feed".to_string()]);
}

#[tokio::test]
async fn test_status_post_form_fields() {
    let poster = RecordingPoster::new();
    let article = Article::new("Budget passes").with_body("<p>Details inside.</p>");

    engine(config(vec![page("77", "A")], FormatOptions::default()), &poster)
        .publish(&article)
        .await;

    let call = &poster.calls()[0];
    assert_eq!(call.url, "https://graph.facebook.com/v18.0/77/feed");
    assert_eq!(
        call.field("message"),
        Some("Budget passes\n\nDetails inside.\n\nhttps://news.example.com/node/1")
    );
    assert_eq!(call.field("access_token"), Some("page-token-77"));
    assert_eq!(call.field("url"), None);
}

#[tokio::test]
async fn test_photo_post_form_fields() {
    let poster = RecordingPoster::new();
    let article = Article::new("Gallery").with_image("https://cdn.example.com/p.jpg");
    let options = FormatOptions::default().with_include_body(false);

    engine(config(vec![group("88", "G")], options), &poster)
        .publish(&article)
        .await;

    let call = &poster.calls()[0];
    assert_eq!(call.url, "https://graph.facebook.com/v18.0/88/photos");
    assert_eq!(call.field("url"), Some("https://cdn.example.com/p.jpg"));
    assert_eq!(
        call.field("caption"),
        Some("Gallery\n\nhttps://news.example.com/node/1")
    );
    assert_eq!(call.field("access_token"), Some("user-token-88"));
    assert_eq!(call.field("message"), None);
}

#[tokio::test]
async fn test_page_then_group_scenario() {
    let poster = RecordingPoster::new();
    let options = FormatOptions::default().with_include_image(true);

    // The same engine publishes two items: one without an image, one with.
    let publisher = engine(config(vec![page("10", "Page")], options), &poster);
    let run = publisher.publish(&Article::new("No image")).await;
    assert_eq!(run.len(), 1);

    let group_engine = engine(config(vec![group("20", "Group")], options), &poster);
    let run = group_engine
        .publish(&Article::new("With image").with_image("https://cdn.example.com/x.png"))
        .await;
    assert_eq!(run.len(), 1);

    assert_eq!(
        poster.paths(),
        vec!["/10/feed".to_string(), "/20/photos".to_string()]
    );
}

#[tokio::test]
async fn test_mixed_destinations_in_one_run() {
    let poster = RecordingPoster::new();
    let destinations = vec![page("10", "Page"), group("20", "Group")];

    let run = engine(config(destinations, FormatOptions::default()), &poster)
        .publish(&Article::new("Both").with_image("https://cdn.example.com/x.png"))
        .await;

    assert_eq!(run.len(), 2);
    assert!(run.all_succeeded());
    assert_eq!(
        poster.paths(),
        vec!["/10/photos".to_string(), "/20/photos".to_string()]
    );
    assert_eq!(*run.outcomes()[1].kind(), DestinationKind::Group);
}

#[tokio::test]
async fn test_custom_graph_api_base() {
    let poster = RecordingPoster::new();
    let publisher = engine(config(vec![page("5", "A")], FormatOptions::default()), &poster)
        .with_graph_api_base("http://localhost:9000/v18.0/");

    publisher.publish(&Article::new("Title")).await;

    assert_eq!(poster.calls()[0].url, "http://localhost:9000/v18.0/5/feed");
}
