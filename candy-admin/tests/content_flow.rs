// candy-admin/tests/content_flow.rs
// Generate, rate, publish, copy and template flows on the content tab

use std::sync::Arc;

use candy_admin::content::{COPIED_INDICATOR_MS, MemoryClipboard, Phase, SampleContentProvider};
use candy_admin::demo::{DEMO_EMAIL, DEMO_PASSWORD};
use candy_admin::i18n::Language;
use candy_admin::screens::Screen;
use candy_admin::{App, AppConfig};
use candy_client::{MemoryStore, StoreOp};
use chrono::{Duration, Utc};
use serde_json::{Map, Value, json};
use shared::ErrorCode;
use shared::models::{ContentRating, ContentStatus, ContentType, tables};

async fn signed_in(clipboard: Arc<MemoryClipboard>) -> (App, Arc<MemoryStore>) {
    let mut app = App::demo(AppConfig::default())
        .await
        .with_clipboard(clipboard);
    app.start().await;
    app.sessions.sign_in(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
    let store = app.demo_backend().unwrap().store.clone();
    (app, store)
}

fn code(err: &candy_admin::AdminError) -> ErrorCode {
    err.code()
}

#[tokio::test]
async fn test_generate_uses_pool_for_type() {
    let (app, _store) = signed_in(Arc::new(MemoryClipboard::new())).await;
    let screen = app.content_screen();
    screen.refresh().await.unwrap();

    screen.set_prompt("Summer chocolate sale").await;
    screen.set_content_type(ContentType::Email).await;
    let row = screen.generate().await.unwrap();

    assert_eq!(row.status, ContentStatus::Draft);
    assert_eq!(row.content_type, ContentType::Email);
    assert!(SampleContentProvider::pool(ContentType::Email).contains(&row.content.as_str()));
    assert_eq!(screen.phase().await, Phase::Generated);
    assert_eq!(screen.history().await[0].id, row.id);
}

#[tokio::test]
async fn test_empty_prompt_rejected() {
    let (app, store) = signed_in(Arc::new(MemoryClipboard::new())).await;
    let screen = app.content_screen();
    let inserts = store.call_count(StoreOp::Insert);

    screen.set_prompt("   ").await;
    let err = screen.generate().await.unwrap_err();
    assert_eq!(code(&err), ErrorCode::ContentPromptEmpty);
    assert_eq!(store.call_count(StoreOp::Insert), inserts);
    assert_eq!(screen.phase().await, Phase::Idle);
}

#[tokio::test]
async fn test_publish_is_idempotent() {
    let (app, store) = signed_in(Arc::new(MemoryClipboard::new())).await;
    let screen = app.content_screen();
    screen.set_prompt("Gummy weekend").await;
    screen.generate().await.unwrap();

    screen.publish(Utc::now()).await.unwrap();
    let published = screen.current().await.unwrap();
    assert_eq!(published.status, ContentStatus::Published);
    assert!(published.published_at.is_some());
    assert_eq!(screen.phase().await, Phase::Published);

    let updates = store.call_count(StoreOp::Update);
    screen.publish(Utc::now()).await.unwrap();
    assert_eq!(store.call_count(StoreOp::Update), updates);
    let again = screen.current().await.unwrap();
    assert_eq!(again.status, ContentStatus::Published);
    assert_eq!(again.published_at, published.published_at);
}

#[tokio::test]
async fn test_failed_publish_stays_generated() {
    let (app, store) = signed_in(Arc::new(MemoryClipboard::new())).await;
    let screen = app.content_screen();
    screen.set_prompt("Lollipop promo").await;
    screen.generate().await.unwrap();

    store.fail_next(StoreOp::Update, "network down").await;
    assert!(screen.publish(Utc::now()).await.is_err());
    assert_eq!(screen.phase().await, Phase::Generated);
    assert_eq!(screen.current().await.unwrap().status, ContentStatus::Draft);
}

#[tokio::test]
async fn test_delete_history_removes_one_row() {
    let (app, store) = signed_in(Arc::new(MemoryClipboard::new())).await;
    let screen = app.content_screen();
    screen.set_prompt("First").await;
    let first = screen.generate().await.unwrap();
    screen.set_prompt("Second").await;
    let second = screen.generate().await.unwrap();
    let stored_before = store.rows(tables::GENERATED_CONTENT).await.len();

    screen.delete_history(&first.id).await.unwrap();

    let ids: Vec<String> = screen.history().await.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![second.id.clone()]);
    assert_eq!(store.rows(tables::GENERATED_CONTENT).await.len(), stored_before - 1);
    // The current draft was not the deleted one
    assert_eq!(screen.current().await.map(|c| c.id), Some(second.id));
}

#[tokio::test]
async fn test_save_template_requires_useful_rating() {
    let (app, store) = signed_in(Arc::new(MemoryClipboard::new())).await;
    let screen = app.content_screen();
    screen.set_prompt("Sour candy madness").await;
    let row = screen.generate().await.unwrap();

    let err = screen.save_template().await.unwrap_err();
    assert_eq!(code(&err), ErrorCode::ContentNotRatedUseful);

    screen.rate(ContentRating::NotRelevant).await.unwrap();
    assert!(screen.save_template().await.is_err());

    screen.rate(ContentRating::Useful).await.unwrap();
    screen.save_template().await.unwrap();

    let stored = store
        .rows(tables::GENERATED_CONTENT)
        .await
        .into_iter()
        .find(|r| r["id"] == json!(row.id))
        .unwrap();
    assert_eq!(stored["is_template"], json!(true));
    assert_eq!(stored["template_name"], json!("Sour candy madness"));
    assert_eq!(stored["rating"], json!("useful"));
    assert!(
        app.suggestions()
            .collection()
            .items()
            .await
            .iter()
            .any(|s| s.id == row.id)
    );
}

#[tokio::test]
async fn test_copy_shows_indicator_for_two_seconds() {
    let clipboard = Arc::new(MemoryClipboard::new());
    let (app, _store) = signed_in(clipboard.clone()).await;
    let mut workflow = app.content_workflow();
    workflow.set_prompt("Mint chocolate");
    let content = workflow.generate().await.unwrap().content.clone();

    let now = Utc::now();
    workflow.copy(clipboard.as_ref(), now).unwrap();
    assert_eq!(clipboard.contents().as_deref(), Some(content.as_str()));
    assert!(workflow.is_copied(now + Duration::milliseconds(COPIED_INDICATOR_MS - 1)));
    assert!(!workflow.is_copied(now + Duration::milliseconds(COPIED_INDICATOR_MS)));
}

#[tokio::test]
async fn test_copy_without_clipboard() {
    let clipboard = Arc::new(MemoryClipboard::new());
    clipboard.set_unavailable(true);
    let (app, _store) = signed_in(clipboard.clone()).await;
    let screen = app.content_screen();
    screen.set_prompt("Chewy deals").await;
    screen.generate().await.unwrap();

    let err = screen.copy(Utc::now()).await.unwrap_err();
    assert_eq!(code(&err), ErrorCode::ClipboardUnavailable);
    assert_eq!(clipboard.contents(), None);
}

#[tokio::test]
async fn test_resume_published_row() {
    let (app, _store) = signed_in(Arc::new(MemoryClipboard::new())).await;
    let screen = app.content_screen();
    screen.set_prompt("Holiday boxes").await;
    let row = screen.generate().await.unwrap();
    screen.publish(Utc::now()).await.unwrap();

    let other = app.content_screen();
    let resumed = other.resume(&row.id).await.unwrap();
    assert_eq!(resumed.status, ContentStatus::Published);
    assert_eq!(other.phase().await, Phase::Published);
    assert!(other.resume("missing").await.is_err());
}

#[tokio::test]
async fn test_suggestions_follow_language() {
    let (app, _store) = signed_in(Arc::new(MemoryClipboard::new())).await;
    let suggestions = app.suggestions();

    suggestions.fetch().await.unwrap();
    let english = suggestions.collection().items().await;
    assert!(!english.is_empty());
    assert!(english.windows(2).all(|w| w[0].suggestion_score >= w[1].suggestion_score));

    app.locale.set_language(Language::Ar);
    suggestions.fetch().await.unwrap();
    let arabic = suggestions.collection().items().await;
    assert_eq!(arabic.len(), 1);
    assert_eq!(arabic[0].template_name.as_deref(), Some("ليالي رمضان"));

    let screen = app.content_screen();
    screen.use_suggestion(&arabic[0].id).await.unwrap();
    assert!(screen.use_suggestion("missing").await.is_err());
}

#[tokio::test]
async fn test_events_and_template_clone() {
    let (app, _store) = signed_in(Arc::new(MemoryClipboard::new())).await;
    let screen = app.content_screen();
    screen.refresh().await.unwrap();

    let events = screen.events().events().items().await;
    let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Summer Sweets Festival", "Ramadan", "Hanukkah"]);
    let templates = screen.events().templates().items().await;
    assert_eq!(templates.len(), 3);

    let ramadan = &events[1];
    let source = templates.iter().find(|t| t.event_id == events[0].id).unwrap();
    let mut context = Map::new();
    context.insert("event".into(), Value::from("Ramadan"));
    context.insert("discount".into(), Value::from("20%"));

    let cloned = screen.clone_template(&source.id, &ramadan.id, context.clone()).await.unwrap();
    assert_eq!(cloned.event_id, ramadan.id);
    assert_eq!(cloned.content, "Celebrate Ramadan with 20% off selected sweets!");
    assert_eq!(screen.events().templates().items().await.len(), 4);

    let err = screen.clone_template(&source.id, "no-such-event", context.clone()).await.unwrap_err();
    assert_eq!(code(&err), ErrorCode::EventNotFound);
    assert!(screen.clone_template("no-such-template", &ramadan.id, context).await.is_err());
}

#[tokio::test]
async fn test_events_skipped_without_session() {
    let mut app = App::demo(AppConfig::default()).await;
    app.start().await;
    let events = app.events();
    events.refetch(Utc::now()).await.unwrap();
    assert!(events.events().items().await.is_empty());
    assert!(events.templates().items().await.is_empty());
}

#[tokio::test]
async fn test_campaign_from_event() {
    let (app, _store) = signed_in(Arc::new(MemoryClipboard::new())).await;
    let screen = app.content_screen();
    screen.refresh().await.unwrap();
    let event = screen.events().events().items().await[1].clone();

    assert!(screen.toggle_campaign().await);
    screen.campaign_for_event(&event.id).await.unwrap();

    let send_date = event.start_date.date_naive().to_string();
    let draft = screen
        .with_campaign(|b| {
            assert_eq!(b.form.event_name, "Ramadan");
            b.form.audience_description = "Families in the Gulf".into();
            b.form.message = "Sweet nights, sweeter deals".into();
            b.form.send_date = send_date;
            b.form.channels = vec!["whatsapp".into()];
            b.finish()
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(draft.regions, vec!["SA", "AE", "EG"]);
    assert_eq!(draft.event_id.as_deref(), Some(event.id.as_str()));

    assert!(!screen.toggle_campaign().await);
    assert!(screen.with_campaign(|b| b.step()).await.is_none());
}
