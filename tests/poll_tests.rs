#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use chrono::NaiveDate;
use race_week_bot::context::AppContext;
use race_week_bot::services::poll::{send_weekly_poll, PollOutcome, PollSender, PollSpec, POLL_NO, POLL_YES};
use race_week_bot::services::scheduler::run_scheduled_poll;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use teloxide::types::ChatId;
use tempfile::{tempdir, TempDir};

/// Records polls instead of talking to Telegram.
#[derive(Default)]
struct RecordingSender {
    sent: Mutex<Vec<(ChatId, PollSpec)>>,
    attempts: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl PollSender for RecordingSender {
    async fn deliver_poll(&self, chat_id: ChatId, poll: &PollSpec) -> anyhow::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("network down");
        }
        self.sent.lock().unwrap().push((chat_id, poll.clone()));
        Ok(())
    }
}

const GROUP: ChatId = ChatId(-1001234567890);

const WEDNESDAY_RACE: &str = r#"[{
    "raceName": "Midweek Grand Prix",
    "date": "2024-05-01",
    "time": "15:00:00Z",
    "Circuit": { "circuitName": "Test Ring", "Location": { "locality": "Testville", "country": "Testland" } }
}]"#;

fn context(json: &str) -> (TempDir, AppContext) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("races.json");
    fs::write(&path, json).unwrap();
    (dir, AppContext::new(path, GROUP))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_poll_sent_to_group_in_race_week() {
    let (_dir, ctx) = context(WEDNESDAY_RACE);
    let sender = RecordingSender::default();

    let outcome = send_weekly_poll(&ctx, &sender, date(2024, 4, 29)).await.unwrap();
    assert_eq!(outcome, PollOutcome::Sent { race: "Midweek Grand Prix".to_string() });

    let sent = sender.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);

    let (chat_id, poll) = &sent[0];
    assert_eq!(*chat_id, GROUP);
    assert_eq!(poll.question, "🏁 Чи будеш ти дивитись Midweek Grand Prix цієї неділі?");
    assert_eq!(poll.options, vec![POLL_YES, POLL_NO]);
    assert!(!poll.is_anonymous);
    assert!(!poll.allows_multiple_answers);
}

#[tokio::test]
async fn test_no_poll_without_race_this_week() {
    let (_dir, ctx) = context(WEDNESDAY_RACE);
    let sender = RecordingSender::default();

    let outcome = send_weekly_poll(&ctx, &sender, date(2024, 5, 6)).await.unwrap();

    assert_eq!(outcome, PollOutcome::NoRaceThisWeek);
    assert!(sender.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_no_poll_with_empty_catalog() {
    let (_dir, ctx) = context("[]");
    let sender = RecordingSender::default();

    let outcome = send_weekly_poll(&ctx, &sender, date(2024, 5, 1)).await;

    tokio_test::assert_ok!(&outcome);
    assert_eq!(outcome.unwrap(), PollOutcome::NoRaceThisWeek);
    assert!(sender.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_delivery_failure_is_reported() {
    let (_dir, ctx) = context(WEDNESDAY_RACE);
    let sender = RecordingSender { fail: true, ..Default::default() };

    let err = send_weekly_poll(&ctx, &sender, date(2024, 5, 1)).await.unwrap_err();
    assert!(err.to_string().contains("network down"));
}

#[tokio::test]
async fn test_scheduled_poll_swallows_failures() {
    let (_dir, ctx) = context(WEDNESDAY_RACE);
    let sender = RecordingSender { fail: true, ..Default::default() };

    // Returns normally even though delivery failed
    run_scheduled_poll(&ctx, &sender, date(2024, 4, 29)).await;

    assert_eq!(sender.attempts.load(Ordering::SeqCst), 1);
    assert!(sender.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_scheduled_poll_delivers_in_race_week() {
    let (_dir, ctx) = context(WEDNESDAY_RACE);
    let sender = RecordingSender::default();

    run_scheduled_poll(&ctx, &sender, date(2024, 5, 5)).await;

    let sent = sender.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, GROUP);
    assert_eq!(sent[0].1.race_name, "Midweek Grand Prix");
}

#[tokio::test]
async fn test_scheduled_poll_sends_nothing_without_race() {
    let (_dir, ctx) = context(WEDNESDAY_RACE);
    let sender = RecordingSender::default();

    run_scheduled_poll(&ctx, &sender, date(2024, 5, 8)).await;

    assert_eq!(sender.attempts.load(Ordering::SeqCst), 0);
    assert!(sender.sent.lock().unwrap().is_empty());
}
