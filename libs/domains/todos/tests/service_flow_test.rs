//! End-to-end tests for the todos domain
//!
//! These drive `TodoService` over the in-memory repository with a pinned
//! clock and sequential ids, covering the full create-then-list flow
//! without mocking the storage layer.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, TimeZone, Utc};
use domain_todos::{
    Clock, IdProvider, InMemoryTodoRepository, Todo, TodoError, TodoService, TodoStatus,
};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct SequentialIds(AtomicUsize);

impl SequentialIds {
    fn new() -> Self {
        Self(AtomicUsize::new(0))
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&self) -> String {
        format!("todo-{}", self.0.fetch_add(1, Ordering::Relaxed))
    }
}

fn service_at(now: DateTime<Utc>) -> TodoService<InMemoryTodoRepository> {
    TodoService::new(InMemoryTodoRepository::new())
        .with_clock(FixedClock(now))
        .with_id_provider(SequentialIds::new())
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 12, 2, 0, 0, 0).unwrap()
}

#[tokio::test]
async fn test_create_then_list_returns_enriched_uppercased_items() {
    let service = service_at(now());

    let overdue = Utc.with_ymd_and_hms(2020, 12, 1, 12, 0, 0).unwrap();
    let upcoming = Utc.with_ymd_and_hms(2020, 12, 2, 12, 0, 0).unwrap();

    service
        .create(Todo::new("I must play video games", overdue))
        .await
        .unwrap();
    service
        .create(Todo::new("water the plants", upcoming))
        .await
        .unwrap();

    let listed = service.list().await.unwrap();
    assert_eq!(
        listed,
        vec![
            Todo {
                text: "I MUST PLAY VIDEO GAMES".to_string(),
                when: Some(overdue),
                status: Some(TodoStatus::Late),
                id: "todo-0".to_string(),
            },
            Todo {
                text: "WATER THE PLANTS".to_string(),
                when: Some(upcoming),
                status: Some(TodoStatus::Pending),
                id: "todo-1".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_rejected_create_stores_nothing_but_consumes_an_id() {
    let service = service_at(now());

    let result = service.create(Todo::default()).await;
    match result {
        Err(TodoError::InvalidData { data }) => assert_eq!(data.id, "todo-0"),
        other => panic!("expected InvalidData, got {other:?}"),
    }

    assert_eq!(service.list().await.unwrap(), vec![]);

    // The next accepted item gets the following id in the sequence
    let created = service
        .create(Todo::new("water the plants", now()))
        .await
        .unwrap();
    assert_eq!(created.id, "todo-1");
}

#[tokio::test]
async fn test_listing_twice_yields_identical_results() {
    let service = service_at(now());
    service
        .create(Todo::new("water the plants", now()))
        .await
        .unwrap();

    let first = service.list().await.unwrap();
    let second = service.list().await.unwrap();
    assert_eq!(first, second);
}
