use craftui::registration::{FormData, RemoteError, SimulatedRegistrationService};
use craftui::ui::core::{Action, TaskManager};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_registration_result_is_sent_back() {
    let (mut manager, mut rx) = TaskManager::new();
    let service = Arc::new(SimulatedRegistrationService::new(Duration::ZERO));

    let first = manager.spawn_registration(service.clone(), FormData::new());
    let second = manager.spawn_registration(service, FormData::new());
    assert_ne!(first, second);
    assert_eq!(manager.task_count(), 2);

    for _ in 0..2 {
        let action = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("result within a second")
            .expect("channel open");
        assert!(matches!(action, Action::RegistrationFinished(Ok(_))));
    }

    // Give the runtime a moment to mark both tasks finished
    tokio::time::sleep(Duration::from_millis(10)).await;
    let finished = manager.cleanup_finished_tasks();
    assert_eq!(finished.len(), 2);
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, mut rx) = TaskManager::new();
    let service = Arc::new(SimulatedRegistrationService::new(Duration::from_secs(30)));

    manager.spawn_registration(service, FormData::new());
    assert_eq!(manager.task_count(), 1);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_action_sender_feeds_the_same_channel() {
    let (manager, mut rx) = TaskManager::new();
    manager
        .action_sender()
        .send(Action::RegistrationFinished(Err(RemoteError::Unavailable)))
        .unwrap();

    match rx.recv().await {
        Some(Action::RegistrationFinished(Err(error))) => assert_eq!(error, RemoteError::Unavailable),
        other => panic!("unexpected action {:?}", other),
    }
}
