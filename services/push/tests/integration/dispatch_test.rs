use serde_json::json;

use navette_domain::category::Category;
use navette_domain::role::Role;
use navette_push::domain::types::{Broadcast, Recipient, TargetFilter};
use navette_push::usecase::dispatch::{
    DispatchBroadcastUseCase, INSERT_BATCH_SIZE, PUSH_CHUNK_SIZE,
};
use navette_push::usecase::resolve::ResolveRecipientsUseCase;

use crate::helpers::{
    MockProfileRepo, RecordingNotificationRepo, RecordingPushPort, reachable,
    reachable_with_preferences,
};

fn recipients(n: usize) -> Vec<Recipient> {
    (0..n)
        .map(|i| Recipient {
            subject: format!("u_{i}"),
            role: Role::Client,
            push_token: format!("ExponentPushToken[u_{i}]"),
        })
        .collect()
}

fn broadcast(category: Category) -> Broadcast {
    Broadcast {
        category,
        title: "Sale".to_owned(),
        message: "50% off".to_owned(),
        data: None,
    }
}

#[tokio::test]
async fn should_send_101_recipients_as_two_chunks() {
    let push = RecordingPushPort::new();
    let chunks = push.chunks_handle();
    let usecase = DispatchBroadcastUseCase {
        push,
        notifications: RecordingNotificationRepo::new(),
    };

    let outcome = usecase
        .execute(&broadcast(Category::Trajets), &recipients(101))
        .await
        .unwrap();

    let chunks = chunks.lock().unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].len(), PUSH_CHUNK_SIZE);
    assert_eq!(chunks[1].len(), 1);
    assert_eq!(outcome.sent, 101, "sent counts tokens, not chunks");
}

#[tokio::test]
async fn should_insert_501_rows_as_two_batches() {
    let notifications = RecordingNotificationRepo::new();
    let batches = notifications.batches_handle();
    let usecase = DispatchBroadcastUseCase {
        push: RecordingPushPort::new(),
        notifications,
    };

    let outcome = usecase
        .execute(&broadcast(Category::Courses), &recipients(501))
        .await
        .unwrap();

    let batches = batches.lock().unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), INSERT_BATCH_SIZE);
    assert_eq!(batches[1].len(), 1);
    assert_eq!(outcome.in_app, 501);
}

#[tokio::test]
async fn should_insert_500_rows_as_one_batch() {
    let notifications = RecordingNotificationRepo::new();
    let batches = notifications.batches_handle();
    let usecase = DispatchBroadcastUseCase {
        push: RecordingPushPort::new(),
        notifications,
    };

    usecase
        .execute(&broadcast(Category::Courses), &recipients(500))
        .await
        .unwrap();

    assert_eq!(batches.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_continue_past_a_failed_chunk() {
    let push = RecordingPushPort::failing_chunk(0);
    let chunks = push.chunks_handle();
    let notifications = RecordingNotificationRepo::new();
    let batches = notifications.batches_handle();
    let usecase = DispatchBroadcastUseCase {
        push,
        notifications,
    };

    let outcome = usecase
        .execute(&broadcast(Category::Trajets), &recipients(150))
        .await
        .unwrap();

    // Both chunks were attempted; the failure neither halted the loop nor
    // rolled anything back, and the counts still reflect every token.
    assert_eq!(chunks.lock().unwrap().len(), 2);
    assert_eq!(outcome.sent, 150);
    assert_eq!(batches.lock().unwrap().len(), 1);
    assert_eq!(outcome.in_app, 150);
}

#[tokio::test]
async fn should_attach_icon_metadata_and_merge_caller_data() {
    let push = RecordingPushPort::new();
    let chunks = push.chunks_handle();
    let notifications = RecordingNotificationRepo::new();
    let batches = notifications.batches_handle();
    let usecase = DispatchBroadcastUseCase {
        push,
        notifications,
    };

    let broadcast = Broadcast {
        category: Category::Promotions,
        title: "Sale".to_owned(),
        message: "50% off".to_owned(),
        data: Some(json!({ "promoId": "p_42" })),
    };
    usecase.execute(&broadcast, &recipients(1)).await.unwrap();

    let chunks = chunks.lock().unwrap();
    let message = &chunks[0][0];
    assert_eq!(message.to, "ExponentPushToken[u_0]");
    assert_eq!(message.sound, "default");
    assert_eq!(message.data["category"], "promotions");
    assert_eq!(message.data["promoId"], "p_42");
    let style = Category::Promotions.icon();
    assert_eq!(message.data["icon"], style.icon);
    assert_eq!(message.data["iconColor"], style.color);
    assert_eq!(message.data["iconBg"], style.background);

    let batches = batches.lock().unwrap();
    let record = &batches[0][0];
    assert_eq!(record.category, Category::Promotions);
    assert_eq!(record.style, style);
    assert_eq!(record.recipient_subject, "u_0");
    assert!(!record.read);
}

#[tokio::test]
async fn should_report_sent_and_in_app_for_a_role_broadcast_with_one_opt_out() {
    // Three reachable profiles, one opted out of promotions.
    let resolver = ResolveRecipientsUseCase {
        repo: MockProfileRepo::new(vec![
            reachable("u_1", Role::Client),
            reachable("u_2", Role::Chauffeur),
            reachable_with_preferences("u_3", Role::Client, json!({ "promotions": false })),
        ]),
    };
    let resolved = resolver
        .execute(&TargetFilter::All, Category::Promotions)
        .await
        .unwrap();
    assert_eq!(resolved.len(), 2);

    let usecase = DispatchBroadcastUseCase {
        push: RecordingPushPort::new(),
        notifications: RecordingNotificationRepo::new(),
    };
    let outcome = usecase
        .execute(&broadcast(Category::Promotions), &resolved)
        .await
        .unwrap();
    assert_eq!(outcome.sent, 2);
    assert_eq!(outcome.in_app, 2);
}
