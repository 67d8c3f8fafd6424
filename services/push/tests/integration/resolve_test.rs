use serde_json::json;

use navette_domain::category::Category;
use navette_domain::role::Role;
use navette_push::domain::types::TargetFilter;
use navette_push::usecase::resolve::ResolveRecipientsUseCase;

use crate::helpers::{MockProfileRepo, reachable, reachable_with_preferences};

#[tokio::test]
async fn should_resolve_all_reachable_profiles_for_all_target() {
    let usecase = ResolveRecipientsUseCase {
        repo: MockProfileRepo::new(vec![
            reachable("u_1", Role::Client),
            reachable("u_2", Role::Chauffeur),
            reachable("u_3", Role::Client),
        ]),
    };
    let recipients = usecase
        .execute(&TargetFilter::All, Category::Trajets)
        .await
        .unwrap();
    assert_eq!(recipients.len(), 3);
}

#[tokio::test]
async fn should_restrict_to_explicit_subjects() {
    let usecase = ResolveRecipientsUseCase {
        repo: MockProfileRepo::new(vec![
            reachable("u_1", Role::Client),
            reachable("u_2", Role::Client),
        ]),
    };
    let filter = TargetFilter::Subjects(vec!["u_2".to_owned(), "u_9".to_owned()]);
    let recipients = usecase.execute(&filter, Category::Courses).await.unwrap();
    assert_eq!(recipients.len(), 1);
    assert_eq!(recipients[0].subject, "u_2");
}

#[tokio::test]
async fn should_restrict_by_role() {
    let usecase = ResolveRecipientsUseCase {
        repo: MockProfileRepo::new(vec![
            reachable("u_1", Role::Client),
            reachable("u_2", Role::Chauffeur),
        ]),
    };
    let recipients = usecase
        .execute(&TargetFilter::Role(Role::Chauffeur), Category::Courses)
        .await
        .unwrap();
    assert_eq!(recipients.len(), 1);
    assert_eq!(recipients[0].role, Role::Chauffeur);
}

#[tokio::test]
async fn should_include_profiles_without_a_preference_entry() {
    let usecase = ResolveRecipientsUseCase {
        repo: MockProfileRepo::new(vec![
            reachable("u_1", Role::Client),
            reachable_with_preferences("u_2", Role::Client, json!({ "trajets": false })),
        ]),
    };
    // Neither profile says anything about "courses": both stay eligible.
    let recipients = usecase
        .execute(&TargetFilter::All, Category::Courses)
        .await
        .unwrap();
    assert_eq!(recipients.len(), 2);
}

#[tokio::test]
async fn should_exclude_profiles_that_opted_out_of_the_category() {
    let usecase = ResolveRecipientsUseCase {
        repo: MockProfileRepo::new(vec![
            reachable("u_1", Role::Client),
            reachable_with_preferences("u_2", Role::Client, json!({ "courses": false })),
        ]),
    };
    let recipients = usecase
        .execute(&TargetFilter::All, Category::Courses)
        .await
        .unwrap();
    assert_eq!(recipients.len(), 1);
    assert_eq!(recipients[0].subject, "u_1");
}

#[tokio::test]
async fn should_return_empty_set_as_a_valid_outcome() {
    let usecase = ResolveRecipientsUseCase {
        repo: MockProfileRepo::new(vec![]),
    };
    let recipients = usecase
        .execute(&TargetFilter::All, Category::Promotions)
        .await
        .unwrap();
    assert!(recipients.is_empty());
}

#[tokio::test]
async fn should_carry_the_push_token_through_resolution() {
    let usecase = ResolveRecipientsUseCase {
        repo: MockProfileRepo::new(vec![reachable("u_1", Role::Client)]),
    };
    let recipients = usecase
        .execute(&TargetFilter::All, Category::Courses)
        .await
        .unwrap();
    assert_eq!(recipients[0].push_token, "ExponentPushToken[u_1]");
}
