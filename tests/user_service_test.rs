use std::sync::Arc;

use blockstay::{NoLatency, UserService};

const SEEDED_WALLET: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

fn seeded_service() -> UserService {
    UserService::new(Arc::new(NoLatency))
}

#[tokio::test]
async fn test_lookup_is_case_insensitive() {
    let service = seeded_service();

    let user = service.by_wallet(&SEEDED_WALLET.to_uppercase()).await.unwrap();
    assert_eq!(user.display_name.as_deref(), Some("Beach Villa Owner"));
}

#[tokio::test]
async fn test_create_is_idempotent_for_known_wallets() {
    let service = seeded_service();
    let before = service.all().await.len();

    // Re-registering an existing wallet (in different case) is a no-op that
    // hands back the existing profile.
    let user = service
        .create(
            &SEEDED_WALLET.to_lowercase(),
            Some("Impostor".to_string()),
            None,
        )
        .await;

    assert_eq!(user.display_name.as_deref(), Some("Beach Villa Owner"));
    assert_eq!(service.all().await.len(), before);
}

#[tokio::test]
async fn test_create_registers_new_wallets() {
    let service = seeded_service();
    let before = service.all().await.len();

    let address = "0x1111111111111111111111111111111111111111";
    let user = service
        .create(address, Some("Newcomer".to_string()), None)
        .await;

    assert_eq!(user.wallet_address, address);
    assert_eq!(service.all().await.len(), before + 1);
}

#[tokio::test]
async fn test_update_profile_merges_fields() {
    let service = seeded_service();

    let updated = service
        .update_profile(SEEDED_WALLET, Some("Villa Collective".to_string()), None)
        .await
        .unwrap();

    assert_eq!(updated.display_name.as_deref(), Some("Villa Collective"));
    // Avatar untouched.
    assert!(updated.avatar.is_some());
}

#[tokio::test]
async fn test_update_profile_unknown_wallet_is_none() {
    let service = seeded_service();
    let result = service
        .update_profile(
            "0x2222222222222222222222222222222222222222",
            Some("Ghost".to_string()),
            None,
        )
        .await;
    assert!(result.is_none());
}

#[tokio::test]
async fn test_by_wallets_filters_to_known_addresses() {
    let service = seeded_service();

    let users = service
        .by_wallets(&[
            SEEDED_WALLET.to_lowercase(),
            "0x3333333333333333333333333333333333333333".to_string(),
        ])
        .await;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].wallet_address, SEEDED_WALLET);
}
