use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::model::User;
use crate::domain::ports::Latency;
use crate::store;

const GET_DELAY: Duration = Duration::from_millis(400);
const MULTI_GET_DELAY: Duration = Duration::from_millis(600);
const CREATE_DELAY: Duration = Duration::from_millis(800);
const UPDATE_DELAY: Duration = Duration::from_millis(700);
const LIST_DELAY: Duration = Duration::from_millis(800);

/// Wallet-keyed user profiles. The wallet address is the identity; there is
/// no separate account id.
#[derive(Clone)]
pub struct UserService {
    users: Arc<RwLock<Vec<User>>>,
    latency: Arc<dyn Latency>,
}

impl UserService {
    /// Service backed by the seed fixtures.
    pub fn new(latency: Arc<dyn Latency>) -> Self {
        Self::with_users(store::seed_users(), latency)
    }

    pub fn with_users(users: Vec<User>, latency: Arc<dyn Latency>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            latency,
        }
    }

    pub async fn by_wallet(&self, address: &str) -> Option<User> {
        self.latency.simulate(GET_DELAY).await;
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.wallet_address.eq_ignore_ascii_case(address))
            .cloned()
    }

    pub async fn by_wallets(&self, addresses: &[String]) -> Vec<User> {
        self.latency.simulate(MULTI_GET_DELAY).await;
        self.users
            .read()
            .await
            .iter()
            .filter(|u| {
                addresses
                    .iter()
                    .any(|a| u.wallet_address.eq_ignore_ascii_case(a))
            })
            .cloned()
            .collect()
    }

    /// Idempotent registration: creating an address that already exists
    /// returns the existing record untouched.
    pub async fn create(
        &self,
        address: &str,
        display_name: Option<String>,
        avatar: Option<String>,
    ) -> User {
        self.latency.simulate(CREATE_DELAY).await;

        let mut users = self.users.write().await;
        if let Some(existing) = users
            .iter()
            .find(|u| u.wallet_address.eq_ignore_ascii_case(address))
        {
            return existing.clone();
        }

        let user = User {
            wallet_address: address.to_string(),
            display_name,
            avatar,
            created_at: Utc::now(),
        };

        tracing::debug!("Registered user {}", user.wallet_address);
        users.push(user.clone());
        user
    }

    pub async fn update_profile(
        &self,
        address: &str,
        display_name: Option<String>,
        avatar: Option<String>,
    ) -> Option<User> {
        self.latency.simulate(UPDATE_DELAY).await;

        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.wallet_address.eq_ignore_ascii_case(address))?;

        if let Some(display_name) = display_name {
            user.display_name = Some(display_name);
        }
        if let Some(avatar) = avatar {
            user.avatar = Some(avatar);
        }

        Some(user.clone())
    }

    pub async fn all(&self) -> Vec<User> {
        self.latency.simulate(LIST_DELAY).await;
        self.users.read().await.clone()
    }
}
