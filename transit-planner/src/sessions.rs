//! Per-rider fare sessions for the HTTP service.
//!
//! Each rider gets their own session slot behind an async mutex, so two
//! requests from the same rider are priced one after the other while other
//! riders proceed independently. Slots live in a moka cache and are dropped
//! after a period of inactivity; nothing is persisted.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tokio::sync::Mutex;

use crate::fare::FareSession;

type Slot = Arc<Mutex<FareSession>>;

/// Configuration for the rider session store.
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    /// Drop a rider's session after this long without a request.
    pub time_to_idle: Duration,

    /// Maximum number of riders tracked at once.
    pub max_capacity: u64,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            time_to_idle: Duration::from_secs(4 * 60 * 60),
            max_capacity: 100_000,
        }
    }
}

/// Fare sessions keyed by rider id.
pub struct RiderSessions {
    slots: MokaCache<String, Slot>,
}

impl RiderSessions {
    /// Create a new store with the given configuration.
    pub fn new(config: &SessionStoreConfig) -> Self {
        let slots = MokaCache::builder()
            .time_to_idle(config.time_to_idle)
            .max_capacity(config.max_capacity)
            .build();

        Self { slots }
    }

    /// Current session for a rider; `Inactive` for riders never seen.
    pub async fn current(&self, rider: &str) -> FareSession {
        match self.slots.get(rider).await {
            Some(slot) => *slot.lock().await,
            None => FareSession::Inactive,
        }
    }

    /// Run `f` against a rider's session and store the session it returns.
    ///
    /// The rider's slot stays locked for the duration of `f`. If `f` fails
    /// the stored session is left unchanged.
    pub async fn update<T, E>(
        &self,
        rider: &str,
        f: impl FnOnce(FareSession) -> Result<(T, FareSession), E>,
    ) -> Result<T, E> {
        let slot = self
            .slots
            .get_with(rider.to_string(), async {
                Arc::new(Mutex::new(FareSession::Inactive))
            })
            .await;

        let mut session = slot.lock().await;
        let (out, next) = f(*session)?;
        *session = next;
        Ok(out)
    }

    /// Forget a rider's session.
    pub async fn clear(&self, rider: &str) {
        self.slots.invalidate(rider).await;
    }
}
