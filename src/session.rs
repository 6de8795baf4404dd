//! Client Session
//!
//! The remote service, the response cache and the signed-in caller,
//! shared by every command.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{TimeDelta, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ServiceResult;
use crate::models::AdminPrincipal;
use crate::query::{QueryCache, QueryKey};
use crate::service::RemoteService;

#[derive(Clone)]
pub struct Session {
    service: Arc<dyn RemoteService>,
    cache: Arc<Mutex<QueryCache>>,
    caller: Arc<Mutex<Option<AdminPrincipal>>>,
}

impl Session {
    pub fn new(service: Arc<dyn RemoteService>, default_stale: TimeDelta) -> Self {
        Self {
            service,
            cache: Arc::new(Mutex::new(QueryCache::new(default_stale))),
            caller: Arc::new(Mutex::new(None)),
        }
    }

    pub fn service(&self) -> &dyn RemoteService {
        self.service.as_ref()
    }

    pub fn caller(&self) -> Option<AdminPrincipal> {
        lock(&self.caller).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        lock(&self.caller).is_some()
    }

    /// Record the signed-in identity. Switching identity drops all cached reads.
    pub fn set_caller(&self, caller: Option<AdminPrincipal>) {
        let mut current = lock(&self.caller);
        if *current != caller {
            tracing::info!(caller = ?caller, "caller changed");
            *current = caller;
            lock(&self.cache).clear();
        }
    }

    /// Serve `key` from the cache while fresh, otherwise run `fetch` and
    /// remember a successful result. Failures are never cached.
    pub async fn cached<T, F, Fut>(&self, key: QueryKey, fetch: F) -> ServiceResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ServiceResult<T>>,
    {
        if let Some(hit) = lock(&self.cache).get::<T>(&key, Utc::now()) {
            return Ok(hit);
        }
        let value = fetch().await?;
        lock(&self.cache).put(key, &value, Utc::now());
        Ok(value)
    }

    pub fn invalidate(&self, operations: &[&str]) {
        let mut cache = lock(&self.cache);
        for operation in operations {
            let dropped = cache.invalidate(operation);
            tracing::debug!(operation, dropped, "cache invalidated");
        }
    }

    pub fn clear_cache(&self) {
        lock(&self.cache).clear();
    }

    /// Restore the identity the agent already holds, if any
    pub async fn restore(&self) -> ServiceResult<Option<AdminPrincipal>> {
        let caller = self.service.whoami().await?;
        self.set_caller(caller.clone());
        Ok(caller)
    }

    pub async fn sign_in(&self) -> ServiceResult<AdminPrincipal> {
        let principal = self.service.login().await?;
        self.set_caller(Some(principal.clone()));
        Ok(principal)
    }

    pub async fn sign_out(&self) -> ServiceResult<()> {
        self.service.logout().await?;
        self.set_caller(None);
        self.clear_cache();
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::query::ops;
    use crate::service::MemoryService;
    use std::cell::Cell;

    fn session() -> Session {
        Session::new(Arc::new(MemoryService::new()), TimeDelta::seconds(30))
    }

    #[tokio::test]
    async fn test_cached_fetches_once_while_fresh() {
        let session = session();
        let calls = Cell::new(0);
        let key = QueryKey::new(ops::PRICING_PLANS);

        for _ in 0..3 {
            let value: Vec<u64> = session
                .cached(key.clone(), || async {
                    calls.set(calls.get() + 1);
                    Ok(vec![7])
                })
                .await
                .unwrap();
            assert_eq!(value, vec![7]);
        }
        assert_eq!(calls.get(), 1);

        session.invalidate(&[ops::PRICING_PLANS]);
        let _: Vec<u64> = session
            .cached(key, || async {
                calls.set(calls.get() + 1);
                Ok(vec![8])
            })
            .await
            .unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_failures_not_cached() {
        let session = session();
        let key = QueryKey::new(ops::LOGO);

        let first: ServiceResult<bool> = session
            .cached(key.clone(), || async { Err(ServiceError::Transport("down".to_string())) })
            .await;
        assert!(first.is_err());

        let second: bool = session.cached(key, || async { Ok(true) }).await.unwrap();
        assert!(second);
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let session = session();
        assert!(!session.is_authenticated());

        let principal = session.sign_in().await.unwrap();
        assert_eq!(session.caller(), Some(principal));

        session.sign_out().await.unwrap();
        assert_eq!(session.caller(), None);
        assert_eq!(session.restore().await.unwrap(), None);
    }
}
