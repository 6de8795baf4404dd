//! Response Cache
//!
//! Remembers remote read results keyed by operation, caller and argument.
//! Each operation has its own freshness window; mutations drop the
//! operations they affect with `invalidate`.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Operation names used as cache keys
pub mod ops {
    pub const IS_ADMIN: &str = "isAdmin";
    pub const ADMIN_EXISTS: &str = "adminExists";
    pub const ADMIN_LIST: &str = "adminList";
    pub const PRICING_PLANS: &str = "pricingPlans";
    pub const PRICING_PLAN: &str = "pricingPlan";
    pub const SITE_SETTINGS: &str = "siteSettings";
    pub const LOGO: &str = "logo";
    pub const CURRENT_USER_PROFILE: &str = "currentUserProfile";
    pub const USER_PROFILE: &str = "userProfile";
    pub const CALLER_ROLE: &str = "callerRole";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub operation: &'static str,
    pub caller: Option<String>,
    pub arg: Option<String>,
}

impl QueryKey {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            caller: None,
            arg: None,
        }
    }

    pub fn for_caller(mut self, caller: Option<&str>) -> Self {
        self.caller = caller.map(str::to_string);
        self
    }

    pub fn with_arg(mut self, arg: impl ToString) -> Self {
        self.arg = Some(arg.to_string());
        self
    }
}

#[derive(Debug, Clone)]
struct Entry {
    value: serde_json::Value,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct QueryCache {
    entries: HashMap<QueryKey, Entry>,
    stale_times: HashMap<&'static str, TimeDelta>,
    default_stale: TimeDelta,
}

impl QueryCache {
    /// Cache with the standard per-operation windows; others use `default_stale`
    pub fn new(default_stale: TimeDelta) -> Self {
        let mut stale_times = HashMap::new();
        stale_times.insert(ops::IS_ADMIN, TimeDelta::minutes(5));
        stale_times.insert(ops::ADMIN_EXISTS, TimeDelta::minutes(5));
        stale_times.insert(ops::PRICING_PLANS, TimeDelta::minutes(2));
        Self {
            entries: HashMap::new(),
            stale_times,
            default_stale,
        }
    }

    pub fn stale_time(&self, operation: &str) -> TimeDelta {
        self.stale_times
            .get(operation)
            .copied()
            .unwrap_or(self.default_stale)
    }

    /// Fresh cached value, if any. Stale or undecodable entries read as a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey, now: DateTime<Utc>) -> Option<T> {
        let entry = self.entries.get(key)?;
        if now - entry.fetched_at >= self.stale_time(key.operation) {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    pub fn put<T: Serialize>(&mut self, key: QueryKey, value: &T, now: DateTime<Utc>) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries.insert(key, Entry { value, fetched_at: now });
            }
            Err(e) => tracing::warn!(operation = key.operation, error = %e, "value not cacheable"),
        }
    }

    /// Drop every entry of `operation`, for all callers and arguments
    pub fn invalidate(&mut self, operation: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.operation != operation);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_fresh_hit_and_expiry() {
        let mut cache = QueryCache::new(TimeDelta::seconds(30));
        let key = QueryKey::new(ops::PRICING_PLANS);
        cache.put(key.clone(), &vec![1u64, 2], at(0));

        assert_eq!(cache.get::<Vec<u64>>(&key, at(119)), Some(vec![1, 2]));
        assert_eq!(cache.get::<Vec<u64>>(&key, at(120)), None);
    }

    #[test]
    fn test_default_window_applies_to_other_operations() {
        let mut cache = QueryCache::new(TimeDelta::seconds(30));
        let key = QueryKey::new(ops::LOGO);
        cache.put(key.clone(), &Some("u".to_string()), at(0));

        assert!(cache.get::<Option<String>>(&key, at(29)).is_some());
        assert!(cache.get::<Option<String>>(&key, at(30)).is_none());
    }

    #[test]
    fn test_keys_are_caller_scoped() {
        let mut cache = QueryCache::new(TimeDelta::seconds(30));
        let alice = QueryKey::new(ops::IS_ADMIN).for_caller(Some("alice"));
        let bob = QueryKey::new(ops::IS_ADMIN).for_caller(Some("bob"));
        cache.put(alice.clone(), &true, at(0));

        assert_eq!(cache.get::<bool>(&alice, at(1)), Some(true));
        assert_eq!(cache.get::<bool>(&bob, at(1)), None);
    }

    #[test]
    fn test_invalidate_drops_all_entries_of_operation() {
        let mut cache = QueryCache::new(TimeDelta::seconds(30));
        cache.put(QueryKey::new(ops::IS_ADMIN).for_caller(Some("a")), &true, at(0));
        cache.put(QueryKey::new(ops::IS_ADMIN).for_caller(Some("b")), &false, at(0));
        cache.put(QueryKey::new(ops::PRICING_PLANS), &Vec::<u64>::new(), at(0));

        assert_eq!(cache.invalidate(ops::IS_ADMIN), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.invalidate(ops::IS_ADMIN), 0);
    }

    #[test]
    fn test_type_mismatch_reads_as_miss() {
        let mut cache = QueryCache::new(TimeDelta::seconds(30));
        let key = QueryKey::new(ops::ADMIN_EXISTS);
        cache.put(key.clone(), &true, at(0));
        assert_eq!(cache.get::<Vec<String>>(&key, at(1)), None);
    }
}
