//! Environment variable sources.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only view of environment variables.
pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<V: AsRef<str>, S: BuildHasher> Env for HashMap<String, V, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.as_ref().to_string())
    }
}

impl<V: AsRef<str>> Env for BTreeMap<String, V> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.as_ref().to_string())
    }
}

impl<const N: usize> Env for [(&str, &str); N] {
    fn var(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_env() {
        let env = [("AWS_AMPLIFY", "true")];
        assert_eq!(env.var("AWS_AMPLIFY").as_deref(), Some("true"));
        assert_eq!(env.var("VERCEL"), None);
    }

    #[test]
    fn test_map_env() {
        let mut env = HashMap::new();
        env.insert("VERCEL".to_string(), "1");
        assert_eq!(env.var("VERCEL").as_deref(), Some("1"));

        let env: BTreeMap<String, String> = BTreeMap::new();
        assert_eq!(env.var("VERCEL"), None);
    }

    #[test]
    fn test_process_env_missing() {
        assert_eq!(ProcessEnv.var("BIBLIA_SURELY_UNSET_VARIABLE"), None);
    }
}
