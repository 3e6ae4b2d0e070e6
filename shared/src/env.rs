use std::collections::BTreeMap;

use crate::constants::PUBLIC_ENV_PREFIXES;

pub fn is_public(name: &str) -> bool {
    PUBLIC_ENV_PREFIXES
        .iter()
        .any(|prefix| name.len() > prefix.len() && name.starts_with(prefix))
}

/// Environment values that are allowed to be baked into the client bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicEnv {
    vars: BTreeMap<String, String>,
}

impl PublicEnv {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vars = BTreeMap::new();
        for (name, value) in pairs {
            let name = name.into();
            if !is_public(&name) {
                log::debug!("Dropping non-public env var {}", name);
                continue;
            }
            if let Some(value) = value {
                vars.insert(name, value.into());
            }
        }
        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
