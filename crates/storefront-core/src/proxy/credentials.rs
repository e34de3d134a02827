//! Upstream API key resolution.
//!
//! The key is looked up on every call from an ordered list of sources; the
//! first non-empty value wins. No value at all is not an error: the request
//! is forwarded without an `Authorization` header.

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Process environment variable
    Env(String),
    /// Fixed value (tests, embedding)
    Static(String),
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env(name) => write!(f, "Env({})", name),
            Self::Static(_) => write!(f, "Static(<redacted>)"),
        }
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env(name) => write!(f, "${}", name),
            Self::Static(_) => write!(f, "<static>"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialChain {
    sources: Vec<CredentialSource>,
}

impl CredentialChain {
    pub fn new(sources: Vec<CredentialSource>) -> Self {
        Self { sources }
    }

    /// Chain of environment variables, highest priority first.
    pub fn from_env_vars<S: AsRef<str>>(names: &[S]) -> Self {
        Self::new(names.iter().map(|n| CredentialSource::Env(n.as_ref().to_string())).collect())
    }

    pub fn sources(&self) -> &[CredentialSource] {
        &self.sources
    }

    /// Resolve against the process environment.
    pub fn resolve(&self) -> Option<String> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve with a custom variable lookup.
    pub fn resolve_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.sources.iter().find_map(|source| {
            let value = match source {
                CredentialSource::Env(name) => lookup(name),
                CredentialSource::Static(value) => Some(value.clone()),
            };
            value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        })
    }
}

impl fmt::Display for CredentialChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.sources.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", names.join(" → "))
    }
}
