//! Configuration handed to the PostHog client at startup.

use serde::Serialize;

use crate::constants::{POSTHOG_HOST_VAR, POSTHOG_KEY_VAR};
use crate::env::PublicEnv;

/// Option object passed as the second argument of `posthog.init`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,
    pub capture_pageview: bool,
    pub capture_pageleave: bool,
    pub capture_exceptions: bool,
}

impl CaptureOptions {
    pub fn with_host(api_host: Option<String>) -> Self {
        Self {
            api_host,
            capture_pageview: true,
            capture_pageleave: true,
            capture_exceptions: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub api_key: Option<String>,
    pub options: CaptureOptions,
}

impl AnalyticsConfig {
    /// Values are passed through as found, empty or not. The SDK decides
    /// what an empty credential means.
    pub fn from_env(env: &PublicEnv) -> Self {
        Self {
            api_key: env.get(POSTHOG_KEY_VAR).map(str::to_owned),
            options: CaptureOptions::with_host(
                env.get(POSTHOG_HOST_VAR).map(str::to_owned),
            ),
        }
    }

    pub fn api_host(&self) -> Option<&str> {
        self.options.api_host.as_deref()
    }
}
