use std::fmt;

use crate::analytics::AnalyticsConfig;
use crate::constants::{MOUNT_TARGET_ID, NO_DOCUMENT_ERROR, TARGET_MISSING_ERROR};
use crate::env::PublicEnv;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    NoDocument,
    TargetMissing(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::NoDocument => write!(f, "{}", NO_DOCUMENT_ERROR),
            MountError::TargetMissing(id) => write!(f, "{}: #{}", TARGET_MISSING_ERROR, id),
        }
    }
}

impl std::error::Error for MountError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    Mount(MountError),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Mount(e) => write!(f, "Startup failed: {}", e),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Mount(e) => Some(e),
        }
    }
}

impl From<MountError> for StartupError {
    fn from(err: MountError) -> Self {
        StartupError::Mount(err)
    }
}

/// The two side effects performed when the page boots.
pub trait Bootstrap {
    type Handle;
    type AnalyticsError: fmt::Display;

    fn init_analytics(&mut self, config: &AnalyticsConfig) -> Result<(), Self::AnalyticsError>;

    fn mount(&mut self, target_id: &str) -> Result<Self::Handle, MountError>;
}

/// Initializes analytics, then mounts the UI. Analytics failures are logged
/// and otherwise ignored; a mount failure is returned to the caller.
///
/// Calling this more than once per page is not supported.
pub fn start<B: Bootstrap>(boot: &mut B, env: &PublicEnv) -> Result<B::Handle, StartupError> {
    let config = AnalyticsConfig::from_env(env);
    log::debug!("Analytics options: {:?}", config.options);

    if let Err(e) = boot.init_analytics(&config) {
        log::warn!("Analytics initialization failed, continuing without it: {}", e);
    }

    let handle = boot.mount(MOUNT_TARGET_ID)?;
    log::info!("Mounted application into #{}", MOUNT_TARGET_ID);
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::CaptureOptions;
    use crate::constants::{POSTHOG_HOST_VAR, POSTHOG_KEY_VAR};

    #[derive(Debug, PartialEq)]
    enum Call {
        InitAnalytics(AnalyticsConfig),
        Mount(String),
    }

    struct Recorder {
        element_ids: Vec<&'static str>,
        analytics_fails: bool,
        calls: Vec<Call>,
    }

    impl Recorder {
        fn with_elements(element_ids: Vec<&'static str>) -> Self {
            Self {
                element_ids,
                analytics_fails: false,
                calls: Vec::new(),
            }
        }
    }

    impl Bootstrap for Recorder {
        type Handle = String;
        type AnalyticsError = &'static str;

        fn init_analytics(&mut self, config: &AnalyticsConfig) -> Result<(), Self::AnalyticsError> {
            self.calls.push(Call::InitAnalytics(config.clone()));
            if self.analytics_fails {
                return Err("network unavailable");
            }
            Ok(())
        }

        fn mount(&mut self, target_id: &str) -> Result<Self::Handle, MountError> {
            self.calls.push(Call::Mount(target_id.to_string()));
            self.element_ids
                .iter()
                .find(|id| **id == target_id)
                .map(|id| format!("handle:{}", id))
                .ok_or_else(|| MountError::TargetMissing(target_id.to_string()))
        }
    }

    fn env_with(key: Option<&str>, host: Option<&str>) -> PublicEnv {
        PublicEnv::from_pairs([(POSTHOG_KEY_VAR, key), (POSTHOG_HOST_VAR, host)])
    }

    #[test]
    fn test_analytics_runs_before_mount_once_each() {
        let mut boot = Recorder::with_elements(vec!["app"]);
        let env = env_with(Some("abc123"), Some("https://analytics.example.com"));
        start(&mut boot, &env).unwrap();

        assert_eq!(boot.calls.len(), 2);
        assert!(matches!(boot.calls[0], Call::InitAnalytics(_)));
        assert_eq!(boot.calls[1], Call::Mount("app".to_string()));
    }

    #[test]
    fn test_config_pass_through() {
        let mut boot = Recorder::with_elements(vec!["app"]);
        let env = env_with(Some("abc123"), Some("https://analytics.example.com"));
        start(&mut boot, &env).unwrap();

        let expected = AnalyticsConfig {
            api_key: Some("abc123".to_string()),
            options: CaptureOptions {
                api_host: Some("https://analytics.example.com".to_string()),
                capture_pageview: true,
                capture_pageleave: true,
                capture_exceptions: true,
            },
        };
        assert_eq!(boot.calls[0], Call::InitAnalytics(expected));
    }

    #[test]
    fn test_mount_resolves_app_element() {
        let mut boot = Recorder::with_elements(vec!["header", "app"]);
        let handle = start(&mut boot, &PublicEnv::default()).unwrap();
        assert_eq!(handle, "handle:app");
    }

    #[test]
    fn test_missing_target_is_fatal() {
        let mut boot = Recorder::with_elements(vec!["root"]);
        let err = start(&mut boot, &PublicEnv::default()).unwrap_err();
        assert_eq!(
            err,
            StartupError::Mount(MountError::TargetMissing("app".to_string()))
        );
        assert_eq!(
            err.to_string(),
            "Startup failed: Mount target element not found: #app"
        );
    }

    #[test]
    fn test_missing_env_still_initializes() {
        let mut boot = Recorder::with_elements(vec!["app"]);
        start(&mut boot, &env_with(None, None)).unwrap();

        match &boot.calls[0] {
            Call::InitAnalytics(config) => {
                assert_eq!(config.api_key, None);
                assert_eq!(config.api_host(), None);
                assert!(config.options.capture_exceptions);
            }
            other => panic!("expected analytics init first, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_env_still_initializes() {
        let mut boot = Recorder::with_elements(vec!["app"]);
        start(&mut boot, &env_with(Some(""), Some(""))).unwrap();

        match &boot.calls[0] {
            Call::InitAnalytics(config) => {
                assert_eq!(config.api_key.as_deref(), Some(""));
                assert_eq!(config.api_host(), Some(""));
            }
            other => panic!("expected analytics init first, got {:?}", other),
        }
    }

    #[test]
    fn test_analytics_failure_does_not_block_mount() {
        let mut boot = Recorder::with_elements(vec!["app"]);
        boot.analytics_fails = true;
        let handle = start(&mut boot, &PublicEnv::default()).unwrap();

        assert_eq!(handle, "handle:app");
        assert_eq!(boot.calls.len(), 2);
    }
}
