use shared::constants::{POSTHOG_HOST_VAR, POSTHOG_KEY_VAR};
use shared::PublicEnv;

/// Public variables captured when the bundle was compiled.
pub fn public_env() -> PublicEnv {
    scoped_env(&[
        (POSTHOG_KEY_VAR, option_env!("VITE_PUBLIC_POSTHOG_KEY")),
        (POSTHOG_HOST_VAR, option_env!("VITE_PUBLIC_POSTHOG_HOST")),
    ])
}

fn scoped_env(vars: &[(&'static str, Option<&'static str>)]) -> PublicEnv {
    PublicEnv::from_pairs(vars.iter().copied())
}
