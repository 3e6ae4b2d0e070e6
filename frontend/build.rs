const PUBLIC_VARS: [&str; 2] = ["VITE_PUBLIC_POSTHOG_KEY", "VITE_PUBLIC_POSTHOG_HOST"];

fn main() {
    for var in PUBLIC_VARS {
        println!("cargo:rerun-if-env-changed={var}");

        if std::env::var_os(var).is_none() {
            println!("cargo:warning={var} is not set; analytics will be initialized without it");
        }
    }
}
