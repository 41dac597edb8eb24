use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Exposed to the crate through env!
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    // Footer copyright; server and client must render the same year
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
    // Read through option_env! in SiteConfig::from_build_env
    println!("cargo:rerun-if-env-changed=PORTFOLIO_CONTACT_MODE");
}
