use chrono::Utc;

fn main() {
    // Record the build time for /api/version / Catat waktu build
    let build_time = Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
}
