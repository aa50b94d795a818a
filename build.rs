fn main() {
    // Capture the build date for the footer's "last updated" line
    let build_date = chrono::Utc::now().format("%b %e, %Y").to_string();

    println!("cargo:rustc-env=BUILD_DATE={}", build_date);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
