use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Copy config to target directory
    copy_config();
}

/// Copies config.json to the target directory so the executable can find it.
fn copy_config() {
    let out_dir = env::var("OUT_DIR").unwrap();
    // OUT_DIR is something like target/release/build/pixel-autopilot-xxx/out
    let out_path = Path::new(&out_dir);
    let target_dir = out_path
        .ancestors()
        .nth(3) // Go up 3 levels: out -> hash -> build -> release
        .expect("Could not find target directory");

    let config_src = Path::new("config.json");
    let config_dst = target_dir.join("config.json");

    if config_src.exists() {
        let _ = fs::copy(config_src, &config_dst);
        println!("cargo:rerun-if-changed=config.json");
    }
}
