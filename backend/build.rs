use fs_extra::dir::{copy, CopyOptions};
use std::fs;
use std::path::Path;

const FRONTEND_DIST: &str = "../frontend/dist";
const EMBED_DIR: &str = "static";

/// Copies the trunk build of the frontend into `static/dist`, which
/// `include_dir!` embeds into the server binary.
fn main() {
    let embed_dir = Path::new(EMBED_DIR);
    let dist_dir = Path::new(FRONTEND_DIST);

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(embed_dir);
        fs::create_dir_all(embed_dir).expect("cannot create static directory");
        let options = CopyOptions::new().overwrite(true).copy_inside(true);
        copy(dist_dir, embed_dir, &options).expect("cannot copy frontend bundle");
    }
    // Without a frontend build the server still compiles and serves the API.
    fs::create_dir_all(embed_dir.join("dist")).expect("cannot create static/dist");

    println!("cargo:rerun-if-changed={}", FRONTEND_DIST);
}
