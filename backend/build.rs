use std::fs;
use std::path::Path;

/// Copies the trunk bundle into `static/dist` for `include_dir!`. The
/// directory is always created so the launcher builds before the frontend.
fn main() {
    let out_dir = Path::new("static");
    let bundle_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("copy frontend bundle");
    }
    fs::create_dir_all(&bundle_dir).expect("create bundle dir");

    println!("cargo:rerun-if-changed=../frontend/dist");
}
