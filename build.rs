// Copies the static site (page, atlas and wasm-pack output) to `dist/`.
use std::path::Path;

use fs_extra::dir::{copy, create_all, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;
    let staged = create_all(out_dir, true).and_then(|_| copy(static_dir, out_dir, &options));
    if let Err(e) = staged {
        println!("cargo:warning=failed to stage static/ into dist/: {e}");
    }
}
