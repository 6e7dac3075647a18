fn main() {
    println!("cargo::rustc-check-cfg=cfg(jetson_cuda)");
    println!("cargo:rerun-if-changed=build.rs");

    let target = std::env::var("TARGET").unwrap_or_default();

    if !target.contains("aarch64-unknown-linux") {
        println!("cargo:warning=Building without CUDA device buffers (not on Jetson)");
        return;
    }

    // Device buffers go through cudarc's dynamic loader, so nothing is linked here.
    println!("cargo:rustc-cfg=jetson_cuda");
}
