#[cfg(feature = "generate")]
fn main() {
    tonic_build::configure()
        .out_dir("src")
        .build_client(true)
        .build_server(false)
        .compile(&["proto/typedb.proto"], &["proto"])
        .expect("tonic build failed");
}

#[cfg(not(feature = "generate"))]
fn main() {}
