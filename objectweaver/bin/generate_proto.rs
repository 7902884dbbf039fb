use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating JSONSchemaService types...");

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let out_dir = manifest_dir.join("src/pb");

    let proto_file = manifest_dir.join("proto/jsonSchema.proto");
    let proto_folder = manifest_dir.join("proto");

    if !out_dir.exists() {
        fs::create_dir_all(&out_dir)?;
    }

    // The server stub is kept in the bindings so tests can serve the API in-process.
    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .out_dir(&out_dir)
        .compile_protos(&[proto_file], &[proto_folder])?;

    println!("Done! Generated files are in src/pb");

    Ok(())
}
