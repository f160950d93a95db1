use std::env;
use std::fs;
use std::path::Path;
use vergen::{BuildBuilder, CargoBuilder, Emitter, RustcBuilder};
use vergen_gitcl::{Emitter as GitEmitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let build = BuildBuilder::default().build_timestamp(true).build()?;

    let cargo = CargoBuilder::default()
        .opt_level(true)
        .target_triple(true)
        .build()?;

    let rustc = RustcBuilder::default()
        .semver(true)
        .channel(true)
        .build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&rustc)?
        .emit()?;

    // Git metadata is optional; build_info falls back to "unknown"
    let gitcl = GitclBuilder::default()
        .sha(true)
        .branch(true)
        .dirty(true)
        .build()?;
    GitEmitter::default().add_instructions(&gitcl)?.emit()?;

    copy_configs()?;

    Ok(())
}

/// Copies every profile in `config/` next to the built binaries
///
/// OUT_DIR is `target/{profile}/build/pixelkit-xxx/out`; the copies land in
/// `target/{profile}/config`, where `AppConfig::load` looks first.
fn copy_configs() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = env::var("OUT_DIR")?;
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .ok_or("Could not determine target directory")?;

    let config_out_dir = target_dir.join("config");
    fs::create_dir_all(&config_out_dir)?;

    println!("cargo:rerun-if-changed=config");

    let source_dir = Path::new("config");
    if !source_dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(source_dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "toml")
            && let Some(name) = path.file_name()
        {
            fs::copy(&path, config_out_dir.join(name))?;
        }
    }

    Ok(())
}
