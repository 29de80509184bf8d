#![deny(unused_must_use)]

use std::{env, fs, path::PathBuf};

use xshell::cmd;

const BOARD_TARGET: &str = "thumbv7em-none-eabihf";

fn main() -> Result<(), anyhow::Error> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let args = args.iter().map(|s| &**s).collect::<Vec<_>>();

    match &args[..] {
        ["ci"] => test_ci(),
        ["update"] => update(),
        _ => {
            println!("USAGE cargo xtask [ci|update]");
            Ok(())
        }
    }
}

fn update() -> Result<(), anyhow::Error> {
    let _p = xshell::pushd(root_dir())?;
    cmd!("cargo update").run()?;
    Ok(())
}

fn test_ci() -> Result<(), anyhow::Error> {
    let _e = xshell::pushenv("CI", "true");
    test_device()?;
    for board in board_features()? {
        build_board(&board)?;
    }
    Ok(())
}

fn test_device() -> Result<(), anyhow::Error> {
    let _p = xshell::pushd(device_dir())?;
    cmd!("cargo test --all").run()?;
    Ok(())
}

fn build_board(feature: &str) -> Result<(), anyhow::Error> {
    println!("Building {}", feature);
    let _p = xshell::pushd(device_dir())?;
    let features = format!("{} defmt", feature);
    cmd!("cargo build --release --no-default-features --features {features} --target {BOARD_TARGET}")
        .run()?;
    Ok(())
}

/// Every `board+...` feature declared by the device crate.
fn board_features() -> Result<Vec<String>, anyhow::Error> {
    let mut manifest = device_dir();
    manifest.push("Cargo.toml");
    let manifest: toml::Value = toml::from_str(&fs::read_to_string(manifest)?)?;

    let boards = manifest
        .get("features")
        .and_then(toml::Value::as_table)
        .map(|features| {
            features
                .keys()
                .filter(|name| name.starts_with("board+"))
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    Ok(boards)
}

fn device_dir() -> PathBuf {
    let mut device = root_dir();
    device.push("device");
    device
}

fn root_dir() -> PathBuf {
    let mut xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    xtask_dir.pop();
    xtask_dir
}
