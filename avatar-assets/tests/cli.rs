use xshell::Shell;

const BIN: &str = env!("CARGO_BIN_EXE_generate-shape-keys");

#[test]
fn creates_models_dir_silently() {
    let sh = Shell::new().unwrap();
    let proj = sh.create_temp_dir().unwrap();
    let root = proj.path();

    let stdout = sh
        .cmd(BIN)
        .arg("--root")
        .arg(root)
        .env_remove("RUST_LOG")
        .quiet()
        .read()
        .unwrap();

    assert!(stdout.is_empty());
    assert!(root.join("wwwroot").join("models").is_dir());
    assert!(!root
        .join("wwwroot")
        .join("models")
        .join("avatar_shape_keys.glb")
        .exists());
}

#[test]
fn rerun_succeeds() {
    let sh = Shell::new().unwrap();
    let proj = sh.create_temp_dir().unwrap();
    let root = proj.path();

    sh.cmd(BIN).arg("--root").arg(root).quiet().run().unwrap();
    sh.cmd(BIN)
        .arg("--root")
        .arg(root)
        .arg("--verbose")
        .quiet()
        .run()
        .unwrap();

    assert!(root.join("wwwroot").join("models").is_dir());
}

#[test]
fn collision_exits_with_error() {
    let sh = Shell::new().unwrap();
    let proj = sh.create_temp_dir().unwrap();
    let root = proj.path();
    sh.write_file(root.join("wwwroot"), "").unwrap();

    let output = sh
        .cmd(BIN)
        .arg("--root")
        .arg(root)
        .quiet()
        .ignore_status()
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to create output directory"));
}
