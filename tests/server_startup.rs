use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn server(dir: &Path) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("catalogo-server")?;
    cmd.current_dir(dir)
        .env_remove("CATALOGO_ASSET_BASE_URL")
        .args(["--addr", "127.0.0.1:0"]);
    Ok(cmd)
}

#[test]
fn missing_books_file_aborts_before_listening() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    fs::write(temp.path().join("frontpage_categories.json"), "[]")?;

    server(temp.path())?
        .assert()
        .failure()
        .stderr(predicate::str::contains("load dataset"))
        .stderr(predicate::str::contains("read books file"))
        .stderr(predicate::str::contains("listening").not());
    Ok(())
}

#[test]
fn malformed_books_file_aborts_before_listening() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    fs::write(temp.path().join("books.tsv"), "id\ttitulo\nx\tX\n")?;
    fs::write(temp.path().join("frontpage_categories.json"), "[]")?;

    server(temp.path())?
        .assert()
        .failure()
        .stderr(predicate::str::contains("load dataset"))
        .stderr(predicate::str::contains("expected at least 15"))
        .stderr(predicate::str::contains("listening").not());
    Ok(())
}

#[test]
fn malformed_home_groups_abort_before_listening() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    fs::write(temp.path().join("books.tsv"), "")?;
    fs::write(temp.path().join("frontpage_categories.json"), "{")?;

    server(temp.path())?
        .assert()
        .failure()
        .stderr(predicate::str::contains("load dataset"))
        .stderr(predicate::str::contains("parse home groups file"))
        .stderr(predicate::str::contains("listening").not());
    Ok(())
}
