// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "sexe;preusuel;annais;nombre";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn create_firstnames_csv(dir: &Path, rows: &[&str]) -> Result<PathBuf> {
    let mut content = format!("{HEADER}\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    create_test_file(dir, "nat.csv", &content)
}

/// A small extract shaped like the INSEE national file.
pub fn insee_sample_rows() -> Vec<&'static str> {
    vec![
        "1;JEAN;1950;10",
        "1;jean;1951;5",
        "1;LUCAS;2005;12",
        "1;_PRENOMS_RARES;1950;5000",
        "1;ANDRÉ;1950;4",
        "1;ANDRE;1960;2",
        "2;MARIE;1950;30",
        "2;ZOÉ;2010;9",
        "2;_PRENOMS_RARES;2010;700",
        "2;LÉA;XXXX;11",
        "3;CLAUDE;1950;99",
    ]
}

pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    Ok(fs::read_to_string(path)?.lines().map(str::to_owned).collect())
}
