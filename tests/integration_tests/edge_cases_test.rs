// tests/integration_tests/edge_cases_test.rs
use super::common::{HEADER, create_firstnames_csv, create_test_file, insee_sample_rows};
use anyhow::Result;
use freqlists::{NameOptions, NoProgress, load_firstnames_file, write_firstname_lists};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_sentinel_never_reaches_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_firstnames_csv(temp_dir.path(), &insee_sample_rows())?;
    let mut options = NameOptions::new(input);
    options.normalize = true;

    let tables = load_firstnames_file(&options, &NoProgress)?;
    write_firstname_lists(&tables, &options.output_dir, None)?;

    for file in ["male_names.txt", "female_names.txt"] {
        let content = fs::read_to_string(temp_dir.path().join(file))?;
        assert!(
            !content.to_lowercase().contains("prenoms_rares"),
            "{file} must not contain the rare-name sentinel"
        );
    }
    Ok(())
}

#[test]
fn test_unknown_gender_does_not_abort() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_firstnames_csv(temp_dir.path(), &["0;DOMINIQUE;1950;8", "X;CAMILLE;1990;3"])?;
    let options = NameOptions::new(input);

    let tables = load_firstnames_file(&options, &NoProgress)?;
    let written = write_firstname_lists(&tables, &options.output_dir, None)?;

    assert_eq!(written, [0, 0]);
    assert_eq!(fs::read_to_string(temp_dir.path().join("male_names.txt"))?, "");
    Ok(())
}

#[test]
fn test_header_only_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(temp_dir.path(), "nat.csv", HEADER)?;
    let tables = load_firstnames_file(&NameOptions::new(input), &NoProgress)?;
    assert!(tables.male.is_empty());
    assert!(tables.female.is_empty());
    Ok(())
}

#[test]
fn test_bad_count_names_the_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_firstnames_csv(temp_dir.path(), &["1;JEAN;1950;10", "1;PAUL;1950;1O"])?;
    let error = load_firstnames_file(&NameOptions::new(input.clone()), &NoProgress)
        .expect_err("A non-numeric count must abort the load");
    assert!(
        format!("{error:#}").contains(&input.display().to_string()),
        "Error should mention the input file: {error:#}"
    );
    Ok(())
}

#[test]
fn test_reruns_are_byte_identical() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut rows = insee_sample_rows();
    rows.extend(["2;ALICE;2000;9", "2;INES;2000;9", "2;CLARA;2000;9"]);
    let input = create_firstnames_csv(temp_dir.path(), &rows)?;
    let mut options = NameOptions::new(input);
    options.normalize = true;

    let mut outputs = Vec::new();
    for _ in 0..3 {
        let tables = load_firstnames_file(&options, &NoProgress)?;
        write_firstname_lists(&tables, &options.output_dir, None)?;
        outputs.push((
            fs::read(temp_dir.path().join("male_names.txt"))?,
            fs::read(temp_dir.path().join("female_names.txt"))?,
        ));
    }
    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
    Ok(())
}
