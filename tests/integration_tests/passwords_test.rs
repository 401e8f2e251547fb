// tests/integration_tests/passwords_test.rs
use super::common::{create_test_file, read_lines};
use anyhow::Result;
use freqlists::{NoProgress, PasswordOptions, load_passwords_file, write_password_list};
use tempfile::TempDir;

#[test]
fn test_blank_line_does_not_take_a_rank() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(temp_dir.path(), "top.txt", "abc123\npassword\n\nqwerty\n")?;
    let options = PasswordOptions::new(input);

    let passwords = load_passwords_file(&options, &NoProgress)?;
    let written = write_password_list(&passwords, &options.output_path(), options.limit)?;

    assert_eq!(written, 3);
    assert_eq!(
        read_lines(&temp_dir.path().join("passwords.txt"))?,
        vec!["abc123\t3", "password\t2", "qwerty\t1"]
    );
    Ok(())
}

#[test]
fn test_limit_keeps_pre_truncation_rank() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(temp_dir.path(), "top.txt", "abc123\npassword\n\nqwerty\n")?;
    let mut options = PasswordOptions::new(input);
    options.limit = Some(1);

    let passwords = load_passwords_file(&options, &NoProgress)?;
    write_password_list(&passwords, &options.output_path(), options.limit)?;

    assert_eq!(
        read_lines(&temp_dir.path().join("passwords.txt"))?,
        vec!["abc123\t3"]
    );
    Ok(())
}

#[test]
fn test_limit_larger_than_list() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(temp_dir.path(), "top.txt", "soleil\nchocolat\n")?;
    let mut options = PasswordOptions::new(input);
    options.limit = Some(10);

    let passwords = load_passwords_file(&options, &NoProgress)?;
    let written = write_password_list(&passwords, &options.output_path(), options.limit)?;

    assert_eq!(written, 2);
    Ok(())
}

#[test]
fn test_latin1_input_is_written_as_utf8() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("top.txt");
    std::fs::write(&input, b"b\xe9b\xe9\nazerty\n")?;
    let mut options = PasswordOptions::new(input);
    options.encoding = encoding_rs::WINDOWS_1252;

    let passwords = load_passwords_file(&options, &NoProgress)?;
    write_password_list(&passwords, &options.output_path(), None)?;

    assert_eq!(
        read_lines(&temp_dir.path().join("passwords.txt"))?,
        vec!["bébé\t2", "azerty\t1"]
    );
    Ok(())
}
