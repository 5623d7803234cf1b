/// End-to-end tests for the file-level parse/regenerate round trip
use anyhow::Result;
use chrono::{Local, TimeZone};
use devdoc::{DocRecord, DocumentReader, DocumentWriter, FixedClock};
use std::fs;
use tempfile::TempDir;

fn sample_record() -> DocRecord {
    DocRecord {
        function_name: Some("add_numbers".to_string()),
        language: Some("python".to_string()),
        mode: Some("dev_doc".to_string()),
        created_at: Some("2024-01-15 10:30:00".to_string()),
        code: Some("def add_numbers(a, b):\n    return a + b".to_string()),
        explanation: Some("Adds two numbers together.".to_string()),
        example: Some("print(add_numbers(2, 3))  # Output: 5".to_string()),
        complexity: Some("O(1)".to_string()),
        insight: Some("Direct addition, no loop.".to_string()),
        limitations: Some("Assumes numeric inputs only.".to_string()),
        tags: Some("math, utility".to_string()),
    }
}

#[test]
fn test_write_read_round_trip_preserves_fields() -> Result<()> {
    let dir = TempDir::new()?;
    // Parent directories are created on demand.
    let path = dir.path().join("output_docs").join("add_numbers.md");

    let record = sample_record();
    DocumentWriter::new().write(&record, &path)?;

    let read_back = DocumentReader::new()
        .read(&path)?
        .expect("document should exist");
    assert_eq!(read_back, record);
    Ok(())
}

#[test]
fn test_round_trip_forces_canonical_mode() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("doc.md");

    let record = DocRecord {
        mode: Some("user_doc".to_string()),
        ..sample_record()
    };
    DocumentWriter::new().write(&record, &path)?;

    let read_back = DocumentReader::new().read(&path)?.unwrap();
    assert_eq!(read_back.mode.as_deref(), Some("dev_doc"));
    // Everything else survives untouched.
    assert_eq!(read_back.function_name, record.function_name);
    assert_eq!(read_back.code, record.code);
    Ok(())
}

#[test]
fn test_empty_record_writes_parseable_skeleton() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("skeleton.md");

    DocumentWriter::new().write(&DocRecord::default(), &path)?;

    let read_back = DocumentReader::new().read(&path)?.unwrap();
    assert_eq!(read_back.function_name.as_deref(), Some("unknown_function"));
    assert_eq!(read_back.language.as_deref(), Some("python"));
    assert_eq!(read_back.mode.as_deref(), Some("dev_doc"));
    assert!(!read_back.created_at.as_deref().unwrap_or("").is_empty());
    assert_eq!(read_back.code.as_deref(), Some(""));
    assert_eq!(read_back.explanation.as_deref(), Some(""));
    assert_eq!(read_back.tags.as_deref(), Some(""));
    Ok(())
}

#[test]
fn test_nonexistent_input_is_absent_and_nothing_is_written() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("no_such_file.md");
    let output = dir.path().join("out.md");

    let result = DocumentReader::new().read(&missing)?;
    assert!(result.is_none());

    // The converter contract: absent input means no output write.
    if let Some(record) = result {
        DocumentWriter::new().write(&record, &output)?;
    }
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_regenerating_a_regenerated_document_is_byte_stable() -> Result<()> {
    let dir = TempDir::new()?;
    let first = dir.path().join("first.md");
    let second = dir.path().join("second.md");

    let at = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let writer = DocumentWriter::new().with_clock(Box::new(FixedClock(at)));

    // No created_at: the first write stamps it from the clock.
    let record = DocRecord {
        created_at: None,
        ..sample_record()
    };
    writer.write(&record, &first)?;

    let reader = DocumentReader::new();
    let read_once = reader.read(&first)?.unwrap();
    assert_eq!(read_once.created_at.as_deref(), Some("2024-01-15 10:30:00"));

    writer.write(&read_once, &second)?;
    assert_eq!(fs::read_to_string(&first)?, fs::read_to_string(&second)?);
    Ok(())
}

#[test]
fn test_partial_document_regenerates_with_empty_sections() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("partial.md");
    let output = dir.path().join("regenerated.md");

    fs::write(
        &input,
        "---\nfunction_name: halve\nlanguage: python\nmode: dev_doc\ncreated_at: 2024-01-15 10:30:00\n---\n\n### 🧠 Function:\n\n```python\ndef halve(x): return x / 2\n```\n",
    )?;

    let reader = DocumentReader::new();
    let record = reader.read(&input)?.unwrap();
    assert_eq!(record.code.as_deref(), Some("def halve(x): return x / 2"));
    assert_eq!(record.insight, None);

    // After one regeneration the absent sections become present-but-empty;
    // the text format cannot tell the two apart.
    DocumentWriter::new().write(&record, &output)?;
    let regenerated = reader.read(&output)?.unwrap();
    assert_eq!(regenerated.code, record.code);
    assert_eq!(regenerated.insight.as_deref(), Some(""));
    Ok(())
}

#[test]
fn test_reader_accepts_documents_from_the_legacy_template() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("legacy.md");

    // Older documents carried the function name on the Function header line.
    fs::write(
        &input,
        "---\nfunction_name: add_numbers\nlanguage: python\nmode: dev_doc\ncreated_at: 2024-01-15 10:30:00\n---\n\n### 🧠 Function: add_numbers\n\n```python\ndef add_numbers(a, b):\n    return a + b\n```\n\n---\n\n### 🔍 Explanation:\n\nAdds two numbers together.\n",
    )?;

    let record = DocumentReader::new().read(&input)?.unwrap();
    assert_eq!(
        record.code.as_deref(),
        Some("def add_numbers(a, b):\n    return a + b")
    );
    assert_eq!(
        record.explanation.as_deref(),
        Some("Adds two numbers together.")
    );
    Ok(())
}

#[test]
fn test_read_rejects_unreadable_path_with_hard_error() {
    // A directory exists but is not a readable document.
    let dir = TempDir::new().unwrap();
    let result = DocumentReader::new().read(dir.path());
    assert!(result.is_err());
}

#[test]
fn test_reader_is_pure_across_calls() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("doc.md");
    DocumentWriter::new().write(&sample_record(), &path)?;

    let reader = DocumentReader::new();
    let first = reader.read(&path)?;
    let second = reader.read(&path)?;
    assert_eq!(first, second);
    Ok(())
}
