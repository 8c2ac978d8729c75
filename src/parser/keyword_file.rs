use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::collection::CategoryKeywords;
use crate::{OboError, OboResult};

fn unquote(field: &str) -> &str {
    field.trim().trim_matches('"').trim()
}

/// Splits a line into the category name and the keyword field
///
/// A quoted category name may contain commas.
fn split_fields(line: &str) -> Option<(&str, &str)> {
    match line.strip_prefix('"') {
        Some(rest) => {
            let (name, rest) = rest.split_once('"')?;
            let (_, keywords) = rest.split_once(',')?;
            Some((name, keywords))
        }
        None => line.split_once(','),
    }
}

/// Parses a single line of a keyword file
///
/// Returns `None` for empty lines and comments
fn parse_line(line: &str) -> OboResult<Option<CategoryKeywords>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let Some((name, keywords)) = split_fields(line) else {
        return Err(OboError::InvalidInput(line.to_string()));
    };
    let name = unquote(name);
    let keywords: Vec<&str> = unquote(keywords)
        .split(';')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .collect();

    if name.is_empty() || keywords.is_empty() {
        return Err(OboError::InvalidInput(line.to_string()));
    }
    Ok(Some(CategoryKeywords::new(name, &keywords)))
}

/// Parses the content of a keyword file
///
/// # Errors
///
/// [`OboError::InvalidInput`] if a line has no category name or keywords
///
/// # Examples
///
/// ```
/// use obocats::parser::keyword_file::parse_keywords;
///
/// let categories = parse_keywords("golgi,golgi\nmembrane,membrane;membranes\n").unwrap();
/// assert_eq!(categories.len(), 2);
/// assert_eq!(categories[1].keywords(), ["membrane", "membranes"]);
/// ```
pub fn parse_keywords(content: &str) -> OboResult<Vec<CategoryKeywords>> {
    content
        .lines()
        .filter_map(|line| parse_line(line).transpose())
        .collect()
}

/// Reads a keyword file
///
/// # Errors
///
/// - [`OboError::CannotOpenFile`]: the file cannot be read
/// - [`OboError::InvalidInput`]: a line has no category name or keywords
pub fn read_keyword_file<P: AsRef<Path>>(path: P) -> OboResult<Vec<CategoryKeywords>> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|_| OboError::CannotOpenFile(path.display().to_string()))?;
    let reader = BufReader::new(file);

    let mut categories = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|_| {
            OboError::InvalidInput(format!("Invalid data in {}", path.display()))
        })?;
        if let Some(category) = parse_line(&line)? {
            categories.push(category);
        }
    }
    Ok(categories)
}
