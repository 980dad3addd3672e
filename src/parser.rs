//! Front matter parser for lesson documents
//!
//! A lesson starts with a header of `key: value` lines between two `---`
//! delimiter lines. Parsing is split in two steps: [`extract_front_matter`]
//! locates the header, then a [`FrontMatterParser`] turns it into a typed
//! [`FrontMatter`] mapping. Callers only depend on the trait, so the lenient
//! line parser and the strict YAML parser are interchangeable.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LessonError, LessonResult};

/// Delimiter for front matter sections
const FRONT_MATTER_DELIMITER: &str = "---";

/// Keys parsed as comma separated lists
const LIST_KEYS: &[&str] = &["tags"];

/// Keys parsed as integers
const INTEGER_KEYS: &[&str] = &["estimatedTime"];

/// Keys parsed as booleans (`true` only when the value is literally `true`)
const BOOLEAN_KEYS: &[&str] = &["premium", "is_premium"];

/// Result of extracting front matter from content
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFrontMatter {
    /// Raw header text between the delimiters
    pub header: String,
    /// Content after the closing delimiter
    pub body: String,
    /// 1-indexed line of the closing delimiter
    pub end_line: usize,
}

/// Locate the front matter header at the top of a document
///
/// # Example
/// ```text
/// ---
/// title: For Loops
/// tags: python, basics
/// ---
/// # Lesson body
/// ```
pub fn extract_front_matter(content: &str, file: &Path) -> LessonResult<ExtractedFrontMatter> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.first().map(|l| l.trim()) != Some(FRONT_MATTER_DELIMITER) {
        return Err(LessonError::MissingFrontMatter {
            file: file.to_path_buf(),
            reason: "document must start with '---'".to_string(),
        });
    }

    let closing_line = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == FRONT_MATTER_DELIMITER)
        .map(|(i, _)| i)
        .ok_or_else(|| LessonError::MissingFrontMatter {
            file: file.to_path_buf(),
            reason: "missing closing '---'".to_string(),
        })?;

    let header = lines[1..closing_line].join("\n");
    let body = if closing_line + 1 < lines.len() {
        lines[closing_line + 1..].join("\n")
    } else {
        String::new()
    };

    Ok(ExtractedFrontMatter {
        header,
        body,
        end_line: closing_line + 1,
    })
}

/// A typed front matter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FrontMatterValue {
    Text(String),
    List(Vec<String>),
    Integer(i64),
    Bool(bool),
}

/// Parsed front matter, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrontMatter {
    fields: BTreeMap<String, FrontMatterValue>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FrontMatterValue) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.fields.get(key)
    }

    /// Text value of a field; empty strings count as absent
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(FrontMatterValue::Text(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.fields.get(key) {
            Some(FrontMatterValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.fields.get(key) {
            Some(FrontMatterValue::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.fields.get(key) {
            Some(FrontMatterValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontMatterValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Turns a document into its front matter mapping
pub trait FrontMatterParser {
    /// Parse the header of `content`; `file` is used for error reporting only
    fn parse(&self, content: &str, file: &Path) -> LessonResult<FrontMatter>;
}

/// Which parser a generation run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    /// `key: value` lines, lenient
    #[default]
    Lines,
    /// Full YAML, rejects malformed headers
    Yaml,
}

impl ParserKind {
    pub fn parser(&self) -> Box<dyn FrontMatterParser> {
        match self {
            ParserKind::Lines => Box::new(LineParser),
            ParserKind::Yaml => Box::new(YamlParser),
        }
    }
}

/// Lenient `key: value` parser
///
/// Each header line is split at the first `:`. Lines without a colon or
/// with an empty key are ignored; unknown keys are kept as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineParser;

impl FrontMatterParser for LineParser {
    fn parse(&self, content: &str, file: &Path) -> LessonResult<FrontMatter> {
        let extracted = extract_front_matter(content, file)?;
        let mut front_matter = FrontMatter::new();

        for line in extracted.header.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            front_matter.insert(key, convert_scalar(key, value.trim()));
        }

        Ok(front_matter)
    }
}

fn convert_scalar(key: &str, value: &str) -> FrontMatterValue {
    if LIST_KEYS.contains(&key) {
        return FrontMatterValue::List(split_list(value));
    }
    if INTEGER_KEYS.contains(&key) {
        return match leading_integer(value) {
            Some(n) => FrontMatterValue::Integer(n),
            None => FrontMatterValue::Text(strip_quotes(value).to_string()),
        };
    }
    if BOOLEAN_KEYS.contains(&key) {
        return FrontMatterValue::Bool(strip_quotes(value) == "true");
    }
    FrontMatterValue::Text(strip_quotes(value).to_string())
}

fn split_list(value: &str) -> Vec<String> {
    let value = value.trim();
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);
    inner
        .split(',')
        .map(|item| strip_quotes(item.trim()).to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Parse a leading integer the way `estimatedTime: 15 min` is meant
fn leading_integer(value: &str) -> Option<i64> {
    let value = strip_quotes(value.trim());
    let digits_end = value
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && *c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..digits_end].parse().ok()
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches(|c| c == '"' || c == '\'')
}

/// Strict YAML parser backed by `serde_yaml_ng`
///
/// Produces the same typed mapping as [`LineParser`] but rejects headers
/// that are not a flat YAML mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl FrontMatterParser for YamlParser {
    fn parse(&self, content: &str, file: &Path) -> LessonResult<FrontMatter> {
        use serde_yaml_ng::Value;

        let extracted = extract_front_matter(content, file)?;
        let invalid = |message: String| LessonError::InvalidFrontMatter {
            file: file.to_path_buf(),
            message,
        };

        let value: Value =
            serde_yaml_ng::from_str(&extracted.header).map_err(|e| invalid(e.to_string()))?;
        let mapping = match value {
            Value::Null => return Ok(FrontMatter::new()),
            Value::Mapping(mapping) => mapping,
            _ => return Err(invalid("front matter must be a mapping".to_string())),
        };

        let mut front_matter = FrontMatter::new();
        for (key, value) in mapping {
            let key = match key {
                Value::String(key) => key,
                other => return Err(invalid(format!("non-string key {:?}", other))),
            };
            let converted = convert_yaml(&key, value).map_err(invalid)?;
            front_matter.insert(key, converted);
        }
        Ok(front_matter)
    }
}

fn convert_yaml(key: &str, value: serde_yaml_ng::Value) -> Result<FrontMatterValue, String> {
    use serde_yaml_ng::Value;

    match value {
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| {
                yaml_scalar_text(&item).ok_or_else(|| format!("'{}' must be a list of scalars", key))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FrontMatterValue::List),
        Value::Bool(b) if BOOLEAN_KEYS.contains(&key) => Ok(FrontMatterValue::Bool(b)),
        Value::Number(n) if INTEGER_KEYS.contains(&key) => match n.as_i64() {
            Some(n) => Ok(FrontMatterValue::Integer(n)),
            None => Ok(FrontMatterValue::Text(n.to_string())),
        },
        Value::Mapping(_) | Value::Tagged(_) => {
            Err(format!("'{}' must be a scalar or a list of scalars", key))
        }
        other => {
            let text = yaml_scalar_text(&other).unwrap_or_default();
            Ok(convert_scalar(key, &text))
        }
    }
}

fn yaml_scalar_text(value: &serde_yaml_ng::Value) -> Option<String> {
    use serde_yaml_ng::Value;

    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}
