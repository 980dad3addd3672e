//! GitHub Actions workflow annotations

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

impl AnnotationLevel {
    fn as_str(&self) -> &'static str {
        match self {
            AnnotationLevel::Warning => "warning",
            AnnotationLevel::Error => "error",
        }
    }
}

/// A `::error file=...,line=...::message` workflow command
#[derive(Debug, Clone)]
pub struct Annotation<'a> {
    level: AnnotationLevel,
    message: &'a str,
    file: Option<String>,
    line: Option<usize>,
    title: Option<&'a str>,
}

impl<'a> Annotation<'a> {
    pub fn new(level: AnnotationLevel, message: &'a str) -> Self {
        Self {
            level,
            message,
            file: None,
            line: None,
            title: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl fmt::Display for Annotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut props = Vec::new();
        if let Some(file) = &self.file {
            props.push(format!("file={}", escape_property(file)));
        }
        if let Some(line) = self.line {
            props.push(format!("line={line}"));
        }
        if let Some(title) = self.title {
            props.push(format!("title={}", escape_property(title)));
        }

        write!(f, "::{}", self.level.as_str())?;
        if !props.is_empty() {
            write!(f, " {}", props.join(","))?;
        }
        write!(f, "::{}", escape_data(self.message))
    }
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
