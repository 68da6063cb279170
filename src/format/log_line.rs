use std::fmt;

use nonempty_collections::NEVec;

/// One rendered record: space-separated header parts, then `name=value ` pairs.
pub struct FormattedLogLine {
    header: NEVec<String>,
    fields: Vec<(String, String)>,
}

impl FormattedLogLine {
    pub const fn new(header: NEVec<String>, fields: Vec<(String, String)>) -> Self {
        Self { header, fields }
    }

    /// The complete line, newline included.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for FormattedLogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header.first())?;
        for part in self.header.iter().skip(1) {
            write!(f, " {part}")?;
        }

        if !self.fields.is_empty() {
            f.write_str(": ")?;
        }
        for (name, value) in &self.fields {
            write!(f, "{name}={value} ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nonempty_collections::nev;

    use super::*;

    fn header() -> NEVec<String> {
        nev!["10:02:03".to_owned(), " INFO".to_owned(), "hello".to_owned()]
    }

    #[test]
    fn test_line_without_fields() {
        let line = FormattedLogLine::new(header(), Vec::new());

        assert_eq!(line.to_line(), "10:02:03  INFO hello\n");
    }

    #[test]
    fn test_line_with_fields() {
        let fields = vec![
            ("address".to_owned(), "http://localhost:3000".to_owned()),
            ("foo".to_owned(), "bar".to_owned()),
        ];
        let line = FormattedLogLine::new(header(), fields);

        assert_eq!(line.to_line(), "10:02:03  INFO hello: address=http://localhost:3000 foo=bar \n");
    }
}
