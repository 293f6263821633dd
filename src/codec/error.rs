use std::fmt::Display;

use serde_json::error::Category;

/// Name under which the decoded input shows up in rendered reports
const INPUT_NAME: &str = "input";

/// Error returned when JSON cannot be decoded into a `Maybe<T>`
///
/// It keeps the underlying [`serde_json::Error`] and a copy of the input,
/// so that [`DecodeError::write`] can point at the offending position.
#[derive(Debug)]
pub struct DecodeError {
    inner: serde_json::Error,
    input: String,
    type_name: &'static str,
}

impl DecodeError {
    pub(super) fn new<T>(inner: serde_json::Error, input: &[u8]) -> Self {
        Self {
            inner,
            input: String::from_utf8_lossy(input).into_owned(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// One-based line of the error in the input.
    pub fn line(&self) -> usize {
        self.inner.line()
    }

    /// One-based column of the error in the input.
    pub fn column(&self) -> usize {
        self.inner.column()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn inner(&self) -> &serde_json::Error {
        &self.inner
    }

    pub fn into_inner(self) -> serde_json::Error {
        self.inner
    }

    fn label(&self) -> String {
        match self.inner.classify() {
            Category::Io => "could not read input".into(),
            Category::Syntax => "invalid JSON".into(),
            Category::Data => format!("not a valid `{}`", self.type_name),
            Category::Eof => "unexpected end of input".into(),
        }
    }

    /// Character offset of the error, clamped to the input.
    ///
    /// serde_json counts columns in bytes, ariadne indexes by character.
    pub(super) fn offset(&self) -> usize {
        let line = self.line().saturating_sub(1);
        let column = self.column().saturating_sub(1);

        let mut byte = 0;
        for l in self.input.split('\n').take(line) {
            byte += l.len() + 1;
        }
        let mut byte = (byte + column).min(self.input.len());
        while !self.input.is_char_boundary(byte) {
            byte -= 1;
        }
        self.input[..byte].chars().count()
    }

    /// Render a report of this error, pointing into the input.
    pub fn write(&self, out: &mut String, color: bool) -> std::fmt::Result {
        use ariadne::{Color, Config, Label, Report, ReportKind};

        // The trailing space gives end-of-input errors a character to
        // point at.
        let source = format!("{} ", self.input);
        let offset = self.offset();
        let span = (INPUT_NAME.to_string(), offset..offset + 1);

        let label = Label::new(span.clone())
            .with_message(self.label())
            .with_color(Color::Red);

        let report = Report::build(ReportKind::Error, span)
            .with_config(Config::default().with_color(color))
            .with_message(format!("Decode error: {}", self))
            .with_label(label)
            .finish();

        let cache = ariadne::sources([(INPUT_NAME.to_string(), source)]);
        let mut v = Vec::new();
        report.write(cache, &mut v).map_err(|_| std::fmt::Error)?;
        out.push_str(&String::from_utf8_lossy(&v));
        Ok(())
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not decode `Maybe<{}>`: {}",
            self.type_name, self.inner
        )
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

/// Error returned when the inner value of a `Maybe<T>` cannot be encoded
#[derive(Debug)]
pub struct EncodeError {
    inner: serde_json::Error,
    type_name: &'static str,
}

impl EncodeError {
    pub(super) fn new<T>(inner: serde_json::Error) -> Self {
        Self {
            inner,
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn inner(&self) -> &serde_json::Error {
        &self.inner
    }

    pub fn into_inner(self) -> serde_json::Error {
        self.inner
    }
}

impl Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not encode `Maybe<{}>`: {}",
            self.type_name, self.inner
        )
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}
