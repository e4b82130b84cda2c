//! Error type for OSChina operations.

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Network failure or non-success HTTP status.
    Transport,
    /// A field selector matched zero or several nodes where exactly one was
    /// required, or the selector itself could not be evaluated.
    MalformedPage,
    /// Draft creation succeeded but the response carried no draft id.
    MissingDraftId,
    /// Article publication succeeded but the response carried no article id.
    MissingArticleId,
    /// Content failed required-field checks before submission.
    Validation,
    /// The platform answered with a failure envelope.
    Rejected,
    /// A response body could not be decoded.
    Decode,
}

/// OSChina error with semantic kind and diagnostic context.
///
/// Operations wrap errors from the steps they compose, so the chain reads
/// outermost first, e.g. `publish_draft: get_draft_detail: Malformed page`.
#[derive(Debug)]
pub struct OschinaError {
    /// Semantic error category.
    pub kind: ErrorKind,
    /// Form field the error relates to (for [`ErrorKind::MalformedPage`]).
    pub field: Option<&'static str>,
    /// HTTP status code (for [`ErrorKind::Transport`]).
    pub status: Option<u16>,
    /// Raw response body kept for diagnostics.
    pub body: Option<String>,
    operations: Vec<&'static str>,
    message: Option<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl OschinaError {
    /// Create a new error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            field: None,
            status: None,
            body: None,
            operations: Vec::new(),
            message: None,
            source: None,
        }
    }

    /// Wrap with the name of the enclosing operation.
    #[must_use]
    pub fn in_operation(mut self, operation: &'static str) -> Self {
        self.operations.push(operation);
        self
    }

    /// Attach field context.
    #[must_use]
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Attach a human-readable message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach the raw response body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Operation names, outermost first.
    pub fn operations(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operations.iter().rev().copied()
    }

    /// Create a transport error from a non-success HTTP status.
    #[must_use]
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        let mut error = Self::new(ErrorKind::Transport).with_body(body);
        error.status = Some(status);
        error
    }

    /// Create a transport error from a failed request.
    #[must_use]
    pub fn request(err: ureq::Error) -> Self {
        Self::new(ErrorKind::Transport).with_source(err)
    }

    /// Create a malformed page error for a field.
    #[must_use]
    pub fn malformed(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedPage)
            .with_field(field)
            .with_message(message)
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation).with_message(message)
    }
}

impl std::fmt::Display for OschinaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "op: inner_op: Kind `field`: message (HTTP 500): source"
        for operation in self.operations() {
            write!(f, "{operation}: ")?;
        }

        let kind_str = match self.kind {
            ErrorKind::Transport => "Transport failure",
            ErrorKind::MalformedPage => "Malformed page",
            ErrorKind::MissingDraftId => "Missing draft id",
            ErrorKind::MissingArticleId => "Missing article id",
            ErrorKind::Validation => "Validation failed",
            ErrorKind::Rejected => "Rejected by platform",
            ErrorKind::Decode => "Decode error",
        };
        write!(f, "{kind_str}")?;

        if let Some(field) = self.field {
            write!(f, " `{field}`")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(status) = self.status {
            write!(f, " (HTTP {status})")?;
            if let Some(body) = &self.body {
                write!(f, " - {body}")?;
            }
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl std::error::Error for OschinaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}
