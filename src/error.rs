use crate::ir::TacticKind;

/// What a piece of payload text was supposed to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Type,
    Identifier,
    Integer,
    Expression,
}

impl Subject {
    pub fn name(&self) -> &'static str {
        match self {
            Subject::Type => "type",
            Subject::Identifier => "identifier",
            Subject::Integer => "integer",
            Subject::Expression => "expression",
        }
    }
}

/// Errors in the embedded text of a tactic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub subject: Subject,
    pub source: String,
    pub message: String,
    pub span: std::ops::Range<usize>,
    pub found: Option<char>,
}

impl SyntaxError {
    pub fn new(
        subject: Subject,
        source: &str,
        message: String,
        span: std::ops::Range<usize>,
        found: Option<char>,
    ) -> Self {
        SyntaxError {
            subject,
            source: source.to_owned(),
            message,
            span,
            found,
        }
    }

    /// Rejects the whole source text (used when there is no better location).
    pub fn invalid(subject: Subject, source: &str) -> Self {
        SyntaxError {
            subject,
            source: source.to_owned(),
            message: format!("Invalid {} {:?}", subject.name(), source),
            span: 0..source.chars().count(),
            found: None,
        }
    }

    /// A rendered report pointing into the offending text.
    pub fn report(&self) -> String {
        use ariadne::*;

        let id = self.subject.name();
        let error_color = Color::Red;

        let mut buf: Vec<u8> = vec![];
        let written = Report::build(ReportKind::Error, id, self.span.start)
            .with_message(format!("{} parse error", id))
            .with_label(
                Label::new((id, self.span.clone()))
                    .with_message(format!("{}", (&self.message).fg(error_color)))
                    .with_color(error_color),
            )
            .finish()
            .write(sources(vec![(id, self.source.as_str())]), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.found {
            Some(c) => write!(
                f,
                "{} at position {} {:?}",
                self.message, self.span.start, c
            ),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Precondition violations of tactic commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TacticError {
    NoKeyword,
    MissingSeparator { after: &'static str },
    UnknownKeyword(String),
    MissingPayload { what: &'static str },
    NotFunctionType,
    NoHoleSelected,
    NotAllowed(TacticKind),
    NoSuchHole(usize),
    AlreadySelected,
    UnfilledHoles(usize),
}

impl std::fmt::Display for TacticError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TacticError::NoKeyword => write!(f, "No tactic keyword specified"),
            TacticError::MissingSeparator { after } => {
                write!(f, "Missing ':' after {}", after)
            }
            TacticError::UnknownKeyword(k) => {
                write!(f, "Unknown tactic keyword {:?}", k)
            }
            TacticError::MissingPayload { what } => {
                write!(f, "No {} specified", what)
            }
            TacticError::NotFunctionType => {
                write!(f, "Only function types are allowed for the signature")
            }
            TacticError::NoHoleSelected => write!(f, "No hole is selected"),
            TacticError::NotAllowed(k) => {
                write!(f, "Tactic {:?} not allowed for the selected hole", k.keyword())
            }
            TacticError::NoSuchHole(i) => {
                write!(f, "There is no unfilled hole with the index {}", i)
            }
            TacticError::AlreadySelected => write!(f, "Hole is already selected"),
            TacticError::UnfilledHoles(n) => {
                write!(f, "There are still unfilled holes ({})", n)
            }
        }
    }
}

/// The errors a tactic command can be rejected with.
///
/// Both kinds leave the program unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Syntax(SyntaxError),
    Tactic(TacticError),
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Error::Syntax(e)
    }
}

impl From<TacticError> for Error {
    fn from(e: TacticError) -> Self {
        Error::Tactic(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Syntax(e) => write!(f, "{}", e),
            Error::Tactic(e) => write!(f, "{}", e),
        }
    }
}
