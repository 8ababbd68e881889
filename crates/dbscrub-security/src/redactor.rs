use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Token written in place of a password
pub const REDACTED: &str = "REDACTED";

const MYSQL_PASSWORD: &str = "MYSQL_PASSWORD";

lazy_static! {
    // scheme, user up to the first ':', password up to the first '@'
    static ref MYSQL_URL: Regex = Regex::new(r"mysql://([^:]+):([^@]+)@").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub redaction_type: String,
    pub count: usize,
}

/// Rewrites `mysql://user:password@` so the password reads `REDACTED`
pub struct Redactor {
    pattern: &'static Regex,
}

impl Redactor {
    pub fn new() -> Self {
        Self {
            pattern: &MYSQL_URL,
        }
    }

    /// Redact every credential URL in `content`.
    ///
    /// Text outside the password segment is passed through untouched. The
    /// report counts matches, including ones that were already redacted.
    pub fn redact(&self, content: &str) -> (String, Option<RedactionInfo>) {
        let mut count = 0;
        let result = self.pattern.replace_all(content, |caps: &Captures| {
            count += 1;
            format!("mysql://{}:{}@", &caps[1], REDACTED)
        });

        let info = (count > 0).then(|| RedactionInfo {
            redaction_type: MYSQL_PASSWORD.to_string(),
            count,
        });

        (result.into_owned(), info)
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

/// Redact with the default redactor, discarding the report.
pub fn redact(text: &str) -> String {
    Redactor::new().redact(text).0
}
