use std::fmt;

/// Opaque token issued by the authentication service and carried in the
/// page's `token` query parameter.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Returns `None` for a missing or blank value.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let value = raw?.trim();
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(*** len={})", self.0.len())
    }
}
