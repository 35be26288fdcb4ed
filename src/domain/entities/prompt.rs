use serde::{Deserialize, Serialize};

/// Text with `{name}` placeholders.
///
/// Rendering is a single left-to-right pass: substituted values are copied
/// verbatim and never scanned for further placeholders, so caller input that
/// happens to contain braces comes through untouched. Placeholders without a
/// matching variable are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptTemplate(String);

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };

            let name = &after[..close];
            match vars.iter().find(|(key, _)| *key == name) {
                Some((_, value)) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
            rest = &after[close + 1..];
        }

        out.push_str(rest);
        out
    }
}

impl From<&str> for PromptTemplate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A system preamble plus a user template, the unit configured per endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSpec {
    #[serde(default)]
    pub system: Option<String>,
    pub user: PromptTemplate,
}

impl PromptSpec {
    pub fn new(user: impl Into<PromptTemplate>) -> Self {
        Self {
            system: None,
            user: user.into(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}
