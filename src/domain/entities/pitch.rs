use serde::{Deserialize, Serialize};

/// The person being pitched to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prospect {
    pub name: String,
    pub company: String,
    pub industry: String,
}

impl Prospect {
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            industry: industry.into(),
        }
    }

    /// True when any of name, company or industry is blank.
    pub fn is_incomplete(&self) -> bool {
        [&self.name, &self.company, &self.industry]
            .iter()
            .any(|field| field.trim().is_empty())
    }

    /// One-line description used inside the pitch prompt.
    pub fn describe(&self) -> String {
        format!(
            "{} from {} in the {} sector",
            self.name.trim(),
            self.company.trim(),
            self.industry.trim()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesScript {
    pub opening: String,
    pub value_prop: String,
    #[serde(default)]
    pub handling_objections: Vec<String>,
    pub closing: String,
}
