use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrend {
    pub topic: String,
    pub sentiment: Sentiment,
    /// Growth in percent.
    pub growth: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveInsight {
    pub competitor: String,
    pub strategy: String,
    pub threat_level: ThreatLevel,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligenceReport {
    pub summary: String,
    #[serde(default)]
    pub trends: Vec<MarketTrend>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub competitors: Vec<CompetitiveInsight>,
}
