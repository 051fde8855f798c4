use serde::Serialize;
use team_engine::{PartyMember, StoredTeam, TeamId, TeamSummary};

/// Output of `parse`
#[derive(Serialize)]
pub struct ParsedTeam {
    pub playstyle: String,
    pub members: Vec<PartyMember>,
    pub summary: TeamSummary,
}

#[derive(Serialize)]
pub struct FailureInfo {
    pub label: String,
    pub error: String,
}

/// Output of `ingest`
#[derive(Serialize)]
pub struct IngestReport {
    pub blocks: usize,
    pub stored: Vec<TeamId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailureInfo>,
}

/// Output of `aggregate`
#[derive(Serialize)]
pub struct AggregateReport {
    pub summarized: Vec<TeamId>,
    pub skipped: Vec<TeamId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<TeamId>,
}

/// One line of `summaries`
#[derive(Serialize)]
pub struct SummaryLine<'a> {
    pub id: TeamId,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'a str>,
    pub playstyle: &'a str,
    pub summary: Option<TeamSummary>,
    /// Summary fields in classifier order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<[u32; 7]>,
}

impl<'a> SummaryLine<'a> {
    pub fn new(team: &'a StoredTeam) -> Self {
        Self {
            id: team.id,
            name: &team.name,
            format: team.format.as_deref(),
            playstyle: &team.team.playstyle,
            summary: team.summary,
            features: team.summary.map(|s| s.features()),
        }
    }
}
