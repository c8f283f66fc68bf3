// src/core/agents.rs — Fixed demo agent roster

use clap::ValueEnum;

/// The closed set of demo agents. Remote agent ids and the outbound caller
/// number live in config; this enum carries only identity and display data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    Priya,
    Tripti,
    Arun,
}

#[derive(Debug, Clone, Copy)]
pub struct AgentProfile {
    pub kind: AgentKind,
    pub name: &'static str,
    pub description: &'static str,
    /// Tag sent as `call_type` in the call metadata.
    pub call_type: &'static str,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [AgentKind::Priya, AgentKind::Tripti, AgentKind::Arun];

    pub fn profile(self) -> AgentProfile {
        match self {
            AgentKind::Priya => AgentProfile {
                kind: self,
                name: "Priya",
                description: "Calls leads and asks questions to gauge interest",
                call_type: "priya",
            },
            AgentKind::Tripti => AgentProfile {
                kind: self,
                name: "Tripti",
                description: "Reminds customers of their upcoming EMIs and educates them on the importance of paying on time",
                call_type: "tripti",
            },
            AgentKind::Arun => AgentProfile {
                kind: self,
                name: "Arun",
                description: "Professional debt collector that negotiates with customers and pushes for payment post bounce",
                call_type: "arun",
            },
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.profile().call_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_is_complete() {
        assert_eq!(AgentKind::ALL.len(), 3);
        for agent in AgentKind::ALL {
            let profile = agent.profile();
            assert_eq!(profile.kind, agent);
            assert!(!profile.name.is_empty());
            assert!(!profile.description.is_empty());
        }
    }

    #[test]
    fn test_call_type_matches_display() {
        assert_eq!(AgentKind::Priya.to_string(), "priya");
        assert_eq!(AgentKind::Arun.to_string(), "arun");
    }
}
