// src/cli/agents.rs — List the fixed demo agent roster

use crate::core::agents::AgentKind;
use crate::infra::config::Config;

pub fn list_agents(config: &Config) {
    let resolved = config.provider.resolve();

    println!("Available demo agents:");
    println!();
    for agent in AgentKind::ALL {
        let profile = agent.profile();
        println!("  {:<8}{}", profile.call_type, profile.description);
        println!("  {:<8}remote agent id: {}", "", resolved.agent_id(agent));
        println!();
    }
}
