// Agent lifecycle tools
//
// create-agent and run-agent-task. Both return a configuration record and a
// Python snippet showing the equivalent PandaAGI SDK calls; run-agent-task
// additionally attaches a canned "expected output" picked by keyword.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::tools::registry::ToolRegistry;
use crate::tools::{arg_str, text_content, Tool, ToolDefinition};

/// Capabilities every synthesized agent reports.
const AGENT_CAPABILITIES: [&str; 4] =
    ["web_access", "file_system", "code_execution", "deployment"];

/// Register agent tools with the registry
pub fn register_tools(registry: &mut ToolRegistry) {
    registry.register(Arc::new(CreateAgentTool));
    registry.register(Arc::new(RunAgentTaskTool));
}

/// Synthetic agent configuration echoed back in the create-agent response.
/// Built and discarded within a single request; field order is part of the
/// rendered text.
#[derive(Debug, Serialize)]
struct AgentConfig {
    #[serde(rename = "agentId")]
    agent_id: String,
    name: String,
    environment: String,
    workspace_path: String,
    created_at: String,
    status: String,
    capabilities: Vec<&'static str>,
}

impl AgentConfig {
    fn new(name: &str, environment: &str, workspace_path: &str) -> Self {
        Self {
            // Millisecond timestamp only; collisions under rapid calls are
            // accepted, nothing downstream stores the id.
            agent_id: format!("agent-{}", Utc::now().timestamp_millis()),
            name: name.to_string(),
            environment: environment.to_string(),
            workspace_path: workspace_path.to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            status: "ready".to_string(),
            capabilities: AGENT_CAPABILITIES.to_vec(),
        }
    }
}

/// Tool describing how to create a PandaAGI agent
pub struct CreateAgentTool;

#[async_trait]
impl Tool for CreateAgentTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "create-agent",
            description: "Create a new PandaAGI agent with specified configuration",
            schema: json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name for the agent"
                    },
                    "environment": {
                        "type": "string",
                        "enum": ["local", "docker"],
                        "description": "Execution environment for the agent",
                        "default": "local"
                    },
                    "workspace_path": {
                        "type": "string",
                        "description": "Path to the agent's workspace directory",
                        "default": "./agent_workspace"
                    }
                },
                "required": ["name"],
                "additionalProperties": false
            }),
        }
    }

    async fn execute(&self, args: &Value) -> Value {
        let name = arg_str(args, "name", "");
        let environment = arg_str(args, "environment", "local");
        let workspace_path = arg_str(args, "workspace_path", "./agent_workspace");

        let config = AgentConfig::new(name, environment, workspace_path);
        let config_json =
            serde_json::to_string_pretty(&config).unwrap_or_else(|_| "{}".to_string());

        let python_code = format!(
            r#"
# PandaAGI Agent Creation
import asyncio
from panda_agi import Agent
from panda_agi.envs import LocalEnv

async def create_agent():
    # Create environment
    agent_env = LocalEnv("{workspace_path}")

    # Create the agent
    agent = Agent(environment=agent_env)

    print(f"Agent '{name}' created successfully!")
    print(f"Environment: {environment}")
    print(f"Workspace: {workspace_path}")

    return agent

# To use this agent, run:
# agent = asyncio.run(create_agent())
"#
        );

        text_content(format!(
            "Agent \"{name}\" configuration created successfully!\n\n\
             Configuration:\n{config_json}\n\n\
             Python code to create the agent:\n```python\n{python_code}\n```"
        ))
    }
}

/// Tool describing how to run a task on a PandaAGI agent
pub struct RunAgentTaskTool;

#[async_trait]
impl Tool for RunAgentTaskTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "run-agent-task",
            description: "Execute a task using a PandaAGI agent",
            schema: json!({
                "type": "object",
                "properties": {
                    "task": {
                        "type": "string",
                        "description": "The task or instruction for the agent to execute"
                    },
                    "agent_name": {
                        "type": "string",
                        "description": "Name of the agent to use (optional, will create default if not specified)"
                    },
                    "environment": {
                        "type": "string",
                        "enum": ["local", "docker"],
                        "description": "Execution environment",
                        "default": "local"
                    },
                    "workspace_path": {
                        "type": "string",
                        "description": "Workspace directory path",
                        "default": "./agent_workspace"
                    }
                },
                "required": ["task"],
                "additionalProperties": false
            }),
        }
    }

    async fn execute(&self, args: &Value) -> Value {
        let task = arg_str(args, "task", "");
        let agent_name = arg_str(args, "agent_name", "default");
        let workspace_path = arg_str(args, "workspace_path", "./agent_workspace");

        let python_code = format!(
            r#"
# Execute PandaAGI Task
import asyncio
from panda_agi import Agent
from panda_agi.envs import LocalEnv

async def run_task():
    # Create environment
    agent_env = LocalEnv("{workspace_path}")

    # Create the agent
    agent = Agent(environment=agent_env)

    # Execute the task
    print(f"Executing task: {task}")
    response = agent.run("{task}")

    print("Task completed!")
    print("Response:", response.output)

    # Cleanup
    await agent.disconnect()

    return response

# Run the task
if __name__ == "__main__":
    result = asyncio.run(run_task())
"#
        );

        let mock_response = canned_task_response(task);

        text_content(format!(
            "Task execution configured for agent \"{agent_name}\":\n\n\
             Task: {task}\n\n\
             Python code to execute:\n```python\n{python_code}\n```\n\n\
             Expected output:\n{mock_response}"
        ))
    }
}

/// Canned completion messages, matched against the task text in this order.
/// First matching keyword wins, so the order must stay fixed.
const TASK_RESPONSES: [(&str, &str); 5] = [
    (
        "joke",
        "🐼 Why don't pandas ever get tired? Because they always have their bear-y own energy! Plus, they're always bamboo-zled by how much they can accomplish!",
    ),
    (
        "analysis",
        "I'll create a comprehensive analysis with data visualizations, charts, and actionable insights saved to your workspace.",
    ),
    (
        "dashboard",
        "Interactive dashboard created with real-time data updates and responsive design for all devices.",
    ),
    (
        "website",
        "Professional website deployed with modern design, SEO optimization, and mobile responsiveness.",
    ),
    (
        "report",
        "Detailed report generated with executive summary, key findings, and recommendations in PDF format.",
    ),
];

/// Fallback when no keyword matches.
const GENERIC_TASK_RESPONSE: &str = "Task will be executed by the PandaAGI agent with full autonomous capabilities including web access, file operations, and code execution.";

/// Pick the canned "expected output" for a task description.
pub fn canned_task_response(task: &str) -> &'static str {
    let task = task.to_lowercase();
    TASK_RESPONSES
        .iter()
        .find(|(keyword, _)| task.contains(*keyword))
        .map(|(_, response)| *response)
        .unwrap_or(GENERIC_TASK_RESPONSE)
}
