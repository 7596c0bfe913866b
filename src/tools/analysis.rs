// Analysis and visualization tools
//
// generate-analysis-report and create-dashboard. Each substitutes its
// arguments into a fixed task brief wrapped in a Python snippet.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::tools::registry::ToolRegistry;
use crate::tools::{arg_str, arg_str_list, text_content, Tool, ToolDefinition};

/// Register analysis tools with the registry
pub fn register_tools(registry: &mut ToolRegistry) {
    registry.register(Arc::new(GenerateAnalysisReportTool));
    registry.register(Arc::new(CreateDashboardTool));
}

/// Report configuration echoed back in the generate-analysis-report
/// response. Field order is part of the rendered text.
#[derive(Debug, Serialize)]
struct ReportConfig {
    topic: String,
    report_type: String,
    data_sources: Vec<String>,
    generated_at: String,
}

/// Tool describing how to generate an analysis report
pub struct GenerateAnalysisReportTool;

#[async_trait]
impl Tool for GenerateAnalysisReportTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "generate-analysis-report",
            description: "Generate an analysis report using PandaAGI's data analysis capabilities",
            schema: json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": "Topic or subject for the analysis report"
                    },
                    "data_sources": {
                        "type": "array",
                        "items": {
                            "type": "string"
                        },
                        "description": "List of data sources or keywords for research"
                    },
                    "report_type": {
                        "type": "string",
                        "enum": ["market_analysis", "competitive_analysis", "trend_analysis", "general"],
                        "description": "Type of analysis report to generate",
                        "default": "general"
                    }
                },
                "required": ["topic"],
                "additionalProperties": false
            }),
        }
    }

    async fn execute(&self, args: &Value) -> Value {
        let topic = arg_str(args, "topic", "");
        let report_type = arg_str(args, "report_type", "general");
        let data_sources = arg_str_list(args, "data_sources", &[]);

        let config = ReportConfig {
            topic: topic.to_string(),
            report_type: report_type.to_string(),
            data_sources: data_sources.clone(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let config_json =
            serde_json::to_string_pretty(&config).unwrap_or_else(|_| "{}".to_string());

        // The research line only appears when sources were given
        let sources_line = if data_sources.is_empty() {
            String::new()
        } else {
            format!("Research these data sources: {}", data_sources.join(", "))
        };

        let python_code = format!(
            r#"
# Generate Analysis Report with PandaAGI
import asyncio
from panda_agi import Agent
from panda_agi.envs import LocalEnv

async def generate_report():
    # Create environment
    agent_env = LocalEnv("./reports_workspace")

    # Create the agent
    agent = Agent(environment=agent_env)

    # Generate comprehensive analysis report
    task = """
    Create a comprehensive {report_type} analysis report on: {topic}

    {sources_line}

    The report should include:
    1. Executive Summary
    2. Market Overview
    3. Key Findings
    4. Data Analysis with Charts
    5. Recommendations
    6. Conclusion

    Save the report as both PDF and HTML formats.
    """

    response = agent.run(task)

    print("Analysis report generated successfully!")
    await agent.disconnect()

    return response

# Generate the report
if __name__ == "__main__":
    result = asyncio.run(generate_report())
"#
        );

        text_content(format!(
            "Analysis report generation configured:\n\n\
             Configuration:\n{config_json}\n\n\
             Python code to generate the report:\n```python\n{python_code}\n```"
        ))
    }
}

/// Tool describing how to create a data visualization dashboard
pub struct CreateDashboardTool;

#[async_trait]
impl Tool for CreateDashboardTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "create-dashboard",
            description: "Create a data visualization dashboard using PandaAGI",
            schema: json!({
                "type": "object",
                "properties": {
                    "data_description": {
                        "type": "string",
                        "description": "Description of the data to visualize"
                    },
                    "dashboard_type": {
                        "type": "string",
                        "enum": ["sales", "analytics", "performance", "custom"],
                        "description": "Type of dashboard to create",
                        "default": "custom"
                    },
                    "chart_types": {
                        "type": "array",
                        "items": {
                            "type": "string",
                            "enum": ["line", "bar", "pie", "scatter", "heatmap", "table"]
                        },
                        "description": "Preferred chart types for the dashboard"
                    }
                },
                "required": ["data_description"],
                "additionalProperties": false
            }),
        }
    }

    async fn execute(&self, args: &Value) -> Value {
        let data_description = arg_str(args, "data_description", "");
        let dashboard_type = arg_str(args, "dashboard_type", "custom");
        let chart_types = arg_str_list(args, "chart_types", &["line", "bar"]);
        let chart_types = chart_types.join(", ");

        let python_code = format!(
            r#"
# Create Dashboard with PandaAGI
import asyncio
from panda_agi import Agent
from panda_agi.envs import LocalEnv

async def create_dashboard():
    # Create environment
    agent_env = LocalEnv("./dashboard_workspace")

    # Create the agent
    agent = Agent(environment=agent_env)

    # Create interactive dashboard
    task = """
    Create an interactive {dashboard_type} dashboard for: {data_description}

    Include these chart types: {chart_types}

    The dashboard should:
    1. Load and analyze the data
    2. Create interactive visualizations
    3. Add filters and controls
    4. Include key metrics and KPIs
    5. Export as a web application
    6. Make it responsive for mobile devices

    Use Streamlit or Plotly Dash for the web interface.
    """

    response = agent.run(task)

    print("Dashboard created successfully!")
    await agent.disconnect()

    return response

# Create the dashboard
if __name__ == "__main__":
    result = asyncio.run(create_dashboard())
"#
        );

        text_content(format!(
            "Dashboard creation configured:\n\n\
             Type: {dashboard_type}\n\
             Data: {data_description}\n\
             Chart Types: {chart_types}\n\n\
             Python code to create the dashboard:\n```python\n{python_code}\n```"
        ))
    }
}
