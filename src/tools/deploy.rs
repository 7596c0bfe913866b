// Deployment tools
//
// deploy-web-app: renders the deployment brief and the Python snippet that
// would drive it through the PandaAGI SDK.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::tools::registry::ToolRegistry;
use crate::tools::{arg_str, arg_str_list, text_content, Tool, ToolDefinition};

/// Register deployment tools with the registry
pub fn register_tools(registry: &mut ToolRegistry) {
    registry.register(Arc::new(DeployWebAppTool));
}

/// Tool describing how to deploy a web application
pub struct DeployWebAppTool;

#[async_trait]
impl Tool for DeployWebAppTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "deploy-web-app",
            description: "Deploy a web application using PandaAGI's deployment capabilities",
            schema: json!({
                "type": "object",
                "properties": {
                    "app_description": {
                        "type": "string",
                        "description": "Description of the web application to create and deploy"
                    },
                    "app_type": {
                        "type": "string",
                        "enum": ["streamlit", "flask", "fastapi", "static"],
                        "description": "Type of web application framework",
                        "default": "streamlit"
                    },
                    "features": {
                        "type": "array",
                        "items": {
                            "type": "string"
                        },
                        "description": "List of features to include in the application"
                    }
                },
                "required": ["app_description"],
                "additionalProperties": false
            }),
        }
    }

    async fn execute(&self, args: &Value) -> Value {
        let app_description = arg_str(args, "app_description", "");
        let app_type = arg_str(args, "app_type", "streamlit");
        let features = arg_str_list(args, "features", &[]);
        let feature_list = features.join(", ");

        // The feature line only appears when features were given
        let features_line = if features.is_empty() {
            String::new()
        } else {
            format!("Include these features: {feature_list}")
        };

        let python_code = format!(
            r#"
# Deploy Web App with PandaAGI
import asyncio
from panda_agi import Agent
from panda_agi.envs import LocalEnv

async def deploy_web_app():
    # Create environment
    agent_env = LocalEnv("./webapp_workspace")

    # Create the agent
    agent = Agent(environment=agent_env)

    # Create and deploy web application
    task = """
    Create and deploy a {app_type} web application: {app_description}

    {features_line}

    Steps:
    1. Design the application architecture
    2. Implement the core functionality
    3. Create user interface
    4. Add error handling and validation
    5. Test the application
    6. Deploy to a web server
    7. Provide access URL and documentation

    Make sure the app is production-ready with proper styling.
    """

    response = agent.run(task)

    print("Web application deployed successfully!")
    await agent.disconnect()

    return response

# Deploy the application
if __name__ == "__main__":
    result = asyncio.run(deploy_web_app())
"#
        );

        text_content(format!(
            "Web application deployment configured:\n\n\
             Type: {app_type}\n\
             Description: {app_description}\n\
             Features: {feature_list}\n\n\
             Python code to deploy the application:\n```python\n{python_code}\n```"
        ))
    }
}
