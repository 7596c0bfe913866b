// Documentation bodies served by mcp/readResource.
//
// These are literal text assets; edits here change the wire contract.

pub const PANDAAGI_DOCS: &str = r#"# PandaAGI SDK Documentation

## Overview
PandaAGI is a powerful SDK for building Agentic General Intelligence applications. It provides a simple API for creating AI agents that can execute tasks autonomously.

## Key Features
- **Agentic Capabilities**: Build AI agents that can accomplish tasks through tools
- **Local Orchestration**: All execution happens in your environment with full control
- **Universal Capability**: Create solutions for any domain or use case
- **Developer-First**: Focus on user experience while we handle AI complexity

## Core Components
1. **The API**: Bidirectional WebSocket connection for real-time interaction
2. **The SDK**: Handles orchestration, state management, and communication
3. **The Execution Environment**: Secure, isolated context for agent operations

## Built-in Agent Capabilities
- 🌐 **Internet Access**: Real-time information gathering from any source
- 🗂️ **File System**: Complete control over digital assets
- 💻 **Code Execution**: Dynamic programming in multiple languages
- 🚀 **Deployment**: Deploy web servers and APIs directly

## Installation
```bash
pip install panda-agi
```

## Basic Usage
```python
import asyncio
from panda_agi import Agent
from panda_agi.envs import LocalEnv

async def main():
    # Create environment
    agent_env = LocalEnv("./workspace")

    # Create agent
    agent = Agent(environment=agent_env)

    # Execute task
    response = agent.run("Analyze market trends")
    print(response.output)

    # Cleanup
    await agent.disconnect()

asyncio.run(main())
```"#;

pub const PANDAAGI_QUICKSTART: &str = r#"# PandaAGI Quick Start Guide

## Prerequisites
- Python 3.8+
- PandaAGI API key from [agi.pandas-ai.com](https://agi.pandas-ai.com/)

## Step 1: Installation
```bash
pip install panda-agi
```

## Step 2: Set API Key
```bash
export PANDA_AGI_KEY=your_api_key
```

## Step 3: Create Your First Agent
```python
import asyncio
from panda_agi import Agent
from panda_agi.envs import LocalEnv

async def first_agent():
    # Create workspace
    agent_env = LocalEnv("./my_workspace")

    # Create agent
    agent = Agent(environment=agent_env)

    # Simple task
    response = agent.run("Tell me a joke about pandas")
    print(response.output)

    await agent.disconnect()

asyncio.run(first_agent())
```

## Step 4: Try Advanced Tasks
```python
# Generate a report
response = agent.run("Create a market analysis report for renewable energy")

# Build a dashboard
response = agent.run("Create a sales dashboard from our CSV data")

# Deploy a website
response = agent.run("Build a portfolio website for our company")
```

## Next Steps
- Explore the examples directory
- Read the full documentation
- Join the Discord community
- Start building your own applications!"#;

pub const AGENT_BEST_PRACTICES: &str = r#"# PandaAGI Agent Best Practices

## Agent Design Principles

### 1. Clear Task Definition
- Write specific, actionable instructions
- Break complex tasks into smaller steps
- Provide context and constraints

### 2. Environment Management
- Use dedicated workspaces for different projects
- Keep environments clean and organized
- Monitor resource usage

### 3. Error Handling
- Implement proper error handling in your code
- Test agents with various scenarios
- Monitor agent performance and logs

## Task Writing Guidelines

### Good Task Examples:
```python
# Specific and actionable
agent.run("Analyze sales data from Q4 2024 and create a bar chart showing monthly revenue")

# Provides context
agent.run("Create a Python web scraper for product prices from ecommerce sites, focusing on electronics")
```

### Avoid Vague Tasks:
```python
# Too vague
agent.run("Do something with data")

# Lacks specificity
agent.run("Make a website")
```

## Performance Optimization

### 1. Workspace Organization
- Keep files organized in logical folders
- Use descriptive file names
- Clean up temporary files regularly

### 2. Resource Management
- Monitor memory and CPU usage
- Use appropriate environment sizes
- Implement caching where beneficial

### 3. Security Considerations
- Validate inputs and outputs
- Use secure environments for sensitive data
- Implement proper access controls

## Common Patterns

### Data Analysis Pipeline:
1. Load and validate data
2. Explore and clean data
3. Perform analysis
4. Generate visualizations
5. Create report

### Web Application Development:
1. Design application architecture
2. Implement core functionality
3. Create user interface
4. Add error handling
5. Test and deploy

## Troubleshooting Tips
- Check API key configuration
- Verify workspace permissions
- Monitor agent logs for errors
- Test with simpler tasks first
- Use the community forum for help"#;

pub const PANDAAGI_EXAMPLES: &str = r#"# PandaAGI Examples

## Example 1: Data Analysis Report
```python
import asyncio
from panda_agi import Agent
from panda_agi.envs import LocalEnv

async def data_analysis_example():
    agent_env = LocalEnv("./analysis_workspace")
    agent = Agent(environment=agent_env)

    task = """
    Analyze the provided sales data and create a comprehensive report:
    1. Load the CSV file
    2. Calculate key metrics (total sales, growth rate, top products)
    3. Create visualizations (line charts, bar charts, pie charts)
    4. Generate insights and recommendations
    5. Export as PDF report
    """

    response = agent.run(task)
    print("Analysis complete:", response.output)

    await agent.disconnect()
```

## Example 2: Web Application
```python
async def web_app_example():
    agent_env = LocalEnv("./webapp_workspace")
    agent = Agent(environment=agent_env)

    task = """
    Create a Streamlit web application for data visualization:
    1. Build an interface for uploading CSV files
    2. Add data filtering and sorting controls
    3. Create interactive charts (plotly)
    4. Add export functionality
    5. Deploy the app locally
    """

    response = agent.run(task)
    await agent.disconnect()
```

## Example 3: Market Research
```python
async def market_research_example():
    agent_env = LocalEnv("./research_workspace")
    agent = Agent(environment=agent_env)

    task = """
    Conduct market research on electric vehicles:
    1. Search for recent market data and trends
    2. Analyze competitor information
    3. Identify key market drivers
    4. Create market size projections
    5. Generate executive summary
    """

    response = agent.run(task)
    await agent.disconnect()
```

## Example 4: Automation Script
```python
async def automation_example():
    agent_env = LocalEnv("./automation_workspace")
    agent = Agent(environment=agent_env)

    task = """
    Create an automation script for daily reports:
    1. Connect to database
    2. Extract yesterday's data
    3. Generate summary statistics
    4. Create charts and visualizations
    5. Send email with report attachment
    """

    response = agent.run(task)
    await agent.disconnect()
```

## Example 5: Content Generation
```python
async def content_generation_example():
    agent_env = LocalEnv("./content_workspace")
    agent = Agent(environment=agent_env)

    task = """
    Generate content for our tech blog:
    1. Research latest AI trends
    2. Write engaging blog post (1500 words)
    3. Create supporting graphics
    4. Format for web publishing
    5. Generate social media posts
    """

    response = agent.run(task)
    await agent.disconnect()
```

## Running the Examples
1. Install PandaAGI: `pip install panda-agi`
2. Set your API key: `export PANDA_AGI_KEY=your_key`
3. Copy any example code
4. Run: `python your_example.py`

## Tips for Success
- Start with simple tasks and gradually increase complexity
- Monitor the workspace directory for generated files
- Check logs for detailed execution information
- Experiment with different task descriptions
- Use the UI for interactive development"#;
