//! Tool catalog exposed over `tools/list`

use serde::Serialize;
use serde_json::{Value, json};

/// Tool name for current conditions
pub const CURRENT_WEATHER: &str = "get_current_weather";
/// Tool name for the multi-day forecast
pub const WEATHER_FORECAST: &str = "get_weather_forecast";
/// Tool name for model-generated insights
pub const WEATHER_INSIGHTS: &str = "get_weather_insights";

/// A tool descriptor as advertised to MCP clients
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

fn location_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "location": {
                "type": "string",
                "description": "City name, optionally with country code (e.g. \"Oslo\" or \"Portland,US\")"
            }
        },
        "required": ["location"]
    })
}

/// The three weather tools, in the order clients should list them
#[must_use]
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: CURRENT_WEATHER,
            description: "Get current weather for a location using OpenWeatherMap API.",
            input_schema: location_schema(),
        },
        ToolDefinition {
            name: WEATHER_FORECAST,
            description: "Get 5-day weather forecast for a location.",
            input_schema: location_schema(),
        },
        ToolDefinition {
            name: WEATHER_INSIGHTS,
            description: "Get AI-powered weather insights and recommendations.",
            input_schema: location_schema(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_all_three_tools() {
        let tools = definitions();
        let names: Vec<&str> = tools.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![CURRENT_WEATHER, WEATHER_FORECAST, WEATHER_INSIGHTS]
        );
    }

    #[test]
    fn every_tool_requires_a_location() {
        for tool in definitions() {
            let schema = &tool.input_schema;
            assert_eq!(schema["type"], "object", "tool {}", tool.name);
            assert_eq!(schema["required"][0], "location", "tool {}", tool.name);
            assert_eq!(
                schema["properties"]["location"]["type"], "string",
                "tool {}",
                tool.name
            );
        }
    }

    #[test]
    fn serialized_form_uses_camel_case_schema_key() {
        let tools = definitions();
        let value = serde_json::to_value(&tools[0]).expect("serialize");
        assert!(value.get("inputSchema").is_some());
        assert!(value.get("input_schema").is_none());
    }
}
