//! arXiv paper search tool: search_paper.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::config::defaults;
use crate::error::{ToolError, ToolResult};
use crate::models::{DateType, SearchField, SearchRequest, Subject};

/// arXiv paper search tool.
pub struct SearchPaperTool;

#[async_trait::async_trait]
impl McpTool for SearchPaperTool {
    fn name(&self) -> &'static str {
        "search_paper"
    }

    fn description(&self) -> &'static str {
        "Search for papers on arXiv based on various criteria. Returns a list of paper \
         metadata including URL, PDF URL, title, authors, abstract, submission date and \
         originally announced date. On failure returns {\"status\": \"failed\", \"reason\": ...}."
    }

    fn input_schema(&self) -> serde_json::Value {
        let field_values: Vec<&str> = SearchField::ALL.iter().map(|f| f.as_str()).collect();
        let subject_values: Vec<&str> = Subject::ALL.iter().map(|s| s.as_str()).collect();
        let date_type_values: Vec<&str> = DateType::ALL.iter().map(|d| d.as_str()).collect();

        json!({
            "type": "object",
            "properties": {
                "search_term": {
                    "type": "string",
                    "description": "Search term to query arXiv"
                },
                "field": {
                    "type": "string",
                    "enum": field_values,
                    "default": SearchField::default().as_str(),
                    "description": "The field to search in. Default is \"All fields\""
                },
                "subject": {
                    "type": "string",
                    "enum": subject_values,
                    "description": "The subject area to filter papers by. Omit for no filter"
                },
                "date_from": {
                    "type": "string",
                    "description": "Start date for filtering papers, 'YYYY-MM-DD'. Omit for no lower bound"
                },
                "date_to": {
                    "type": "string",
                    "description": "End date for filtering papers, 'YYYY-MM-DD'. Omit for no upper bound"
                },
                "date_type": {
                    "type": "string",
                    "enum": date_type_values,
                    "default": DateType::default().as_str(),
                    "description": "The type of date to filter papers by. Default is \"Submission Date\""
                },
                "num_results": {
                    "type": "integer",
                    "default": defaults::NUM_RESULTS,
                    "description": "The maximum number of results to return"
                },
                "start": {
                    "type": "integer",
                    "default": defaults::START,
                    "description": "The starting index for pagination. 0 is the first page, 1 the 2nd page, etc."
                }
            },
            "required": ["search_term"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let request: SearchRequest =
            serde_json::from_value(input).map_err(ToolError::invalid_arguments)?;

        let outcome = ctx.client.search(&request).await;

        Ok(serde_json::to_string(&outcome)?)
    }
}
