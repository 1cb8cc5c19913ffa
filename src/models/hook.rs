use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct HookModel {
    #[serde(default)]
    pub id: String,
    pub display_name: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct HookWorkspace {
    pub current_dir: String,
    pub project_dir: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct OutputStyle {
    pub name: String,
}

/// Cost summary provided with every status event
#[derive(Deserialize, Debug, Default)]
pub struct HookCost {
    #[serde(default)]
    pub total_cost_usd: f64,
    pub total_duration_ms: Option<u64>,
    pub total_api_duration_ms: Option<u64>,
    pub total_lines_added: Option<i64>,
    pub total_lines_removed: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct HookJson {
    pub hook_event_name: Option<String>,
    #[serde(default)]
    pub session_id: String,
    pub transcript_path: String,
    pub cwd: Option<String>,
    pub model: HookModel,
    pub workspace: HookWorkspace,
    pub version: Option<String>,
    pub output_style: Option<OutputStyle>,
    /// Absent or `null` before the first API call
    pub cost: Option<HookCost>,
}
