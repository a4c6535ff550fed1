// Portal documents and environment maps used across tests.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Representative portal document: two departments, shared apps, app store,
/// color overrides and every contact field style.
pub const SAMPLE_PORTAL_YAML: &str = r##"
title: Acme AI Portal
company:
  name: Acme
  logo_url: assets/images/acme.svg
  theme_color: "#336699"
user:
  name: Jane Doe
  role: Analyst
  department: Finance
departments:
  - name: Finance
    icon: fa-solid fa-coins
    description: Forecasting and spend analysis
    apps:
      - name: Financial Forecasting
        description: Predict quarterly revenue
        icon: fa-solid fa-chart-line
        url: https://forecast.acme.example
        contact: fin-ai@acme.example
      - name: Expense Analysis
        description: Flag unusual spend
        contact_url: https://wiki.acme.example/expense
  - name: Human Resources
    description: People analytics
    apps:
      - name: Resume Screening
        description: Rank candidates
        url: "  "
        email: hr-ai@acme.example
shared:
  title: Everyone
  apps:
    - name: Chatbot Assistant
      description: General purpose assistant
      url: /chat
app_store:
  apps:
    - name: Image Generator
      description: Create images from prompts
department_colors:
  Finance: "#43A047"
  default: "#999999"
app_icon_colors:
  Expense Analysis: "#1B5E20"
"##;

/// Write `contents` as `ai-portal.yaml` in a fresh temp dir.
/// Keep the `TempDir` alive for as long as the file is needed.
pub fn write_portal_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("ai-portal.yaml");
    fs::write(&path, contents).expect("Failed to write portal fixture");
    (dir, path)
}

/// Lookup closure over a fixed set of environment pairs
pub fn env_lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}
