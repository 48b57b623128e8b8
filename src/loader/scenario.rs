use crate::error::{K6GenError, Result};
use crate::models::Scenario;
use std::fs;
use std::path::Path;

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Parse a scenario from YAML text (JSON is valid YAML too)
pub fn parse_scenario(content: &str) -> Result<Scenario> {
    Ok(serde_yaml::from_str(content)?)
}

/// Load a scenario from a YAML or JSON file
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        K6GenError::ScenarioLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    let scenario = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        parse_scenario(&content)?
    };

    tracing::debug!(path = %path.display(), "Loaded scenario");
    Ok(scenario)
}

/// Save a scenario; `.json` paths get JSON, anything else YAML
pub fn save_scenario<P: AsRef<Path>>(path: P, scenario: &Scenario) -> Result<()> {
    let path = path.as_ref();

    let content = if is_json(path) {
        serde_json::to_string_pretty(scenario)?
    } else {
        serde_yaml::to_string(scenario)?
    };

    fs::write(path, content).map_err(|e| {
        K6GenError::ScenarioLoadError(format!("Failed to write file {}: {}", path.display(), e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, Request, ScriptValue};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_scenario() {
        let yaml = r#"
options:
  vus: 10
  duration: 30s
imports:
  - "import { sleep } from 'k6';"
block:
  type: normal
  constants:
    base: https://test.k6.io
  requests:
    - type: http
      name: home
      method: GET
      url: https://test.k6.io
      params:
        timeout: 10s
        headers:
          X-MyHeader: k6test
      checks:
        - name: status is 200
          expression: "(res) => res.status === 200"
  blocks:
    - type: conditional
      condition: home.status === 200
      then_block:
        variables:
          ok: true
    - type: loop
      header: let i = 0; i < 2; i++
    - type: raw
      code: sleep(1);
"#;

        let scenario = parse_scenario(yaml).unwrap();

        assert_eq!(scenario.options.vus, 10);
        assert_eq!(scenario.options.duration, "30s");
        assert_eq!(scenario.options.iterations, 0);
        assert_eq!(scenario.imports.len(), 1);

        let Block::Normal(root) = &scenario.block else {
            panic!("expected a normal root block");
        };
        assert_eq!(root.constants["base"], ScriptValue::from("https://test.k6.io"));
        let Request::Http(home) = &root.requests[0];
        assert_eq!(home.name, "home");
        assert_eq!(home.params.timeout.as_deref(), Some("10s"));
        assert_eq!(home.checks[0].name, "status is 200");
        assert_eq!(root.blocks.len(), 3);
        assert!(matches!(root.blocks[0], Block::Conditional(_)));
        assert!(matches!(root.blocks[1], Block::Loop(_)));
        assert!(matches!(root.blocks[2], Block::Raw(_)));
    }

    #[test]
    fn test_u64_max_constant_round_trips() {
        let yaml = r#"
block:
  type: normal
  constants:
    big: 18446744073709551615
"#;
        let scenario = parse_scenario(yaml).unwrap();

        let script = crate::K6Client::from_scenario(scenario.clone())
            .generate_script()
            .unwrap();
        assert!(
            script.contains("const big = 18446744073709551615;"),
            "unexpected script: {script}"
        );

        let output_file = NamedTempFile::new().unwrap();
        save_scenario(output_file.path(), &scenario).unwrap();
        let saved = load_scenario(output_file.path()).unwrap();
        assert_eq!(saved, scenario);
    }

    #[test]
    fn test_parse_unknown_block_type() {
        let yaml = r#"
block:
  type: while
  code: x
"#;
        let result = parse_scenario(yaml);
        assert!(matches!(result, Err(K6GenError::YamlError(_))));
    }

    #[test]
    fn test_load_malformed_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"{ \"block\": ").unwrap();

        let result = load_scenario(file.path());
        assert!(matches!(result, Err(K6GenError::JsonError(_))));
    }

    #[test]
    fn test_load_json_file() {
        let json = r#"{
  "options": { "iterations": 5 },
  "block": { "type": "raw", "code": "console.log(1);" }
}"#;
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let scenario = load_scenario(file.path()).unwrap();

        assert_eq!(scenario.options.iterations, 5);
        assert!(matches!(scenario.block, Block::Raw(_)));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_scenario("/nonexistent/scenario.yaml");
        assert!(matches!(result, Err(K6GenError::ScenarioLoadError(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let yaml = r#"
options:
  vus: 2
block:
  type: normal
  variables:
    v2:
      v2a: a
      v2b: 13
"#;
        let mut input_file = NamedTempFile::new().unwrap();
        input_file.write_all(yaml.as_bytes()).unwrap();
        let scenario = load_scenario(input_file.path()).unwrap();

        let output_file = NamedTempFile::new().unwrap();
        let output_path = output_file.path().to_path_buf();
        save_scenario(&output_path, &scenario).unwrap();

        let saved = load_scenario(&output_path).unwrap();
        assert_eq!(saved, scenario);
    }
}
