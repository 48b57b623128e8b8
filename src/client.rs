//! Top-level script assembly

use crate::converters::Capabilities;
use crate::error::Result;
use crate::models::{Block, Scenario, ScriptOptions};
use crate::validation::validate_block;

/// Generates a complete k6 script from options and a root block
#[derive(Debug, Clone, Default)]
pub struct K6Client {
    pub options: ScriptOptions,
    pub block: Block,
    /// Import lines emitted before the ones discovered during rendering
    pub imports: Vec<String>,
}

impl K6Client {
    pub fn new(options: ScriptOptions, block: impl Into<Block>) -> Self {
        Self {
            options,
            block: block.into(),
            imports: Vec::new(),
        }
    }

    pub fn from_scenario(scenario: Scenario) -> Self {
        Self {
            options: scenario.options,
            block: scenario.block,
            imports: scenario.imports,
        }
    }

    /// Add an import line, e.g. `import { sleep } from 'k6';`
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// Validate and render the whole script.
    ///
    /// Layout: imports, blank line, options, blank line, then the default
    /// function wrapping the rendered root block. The client is not modified,
    /// so calling this twice gives the same script.
    pub fn generate_script(&self) -> Result<String> {
        validate_block(&self.block)?;

        let mut capabilities = Capabilities::new();
        let body = self.block.render(&mut capabilities)?;

        let imports = self.collect_imports(&capabilities);

        let mut script = String::new();
        for import in &imports {
            script.push_str(import);
            script.push('\n');
        }
        script.push('\n');
        script.push_str(&self.options.render());
        script.push_str("\n\n");
        script.push_str("export default function() {\n");
        script.push_str(&body);
        script.push('}');

        tracing::info!(
            imports = imports.len(),
            bytes = script.len(),
            "Generated k6 script"
        );

        Ok(script)
    }

    /// Declared imports first, then discovered ones; duplicates dropped
    fn collect_imports<'a>(&'a self, capabilities: &Capabilities) -> Vec<&'a str> {
        let mut imports: Vec<&str> = Vec::new();

        for import in &self.imports {
            if imports.contains(&import.as_str()) {
                tracing::warn!(import = %import, "Ignoring duplicate import");
                continue;
            }
            imports.push(import);
        }

        for line in capabilities.import_lines() {
            if !imports.contains(&line) {
                imports.push(line);
            }
        }

        imports
    }
}
