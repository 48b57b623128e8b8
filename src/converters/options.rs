use super::literal::string_literal;
use crate::models::ScriptOptions;

impl ScriptOptions {
    /// Render the `export const options = {...}` literal.
    ///
    /// Only non-default fields are emitted, in the order vus, duration,
    /// iterations.
    pub fn render(&self) -> String {
        let mut lines = vec!["export const options = {".to_string()];

        if self.vus != 0 {
            lines.push(format!("  vus: {},", self.vus));
        }
        if !self.duration.is_empty() {
            lines.push(format!("  duration: {},", string_literal(&self.duration)));
        }
        if self.iterations != 0 {
            lines.push(format!("  iterations: {},", self.iterations));
        }

        lines.push("}".to_string());
        lines.join("\n")
    }
}
