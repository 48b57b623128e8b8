use super::literal::string_literal;
use crate::models::Check;

impl Check {
    /// One entry of a `check(...)` object literal, e.g.
    /// `  "status is 200": (res) => res.status === 200,`
    ///
    /// The expression is emitted verbatim.
    pub fn render(&self) -> String {
        format!("  {}: {},\n", string_literal(&self.name), self.expression)
    }
}
