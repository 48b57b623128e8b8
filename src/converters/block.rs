use super::Capabilities;
use super::literal::to_literal;
use crate::error::Result;
use crate::models::{Block, ConditionalBlock, LoopBlock, NamedValueMap, NormalBlock, RawBlock};

impl Block {
    /// Render the block and register the capabilities it needs
    pub fn render(&self, capabilities: &mut Capabilities) -> Result<String> {
        match self {
            Block::Normal(block) => block.render(capabilities),
            Block::Conditional(block) => block.render(capabilities),
            Block::Loop(block) => block.render(capabilities),
            Block::Raw(block) => Ok(block.render()),
        }
    }

    /// Short label used in error scopes
    pub fn describe(&self) -> String {
        match self {
            Block::Normal(_) => "block".to_string(),
            Block::Conditional(block) => format!("if ({})", block.condition),
            Block::Loop(block) => format!("for ({})", block.header),
            Block::Raw(_) => "raw block".to_string(),
        }
    }
}

impl NormalBlock {
    /// Render constants, variables, requests and nested blocks in that order.
    ///
    /// Each non-empty section is followed by a blank line; an empty block
    /// renders as an empty string.
    pub fn render(&self, capabilities: &mut Capabilities) -> Result<String> {
        if self.is_empty() {
            return Ok(String::new());
        }

        let mut code = String::new();

        if !self.constants.is_empty() {
            Self::render_declarations(&mut code, "const", "constant", &self.constants)?;
        }

        if !self.variables.is_empty() {
            Self::render_declarations(&mut code, "let", "variable", &self.variables)?;
        }

        if !self.requests.is_empty() {
            for request in &self.requests {
                code.push_str(&request.render(capabilities)?);
                code.push('\n');
            }
            code.push('\n');
        }

        for block in &self.blocks {
            let block_code = block
                .render(capabilities)
                .map_err(|e| e.in_scope(block.describe()))?;
            code.push_str(&block_code);
            code.push_str("\n\n");
        }

        tracing::debug!(
            constants = self.constants.len(),
            variables = self.variables.len(),
            requests = self.requests.len(),
            blocks = self.blocks.len(),
            "rendered block"
        );

        Ok(code)
    }

    fn render_declarations(
        code: &mut String,
        keyword: &str,
        owner: &str,
        declarations: &NamedValueMap,
    ) -> Result<()> {
        for (key, value) in declarations {
            let literal = to_literal(owner, key, value)?;
            code.push_str(&format!("{} {} = {};\n", keyword, key, literal));
        }
        code.push('\n');
        Ok(())
    }
}

impl ConditionalBlock {
    /// `if (...) {...} else {...}`; the else clause is always emitted
    pub fn render(&self, capabilities: &mut Capabilities) -> Result<String> {
        let then_code = self
            .then_block
            .render(capabilities)
            .map_err(|e| e.in_scope("then branch"))?;
        let else_code = self
            .else_block
            .render(capabilities)
            .map_err(|e| e.in_scope("else branch"))?;

        Ok(format!(
            "if ({}) {{\n{}\n}} else {{\n{}\n}}",
            self.condition, then_code, else_code
        ))
    }
}

impl LoopBlock {
    pub fn render(&self, capabilities: &mut Capabilities) -> Result<String> {
        let body = self.body.render(capabilities)?;
        Ok(format!("for ({}) {{\n{}\n}}", self.header, body))
    }
}

impl RawBlock {
    pub fn render(&self) -> String {
        self.code.clone()
    }
}
