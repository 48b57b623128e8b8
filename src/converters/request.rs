use super::literal::{string_literal, to_literal};
use super::{Capabilities, Capability};
use crate::error::Result;
use crate::models::{HttpRequest, Request};

impl Request {
    pub fn render(&self, capabilities: &mut Capabilities) -> Result<String> {
        match self {
            Request::Http(req) => req.render(capabilities),
        }
    }
}

impl HttpRequest {
    /// Render the `http.request(...)` statement followed by its check group.
    ///
    /// Without checks the second statement is empty (`;`).
    pub fn render(&self, capabilities: &mut Capabilities) -> Result<String> {
        capabilities.insert(Capability::Http);

        let params = self.render_params()?;
        let body = match self.body.as_deref() {
            Some(body) if !body.is_empty() => string_literal(body),
            _ => "null".to_string(),
        };

        let checks = if self.checks.is_empty() {
            String::new()
        } else {
            capabilities.insert(Capability::Check);
            let lines: String = self.checks.iter().map(|c| c.render()).collect();
            format!("check({}, {{\n{}}})", self.name, lines)
        };

        tracing::debug!(
            request = %self.name,
            checks = self.checks.len(),
            "rendered http request"
        );

        Ok(format!(
            "let {} = http.request({}, {}, {}, {});\n{};",
            self.name,
            string_literal(&self.method),
            string_literal(&self.url),
            body,
            params,
            checks
        ))
    }

    /// Render the params object, or `null` when nothing is set
    fn render_params(&self) -> Result<String> {
        let owner = format!("request {}", self.name);
        let param = &self.params;
        let mut fields = Vec::new();

        if let Some(auth) = param.auth.as_deref().filter(|a| !a.is_empty()) {
            fields.push(format!("  auth: {}", string_literal(auth)));
        }
        if param.redirects != 0 {
            fields.push(format!("  redirects: {}", param.redirects));
        }
        if let Some(timeout) = param.timeout.as_deref().filter(|t| !t.is_empty()) {
            fields.push(format!("  timeout: {}", string_literal(timeout)));
        }
        if !param.cookies.is_empty() {
            let cookies = to_literal(&owner, "cookies", &param.cookies)?;
            fields.push(format!("  cookies: {}", cookies));
        }
        if !param.headers.is_empty() {
            let headers = to_literal(&owner, "headers", &param.headers)?;
            fields.push(format!("  headers: {}", headers));
        }
        if !param.tags.is_empty() {
            let tags = to_literal(&owner, "tags", &param.tags)?;
            fields.push(format!("  tags: {}", tags));
        }

        if fields.is_empty() {
            return Ok("null".to_string());
        }

        let mut code = String::from("{\n");
        for field in fields {
            code.push_str(&field);
            code.push_str(",\n");
        }
        code.push('}');
        Ok(code)
    }
}
