use super::value::{NamedValueMap, ScriptValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Run configuration exported as `options`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptOptions {
    /// Number of virtual users (0 = not set)
    #[serde(default)]
    pub vus: u64,

    /// Test duration, e.g. "30s" or "5m" (empty = not set)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duration: String,

    /// Total iteration count (0 = not set)
    #[serde(default)]
    pub iterations: u64,
}

/// A named assertion run against a request's response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    /// Check name, unique within its request
    pub name: String,

    /// Predicate in JS, e.g. `(res) => res.status === 200`
    pub expression: String,
}

impl Check {
    pub fn new(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpCookie {
    pub value: String,
    #[serde(default)]
    pub replace: bool,
}

/// Optional parameters of an HTTP call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,

    /// Maximum number of redirects to follow (0 = runtime default)
    #[serde(default)]
    pub redirects: u64,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub cookies: IndexMap<String, HttpCookie>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, ScriptValue>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub tags: IndexMap<String, ScriptValue>,
}

/// An HTTP call plus the checks run against its response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpRequest {
    /// Variable name the response is bound to; unique within the script
    pub name: String,
    pub method: String,
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default)]
    pub params: RequestParams,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<Check>,
}

impl HttpRequest {
    pub fn new(
        name: impl Into<String>,
        method: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            method: method.into(),
            url: url.into(),
            body: None,
            params: RequestParams::default(),
            checks: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_params(mut self, params: RequestParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }
}

/// Kinds of network call a block can contain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    Http(HttpRequest),
}

impl Request {
    pub fn name(&self) -> &str {
        match self {
            Request::Http(req) => &req.name,
        }
    }

    pub fn checks(&self) -> &[Check] {
        match self {
            Request::Http(req) => &req.checks,
        }
    }
}

impl From<HttpRequest> for Request {
    fn from(req: HttpRequest) -> Self {
        Request::Http(req)
    }
}

/// Plain statement block.
///
/// Rendered in a fixed order:
/// 1. constant declarations
/// 2. variable declarations
/// 3. requests
/// 4. nested blocks
///
/// The block itself is not wrapped in `{}`, so it behaves like a code piece
/// spliced into its parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalBlock {
    /// `const` declarations, e.g. `{"a": 20}` becomes `const a = 20;`
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub constants: NamedValueMap,

    /// `let` declarations, e.g. `{"b": "111"}` becomes `let b = "111";`
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variables: NamedValueMap,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requests: Vec<Request>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
}

impl NormalBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constant(mut self, key: impl Into<String>, value: impl Into<ScriptValue>) -> Self {
        self.constants.insert(key.into(), value.into());
        self
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<ScriptValue>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn with_request(mut self, request: impl Into<Request>) -> Self {
        self.requests.push(request.into());
        self
    }

    pub fn with_block(mut self, block: impl Into<Block>) -> Self {
        self.blocks.push(block.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
            && self.variables.is_empty()
            && self.requests.is_empty()
            && self.blocks.is_empty()
    }
}

/// `if (condition) { ... } else { ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionalBlock {
    /// JS condition, e.g. `a === 10`
    pub condition: String,

    #[serde(default)]
    pub then_block: NormalBlock,

    /// Always rendered, even when empty
    #[serde(default)]
    pub else_block: NormalBlock,
}

/// `for (header) { ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoopBlock {
    /// JS loop header, e.g. `let i = 0; i < 100; i++`
    pub header: String,

    #[serde(default)]
    pub body: NormalBlock,
}

/// Raw JS code, emitted verbatim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    pub code: String,
}

impl RawBlock {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Normal(NormalBlock),
    Conditional(ConditionalBlock),
    Loop(LoopBlock),
    Raw(RawBlock),
}

impl Default for Block {
    fn default() -> Self {
        Block::Normal(NormalBlock::default())
    }
}

impl From<NormalBlock> for Block {
    fn from(block: NormalBlock) -> Self {
        Block::Normal(block)
    }
}

impl From<ConditionalBlock> for Block {
    fn from(block: ConditionalBlock) -> Self {
        Block::Conditional(block)
    }
}

impl From<LoopBlock> for Block {
    fn from(block: LoopBlock) -> Self {
        Block::Loop(block)
    }
}

impl From<RawBlock> for Block {
    fn from(block: RawBlock) -> Self {
        Block::Raw(block)
    }
}

/// A whole load-test description, as stored in a scenario file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub options: ScriptOptions,

    /// Import lines placed before the discovered ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    #[serde(default)]
    pub block: Block,
}
