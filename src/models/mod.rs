pub mod script;
pub mod value;

pub use script::{
    Block, Check, ConditionalBlock, HttpCookie, HttpRequest, LoopBlock, NormalBlock, RawBlock,
    Request, RequestParams, Scenario, ScriptOptions,
};
pub use value::{NamedValueMap, ScriptValue};
