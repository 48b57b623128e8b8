use anyhow::{Context, bail};
use k6gen::{
    K6Client, loader,
    models::{
        Check, ConditionalBlock, HttpCookie, HttpRequest, LoopBlock, NormalBlock, RequestParams,
        ScriptOptions, ScriptValue,
    },
    telemetry,
};
use std::env::VarError;

const SCENARIO_ENV: &str = "K6GEN_SCENARIO";

/// Where the scenario comes from: a file named by `K6GEN_SCENARIO`, or the
/// built-in demo when the variable is unset
fn scenario_path(var: Result<String, VarError>) -> anyhow::Result<Option<String>> {
    match var {
        Ok(path) => Ok(Some(path)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => {
            bail!("{} is not valid unicode: {:?}", SCENARIO_ENV, raw)
        }
    }
}

fn demo_client() -> K6Client {
    let inner = NormalBlock::new()
        .with_constant("con1", 1)
        .with_constant("con2", "aaa")
        .with_variable("v1", vec!["1", "2"])
        .with_variable(
            "v2",
            [("v2a", ScriptValue::from("a")), ("v2b", ScriptValue::from(13))]
                .into_iter()
                .collect::<ScriptValue>(),
        );

    let mut params = RequestParams {
        timeout: Some("10s".to_string()),
        redirects: 10,
        ..Default::default()
    };
    params
        .headers
        .insert("X-MyHeader".to_string(), "k6test".into());
    params.cookies.insert(
        "my_cookie".to_string(),
        HttpCookie {
            value: "my-value".to_string(),
            replace: true,
        },
    );
    params.tags.insert("my-tag".to_string(), "tag1".into());

    let request = HttpRequest::new("test1", "GET", "https://test.k6.io")
        .with_params(params)
        .with_check(Check::new("my-check", "(res) => res.status === 200"));

    let root = inner
        .clone()
        .with_request(request)
        .with_block(ConditionalBlock {
            condition: "test1.status === 200".to_string(),
            then_block: inner.clone(),
            else_block: NormalBlock::new(),
        })
        .with_block(LoopBlock {
            header: "let i = 0; i < 2; i++".to_string(),
            body: inner,
        });

    K6Client::new(
        ScriptOptions {
            vus: 10,
            iterations: 20,
            ..Default::default()
        },
        root,
    )
}

fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let client = match scenario_path(std::env::var(SCENARIO_ENV))? {
        Some(path) => {
            let scenario = loader::load_scenario(&path)
                .with_context(|| format!("loading scenario from {}", path))?;
            K6Client::from_scenario(scenario)
        }
        None => demo_client(),
    };

    let script = client
        .generate_script()
        .context("generating k6 script")?;
    println!("{}", script);

    Ok(())
}
