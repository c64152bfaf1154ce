use clap::Parser;
use jsbuild::{JsFunction, RenderOptions};
use serde_json::Value;
use std::fs::File;
use std::io::stderr;
use std::io::stdin;
use std::io::stdout;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsbuild", about = "Render a JSON syntax tree as JavaScript")]
struct Cli {
  /// JSON syntax tree to render; omit for stdin.
  #[arg(short, long)]
  input: Option<PathBuf>,

  /// Output destination; omit for stdout.
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Initial binding declared before the body, as NAME=JSON. May be repeated.
  #[arg(long = "bind", value_name = "NAME=JSON", value_parser = parse_binding)]
  bindings: Vec<(String, Value)>,

  /// Emit render events as JSON on stderr. Filter with RUST_LOG.
  #[arg(long)]
  trace: bool,
}

fn parse_binding(raw: &str) -> Result<(String, Value), String> {
  let (name, json) = raw
    .split_once('=')
    .ok_or_else(|| format!("expected NAME=JSON, got `{raw}`"))?;
  if name.is_empty() {
    return Err("binding name is empty".to_string());
  }
  let value =
    serde_json::from_str(json).map_err(|err| format!("invalid JSON for `{name}`: {err}"))?;
  Ok((name.to_string(), value))
}

fn init_tracing(enabled: bool) {
  if !enabled {
    return;
  }
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE)
    .with_writer(stderr)
    .json()
    .with_ansi(false)
    .try_init();
}

fn exit_with_error(name: &str, message: impl std::fmt::Display) -> ! {
  eprintln!("{name}: {message}");
  process::exit(1);
}

fn main() {
  let args = Cli::parse();
  init_tracing(args.trace);
  let input_name = args
    .input
    .as_ref()
    .map(|p| p.to_string_lossy().into_owned())
    .unwrap_or_else(|| "<stdin>".to_string());
  let mut input_file: Box<dyn Read> = match args.input.as_ref() {
    Some(p) => match File::open(p) {
      Ok(f) => Box::new(f),
      Err(err) => exit_with_error(&input_name, format!("failed to open: {err}")),
    },
    None => Box::new(stdin()),
  };
  let mut source = String::new();
  if let Err(err) = input_file.read_to_string(&mut source) {
    exit_with_error(&input_name, format!("failed to read input: {err}"));
  }
  let module = match jsbuild_ast::from_json(&source) {
    Ok(module) => module,
    Err(err) => exit_with_error(&input_name, err),
  };
  let options = args
    .bindings
    .into_iter()
    .fold(RenderOptions::new(), |options, (name, value)| {
      options.with_binding(name, value)
    });
  let rendered = JsFunction::new(module, options).and_then(|func| func.render());
  let js = match rendered {
    Ok(js) => js,
    Err(err) => exit_with_error(&input_name, err),
  };
  let write_result = match args.output.as_ref() {
    Some(p) => File::create(p)
      .and_then(|mut file| file.write_all(js.as_bytes()))
      .map_err(|err| (p.display().to_string(), err)),
    None => stdout()
      .write_all(js.as_bytes())
      .map_err(|err| ("<stdout>".to_string(), err)),
  };
  if let Err((dest, err)) = write_result {
    exit_with_error(&dest, format!("failed to write output: {err}"));
  }
}

#[cfg(test)]
mod tests {
  use super::parse_binding;
  use serde_json::json;

  #[test]
  fn test_parse_binding() {
    assert_eq!(
      parse_binding("size={\"w\": [1, 2]}").unwrap(),
      ("size".to_string(), json!({"w": [1, 2]}))
    );
    // Only the first `=` separates the name.
    assert_eq!(
      parse_binding("eq=\"a=b\"").unwrap(),
      ("eq".to_string(), json!("a=b"))
    );
    assert!(parse_binding("novalue").is_err());
    assert!(parse_binding("=1").is_err());
    assert!(parse_binding("x=nope").is_err());
  }
}
