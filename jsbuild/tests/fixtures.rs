use jsbuild::render_body;
use similar::ChangeTag;
use similar::TextDiff;
use std::env::var;
use std::fs::read_dir;
use std::fs::read_to_string;
use std::fs::write;
use std::path::Path;

// Each `fixtures/NAME.json` is a serialized module; `fixtures/NAME.js` is its expected rendering.
#[test]
fn test_fixtures() {
  let base_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
  let mut names = read_dir(&base_dir)
    .unwrap()
    .map(|entry| entry.unwrap().path())
    .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
    .collect::<Vec<_>>();
  names.sort();
  assert!(!names.is_empty(), "no fixtures in {}", base_dir.display());
  for json_path in names {
    let js_path = json_path.with_extension("js");
    println!("Testing {}...", json_path.display());
    let module = jsbuild_ast::from_json(&read_to_string(&json_path).unwrap()).unwrap();
    let actual = render_body(&module.stx.body, Vec::<String>::new()).unwrap();
    let expected = read_to_string(&js_path).unwrap_or_default();
    let expected = expected.strip_suffix('\n').unwrap_or(&expected);
    if actual == expected {
      continue;
    }
    if var("JSBUILD_REGENERATE_FIXTURES").is_ok_and(|v| v == "1") {
      write(&js_path, format!("{actual}\n")).unwrap();
      continue;
    }
    let mut msg = format!("Failed {}, got:\n", json_path.display());
    let diff = TextDiff::from_lines(expected, actual.as_str());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      msg.push_str(sign);
      msg.push_str(change.as_str().unwrap());
      if change.missing_newline() {
        msg.push('\n');
      }
    }
    panic!("{}", msg);
  }
}
