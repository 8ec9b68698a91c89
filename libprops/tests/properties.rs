//! Public API tests for the properties store.

use std::fs;
use std::io::Cursor;

use indexmap::IndexMap;
use libprops::{Options, Properties, PropertiesBuilder, PropertiesError, Value};
use pretty_assertions::assert_eq;
use test_log::test;

fn lines(input: &[&str]) -> Vec<String> {
    input.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_empty() {
    let props = Properties::from_lines(Vec::<&str>::new());
    assert!(props.data().is_empty());
    assert!(props.emit_vec(false).is_empty());
}

#[test]
fn test_singleton() {
    let input = ["Foo"];
    let props = Properties::from_lines(input);
    let data = props.data();
    assert_eq!(data["Foo"], Value::Present);
    assert_eq!(data["Foo"].as_bool(), Some(true));
    assert_eq!(props.emit_vec(false), lines(&input));
}

#[test]
fn test_key_value_pair() {
    let props = Properties::from_lines(["Foo=Bar"]);
    let data = props.data();
    assert_eq!(data["Foo"], Value::from("Bar"));
    assert!(!data["Foo"].is_present());
}

#[test]
fn test_singleton_cross_key_value_pair() {
    let input = ["Foo=Bar", "Qux"];
    let props = Properties::from_lines(input);
    let expected: IndexMap<String, Value> = [
        ("Foo".to_string(), Value::from("Bar")),
        ("Qux".to_string(), Value::Present),
    ]
    .into_iter()
    .collect();
    assert_eq!(props.data(), expected);
    assert_eq!(props.keys().collect::<Vec<_>>(), vec!["Foo", "Qux"]);
    assert_eq!(props.emit_vec(false), lines(&input));
}

#[test]
fn test_key_value_pair_mix_singleton() {
    let input = ["Foo=Bar", "Foo"];
    let props = Properties::from_lines(input);
    assert_eq!(props.data()["Foo"], Value::from("Bar"));
    assert_eq!(
        props.all_data()["Foo"],
        vec![Value::from("Bar"), Value::Present]
    );
    assert_eq!(props.emit_vec(false), lines(&input));
}

#[test]
fn test_singleton_mix_key_value_pair() {
    let input = ["Foo", "Foo=Bar"];
    let props = Properties::from_lines(input);
    assert_eq!(props.data()["Foo"], Value::Present);
    assert_eq!(props.get("Foo"), None);
    assert_eq!(
        props.all_data()["Foo"],
        vec![Value::Present, Value::from("Bar")]
    );
    assert_eq!(props.emit_vec(false), lines(&input));
}

#[test]
fn test_spaces() {
    let props = Properties::from_lines([" Foo = Bar "]);
    assert_eq!(props.get("Foo"), Some("Bar"));
    assert_eq!(props.emit_vec(true), vec!["Foo = Bar"]);
    assert_eq!(props.emit_vec(false), vec!["Foo=Bar"]);
}

#[test]
fn test_comments() {
    let input = ["# Foo = Bar "];
    let props = Properties::from_lines(input);
    assert!(props.data().is_empty());
    assert_eq!(props.emit_vec(false), lines(&input));
}

#[test]
fn test_multi_char_comments() {
    let input = ["// Foo = Bar "];
    let props = PropertiesBuilder::new().comment(Some("//")).build(input);
    assert!(props.data().is_empty());
    assert_eq!(props.emit_vec(false), lines(&input));
}

#[test]
fn test_no_comments_in_key() {
    let props = Properties::from_lines([" Foo# = Bar "]);
    assert_eq!(props.get("Foo#"), Some("Bar"));
    assert_eq!(props.emit_vec(false), vec!["Foo#=Bar"]);
}

#[test]
fn test_no_comments_in_value() {
    let props = Properties::from_lines([" Foo = #Bar "]);
    assert_eq!(props.get("Foo"), Some("#Bar"));
    assert_eq!(props.emit_vec(false), vec!["Foo=#Bar"]);
}

#[test]
fn test_no_comments_after_value() {
    let props = Properties::from_lines([" Foo = Bar#Qux "]);
    assert_eq!(props.get("Foo"), Some("Bar#Qux"));
    assert_eq!(props.emit_vec(false), vec!["Foo=Bar#Qux"]);
}

#[test]
fn test_key_only_predicates() {
    let empty = Properties::from_lines(Vec::<&str>::new());
    assert!(!empty.any_is_singleton());
    assert!(empty.all_are_singleton());

    let comments_only = Properties::from_lines(["# a", ""]);
    assert!(!comments_only.any_is_singleton());
    assert!(comments_only.all_are_singleton());

    let none = Properties::from_lines(["Foo", "Bar"]);
    assert!(none.any_is_singleton());
    assert!(none.all_are_singleton());

    let some1 = Properties::from_lines(["Foo=Qux", "Bar"]);
    assert!(some1.any_is_singleton());
    assert!(!some1.all_are_singleton());

    let some2 = Properties::from_lines(["Foo", "Bar=Qux"]);
    assert!(some2.any_is_singleton());
    assert!(!some2.all_are_singleton());

    let all = Properties::from_lines(["Foo=Qux", "Bar=Qux"]);
    assert!(!all.any_is_singleton());
    assert!(!all.all_are_singleton());
}

#[test]
fn test_comment_singleton_pair_mix() {
    let input = ["#Foo=Bar", "Qux", "Corge=Grault", "#Foo", "Qux=Bar", "Corge"];
    let props = Properties::from_lines(input);
    assert_eq!(props.emit_vec(false), lines(&input));
}

#[test]
fn test_case_insensitive_aliasing() {
    let input = ["FoO=Bar", "fOo=Qux"];
    let props = PropertiesBuilder::new().case_insensitive(true).build(input);
    assert_eq!(props.get("foO"), Some("Bar"));
    assert_eq!(
        props.get_all("FOo"),
        &[Value::from("Bar"), Value::from("Qux")]
    );
    assert_eq!(props.keys().collect::<Vec<_>>(), vec!["FoO"]);
    assert_eq!(props.emit_vec(false), vec!["FoO=Bar", "FoO=Qux"]);
}

#[test]
fn test_collapse_on_set() {
    let mut props = Properties::from_lines(["Foo=1", "Bar=2", "Foo=3"]);
    props.set("Foo", Some("4"));
    assert_eq!(props.get_all("Foo"), &[Value::from("4")]);
    assert_eq!(props.emit_vec(false), vec!["Foo=4", "Bar=2"]);
}

#[test]
fn test_set_then_emit() {
    let mut props = Properties::from_contents("# header\na=1\nb=2");
    props.set("b", None);
    props.set_with_comments("c", Some("3"), ["added later"]);
    props.set_with_comments("a", Some("10"), ["first key"]);
    assert_eq!(
        props.emit_vec(true),
        vec![
            "# header",
            "# first key",
            "a = 10",
            "b",
            "# added later",
            "c = 3"
        ]
    );
}

#[test]
fn test_comments_survive_reparse() {
    let mut props = Properties::from_lines(["a=1"]);
    props.set_with_comments("a", Some("2"), ["note"]);
    let reparsed = Properties::from_contents(&props.to_string());
    assert_eq!(reparsed.emit_vec(false), vec!["# note", "a=2"]);
    assert_eq!(reparsed.get("a"), Some("2"));
}

#[test]
fn test_custom_syntax_round_trip() {
    let input = [
        "; database",
        "host: localhost",
        "port :5432",
        "url: http://example.com",
    ];
    let props = PropertiesBuilder::new()
        .separator(":")
        .comment(Some(";"))
        .escape(None)
        .build(input);
    assert_eq!(props.get("url"), Some("http://example.com"));
    assert_eq!(props.get("port"), Some("5432"));
    assert_eq!(
        props.emit_vec(false),
        vec![
            "; database",
            "host:localhost",
            "port:5432",
            "url:http://example.com"
        ]
    );
}

#[test]
fn test_escaped_separator_round_trip() {
    let input = ["key\\=with\\=equals=value", "lone\\=key"];
    let props = Properties::from_lines(input);
    assert_eq!(props.get("key\\=with\\=equals"), Some("value"));
    assert_eq!(props.get_all("lone\\=key"), &[Value::Present]);
    assert_eq!(props.emit_vec(false), lines(&input));
}

#[test]
fn test_with_options() {
    let options = Options {
        separator: "->".to_string(),
        ..Options::default()
    };
    let props = Properties::with_options(["a -> b", "c->d->e"], options);
    assert_eq!(props.get("a"), Some("b"));
    assert_eq!(props.get("c"), Some("d->e"));
    assert_eq!(props.options().separator, "->");
    assert_eq!(props.emit_vec(true), vec!["a -> b", "c -> d->e"]);
}

#[test]
fn test_build_from_reader() {
    let props = PropertiesBuilder::new()
        .build_from_reader(Cursor::new("a=1\r\nb\r\n"))
        .unwrap();
    assert_eq!(props.emit_vec(false), vec!["a=1", "b"]);
}

#[test]
fn test_try_build_stops_at_error() {
    let input = vec![
        Ok("a=1".to_string()),
        Err(PropertiesError::Read {
            line: 2,
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad"),
        }),
    ];
    let err = PropertiesBuilder::new().try_build(input).unwrap_err();
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("libprops-{}.properties", std::process::id()));
    fs::write(&path, "# file\nname = demo\r\nflag\n").unwrap();

    let props = Properties::from_file(&path).unwrap();
    assert_eq!(props.get("name"), Some("demo"));
    assert_eq!(props.emit_vec(false), vec!["# file", "name=demo", "flag"]);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_from_missing_file() {
    let err = Properties::from_file("/nonexistent/libprops/missing.properties").unwrap_err();
    assert!(matches!(err, PropertiesError::Open { .. }));
    assert!(err.to_string().starts_with("Cannot open /nonexistent/libprops/missing.properties"));
}
