#![allow(missing_docs)]

use jsonemit::{JsonWriter, WriteError, WriterOptions};

/// Drives one representative document through the writer: nested objects,
/// container-valued array elements, escapes, an empty container, every
/// scalar kind.
fn render_document(pretty: bool) -> Result<String, WriteError> {
    let mut w = JsonWriter::with_options(String::new(), WriterOptions { pretty });
    w.begin_object()?
        .name("request")?
        .begin_object()?
        .name("filename")?
        .value("example.rs")?
        .name("options")?
        .begin_object()?
        .name("opt_level")?
        .value(2)?
        .name("features")?
        .begin_array()?
        .value("serde")?
        .value("tokio")?
        .end_array()?
        .end_object()?
        .end_object()?
        .name("snippets")?
        .begin_array()?
        .value("fn main() {}")?
        .value("println!(\"hi\")")?
        .end_array()?
        .name("mixed")?
        .begin_array()?
        .value("s")?
        .begin_object()?
        .name("k")?
        .value("v")?
        .end_object()?
        .begin_array()?
        .value("u")?
        .end_array()?
        .value(3.5)?
        .end_array()?
        .name("empty")?
        .begin_object()?
        .end_object()?
        .name("flag")?
        .value(true)?
        .end_object()?;
    assert!(w.is_complete());
    Ok(w.finish())
}

#[test]
fn snapshot_pretty_document() {
    let out = render_document(true).unwrap();
    insta::assert_snapshot!(out, @r#"
    {
        "request" : {
            "filename" : "example.rs",
            "options" : {
                "opt_level" : 2,
                "features" : [
                    "serde",
                    "tokio"
                ]
            }
        },
        "snippets" : [
            "fn main() {}",
            "println!(\"hi\")"
        ],
        "mixed" : [
            "s",
            {
                "k" : "v"
            },
            [
                "u"
            ],
            3.5
        ],
        "empty" : {
        },
        "flag" : true
    }
    "#);
}

#[test]
fn snapshot_compact_document() {
    let out = render_document(false).unwrap();
    insta::assert_snapshot!(out, @r#"{"request":{"filename":"example.rs","options":{"opt_level":2,"features":["serde","tokio"]}},"snippets":["fn main() {}","println!(\"hi\")"],"mixed":["s",{"k":"v"},["u"],3.5],"empty":{},"flag":true}"#);
}

#[test]
fn both_modes_parse_to_the_same_value() {
    let pretty: serde_json::Value =
        serde_json::from_str(&render_document(true).unwrap()).unwrap();
    let compact: serde_json::Value =
        serde_json::from_str(&render_document(false).unwrap()).unwrap();
    assert_eq!(pretty, compact);
    assert_eq!(pretty["request"]["options"]["opt_level"], 2);
    assert_eq!(pretty["mixed"][1]["k"], "v");
}

#[test]
fn both_modes_agree_modulo_whitespace() {
    let strip = |s: String| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    assert_eq!(
        strip(render_document(true).unwrap()),
        strip(render_document(false).unwrap())
    );
}
