#![no_main]
//! Drives random operation sequences through the writer. Illegal calls must
//! fail cleanly (no panic); any sequence the writer accepts through to the
//! terminal state must produce text serde_json parses.

use arbitrary::Arbitrary;
use jsonemit::{JsonWriter, WriterOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    BeginObject,
    BeginArray,
    EndObject,
    EndArray,
    Name(String),
    Str(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
}

fuzz_target!(|input: (bool, Vec<Op>)| {
    let (pretty, ops) = input;
    let mut writer = JsonWriter::with_options(String::new(), WriterOptions { pretty });

    for op in &ops {
        let result = match op {
            Op::BeginObject => writer.begin_object().map(drop),
            Op::BeginArray => writer.begin_array().map(drop),
            Op::EndObject => writer.end_object().map(drop),
            Op::EndArray => writer.end_array().map(drop),
            Op::Name(name) => writer.name(name).map(drop),
            Op::Str(s) => writer.value(s).map(drop),
            Op::Bool(b) => writer.value(*b).map(drop),
            Op::Int(n) => writer.value(*n).map(drop),
            Op::UInt(n) => writer.value(*n).map(drop),
            Op::Float(x) => writer.value(*x).map(drop),
        };
        if result.is_err() {
            // The writer is poisoned after an error; stop driving it.
            return;
        }
    }

    if writer.is_complete() {
        let out = writer.finish();
        serde_json::from_str::<serde_json::Value>(&out)
            .expect("completed document must be valid JSON");
    }
});
