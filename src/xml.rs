//! XML request/response codec
//!
//! The gateway speaks an XML dialect of nested key-value trees: map keys
//! become dasherized element names, arrays become `type="array"` containers
//! of `<item>` children, and non-string scalars carry a `type` attribute
//! (`integer`, `decimal`, `boolean`, `nil`) so decoding can restore the
//! original value. A parameter map encoded with [`to_xml`] and decoded with
//! [`from_xml`] round-trips key-for-key.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde_json::{Map, Number, Value};

use crate::error::{Error, Result};

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Serialize a parameter map to an XML document.
///
/// Each top-level key becomes a root element; gateway requests use exactly
/// one.
///
/// # Errors
///
/// Returns [`Error::Xml`] if `value` is not a map.
pub fn to_xml(value: &Value) -> Result<String> {
    let Value::Object(map) = value else {
        return Err(Error::Xml(
            "request parameters must be a key-value map".to_string(),
        ));
    };

    let mut out = String::from(XML_DECL);
    for (key, child) in map {
        write_element(&mut out, key, child, 0);
    }
    Ok(out)
}

/// Decode an XML document into a nested [`Value`] map.
///
/// The result maps each root element name (underscored) to its decoded
/// subtree, mirroring [`to_xml`].
///
/// # Errors
///
/// Returns [`Error::Xml`] on malformed XML or on scalar text that does not
/// match its declared `type` attribute.
pub fn from_xml(input: &str) -> Result<Value> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    // The bottom frame collects root elements.
    let mut stack = vec![Frame::root()];

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                stack.push(Frame::open(&start)?);
            }
            Ok(Event::Empty(start)) => {
                let value = Frame::open(&start)?.finish()?;
                attach(&mut stack, value)?;
            }
            Ok(Event::Text(text)) => {
                let text = text
                    .unescape()
                    .map_err(|e| Error::Xml(e.to_string()))?;
                frame_mut(&mut stack)?.text.push_str(&text);
            }
            Ok(Event::CData(data)) => {
                let text = String::from_utf8_lossy(&data).into_owned();
                frame_mut(&mut stack)?.text.push_str(&text);
            }
            Ok(Event::End(_)) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| Error::Xml("unbalanced closing tag".to_string()))?;
                let value = frame.finish()?;
                attach(&mut stack, value)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // declaration, comments, processing instructions
            Err(e) => return Err(Error::Xml(e.to_string())),
        }
    }

    let root = stack
        .pop()
        .ok_or_else(|| Error::Xml("empty document".to_string()))?;
    if !stack.is_empty() {
        return Err(Error::Xml("unclosed element".to_string()));
    }

    let mut map = Map::new();
    for (name, value) in root.children {
        map.insert(name, value);
    }
    Ok(Value::Object(map))
}

fn write_element(out: &mut String, key: &str, value: &Value, depth: usize) {
    let name = dasherize(key);
    let pad = "  ".repeat(depth);

    match value {
        Value::Null => out.push_str(&format!("{pad}<{name} type=\"nil\"/>\n")),
        Value::Bool(b) => {
            out.push_str(&format!("{pad}<{name} type=\"boolean\">{b}</{name}>\n"));
        }
        Value::Number(n) => {
            let kind = if n.is_f64() { "decimal" } else { "integer" };
            out.push_str(&format!("{pad}<{name} type=\"{kind}\">{n}</{name}>\n"));
        }
        Value::String(s) => {
            out.push_str(&format!("{pad}<{name}>{}</{name}>\n", escape(s)));
        }
        Value::Array(items) => {
            out.push_str(&format!("{pad}<{name} type=\"array\">\n"));
            for item in items {
                write_element(out, "item", item, depth + 1);
            }
            out.push_str(&format!("{pad}</{name}>\n"));
        }
        Value::Object(map) => {
            out.push_str(&format!("{pad}<{name}>\n"));
            for (child_key, child) in map {
                write_element(out, child_key, child, depth + 1);
            }
            out.push_str(&format!("{pad}</{name}>\n"));
        }
    }
}

fn dasherize(key: &str) -> String {
    key.replace('_', "-")
}

fn underscore(name: &str) -> String {
    name.replace('-', "_")
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// One element being decoded: its underscored name, declared type, collected
/// text, and decoded children in document order.
struct Frame {
    name: String,
    kind: Option<String>,
    text: String,
    children: Vec<(String, Value)>,
}

impl Frame {
    fn root() -> Self {
        Frame {
            name: String::new(),
            kind: None,
            text: String::new(),
            children: Vec::new(),
        }
    }

    fn open(start: &quick_xml::events::BytesStart<'_>) -> Result<Self> {
        let name = underscore(&String::from_utf8_lossy(start.name().as_ref()));
        let mut kind = None;
        for attr in start.attributes() {
            let attr = attr.map_err(|e| Error::Xml(e.to_string()))?;
            if attr.key.as_ref() == b"type" {
                kind = Some(String::from_utf8_lossy(&attr.value).into_owned());
            }
        }
        Ok(Frame {
            name,
            kind,
            text: String::new(),
            children: Vec::new(),
        })
    }

    fn finish(self) -> Result<(String, Value)> {
        let Frame {
            name,
            kind,
            text,
            children,
        } = self;

        let value = match kind.as_deref() {
            Some("array") => Value::Array(children.into_iter().map(|(_, v)| v).collect()),
            Some("nil") => Value::Null,
            Some("integer") => {
                let n = text.parse::<i64>().map_err(|_| {
                    Error::Xml(format!("invalid integer '{text}' in element '{name}'"))
                })?;
                Value::Number(Number::from(n))
            }
            Some("decimal") => {
                let n = text.parse::<f64>().ok().and_then(Number::from_f64).ok_or_else(
                    || Error::Xml(format!("invalid decimal '{text}' in element '{name}'")),
                )?;
                Value::Number(n)
            }
            Some("boolean") => {
                let b = text.parse::<bool>().map_err(|_| {
                    Error::Xml(format!("invalid boolean '{text}' in element '{name}'"))
                })?;
                Value::Bool(b)
            }
            _ if !children.is_empty() => {
                let mut map = Map::new();
                for (child_name, child) in children {
                    map.insert(child_name, child);
                }
                Value::Object(map)
            }
            _ => Value::String(text),
        };

        Ok((name, value))
    }
}

fn frame_mut(stack: &mut [Frame]) -> Result<&mut Frame> {
    stack
        .last_mut()
        .ok_or_else(|| Error::Xml("text outside of any element".to_string()))
}

fn attach(stack: &mut [Frame], child: (String, Value)) -> Result<()> {
    frame_mut(stack)?.children.push(child);
    Ok(())
}
