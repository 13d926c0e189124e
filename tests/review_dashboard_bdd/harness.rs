//! Block payloads served by the mock review backend.

use serde_json::{Value, json};

pub(crate) fn block_json(id: &str, content: &str) -> Value {
    json!({
        "id": id,
        "type": "paragraph",
        "content": content,
        "page": 1
    })
}

pub(crate) fn numbered_block_json(count: usize) -> Vec<Value> {
    (1..=count)
        .map(|index| block_json(&format!("b-{index}"), &format!("Paragraph {index}")))
        .collect()
}
