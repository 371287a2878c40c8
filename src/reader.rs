use crate::{ast::ParseNode, value::Value};

/// Translates a generic parse-tree node into a value tree. This is pure
/// tree-to-tree work; no evaluation happens here, and every failure is
/// encoded as an `Error` value rather than a host error.
pub fn read(node: &ParseNode) -> Value {
    if node.tag.contains("number") {
        return read_number(node);
    }
    if node.tag.contains("symbol") {
        return Value::symbol(node.contents.clone());
    }
    if node.tag.contains("qexpr") {
        return Value::qexpr(read_children(node));
    }
    // The root reads as an S-expression so a whole line reduces as one
    // expression.
    if node.tag.contains("sexpr") || node.tag.contains("program") {
        return Value::sexpr(read_children(node));
    }
    Value::error("unknown node")
}

fn read_children(node: &ParseNode) -> Vec<Value> {
    node.children
        .iter()
        .filter(|child| !child.is_delimiter() && !child.tag.contains("regex"))
        .map(read)
        .collect()
}

fn read_number(node: &ParseNode) -> Value {
    match node.contents.parse::<i64>() {
        Ok(number) => Value::number(number),
        Err(_) => Value::error("invalid number"),
    }
}
