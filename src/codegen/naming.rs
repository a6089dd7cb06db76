// Identifier transformations for generated Rust items

/// `expr-or` → `ExprOr`: split on hyphens, capitalise each segment, join.
pub fn type_name(name: &str) -> String {
    name.split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Node type generated for an expression declaration: `NodeExprOr`.
pub fn node_type(name: &str) -> String {
    format!("Node{}", type_name(name))
}

/// Parse procedure generated for an expression declaration: `parse_expr_or`.
pub fn parse_fn(name: &str) -> String {
    format!("parse_{}", name.replace('-', "_"))
}

/// Variant name for alternative `index` of a choice, unique among `taken`.
pub fn variant_name(name: &str, index: usize, taken: &[String]) -> String {
    let base = type_name(name);
    let mut candidate = if base == "Self" {
        format!("{}{}", base, index)
    } else {
        base.clone()
    };

    if taken.contains(&candidate) {
        candidate = format!("{}{}", base, index);
    }
    while taken.contains(&candidate) {
        candidate.push('_');
    }
    candidate
}
