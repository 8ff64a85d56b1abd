/// `|escaped text|` padded to a fixed width so trace lines stay in columns
pub fn formatter_str(c: &str) -> String {
    let s: String = c.chars().take(33).collect::<String>().escape_default().to_string();
    let s = s.replace("\\\"", "\"");
    let s = s.replace("\\\'", "\'");
    let s: String = s.chars().take(33).collect();
    format!("{:<35}", "|".to_string() + &s + "|")
}

/// `core::option::Option<f64>` -> `Option<f64>`
pub fn type_suffix(type_name: &str) -> &str {
    let base = type_name.split('<').next().unwrap_or(type_name);
    match base.rfind("::") {
        Some(i) => &type_name[i + 2..],
        None => type_name,
    }
}
