//! Implementation of the `qnn-options keys` command.

use qnn_options::options::{OptionKey, OptionKind};

/// One line per option: wire key, kind, and allowed values where closed.
pub fn cmd_keys() -> String {
    let width = OptionKey::ALL
        .iter()
        .map(|k| k.wire_key().len())
        .max()
        .unwrap_or(0);

    OptionKey::ALL
        .iter()
        .map(|key| {
            let kind = match key.kind() {
                OptionKind::Flag => "flag",
                OptionKind::Text => "text",
                OptionKind::Integer => "integer",
                OptionKind::Choice(_) => "choice",
            };
            let mut line = format!("{:width$}  {}", key.wire_key(), kind, width = width);
            if let Some(allowed) = key.kind().allowed_values() {
                line.push_str(&format!(" [{}]", allowed.join(", ")));
            }
            if key.is_shorthand() {
                line.push_str(" (shorthand)");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
