// Shared prompt-building utilities.
// Each panel's templates live in counsel::prompts; this file holds the cross-cutting helper.

/// Substitutes `{key}` placeholders in `template` with the matching value.
///
/// Single pass: text inserted from a value is never scanned again, so user input
/// containing something like `{background}` is passed through verbatim.
/// Placeholders without a matching key are left untouched.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match substituted {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_all_occurrences() {
        let out = fill_template("{a} and {b}, again {a}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x and y, again x");
    }

    #[test]
    fn test_fill_template_is_single_pass() {
        let out = fill_template("Hi {name}: {bio}", &[("name", "{bio}"), ("bio", "likes {name}")]);
        assert_eq!(out, "Hi {bio}: likes {name}");
    }

    #[test]
    fn test_fill_template_leaves_unknown_and_unbalanced_braces() {
        let out = fill_template("{unknown} {a} {", &[("a", "1")]);
        assert_eq!(out, "{unknown} 1 {");
    }
}
