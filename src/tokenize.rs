/// Splits one line of the source export into trimmed fields.
///
/// Quote handling is a deliberate subset of CSV: every `"` toggles the
/// quote state and is consumed, a `,` only terminates a field outside
/// quotes, and fields are trimmed unconditionally. The upstream export
/// never escapes quotes by doubling, so no such escape exists here.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            split_line("a, b ,c")
        );
    }

    #[test]
    fn keeps_comma_inside_quotes() {
        assert_eq!(vec!["Fıstık, Tuzsuz".to_string()], split_line("\"Fıstık, Tuzsuz\""));
    }

    #[test]
    fn mixes_quoted_and_bare_fields() {
        assert_eq!(
            vec!["pb-1".to_string(), "Ezme, 350g".to_string(), "120".to_string()],
            split_line("pb-1,\"Ezme, 350g\",120")
        );
    }

    #[test]
    fn trailing_comma_yields_empty_field() {
        assert_eq!(vec!["a".to_string(), String::new()], split_line("a,"));
    }

    #[test]
    fn trims_inside_quotes() {
        assert_eq!(vec!["boşluklu".to_string()], split_line("\"  boşluklu  \""));
    }
}
