//! Post-diff filters for [`crate::rdf_compare`].

use fhirrdf_graph::{iris, Graph, Term, Triple};

/// Treats numerically equal `xsd:decimal` literals as equal.
///
/// A statement only in `first` whose decimal object equals (by value) a
/// decimal object of the same subject and predicate only in `second` is
/// moved into `both`, and its counterpart dropped from `second`.
pub fn decimal_filter(both: &mut Graph, first: &mut Graph, second: &mut Graph) {
    let candidates: Vec<(Triple, String)> = first
        .iter()
        .filter_map(|t| decimal_value(&t.object).map(|v| (t.clone(), v)))
        .collect();
    for (triple, value) in candidates {
        let counterpart = second
            .objects(&triple.subject, &triple.predicate)
            .find(|o| decimal_value(o).as_deref() == Some(value.as_str()))
            .cloned();
        let Some(counterpart) = counterpart else {
            continue;
        };
        second.remove(&Triple::new(
            triple.subject.clone(),
            triple.predicate.clone(),
            counterpart,
        ));
        first.remove(&triple);
        both.insert_triple(triple);
    }
}

fn decimal_value(term: &Term) -> Option<String> {
    let literal = term.as_literal()?;
    if literal.datatype.as_deref() != Some(iris::XSD_DECIMAL) {
        return None;
    }
    canonical_decimal(&literal.lexical)
}

/// Canonical spelling of a decimal: no leading or trailing zeros, no sign
/// on zero. `None` if `text` is not a decimal.
fn canonical_decimal(text: &str) -> Option<String> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let int = match int.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let frac = frac.trim_end_matches('0');
    let magnitude = if frac.is_empty() {
        int.to_owned()
    } else {
        format!("{int}.{frac}")
    };
    Some(if negative && magnitude != "0" {
        format!("-{magnitude}")
    } else {
        magnitude
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_forms() {
        assert_eq!(canonical_decimal("2.00").as_deref(), Some("2"));
        assert_eq!(canonical_decimal("2.0").as_deref(), Some("2"));
        assert_eq!(canonical_decimal("002.50").as_deref(), Some("2.5"));
        assert_eq!(canonical_decimal(".5").as_deref(), Some("0.5"));
        assert_eq!(canonical_decimal("-0.0").as_deref(), Some("0"));
        assert_eq!(canonical_decimal("+7").as_deref(), Some("7"));
        assert_eq!(canonical_decimal("-1.10").as_deref(), Some("-1.1"));
        assert_eq!(canonical_decimal("1e3"), None);
        assert_eq!(canonical_decimal("."), None);
        assert_eq!(canonical_decimal(""), None);
    }

    fn decimal(lexical: &str) -> Term {
        Term::typed_literal(lexical, iris::XSD_DECIMAL)
    }

    #[test]
    fn equal_decimals_move_to_both() {
        let s = Term::iri("http://x/q");
        let p = "http://hl7.org/fhir/value";
        let mut both = Graph::new();
        let mut first = Graph::new();
        let mut second = Graph::new();
        first.insert(s.clone(), p, decimal("2.00"));
        second.insert(s.clone(), p, decimal("2.0"));
        first.insert(s.clone(), "http://x/other", decimal("1.5"));
        second.insert(s.clone(), "http://x/other", decimal("1.6"));

        decimal_filter(&mut both, &mut first, &mut second);

        assert_eq!(both.len(), 1);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(first.value(&s, p), None);
    }

    #[test]
    fn strings_are_not_decimals() {
        let s = Term::iri("http://x/q");
        let mut both = Graph::new();
        let mut first = Graph::new();
        let mut second = Graph::new();
        first.insert(s.clone(), "http://x/p", Term::literal("2.00"));
        second.insert(s, "http://x/p", Term::literal("2.0"));
        decimal_filter(&mut both, &mut first, &mut second);
        assert!(both.is_empty());
        assert_eq!(first.len() + second.len(), 2);
    }
}
