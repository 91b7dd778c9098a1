//! Replacement planning and template dissection

use std::collections::HashMap;
use std::fmt::Display;

use tracing::trace;

use crate::error::FormatError;
use crate::syntax::{Occurrence, References};

/// Working copy of the caller's arguments, in their original order
#[derive(Debug, Default)]
pub(crate) struct Arguments {
    entries: Vec<(String, String)>,
    used: Vec<bool>,
    index: HashMap<String, usize>,
}

impl Arguments {
    /// Convert every value to text up front
    ///
    /// A repeated key keeps its first position and its last value.
    pub fn collect<I, K, V>(args: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        let mut arguments = Self::default();
        for (name, value) in args {
            let name = name.as_ref();
            let value = value.to_string();
            match arguments.index.get(name) {
                Some(&i) => arguments.entries[i].1 = value,
                None => {
                    arguments.index.insert(name.to_string(), arguments.entries.len());
                    arguments.entries.push((name.to_string(), value));
                    arguments.used.push(false);
                }
            }
        }
        arguments
    }

    /// Look up `name` and mark it consumed
    fn take(&mut self, name: &str) -> Option<&str> {
        let i = *self.index.get(name)?;
        if self.used[i] {
            return None;
        }
        self.used[i] = true;
        Some(self.entries[i].1.as_str())
    }

    /// Names never consumed, in original order
    fn unused(&self) -> Vec<String> {
        self.entries
            .iter()
            .zip(&self.used)
            .filter(|(_, used)| !**used)
            .map(|((name, _), _)| name.clone())
            .collect()
    }
}

/// One placeholder occurrence paired with the text that replaces it
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanEntry<'r> {
    pub occurrence: &'r Occurrence,
    pub replacement: String,
}

impl PlanEntry<'_> {
    pub fn name(&self) -> &str {
        &self.occurrence.name
    }
}

/// Pair every referenced occurrence with its argument, sorted by position
pub(crate) fn build_plan<'r>(
    references: &'r References,
    mut args: Arguments,
    partial_ok: bool,
    extra_ok: bool,
) -> Result<Vec<PlanEntry<'r>>, FormatError> {
    let mut plan = Vec::new();

    for (name, occurrences) in references.iter() {
        let Some(replacement) = args.take(name) else {
            if partial_ok {
                continue;
            }
            let span = occurrences.first().map(|o| o.span.clone()).unwrap_or_default();
            return Err(FormatError::missing(name, span));
        };

        plan.extend(occurrences.iter().map(|occurrence| PlanEntry {
            occurrence,
            replacement: replacement.to_string(),
        }));
    }

    if !extra_ok {
        let names = args.unused();
        if !names.is_empty() {
            return Err(FormatError::UnusedArguments { names });
        }
    }

    plan.sort_by_key(|entry| entry.occurrence.span.start);
    trace!(entries = plan.len(), "built replacement plan");
    Ok(plan)
}

/// Literal text around the planned placeholders
///
/// Element `i` is the text before `plan[i]`; the last element is the text
/// after the final placeholder, so the result always has `plan.len() + 1`
/// elements. Occurrences left out of the plan stay inside the literals.
pub(crate) fn dissect<'t>(template: &'t str, plan: &[PlanEntry]) -> Vec<&'t str> {
    let mut literals = Vec::with_capacity(plan.len() + 1);
    let mut prev_end = 0;
    for entry in plan {
        literals.push(&template[prev_end..entry.occurrence.span.start]);
        prev_end = entry.occurrence.span.end;
    }
    literals.push(&template[prev_end..]);
    literals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Recognizer, RegexRecognizer};
    use pretty_assertions::assert_eq;

    fn refs(template: &str) -> References {
        RegexRecognizer::new(r"\$\{(\w+)\}")
            .unwrap()
            .references(template)
    }

    #[test]
    fn test_plan_sorted_by_position() {
        let references = refs("${b}${a}${b}");
        let plan = build_plan(&references, Arguments::collect([("a", 1), ("b", 2)]), false, true)
            .unwrap();

        let names: Vec<&str> = plan.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
        let replacements: Vec<&str> = plan.iter().map(|e| e.replacement.as_str()).collect();
        assert_eq!(replacements, vec!["2", "1", "2"]);
    }

    #[test]
    fn test_missing_key_names_first_occurrence() {
        let references = refs("${present} ${missing} ${missing}");
        let err = build_plan(&references, Arguments::collect([("present", "x")]), false, true)
            .unwrap_err();

        match err {
            FormatError::MissingKey { name, span } => {
                assert_eq!(name, "missing");
                assert_eq!(span, 11..21);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_partial_skips_missing() {
        let references = refs("${present} ${missing}");
        let plan = build_plan(&references, Arguments::collect([("present", "x")]), true, true)
            .unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].name(), "present");
    }

    #[test]
    fn test_unused_in_original_order() {
        let references = refs("${a}");
        let args = Arguments::collect([("c", "1"), ("a", "2"), ("b", "3")]);
        let err = build_plan(&references, args, false, false).unwrap_err();
        assert_eq!(err.to_string(), "unused arguments: c, b");
    }

    #[test]
    fn test_repeated_argument_keeps_last_value() {
        let args = Arguments::collect([("a", "1"), ("b", "2"), ("a", "3")]);
        assert_eq!(
            args.entries,
            vec![("a".to_string(), "3".to_string()), ("b".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn test_dissect_alternates_literals() {
        let template = "<${a}|${b}>";
        let references = refs(template);
        let plan = build_plan(&references, Arguments::collect([("a", 1), ("b", 2)]), false, true)
            .unwrap();
        assert_eq!(dissect(template, &plan), vec!["<", "|", ">"]);
    }

    #[test]
    fn test_dissect_keeps_skipped_placeholders() {
        let template = "${a} ${b}";
        let references = refs(template);
        let plan = build_plan(&references, Arguments::collect([("b", 2)]), true, true).unwrap();
        assert_eq!(dissect(template, &plan), vec!["${a} ", ""]);
    }

    #[test]
    fn test_dissect_empty_template() {
        assert_eq!(dissect("", &[]), vec![""]);
    }
}
