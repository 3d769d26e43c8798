//! Critical-path aggregation: parallel work finishes with its slowest branch.
//!
//! Dependencies and multi-team objectives run concurrently in this model, so
//! every aggregation here is a max. Summation would overstate lead time by
//! the number of parallel branches.

/// Buffer contributed by predecessors: the longest predecessor lead time.
///
/// Empty input gives `0`. Non-finite values are ignored.
#[must_use]
pub fn dependency_buffer(predecessor_lead_times: &[f64]) -> f64 {
    predecessor_lead_times
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(0.0, f64::max)
}

/// The max value and every id achieving it, in input order.
///
/// Ties are never broken: all tied ids are returned.
pub fn max_with_ties<'a, I>(entries: I) -> Option<(i64, Vec<&'a str>)>
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    let mut best: Option<(i64, Vec<&'a str>)> = None;
    for (id, value) in entries {
        let replaces = best.as_ref().is_none_or(|(max, _)| value > *max);
        if replaces {
            best = Some((value, vec![id]));
        } else if let Some((max, ids)) = best.as_mut() {
            if value == *max {
                ids.push(id);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn buffer_is_max_not_sum() {
        assert!((dependency_buffer(&[10.0, 3.0, 7.0]) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_buffer_is_zero() {
        assert!(dependency_buffer(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn buffer_skips_non_finite() {
        assert!((dependency_buffer(&[f64::NAN, 4.0, f64::INFINITY]) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_are_all_kept() {
        let result = max_with_ties([("a", 20), ("b", 15), ("c", 20)]);
        assert_eq!(result, Some((20, vec!["a", "c"])));
    }

    #[test]
    fn later_larger_value_replaces_earlier_ties() {
        let result = max_with_ties([("a", 5), ("b", 5), ("c", 9)]);
        assert_eq!(result, Some((9, vec!["c"])));
    }

    #[test]
    fn no_entries_no_max() {
        assert_eq!(max_with_ties(std::iter::empty()), None);
    }
}
