//! Dominant-era tally for preference answers.

use std::collections::HashMap;

/// Returns the most frequent era.
///
/// Ties go to the era that reached the winning count first while walking the
/// answers in order.
pub fn dominant_era<'a, I>(eras: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&'a str, usize> = HashMap::new();
    let mut best: Option<(&'a str, usize)> = None;

    for era in eras {
        let count = counts.entry(era).or_insert(0);
        *count += 1;
        if best.is_none_or(|(_, best_count)| *count > best_count) {
            best = Some((era, *count));
        }
    }

    best.map(|(era, _)| era.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_wins() {
        assert_eq!(
            dominant_era(["1989", "folklore", "1989"]),
            Some("1989".to_string())
        );
    }

    #[test]
    fn test_tie_goes_to_first_era_reaching_max() {
        assert_eq!(
            dominant_era(["folklore", "midnights"]),
            Some("folklore".to_string())
        );
        // midnights reaches 2 before folklore does
        assert_eq!(
            dominant_era(["folklore", "midnights", "midnights", "folklore"]),
            Some("midnights".to_string())
        );
    }

    #[test]
    fn test_empty_has_no_era() {
        assert_eq!(dominant_era(Vec::<&str>::new()), None);
    }
}
