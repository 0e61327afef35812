use crate::counter::Counter;
use crate::report::{Report, Value};

/// Count lowercased tokens, reporting them in first-seen order.
pub fn count_words<S: AsRef<str>>(words: &[S]) -> Report {
    let counter: Counter<String> = words
        .iter()
        .map(|word| word.as_ref().to_lowercase())
        .collect();

    let mut report = Report::new();
    for (word, cnt) in counter.iter() {
        report.push(word.as_str(), Value::Count(cnt));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_first_seen_order() {
        let report = count_words(&["The", "cat", "the", "dog"]);
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines, vec!["the: 2", "cat: 1", "dog: 1"]);
    }

    #[test]
    fn punctuation_is_kept() {
        let report = count_words(&["dog.", "Dog", "dog"]);
        assert_eq!(report.get("dog."), Some(&Value::Count(1)));
        assert_eq!(report.get("dog"), Some(&Value::Count(2)));
    }

    #[test]
    fn no_words() {
        let words: [&str; 0] = [];
        assert!(count_words(&words).entries().is_empty());
    }
}
