//! Built-in sample document served by `GET /summarize/{index}`.

/// The one sample document, at index 1.
pub const SAMPLE_DOC: &str = "Media playback is not supported on this device\n\
The QPR striker scored on his home debut to boost his hopes of making the squad for the Euro 2016 finals.\n\
\"Conor has strength, power and composure - he looks like he is going to be an asset for us,\" said O'Neill.\n\
\"It's a great achievement to go unbeaten in 10 games and now we just want to build on it.\"\n\
Washington struck his first goal for Northern Ireland before the break, while Roy Carroll kept out Milivoje Novakovic's penalty in the second half.";

/// Human-written reference summary of [`SAMPLE_DOC`], returned alongside the
/// generated one so callers can compare.
pub const SAMPLE_GROUND_TRUTH: &str = "Northern Ireland boss Michael O'Neill praised \
scorer Conor Washington as a 1-0 win over Slovenia set a new record of 10 games unbeaten.";

/// Look up a sample document and its reference summary by index.
#[must_use]
pub fn sample_document(index: i64) -> Option<(&'static str, &'static str)> {
    (index == 1).then_some((SAMPLE_DOC, SAMPLE_GROUND_TRUTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_index_one_is_defined() {
        assert!(sample_document(1).is_some());
        assert!(sample_document(0).is_none());
        assert!(sample_document(2).is_none());
        assert!(sample_document(-1).is_none());
    }

    #[test]
    fn sample_document_is_long_enough_to_summarize() {
        let (doc, ground_truth) = sample_document(1).unwrap();
        assert!(doc.chars().count() >= crate::core::summarize::MIN_TEXT_CHARS);
        assert!(!ground_truth.is_empty());
    }
}
