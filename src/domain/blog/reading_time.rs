use once_cell::sync::Lazy;
use regex::Regex;

/// Average reading speed used for estimates
pub const WORDS_PER_MINUTE: usize = 200;

static TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Estimated minutes to read `content`
///
/// Markup is stripped before counting whitespace-separated words. The
/// result is rounded up and never below one minute.
pub fn reading_time_minutes(content: &str) -> u32 {
    let text = TAGS.replace_all(content, " ");
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(count: usize) -> String {
        vec!["word"; count].join(" ")
    }

    #[test]
    fn empty_content_reads_in_one_minute() {
        assert_eq!(reading_time_minutes(""), 1);
    }

    #[test]
    fn rounds_up_partial_minutes() {
        assert_eq!(reading_time_minutes(&words(200)), 1);
        assert_eq!(reading_time_minutes(&words(201)), 2);
        assert_eq!(reading_time_minutes(&words(1000)), 5);
    }

    #[test]
    fn markup_is_not_counted() {
        let html = format!("<p class=\"lead\">{}</p><br/><img src=\"a.png\">", words(400));
        assert_eq!(reading_time_minutes(&html), 2);
    }

    #[test]
    fn adjacent_tags_do_not_join_words() {
        assert_eq!(reading_time_minutes("<b>one</b><i>two</i>"), 1);
        let text = TAGS.replace_all("<b>one</b><i>two</i>", " ");
        assert_eq!(text.split_whitespace().count(), 2);
    }
}
