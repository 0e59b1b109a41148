use crate::application::ports::util::SlugGenerator;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }

    fn random_suffix(&self, attempt: u32) -> String {
        // One fresh draw per call; the suffix widens with the attempt index.
        let hex = Uuid::new_v4().simple().to_string();
        hex.chars().take(attempt.max(1) as usize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_normalizes_text() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("Hello, Wörld!"), "hello-world");
        assert_eq!(generator.slugify("   "), "");
    }

    #[test]
    fn suffix_length_tracks_attempt() {
        let generator = DefaultSlugGenerator;
        for attempt in 1..=9 {
            let suffix = generator.random_suffix(attempt);
            assert_eq!(suffix.len(), attempt as usize);
            assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
