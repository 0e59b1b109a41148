// src/application/ports/util.rs

pub trait SlugGenerator: Send + Sync {
    /// Normalize human-readable text into a URL-safe slug form.
    fn slugify(&self, input: &str) -> String;

    /// Random alphanumeric suffix whose length grows with the attempt index,
    /// widening the candidate space as collisions accumulate. Pure in the
    /// attempt number: no shared generator state.
    fn random_suffix(&self, attempt: u32) -> String;
}
