#[non_exhaustive]
pub struct SeedanceDuration;

impl SeedanceDuration {
    pub const SECONDS_5: &'static str = "5s";
    pub const SECONDS_10: &'static str = "10s";

    pub const ALL: [&'static str; 2] = [Self::SECONDS_5, Self::SECONDS_10];
    pub const DEFAULT: &'static str = Self::SECONDS_5;

    /// "10s" -> "10", as the prompt flag expects.
    pub fn seconds(duration: &str) -> &str {
        duration.trim_end_matches('s')
    }
}
