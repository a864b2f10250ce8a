#[non_exhaustive]
pub struct SeedanceResolution;

impl SeedanceResolution {
    pub const P480: &'static str = "480p";
    pub const P720: &'static str = "720p";
    pub const P1080: &'static str = "1080p";

    pub const ALL: [&'static str; 3] = [Self::P480, Self::P720, Self::P1080];
    pub const DEFAULT: &'static str = Self::P1080;
}
