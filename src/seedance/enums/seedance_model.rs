#[non_exhaustive]
pub struct SeedanceModel;

impl SeedanceModel {
    pub const PRO_1_0: &'static str = "doubao-seedance-1-0-pro-250528";
    pub const LITE_I2V_1_0: &'static str = "doubao-seedance-1-0-lite-i2v-250428";

    pub const ALL: [&'static str; 2] = [Self::PRO_1_0, Self::LITE_I2V_1_0];
    pub const DEFAULT: &'static str = Self::PRO_1_0;
}
