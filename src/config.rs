use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Duration of the fade/slide transition applied when a region is revealed.
pub const REVEAL_TRANSITION_MS: u32 = 1000;

/// Duration of the width transition on a metric bar fill.
pub const FILL_TRANSITION_MS: u32 = 1000;

pub const BOOKING_URL: &str =
    "https://www.halaxy.com/profile/mr-nick-belvedere/exercise-physiologist/1148711";
pub const REFERRALS_EMAIL: &str = "referrals@prjctlegacy.com";
pub const INFO_EMAIL: &str = "info@prjctlegacy.com";
pub const INSTAGRAM_URL: &str = "https://instagram.com/prjct_legacy";
pub const LINKEDIN_URL: &str = "https://linkedin.com/company/prjct-legacy";

pub fn mailto(address: &str) -> String {
    format!("mailto:{}", address)
}
