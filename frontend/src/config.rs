/// hCaptcha's public test key; always passes and never shows a puzzle.
pub const HCAPTCHA_TEST_SITEKEY: &str = "10000000-ffff-ffff-ffff-000000000001";

pub const HCAPTCHA_SCRIPT_URL: &str = "https://js.hcaptcha.com/1/api.js?render=explicit";

/// Id of the element the verification widget is rendered into.
pub const HCAPTCHA_CONTAINER_ID: &str = "consultation-hcaptcha";

/// Stand-in for the intake round trip.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

pub const CHAT_TYPING_DELAY_MS: u32 = 700;

#[cfg(debug_assertions)]
pub fn get_hcaptcha_sitekey() -> &'static str {
    HCAPTCHA_TEST_SITEKEY  // Development key when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_hcaptcha_sitekey() -> &'static str {
    option_env!("HCAPTCHA_SITEKEY").unwrap_or(HCAPTCHA_TEST_SITEKEY)
}
