pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_USER_ROLE: &str = "admin";

pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;

pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;
