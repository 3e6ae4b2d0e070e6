pub const CONTAINER: &str = "card";
pub const TEXT_H1: &str = "title";
pub const TEXT_BODY: &str = "hint";
pub const BUTTON_COUNTER: &str = "counter";
