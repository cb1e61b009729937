mod test_level;
pub mod test_util;
