pub mod constants;
pub mod format;
pub mod templates;
pub mod toast;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
