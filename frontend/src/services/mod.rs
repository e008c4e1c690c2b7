pub mod api;
pub mod logging;

#[cfg(test)]
pub mod test_utils;
