pub mod bin_lookup;
pub mod client;
pub mod logo_cdn;

#[cfg(test)]
mod test_support;
