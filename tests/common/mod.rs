//! Shared helpers for integration tests

#![allow(dead_code)]

use std::time::Duration;

use paygate::{Configuration, ConfigurationBuilder, Environment, Gateway, http::Http};

/// A sandbox configuration with key-pair credentials pointed at a test
/// server.
pub fn config(base_url: &str) -> Configuration {
    builder(base_url).build().unwrap()
}

pub fn builder(base_url: &str) -> ConfigurationBuilder {
    Configuration::builder()
        .environment(Environment::Sandbox)
        .keys("pub_key", "priv_key")
        .timeout(Duration::from_secs(5))
        .base_url(base_url)
}

pub fn http(base_url: &str) -> Http {
    Http::new(config(base_url)).unwrap()
}

pub fn gateway(base_url: &str) -> Gateway {
    Gateway::new(config(base_url)).unwrap()
}

/// A representative XML response body for a sub-merchant account.
pub fn sub_merchant_account_xml() -> &'static str {
    "<sub-merchant-account>\
       <id>sub_123</id>\
       <status>pending</status>\
       <business>\
         <legal-name>Acme &amp; Sons</legal-name>\
       </business>\
     </sub-merchant-account>"
}
