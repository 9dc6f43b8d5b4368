//! Fuzz target: `KeySwitchConfig::from_bytes`
//!
//! Arbitrary bytes must either decode to a config that passes validation
//! or return a typed error.  Accepted configs must re-encode to a blob
//! that decodes to the same value.
//!
//! cargo fuzz run fuzz_config_blob

#![no_main]

use keyswitch::KeySwitchConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(cfg) = KeySwitchConfig::from_bytes(data) {
        assert!(cfg.validate().is_ok());
        let bytes = cfg.to_bytes().expect("valid config must encode");
        assert_eq!(KeySwitchConfig::from_bytes(&bytes), Ok(cfg));
    }
});
