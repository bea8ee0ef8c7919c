use proptest::prelude::*;

use disperse_types::{EvmAddress, NativeAmount, TxHash, WEI_PER_TOKEN};

proptest! {
    /// Any 40 hex digits behind `0x` form a valid address, in either case.
    #[test]
    fn address_accepts_any_hex_casing(bytes in prop::array::uniform20(0u8..), upper in any::<bool>()) {
        let digits = hex::encode(bytes);
        let digits = if upper { digits.to_uppercase() } else { digits };
        let text = format!("0x{digits}");
        let addr = EvmAddress::parse(&text).unwrap();
        prop_assert_eq!(addr.as_bytes(), &bytes);
        prop_assert_eq!(addr.as_str(), text.as_str());
    }

    /// Strings that are not exactly 42 characters never parse.
    #[test]
    fn address_rejects_other_lengths(len in 0usize..80) {
        prop_assume!(len != 42);
        let text: String = "0x".chars().chain(std::iter::repeat('a')).take(len).collect();
        prop_assert!(EvmAddress::parse(&text).is_err());
    }

    /// Display then parse returns the same amount.
    #[test]
    fn amount_display_roundtrip(wei in any::<u128>()) {
        let amount = NativeAmount::from_wei(wei);
        let parsed = NativeAmount::from_decimal_str(&amount.to_string()).unwrap();
        prop_assert_eq!(parsed, amount);
    }

    /// Parsing `whole.frac` agrees with integer arithmetic.
    #[test]
    fn amount_parse_matches_arithmetic(whole in 0u64..1_000_000_000, frac in 0u64..1_000_000) {
        let text = format!("{whole}.{frac:06}");
        let parsed = NativeAmount::from_decimal_str(&text).unwrap();
        let expected = u128::from(whole) * WEI_PER_TOKEN + u128::from(frac) * 1_000_000_000_000;
        prop_assert_eq!(parsed.wei(), expected);
    }

    /// TxHash display/parse roundtrip.
    #[test]
    fn tx_hash_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = TxHash::new(bytes);
        prop_assert_eq!(TxHash::parse(&hash.to_string()).unwrap(), hash);
    }
}
