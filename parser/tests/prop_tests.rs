use proptest::prelude::*;

use disperse_parser::{parse, ParseErrorKind, ParseMode};
use disperse_types::NativeAmount;

fn address() -> impl Strategy<Value = String> {
    (prop::array::uniform20(0u8..), any::<bool>()).prop_map(|(bytes, upper)| {
        let digits: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        let digits = if upper { digits.to_uppercase() } else { digits };
        format!("0x{digits}")
    })
}

/// Positive amounts with up to six decimals, as text.
fn amount() -> impl Strategy<Value = String> {
    (0u64..1_000_000, 0u32..1_000_000)
        .prop_filter("must be positive", |(w, f)| *w > 0 || *f > 0)
        .prop_map(|(whole, frac)| format!("{whole}.{frac:06}"))
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![",", ":", " ", "\t", " , ", "  "])
}

fn paired_line() -> impl Strategy<Value = String> {
    (address(), separator(), amount()).prop_map(|(a, s, v)| format!("{a}{s}{v}"))
}

fn malformed_line() -> impl Strategy<Value = (String, ParseErrorKind)> {
    prop_oneof![
        "[g-z]{1,20}".prop_map(|s| (s, ParseErrorKind::InvalidFormat)),
        address().prop_map(|a| (format!("{a},"), ParseErrorKind::MissingField)),
        "[0-9a-f]{1,39}".prop_map(|d| (format!("0x{d},1"), ParseErrorKind::InvalidAddress)),
        address().prop_map(|a| (format!("{a},0"), ParseErrorKind::InvalidAmount)),
    ]
}

proptest! {
    /// Well-formed lines give one entry each, in order, without an error.
    #[test]
    fn well_formed_lines_all_parse(lines in prop::collection::vec(paired_line(), 1..40)) {
        let text = lines.join("\n");
        let result = parse(&text, ParseMode::Paired, None);
        prop_assert_eq!(result.error, None);
        prop_assert_eq!(result.len(), lines.len());
        for (entry, line) in result.entries.iter().zip(&lines) {
            prop_assert!(line.starts_with(entry.address.as_str()));
        }
    }

    /// One bad line among N good ones leaves N entries and that line's error.
    #[test]
    fn one_malformed_line_is_isolated(
        lines in prop::collection::vec(paired_line(), 1..30),
        (bad, kind) in malformed_line(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut all = lines.clone();
        all.insert(at.index(lines.len() + 1), bad);
        let result = parse(&all.join("\n"), ParseMode::Paired, None);
        prop_assert_eq!(result.len(), lines.len());
        prop_assert_eq!(result.error, Some(kind));
        prop_assert_eq!(result.issues.len(), 1);
    }

    /// The total equals the exact sum and does not depend on line order.
    #[test]
    fn total_is_order_independent(
        (lines, shuffled) in prop::collection::vec(paired_line(), 1..30)
            .prop_flat_map(|lines| (Just(lines.clone()), Just(lines).prop_shuffle())),
    ) {
        let result = parse(&lines.join("\n"), ParseMode::Paired, None);
        let expected = NativeAmount::checked_sum(result.entries.iter().map(|e| &e.amount)).unwrap();
        prop_assert_eq!(result.total_amount, expected);

        let reordered = parse(&shuffled.join("\n"), ParseMode::Paired, None);
        prop_assert_eq!(reordered.total_amount, result.total_amount);
    }

    /// Uniform mode: N addresses times the shared amount.
    #[test]
    fn uniform_total_is_count_times_amount(
        addresses in prop::collection::vec(address(), 1..30),
        value in 1u64..1_000_000,
    ) {
        let shared = value.to_string();
        let result = parse(&addresses.join("\n"), ParseMode::UniformValue, Some(&shared));
        prop_assert_eq!(result.error, None);
        prop_assert_eq!(result.len(), addresses.len());
        prop_assert_eq!(
            result.total_amount,
            NativeAmount::from_wei(u128::from(value) * 1_000_000_000_000_000_000 * addresses.len() as u128)
        );
    }

    /// Parsing never panics and is deterministic, whatever the input.
    #[test]
    fn arbitrary_text_is_handled(text in ".{0,400}", uniform in any::<bool>()) {
        let mode = if uniform { ParseMode::UniformValue } else { ParseMode::Paired };
        let first = parse(&text, mode, Some("1"));
        let second = parse(&text, mode, Some("1"));
        prop_assert_eq!(first, second);
    }
}
