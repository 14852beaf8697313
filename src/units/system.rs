use crate::units::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UnitSystem {
    SI,
    Binary,
}

impl UnitSystem {
    const SI_PREFIXES: [&str; 8] = ["", K, M, G, T, P, E, Z];
    const BINARY_PREFIXES: [&str; 8] = ["", KI, MI, GI, TI, PI, EI, ZI];

    pub fn format(&self, bytes: u64) -> String {
        match self {
            Self::SI => Self::do_format(bytes as f64, 1000.0, Self::SI_PREFIXES),
            Self::Binary => Self::do_format(bytes as f64, 1024.0, Self::BINARY_PREFIXES),
        }
    }

    fn do_format(mut value: f64, base: f64, prefixes: [&str; 8]) -> String {
        for prefix in prefixes {
            if value.abs() < base {
                return format!("{:.1} {}{}", value, prefix, B);
            }
            value /= base;
        }
        // beyond the largest prefix: no space before the Y
        format!("{:.1}{}{}", value, Y, B)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_without_prefix() {
        assert_eq!(UnitSystem::Binary.format(0), "0.0 B");
        assert_eq!(UnitSystem::SI.format(0), "0.0 B");
    }

    #[test]
    fn formats_one_step_above_base() {
        assert_eq!(UnitSystem::Binary.format(1024), "1.0 KiB");
        assert_eq!(UnitSystem::SI.format(1000), "1.0 kB");
    }

    #[test]
    fn rounds_to_one_decimal_place() {
        assert_eq!(UnitSystem::Binary.format(1536), "1.5 KiB");
        assert_eq!(UnitSystem::SI.format(1536), "1.5 kB");
    }

    #[test]
    fn stays_below_base_without_prefix() {
        assert_eq!(UnitSystem::SI.format(999), "999.0 B");
        assert_eq!(UnitSystem::Binary.format(1023), "1023.0 B");
    }

    #[test]
    fn walks_the_full_prefix_table() {
        assert_eq!(UnitSystem::Binary.format(1024 * 1024), "1.0 MiB");
        assert_eq!(UnitSystem::SI.format(2_500_000_000), "2.5 GB");
        assert_eq!(UnitSystem::Binary.format(u64::MAX), "16.0 EiB");
    }

    // u64 cannot reach past the Zi/Z prefix, so the fallback is exercised
    // through the internal f64 path.
    #[test]
    fn overflow_falls_back_to_bare_y_prefix() {
        // the largest defined prefix still gets the regular spacing
        assert_eq!(
            UnitSystem::do_format(1024f64.powi(7), 1024.0, UnitSystem::BINARY_PREFIXES),
            "1.0 ZiB"
        );
        let past_zi = 1024f64.powi(8);
        assert_eq!(
            UnitSystem::do_format(past_zi, 1024.0, UnitSystem::BINARY_PREFIXES),
            "1.0YB"
        );
        let past_z = 1000f64.powi(8) * 2.0;
        assert_eq!(
            UnitSystem::do_format(past_z, 1000.0, UnitSystem::SI_PREFIXES),
            "2.0YB"
        );
    }

    #[test]
    fn negative_values_keep_their_sign_and_do_not_panic() {
        assert_eq!(
            UnitSystem::do_format(-512.0, 1024.0, UnitSystem::BINARY_PREFIXES),
            "-512.0 B"
        );
        assert_eq!(
            UnitSystem::do_format(-2048.0, 1024.0, UnitSystem::BINARY_PREFIXES),
            "-2.0 KiB"
        );
    }
}
