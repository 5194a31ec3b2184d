// ➗ Digit Reducer - repeated digit sums down to a single digit
// Master numbers 11, 22 and 33 stop the reduction

// ============================================================================
// MASTER NUMBERS
// ============================================================================

pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

pub fn is_master(n: u64) -> bool {
    MASTER_NUMBERS.iter().any(|&m| m as u64 == n)
}

// ============================================================================
// REDUCTION
// ============================================================================

/// Sum of the decimal digits of `n`
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to 1-9, keeping 11, 22 and 33 as they are.
///
/// The master check runs before every digit-sum pass, so 29 stops at 11
/// (29 → 11) and 1993 stops at 22 (1993 → 22). `reduce(0)` is 0.
pub fn reduce(n: u64) -> u32 {
    let mut n = n;
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    // Loop exit guarantees n <= 33
    n as u32
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digits_unchanged() {
        for n in 0..=9 {
            assert_eq!(reduce(n), n as u32);
        }
    }

    #[test]
    fn test_master_numbers_are_fixed_points() {
        assert_eq!(reduce(11), 11);
        assert_eq!(reduce(22), 22);
        assert_eq!(reduce(33), 33);
    }

    #[test]
    fn test_master_checked_at_every_pass() {
        // 29 → 11, stop
        assert_eq!(reduce(29), 11);
        // 1993 → 22, stop
        assert_eq!(reduce(1993), 22);
        // 4499 → 26 → 8
        assert_eq!(reduce(4499), 8);
        // 3999 → 30 → 3
        assert_eq!(reduce(3999), 3);
    }

    #[test]
    fn test_plain_reductions() {
        assert_eq!(reduce(10), 1);
        assert_eq!(reduce(20), 2);
        assert_eq!(reduce(36), 9);
        assert_eq!(reduce(44), 8);
        assert_eq!(reduce(99), 9);
    }

    #[test]
    fn test_reduce_is_idempotent() {
        for n in 0..5000 {
            let once = reduce(n);
            assert_eq!(reduce(once as u64), once, "n = {}", n);
        }
    }

    #[test]
    fn test_reduce_range() {
        for n in 1..5000 {
            let r = reduce(n);
            assert!((1..=9).contains(&r) || MASTER_NUMBERS.contains(&r), "n = {} -> {}", n, r);
        }
    }

    #[test]
    fn test_reduce_large_input() {
        // 18446744073709551615 digits sum to 87 → 15 → 6
        assert_eq!(reduce(u64::MAX), 6);
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(1980), 18);
        assert_eq!(digit_sum(20250101), 11);
    }
}
