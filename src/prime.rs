//! Primality check by trial division.

/// Returns true if `n` is prime.
///
/// Values `<= 1` are never prime. Otherwise trial-divides by every integer in
/// `2..=floor(sqrt(n))`. The bound is checked as `i <= n / i` so the loop never
/// overflows, even near `i64::MAX`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }

    let mut divisor = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}
