//! Read model for the counter screen.

use std::fmt;

use super::state::CounterState;

/// Colour hint for the count label: green when the count is prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountColour {
    Green,
    Red,
}

impl CountColour {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

/// Everything the presentation layer needs to draw the counter screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub count: i64,
    pub colour: CountColour,
    pub is_prime: bool,
    pub is_favourite_prime: bool,
}

impl CounterView {
    pub fn from_state(state: &CounterState) -> Self {
        let is_prime = state.is_prime();
        Self {
            count: state.count,
            colour: if is_prime {
                CountColour::Green
            } else {
                CountColour::Red
            },
            is_prime,
            is_favourite_prime: state.is_favourite_prime(),
        }
    }

    /// Answer shown on the "Is this prime?" sheet.
    pub fn prime_verdict(&self) -> &'static str {
        if self.is_prime {
            "YES"
        } else {
            "NO"
        }
    }

    /// Label of the favourite toggle button.
    pub fn favourite_action(&self) -> &'static str {
        if self.is_favourite_prime {
            "Remove from favourite primes?"
        } else {
            "Add to favourite primes?"
        }
    }

    pub fn nth_prime_question(&self) -> String {
        format!("What is the {} prime?", ordinal(self.count))
    }
}

impl fmt::Display for CounterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[-] {} [+] ({})", self.count, self.colour.as_str())?;
        writeln!(f, "Is this prime? {}", self.prime_verdict())?;
        writeln!(f, "{}", self.favourite_action())?;
        writeln!(f, "{}", self.nth_prime_question())
    }
}

/// English ordinal for `n`: 1st, 2nd, 3rd, 4th, 11th, 21st, -2nd.
pub fn ordinal(n: i64) -> String {
    let magnitude = n.unsigned_abs();
    let suffix = match (magnitude % 10, magnitude % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
