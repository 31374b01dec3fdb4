use core::{cmp::Ordering, fmt, str::FromStr};

use crate::error::ParseOrderError;

/// The relation every adjacent pair `(a, b)` must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// `a <= b`
    #[default]
    NonDecreasing,

    /// `a < b`
    StrictlyIncreasing,

    /// `a >= b`
    NonIncreasing,

    /// `a > b`
    StrictlyDecreasing,
}

impl Order {
    /// Every mode, ascending modes first.
    pub const ALL: [Order; 4] = [
        Order::NonDecreasing,
        Order::StrictlyIncreasing,
        Order::NonIncreasing,
        Order::StrictlyDecreasing,
    ];

    /// Pick the mode for the given strictness and direction.
    pub const fn from_flags(strict: bool, descending: bool) -> Self {
        match (strict, descending) {
            (false, false) => Order::NonDecreasing,
            (true, false) => Order::StrictlyIncreasing,
            (false, true) => Order::NonIncreasing,
            (true, true) => Order::StrictlyDecreasing,
        }
    }

    /// Return whether `a.cmp(b) == ord` satisfies this mode.
    #[inline(always)]
    pub const fn holds(self, ord: Ordering) -> bool {
        match self {
            Order::NonDecreasing => !ord.is_gt(),
            Order::StrictlyIncreasing => ord.is_lt(),
            Order::NonIncreasing => !ord.is_lt(),
            Order::StrictlyDecreasing => ord.is_gt(),
        }
    }

    /// Whether ties between neighbours break the order.
    pub const fn is_strict(self) -> bool {
        matches!(self, Order::StrictlyIncreasing | Order::StrictlyDecreasing)
    }

    /// Whether the order runs from largest to smallest.
    pub const fn is_descending(self) -> bool {
        matches!(self, Order::NonIncreasing | Order::StrictlyDecreasing)
    }

    /// The mode a sequence satisfies once reversed, if it satisfied `self` before.
    pub const fn reversed(self) -> Self {
        Order::from_flags(self.is_strict(), !self.is_descending())
    }

    /// The kebab-case name accepted by `FromStr`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Order::NonDecreasing => "non-decreasing",
            Order::StrictlyIncreasing => "strictly-increasing",
            Order::NonIncreasing => "non-increasing",
            Order::StrictlyDecreasing => "strictly-decreasing",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Order::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| ParseOrderError(s.into()))
    }
}
