//! Decimal fixed-point helpers used by the speed ramp.
//!
//! Values are stored as whole hundredths, so `3.50` is kept as `350`. Only
//! the two operations the game needs are provided: saturating subtraction
//! and the scale-by-ten conversion into an integer display unit.

/// Unsigned fixed-point number with two decimal fractional digits
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Centi(u16);

impl Centi {
    pub const ZERO: Self = Self(0);

    /// Build from a raw number of hundredths (`350` is `3.50`)
    pub const fn from_hundredths(hundredths: u16) -> Self {
        Self(hundredths)
    }

    /// Build from the integral part and the hundredths after the point
    ///
    /// ```
    /// use flappy::fixed::Centi;
    ///
    /// assert_eq!(Centi::new(3, 50), Centi::from_hundredths(350));
    /// ```
    pub const fn new(integral: u16, hundredths: u16) -> Self {
        Self(integral * 100 + hundredths)
    }

    pub const fn integral(self) -> u16 {
        self.0 / 100
    }

    /// Subtract, clamping at zero
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Scale by ten and drop the remaining fraction (`3.47` -> `34`)
    pub const fn to_tenths(self) -> u16 {
        self.0 / 10
    }
}

impl core::fmt::Display for Centi {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.integral(), self.0 % 100)
    }
}
