use std::fmt::{self, Display, Formatter};
use std::num::ParseFloatError;
use std::ops::{Add, Mul};
use std::str::FromStr;

use log_domain::LogDomain;
use num_traits::{One, Zero};
use serde::{Serialize, Serializer};

/// A probability, stored in log space. Reads and prints as a plain number
/// in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Probability(LogDomain<f64>);

impl Probability {
    pub fn new(p: f64) -> Result<Self, String> {
        if p <= 1.0 {
            LogDomain::new(p).map(Probability)
        } else {
            Err(format!("{} is not a probability (i.e. not in the interval [0,1]).", p))
        }
    }

    pub fn value(&self) -> f64 {
        self.0.value()
    }
}

impl FromStr for Probability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let p: f64 = s.parse().map_err(|e: ParseFloatError| e.to_string())?;
        Probability::new(p)
    }
}

impl Display for Probability {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Add for Probability {
    type Output = Probability;
    fn add(self, other: Self) -> Self::Output {
        Probability(self.0 + other.0)
    }
}

impl Mul for Probability {
    type Output = Probability;
    fn mul(self, other: Self) -> Self::Output {
        Probability(self.0 * other.0)
    }
}

impl Zero for Probability {
    fn zero() -> Self {
        Probability(LogDomain::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Probability {
    fn one() -> Self {
        Probability(LogDomain::one())
    }
}

impl Serialize for Probability {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.value())
    }
}
