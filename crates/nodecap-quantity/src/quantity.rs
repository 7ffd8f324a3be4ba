//! The `Quantity` value type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::{QuantityError, QuantityResult};

/// The unit family a quantity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// CPU time, counted in millicores.
    Cpu,
    /// Memory, counted in bytes.
    Memory,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Cpu => f.write_str("cpu"),
            ResourceKind::Memory => f.write_str("memory"),
        }
    }
}

const MILLIS_PER_CORE: u64 = 1_000;

/// Binary suffixes, largest first so display picks the coarsest exact unit.
const BINARY_SUFFIXES: &[(&str, u64)] = &[
    ("Ti", 1 << 40),
    ("Gi", 1 << 30),
    ("Mi", 1 << 20),
    ("Ki", 1 << 10),
];

const DECIMAL_SUFFIXES: &[(&str, u64)] = &[
    ("T", 1_000_000_000_000),
    ("G", 1_000_000_000),
    ("M", 1_000_000),
    ("k", 1_000),
];

/// An exact resource amount tagged with its unit family.
///
/// CPU is held in integer millicores and memory in integer bytes, so
/// addition and comparison never lose precision. `Quantity` is `Copy`; a
/// copied value shares no state with the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantity {
    kind: ResourceKind,
    raw: u64,
}

impl Quantity {
    /// The additive identity for a unit family.
    pub fn zero(kind: ResourceKind) -> Quantity {
        Quantity { kind, raw: 0 }
    }

    pub fn millicores(millis: u64) -> Quantity {
        Quantity {
            kind: ResourceKind::Cpu,
            raw: millis,
        }
    }

    pub fn cores(cores: u64) -> Quantity {
        Quantity {
            kind: ResourceKind::Cpu,
            raw: cores * MILLIS_PER_CORE,
        }
    }

    pub fn bytes(bytes: u64) -> Quantity {
        Quantity {
            kind: ResourceKind::Memory,
            raw: bytes,
        }
    }

    pub fn gibibytes(gib: u64) -> Quantity {
        Quantity {
            kind: ResourceKind::Memory,
            raw: gib << 30,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// Add two quantities of the same unit family.
    ///
    /// This is the checkable form of `+`: mixing families surfaces as
    /// `QuantityError::UnitMismatch` instead of a panic.
    pub fn checked_add(self, rhs: Quantity) -> QuantityResult<Quantity> {
        if self.kind != rhs.kind {
            return Err(QuantityError::UnitMismatch {
                left: self.kind,
                right: rhs.kind,
            });
        }
        Ok(Quantity {
            kind: self.kind,
            raw: self.raw.saturating_add(rhs.raw),
        })
    }

    /// Parse a human literal into a quantity of the given family.
    ///
    /// CPU accepts whole or fractional cores ("2", "0.5") and millicores
    /// ("800m"). Memory accepts plain bytes ("1048576"), binary suffixes
    /// ("512Mi", "2Gi"), and decimal suffixes ("500M", "1G"). Fractional
    /// parts round up to the next whole base unit.
    pub fn parse(kind: ResourceKind, literal: &str) -> QuantityResult<Quantity> {
        let raw = match kind {
            ResourceKind::Cpu => parse_cpu(literal),
            ResourceKind::Memory => parse_memory(literal),
        };
        match raw {
            Some(raw) => Ok(Quantity { kind, raw }),
            None => Err(QuantityError::InvalidLiteral {
                kind,
                literal: literal.to_string(),
            }),
        }
    }
}

fn parse_cpu(literal: &str) -> Option<u64> {
    // Millicore form is integral: "800m", never "0.5m".
    if let Some(millis) = literal.strip_suffix('m') {
        return parse_integer(millis);
    }
    parse_scaled(literal, MILLIS_PER_CORE)
}

fn parse_memory(literal: &str) -> Option<u64> {
    for (suffix, scale) in BINARY_SUFFIXES {
        if let Some(number) = literal.strip_suffix(suffix) {
            return parse_scaled(number, *scale);
        }
    }
    for (suffix, scale) in DECIMAL_SUFFIXES {
        if let Some(number) = literal.strip_suffix(suffix) {
            return parse_scaled(number, *scale);
        }
    }
    parse_integer(literal)
}

fn parse_integer(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Parse a non-negative decimal number and multiply it by `scale` exactly.
fn parse_scaled(number: &str, scale: u64) -> Option<u64> {
    let (int_part, frac_part) = match number.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (number, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    if frac_part.len() > 9 {
        return None;
    }

    let int: u128 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };
    let mut total = int.checked_mul(u128::from(scale))?;
    if !frac_part.is_empty() {
        let frac: u128 = frac_part.parse().ok()?;
        let divisor = 10u128.pow(frac_part.len() as u32);
        total = total.checked_add((frac * u128::from(scale)).div_ceil(divisor))?;
    }
    u64::try_from(total).ok()
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ResourceKind::Cpu => {
                if self.raw % MILLIS_PER_CORE == 0 {
                    write!(f, "{}", self.raw / MILLIS_PER_CORE)
                } else {
                    write!(f, "{}m", self.raw)
                }
            }
            ResourceKind::Memory => {
                if self.raw != 0 {
                    for (suffix, scale) in BINARY_SUFFIXES {
                        if self.raw % scale == 0 {
                            return write!(f, "{}{}", self.raw / scale, suffix);
                        }
                    }
                }
                write!(f, "{}", self.raw)
            }
        }
    }
}

impl PartialOrd for Quantity {
    /// Total order by magnitude within one unit family.
    ///
    /// Panics if the operands' unit families differ; cross-family
    /// comparison is a wiring defect, never valid data.
    fn partial_cmp(&self, other: &Quantity) -> Option<Ordering> {
        assert_eq!(
            self.kind, other.kind,
            "cannot compare {} against {}",
            self.kind, other.kind
        );
        Some(self.raw.cmp(&other.raw))
    }
}

impl Add for Quantity {
    type Output = Quantity;

    /// Panics if the operands' unit families differ; use `checked_add`
    /// where the families are not statically guaranteed.
    fn add(self, rhs: Quantity) -> Quantity {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(err) => panic!("{err}"),
        }
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        *self = *self + rhs;
    }
}

impl serde::Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
