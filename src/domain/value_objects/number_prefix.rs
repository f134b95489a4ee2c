//! NumberPrefix value object - optional numbering hint for rendered items

use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// How a host should prefix item labels with their position.
///
/// This is a presentation hint only; the model never applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum NumberPrefix {
    /// No numbering
    #[default]
    None,
    /// Bare number (`1`)
    Bare,
    /// One leading zero (`01`)
    OneLeadingZero,
    /// Two leading zeros (`001`)
    TwoLeadingZeros,
}

impl NumberPrefix {
    /// Numeric code used by hosts and definition files
    pub fn as_u8(&self) -> u8 {
        match self {
            NumberPrefix::None => 0,
            NumberPrefix::Bare => 1,
            NumberPrefix::OneLeadingZero => 2,
            NumberPrefix::TwoLeadingZeros => 3,
        }
    }
}

impl TryFrom<u8> for NumberPrefix {
    type Error = MenuError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(NumberPrefix::None),
            1 => Ok(NumberPrefix::Bare),
            2 => Ok(NumberPrefix::OneLeadingZero),
            3 => Ok(NumberPrefix::TwoLeadingZeros),
            _ => Err(MenuError::InvalidPrefix { value }),
        }
    }
}

impl From<NumberPrefix> for u8 {
    fn from(prefix: NumberPrefix) -> Self {
        prefix.as_u8()
    }
}
