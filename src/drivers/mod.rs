pub mod g20s;

use crate::quirks::{Quirk, RegistryError};

/// Quirk entries for every device this crate knows how to fix.
pub fn quirks() -> Result<Vec<Quirk>, RegistryError> {
    Ok(vec![g20s::driver::quirk()?])
}
