//! Choice of the particle species which are paired up by the mass finder

use crate::{
    particle::{ANTIMUON, ELECTRON, MUON, POSITRON},
    Result,
};
use eyre::{ensure, eyre, Error, WrapErr};
use std::str::FromStr;

/// Pair of particle species whose leading members are combined
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairSelection {
    /// PDG code of the particle side of the pair
    pub particle: i32,

    /// PDG code of the antiparticle side of the pair
    pub antiparticle: i32,
}
//
impl PairSelection {
    /// Select a pair of species, checking that it makes sense
    pub fn new(particle: i32, antiparticle: i32) -> Result<Self> {
        // PDG code 0 is reserved and never designates a particle
        ensure!(
            particle != 0 && antiparticle != 0,
            "PDG code 0 does not designate a particle"
        );

        // Each particle must fall into at most one side of the pair
        ensure!(
            particle != antiparticle,
            "Both sides of the pair select the same species ({})",
            particle
        );

        let selection = Self {
            particle,
            antiparticle,
        };
        log::debug!("Selected particle pair {:?}", selection);
        Ok(selection)
    }

    /// Muon + antimuon
    pub const fn muons() -> Self {
        Self {
            particle: MUON,
            antiparticle: ANTIMUON,
        }
    }

    /// Electron + positron
    pub const fn electrons() -> Self {
        Self {
            particle: ELECTRON,
            antiparticle: POSITRON,
        }
    }
}

impl Default for PairSelection {
    fn default() -> Self {
        Self::muons()
    }
}

impl FromStr for PairSelection {
    type Err = Error;

    /// Parse a "<particle>,<antiparticle>" pair of PDG codes
    fn from_str(s: &str) -> Result<Self> {
        let mut items = s.split(',').map(str::trim);

        // This closure fetches the next PDG code, tagging it with the side of
        // the pair which it is supposed to fill to ease error reporting.
        let mut next_item = |name: &'static str| -> Result<SelectionItem> {
            items
                .next()
                .map(|data| SelectionItem::new(name, data))
                .ok_or_else(|| eyre!("Missing PDG code of the {}", name))
        };

        let particle = next_item("particle")?.parse()?;
        let antiparticle = next_item("antiparticle")?.parse()?;
        ensure!(
            items.next().is_none(),
            "Expected exactly two PDG codes in {:?}",
            s
        );

        Self::new(particle, antiparticle)
    }
}

/// A PDG code from a selection string, tagged with the side of the pair which
/// it is supposed to map for error reporting purposes.
struct SelectionItem<'data> {
    name: &'static str,
    data: &'data str,
}
//
impl<'data> SelectionItem<'data> {
    /// Build a selection item from a side tag and raw string data
    fn new(name: &'static str, data: &'data str) -> Self {
        Self { name, data }
    }

    /// Parse this data as a PDG code
    fn parse(self) -> Result<i32> {
        self.data
            .parse::<i32>()
            .wrap_err_with(|| format!("Could not parse PDG code of the {}", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_muons() {
        let selection = PairSelection::default();
        assert_eq!(selection.particle, 13);
        assert_eq!(selection.antiparticle, -13);
    }

    #[test]
    fn parses_pdg_code_pairs() {
        assert_eq!(
            "13,-13".parse::<PairSelection>().unwrap(),
            PairSelection::muons()
        );
        assert_eq!(
            " 11 , -11 ".parse::<PairSelection>().unwrap(),
            PairSelection::electrons()
        );
    }

    #[test]
    fn reports_which_code_failed_to_parse() {
        let err = "13,mu+".parse::<PairSelection>().unwrap_err();
        assert!(format!("{}", err).contains("antiparticle"));

        let err = "13".parse::<PairSelection>().unwrap_err();
        assert!(format!("{}", err).contains("Missing PDG code of the antiparticle"));

        assert!("13,-13,22".parse::<PairSelection>().is_err());
    }

    #[test]
    fn rejects_meaningless_pairs() {
        assert!(PairSelection::new(13, 13).is_err());
        assert!(PairSelection::new(0, -13).is_err());
        assert!("22,22".parse::<PairSelection>().is_err());
        assert!(PairSelection::new(211, -211).is_ok());
    }
}
