use anchor_lang::prelude::*;

use crate::errors::PrizePoolErrorCode;

pub const COUNTRY_SLOTS: usize = 8;

/// Country lotteries a ticket picks from. The first seven are the main
/// countries; `FR` is the separately compared bonus number.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum CountryCode {
    CA = 0,
    IT = 1,
    MX = 2,
    NZ = 3,
    KR = 4,
    IE = 5,
    UK = 6,
    FR = 7,
}

impl CountryCode {
    pub const MAIN: [CountryCode; 7] = [
        CountryCode::CA,
        CountryCode::IT,
        CountryCode::MX,
        CountryCode::NZ,
        CountryCode::KR,
        CountryCode::IE,
        CountryCode::UK,
    ];

    pub const BONUS: CountryCode = CountryCode::FR;

    pub const ALL: [CountryCode; COUNTRY_SLOTS] = [
        CountryCode::CA,
        CountryCode::IT,
        CountryCode::MX,
        CountryCode::NZ,
        CountryCode::KR,
        CountryCode::IE,
        CountryCode::UK,
        CountryCode::FR,
    ];

    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Highest number that country's lottery draws.
    pub fn max_number(self) -> u8 {
        match self {
            CountryCode::CA => 49,
            CountryCode::IT => 90,
            CountryCode::MX => 56,
            CountryCode::NZ => 40,
            CountryCode::KR => 45,
            CountryCode::IE => 47,
            CountryCode::UK => 59,
            CountryCode::FR => 10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CountryCode::CA => "CA",
            CountryCode::IT => "IT",
            CountryCode::MX => "MX",
            CountryCode::NZ => "NZ",
            CountryCode::KR => "KR",
            CountryCode::IE => "IE",
            CountryCode::UK => "UK",
            CountryCode::FR => "FR",
        }
    }
}

/// ---------------------------------------------------------------------------
/// CountryNumbers
/// ---------------------------------------------------------------------------
///
/// Country code → number mapping, stored as one slot per `CountryCode`.
/// A slot value of `0` means the country is absent. Used both for a ticket's
/// selections and for a draw's winning numbers, so keys are unique by
/// construction and there is exactly one representation to match against.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountryNumbers {
    pub numbers: [u8; COUNTRY_SLOTS],
}

impl CountryNumbers {
    pub const SIZE: usize = COUNTRY_SLOTS;

    pub fn from_pairs(pairs: &[(CountryCode, u8)]) -> Self {
        let mut out = Self::default();
        for (code, n) in pairs {
            out.numbers[code.slot()] = *n;
        }
        out
    }

    #[inline]
    pub fn get(&self, code: CountryCode) -> Option<u8> {
        match self.numbers[code.slot()] {
            0 => None,
            n => Some(n),
        }
    }

    pub fn set(&mut self, code: CountryCode, number: u8) {
        self.numbers[code.slot()] = number;
    }

    /// Number of countries present.
    pub fn len(&self) -> usize {
        self.numbers.iter().filter(|n| **n != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every present value must be inside its country's range.
    pub fn validate_selection(&self) -> Result<()> {
        for code in CountryCode::ALL {
            if let Some(n) = self.get(code) {
                require!(n <= code.max_number(), PrizePoolErrorCode::InvalidSelection);
            }
        }
        require!(!self.is_empty(), PrizePoolErrorCode::InvalidSelection);
        Ok(())
    }

    /// Posted winning numbers: present values in range and the bonus drawn.
    /// A missing main country is tolerated; it just cannot be matched.
    pub fn validate_winning(&self) -> Result<()> {
        for code in CountryCode::ALL {
            if let Some(n) = self.get(code) {
                require!(n <= code.max_number(), PrizePoolErrorCode::InvalidWinningNumbers);
            }
        }
        require!(
            self.get(CountryCode::BONUS).is_some(),
            PrizePoolErrorCode::InvalidWinningNumbers
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_numbers_size_matches_serialization() {
        let n = CountryNumbers::from_pairs(&[(CountryCode::CA, 49), (CountryCode::FR, 3)]);
        let mut bytes = Vec::new();
        n.serialize(&mut bytes).unwrap();
        assert_eq!(bytes.len(), CountryNumbers::SIZE);
    }

    #[test]
    fn zero_slot_reads_as_absent() {
        let n = CountryNumbers::from_pairs(&[(CountryCode::IT, 90)]);
        assert_eq!(n.get(CountryCode::IT), Some(90));
        assert_eq!(n.get(CountryCode::MX), None);
        assert_eq!(n.len(), 1);
    }

    #[test]
    fn selection_ranges_follow_country() {
        let ok = CountryNumbers::from_pairs(&[(CountryCode::IT, 90), (CountryCode::FR, 10)]);
        assert!(ok.validate_selection().is_ok());

        let too_high_ca = CountryNumbers::from_pairs(&[(CountryCode::CA, 50)]);
        assert!(too_high_ca.validate_selection().is_err());

        let too_high_fr = CountryNumbers::from_pairs(&[(CountryCode::FR, 11)]);
        assert!(too_high_fr.validate_selection().is_err());

        assert!(CountryNumbers::default().validate_selection().is_err());
    }

    #[test]
    fn winning_numbers_require_bonus() {
        let no_bonus = CountryNumbers::from_pairs(&[(CountryCode::CA, 1)]);
        assert!(no_bonus.validate_winning().is_err());

        // A missing main country is fine
        let partial = CountryNumbers::from_pairs(&[(CountryCode::CA, 1), (CountryCode::FR, 4)]);
        assert!(partial.validate_winning().is_ok());
    }
}
