use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Performance chart tabs. The mock series is the same for every range.
#[derive(Clone, Copy, Debug, Default, Display, EnumIter, Eq, PartialEq)]
pub enum ChartRange {
    #[strum(to_string = "1D")]
    Day,
    #[strum(to_string = "1W")]
    Week,
    #[default]
    #[strum(to_string = "1M")]
    Month,
    #[strum(to_string = "1Y")]
    Year,
    #[strum(to_string = "ALL")]
    All,
}

impl ChartRange {
    pub fn index(&self) -> usize {
        ChartRange::iter().position(|r| r == *self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        ChartRange::iter()
            .nth((self.index() + 1) % ChartRange::iter().len())
            .unwrap_or_default()
    }

    pub fn previous(&self) -> Self {
        let len = ChartRange::iter().len();
        ChartRange::iter()
            .nth((self.index() + len - 1) % len)
            .unwrap_or_default()
    }
}
