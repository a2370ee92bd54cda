use rust_decimal_macros::dec;

use crate::models::{ChartPoint, Holding, MarketIndex};

pub fn initial_holdings() -> Vec<Holding> {
    vec![
        Holding::new(
            String::from("1"),
            String::from("BBCA"),
            String::from("Bank Central Asia"),
            dec!(12.4),
            dec!(1240),
            dec!(9100),
            dec!(10250),
            dec!(12.5),
        ),
        Holding::new(
            String::from("2"),
            String::from("TLKM"),
            String::from("Telkom Indonesia"),
            dec!(50),
            dec!(5000),
            dec!(3950),
            dec!(3850),
            dec!(-2.1),
        ),
        Holding::new(
            String::from("3"),
            String::from("ASII"),
            String::from("Astra International"),
            dec!(8),
            dec!(800),
            dec!(4900),
            dec!(5125),
            dec!(4.3),
        ),
        Holding::new(
            String::from("4"),
            String::from("GOTO"),
            String::from("GoTo Gojek Tokopedia"),
            dec!(500),
            dec!(50000),
            dec!(84),
            dec!(84),
            dec!(0.0),
        ),
    ]
}

pub fn market_indices() -> Vec<MarketIndex> {
    vec![
        MarketIndex::new(
            String::from("IHSG"),
            String::from("7.234,12"),
            String::from("+0.45%"),
            true,
        ),
        MarketIndex::new(
            String::from("LQ45"),
            String::from("952,40"),
            String::from("-0.12%"),
            false,
        ),
        MarketIndex::new(
            String::from("USD/IDR"),
            String::from("15.742"),
            String::from("+0.02%"),
            true,
        ),
    ]
}

pub fn performance_chart() -> Vec<ChartPoint> {
    [
        ("1 MAY", dec!(120)),
        ("5 MAY", dec!(135)),
        ("10 MAY", dec!(155)),
        ("15 MAY", dec!(145)),
        ("20 MAY", dec!(130)),
        ("25 MAY", dec!(165)),
        ("30 MAY", dec!(150)),
    ]
    .into_iter()
    .map(|(date, value)| ChartPoint::new(date.to_string(), value))
    .collect()
}
