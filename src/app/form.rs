use rust_decimal::Decimal;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{
    app::utils::parse_decimal,
    models::{NewHolding, holding::SHARES_PER_LOT},
};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum FormField {
    #[strum(to_string = "Stock Ticker")]
    Ticker,
    #[strum(to_string = "Quantity (Lots)")]
    Lots,
    #[strum(to_string = "Purchase Price (IDR)")]
    Price,
}

/// Text entered in the add-holding popup.
#[derive(Clone, Debug)]
pub struct AddHoldingForm {
    ticker: String,
    lots: String,
    price: String,
    focus: FormField,
    error: Option<String>,
}

impl Default for AddHoldingForm {
    fn default() -> Self {
        Self {
            ticker: String::new(),
            lots: String::new(),
            price: String::new(),
            focus: FormField::Ticker,
            error: None,
        }
    }
}

impl AddHoldingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Ticker => &self.ticker,
            FormField::Lots => &self.lots,
            FormField::Price => &self.price,
        }
    }

    pub fn push(&mut self, ch: char) {
        match self.focus {
            FormField::Ticker => {
                if !ch.is_whitespace() {
                    self.ticker.push(ch.to_ascii_uppercase());
                }
            }
            FormField::Lots => {
                if ch.is_ascii_digit() || ch == '.' {
                    self.lots.push(ch);
                }
            }
            FormField::Price => {
                if ch.is_ascii_digit() || ch == '.' {
                    self.price.push(ch);
                }
            }
        }
        self.error = None;
    }

    pub fn pop(&mut self) {
        match self.focus {
            FormField::Ticker => self.ticker.pop(),
            FormField::Lots => self.lots.pop(),
            FormField::Price => self.price.pop(),
        };
        self.error = None;
    }

    pub fn next_field(&mut self) {
        let fields: Vec<FormField> = FormField::iter().collect();
        let i = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(i + 1) % fields.len()];
    }

    pub fn previous_field(&mut self) {
        let fields: Vec<FormField> = FormField::iter().collect();
        let i = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(i + fields.len() - 1) % fields.len()];
    }

    /// Unparsable numbers count as zero and fail validation downstream.
    pub fn lots_value(&self) -> Decimal {
        parse_decimal(&self.lots, "lots").unwrap_or(Decimal::ZERO)
    }

    pub fn price_value(&self) -> Decimal {
        parse_decimal(&self.price, "purchase price").unwrap_or(Decimal::ZERO)
    }

    /// `None` when the product does not fit in a `Decimal`.
    pub fn estimated_investment(&self) -> Option<Decimal> {
        self.lots_value()
            .checked_mul(SHARES_PER_LOT)?
            .checked_mul(self.price_value())
    }

    pub fn to_new_holding(&self) -> NewHolding {
        NewHolding::new(
            self.ticker.clone(),
            String::new(),
            self.lots_value(),
            self.price_value(),
        )
    }
}
