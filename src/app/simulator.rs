use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest simulated move away from the purchase price, in basis points.
const MAX_DRIFT_BPS: i64 = 200;

/// Source of the mock market move applied to a freshly added holding.
pub trait PriceSimulator {
    /// Relative move as a fraction, within [-0.02, 0.02].
    fn drift(&mut self) -> Decimal;

    fn simulate_price(&mut self, purchase_price: Decimal) -> Decimal {
        (purchase_price * (Decimal::ONE + self.drift()))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

#[derive(Clone, Debug)]
pub struct RandomDrift<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomDrift<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDrift<rand::rngs::ThreadRng> {
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> PriceSimulator for RandomDrift<R> {
    fn drift(&mut self) -> Decimal {
        let bps = self.rng.random_range(-MAX_DRIFT_BPS..=MAX_DRIFT_BPS);
        Decimal::new(bps, 4)
    }
}

/// Always applies the same move. Useful where the price must be predictable.
#[derive(Clone, Copy, Debug)]
pub struct FixedDrift(pub Decimal);

impl PriceSimulator for FixedDrift {
    fn drift(&mut self) -> Decimal {
        self.0
    }
}
