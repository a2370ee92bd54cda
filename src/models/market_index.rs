use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct MarketIndex {
    name: String,
    value: String,
    change: String,
    is_positive: bool,
}
